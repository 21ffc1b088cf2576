use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// What to do when a required argument is absent from a `GetPrompt` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentPolicy {
    /// Reject the call with `PromptArgumentMissing`.
    #[default]
    Strict,
    /// Substitute the argument's fallback (empty if it has none).
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptArgumentSpec {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Used when the argument is absent and the policy allows it.
    pub fallback: Option<String>,
}

impl PromptArgumentSpec {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            fallback: None,
        }
    }

    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}

/// A named template. `template` and `description` may both contain
/// `{argument}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDescriptor {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgumentSpec>,
    pub template: String,
}

impl PromptDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            template: template.into(),
        }
    }

    pub fn argument(mut self, spec: PromptArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    pub fn summary(&self) -> PromptSummary {
        PromptSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            arguments: self
                .arguments
                .iter()
                .map(|a| PromptArgumentSummary {
                    name: a.name.clone(),
                    description: a.description.clone(),
                    required: a.required,
                })
                .collect(),
        }
    }

    /// Resolve every declared argument to the value that will be substituted.
    /// Returns the name of the first required argument that is missing when
    /// the policy is strict.
    pub fn resolve<'a>(
        &'a self,
        supplied: &'a HashMap<String, String>,
        policy: ArgumentPolicy,
    ) -> std::result::Result<HashMap<&'a str, &'a str>, &'a str> {
        let mut values = HashMap::with_capacity(self.arguments.len());
        for arg in &self.arguments {
            let value = match supplied.get(&arg.name) {
                Some(v) => v.as_str(),
                None if arg.required && policy == ArgumentPolicy::Strict => {
                    return Err(arg.name.as_str());
                }
                None => arg.fallback.as_deref().unwrap_or(""),
            };
            values.insert(arg.name.as_str(), value);
        }
        Ok(values)
    }

    fn declares(&self, name: &str) -> bool {
        self.arguments.iter().any(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSummary {
    pub name: String,
    pub description: String,
    pub arguments: Vec<PromptArgumentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptArgumentSummary {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Prompts keyed by name, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    prompts: Vec<PromptDescriptor>,
}

impl PromptCatalog {
    /// Fails on duplicate names and on placeholders that name no declared
    /// argument, in either the template or the description.
    pub fn new(prompts: Vec<PromptDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for prompt in &prompts {
            if !seen.insert(prompt.name.as_str()) {
                return Err(FolioError::DuplicatePrompt(prompt.name.clone()));
            }
            for text in [&prompt.template, &prompt.description] {
                if let Some(token) = placeholders(text).find(|t| !prompt.declares(t)) {
                    return Err(FolioError::UndeclaredPlaceholder {
                        prompt: prompt.name.clone(),
                        placeholder: token.to_string(),
                    });
                }
            }
        }
        Ok(Self { prompts })
    }

    pub fn list_all(&self) -> &[PromptDescriptor] {
        &self.prompts
    }

    pub fn find(&self, name: &str) -> Option<&PromptDescriptor> {
        self.prompts.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// If `s` starts with `{ident}`, return the identifier.
fn leading_placeholder(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('{')?;
    let end = rest.find('}')?;
    let ident = &rest[..end];
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) && chars.all(is_ident_char) => Some(ident),
        _ => None,
    }
}

/// All `{ident}` tokens in `text`, left to right.
pub fn placeholders(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('{')
        .filter_map(move |(i, _)| leading_placeholder(&text[i..]))
}

/// Replace each `{ident}` found in `values` with its value, in one pass.
/// Tokens not in `values` and all other brace text are copied verbatim.
/// Substituted values are never scanned again.
pub fn substitute(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match leading_placeholder(tail).and_then(|ident| values.get(ident).map(|v| (ident, v))) {
            Some((ident, value)) => {
                out.push_str(value);
                rest = &tail[ident.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    fn supplied(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn greeting() -> PromptDescriptor {
        PromptDescriptor::new(
            "create-component",
            "Create a {component_type}",
            "Hello {name}, create a {component_type}",
        )
        .argument(PromptArgumentSpec::required("name", "Who is asking"))
        .argument(
            PromptArgumentSpec::optional("component_type", "What to build")
                .with_fallback("component"),
        )
    }

    #[test]
    fn substitutes_all_declared_tokens() {
        let text = substitute(
            "Hello {name}, create a {component_type}",
            &values(&[("name", "X"), ("component_type", "widget")]),
        );
        assert_eq!(text, "Hello X, create a widget");
        assert_eq!(placeholders(&text).count(), 0);
    }

    #[test]
    fn repeated_tokens_all_replaced() {
        let text = substitute("{a}-{a}-{a}", &values(&[("a", "x")]));
        assert_eq!(text, "x-x-x");
    }

    #[test]
    fn other_braces_left_verbatim() {
        let template = "fn main() { let v = {}; } {unknown} {name} {1abc} {";
        let text = substitute(template, &values(&[("name", "N")]));
        assert_eq!(text, "fn main() { let v = {}; } {unknown} N {1abc} {");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let text = substitute("{a} {b}", &values(&[("a", "{b}"), ("b", "B")]));
        assert_eq!(text, "{b} B");
    }

    #[test]
    fn placeholders_finds_identifiers_only() {
        let found: Vec<_> = placeholders("{a} { b } {c-d} {} {_e} {{f}}").collect();
        assert_eq!(found, ["a", "c-d", "_e", "f"]);
    }

    #[test]
    fn strict_policy_rejects_missing_required() {
        let prompt = greeting();
        let args = supplied(&[("component_type", "widget")]);
        assert_eq!(prompt.resolve(&args, ArgumentPolicy::Strict).unwrap_err(), "name");
    }

    #[test]
    fn lenient_policy_uses_empty_for_required_without_fallback() {
        let prompt = greeting();
        let args = supplied(&[]);
        let resolved = prompt.resolve(&args, ArgumentPolicy::Lenient).unwrap();
        assert_eq!(resolved["name"], "");
        assert_eq!(resolved["component_type"], "component");
    }

    #[test]
    fn missing_optional_uses_fallback_under_both_policies() {
        let prompt = greeting();
        let args = supplied(&[("name", "X")]);
        for policy in [ArgumentPolicy::Strict, ArgumentPolicy::Lenient] {
            let resolved = prompt.resolve(&args, policy).unwrap();
            assert_eq!(
                substitute(&prompt.template, &resolved),
                "Hello X, create a component"
            );
        }
    }

    #[test]
    fn catalog_rejects_undeclared_placeholder() {
        let prompt = PromptDescriptor::new("p", "desc", "Use {missing}");
        let err = PromptCatalog::new(vec![prompt]).unwrap_err();
        assert!(matches!(
            err,
            FolioError::UndeclaredPlaceholder { ref placeholder, .. } if placeholder == "missing"
        ));
    }

    #[test]
    fn catalog_rejects_undeclared_placeholder_in_description() {
        let prompt = PromptDescriptor::new("p", "About {topic}", "plain");
        assert!(PromptCatalog::new(vec![prompt]).is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_names() {
        let err = PromptCatalog::new(vec![greeting(), greeting()]).unwrap_err();
        assert!(matches!(err, FolioError::DuplicatePrompt(ref n) if n == "create-component"));
    }

    #[test]
    fn summary_exposes_argument_spec_without_fallbacks() {
        let summary = greeting().summary();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["arguments"][0]["required"], true);
        assert_eq!(json["arguments"][1]["name"], "component_type");
        assert!(json["arguments"][1].get("fallback").is_none());
    }

    #[test]
    fn policy_parses_lowercase() {
        assert_eq!(
            serde_plain::from_str::<ArgumentPolicy>("lenient").unwrap(),
            ArgumentPolicy::Lenient
        );
        assert_eq!(serde_plain::to_string(&ArgumentPolicy::Strict).unwrap(), "strict");
    }
}
