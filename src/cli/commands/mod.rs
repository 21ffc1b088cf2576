pub mod check;
pub mod config;
pub mod list;
pub mod prompt;
pub mod prompts;
pub mod read;
pub mod serve;
