pub mod dispatch;
pub mod loader;
pub mod manifest;
pub mod prompt;
pub mod registry;
