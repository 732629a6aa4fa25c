pub mod models;
pub mod parser;
pub mod validator;

// Re-exports for convenience
pub use models::UserConfig;
pub use parser::ConfigParser;
pub use validator::ConfigValidator;
