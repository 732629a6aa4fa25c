pub mod command_injector;
pub mod models;
pub mod project_initializer;

// Re-exports for convenience
pub use command_injector::CommandInjector;
pub use models::{Command, Project};
pub use project_initializer::ProjectInitializer;
