pub mod file_materializer;
pub mod template_funcs;
pub mod template_renderer;

// Re-exports for convenience
pub use file_materializer::{FileMaterializer, OverwritePolicy};
pub use template_renderer::TemplateRenderer;
