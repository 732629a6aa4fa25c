pub mod registry;

// Re-exports for convenience
pub use registry::{License, LicenseRegistry};
