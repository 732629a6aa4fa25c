pub mod config;
pub mod license;
pub mod scaffold;
