pub mod diff;
pub mod gomod;
