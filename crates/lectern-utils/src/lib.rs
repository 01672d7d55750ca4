pub mod loader;
pub mod net;
pub mod tracing;
