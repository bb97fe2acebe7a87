pub mod lifetime;
pub mod logging;

pub use logging::init_tracing;
