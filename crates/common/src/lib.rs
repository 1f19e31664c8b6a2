pub mod settings;
pub mod token;

#[cfg(feature = "ssr")]
mod logging;

#[cfg(feature = "ssr")]
pub use logging::init_logging;
