#[cfg(feature = "cli")]
pub mod handlers;
pub mod methods;
