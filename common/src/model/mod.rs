pub mod configuration;
pub mod language;
pub mod session;
