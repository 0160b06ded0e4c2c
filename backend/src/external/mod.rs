//! External API integrations

pub mod generation;

pub use generation::GenerationClient;
