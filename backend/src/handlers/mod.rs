//! HTTP handlers for the BloomSync backend

mod advisory;
mod climate;
mod farmer;
mod health;

pub use advisory::*;
pub use climate::*;
pub use farmer::*;
pub use health::*;
