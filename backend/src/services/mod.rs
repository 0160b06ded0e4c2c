//! Business logic services for the BloomSync backend

pub mod advisory;
pub mod climate;
pub mod farmer;

pub use advisory::AdvisoryService;
pub use climate::ClimateService;
pub use farmer::FarmerInputService;
