pub mod address;
pub mod billing;
pub mod business;
pub mod catalog;
pub mod company;
pub mod consents;
pub mod person;
pub mod products;
pub mod state;
pub mod step;

// Re-exports
pub use address::*;
pub use billing::*;
pub use business::*;
pub use catalog::*;
pub use company::*;
pub use consents::*;
pub use person::*;
pub use products::*;
pub use state::*;
pub use step::*;
