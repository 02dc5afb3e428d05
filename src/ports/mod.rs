/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod backend;
pub mod random;
pub mod store;

#[cfg(test)]
pub mod mocks;

pub use backend::FacilitationServicePort;
pub use random::RandomPort;
pub use store::MeetingStorePort;
