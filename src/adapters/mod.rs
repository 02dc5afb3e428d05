/// Adapters - concrete implementations of the port traits
pub mod backend;
pub mod random;
pub mod store;

pub use backend::SimulatedFacilitationService;
pub use random::{SeededRandom, ThreadRandom};
pub use store::InMemoryMeetingStore;
