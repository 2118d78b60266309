//! Session store implementations.

mod store;

pub use store::InMemorySessionStore;
