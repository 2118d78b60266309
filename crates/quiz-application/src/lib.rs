//! Application layer: the session store, the test engine and the request
//! router that ties them to incoming queries.

pub mod engine;
pub mod router;
pub mod session;

pub use engine::{Reply, TestEngine};
pub use router::RequestRouter;
pub use session::InMemorySessionStore;
