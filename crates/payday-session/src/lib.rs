//! Session store for the Payday Picks client.
//!
//! The store is an explicit context object: create it once with
//! [`SessionStore::load`] and hand an `Arc` of it to everything that needs
//! the signed-in user. It is the only shared mutable state in the client.

pub mod backends;
pub mod events;
pub mod store;

pub use backends::{open_storage, FileStore, MemoryStore};
pub use events::SessionEvent;
pub use store::SessionStore;
