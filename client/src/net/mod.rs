//! Network adapters.

pub mod firestore;
