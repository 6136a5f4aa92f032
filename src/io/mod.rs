//! Persistence for index cache snapshots

pub mod snapshot;
