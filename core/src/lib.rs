//! idoll-core: snapshot capture and checkpoint resume for the Idoll
//! interactive-fiction interpreter.
//!
//! Capture path: [`snapshot::Snapshot::capture`] reads a
//! [`live::LiveState`] and produces a portable document, resolving the
//! checkpoint label and the scene's catalog ordinal on the way. Restore
//! path: [`restore::prepare_restore`] reconciles that document against
//! the current live state and emits a directive the host applies. The
//! store and the export codec are thin transports on either side, and
//! [`session::SaveSession`] ties the whole surface together.

pub mod catalog;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod export;
pub mod live;
pub mod merge;
pub mod restore;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod types;
pub mod value;
