//! Core value types shared by every refmirror crate.
//!
//! A [`RemoteRef`] names one branch or tag on one repository and is the
//! unit of everything this service does: lookups are keyed by a
//! `RemoteRef`, and their results are more `RemoteRef`s. This crate also
//! owns the two pure string transformations around it:
//!
//! - [`wire`] — the `<ref>:<repository>` textual form used to store refs
//!   in Redis
//! - [`normalize`] — stripping the `refs/heads/`-style prefixes webhook
//!   payloads qualify refs with
//!
//! # Modules
//!
//! - [`remote`] — The [`RemoteRef`] value type
//! - [`wire`] — [`WireRef`] encoding/decoding and [`WireRefError`]
//! - [`normalize`] — [`normalize_ref`]

pub mod normalize;
pub mod remote;
pub mod wire;

pub use normalize::normalize_ref;
pub use remote::RemoteRef;
pub use wire::{WireRef, WireRefError};
