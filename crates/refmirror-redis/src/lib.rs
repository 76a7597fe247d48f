//! Redis-backed mirror discovery.
//!
//! Mirror associations live in Redis as one set per original ref: the
//! key is the wire form of the original (`<ref>:<repository>`) and each
//! member is the wire form of a mirror. Operators maintain the sets out
//! of band (`SADD master:https://… master:https://…`); this crate only
//! reads them.
//!
//! # Modules
//!
//! - [`error`] — [`RedisFinderError`] for connection-setup failures
//! - [`finder`] — [`RedisMirrorFinder`], the
//!   [`MirrorFinder`](refmirror_finder::MirrorFinder) implementation

pub mod error;
pub mod finder;

pub use error::{RedisFinderError, Result};
pub use finder::RedisMirrorFinder;
