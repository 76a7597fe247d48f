//! Mirror discovery for refmirror.
//!
//! This crate answers one question: given a ref that just changed, which
//! other refs must receive the same update? The answer comes back as a
//! stream, because a single push event can fan out to many mirrors and
//! the caller wants to start replicating the first one before the last
//! is known.
//!
//! # Architecture
//!
//! - [`MirrorFinder`] is the lookup contract: stream every known mirror
//!   of a ref into an [`mpsc`](tokio::sync::mpsc) channel, honoring a
//!   [`CancellationToken`](tokio_util::sync::CancellationToken) at every
//!   blocking point. Dropping the sender is the close signal, which makes
//!   "closed exactly once, on every exit path" automatic.
//! - [`InMemoryMirrorFinder`] serves associations loaded from
//!   configuration out of a map behind a reader/writer lock.
//! - [`MergeFinder`] composes any number of finders into one, relaying
//!   their streams in order — a concatenation, never an interleaving.
//!
//! Remote-store backends (Redis) implement the same trait from their own
//! crates.
//!
//! # Modules
//!
//! - [`error`] — [`FindError`] and the crate [`Result`] alias
//! - [`traits`] — the [`MirrorFinder`] contract and the [`deliver`]
//!   primitive every backend sends through
//! - [`memory`] — [`InMemoryMirrorFinder`]
//! - [`merge`] — [`MergeFinder`]

pub mod error;
pub mod memory;
pub mod merge;
pub mod traits;

pub use error::{FindError, Result};
pub use memory::InMemoryMirrorFinder;
pub use merge::MergeFinder;
pub use traits::{deliver, MirrorFinder};
