//! Textual encoding of a [`RemoteRef`] used by the Redis backend.
//!
//! Both the keys and the set members in the mirror store are strings of
//! the form `<ref>:<repository>`. The repository half may itself contain
//! colons (URLs with ports, for instance), so decoding splits at the
//! *first* colon only.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::remote::RemoteRef;

/// A string that could not be decoded as a wire-encoded ref.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{input:?} does not resemble a wire-encoded ref (expected \"<ref>:<repository>\")")]
pub struct WireRefError {
    /// The offending input, echoed back for diagnostics.
    pub input: String,
}

/// A [`RemoteRef`] in its `<ref>:<repository>` wire form.
///
/// `Display` produces the wire string; `FromStr` decodes it. An input
/// with no colon at all (which includes the empty string) is malformed.
/// Empty `ref` or `repository` components are preserved as-is rather
/// than rejected, so decoding the encoding of any `RemoteRef` yields it
/// back exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WireRef(pub RemoteRef);

impl From<RemoteRef> for WireRef {
    fn from(inner: RemoteRef) -> Self {
        Self(inner)
    }
}

impl From<WireRef> for RemoteRef {
    fn from(wire: WireRef) -> Self {
        wire.0
    }
}

impl fmt::Display for WireRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.ref_name, self.0.repository)
    }
}

impl FromStr for WireRef {
    type Err = WireRefError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.split_once(':') {
            Some((ref_name, repository)) => Ok(Self(RemoteRef::new(repository, ref_name))),
            None => Err(WireRefError {
                input: input.to_string(),
            }),
        }
    }
}
