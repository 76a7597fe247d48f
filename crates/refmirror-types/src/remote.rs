//! The [`RemoteRef`] value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One branch or tag on one repository.
///
/// Used both as the key of a mirror lookup ("this ref just changed") and
/// as its results ("push to these refs"). Equality is structural and
/// byte-for-byte on both fields; no normalization happens at this layer,
/// so `refs/heads/main` and `main` are different refs. Callers normalize
/// with [`crate::normalize_ref`] before using webhook-supplied names as
/// lookup keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteRef {
    /// Clone URL (or any other identifier) of the repository.
    pub repository: String,
    /// Bare ref name, e.g. `main` or `tags/v1.0.0`.
    #[serde(rename = "ref")]
    pub ref_name: String,
}

impl RemoteRef {
    pub fn new(repository: impl Into<String>, ref_name: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ref_name: ref_name.into(),
        }
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.repository, self.ref_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = RemoteRef::new("https://example.com/repo", "main");
        let b = RemoteRef::new("https://example.com/repo", "main");
        let c = RemoteRef::new("https://example.com/repo", "refs/heads/main");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(RemoteRef::new("r", "main"), 1);
        assert_eq!(map.get(&RemoteRef::new("r", "main")), Some(&1));
        assert_eq!(map.get(&RemoteRef::new("r", "dev")), None);
    }

    #[test]
    fn json_uses_ref_field_name() {
        let subject = RemoteRef::new("https://example.com/repo", "main");
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"repository": "https://example.com/repo", "ref": "main"})
        );

        let back: RemoteRef = serde_json::from_value(json).unwrap();
        assert_eq!(back, subject);
    }
}
