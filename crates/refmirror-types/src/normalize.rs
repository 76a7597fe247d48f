//! Ref-name normalization.

/// Strip the repository-qualifying prefix from a ref name, leaving the
/// bare name used as a lookup key and in push refspecs.
///
/// Webhook payloads and local git both qualify refs: `refs/heads/main`,
/// `remotes/origin/main`. A leading `refs/` is dropped, then either the
/// `remotes/<remote>/` or the `heads/` qualifier. Anything else (tags
/// included) passes through with only the `refs/` prefix removed, so
/// `refs/tags/v1.0.0` normalizes to `tags/v1.0.0`.
pub fn normalize_ref(raw: &str) -> &str {
    let rest = raw.strip_prefix("refs/").unwrap_or(raw);
    if let Some(remote_qualified) = rest.strip_prefix("remotes/") {
        match remote_qualified.split_once('/') {
            Some((_remote, bare)) => bare,
            None => remote_qualified,
        }
    } else {
        rest.strip_prefix("heads/").unwrap_or(rest)
    }
}
