//! Vault path helpers.
//!
//! Vault paths are forward-slash-delimited relative paths. They are stored
//! and compared unencoded; percent-encoding happens only at URL construction
//! time, segment by segment, so the `/` separators are never encoded.

/// Percent-encode a vault path for use in a URL, preserving `/` separators.
pub fn encode_vault_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// The folder component of a vault path: everything before the final `/`.
/// Root-level paths have an empty folder.
pub fn folder_of(path: &str) -> &str {
    path.rsplit_once('/').map(|(folder, _)| folder).unwrap_or("")
}

/// The leaf name of a vault path: the final path segment.
pub fn leaf_name(path: &str) -> &str {
    path.rsplit_once('/').map(|(_, leaf)| leaf).unwrap_or(path)
}
