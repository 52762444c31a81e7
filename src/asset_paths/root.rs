use std::path::{Component, Path, PathBuf};

use crate::config::EmbedConfig;

/// Whether `prefix` names a single directory inside a bundle root.
///
/// Separators, `.`/`..` and absolute paths would let a prefix escape the configured roots.
pub fn is_bundle_segment(prefix: &str) -> bool {
    if prefix.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(prefix).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Candidate directories for a bundle, in lookup order.
///
/// The collected production copy comes first when a static root is configured, followed by
/// the source tree copy. `prefix` must satisfy [`is_bundle_segment`].
pub fn bundle_root_candidates(config: &EmbedConfig, prefix: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(static_root) = &config.production_asset_root {
        candidates.push(static_root.join(prefix));
    }
    candidates.push(config.source_tree_base.join(prefix));
    candidates
}

/// Resolve the directory holding a bundle's build artifacts.
///
/// Returns the first candidate that exists as a directory. When none does, the first
/// candidate is returned anyway so the missing artifact surfaces as an absent file further
/// down rather than as a resolution failure.
pub fn resolve_bundle_root(config: &EmbedConfig, prefix: &str) -> PathBuf {
    let mut candidates = bundle_root_candidates(config, prefix);
    let index = candidates
        .iter()
        .position(|candidate| candidate.is_dir())
        .unwrap_or(0);
    let root = candidates.swap_remove(index);
    tracing::debug!(prefix, root = %root.display(), "resolved bundle root");
    root
}
