//! Locating and loading the development build manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::config::EmbedConfig;
use crate::error::{EmbedError, EmbedResult};
use crate::models::{BuildManifest, ManifestEntry};

/// Find the build manifest inside a bundle root.
///
/// Candidates from the configuration are tried in order (`.vite/manifest.json`, then the older
/// `_nuxt/manifest.json` layout). Returns `None` when no candidate exists.
pub fn locate_manifest(config: &EmbedConfig, bundle_root: &Path) -> Option<PathBuf> {
  config
    .manifest_candidates
    .iter()
    .map(|candidate| bundle_root.join(candidate))
    .find(|path| path.is_file())
}

/// Load a build manifest from disk.
pub fn load_manifest(path: &Path) -> EmbedResult<BuildManifest> {
  let content = fs::read_to_string(path).map_err(|source| EmbedError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse_manifest(path, &content)
}

/// Parse manifest JSON, keeping records in document order.
///
/// Values that are not objects are skipped. Invalid JSON, a non-object document, or a record
/// whose fields carry the wrong types is reported as a parse error.
pub fn parse_manifest(path: &Path, content: &str) -> EmbedResult<BuildManifest> {
  let parse_error = |source| EmbedError::ManifestParse {
    path: path.to_path_buf(),
    source,
  };

  let document: Map<String, Value> = serde_json::from_str(content).map_err(parse_error)?;
  let mut entries = Vec::with_capacity(document.len());
  for (key, value) in document {
    if !value.is_object() {
      tracing::debug!(key, "skipping non-object manifest value");
      continue;
    }
    let entry: ManifestEntry = serde_json::from_value(value).map_err(parse_error)?;
    entries.push((key, entry));
  }

  Ok(BuildManifest::from_entries(entries))
}
