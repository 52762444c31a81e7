//! Tag synthesis from a development build manifest.

use std::path::Path;

use crate::asset_paths::resolve_manifest_url;
use crate::bundle::manifest::{load_manifest, locate_manifest};
use crate::config::EmbedConfig;
use crate::error::EmbedResult;
use crate::models::{BuildManifest, ManifestEntry};

/// Build head tags for a bundle from its development manifest.
///
/// Returns an empty string when the bundle has no manifest or the manifest has no entry
/// module. A manifest that exists but cannot be read or parsed is an error.
pub fn development_head_tags(
  config: &EmbedConfig,
  bundle_root: &Path,
  prefix: &str,
) -> EmbedResult<String> {
  let Some(manifest_path) = locate_manifest(config, bundle_root) else {
    tracing::debug!(root = %bundle_root.display(), "no build manifest found");
    return Ok(String::new());
  };
  tracing::debug!(path = %manifest_path.display(), "using build manifest");

  let manifest = load_manifest(&manifest_path)?;
  Ok(tags_from_manifest(config, &manifest, prefix))
}

/// Synthesize preload, stylesheet and entry script tags from a parsed manifest.
///
/// Order: one `modulepreload` per direct import of the entry module, then its stylesheets,
/// then the entry script last. Only the entry's own imports are followed.
pub fn tags_from_manifest(config: &EmbedConfig, manifest: &BuildManifest, prefix: &str) -> String {
  let Some((entry_key, entry)) = manifest.entry_module() else {
    tracing::warn!(prefix, "build manifest has no entry module");
    return String::new();
  };

  let mut tags = Vec::with_capacity(entry.imports.len() + entry.css.len() + 1);

  for import in &entry.imports {
    match manifest.get(import).and_then(ManifestEntry::output_file) {
      Some(file) => tags.push(format!(
        r#"<link rel="modulepreload" href="{}">"#,
        resolve_manifest_url(config, prefix, file)
      )),
      None => tracing::debug!(entry = entry_key, import, "import has no output file"),
    }
  }

  for css in &entry.css {
    tags.push(format!(
      r#"<link rel="stylesheet" href="{}">"#,
      resolve_manifest_url(config, prefix, css)
    ));
  }

  if let Some(file) = entry.output_file() {
    tags.push(format!(
      r#"<script type="module" src="{}"></script>"#,
      resolve_manifest_url(config, prefix, file)
    ));
  }

  tags.join("\n")
}
