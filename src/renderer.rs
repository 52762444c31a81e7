//! Entry points used by host templates to embed a client bundle.

use std::path::PathBuf;

use crate::asset_paths::{is_bundle_segment, resolve_bundle_root};
use crate::bundle::{development_head_tags, load_index_fragments};
use crate::config::EmbedConfig;
use crate::error::EmbedResult;
use crate::models::HtmlFragmentSet;

/// Renders head and mount markup for named client bundles.
///
/// Every call re-resolves the bundle root and re-reads its artifacts, so a rebuilt bundle is
/// picked up without restarting the host. The renderer holds no other state and can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct BundleRenderer {
  config: EmbedConfig,
}

impl BundleRenderer {
  /// Create a renderer for the provided configuration.
  pub fn new(config: EmbedConfig) -> Self {
    Self { config }
  }

  /// Configuration the renderer was built with.
  pub fn config(&self) -> &EmbedConfig {
    &self.config
  }

  /// Directory the renderer reads a bundle's artifacts from.
  pub fn bundle_root(&self, prefix: &str) -> PathBuf {
    resolve_bundle_root(&self.config, prefix)
  }

  /// Markup for the page `<head>`.
  ///
  /// Production mode extracts it from the exported `index.html`; development mode
  /// synthesizes it from the build manifest. Missing artifacts and prefixes that are not a
  /// single path segment yield an empty string.
  pub fn render_head_tags(&self, prefix: &str) -> EmbedResult<String> {
    if !accepts_prefix(prefix) {
      return Ok(String::new());
    }
    let root = self.bundle_root(prefix);
    if self.config.development_mode {
      return development_head_tags(&self.config, &root, prefix);
    }

    let fragments = load_index_fragments(&self.config, &root, prefix)?;
    if fragments.head_tags.is_empty() {
      tracing::warn!(prefix, root = %root.display(), "bundle has no exported head tags");
    }
    Ok(fragments.head_tags)
  }

  /// Markup for the page `<body>`.
  ///
  /// Mount markup only exists in an exported `index.html`, so both modes read it from there
  /// and yield an empty string when the bundle was never exported.
  pub fn render_mount_tags(&self, prefix: &str) -> EmbedResult<String> {
    if !accepts_prefix(prefix) {
      return Ok(String::new());
    }
    let root = self.bundle_root(prefix);
    Ok(load_index_fragments(&self.config, &root, prefix)?.mount_tags)
  }

  /// Both fragments for a bundle, as the two entry points would return them.
  pub fn render(&self, prefix: &str) -> EmbedResult<HtmlFragmentSet> {
    Ok(HtmlFragmentSet {
      head_tags: self.render_head_tags(prefix)?,
      mount_tags: self.render_mount_tags(prefix)?,
    })
  }
}

fn accepts_prefix(prefix: &str) -> bool {
  let valid = is_bundle_segment(prefix);
  if !valid {
    tracing::warn!(prefix, "ignoring bundle prefix that is not a single path segment");
  }
  valid
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::Path;
  use tempfile::tempdir;

  const INDEX: &str = concat!(
    r#"<link rel="stylesheet" href="/_nuxt/entry.css">"#,
    r#"<script type="module" src="/_nuxt/entry.js"></script>"#,
    r#"<div id="__nuxt"></div>"#,
  );

  fn renderer(source: &Path, development_mode: bool) -> BundleRenderer {
    BundleRenderer::new(EmbedConfig {
      source_tree_base: source.to_path_buf(),
      development_mode,
      ..EmbedConfig::default()
    })
  }

  #[test]
  fn production_mode_reads_exported_index() {
    let dir = tempdir().unwrap();
    let bundle = dir.path().join("nuxt-inline");
    fs::create_dir_all(&bundle).unwrap();
    fs::write(bundle.join("index.html"), INDEX).unwrap();

    let fragments = renderer(dir.path(), false).render("nuxt-inline").unwrap();
    assert_eq!(
      fragments.head_tags,
      concat!(
        r#"<link rel="stylesheet" href="/static/nuxt-inline/_nuxt/entry.css">"#,
        "\n",
        r#"<script type="module" src="/static/nuxt-inline/_nuxt/entry.js"></script>"#,
      )
    );
    assert_eq!(fragments.mount_tags, r#"<div id="__nuxt"></div>"#);
  }

  #[test]
  fn development_mode_uses_manifest_for_head_and_index_for_mount() {
    let dir = tempdir().unwrap();
    let bundle = dir.path().join("nuxt-inline");
    fs::create_dir_all(bundle.join(".vite")).unwrap();
    fs::write(bundle.join("index.html"), INDEX).unwrap();
    fs::write(
      bundle.join(".vite/manifest.json"),
      r#"{ "main.ts": { "file": "main.js", "isEntry": true } }"#,
    )
    .unwrap();

    let renderer = renderer(dir.path(), true);
    assert_eq!(
      renderer.render_head_tags("nuxt-inline").unwrap(),
      r#"<script type="module" src="/static/nuxt-inline/.vite/main.js"></script>"#
    );
    assert_eq!(
      renderer.render_mount_tags("nuxt-inline").unwrap(),
      r#"<div id="__nuxt"></div>"#
    );
  }

  #[test]
  fn unknown_bundles_render_empty_in_both_modes() {
    let dir = tempdir().unwrap();
    for development_mode in [false, true] {
      let fragments = renderer(dir.path(), development_mode).render("missing").unwrap();
      assert!(fragments.is_empty());
    }
  }

  #[test]
  fn stray_file_named_like_the_bundle_renders_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("nuxt-inline"), b"not a directory").unwrap();

    for development_mode in [false, true] {
      let renderer = renderer(dir.path(), development_mode);
      assert_eq!(renderer.render_head_tags("nuxt-inline").unwrap(), "");
      assert_eq!(renderer.render_mount_tags("nuxt-inline").unwrap(), "");
    }
  }

  #[test]
  fn prefixes_escaping_the_bundle_roots_render_empty() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();

    let renderer = renderer(&source, false);
    for prefix in ["..", "../source/..", dir.path().to_str().unwrap()] {
      assert_eq!(renderer.render_head_tags(prefix).unwrap(), "");
      assert_eq!(renderer.render_mount_tags(prefix).unwrap(), "");
    }
  }

  #[test]
  fn picks_up_rebuilt_bundles_between_calls() {
    let dir = tempdir().unwrap();
    let renderer = renderer(dir.path(), false);
    assert_eq!(renderer.render_head_tags("nuxt-inline").unwrap(), "");

    let bundle = dir.path().join("nuxt-inline");
    fs::create_dir_all(&bundle).unwrap();
    fs::write(bundle.join("index.html"), INDEX).unwrap();
    assert!(renderer.render_head_tags("nuxt-inline").unwrap().contains("entry.css"));
  }
}
