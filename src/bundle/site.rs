//! Fragment extraction from an exported production `index.html`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::asset_paths::rewrite_asset_urls;
use crate::config::EmbedConfig;
use crate::error::{EmbedError, EmbedResult};
use crate::models::HtmlFragmentSet;

struct IndexPatterns {
  import_map: Regex,
  stylesheet: Regex,
  preload: Regex,
  entry_script: Regex,
  mount: [Regex; 4],
}

fn index_patterns() -> &'static IndexPatterns {
  static PATTERNS: OnceLock<IndexPatterns> = OnceLock::new();
  PATTERNS.get_or_init(|| IndexPatterns {
    import_map: Regex::new(r#"(?s)<script type="importmap">.*?</script>"#)
      .expect("invalid importmap regex"),
    stylesheet: Regex::new(r#"<link[^>]+rel="stylesheet"[^>]*>"#)
      .expect("invalid stylesheet regex"),
    preload: Regex::new(r#"<link[^>]+rel="(?:modulepreload|prefetch)"[^>]*>"#)
      .expect("invalid preload regex"),
    entry_script: Regex::new(r#"<script type="module"[^>]*></script>"#)
      .expect("invalid entry script regex"),
    mount: [
      Regex::new(r#"<div id="__nuxt"></div>"#).expect("invalid mount regex"),
      Regex::new(r#"<div id="teleports"></div>"#).expect("invalid teleports regex"),
      Regex::new(r#"(?s)<script type="application/json"[^>]*?>.*?</script>"#)
        .expect("invalid payload regex"),
      Regex::new(r#"(?s)<script>window\.__NUXT__=.*?</script>"#)
        .expect("invalid runtime config regex"),
    ],
  })
}

/// Read `index.html` from a bundle root and extract its head and mount fragments.
///
/// A bundle without an exported document yields an empty fragment set; the page then renders
/// without client assets. Read failures on an existing document are reported.
pub fn load_index_fragments(
  config: &EmbedConfig,
  bundle_root: &Path,
  prefix: &str,
) -> EmbedResult<HtmlFragmentSet> {
  let index_path = bundle_root.join(&config.index_html_file);
  if !index_path.exists() {
    tracing::debug!(path = %index_path.display(), "no exported index document");
    return Ok(HtmlFragmentSet::default());
  }
  let bytes = fs::read(&index_path).map_err(|source| EmbedError::Io {
    path: index_path.clone(),
    source,
  })?;

  let html = String::from_utf8_lossy(&bytes);
  Ok(extract_index_fragments(config, prefix, &html))
}

/// Extract head and mount fragments from exported HTML and rewrite their asset URLs.
///
/// Head order: import map, every stylesheet, every module preload or prefetch, entry script.
/// Mount order: app root, teleport target, JSON payload, runtime config. Apart from
/// stylesheets and preloads only the first match of each marker is kept.
pub fn extract_index_fragments(config: &EmbedConfig, prefix: &str, html: &str) -> HtmlFragmentSet {
  let head = collect_head_tags(html);
  let mount = collect_mount_tags(html);
  tracing::debug!(
    prefix,
    head = head.len(),
    mount = mount.len(),
    "extracted index fragments"
  );

  HtmlFragmentSet {
    head_tags: rewrite_asset_urls(config, prefix, &head.join("\n")),
    mount_tags: rewrite_asset_urls(config, prefix, &mount.join("\n")),
  }
}

fn collect_head_tags(html: &str) -> Vec<&str> {
  let patterns = index_patterns();
  let mut tags = Vec::new();

  if let Some(found) = patterns.import_map.find(html) {
    tags.push(found.as_str());
  }
  tags.extend(patterns.stylesheet.find_iter(html).map(|found| found.as_str()));
  tags.extend(patterns.preload.find_iter(html).map(|found| found.as_str()));
  if let Some(found) = patterns.entry_script.find(html) {
    tags.push(found.as_str());
  }

  tags
}

fn collect_mount_tags(html: &str) -> Vec<&str> {
  index_patterns()
    .mount
    .iter()
    .filter_map(|pattern| pattern.find(html))
    .map(|found| found.as_str())
    .collect()
}
