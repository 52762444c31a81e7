//! Host configuration describing where client bundles live and how they are served.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EmbedError, EmbedResult};

/// File name looked up by [`EmbedConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "nuxt-embed.config.json";

/// Explicit configuration passed into every bundle lookup.
///
/// The core never consults process-wide state; hosts build one of these (optionally layering
/// environment flags via [`EmbedConfig::with_env_overrides`]) and hand it to the renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
  /// Public URL base under which static assets are served, e.g. `/static/`.
  pub static_url_base: String,
  /// Directory filled by the production static collection step, when there is one.
  pub production_asset_root: Option<PathBuf>,
  /// Directory holding the source copy of every bundle, used when no collected copy exists.
  pub source_tree_base: PathBuf,
  /// Build bundle tags from the development manifest instead of the exported `index.html`.
  pub development_mode: bool,
  /// Chunk folder emitted by the client build (`/_nuxt/` references are rewritten).
  pub asset_folder: String,
  /// Folder produced by the manifest tooling; manifest-relative files resolve under it.
  pub tooling_folder: String,
  /// Name of the exported HTML document inside a bundle root.
  pub index_html_file: String,
  /// Manifest locations relative to a bundle root, tried in order.
  pub manifest_candidates: Vec<String>,
  /// Bundle identifier used when a caller does not name one.
  pub default_prefix: String,
}

impl Default for EmbedConfig {
  fn default() -> Self {
    Self {
      static_url_base: "/static/".into(),
      production_asset_root: None,
      source_tree_base: PathBuf::from("app/static"),
      development_mode: false,
      asset_folder: "_nuxt".into(),
      tooling_folder: ".vite".into(),
      index_html_file: "index.html".into(),
      manifest_candidates: vec![".vite/manifest.json".into(), "_nuxt/manifest.json".into()],
      default_prefix: "nuxt-inline".into(),
    }
  }
}

impl EmbedConfig {
  /// Load `nuxt-embed.config.json` from the provided directory.
  ///
  /// A missing or unparsable file falls back to the defaults so hosts always get a usable
  /// configuration.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    if !candidate.is_file() {
      return Self::default();
    }
    match Self::from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        tracing::warn!(error = %err, "ignoring configuration file, using defaults");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> EmbedResult<Self> {
    let content = fs::read_to_string(path).map_err(|source| EmbedError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| EmbedError::Config {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Apply the host's `DEV`, `STATIC_URL` and `STATIC_ROOT` environment flags.
  pub fn with_env_overrides(self) -> Self {
    self.with_overrides_from(|key| std::env::var(key).ok())
  }

  /// Apply environment-style overrides read through `lookup`.
  pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    if let Some(dev) = lookup("DEV") {
      self.development_mode = dev.trim() == "1";
    }
    if let Some(url) = lookup("STATIC_URL").filter(|value| !value.is_empty()) {
      self.static_url_base = url;
    }
    if let Some(root) = lookup("STATIC_ROOT").filter(|value| !value.is_empty()) {
      self.production_asset_root = Some(PathBuf::from(root));
    }
    self
  }

  /// Static URL base without its trailing slash (`/static/` becomes `/static`).
  pub fn static_base(&self) -> &str {
    self.static_url_base.trim_end_matches('/')
  }

  /// Folders whose manifest paths already name their location inside the bundle root.
  pub fn direct_url_folders(&self) -> [&str; 2] {
    [self.asset_folder.as_str(), self.tooling_folder.as_str()]
  }
}
