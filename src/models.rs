//! Data structures read from client build output and handed back to the host.

use serde::{Deserialize, Serialize};

/// One module record of a development build manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
  /// Output file path relative to the bundle root or the tooling folder.
  #[serde(default)]
  pub file: Option<String>,
  /// Marks the root of the module graph.
  #[serde(default)]
  pub is_entry: bool,
  /// Stylesheets required by the module, in declaration order.
  #[serde(default)]
  pub css: Vec<String>,
  /// Keys of other manifest records imported by the module, in declaration order.
  #[serde(default)]
  pub imports: Vec<String>,
}

impl ManifestEntry {
  /// Output file of the record, ignoring an empty `file` value.
  pub fn output_file(&self) -> Option<&str> {
    self.file.as_deref().filter(|file| !file.is_empty())
  }
}

/// Build manifest keyed by module identifier, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildManifest {
  entries: Vec<(String, ManifestEntry)>,
}

impl BuildManifest {
  /// Create a manifest from records already in document order.
  pub fn from_entries(entries: Vec<(String, ManifestEntry)>) -> Self {
    Self { entries }
  }

  /// Look up a record by its manifest key.
  pub fn get(&self, key: &str) -> Option<&ManifestEntry> {
    self
      .entries
      .iter()
      .find(|(candidate, _)| candidate == key)
      .map(|(_, entry)| entry)
  }

  /// First record flagged with `isEntry`, scanning in document order.
  pub fn entry_module(&self) -> Option<(&str, &ManifestEntry)> {
    self
      .entries
      .iter()
      .find(|(_, entry)| entry.is_entry)
      .map(|(key, entry)| (key.as_str(), entry))
  }

  /// Number of module records.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the manifest holds no module records.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// HTML snippets to embed into a server-rendered page.
///
/// Both fields hold trusted build output joined by newlines and must be embedded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HtmlFragmentSet {
  /// Styles, preloads, import map and entry script for the document `<head>`.
  pub head_tags: String,
  /// Mount points, hydration payload and runtime config for the document `<body>`.
  pub mount_tags: String,
}

impl HtmlFragmentSet {
  /// Whether neither bucket carries any markup.
  pub fn is_empty(&self) -> bool {
    self.head_tags.is_empty() && self.mount_tags.is_empty()
  }
}
