#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod bundle;
pub mod config;
pub mod error;
pub mod models;
pub mod renderer;
pub mod template;

pub use config::EmbedConfig;
pub use error::{EmbedError, EmbedResult};
pub use models::{BuildManifest, HtmlFragmentSet, ManifestEntry};
pub use renderer::BundleRenderer;
pub use template::render_template;
