//! Extractors turning client build output into embeddable head and mount markup.

pub mod development;
pub mod manifest;
pub mod site;

pub use development::{development_head_tags, tags_from_manifest};
pub use manifest::{load_manifest, locate_manifest, parse_manifest};
pub use site::{extract_index_fragments, load_index_fragments};
