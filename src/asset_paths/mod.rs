//! Helpers for locating bundles on disk and producing the URLs the browser should load.
//!
//! Resolving a bundle root, rewriting exported HTML and building URLs for manifest paths are
//! split into focused submodules so each rule can be tested on its own. The production and
//! development extractors share all three.

mod root;
mod rewrite;
mod urls;

pub use rewrite::rewrite_asset_urls;
pub use root::{bundle_root_candidates, is_bundle_segment, resolve_bundle_root};
pub use urls::resolve_manifest_url;
