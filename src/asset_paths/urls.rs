use crate::config::EmbedConfig;

/// Build the public URL for a file path listed in a build manifest.
///
/// Paths that already start with the chunk folder or the tooling folder are placed directly
/// under the bundle (`<static>/<prefix>/<file>`); anything else is manifest-relative and
/// lands under the tooling folder (`<static>/<prefix>/<tooling>/<file>`).
pub fn resolve_manifest_url(config: &EmbedConfig, prefix: &str, file: &str) -> String {
    let bundle_base = format!("{}/{}", config.static_base(), prefix);
    let names_its_folder = config
        .direct_url_folders()
        .iter()
        .filter(|folder| !folder.is_empty())
        .any(|folder| {
            file.strip_prefix(folder)
                .is_some_and(|rest| rest.starts_with('/'))
        });

    if names_its_folder {
        format!("{bundle_base}/{file}")
    } else {
        format!("{bundle_base}/{}/{file}", config.tooling_folder)
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_manifest_url;
    use crate::config::EmbedConfig;

    #[test]
    fn places_manifest_relative_files_under_tooling_folder() {
        let config = EmbedConfig::default();
        assert_eq!(
            resolve_manifest_url(&config, "nuxt-inline", "a.abc123.js"),
            "/static/nuxt-inline/.vite/a.abc123.js"
        );
    }

    #[test]
    fn keeps_files_that_already_name_their_folder() {
        let config = EmbedConfig::default();
        assert_eq!(
            resolve_manifest_url(&config, "nuxt-inline", "_nuxt/entry.js"),
            "/static/nuxt-inline/_nuxt/entry.js"
        );
        assert_eq!(
            resolve_manifest_url(&config, "nuxt-inline", ".vite/chunk.js"),
            "/static/nuxt-inline/.vite/chunk.js"
        );
    }

    #[test]
    fn requires_a_full_folder_segment() {
        let config = EmbedConfig::default();
        assert_eq!(
            resolve_manifest_url(&config, "nuxt-inline", "_nuxtish/entry.js"),
            "/static/nuxt-inline/.vite/_nuxtish/entry.js"
        );
    }
}
