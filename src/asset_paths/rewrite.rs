use crate::config::EmbedConfig;

/// Rewrite every reference to the client chunk folder into the host's static namespace.
///
/// `/_nuxt/` becomes `<static base>/<prefix>/_nuxt/` whether it sits in double quotes, single
/// quotes or bare inside script text. A bare occurrence is only rewritten at a token boundary:
/// when it directly follows an identifier character (`x/_nuxt/`) it belongs to some other
/// path and is left alone. The pass is not idempotent and must run once per extraction.
pub fn rewrite_asset_urls(config: &EmbedConfig, prefix: &str, html: &str) -> String {
    let folder = config.asset_folder.trim_matches('/');
    if folder.is_empty() {
        return html.to_string();
    }

    let marker = format!("/{folder}/");
    let replacement = format!("{}/{}/{}/", config.static_base(), prefix, folder);

    let mut output = String::with_capacity(html.len());
    let mut last = 0;
    for (index, _) in html.match_indices(&marker) {
        if follows_identifier(&html[..index]) {
            continue;
        }
        output.push_str(&html[last..index]);
        output.push_str(&replacement);
        last = index + marker.len();
    }
    output.push_str(&html[last..]);
    output
}

fn follows_identifier(preceding: &str) -> bool {
    preceding
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::rewrite_asset_urls;
    use crate::config::EmbedConfig;

    fn rewrite(html: &str) -> String {
        rewrite_asset_urls(&EmbedConfig::default(), "nuxt-inline", html)
    }

    #[test]
    fn rewrites_double_quoted_attributes() {
        assert_eq!(
            rewrite(r#"<script src="/_nuxt/app.js"></script>"#),
            r#"<script src="/static/nuxt-inline/_nuxt/app.js"></script>"#
        );
    }

    #[test]
    fn rewrites_single_quoted_strings() {
        assert_eq!(
            rewrite("fetch('/_nuxt/builds/meta.json')"),
            "fetch('/static/nuxt-inline/_nuxt/builds/meta.json')"
        );
    }

    #[test]
    fn rewrites_bare_markers_at_token_boundaries() {
        assert_eq!(
            rewrite(r#"base + "/_nuxt/" + file"#),
            r#"base + "/static/nuxt-inline/_nuxt/" + file"#
        );
        assert_eq!(
            rewrite("import(`/_nuxt/${name}.js`)"),
            "import(`/static/nuxt-inline/_nuxt/${name}.js`)"
        );
        assert_eq!(rewrite("/_nuxt/start"), "/static/nuxt-inline/_nuxt/start");
    }

    #[test]
    fn leaves_markers_after_identifier_characters() {
        assert_eq!(rewrite("x/_nuxt/chunk.js"), "x/_nuxt/chunk.js");
        assert_eq!(rewrite("cdn_/_nuxt/chunk.js"), "cdn_/_nuxt/chunk.js");
    }

    #[test]
    fn matches_case_sensitively() {
        assert_eq!(rewrite(r#"href="/_NUXT/a.css""#), r#"href="/_NUXT/a.css""#);
    }

    #[test]
    fn rewrites_every_occurrence_once() {
        let html = concat!(
            r#"<link rel="stylesheet" href="/_nuxt/entry.css">"#,
            "\n",
            r#"<script>window.__NUXT__={config:{app:{buildAssetsDir:"/_nuxt/"}}}</script>"#
        );
        let rewritten = rewrite(html);
        assert_eq!(rewritten.matches("/static/nuxt-inline/_nuxt/").count(), 2);
        assert!(!rewritten.contains("\"/_nuxt/"));
    }

    #[test]
    fn honours_custom_static_base_and_folder() {
        let config = EmbedConfig {
            static_url_base: "https://cdn.example.com/assets/".into(),
            asset_folder: "chunks".into(),
            ..EmbedConfig::default()
        };
        assert_eq!(
            rewrite_asset_urls(&config, "shop", r#"src="/chunks/a.js" src="/_nuxt/b.js""#),
            r#"src="https://cdn.example.com/assets/shop/chunks/a.js" src="/_nuxt/b.js""#
        );
    }
}
