//! Expansion of `{% nuxt_head %}` and `{% nuxt_mount %}` directives in host templates.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::EmbedResult;
use crate::renderer::BundleRenderer;

fn directive_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(
      r#"\{%\s*nuxt_(head|mount)(?:\s+(?:prefix\s*=\s*)?(?:"([^"]*)"|'([^']*)'))?\s*%\}"#,
    )
    .expect("invalid directive regex")
  })
}

/// Replace every bundle directive in `template` with the markup it names.
///
/// Accepted forms are `{% nuxt_head %}`, `{% nuxt_head "bundle" %}` and
/// `{% nuxt_mount prefix='bundle' %}`; a directive without a bundle uses the configured
/// default. Everything outside directives is copied unchanged.
pub fn render_template(renderer: &BundleRenderer, template: &str) -> EmbedResult<String> {
  let mut output = String::with_capacity(template.len());
  let mut last = 0;

  for caps in directive_pattern().captures_iter(template) {
    let Some(whole) = caps.get(0) else {
      continue;
    };
    output.push_str(&template[last..whole.start()]);
    output.push_str(&render_directive(renderer, &caps)?);
    last = whole.end();
  }

  output.push_str(&template[last..]);
  Ok(output)
}

fn render_directive(renderer: &BundleRenderer, caps: &Captures<'_>) -> EmbedResult<String> {
  let prefix = caps
    .get(2)
    .or_else(|| caps.get(3))
    .map(|found| found.as_str())
    .unwrap_or(renderer.config().default_prefix.as_str());

  match &caps[1] {
    "head" => renderer.render_head_tags(prefix),
    _ => renderer.render_mount_tags(prefix),
  }
}
