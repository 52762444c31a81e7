use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nuxt_embed::{BundleRenderer, EmbedConfig, render_template};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Print the markup needed to embed a client bundle into a server-rendered page.
#[derive(Parser, Debug)]
#[command(name = "nuxt-embed")]
#[command(version, about, long_about = None)]
struct Cli {
  /// JSON configuration file (defaults to ./nuxt-embed.config.json when present)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Build head tags from the development manifest
  #[arg(long, global = true)]
  dev: bool,

  /// Public URL base for static assets
  #[arg(long, global = true)]
  static_url: Option<String>,

  /// Directory filled by the production static collection step
  #[arg(long, global = true)]
  static_root: Option<PathBuf>,

  /// Directory holding the source copy of each bundle
  #[arg(long, global = true)]
  source_root: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the tags for the document head
  Head {
    /// Bundle identifier
    prefix: Option<String>,
  },
  /// Print the mount points and hydration payload for the document body
  Mount {
    /// Bundle identifier
    prefix: Option<String>,
  },
  /// Print both fragments as JSON
  Fragments {
    /// Bundle identifier
    prefix: Option<String>,
  },
  /// Expand nuxt_head / nuxt_mount directives in a template file
  Render {
    /// Template to expand
    template: PathBuf,
    /// Write the result here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
  },
}

impl Cli {
  fn load_config(&self) -> Result<EmbedConfig> {
    let config = match &self.config {
      Some(path) => EmbedConfig::from_path(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?,
      None => {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        EmbedConfig::discover(&cwd)
      }
    };

    let mut config = config.with_env_overrides();
    if self.dev {
      config.development_mode = true;
    }
    if let Some(url) = &self.static_url {
      config.static_url_base = url.clone();
    }
    if let Some(root) = &self.static_root {
      config.production_asset_root = Some(root.clone());
    }
    if let Some(root) = &self.source_root {
      config.source_tree_base = root.clone();
    }
    Ok(config)
  }
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "nuxt_embed=info".into()))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let config = cli.load_config()?;
  tracing::debug!(?config, "loaded configuration");
  let renderer = BundleRenderer::new(config);
  let default_prefix = renderer.config().default_prefix.clone();

  let rendered = match &cli.command {
    Command::Head { prefix } => {
      let prefix = prefix.as_deref().unwrap_or(&default_prefix);
      renderer
        .render_head_tags(prefix)
        .with_context(|| format!("failed to render head tags for {prefix}"))?
    }
    Command::Mount { prefix } => {
      let prefix = prefix.as_deref().unwrap_or(&default_prefix);
      renderer
        .render_mount_tags(prefix)
        .with_context(|| format!("failed to render mount tags for {prefix}"))?
    }
    Command::Fragments { prefix } => {
      let prefix = prefix.as_deref().unwrap_or(&default_prefix);
      let fragments = renderer
        .render(prefix)
        .with_context(|| format!("failed to render fragments for {prefix}"))?;
      serde_json::to_string_pretty(&fragments)?
    }
    Command::Render { template, output } => {
      let source = fs::read_to_string(template)
        .with_context(|| format!("failed to read {}", template.display()))?;
      let page = render_template(&renderer, &source)
        .with_context(|| format!("failed to render {}", template.display()))?;
      if let Some(output) = output {
        fs::write(output, &page)
          .with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), "wrote rendered template");
        return Ok(());
      }
      page
    }
  };

  let mut stdout = std::io::stdout().lock();
  writeln!(stdout, "{rendered}").context("failed to write to stdout")?;
  Ok(())
}
