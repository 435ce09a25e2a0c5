mod check;
mod config;
mod mail;
mod site;
mod ui;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use swiftbuild_server::{
  CaseStudies, Locale, RouteTable, render_sitemap_xml, robots_txt, sitemap,
};
use swiftbuild_server_axum::{serve_parts, shutdown_signal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{SiteConfig, apply_port_override, resolve_config};

#[derive(Parser)]
#[command(name = "swiftbuild", about = "SwiftBuild site server")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site and contact API
  Serve {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bind host, overrides [server].host
    #[arg(long)]
    host: Option<String>,
    /// Bind port, overrides [server].port and $PORT
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Validate configuration, routes, case studies and dictionaries
  Check {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the localized route table
  Routes,
  /// Render sitemap.xml
  Sitemap {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Render robots.txt
  Robots {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
}

fn init_tracing() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<(Option<PathBuf>, SiteConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  resolve_config(explicit.as_deref(), &cwd)
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
  match out {
    Some(path) => {
      std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
      ui::ok(&format!("wrote {}", path.display()));
    }
    None => std::io::stdout().write_all(content.as_bytes()).context("failed to write stdout")?,
  }
  Ok(())
}

fn prefixed(locale: Locale, template: &str) -> String {
  match (locale.prefix(), template) {
    ("", t) => t.to_string(),
    (p, "/") => p.to_string(),
    (p, t) => format!("{p}{t}"),
  }
}

fn print_routes() -> Result<()> {
  let routes = RouteTable::site()?;
  ui::banner("routes");
  for entry in routes.entries() {
    ui::label("key", entry.key());
    for locale in Locale::ALL {
      ui::detail(&format!("{locale}  {}", prefixed(locale, entry.template(locale).as_str())));
    }
  }
  ui::blank();
  Ok(())
}

async fn serve(
  explicit: Option<PathBuf>,
  host: Option<String>,
  port: Option<u16>,
) -> Result<()> {
  let (config_path, mut config) = load_config(explicit)?;
  apply_port_override(&mut config, std::env::var("PORT").ok().as_deref())?;
  if let Some(host) = host {
    config.server.host = host;
  }
  if let Some(port) = port {
    config.server.port = port;
  }

  match &config_path {
    Some(path) => tracing::info!(config = %path.display(), "loaded configuration"),
    None => tracing::info!("no site.toml found, using defaults"),
  }

  let parts = site::build_site(&config, config_path.as_deref())?.into_parts()?;
  tracing::info!(
    base_url = %parts.base_url,
    mailer = parts.contact.mailer_name(),
    locale_detection = parts.locale_detection,
    "site ready"
  );
  serve_parts(parts, &config.server.addr(), shutdown_signal()).await.map_err(|e| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, host, port } => {
      init_tracing();
      serve(config, host, port).await?;
    }
    Command::Check { config } => {
      let (config_path, site_config) = load_config(config)?;
      check::run_check(&site_config, config_path.as_deref())?;
    }
    Command::Routes => print_routes()?,
    Command::Sitemap { config, out } => {
      let (_, site_config) = load_config(config)?;
      let today = chrono::Utc::now().date_naive();
      let entries = sitemap(
        &site_config.site.base_url,
        &RouteTable::site()?,
        &CaseStudies::builtin()?,
        today,
      )?;
      write_output(out.as_deref(), &render_sitemap_xml(&entries))?;
    }
    Command::Robots { config, out } => {
      let (_, site_config) = load_config(config)?;
      write_output(out.as_deref(), &robots_txt(&site_config.site.base_url))?;
    }
  }

  Ok(())
}
