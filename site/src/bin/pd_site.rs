//! `pd-site` - render and check the Lake Malawi PD landing page.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pd_site::assets::audit;
use pd_site::outline::Outline;
use pd_site::{PageOptions, SiteConfig, render_page, write_page};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pd-site")]
#[command(about = "Static renderer for the Lake Malawi Positive Development landing page")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to an HTML file
    Render {
        /// Output path, `-` for stdout
        #[arg(long, short, default_value = "dist/index.html")]
        out: PathBuf,
        /// Copyright year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Check that every image and video the page references exists
    Assets {
        /// Directory served at the site root
        #[arg(long, default_value = "public")]
        public: PathBuf,
        /// Exit non-zero when any asset is missing
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the page content model as JSON
    Outline {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Config file (defaults to ./site.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    fn load(&self) -> Result<SiteConfig> {
        let config = match &self.config {
            Some(path) => SiteConfig::load_from_path(path),
            None => SiteConfig::load(Path::new(".")),
        };
        config.context("Failed to load site config")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout may carry the page or the outline
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match cli.command {
        Command::Render { out, year, config } => {
            let config = config.load()?;
            let mut options = PageOptions::with_config(config);
            if let Some(year) = year {
                options.year = year;
            }
            let html = render_page(&options);

            if out.as_os_str() == "-" {
                std::io::stdout()
                    .write_all(html.as_bytes())
                    .context("Failed to write page to stdout")?;
            } else {
                write_page(&out, &html)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
            }
        }
        Command::Assets {
            public,
            strict,
            config,
        } => {
            let config = config.load()?;
            let report = audit(&public, &config.assets);
            for asset in &report.present {
                println!("ok       {}", asset.url);
            }
            for asset in &report.missing {
                println!("missing  {}", asset.url);
            }
            for asset in &report.unchecked {
                println!("skipped  {}", asset.url);
            }
            info!(
                present = report.present.len(),
                missing = report.missing.len(),
                unchecked = report.unchecked.len(),
                "asset audit finished"
            );
            if strict {
                report.into_result()?;
            }
        }
        Command::Outline { config } => {
            let config = config.load()?;
            let json = Outline::new(&config)
                .to_json()
                .context("Failed to serialize outline")?;
            println!("{json}");
        }
    }

    Ok(())
}
