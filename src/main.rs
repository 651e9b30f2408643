//! portfolio: render a single-page personal portfolio site.
//!
//! The content is compiled in. The tool only chooses an output format, where
//! to write it, and which static assets to stage alongside it.
//!
//! - **stdout mode**: `portfolio > index.html`
//! - **site mode**: `portfolio -o dist -a public/ -s /styles.css --check`

mod anchor;
mod assets;
mod content;
mod escape;
mod render;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{ArgAction, Parser};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "portfolio",
    about = "Render the portfolio page as HTML, Markdown, or JSON"
)]
struct Cli {
    /// Output directory. If omitted, the document is written to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: html (default), markdown, json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Static assets to copy into the output directory (files, directories,
    /// or glob patterns). Can be specified multiple times.
    #[arg(short = 'a', long)]
    assets: Vec<String>,

    /// Copyright year. Defaults to the current local year.
    #[arg(long)]
    year: Option<i32>,

    /// Stylesheet href to link from the HTML head. Can be specified multiple times.
    #[arg(short = 's', long)]
    stylesheet: Vec<String>,

    /// Fail if navigation links and section anchors do not match 1:1
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = render::RenderContext {
        year: cli.year.unwrap_or_else(|| chrono::Local::now().year()),
    };
    let site = &content::PORTFOLIO;

    let renderer = render::create_renderer(&cli.format, &cli.stylesheet)?;
    let output = renderer.render(site, &ctx)?;
    tracing::info!(
        "rendered {} bytes of {} for {}",
        output.len(),
        cli.format,
        ctx.year
    );

    if cli.check {
        check_anchors(&cli.format, &output)?;
    }

    match cli.output.as_deref() {
        Some(dir) => write_site(&cli, dir, renderer.file_extension(), &output, site),
        None => {
            if !cli.assets.is_empty() {
                anyhow::bail!("--output is required when assets are given");
            }
            print!("{}", output);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Audit rendered HTML for orphan anchors. Other formats carry no `<nav>`.
fn check_anchors(format: &str, output: &str) -> Result<()> {
    if format != "html" {
        tracing::warn!("--check only applies to html output; skipped for {}", format);
        return Ok(());
    }
    let report = anchor::audit(output);
    if !report.is_clean() {
        anyhow::bail!("anchor check failed: {}", report);
    }
    tracing::info!("anchor check passed");
    Ok(())
}

/// site mode: write `index.<ext>`, stage assets, report missing references.
fn write_site(
    cli: &Cli,
    output_dir: &Path,
    ext: &str,
    output: &str,
    site: &content::Portfolio,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let out_path = output_dir.join(format!("index.{}", ext));
    fs::write(&out_path, output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!("wrote {}", out_path.display());

    let files = assets::expand(&cli.assets)?;
    let copied = assets::copy_into(&files, output_dir)?;
    if copied > 0 {
        tracing::info!("copied {} asset(s)", copied);
    }

    for href in assets::missing(output_dir, &site.profile.asset_paths()) {
        tracing::warn!("asset not found: {}", href);
    }

    Ok(())
}
