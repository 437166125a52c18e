use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use sitegen::{build_site, extract_title, markdown_to_html, LogReporter, SiteOptions};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static HTML site from Markdown")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every Markdown page (default)
    Build(BuildArgs),

    /// Render one Markdown file to an HTML fragment on stdout
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Print the extracted title instead of the HTML
        #[arg(long)]
        title: bool,
    },
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// HTML template file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory (replaced on every build)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<BuildArgs> for SiteOptions {
    fn from(args: BuildArgs) -> Self {
        let mut options = SiteOptions::default();

        if let Some(content) = args.content {
            options.content_dir = content;
        }
        if let Some(static_dir) = args.static_dir {
            options.static_dir = static_dir;
        }
        if let Some(template) = args.template {
            options.template_path = template;
        }
        if let Some(output) = args.output {
            options.output_dir = output;
        }

        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command.unwrap_or_else(|| Command::Build(BuildArgs::default())) {
        Command::Build(args) => build(args.into()),
        Command::Render { input, title } => render(&input, title),
    }
}

fn build(options: SiteOptions) -> anyhow::Result<()> {
    log::debug!("{options:?}");

    let report = build_site(&options, &mut LogReporter)
        .with_context(|| format!("building site into {}", options.output_dir.display()))?;

    println!(
        "Generated {} page(s), {} failed",
        report.generated.len(),
        report.failures.len()
    );
    for (path, err) in &report.failures {
        eprintln!("  {}: {err}", path.display());
    }

    if !report.is_success() {
        bail!("{} page(s) could not be generated", report.failures.len());
    }
    Ok(())
}

fn render(input: &Path, title: bool) -> anyhow::Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let output = if title {
        extract_title(&markdown)
    } else {
        markdown_to_html(&markdown)
    }
    .with_context(|| format!("converting {}", input.display()))?;

    println!("{output}");
    Ok(())
}
