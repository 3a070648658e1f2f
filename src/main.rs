mod category;
mod convert;
mod extract;
mod fetch;
mod prep;
mod rows;
mod titles;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "awards_rotate",
    about = "Rotate awards nomination lists into one spreadsheet row per film"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a nominations page into the tab-separated intermediate format
    Extract {
        /// Wikipedia URL (prompted for if omitted)
        #[arg(long)]
        url: Option<String>,
        /// Read a saved page instead of fetching
        #[arg(long, conflicts_with = "url")]
        html: Option<PathBuf>,
        #[arg(short = 'o', long = "out")]
        outfile: Option<PathBuf>,
    },
    /// Collapse the blank-line-separated loose format into the intermediate format
    Prep {
        #[arg(short = 'i', long = "in")]
        infile: PathBuf,
        #[arg(short = 'o', long = "out")]
        outfile: Option<PathBuf>,
    },
    /// Rotate the intermediate format into one CSV row per film
    Convert {
        #[arg(short = 'i', long = "in")]
        infile: PathBuf,
        #[arg(short = 'o', long = "out")]
        outfile: Option<PathBuf>,
        /// Blank rows to reserve for hand-added spreadsheet headers
        #[arg(long, default_value = "0")]
        blank_rows: usize,
    },
    /// Extract and convert in one pipeline, no intermediate file
    Run {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, conflicts_with = "url")]
        html: Option<PathBuf>,
        #[arg(short = 'o', long = "out")]
        outfile: Option<PathBuf>,
        #[arg(long, default_value = "0")]
        blank_rows: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract { url, html, outfile } => {
            let page = load_page(url, html).await?;
            let listings = extract::extract_listings(&page)?;
            let strict = extract::listings_to_rows(&listings)?;
            rows::write_rows(open_out(outfile)?, &strict)
        }
        Commands::Prep { infile, outfile } => {
            let text = fs::read_to_string(&infile)
                .with_context(|| format!("reading {}", infile.display()))?;
            let strict = prep::prep_text(&text)?;
            rows::write_rows(open_out(outfile)?, &strict)
        }
        Commands::Convert {
            infile,
            outfile,
            blank_rows,
        } => {
            let file = fs::File::open(&infile)
                .with_context(|| format!("opening {}", infile.display()))?;
            convert::run(file, open_out(outfile)?, blank_rows)
        }
        Commands::Run {
            url,
            html,
            outfile,
            blank_rows,
        } => {
            let page = load_page(url, html).await?;
            let listings = extract::extract_listings(&page)?;
            let strict = extract::listings_to_rows(&listings)?;
            convert::convert_rows(&strict, open_out(outfile)?, blank_rows)
        }
    }
}

async fn load_page(url: Option<String>, html: Option<PathBuf>) -> Result<String> {
    match html {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
        }
        None => fetch::fetch_page(url).await,
    }
}

fn open_out(path: Option<PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file =
                fs::File::create(&p).with_context(|| format!("creating {}", p.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
