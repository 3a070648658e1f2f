use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info;

/// Fetch the nominations page. When no URL is given, print a year-scoped
/// Wikipedia search link and read the chosen URL from stdin.
pub async fn fetch_page(url: Option<String>) -> Result<String> {
    let url = match url {
        Some(u) => u,
        None => prompt_for_url()?,
    };
    info!("Fetching nominations page: {}", url);
    let client = reqwest::Client::new();
    let html = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
        .context("Failed to fetch nominations page")?;
    Ok(html)
}

fn prompt_for_url() -> Result<String> {
    let year = chrono::Utc::now().year();
    println!(
        "Get the Wikipedia link:\n\
         <https://en.wikipedia.org/wiki/Special:Search?search={}%20academy%20award%20nominations&go=Go&ns0=1>",
        year
    );
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let url = line.trim();
    if url.is_empty() {
        anyhow::bail!("no URL given");
    }
    Ok(url.to_string())
}
