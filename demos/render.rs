//! Multi Pager demo
//!
//! Renders every page of five mock sources (80 records in total).
//!
//! ```text
//! cargo run --example render -- --page-size 15
//! RUST_LOG=multi_pager=debug cargo run --example render -- --page-size 27 --page 2
//! ```

use clap::Parser;
use multi_pager::error::ResultExt;
use multi_pager::{MockSource, Pager, Result};
use std::sync::Arc;

/// Render pages of a multi-source result set
#[derive(Debug, Parser)]
#[command(name = "render", version)]
struct Cli {
    /// Items per page
    #[arg(short = 's', long, default_value_t = 15)]
    page_size: usize,

    /// Render only this page (1-based)
    #[arg(short, long)]
    page: Option<usize>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut pager = Pager::new();
    for (name, count) in [
        ("Source 1", 25),
        ("Source 2", 15),
        ("Source 3", 13),
        ("Source 4", 17),
        ("Source 5", 10),
    ] {
        pager.add_source(Arc::new(MockSource::new(name, count)));
    }
    pager
        .set_page_size(cli.page_size)
        .context("Invalid --page-size")?;

    let total_pages = pager.total_pages()?;
    println!(
        "Total Items: {} - Items per page: {} - Total pages: {}",
        pager.total_items()?,
        pager.page_size(),
        total_pages
    );

    let pages = match cli.page {
        Some(page) => page..=page,
        None => 1..=total_pages,
    };
    for page in pages {
        let records = pager.fetch_page(page)?;
        println!();
        println!("PAGE: {page}");
        for (position, record) in records.iter().enumerate() {
            println!("  {} - {}", position + 1, record);
        }
    }

    Ok(())
}
