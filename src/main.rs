mod config;
mod consolidate;
mod export;
mod model;
mod normalize;
mod pdf_split;
mod rate;
mod tables;
mod vision;

use std::path::PathBuf;
use tracing::{error, info, warn};
use vision::PageFailure;

const CONFIG_PATH: &str = "bol_rater.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init tracing
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter("info")
        .init();

    let (driver, fuel_override, pdf_paths) = parse_args()?;

    let mut cfg = config::Config::load(CONFIG_PATH)?;
    if let Some(pct) = fuel_override {
        cfg.pricing.fuel_surcharge_percent = pct;
        config::Config::update_fuel_surcharge(CONFIG_PATH, pct)?;
        info!(fuel_surcharge = pct, "Fuel surcharge updated for this and future runs");
    }

    let tables = tables::RateTables::standard();
    let mut extractor = vision::PacedExtractor::new(&cfg.llm, cfg.pricing.page_delay_ms)?;

    let mut pages = Vec::new();
    let mut failures: Vec<PageFailure> = Vec::new();

    for path in &pdf_paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path)?;

        let page_blobs = match pdf_split::split_pages(&bytes) {
            Ok(blobs) => blobs,
            Err(e) => {
                error!(file = %filename, error = %e, "Could not split PDF; skipping file");
                failures.push(PageFailure {
                    filename,
                    page_number: 0,
                    error: e.to_string(),
                });
                continue;
            }
        };

        let mut succeeded = 0usize;
        for (i, blob) in page_blobs.iter().enumerate() {
            let page_number = i + 1;
            let span = tracing::info_span!("page", file = %filename, page = page_number);
            let _guard = span.enter();

            match extractor.extract_page(blob).await {
                Ok(page) => {
                    info!(
                        pro = %page.pro,
                        weight = page.weight,
                        volume = page.volume_ft3,
                        zone = %page.zone,
                        address = %page.delivery_address,
                        "Extracted page"
                    );
                    pages.push(page);
                    succeeded += 1;
                }
                Err(e) => {
                    error!(error = %e, "Page extraction failed");
                    failures.push(PageFailure {
                        filename: filename.clone(),
                        page_number,
                        error: e.to_string(),
                    });
                }
            }
        }
        info!(
            file = %filename,
            pages = page_blobs.len(),
            succeeded,
            "File processed"
        );
    }

    let shipments = consolidate::consolidate(&pages);
    let priced: Vec<_> = shipments
        .iter()
        .map(|s| rate::price(s, &driver, cfg.pricing.fuel_surcharge_percent, &tables))
        .collect();

    for f in &failures {
        warn!(
            file = %f.filename,
            page = f.page_number,
            error = %f.error,
            "Failed page excluded from billing"
        );
    }
    info!(
        shipments = priced.len(),
        failed_pages = failures.len(),
        "Batch complete"
    );

    let date = time::OffsetDateTime::now_utc().date();
    let csv_path = format!("bol-results-{date}.csv");
    export::write_csv(&csv_path, &priced)?;

    // Headerless TSV on stdout for pasting straight into the billing sheet
    println!("{}", export::tsv_string(&priced));

    Ok(())
}

fn parse_args() -> Result<(String, Option<f64>, Vec<PathBuf>), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let mut driver: Option<String> = None;
    let mut fuel: Option<f64> = None;
    let mut paths: Vec<PathBuf> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--driver" => driver = Some(args.next().ok_or("--driver needs a value")?),
            "--fuel" => {
                // Given as a percentage, stored as a fraction
                let pct: f64 = args.next().ok_or("--fuel needs a value")?.parse()?;
                fuel = Some(pct / 100.0);
            }
            other => paths.push(PathBuf::from(other)),
        }
    }

    let driver =
        driver.ok_or("usage: bol_rater --driver <name> [--fuel <percent>] <bol.pdf>...")?;
    if paths.is_empty() {
        return Err("no PDF files given".into());
    }
    Ok((driver, fuel, paths))
}
