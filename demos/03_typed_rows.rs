use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::Deserialize;
use statboard::{ApiResponse, DateRange, Diagnostic, Observer, Resource, StatClientBuilder};

/// Prints failures to stderr instead of going through `tracing`.
#[derive(Debug)]
struct StderrObserver;

impl Observer for StderrObserver {
    fn on_failure(&self, d: &Diagnostic) {
        eprintln!(
            "API ERROR: {} {} params={:?} status={:?} message={}",
            d.method, d.url, d.params, d.status, d.message
        );
    }

    fn on_payload(&self, resource: &str, response: &ApiResponse) {
        eprintln!("{resource}: {} bytes", response.body.len());
    }
}

#[derive(Debug, Deserialize)]
struct StockRow {
    #[serde(rename = "supplierArticle", default)]
    supplier_article: Option<String>,
    #[serde(default)]
    quantity: i64,
    #[serde(rename = "warehouseName", default)]
    warehouse_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = StatClientBuilder::from_env()?
        .timeout(std::time::Duration::from_secs(5))
        .observer(Arc::new(StderrObserver))
        .build()?;

    let today = Utc::now().date_naive();
    let week = DateRange::from_dates(today - Duration::days(7), today);

    let rows: Vec<StockRow> = client.resource(Resource::Stocks).range(week).fetch_json().await?;

    let total: i64 = rows.iter().map(|r| r.quantity).sum();
    println!("--- Stocks, last 7 days ---");
    println!("Rows: {}  Total quantity: {total}", rows.len());
    for row in rows.iter().take(5) {
        println!(
            "{:<24} {:>6}  {}",
            row.supplier_article.as_deref().unwrap_or("-"),
            row.quantity,
            row.warehouse_name.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
