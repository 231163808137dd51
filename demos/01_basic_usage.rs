use statboard::{DateRange, StatClient, fetch_sales};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Pick up STATBOARD_API_BASE_URL / STATBOARD_API_KEY from a local .env, if any.
    dotenvy::dotenv().ok();
    #[cfg(feature = "tracing-subscriber")]
    statboard::init_tracing();

    // 2. Build the one client the rest of the program shares.
    let client = StatClient::from_env()?;

    // 3. Fetch a month of sales and look at the raw payload.
    let january = DateRange::new("2024-01-01", "2024-01-31");
    let resp = fetch_sales(&client, &january).await?;
    println!("--- Sales {} .. {} ---", january.date_from, january.date_to);
    println!("Status: {}", resp.status);

    let rows = resp.data()?;
    match rows.as_array() {
        Some(items) => println!("Rows: {}", items.len()),
        None => println!("Body: {}", resp.body),
    }

    Ok(())
}
