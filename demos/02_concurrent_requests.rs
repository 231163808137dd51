use statboard::{DateRange, FailureKind, Resource, StatClient, fetch_resource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    #[cfg(feature = "tracing-subscriber")]
    statboard::init_tracing();

    let client = StatClient::from_env()?;
    let range = DateRange::new("2024-01-01", "2024-01-31");

    // One request per resource, all in flight at once.
    let fetches = Resource::ALL
        .into_iter()
        .map(|r| {
            let client = client.clone();
            let range = range.clone();
            async move { (r, fetch_resource(&client, r, &range).await) }
        });

    for (resource, result) in futures::future::join_all(fetches).await {
        match result {
            Ok(resp) => println!("{resource:<8} {} ({} bytes)", resp.status, resp.body.len()),
            Err(e) => match e.kind() {
                Some(FailureKind::Status) => {
                    println!("{resource:<8} rejected with {}", e.status().unwrap_or_default());
                }
                Some(FailureKind::Timeout) => println!("{resource:<8} timed out"),
                _ => println!("{resource:<8} failed: {e}"),
            },
        }
    }

    Ok(())
}
