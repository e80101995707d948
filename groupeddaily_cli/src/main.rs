use anyhow::Result;
use groupeddaily_api::{Client, DEFAULT_BASE_URL};

/// Environment variable overriding the endpoint base URL.
const BASE_URL_ENV: &str = "GROUPEDDAILY_BASE_URL";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("groupeddaily_api=info".parse().unwrap())
                .add_directive("groupeddaily_cli=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let base_url =
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let client = Client::with_base_url(&base_url)?;
    let resp = client.get_grouped_daily().await?;

    println!("{} {:?}", resp.status, resp.entity);

    Ok(())
}
