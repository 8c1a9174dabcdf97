//! Listing command handler for the CLI.

use skiphire_core::AppConfig;
use skiphire_pricing::PricingClient;

/// Fetch the skip listing for a location and print it.
///
/// Flag overrides win over the configured postcode and area. With `--json`
/// the normalized listing is printed as pretty JSON, otherwise as a
/// fixed-width table with one row per skip.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the upstream fetch
/// fails, or any record in the response is malformed.
pub(crate) async fn run_skips(
    config: &AppConfig,
    postcode: Option<&str>,
    area: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let client = PricingClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.upstream_url,
    )?;
    let postcode = postcode.unwrap_or(&config.postcode);
    let area = area.unwrap_or(&config.area);

    let skips = client.fetch_skips(postcode, area).await?;
    tracing::info!(postcode, area, count = skips.len(), "fetched skip listing");

    if json {
        println!("{}", serde_json::to_string_pretty(&skips)?);
        return Ok(());
    }

    if skips.is_empty() {
        println!("no skips available for {postcode} ({area})");
        return Ok(());
    }

    println!(
        "{:<20} {:>6} {:>10} {:>8}",
        "NAME", "SIZE", "PRICE", "PERMIT"
    );
    for skip in &skips {
        let permit = match skiphire_core::requires_permit(skip) {
            Ok(true) => "yes",
            Ok(false) => "no",
            Err(_) => "unknown",
        };
        let price = format!("£{:.2}", skip.price);
        println!(
            "{:<20} {:>6} {:>10} {:>8}",
            skip.name, skip.size, price, permit
        );
    }

    Ok(())
}
