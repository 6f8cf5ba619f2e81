// =============================================================================
// FitHub Web - Tariffs API
// =============================================================================

use fithub_common::{parse_tariffs, Tariff};

use super::{ApiClient, ApiError};

/// Tariff list endpoint, relative to the API host.
pub const TARIFFS_ENDPOINT: &str = "/Test/GetTariffs";

/// Fetch the raw (not yet normalized) tariff list. Single attempt.
pub async fn get_tariffs(client: &ApiClient) -> Result<Vec<Tariff>, ApiError> {
    log::debug!("Fetching tariffs from {}", client.url(TARIFFS_ENDPOINT));
    let body = client.get_text(TARIFFS_ENDPOINT).await?;
    let tariffs = parse_tariffs(&body)?;
    log::info!("Loaded {} tariffs", tariffs.len());
    Ok(tariffs)
}
