// Concrete data supplies: MLB standings, FanGraphs projections, and the
// local position eligibility CSV.

pub mod positions;
pub mod projections;
pub mod standings;

pub use positions::PositionFile;
pub use projections::ProjectionsClient;
pub use standings::StandingsClient;

use rosvalue_baseball::SupplyError;
use serde_json::Value;
use std::time::Duration;

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

pub(crate) fn build_http(source: &str, timeout: Duration) -> Result<reqwest::Client, SupplyError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("rosvalue/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SupplyError::unavailable(source, e))
}

/// Send a prepared request and return the body text of a 2xx response.
pub(crate) async fn fetch_text(
    source: &str,
    request: reqwest::RequestBuilder,
) -> Result<String, SupplyError> {
    let resp = request
        .send()
        .await
        .map_err(|e| SupplyError::unavailable(source, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(SupplyError::unavailable(source, format!("HTTP {status}")));
    }

    resp.text()
        .await
        .map_err(|e| SupplyError::unavailable(source, e))
}

// ---------------------------------------------------------------------------
// JSON field access
// ---------------------------------------------------------------------------

pub(crate) fn require<'a>(
    source: &str,
    value: &'a Value,
    field: &str,
) -> Result<&'a Value, SupplyError> {
    match value.get(field) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(SupplyError::missing_field(source, field)),
    }
}

/// A projected stat. The key must be present, but a `null` reads as NaN so
/// only that player's derived values go undefined.
pub(crate) fn require_stat(source: &str, value: &Value, field: &str) -> Result<f64, SupplyError> {
    match value.get(field) {
        Some(Value::Null) => Ok(f64::NAN),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| SupplyError::missing_field(source, field)),
        None => Err(SupplyError::missing_field(source, field)),
    }
}

pub(crate) fn require_u32(source: &str, value: &Value, field: &str) -> Result<u32, SupplyError> {
    require(source, value, field)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| SupplyError::missing_field(source, field))
}

pub(crate) fn require_str<'a>(
    source: &str,
    value: &'a Value,
    field: &str,
) -> Result<&'a str, SupplyError> {
    require(source, value, field)?
        .as_str()
        .ok_or_else(|| SupplyError::missing_field(source, field))
}
