// FanGraphs rest-of-season projections.
//
// The projections page is a Next.js app; the player table ships as JSON
// inside the `<script id="__NEXT_DATA__">` element.

use async_trait::async_trait;
use rosvalue_baseball::{HitterProjection, ProjectionSupply, SupplyError};
use scraper::{Html, Selector};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::{build_http, fetch_text, require_stat, require_str};

const SOURCE: &str = "projections";

const SCRIPT_SELECTOR: &str = "script#__NEXT_DATA__";

/// Keys leading from the page data root to the projection rows.
const ROWS_PATH: &[&str] = &[
    "props",
    "pageProps",
    "dehydratedState",
    "queries",
    "0",
    "state",
    "data",
];

pub struct ProjectionsClient {
    http: reqwest::Client,
    url: String,
}

impl ProjectionsClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SupplyError> {
        Ok(Self {
            http: build_http(SOURCE, timeout)?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ProjectionSupply for ProjectionsClient {
    async fn fetch_projections(&self) -> Result<Vec<HitterProjection>, SupplyError> {
        debug!("fetching projections page {}", self.url);
        let request = self
            .http
            .get(&self.url)
            .header("accept", "text/html,application/xhtml+xml");
        let html = fetch_text(SOURCE, request).await?;

        let payload = extract_next_data(&html)?;
        let projections = parse_projections(&payload)?;
        info!("loaded {} hitter projections", projections.len());
        Ok(projections)
    }
}

/// Parse the page and decode the text of its `__NEXT_DATA__` script.
pub(crate) fn extract_next_data(html: &str) -> Result<Value, SupplyError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(SCRIPT_SELECTOR)
        .map_err(|e| SupplyError::unavailable(SOURCE, format!("bad selector: {e}")))?;

    let script = document
        .select(&selector)
        .next()
        .ok_or_else(|| SupplyError::missing_field(SOURCE, "__NEXT_DATA__"))?;
    let body: String = script.text().collect();

    serde_json::from_str(body.trim()).map_err(|e| SupplyError::unavailable(SOURCE, e))
}

/// Walk to the projection rows and map each one.
pub(crate) fn parse_projections(payload: &Value) -> Result<Vec<HitterProjection>, SupplyError> {
    let mut node = payload;
    for (depth, key) in ROWS_PATH.iter().enumerate() {
        let next = match key.parse::<usize>() {
            Ok(index) => node.get(index),
            Err(_) => node.get(*key),
        };
        node = next
            .ok_or_else(|| SupplyError::missing_field(SOURCE, &ROWS_PATH[..=depth].join(".")))?;
    }

    let rows = node
        .as_array()
        .ok_or_else(|| SupplyError::missing_field(SOURCE, &ROWS_PATH.join(".")))?;
    rows.iter().map(projection_from_row).collect()
}

fn projection_from_row(row: &Value) -> Result<HitterProjection, SupplyError> {
    // Free agents carry a null team; they simply miss the schedule join.
    let team_short_name = match row.get("ShortName") {
        None => return Err(SupplyError::missing_field(SOURCE, "ShortName")),
        Some(v) => v.as_str().unwrap_or_default().to_string(),
    };

    Ok(HitterProjection {
        player_name: require_str(SOURCE, row, "PlayerName")?.to_string(),
        team_short_name,
        singles: require_stat(SOURCE, row, "1B")?,
        doubles: require_stat(SOURCE, row, "2B")?,
        triples: require_stat(SOURCE, row, "3B")?,
        home_runs: require_stat(SOURCE, row, "HR")?,
        runs: require_stat(SOURCE, row, "R")?,
        runs_batted_in: require_stat(SOURCE, row, "RBI")?,
        stolen_bases: require_stat(SOURCE, row, "SB")?,
        walks: require_stat(SOURCE, row, "BB")?,
        strikeouts: require_stat(SOURCE, row, "SO")?,
        games_played: require_stat(SOURCE, row, "G")?,
    })
}
