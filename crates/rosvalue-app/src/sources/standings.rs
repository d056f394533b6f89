// MLB Stats API standings: wins and losses per team, turned into games
// played and remaining.

use async_trait::async_trait;
use rosvalue_baseball::{ScheduleSupply, SupplyError, TeamSchedule};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::{build_http, fetch_text, require, require_str, require_u32};

const SOURCE: &str = "standings";

pub struct StandingsClient {
    http: reqwest::Client,
    url: String,
    league_ids: String,
    season: i32,
}

impl StandingsClient {
    pub fn new(
        url: &str,
        league_ids: &str,
        season: i32,
        timeout: Duration,
    ) -> Result<Self, SupplyError> {
        Ok(Self {
            http: build_http(SOURCE, timeout)?,
            url: url.to_string(),
            league_ids: league_ids.to_string(),
            season,
        })
    }
}

#[async_trait]
impl ScheduleSupply for StandingsClient {
    async fn fetch_schedules(&self) -> Result<Vec<TeamSchedule>, SupplyError> {
        let season = self.season.to_string();
        let request = self.http.get(&self.url).query(&[
            ("leagueId", self.league_ids.as_str()),
            ("season", season.as_str()),
            ("standingsTypes", "regularSeason"),
        ]);
        debug!("fetching standings for season {}", self.season);

        let body = fetch_text(SOURCE, request).await?;
        let schedules = parse_standings(&body)?;
        info!("loaded schedules for {} teams", schedules.len());
        Ok(schedules)
    }
}

/// Parse a standings response body into one schedule per team record.
pub(crate) fn parse_standings(body: &str) -> Result<Vec<TeamSchedule>, SupplyError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| SupplyError::unavailable(SOURCE, e))?;

    let records = require(SOURCE, &root, "records")?
        .as_array()
        .ok_or_else(|| SupplyError::missing_field(SOURCE, "records"))?;

    let mut schedules = Vec::new();
    for division in records {
        let teams = require(SOURCE, division, "teamRecords")?
            .as_array()
            .ok_or_else(|| SupplyError::missing_field(SOURCE, "teamRecords"))?;
        for record in teams {
            let team = require(SOURCE, record, "team")?;
            schedules.push(TeamSchedule::from_record(
                require_str(SOURCE, team, "name")?,
                require_u32(SOURCE, team, "id")?,
                require_u32(SOURCE, record, "wins")?,
                require_u32(SOURCE, record, "losses")?,
            ));
        }
    }
    Ok(schedules)
}
