// Position eligibility table from a FantasyPros hitter export (fp_hit.csv).

use async_trait::async_trait;
use rosvalue_baseball::position::Position;
use rosvalue_baseball::{PlayerPositions, PositionSupply, SupplyError};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const SOURCE: &str = "positions";

const REQUIRED_HEADERS: &[&str] = &["Player", "Positions", "Rank", "ADP"];

/// Raw CSV row. Extra columns in the export are ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPositionRow {
    Player: String,
    Positions: String,
    Rank: u32,
    ADP: Option<f64>,
}

/// Reads the eligibility table from a local CSV file.
pub struct PositionFile {
    path: PathBuf,
}

impl PositionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PositionSupply for PositionFile {
    async fn load_positions(&self) -> Result<Vec<PlayerPositions>, SupplyError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            SupplyError::unavailable(SOURCE, format!("{}: {e}", self.path.display()))
        })?;
        let positions = load_positions_from_reader(bytes.as_slice())?;
        info!(
            "loaded {} position rows from {}",
            positions.len(),
            self.path.display()
        );
        Ok(positions)
    }
}

/// Fold the three outfield spots into the single `OF` token.
fn fold_outfield(positions: &str) -> String {
    positions
        .replace("LF", "OF")
        .replace("CF", "OF")
        .replace("RF", "OF")
}

pub(crate) fn load_positions_from_reader<R: Read>(
    rdr: R,
) -> Result<Vec<PlayerPositions>, SupplyError> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| SupplyError::unavailable(SOURCE, e))?;
    if let Some(missing) = REQUIRED_HEADERS
        .iter()
        .find(|h| !headers.iter().any(|got| got.trim() == **h))
    {
        return Err(SupplyError::missing_field(SOURCE, missing));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawPositionRow>() {
        match result {
            Ok(raw) => {
                let name = raw.Player.trim();
                if name.is_empty() {
                    warn!("skipping position row with empty player name");
                    continue;
                }
                let eligible = fold_outfield(raw.Positions.trim());
                if let Some(token) = eligible
                    .split(',')
                    .map(str::trim)
                    .find(|t| Position::from_str_pos(t).is_none())
                {
                    debug!("'{}' lists unrecognized position '{}'", name, token);
                }
                rows.push(PlayerPositions {
                    player_name: name.to_string(),
                    eligible_positions: eligible,
                    rank: raw.Rank,
                    adp: raw.ADP.filter(|adp| adp.is_finite()),
                });
            }
            Err(e) => {
                warn!("skipping malformed position row: {}", e);
            }
        }
    }
    Ok(rows)
}
