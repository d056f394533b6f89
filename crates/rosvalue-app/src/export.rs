// CSV export of valued hitters.
//
// One flat row per hitter; undefined values become empty cells.

use rosvalue_baseball::EnrichedHitter;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write CSV {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

/// Header row, in `HitterRow` field order.
const COLUMNS: [&str; 24] = [
    "PlayerName", "ShortName", "Positions", "Rank", "ADP", "1B", "2B", "3B", "HR", "R", "RBI",
    "SB", "BB", "SO", "G", "GL", "FP", "G/GL", "FPpg", "FPpw", "VORPpg", "aVORPpg", "VORPpw",
    "aVORPpw",
];

/// Column layout of the exported tables.
#[derive(Debug, Serialize)]
struct HitterRow<'a> {
    #[serde(rename = "PlayerName")]
    player_name: &'a str,
    #[serde(rename = "ShortName")]
    team: &'a str,
    #[serde(rename = "Positions")]
    positions: &'a str,
    #[serde(rename = "Rank")]
    rank: Option<u32>,
    #[serde(rename = "ADP")]
    adp: Option<f64>,
    #[serde(rename = "1B")]
    singles: Option<f64>,
    #[serde(rename = "2B")]
    doubles: Option<f64>,
    #[serde(rename = "3B")]
    triples: Option<f64>,
    #[serde(rename = "HR")]
    home_runs: Option<f64>,
    #[serde(rename = "R")]
    runs: Option<f64>,
    #[serde(rename = "RBI")]
    runs_batted_in: Option<f64>,
    #[serde(rename = "SB")]
    stolen_bases: Option<f64>,
    #[serde(rename = "BB")]
    walks: Option<f64>,
    #[serde(rename = "SO")]
    strikeouts: Option<f64>,
    #[serde(rename = "G")]
    games: Option<f64>,
    #[serde(rename = "GL")]
    games_left: Option<u32>,
    #[serde(rename = "FP")]
    fantasy_points: Option<f64>,
    #[serde(rename = "G/GL")]
    games_ratio: Option<f64>,
    #[serde(rename = "FPpg")]
    fp_per_game: Option<f64>,
    #[serde(rename = "FPpw")]
    fp_per_week: Option<f64>,
    #[serde(rename = "VORPpg")]
    vorp_per_game: Option<f64>,
    #[serde(rename = "aVORPpg")]
    adjusted_vorp_per_game: Option<f64>,
    #[serde(rename = "VORPpw")]
    vorp_per_week: Option<f64>,
    #[serde(rename = "aVORPpw")]
    adjusted_vorp_per_week: Option<f64>,
}

/// Blank (NaN) stats export as empty cells.
fn stat(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl<'a> From<&'a EnrichedHitter> for HitterRow<'a> {
    fn from(h: &'a EnrichedHitter) -> Self {
        let p = &h.projection;
        HitterRow {
            player_name: &p.player_name,
            team: &p.team_short_name,
            positions: h.eligibility.as_str(),
            rank: h.rank,
            adp: h.adp,
            singles: stat(p.singles),
            doubles: stat(p.doubles),
            triples: stat(p.triples),
            home_runs: stat(p.home_runs),
            runs: stat(p.runs),
            runs_batted_in: stat(p.runs_batted_in),
            stolen_bases: stat(p.stolen_bases),
            walks: stat(p.walks),
            strikeouts: stat(p.strikeouts),
            games: stat(p.games_played),
            games_left: h.games_remaining,
            fantasy_points: h.fantasy_points,
            games_ratio: h.games_remaining_ratio,
            fp_per_game: h.fantasy_points_per_game,
            fp_per_week: h.fantasy_points_per_week,
            vorp_per_game: h.vorp_per_game,
            adjusted_vorp_per_game: h.adjusted_vorp_per_game,
            vorp_per_week: h.vorp_per_week,
            adjusted_vorp_per_week: h.adjusted_vorp_per_week,
        }
    }
}

/// Write hitters as CSV in the given order. The header is written even when
/// there are no rows.
pub fn write_hitters<'a, W, I>(wtr: W, hitters: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a EnrichedHitter>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(wtr);
    writer.write_record(COLUMNS)?;
    for h in hitters {
        writer.serialize(HitterRow::from(h))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write hitters to a CSV file, replacing any existing file.
pub fn export_hitters<'a, I>(path: &Path, hitters: I) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a EnrichedHitter>,
{
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_hitters(file, hitters).map_err(|e| ExportError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosvalue_baseball::{Eligibility, HitterProjection};

    fn hitter(name: &str, eligibility: Eligibility, vorp: Option<f64>) -> EnrichedHitter {
        EnrichedHitter {
            projection: HitterProjection {
                player_name: name.into(),
                team_short_name: "Yankees".into(),
                singles: 40.0,
                doubles: 10.0,
                triples: 1.0,
                home_runs: 12.0,
                runs: 40.0,
                runs_batted_in: 38.0,
                stolen_bases: 2.0,
                walks: 20.0,
                strikeouts: 50.0,
                games_played: 75.0,
            },
            games_remaining: Some(81),
            eligibility,
            rank: Some(3),
            adp: None,
            fantasy_points: Some(200.0),
            games_remaining_ratio: Some(75.0 / 81.0),
            fantasy_points_per_game: Some(200.0 / 75.0),
            fantasy_points_per_week: Some(200.0 / 75.0 * 6.2),
            vorp_per_game: vorp,
            adjusted_vorp_per_game: vorp,
            vorp_per_week: vorp.map(|v| v * 6.2),
            adjusted_vorp_per_week: vorp.map(|v| v * 6.2),
        }
    }

    fn render(hitters: &[EnrichedHitter]) -> String {
        let mut buf = Vec::new();
        write_hitters(&mut buf, hitters).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_lists_every_column() {
        let out = render(&[hitter("Aaron Judge", Eligibility::Known("OF".into()), Some(1.0))]);
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "PlayerName,ShortName,Positions,Rank,ADP,1B,2B,3B,HR,R,RBI,SB,BB,SO,G,GL,FP,G/GL,\
             FPpg,FPpw,VORPpg,aVORPpg,VORPpw,aVORPpw"
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let out = render(&[]);
        assert_eq!(out.lines().count(), 1);
        assert_eq!(out.lines().next().unwrap().split(',').count(), 24);
        assert!(out.starts_with("PlayerName,ShortName,"));
    }

    #[test]
    fn header_written_once() {
        let hitters = vec![
            hitter("First", Eligibility::Known("C".into()), Some(2.0)),
            hitter("Second", Eligibility::Known("SS".into()), Some(1.0)),
        ];
        let out = render(&hitters);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.matches("PlayerName").count(), 1);
    }

    #[test]
    fn undefined_values_are_empty_cells() {
        let out = render(&[hitter("Nobody", Eligibility::Unknown, None)]);
        let row = out.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 24);
        assert_eq!(cells[0], "Nobody");
        assert_eq!(cells[2], "N/A");
        assert_eq!(cells[3], "3");
        assert_eq!(cells[4], "");
        assert_eq!(cells[15], "81");
        assert!(cells[20..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn blank_stat_is_empty_cell() {
        let mut h = hitter("Blank Stat", Eligibility::Known("C".into()), None);
        h.projection.strikeouts = f64::NAN;
        h.fantasy_points = None;
        let out = render(&[h]);
        let row = out.lines().nth(1).unwrap();
        assert!(!row.contains("NaN"));
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells[13], "");
        assert_eq!(cells[16], "");
        assert_eq!(cells[12], "20.0");
    }

    #[test]
    fn keeps_input_order() {
        let hitters = vec![
            hitter("First", Eligibility::Known("C".into()), Some(2.0)),
            hitter("Second", Eligibility::Known("SS".into()), Some(1.0)),
        ];
        let out = render(&hitters);
        let names: Vec<&str> = out
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn multi_position_cell_is_quoted() {
        let out = render(&[hitter("Two Way", Eligibility::Known("2B,SS".into()), Some(0.5))]);
        assert!(out.lines().nth(1).unwrap().contains("\"2B,SS\""));
    }

    #[test]
    fn export_to_file() {
        let path = std::env::temp_dir().join("rosvalue_export_test.csv");
        let hitters = vec![hitter("Aaron Judge", Eligibility::Known("OF".into()), Some(1.0))];
        export_hitters(&path, &hitters).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_file(&path);
    }
}
