// Metrics pipeline: join the three supplies, score every hitter, estimate
// replacement level from the same pool, and derive value over replacement.
//
// Stages run strictly in order:
// 1. Index schedules by team short name and positions by folded player name.
// 2. Left-join each projection to both indexes and compute its scoring rates.
// 3. Rank by fantasy points.
// 4. Carve the replacement pool out of the ranking and average its rates
//    into per-position baselines.
// 5. Apply the baselines and rank by adjusted weekly value.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::model::{
    Eligibility, EnrichedHitter, HitterProjection, PlayerPositions, ReplacementBaseline,
    TeamSchedule,
};
use crate::names::{fold_accents, team_short_name};
use crate::position::{LEAGUE_TEAMS, STARTING_SLOTS};
use crate::replacement::{estimate_replacement_pool, replacement_baselines, REPLACEMENT_SAMPLE};
use crate::scoring::{descending, fantasy_points, ratio, GAMES_PER_WEEK};

/// League assumptions behind the replacement level estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationSettings {
    /// Teams in the league; each fills every starting slot once.
    pub league_teams: usize,
    /// Pool players averaged into each position's baseline.
    pub replacement_sample: usize,
}

impl Default for ValuationSettings {
    fn default() -> Self {
        ValuationSettings {
            league_teams: LEAGUE_TEAMS,
            replacement_sample: REPLACEMENT_SAMPLE,
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    /// All hitters, ranked by adjusted value over replacement per week.
    pub hitters: Vec<EnrichedHitter>,
    /// Hitters presumed unrostered, in fantasy-points order.
    pub replacement_pool: Vec<EnrichedHitter>,
    /// Per-position baselines in the order they were applied.
    pub baselines: Vec<ReplacementBaseline>,
}

// ---------------------------------------------------------------------------
// Pipeline entry points
// ---------------------------------------------------------------------------

/// Compute enriched metrics for every projected hitter, ranked by adjusted
/// value over replacement per week, under the default 12-team league.
pub fn compute_metrics(
    projections: &[HitterProjection],
    schedules: &[TeamSchedule],
    positions: &[PlayerPositions],
) -> Vec<EnrichedHitter> {
    compute_metrics_report(projections, schedules, positions, &ValuationSettings::default())
        .hitters
}

/// Run the full pipeline and keep the intermediate replacement pool and
/// baselines alongside the ranked hitters.
pub fn compute_metrics_report(
    projections: &[HitterProjection],
    schedules: &[TeamSchedule],
    positions: &[PlayerPositions],
    settings: &ValuationSettings,
) -> MetricsReport {
    let games_by_team = games_remaining_by_team(schedules);
    let positions_by_name = positions_by_folded_name(positions);

    let mut ranked: Vec<EnrichedHitter> = projections
        .iter()
        .map(|p| enrich(p, &games_by_team, &positions_by_name))
        .collect();

    let team_matches = ranked.iter().filter(|h| h.games_remaining.is_some()).count();
    let position_matches = ranked.iter().filter(|h| h.eligibility.is_known()).count();
    info!(
        hitters = ranked.len(),
        team_matches, position_matches, "joined projections to schedules and positions"
    );

    // Stable sort: ties keep arrival order.
    ranked.sort_by(|a, b| descending(a.fantasy_points, b.fantasy_points));

    let pool = estimate_replacement_pool(&ranked, STARTING_SLOTS, settings.league_teams);
    info!(pool_size = pool.len(), "estimated replacement pool");

    let baselines = replacement_baselines(&pool, settings.replacement_sample);
    for b in &baselines {
        info!(
            position = %b.position,
            points_per_game = ?b.replacement_points_per_game,
            "replacement baseline"
        );
    }

    let replacement_pool: Vec<EnrichedHitter> = pool
        .iter()
        .map(|&h| apply_baselines(h.clone(), &baselines))
        .collect();

    let mut hitters: Vec<EnrichedHitter> = ranked
        .into_iter()
        .map(|h| apply_baselines(h, &baselines))
        .collect();
    hitters.sort_by(|a, b| descending(a.adjusted_vorp_per_week, b.adjusted_vorp_per_week));

    MetricsReport {
        hitters,
        replacement_pool,
        baselines,
    }
}

// ---------------------------------------------------------------------------
// Join indexes
// ---------------------------------------------------------------------------

/// Team short name -> games remaining. The first schedule wins if two teams
/// share a short name.
fn games_remaining_by_team(schedules: &[TeamSchedule]) -> HashMap<String, u32> {
    let mut map = HashMap::with_capacity(schedules.len());
    for s in schedules {
        let short = team_short_name(&s.team_name);
        if map.contains_key(&short) {
            warn!("duplicate team short name '{}' from '{}', keeping first", short, s.team_name);
            continue;
        }
        map.insert(short, s.games_remaining);
    }
    map
}

/// Folded player name -> position entry. The first entry wins for
/// duplicate names.
fn positions_by_folded_name(positions: &[PlayerPositions]) -> HashMap<String, &PlayerPositions> {
    let mut map = HashMap::with_capacity(positions.len());
    for p in positions {
        let key = fold_accents(&p.player_name);
        if map.contains_key(&key) {
            debug!("duplicate position entry for '{}', keeping first", key);
            continue;
        }
        map.insert(key, p);
    }
    map
}

// ---------------------------------------------------------------------------
// Per-hitter derivation
// ---------------------------------------------------------------------------

/// Join one projection and derive its scoring rates. Value over replacement
/// stays undefined until baselines are applied.
fn enrich(
    projection: &HitterProjection,
    games_by_team: &HashMap<String, u32>,
    positions_by_name: &HashMap<String, &PlayerPositions>,
) -> EnrichedHitter {
    let games_remaining = games_by_team.get(&projection.team_short_name).copied();

    let mut projection = projection.clone();
    projection.player_name = fold_accents(&projection.player_name);

    let entry = positions_by_name.get(&projection.player_name).copied();
    if entry.is_none() {
        debug!("no position entry for '{}'", projection.player_name);
    }

    let points = Some(fantasy_points(&projection)).filter(|p| p.is_finite());
    if points.is_none() {
        debug!("'{}' has a blank stat; points undefined", projection.player_name);
    }
    let games_remaining_ratio = ratio(projection.games_played, games_remaining.map(f64::from));
    let fantasy_points_per_game = points.and_then(|p| ratio(p, Some(projection.games_played)));
    let fantasy_points_per_week = fantasy_points_per_game
        .zip(games_remaining_ratio)
        .map(|(per_game, share)| per_game * GAMES_PER_WEEK * share);

    EnrichedHitter {
        projection,
        games_remaining,
        eligibility: entry.map_or(Eligibility::Unknown, |e| {
            Eligibility::Known(e.eligible_positions.clone())
        }),
        rank: entry.map(|e| e.rank),
        adp: entry.and_then(|e| e.adp),
        fantasy_points: points,
        games_remaining_ratio,
        fantasy_points_per_game,
        fantasy_points_per_week,
        vorp_per_game: None,
        adjusted_vorp_per_game: None,
        vorp_per_week: None,
        adjusted_vorp_per_week: None,
    }
}

/// Set value over replacement from the baselines, applied in order.
///
/// Each matching baseline overwrites the previous one, so a multi-position
/// player ends up measured against the last matching baseline in the list,
/// not the most favourable one.
fn apply_baselines(mut hitter: EnrichedHitter, baselines: &[ReplacementBaseline]) -> EnrichedHitter {
    let Some(baseline) = baselines
        .iter()
        .rev()
        .find(|b| hitter.eligibility.contains(b.position))
    else {
        return hitter;
    };

    let vorp = hitter
        .fantasy_points_per_game
        .zip(baseline.replacement_points_per_game)
        .map(|(rate, replacement)| rate - replacement);
    let adjusted = vorp.and_then(|v| {
        ratio(
            v * hitter.projection.games_played,
            hitter.games_remaining.map(f64::from),
        )
    });

    hitter.vorp_per_game = vorp;
    hitter.adjusted_vorp_per_game = adjusted;
    hitter.vorp_per_week = vorp.map(|v| v * GAMES_PER_WEEK);
    hitter.adjusted_vorp_per_week = adjusted.map(|v| v * GAMES_PER_WEEK);
    hitter
}
