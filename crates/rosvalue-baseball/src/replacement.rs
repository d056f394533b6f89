// Replacement level estimation.
//
// The replacement pool is whatever is left of the ranked hitter list once
// every team in the league has filled its starting lineup. Each position's
// replacement baseline is the average scoring rate of the best few pool
// players eligible there.

use tracing::debug;

use crate::model::{EnrichedHitter, ReplacementBaseline};
use crate::position::{RosterSlot, BASELINE_POSITIONS};
use crate::scoring::descending;

/// Pool players averaged into each position's baseline.
pub const REPLACEMENT_SAMPLE: usize = 5;

// ---------------------------------------------------------------------------
// Pool estimation
// ---------------------------------------------------------------------------

/// Remove presumed starters from `ranked` and return the survivors in rank
/// order.
///
/// Slots are processed in order against the shrinking pool: for each slot the
/// first `starters_per_slot` remaining players who can fill it are removed.
/// When fewer than that are eligible, all of them go.
pub fn estimate_replacement_pool<'a>(
    ranked: &'a [EnrichedHitter],
    slots: &[RosterSlot],
    starters_per_slot: usize,
) -> Vec<&'a EnrichedHitter> {
    let mut pool: Vec<&EnrichedHitter> = ranked.iter().collect();

    for slot in slots {
        let mut taken = 0;
        pool.retain(|h| {
            if taken < starters_per_slot && h.eligibility.fills(slot) {
                taken += 1;
                false
            } else {
                true
            }
        });
        debug!(slot = slot.label, taken, remaining = pool.len(), "filled starting slot");
    }

    pool
}

// ---------------------------------------------------------------------------
// Baselines
// ---------------------------------------------------------------------------

/// Mean points-per-game of the first `sample` pool players eligible at each
/// baseline position, sorted descending (undefined baselines last).
///
/// Undefined rates among the sampled players are skipped; a position with no
/// defined rate gets an undefined baseline.
pub fn replacement_baselines(
    pool: &[&EnrichedHitter],
    sample: usize,
) -> Vec<ReplacementBaseline> {
    let mut baselines: Vec<ReplacementBaseline> = BASELINE_POSITIONS
        .iter()
        .map(|&position| {
            let rates: Vec<f64> = pool
                .iter()
                .filter(|h| h.eligibility.contains(position))
                .take(sample)
                .filter_map(|h| h.fantasy_points_per_game)
                .collect();
            let replacement_points_per_game = if rates.is_empty() {
                None
            } else {
                Some(rates.iter().sum::<f64>() / rates.len() as f64)
            };
            ReplacementBaseline {
                position,
                replacement_points_per_game,
            }
        })
        .collect();

    baselines.sort_by(|a, b| {
        descending(a.replacement_points_per_game, b.replacement_points_per_game)
    });
    baselines
}
