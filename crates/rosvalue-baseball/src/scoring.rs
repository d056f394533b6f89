// Points-league scoring and the rate arithmetic built on it.

use std::cmp::Ordering;

use crate::model::HitterProjection;

/// Average games a team plays in a week over a full season.
pub const GAMES_PER_WEEK: f64 = 6.2;

/// Points awarded per unit of each counting stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
    pub run: f64,
    pub run_batted_in: f64,
    pub stolen_base: f64,
    pub walk: f64,
    pub strikeout: f64,
}

/// The league's scoring system. Strikeouts cost half a point.
pub const HITTER_SCORING: ScoringWeights = ScoringWeights {
    single: 1.0,
    double: 2.0,
    triple: 3.0,
    home_run: 5.0,
    run: 1.0,
    run_batted_in: 1.0,
    stolen_base: 1.0,
    walk: 1.0,
    strikeout: -0.5,
};

impl ScoringWeights {
    pub fn score(&self, p: &HitterProjection) -> f64 {
        self.single * p.singles
            + self.double * p.doubles
            + self.triple * p.triples
            + self.home_run * p.home_runs
            + self.run * p.runs
            + self.run_batted_in * p.runs_batted_in
            + self.stolen_base * p.stolen_bases
            + self.walk * p.walks
            + self.strikeout * p.strikeouts
    }
}

/// Projected fantasy points for a hitter's remaining season.
pub fn fantasy_points(projection: &HitterProjection) -> f64 {
    HITTER_SCORING.score(projection)
}

/// `numerator / denominator`, or `None` when the denominator is missing or
/// zero or the quotient is not finite.
pub fn ratio(numerator: f64, denominator: Option<f64>) -> Option<f64> {
    let d = denominator?;
    if d == 0.0 {
        return None;
    }
    let q = numerator / d;
    q.is_finite().then_some(q)
}

/// Descending order for optional rates; undefined values sort last.
pub fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
