// Library root: rest-of-season hitter valuation.
//
// Everything in this crate is pure: the supply traits describe where data
// comes from, but fetching it lives in the application crate.

pub mod metrics;
pub mod model;
pub mod names;
pub mod position;
pub mod replacement;
pub mod scoring;
pub mod supply;

pub use metrics::{compute_metrics, compute_metrics_report, MetricsReport, ValuationSettings};
pub use model::{
    EnrichedHitter, Eligibility, HitterProjection, PlayerPositions, ReplacementBaseline,
    TeamSchedule,
};
pub use supply::{PositionSupply, ProjectionSupply, ScheduleSupply, SupplyError};
