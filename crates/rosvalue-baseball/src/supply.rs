// Data supplies consumed by the metrics pipeline.
//
// Each supply is a read-only source for one run. Implementations live in the
// application crate (HTTP and CSV); tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::model::{HitterProjection, PlayerPositions, TeamSchedule};

/// Why a supply failed to produce data. Both variants abort the run.
#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    /// Transport, upstream status or decoding failure.
    #[error("{source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A record lacks a field the pipeline needs.
    #[error("{source_name} record is missing required field `{field}`")]
    SchemaMismatch { source_name: String, field: String },
}

impl SupplyError {
    pub fn unavailable(source_name: &str, reason: impl ToString) -> Self {
        SupplyError::SourceUnavailable {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_field(source_name: &str, field: &str) -> Self {
        SupplyError::SchemaMismatch {
            source_name: source_name.to_string(),
            field: field.to_string(),
        }
    }
}

/// Standings source: games played and remaining per team.
#[async_trait]
pub trait ScheduleSupply: Send + Sync {
    async fn fetch_schedules(&self) -> Result<Vec<TeamSchedule>, SupplyError>;
}

/// Rest-of-season hitter projections.
#[async_trait]
pub trait ProjectionSupply: Send + Sync {
    async fn fetch_projections(&self) -> Result<Vec<HitterProjection>, SupplyError>;
}

/// Position eligibility table. Outfield tokens must already be folded to
/// "OF".
#[async_trait]
pub trait PositionSupply: Send + Sync {
    async fn load_positions(&self) -> Result<Vec<PlayerPositions>, SupplyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSchedules(Vec<TeamSchedule>);

    #[async_trait]
    impl ScheduleSupply for FixedSchedules {
        async fn fetch_schedules(&self) -> Result<Vec<TeamSchedule>, SupplyError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenPositions;

    #[async_trait]
    impl PositionSupply for BrokenPositions {
        async fn load_positions(&self) -> Result<Vec<PlayerPositions>, SupplyError> {
            Err(SupplyError::missing_field("positions", "Positions"))
        }
    }

    #[tokio::test]
    async fn supplies_usable_as_trait_objects() {
        let schedules: Box<dyn ScheduleSupply> = Box::new(FixedSchedules(vec![
            TeamSchedule::from_record("Chicago White Sox", 145, 30, 51),
        ]));
        let got = schedules.fetch_schedules().await.unwrap();
        assert_eq!(got[0].games_remaining, 81);

        let positions: Box<dyn PositionSupply> = Box::new(BrokenPositions);
        let err = positions.load_positions().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "positions record is missing required field `Positions`"
        );
    }

    #[test]
    fn unavailable_error_message() {
        let err = SupplyError::unavailable("standings", "HTTP 503");
        assert_eq!(err.to_string(), "standings unavailable: HTTP 503");
    }
}
