use rosvalue_app::sources::{ProjectionsClient, StandingsClient};
use rosvalue_baseball::{ProjectionSupply, ScheduleSupply, SupplyError};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================================
// Standings
// ============================================================================

#[tokio::test]
async fn standings_sends_league_and_season_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/standings"))
        .and(query_param("leagueId", "103,104"))
        .and(query_param("season", "2026"))
        .and(query_param("standingsTypes", "regularSeason"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(include_str!("fixtures/standings.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = StandingsClient::new(
        &format!("{}/api/v1/standings", server.uri()),
        "103,104",
        2026,
        TIMEOUT,
    )
    .unwrap();
    let schedules = client.fetch_schedules().await.unwrap();

    assert_eq!(schedules.len(), 4);
    let names: Vec<&str> = schedules.iter().map(|s| s.team_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "New York Yankees",
            "Boston Red Sox",
            "Chicago White Sox",
            "Los Angeles Dodgers"
        ]
    );
    assert_eq!(schedules[2].games_played, 82);
    assert_eq!(schedules[2].games_remaining, 80);
    assert_eq!(schedules[3].team_id, 119);
}

#[tokio::test]
async fn standings_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/standings"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = StandingsClient::new(
        &format!("{}/api/v1/standings", server.uri()),
        "103,104",
        2026,
        TIMEOUT,
    )
    .unwrap();
    let err = client.fetch_schedules().await.unwrap_err();
    match err {
        SupplyError::SourceUnavailable { source_name, reason } => {
            assert_eq!(source_name, "standings");
            assert!(reason.contains("503"), "reason was {reason}");
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn standings_missing_records_is_schema_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"copyright": "x"}"#))
        .mount(&server)
        .await;

    let client = StandingsClient::new(&server.uri(), "103", 2026, TIMEOUT).unwrap();
    let err = client.fetch_schedules().await.unwrap_err();
    assert!(matches!(
        err,
        SupplyError::SchemaMismatch { field, .. } if field == "records"
    ));
}

// ============================================================================
// Projections
// ============================================================================

#[tokio::test]
async fn projections_parsed_from_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projections"))
        .and(query_param("type", "rthebat"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(include_str!("fixtures/projections.html")),
        )
        .mount(&server)
        .await;

    let client = ProjectionsClient::new(
        &format!("{}/projections?pos=all&stats=bat&type=rthebat", server.uri()),
        TIMEOUT,
    )
    .unwrap();
    let projections = client.fetch_projections().await.unwrap();

    assert_eq!(projections.len(), 5);
    assert_eq!(projections[0].player_name, "Aaron Judge");
    assert_eq!(projections[0].team_short_name, "Yankees");
    assert_eq!(projections[0].home_runs, 24.6);
    assert_eq!(projections[0].games_played, 78.0);
    assert_eq!(projections[3].player_name, "Teoscar Hernández");
    assert_eq!(projections[4].team_short_name, "");
}

#[tokio::test]
async fn projections_page_without_data_is_schema_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Access denied</body></html>"),
        )
        .mount(&server)
        .await;

    let client = ProjectionsClient::new(&server.uri(), TIMEOUT).unwrap();
    let err = client.fetch_projections().await.unwrap_err();
    assert!(matches!(
        err,
        SupplyError::SchemaMismatch { source_name, .. } if source_name == "projections"
    ));
}

#[tokio::test]
async fn projections_not_found_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ProjectionsClient::new(&server.uri(), TIMEOUT).unwrap();
    let err = client.fetch_projections().await.unwrap_err();
    assert!(matches!(err, SupplyError::SourceUnavailable { .. }));
}
