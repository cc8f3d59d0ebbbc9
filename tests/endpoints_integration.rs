use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use poe_api_client::error::{OptionsError, PoeError};
use poe_api_client::rate_limit::limits::UNLIMITED_RATE;
use poe_api_client::rest::{
    ClientOptions, GetLeagueOptions, GetLeagueRuleOptions, GetLeaguesOptions,
    GetPvpMatchesOptions, GetStashOptions, PoeApi, PoeClient,
};
use poe_api_client::types::{LeagueType, Realm};

fn build_client(server: &MockServer) -> PoeClient {
    PoeClient::builder()
        .options(ClientOptions {
            rate_limit: UNLIMITED_RATE,
            stash_rate_limit: UNLIMITED_RATE,
            ..Default::default()
        })
        .base_url(server.uri())
        .ninja_base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_leagues_with_params() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "Standard", "realm": "xbox", "startAt": "2013-01-23T21:00:00Z", "endAt": null}
    ]);

    Mock::given(method("GET"))
        .and(path("/leagues"))
        .and(query_param("type", "main"))
        .and(query_param("realm", "xbox"))
        .and(query_param("compact", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = GetLeaguesOptions {
        league_type: Some(LeagueType::Main),
        realm: Some(Realm::Xbox),
        compact: true,
        ..Default::default()
    };
    let leagues = client.get_leagues(&options).await.unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].realm.as_deref(), Some("xbox"));
}

#[tokio::test]
async fn test_invalid_options_send_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = GetLeaguesOptions {
        league_type: Some(LeagueType::Season),
        ..Default::default()
    };
    assert!(matches!(
        client.get_leagues(&options).await,
        Err(PoeError::Options(OptionsError::MissingSeason))
    ));
    assert!(matches!(
        client.get_league(&GetLeagueOptions::default()).await,
        Err(PoeError::Options(OptionsError::InvalidLeagueId))
    ));
    assert!(matches!(
        client.get_league_rule(&GetLeagueRuleOptions::default()).await,
        Err(PoeError::Options(OptionsError::MissingLeagueRuleId))
    ));
}

#[tokio::test]
async fn test_get_current_challenge_league() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "Standard", "startAt": "2013-01-23T21:00:00Z", "endAt": null},
        {"id": "Hardcore", "startAt": "2013-01-23T21:00:00Z", "endAt": null},
        {"id": "Harvest", "startAt": "2020-06-19T20:00:00Z", "endAt": "2020-09-14T22:00:00Z"},
        {"id": "Hardcore Harvest", "startAt": "2020-06-19T20:00:00Z", "endAt": "2020-09-14T22:00:00Z"}
    ]);

    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let league = client.get_current_challenge_league().await.unwrap();
    assert_eq!(league.id, "Harvest");
}

#[tokio::test]
async fn test_no_challenge_league() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{"id": "Standard", "endAt": null}]);

    Mock::given(method("GET"))
        .and(path("/leagues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(matches!(
        client.get_current_challenge_league().await,
        Err(PoeError::NoChallengeLeague)
    ));
}

#[tokio::test]
async fn test_get_league_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues/Standard"))
        .and(query_param("realm", "sony"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "Standard"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = GetLeagueOptions {
        id: "Standard".to_string(),
        realm: Some(Realm::Sony),
    };
    assert_eq!(client.get_league(&options).await.unwrap().id, "Standard");
}

#[tokio::test]
async fn test_get_league_rules() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/league-rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "Hardcore", "name": "Hardcore", "description": "A character killed in Hardcore is moved to its parent league."},
            {"id": "NoParties", "name": "Solo"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/league-rules/NoParties"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "NoParties", "name": "Solo"})),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rules = client.get_league_rules().await.unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[1].description, None);

    let rule = client
        .get_league_rule(&GetLeagueRuleOptions::new("NoParties"))
        .await
        .unwrap();
    assert_eq!(rule.name, "Solo");
}

#[tokio::test]
async fn test_unknown_league_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/leagues/Nonexistent"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get_league(&GetLeagueOptions::new("Nonexistent")).await;
    assert!(matches!(result, Err(PoeError::NotFound)));
}

#[tokio::test]
async fn test_get_pvp_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pvp-matches"))
        .and(query_param("type", "season"))
        .and(query_param("season", "EUPvPSeason1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "EU01", "startAt": "2020-01-01T18:00:00Z", "endAt": "2020-01-01T19:00:00Z", "glickoRatings": true, "pvp": true, "style": "Swiss"}
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = GetPvpMatchesOptions {
        match_type: Some("season".to_string()),
        season: Some("EUPvPSeason1".to_string()),
        realm: None,
    };
    let matches = client.get_pvp_matches(&options).await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].style.as_deref(), Some("Swiss"));
}

#[tokio::test]
async fn test_get_stashes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public-stash-tabs"))
        .and(query_param("id", "100-200-300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_change_id": "101-201-301",
            "stashes": [{"id": "tab", "public": true, "accountName": "trader", "items": []}]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let chunk = client
        .get_stashes(&GetStashOptions::from_change("100-200-300"))
        .await
        .unwrap();
    assert_eq!(chunk.next_change_id, "101-201-301");
    assert_eq!(chunk.stashes[0].account_name.as_deref(), Some("trader"));
}

#[tokio::test]
async fn test_get_latest_stash_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/Data/GetStats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "next_change_id": "555-666-777"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    // Uncached: each call reaches the server.
    assert_eq!(client.get_latest_stash_id().await.unwrap(), "555-666-777");
    assert_eq!(client.get_latest_stash_id().await.unwrap(), "555-666-777");
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/league-rules"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(matches!(
        client.get_league_rules().await,
        Err(PoeError::Json(_))
    ));
}

async fn count_rules<C: PoeApi>(client: &C) -> poe_api_client::Result<usize> {
    Ok(client.get_league_rules().await?.len())
}

#[tokio::test]
async fn test_generic_caller_through_trait() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/league-rules"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": "Hardcore", "name": "Hardcore"}])),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(count_rules(&client).await.unwrap(), 1);
}
