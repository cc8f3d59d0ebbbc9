//! League and league rule responses.

use serde::Deserialize;
use time::OffsetDateTime;

/// A permanent, challenge or event league.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    /// League name, which doubles as its id.
    pub id: String,
    /// Realm the league runs on.
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Link to the league's ladder page.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_at: Option<OffsetDateTime>,
    /// End of the league. Permanent leagues have none.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub delve_event: bool,
    #[serde(default)]
    pub rules: Vec<LeagueRule>,
}

impl League {
    /// Check whether the league has a scheduled end, as challenge leagues do.
    pub fn is_timed(&self) -> bool {
        self.end_at.is_some()
    }
}

/// A modifier placed on a league, such as "Hardcore".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeagueRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_league() {
        let json = r#"{
            "id": "Harvest",
            "realm": "pc",
            "description": "A challenge league.",
            "url": "http://pathofexile.com/forum/view-thread/2866470",
            "startAt": "2020-06-19T20:00:00Z",
            "endAt": "2020-09-14T22:00:00Z",
            "delveEvent": true,
            "rules": [{"id": "NoParties", "name": "Solo", "description": "You may not party."}]
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.id, "Harvest");
        assert!(league.is_timed());
        assert!(league.delve_event);
        assert_eq!(league.rules[0].name, "Solo");
        assert_eq!(league.start_at.unwrap().year(), 2020);
    }

    #[test]
    fn test_permanent_league_has_no_end() {
        let json = r#"{"id": "Standard", "startAt": "2013-01-23T21:00:00Z", "endAt": null}"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert!(!league.is_timed());
        assert!(league.rules.is_empty());
    }
}
