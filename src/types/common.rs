//! Enumerations shared by request options.

use serde::{Deserialize, Serialize};

/// Platform a league or ladder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// PC realm
    #[default]
    Pc,
    /// Xbox realm
    Xbox,
    /// PlayStation realm
    Sony,
}

impl std::fmt::Display for Realm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Realm::Pc => write!(f, "pc"),
            Realm::Xbox => write!(f, "xbox"),
            Realm::Sony => write!(f, "sony"),
        }
    }
}

/// Kind of ladder to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderType {
    /// Character ladder of a league
    #[default]
    League,
    /// PvP season ladder
    Pvp,
    /// Labyrinth completion times
    Labyrinth,
}

impl std::fmt::Display for LadderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LadderType::League => write!(f, "league"),
            LadderType::Pvp => write!(f, "pvp"),
            LadderType::Labyrinth => write!(f, "labyrinth"),
        }
    }
}

/// Labyrinth difficulty, for labyrinth ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabyrinthDifficulty {
    /// Normal labyrinth
    Normal,
    /// Cruel labyrinth
    Cruel,
    /// Merciless labyrinth
    Merciless,
    /// Eternal labyrinth
    Eternal,
}

impl std::fmt::Display for LabyrinthDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LabyrinthDifficulty::Normal => "Normal",
            LabyrinthDifficulty::Cruel => "Cruel",
            LabyrinthDifficulty::Merciless => "Merciless",
            LabyrinthDifficulty::Eternal => "Eternal",
        };
        write!(f, "{}", s)
    }
}

/// League category used to filter the league list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueType {
    /// Permanent and current challenge leagues
    Main,
    /// Event leagues
    Event,
    /// Leagues of a named season
    Season,
}

impl std::fmt::Display for LeagueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueType::Main => write!(f, "main"),
            LeagueType::Event => write!(f, "event"),
            LeagueType::Season => write!(f, "season"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Realm::Sony).unwrap(), "\"sony\"");
        assert_eq!(
            serde_json::to_string(&LadderType::Labyrinth).unwrap(),
            "\"labyrinth\""
        );
        assert_eq!(
            serde_json::to_string(&LabyrinthDifficulty::Merciless).unwrap(),
            "\"Merciless\""
        );
        assert_eq!(serde_json::to_string(&LeagueType::Season).unwrap(), "\"season\"");
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(Realm::Xbox.to_string(), "xbox");
        assert_eq!(LadderType::Pvp.to_string(), "pvp");
        assert_eq!(LabyrinthDifficulty::Eternal.to_string(), "Eternal");
        assert_eq!(LeagueType::Main.to_string(), "main");
    }
}
