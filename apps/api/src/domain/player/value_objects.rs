use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of an NBA player
///
/// Serialized as a bare integer, the same way the catalog reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The real NBA franchise a player is signed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NbaTeam {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub abbreviation: String,
}

/// Player value object
///
/// A reference copy of a catalog entry. Once added to a dream team it is
/// never modified; identity is carried entirely by `id`.
///
/// Catalog fields beyond the core set are optional and kept as-is so a
/// round trip through storage does not lose them.
///
/// # Example
/// ```
/// use dreamteam_api::domain::player::{NbaTeam, Player, PlayerId};
///
/// let player = Player::new(
///     PlayerId::new(237),
///     "LeBron",
///     "James",
///     "F",
///     NbaTeam {
///         id: 14,
///         name: "Lakers".to_string(),
///         full_name: "Los Angeles Lakers".to_string(),
///         abbreviation: "LAL".to_string(),
///     },
/// );
///
/// assert_eq!(player.display_name(), "LeBron James");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub team: NbaTeam,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_round: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_number: Option<u32>,
}

impl Player {
    /// Creates a player with only the core catalog fields set
    pub fn new(
        id: PlayerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: impl Into<String>,
        team: NbaTeam,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            position: position.into(),
            team,
            height: None,
            weight: None,
            jersey_number: None,
            college: None,
            country: None,
            draft_year: None,
            draft_round: None,
            draft_number: None,
        }
    }

    /// Returns "First Last", used in warnings about dropped players
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_catalog_payload() {
        let payload = json!({
            "id": 115,
            "first_name": "Stephen",
            "last_name": "Curry",
            "position": "G",
            "height": "6-2",
            "jersey_number": "30",
            "draft_year": 2009,
            "team": {
                "id": 10,
                "name": "Warriors",
                "full_name": "Golden State Warriors",
                "abbreviation": "GSW"
            }
        });

        let player: Player = serde_json::from_value(payload).unwrap();

        assert_eq!(player.id, PlayerId::new(115));
        assert_eq!(player.team.abbreviation, "GSW");
        assert_eq!(player.height.as_deref(), Some("6-2"));
        assert_eq!(player.draft_year, Some(2009));
        assert!(player.college.is_none());
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let player = Player::new(
            PlayerId::new(1),
            "A",
            "B",
            "C",
            NbaTeam {
                id: 1,
                name: "Hawks".to_string(),
                full_name: "Atlanta Hawks".to_string(),
                abbreviation: "ATL".to_string(),
            },
        );

        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["id"], 1);
        assert!(value.get("height").is_none());
        assert!(value.get("draft_number").is_none());
    }

    #[test]
    fn player_id_display() {
        assert_eq!(PlayerId::from(42).to_string(), "42");
    }
}
