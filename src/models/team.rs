//! Team and TeamSnapshot data structures.

use serde::{Deserialize, Serialize};

/// Identifier of one of the eight fixed team slots (1..=8).
pub type TeamId = u32;

/// Score kept for a team by the admin.
pub type Points = i64;

/// A team slot. Created once with the document; only `name`, `points` and `image` ever change.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub points: Points,
    /// `data:<mime>;base64,<payload>` URI, or empty when no image was uploaded.
    #[serde(default)]
    pub image: String,
}

impl Team {
    /// Default slot: "Team N", zero points, no image.
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            name: format!("Team {id}"),
            points: 0,
            image: String::new(),
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Copy of a team's displayable fields, frozen at the moment it was placed in a bracket.
/// Later edits to the source team do not reach it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub points: Points,
    #[serde(default)]
    pub image: String,
}

impl From<&Team> for TeamSnapshot {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            points: team.points,
            image: team.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_has_default_fields() {
        let t = Team::new(4);
        assert_eq!(t.name, "Team 4");
        assert_eq!(t.points, 0);
        assert!(!t.has_image());
    }

    #[test]
    fn snapshot_is_detached_from_team() {
        let mut t = Team::new(2);
        t.points = 7;
        let snap = TeamSnapshot::from(&t);
        t.name = "Renamed".into();
        t.points = 0;
        assert_eq!(snap.name, "Team 2");
        assert_eq!(snap.points, 7);
    }

    #[test]
    fn team_without_image_field_deserializes_empty() {
        let t: Team = serde_json::from_str(r#"{"id":1,"name":"A","points":3}"#).unwrap();
        assert_eq!(t.image, "");
    }
}
