//! TournamentDocument (the whole persisted state) and TournamentError.

use crate::models::bracket::{MatchSlot, Quarterfinals, Semifinals, Stage, StageKind};
use crate::models::team::{Team, TeamId};
use crate::store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fixed team slots in the bracket.
pub const TEAM_COUNT: TeamId = 8;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Malformed, missing or out-of-range request field.
    #[error("{0}")]
    InvalidInput(String),
    /// No team has this id.
    #[error("Team not found")]
    NotFound(TeamId),
    /// The persisted document could not be read or written.
    #[error("Tournament data is unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}

impl TournamentError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TournamentError::InvalidInput(message.into())
    }
}

/// Full tournament state: the eight teams and the three bracket stages.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentDocument {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub quarterfinals: Quarterfinals,
    #[serde(default)]
    pub semifinals: Semifinals,
    #[serde(default)]
    pub finals: MatchSlot,
}

impl TournamentDocument {
    /// Fresh document: "Team 1".."Team 8", zero points, no images, all stages empty.
    pub fn initial() -> Self {
        Self {
            teams: (1..=TEAM_COUNT).map(Team::new).collect(),
            quarterfinals: Quarterfinals::default(),
            semifinals: Semifinals::default(),
            finals: MatchSlot::default(),
        }
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable team by id, or `NotFound`.
    pub fn team_mut(&mut self, id: TeamId) -> Result<&mut Team, TournamentError> {
        self.teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TournamentError::NotFound(id))
    }

    /// Current value of a stage.
    pub fn stage(&self, kind: StageKind) -> Stage {
        match kind {
            StageKind::Quarterfinals => Stage::Quarterfinals(self.quarterfinals.clone()),
            StageKind::Semifinals => Stage::Semifinals(self.semifinals.clone()),
            StageKind::Finals => Stage::Finals(self.finals.clone()),
        }
    }

    /// Replace a stage wholesale with a value of the same kind.
    pub fn put_stage(&mut self, stage: Stage) {
        match stage {
            Stage::Quarterfinals(q) => self.quarterfinals = q,
            Stage::Semifinals(s) => self.semifinals = s,
            Stage::Finals(f) => self.finals = f,
        }
    }
}

impl Default for TournamentDocument {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_document_has_eight_default_teams() {
        let doc = TournamentDocument::initial();
        assert_eq!(doc.teams.len(), 8);
        for (i, team) in doc.teams.iter().enumerate() {
            let id = i as TeamId + 1;
            assert_eq!(team.id, id);
            assert_eq!(team.name, format!("Team {id}"));
            assert_eq!(team.points, 0);
            assert!(team.image.is_empty());
        }
        for kind in StageKind::ALL {
            assert!(doc.stage(kind).is_empty());
        }
    }

    #[test]
    fn missing_stages_default_to_empty() {
        let doc: TournamentDocument =
            serde_json::from_str(r#"{"teams":[{"id":1,"name":"Only","points":2,"image":""}]}"#)
                .unwrap();
        assert_eq!(doc.teams.len(), 1);
        assert!(doc.finals.is_empty());
        assert_eq!(doc.semifinals, Semifinals::default());
    }

    #[test]
    fn team_mut_unknown_id_is_not_found() {
        let mut doc = TournamentDocument::initial();
        assert!(matches!(doc.team_mut(99), Err(TournamentError::NotFound(99))));
    }
}
