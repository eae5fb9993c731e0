//! Bracket stages: match slots, the fixed 4/2/1 stage shapes, and requested pairings.

use crate::models::team::{TeamId, TeamSnapshot};
use serde::{Deserialize, Serialize};

/// One pairing within a stage. Either position may be absent; a half-filled slot is legal.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchSlot {
    pub team1: Option<TeamSnapshot>,
    pub team2: Option<TeamSnapshot>,
}

impl MatchSlot {
    /// Both positions absent.
    pub fn is_empty(&self) -> bool {
        self.team1.is_none() && self.team2.is_none()
    }
}

/// Quarterfinals: four named matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quarterfinals {
    pub match1: MatchSlot,
    pub match2: MatchSlot,
    pub match3: MatchSlot,
    pub match4: MatchSlot,
}

impl Quarterfinals {
    pub fn matches(&self) -> [&MatchSlot; 4] {
        [&self.match1, &self.match2, &self.match3, &self.match4]
    }
}

/// Semifinals: two named matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Semifinals {
    pub match1: MatchSlot,
    pub match2: MatchSlot,
}

impl Semifinals {
    pub fn matches(&self) -> [&MatchSlot; 2] {
        [&self.match1, &self.match2]
    }
}

/// Which round of the bracket an operation targets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Quarterfinals,
    Semifinals,
    Finals,
}

impl StageKind {
    pub const ALL: [StageKind; 3] = [
        StageKind::Quarterfinals,
        StageKind::Semifinals,
        StageKind::Finals,
    ];

    /// Lowercase name, as used in routes and response keys.
    pub fn as_str(self) -> &'static str {
        match self {
            StageKind::Quarterfinals => "quarterfinals",
            StageKind::Semifinals => "semifinals",
            StageKind::Finals => "finals",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn title(self) -> &'static str {
        match self {
            StageKind::Quarterfinals => "Quarterfinals",
            StageKind::Semifinals => "Semifinals",
            StageKind::Finals => "Finals",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of one stage. Serializes as the bare stage shape (finals is a single `MatchSlot`).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stage {
    Quarterfinals(Quarterfinals),
    Semifinals(Semifinals),
    Finals(MatchSlot),
}

impl Stage {
    /// The all-empty shape for a stage.
    pub fn empty(kind: StageKind) -> Self {
        match kind {
            StageKind::Quarterfinals => Stage::Quarterfinals(Quarterfinals::default()),
            StageKind::Semifinals => Stage::Semifinals(Semifinals::default()),
            StageKind::Finals => Stage::Finals(MatchSlot::default()),
        }
    }

    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Quarterfinals(_) => StageKind::Quarterfinals,
            Stage::Semifinals(_) => StageKind::Semifinals,
            Stage::Finals(_) => StageKind::Finals,
        }
    }

    /// Match slots in order (match1, match2, ...; finals has one).
    pub fn slots(&self) -> Vec<&MatchSlot> {
        match self {
            Stage::Quarterfinals(q) => q.matches().to_vec(),
            Stage::Semifinals(s) => s.matches().to_vec(),
            Stage::Finals(f) => vec![f],
        }
    }

    /// True when every slot in the stage is empty.
    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|slot| slot.is_empty())
    }
}

/// Team ids requested for the two positions of a match. `None` leaves the position absent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pairing {
    pub team1: Option<TeamId>,
    pub team2: Option<TeamId>,
}

impl Pairing {
    pub fn new(team1: Option<TeamId>, team2: Option<TeamId>) -> Self {
        Self { team1, team2 }
    }
}

/// Requested pairings for a whole stage, shaped like that stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageAssignment {
    Quarterfinals([Pairing; 4]),
    Semifinals([Pairing; 2]),
    Finals(Pairing),
}

impl StageAssignment {
    pub fn kind(&self) -> StageKind {
        match self {
            StageAssignment::Quarterfinals(_) => StageKind::Quarterfinals,
            StageAssignment::Semifinals(_) => StageKind::Semifinals,
            StageAssignment::Finals(_) => StageKind::Finals,
        }
    }
}
