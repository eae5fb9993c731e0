//! Data structures for the bracket: teams, snapshots, stages, and the persisted document.

mod bracket;
mod team;
mod tournament;

pub use bracket::{
    MatchSlot, Pairing, Quarterfinals, Semifinals, Stage, StageAssignment, StageKind,
};
pub use team::{Points, Team, TeamId, TeamSnapshot};
pub use tournament::{TournamentDocument, TournamentError, TEAM_COUNT};
