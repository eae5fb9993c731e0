//! Bracket stages: snapshot requested pairings into match slots, read and reset stages.
//!
//! Winners are never advanced automatically; every stage changes only through
//! [`set_stage`] or [`reset_stage`].

use crate::models::{
    MatchSlot, Pairing, Quarterfinals, Semifinals, Stage, StageAssignment, StageKind, Team,
    TeamId, TeamSnapshot, TournamentDocument,
};

/// Snapshot of the team with `id`, or `None` when the id is absent or unknown.
fn snapshot(teams: &[Team], id: Option<TeamId>) -> Option<TeamSnapshot> {
    let id = id?;
    teams.iter().find(|t| t.id == id).map(TeamSnapshot::from)
}

/// Build a match slot from requested ids. Unknown ids become absent positions, not errors.
pub fn snapshot_pairing(teams: &[Team], pairing: Pairing) -> MatchSlot {
    MatchSlot {
        team1: snapshot(teams, pairing.team1),
        team2: snapshot(teams, pairing.team2),
    }
}

/// Current value of a stage.
pub fn get_stage(doc: &TournamentDocument, kind: StageKind) -> Stage {
    doc.stage(kind)
}

/// Replace a stage with snapshots of the requested teams as they are now. Returns the new stage.
pub fn set_stage(doc: &mut TournamentDocument, assignment: &StageAssignment) -> Stage {
    let teams = &doc.teams;
    let stage = match assignment {
        StageAssignment::Quarterfinals([m1, m2, m3, m4]) => Stage::Quarterfinals(Quarterfinals {
            match1: snapshot_pairing(teams, *m1),
            match2: snapshot_pairing(teams, *m2),
            match3: snapshot_pairing(teams, *m3),
            match4: snapshot_pairing(teams, *m4),
        }),
        StageAssignment::Semifinals([m1, m2]) => Stage::Semifinals(Semifinals {
            match1: snapshot_pairing(teams, *m1),
            match2: snapshot_pairing(teams, *m2),
        }),
        StageAssignment::Finals(pairing) => Stage::Finals(snapshot_pairing(teams, *pairing)),
    };
    doc.put_stage(stage.clone());
    stage
}

/// Clear every slot of a stage.
pub fn reset_stage(doc: &mut TournamentDocument, kind: StageKind) {
    doc.put_stage(Stage::empty(kind));
}
