//! Integration tests for the tournament service: persistence, team edits and stage snapshots.

use bracket_tournament_web::{
    DocumentStore, JsonFileStore, Pairing, Stage, StageAssignment, StageKind, TournamentDocument,
    TournamentError, TournamentService,
};
use std::fs;
use tempfile::TempDir;

fn service() -> (TournamentService, TempDir) {
    let dir = TempDir::new().unwrap();
    let service = TournamentService::new(JsonFileStore::new(dir.path().join("data.json")));
    service.initialize_if_absent().unwrap();
    (service, dir)
}

fn pair(a: u32, b: u32) -> Pairing {
    Pairing::new(Some(a), Some(b))
}

#[test]
fn initialization_is_idempotent() {
    let (service, dir) = service();
    service.set_points(2, 9).unwrap();

    let again = TournamentService::new(JsonFileStore::new(dir.path().join("data.json")));
    assert!(!again.initialize_if_absent().unwrap());
    assert_eq!(again.teams().unwrap()[1].points, 9);
}

#[test]
fn set_points_changes_only_that_team() {
    let (service, _dir) = service();
    for id in 1..=8u32 {
        service.set_points(id, id as i64).unwrap();
    }
    service.set_points(4, 40).unwrap();
    let teams = service.teams().unwrap();
    for team in &teams {
        let expected = if team.id == 4 { 40 } else { team.id as i64 };
        assert_eq!(team.points, expected);
    }
}

#[test]
fn unknown_team_is_not_found_and_nothing_saved() {
    let (service, dir) = service();
    let before = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(matches!(
        service.set_points(99, 1),
        Err(TournamentError::NotFound(99))
    ));
    let after = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn empty_name_rejected_and_name_kept() {
    let (service, _dir) = service();
    assert!(matches!(
        service.set_name(1, ""),
        Err(TournamentError::InvalidInput(_))
    ));
    assert_eq!(service.teams().unwrap()[0].name, "Team 1");
}

#[test]
fn snapshot_survives_later_rename() {
    let (service, _dir) = service();
    let assignment = StageAssignment::Quarterfinals([
        pair(3, 5),
        Pairing::default(),
        Pairing::default(),
        Pairing::default(),
    ]);
    service.set_stage(&assignment).unwrap();
    service.set_name(3, "New").unwrap();

    let doc = service.tournament().unwrap();
    assert_eq!(doc.quarterfinals.match1.team1.as_ref().unwrap().name, "Team 3");
    assert_eq!(doc.teams[2].name, "New");
}

#[test]
fn unknown_id_in_stage_becomes_absent() {
    let (service, _dir) = service();
    let stage = service
        .set_stage(&StageAssignment::Finals(pair(99, 1)))
        .unwrap();
    let Stage::Finals(slot) = stage else {
        panic!("expected finals");
    };
    assert!(slot.team1.is_none());
    assert_eq!(slot.team2.unwrap().id, 1);
}

#[test]
fn reset_semifinals_empties_both_matches() {
    let (service, _dir) = service();
    service
        .set_stage(&StageAssignment::Semifinals([pair(1, 2), pair(3, 4)]))
        .unwrap();
    service.reset_stage(StageKind::Semifinals).unwrap();
    let stage = service.stage(StageKind::Semifinals).unwrap();
    assert_eq!(stage.slots().len(), 2);
    assert!(stage.is_empty());
}

#[test]
fn reset_all_points_zeroes_all_teams() {
    let (service, _dir) = service();
    service.set_points(1, 5).unwrap();
    service.set_points(8, -3).unwrap();
    service.reset_all_points().unwrap();
    assert!(service.teams().unwrap().iter().all(|t| t.points == 0));
}

#[test]
fn oversize_image_rejected_and_image_unchanged() {
    let (service, _dir) = service();
    let big = vec![1u8; 6 * 1024 * 1024];
    assert!(matches!(
        service.set_image(1, &big, "image/png"),
        Err(TournamentError::InvalidInput(_))
    ));
    assert!(service.teams().unwrap()[0].image.is_empty());
}

#[test]
fn image_stored_as_data_uri() {
    let (service, _dir) = service();
    let uri = service.set_image(6, b"GIF89a", "image/gif").unwrap();
    assert!(uri.starts_with("data:image/gif;base64,"));
    assert_eq!(service.teams().unwrap()[5].image, uri);
}

#[test]
fn corrupt_document_is_storage_error() {
    let (service, dir) = service();
    fs::write(dir.path().join("data.json"), "not json").unwrap();
    assert!(matches!(
        service.teams(),
        Err(TournamentError::StorageUnavailable(_))
    ));
}

#[test]
fn concurrent_updates_are_not_lost() {
    let (service, _dir) = service();
    let service = std::sync::Arc::new(service);
    let handles: Vec<_> = (1..=8u32)
        .map(|id| {
            let service = service.clone();
            std::thread::spawn(move || service.set_points(id, 100 + id as i64).unwrap())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    for team in service.teams().unwrap() {
        assert_eq!(team.points, 100 + team.id as i64);
    }
}

#[test]
fn persisted_layout_matches_document() {
    let (service, dir) = service();
    service
        .set_stage(&StageAssignment::Finals(Pairing::new(Some(2), None)))
        .unwrap();
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let doc: TournamentDocument = store.load().unwrap();
    assert_eq!(doc.finals.team1.as_ref().unwrap().id, 2);
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert!(raw["finals"]["team2"].is_null());
    assert_eq!(raw["quarterfinals"]["match4"]["team1"], serde_json::Value::Null);
}
