//! Load-mutate-save orchestration over a [`DocumentStore`].
//!
//! A single mutex guards every sequence, so two concurrent requests can no longer
//! lose each other's update. Each operation is one attempt; nothing is retried.

use crate::logic;
use crate::models::{
    Points, Stage, StageAssignment, StageKind, Team, TeamId, TournamentDocument, TournamentError,
};
use crate::store::{DocumentStore, JsonFileStore, StoreError};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Entry point for every tournament operation.
pub struct TournamentService<S: DocumentStore = JsonFileStore> {
    store: Mutex<S>,
}

impl<S: DocumentStore> TournamentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// A panic mid-operation never saved anything, so the document on disk is still valid.
    fn lock(&self) -> MutexGuard<'_, S> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Result<TournamentDocument, TournamentError> {
        Ok(self.lock().load()?)
    }

    /// Load, apply `f`, and save only if `f` succeeded.
    fn update<T>(
        &self,
        f: impl FnOnce(&mut TournamentDocument) -> Result<T, TournamentError>,
    ) -> Result<T, TournamentError> {
        let store = self.lock();
        let mut doc = store.load()?;
        let out = f(&mut doc)?;
        store.save(&doc)?;
        Ok(out)
    }

    /// Create the default document if none is persisted. Returns true if it was created.
    pub fn initialize_if_absent(&self) -> Result<bool, StoreError> {
        self.lock().initialize_if_absent()
    }

    /// The whole document.
    pub fn tournament(&self) -> Result<TournamentDocument, TournamentError> {
        self.read()
    }

    pub fn teams(&self) -> Result<Vec<Team>, TournamentError> {
        Ok(self.read()?.teams)
    }

    pub fn set_points(&self, team_id: TeamId, points: Points) -> Result<(), TournamentError> {
        self.update(|doc| logic::set_points(doc, team_id, points))?;
        log::info!("Team {} points set to {}", team_id, points);
        Ok(())
    }

    pub fn set_name(&self, team_id: TeamId, name: &str) -> Result<(), TournamentError> {
        self.update(|doc| logic::set_name(doc, team_id, name))?;
        log::info!("Team {} renamed", team_id);
        Ok(())
    }

    /// Inline an uploaded image into the team. Type and size are checked before the document is touched.
    pub fn set_image(
        &self,
        team_id: TeamId,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<String, TournamentError> {
        logic::validate_image(bytes, mime_type)?;
        let uri = self.update(|doc| logic::set_image(doc, team_id, bytes, mime_type))?;
        log::info!("Team {} image updated ({} bytes)", team_id, bytes.len());
        Ok(uri)
    }

    pub fn reset_all_points(&self) -> Result<(), TournamentError> {
        self.update(|doc| {
            logic::reset_all_points(doc);
            Ok(())
        })?;
        log::info!("All team points reset");
        Ok(())
    }

    pub fn stage(&self, kind: StageKind) -> Result<Stage, TournamentError> {
        Ok(logic::get_stage(&self.read()?, kind))
    }

    /// Snapshot the requested teams into the stage and persist. Returns the new stage.
    pub fn set_stage(&self, assignment: &StageAssignment) -> Result<Stage, TournamentError> {
        let stage = self.update(|doc| Ok(logic::set_stage(doc, assignment)))?;
        log::info!("{} updated", assignment.kind().title());
        Ok(stage)
    }

    pub fn reset_stage(&self, kind: StageKind) -> Result<(), TournamentError> {
        self.update(|doc| {
            logic::reset_stage(doc, kind);
            Ok(())
        })?;
        log::info!("{} reset", kind.title());
        Ok(())
    }
}
