//! 8-team tournament bracket web app: library with models, bracket logic, storage and HTTP routes.

pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;
pub mod web;

pub use config::ServerConfig;
pub use logic::{
    get_stage, reset_all_points, reset_stage, set_image, set_name, set_points, set_stage,
    MAX_IMAGE_BYTES,
};
pub use models::{
    MatchSlot, Pairing, Points, Quarterfinals, Semifinals, Stage, StageAssignment, StageKind,
    Team, TeamId, TeamSnapshot, TournamentDocument, TournamentError,
};
pub use service::TournamentService;
pub use store::{DocumentStore, JsonFileStore, StoreError};
