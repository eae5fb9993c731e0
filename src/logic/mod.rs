//! Bracket business logic: team edits and stage snapshots over a `TournamentDocument`.

mod bracket;
mod teams;

pub use bracket::{get_stage, reset_stage, set_stage, snapshot_pairing};
pub use teams::{
    encode_data_uri, reset_all_points, set_image, set_name, set_points, validate_image,
    ALLOWED_IMAGE_TYPES, MAX_IMAGE_BYTES,
};
