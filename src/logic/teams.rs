//! Team registry edits: points, names, images, and the global points reset.

use crate::models::{Points, TeamId, TournamentDocument, TournamentError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Largest accepted image payload (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Image MIME types accepted for team images. `image/jpg` is non-standard but sent by some clients.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Replace a team's points.
pub fn set_points(
    doc: &mut TournamentDocument,
    team_id: TeamId,
    points: Points,
) -> Result<(), TournamentError> {
    doc.team_mut(team_id)?.points = points;
    Ok(())
}

/// Rename a team. Blank names are rejected and leave the team untouched; the stored name is trimmed.
pub fn set_name(
    doc: &mut TournamentDocument,
    team_id: TeamId,
    name: &str,
) -> Result<(), TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::invalid_input("Name must be a non-empty string"));
    }
    doc.team_mut(team_id)?.name = name.to_string();
    Ok(())
}

/// Check type and size of an uploaded image. Runs before any team lookup.
pub fn validate_image(bytes: &[u8], mime_type: &str) -> Result<(), TournamentError> {
    let mime_type = mime_type.trim().to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
        return Err(TournamentError::invalid_input(
            "Only image files are allowed (jpeg, png, gif)",
        ));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(TournamentError::invalid_input("Image exceeds the 5 MiB limit"));
    }
    Ok(())
}

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(bytes: &[u8], mime_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime_type.trim().to_ascii_lowercase(),
        STANDARD.encode(bytes)
    )
}

/// Validate the image, then inline it as the team's image, replacing any previous one.
/// Returns the stored data URI.
pub fn set_image(
    doc: &mut TournamentDocument,
    team_id: TeamId,
    bytes: &[u8],
    mime_type: &str,
) -> Result<String, TournamentError> {
    validate_image(bytes, mime_type)?;
    let team = doc.team_mut(team_id)?;
    let uri = encode_data_uri(bytes, mime_type);
    team.image = uri.clone();
    Ok(uri)
}

/// Set every team's points to 0.
pub fn reset_all_points(doc: &mut TournamentDocument) {
    for team in &mut doc.teams {
        team.points = 0;
    }
}
