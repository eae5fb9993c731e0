//! Request bodies for the JSON API and their conversion into domain values.

use crate::models::{Pairing, Points, StageAssignment, TeamId, TournamentError};
use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a team id the way browsers send it from a `<select>`: number or numeric string.
/// `null`, `0`, `""`, non-numeric text and other JSON types all mean "no team".
pub fn parse_team_id(value: &Value) -> Option<TeamId> {
    let id = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 1.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let s = s.trim_start();
            let s = s.strip_prefix('+').unwrap_or(s);
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            s[..end].parse::<u64>().ok()
        }
        _ => None,
    }?;
    TeamId::try_from(id).ok().filter(|id| *id != 0)
}

fn lenient_team_id<'de, D>(deserializer: D) -> Result<Option<TeamId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_team_id(&value))
}

/// PUT /api/team/{id}
#[derive(Debug, Default, Deserialize)]
pub struct PointsBody {
    #[serde(default)]
    pub points: Option<Value>,
}

impl PointsBody {
    /// Whole-number points. `10.0` is accepted, `10.5` and non-numbers are not.
    pub fn points(&self) -> Result<Points, TournamentError> {
        let invalid = || TournamentError::invalid_input("Points must be an integer");
        match self.points.as_ref() {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

/// PUT /api/team/{id}/name
#[derive(Debug, Default, Deserialize)]
pub struct NameBody {
    #[serde(default)]
    pub name: Option<Value>,
}

impl NameBody {
    pub fn name(&self) -> Result<&str, TournamentError> {
        match self.name.as_ref() {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.as_str()),
            _ => Err(TournamentError::invalid_input("Name must be a non-empty string")),
        }
    }
}

/// PUT /api/quarterfinals
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuarterfinalsBody {
    #[serde(deserialize_with = "lenient_team_id")]
    pub match1_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match1_team2_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match2_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match2_team2_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match3_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match3_team2_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match4_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match4_team2_id: Option<TeamId>,
}

impl From<&QuarterfinalsBody> for StageAssignment {
    fn from(b: &QuarterfinalsBody) -> Self {
        StageAssignment::Quarterfinals([
            Pairing::new(b.match1_team1_id, b.match1_team2_id),
            Pairing::new(b.match2_team1_id, b.match2_team2_id),
            Pairing::new(b.match3_team1_id, b.match3_team2_id),
            Pairing::new(b.match4_team1_id, b.match4_team2_id),
        ])
    }
}

/// PUT /api/semifinals
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemifinalsBody {
    #[serde(deserialize_with = "lenient_team_id")]
    pub match1_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match1_team2_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match2_team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub match2_team2_id: Option<TeamId>,
}

impl From<&SemifinalsBody> for StageAssignment {
    fn from(b: &SemifinalsBody) -> Self {
        StageAssignment::Semifinals([
            Pairing::new(b.match1_team1_id, b.match1_team2_id),
            Pairing::new(b.match2_team1_id, b.match2_team2_id),
        ])
    }
}

/// PUT /api/finals
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalsBody {
    #[serde(deserialize_with = "lenient_team_id")]
    pub team1_id: Option<TeamId>,
    #[serde(deserialize_with = "lenient_team_id")]
    pub team2_id: Option<TeamId>,
}

impl From<&FinalsBody> for StageAssignment {
    fn from(b: &FinalsBody) -> Self {
        StageAssignment::Finals(Pairing::new(b.team1_id, b.team2_id))
    }
}

/// POST /api/team/{id}/image (multipart field `image`). The temp file is deleted when the form drops.
#[derive(Debug, MultipartForm)]
pub struct ImageUploadForm {
    #[multipart(limit = "5MiB")]
    pub image: Option<TempFile>,
}

/// File-name extensions accepted alongside an image MIME type.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Reject uploads whose file name carries a non-image extension. Names without an extension pass.
pub fn check_image_extension(file_name: Option<&str>) -> Result<(), TournamentError> {
    let ext = file_name
        .and_then(|name| std::path::Path::new(name).extension())
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match ext {
        Some(ext) if !IMAGE_EXTENSIONS.contains(&ext.as_str()) => Err(
            TournamentError::invalid_input("Only image files are allowed (jpeg, png, gif)"),
        ),
        _ => Ok(()),
    }
}
