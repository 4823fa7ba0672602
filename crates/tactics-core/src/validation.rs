//! Validation of untrusted formation files.
//!
//! Checks run in a fixed order and stop at the first failure. Names are
//! sanitized during the same pass.

use serde_json::{Map, Value};

use crate::board::TokenId;
use crate::config::FormationLimits;
use crate::document::{FormationDocument, FormationEntry};

/// Reasons an imported file or document is refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid formation format")]
    NotAnObject,
    #[error("A formation cannot have more than {max} players")]
    TooManyPlayers { max: usize },
    #[error("Invalid player id: {0:?}")]
    InvalidId(String),
    #[error("Invalid data for player {id}")]
    InvalidPlayerData { id: TokenId },
    #[error("Invalid coordinates for player {id}")]
    InvalidCoordinates { id: TokenId },
    #[error("Coordinates of player {id} are out of range")]
    CoordinatesOutOfRange { id: TokenId },
    #[error("Invalid name for player {id}")]
    InvalidName { id: TokenId },
    #[error("Only JSON files are allowed")]
    WrongFileType,
    #[error("The file is too large. Maximum {max_kib}KB allowed.")]
    FileTooLarge { max_kib: u64 },
}

/// What the host knows about a picked file before reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Checks type and size of a file before its content is read.
pub fn validate_formation_file(file: &FileMeta) -> Result<(), ValidationError> {
    validate_formation_file_with(file, &FormationLimits::default())
}

pub fn validate_formation_file_with(
    file: &FileMeta,
    limits: &FormationLimits,
) -> Result<(), ValidationError> {
    if !file.mime_type.contains("application/json") && !file.name.ends_with(".json") {
        return Err(ValidationError::WrongFileType);
    }
    if file.size > limits.max_file_bytes {
        return Err(ValidationError::FileTooLarge {
            max_kib: limits.max_file_bytes / 1024,
        });
    }
    Ok(())
}

/// Validates a parsed document and returns it with sanitized names.
pub fn validate_formation_document(doc: Value) -> Result<FormationDocument, ValidationError> {
    validate_formation_document_with(doc, &FormationLimits::default())
}

pub fn validate_formation_document_with(
    doc: Value,
    limits: &FormationLimits,
) -> Result<FormationDocument, ValidationError> {
    let Value::Object(players) = doc else {
        return Err(ValidationError::NotAnObject);
    };

    if players.len() > limits.max_players {
        return Err(ValidationError::TooManyPlayers {
            max: limits.max_players,
        });
    }

    let mut document = FormationDocument::new();
    for (key, entry) in in_property_order(players) {
        let id = parse_id(&key, limits)?;
        if document.get(id).is_some() {
            // "7" and "07" name the same player.
            return Err(ValidationError::InvalidId(key));
        }
        document.insert(id, validate_entry(id, entry, limits)?);
    }
    Ok(document)
}

/// Orders entries the way a JavaScript object enumerates them: canonical
/// integer keys ascending, then every other key.
fn in_property_order(players: Map<String, Value>) -> Vec<(String, Value)> {
    let (mut indexed, rest): (Vec<_>, Vec<_>) = players
        .into_iter()
        .partition(|(key, _)| array_index(key).is_some());
    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.extend(rest);
    indexed
}

/// `key` as an integer when it is written in canonical form (`"7"`, not `"07"`).
fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|index| *index < u32::MAX && index.to_string() == key)
}

/// Accepts a plain decimal literal no greater than `max_id`.
fn parse_id(key: &str, limits: &FormationLimits) -> Result<TokenId, ValidationError> {
    let invalid = || ValidationError::InvalidId(key.to_string());
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match key.parse::<TokenId>() {
        Ok(id) if id <= limits.max_id => Ok(id),
        _ => Err(invalid()),
    }
}

fn validate_entry(
    id: TokenId,
    entry: Value,
    limits: &FormationLimits,
) -> Result<FormationEntry, ValidationError> {
    let Value::Object(fields) = entry else {
        return Err(ValidationError::InvalidPlayerData { id });
    };

    let (Some(left), Some(top)) = (number(&fields, "left"), number(&fields, "top")) else {
        return Err(ValidationError::InvalidCoordinates { id });
    };

    if !(0.0..=limits.max_left).contains(&left) || !(0.0..=limits.max_top).contains(&top) {
        return Err(ValidationError::CoordinatesOutOfRange { id });
    }

    let name = match fields.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => Some(sanitize_name(name, limits.max_name_chars)),
        Some(_) => return Err(ValidationError::InvalidName { id }),
    };

    Ok(FormationEntry { left, top, name })
}

fn number(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

/// Strips angle brackets and keeps at most `max_chars` characters.
pub fn sanitize_name(name: &str, max_chars: usize) -> String {
    name.chars()
        .filter(|c| !matches!(c, '<' | '>'))
        .take(max_chars)
        .collect()
}
