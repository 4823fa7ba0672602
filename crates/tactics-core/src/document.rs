//! Formation document: the file form of one side's tokens.
//!
//! ```json
//! {
//!   "1": { "left": 50, "top": 250, "name": "Keeper" },
//!   "2": { "left": 150, "top": 100 }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::TokenId;
use crate::geometry::Position;

/// One player entry of a formation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationEntry {
    pub left: f64,
    pub top: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FormationEntry {
    pub fn position(&self) -> Position {
        Position::new(self.left, self.top)
    }
}

/// Id-keyed player entries, serialized as a JSON object with decimal-string
/// keys in ascending id order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormationDocument {
    pub entries: BTreeMap<TokenId, FormationEntry>,
}

impl FormationDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, id: TokenId, entry: FormationEntry) {
        self.entries.insert(id, entry);
    }

    pub fn get(&self, id: TokenId) -> Option<&FormationEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &FormationEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    /// Pretty-printed JSON with a two-space indent.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_serialize_as_sorted_strings() {
        let mut doc = FormationDocument::new();
        doc.insert(
            10,
            FormationEntry {
                left: 1.0,
                top: 2.0,
                name: None,
            },
        );
        doc.insert(
            2,
            FormationEntry {
                left: 3.5,
                top: 4.0,
                name: Some("Nine".to_string()),
            },
        );

        let json = serde_json::to_string(&doc).expect("Failed to serialize");
        assert_eq!(
            json,
            r#"{"2":{"left":3.5,"top":4.0,"name":"Nine"},"10":{"left":1.0,"top":2.0}}"#
        );
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let mut doc = FormationDocument::new();
        doc.insert(
            1,
            FormationEntry {
                left: 50.0,
                top: 50.0,
                name: Some("Player 1".to_string()),
            },
        );
        let json = doc.to_json_pretty().expect("Failed to serialize");
        assert!(json.starts_with("{\n  \"1\": {\n    \"left\": 50.0,"));
    }
}
