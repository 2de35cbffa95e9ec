use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, Entity, PlayId};

/// Pricing category of a play.
///
/// Categories without a fee formula are kept verbatim as `Unrecognized` so the
/// catalog still loads; pricing such a play fails at statement time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayCategory {
    Tragedy,
    Comedy,
    Unrecognized(String),
}

impl PlayCategory {
    pub fn as_str(&self) -> &str {
        match self {
            PlayCategory::Tragedy => "tragedy",
            PlayCategory::Comedy => "comedy",
            PlayCategory::Unrecognized(other) => other,
        }
    }
}

impl From<String> for PlayCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tragedy" => PlayCategory::Tragedy,
            "comedy" => PlayCategory::Comedy,
            _ => PlayCategory::Unrecognized(value),
        }
    }
}

impl From<&str> for PlayCategory {
    fn from(value: &str) -> Self {
        PlayCategory::from(value.to_owned())
    }
}

impl From<PlayCategory> for String {
    fn from(value: PlayCategory) -> Self {
        match value {
            PlayCategory::Unrecognized(other) => other,
            known => known.as_str().to_owned(),
        }
    }
}

impl core::fmt::Display for PlayCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    id: PlayId,
    name: String,
    category: PlayCategory,
}

impl Play {
    pub fn new(
        id: impl Into<PlayId>,
        name: impl Into<String>,
        category: impl Into<PlayCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &PlayCategory {
        &self.category
    }
}

impl Entity for Play {
    type Id = PlayId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire shape of one catalog value; the identifier is the surrounding key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayEntry {
    name: String,
    #[serde(rename = "type")]
    category: PlayCategory,
}

/// Read-only mapping from play identifier to play.
///
/// (De)serializes as a JSON object keyed by identifier:
/// `{"hamlet": {"name": "Hamlet", "type": "tragedy"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<PlayId, PlayEntry>", into = "BTreeMap<PlayId, PlayEntry>")]
pub struct Catalog {
    plays: HashMap<PlayId, Play>,
}

impl Catalog {
    /// Build a catalog from plays; identifiers must be unique.
    pub fn from_plays(plays: impl IntoIterator<Item = Play>) -> DomainResult<Self> {
        let mut by_id = HashMap::new();
        for play in plays {
            let id = play.id().clone();
            if by_id.insert(id.clone(), play).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate play identifier: {id}"
                )));
            }
        }
        Ok(Self { plays: by_id })
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    /// Look up a play, surfacing a missing entry as `UnknownPlay`.
    pub fn resolve(&self, play_id: &PlayId) -> DomainResult<&Play> {
        self.plays
            .get(play_id)
            .ok_or_else(|| DomainError::unknown_play(play_id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn plays(&self) -> impl Iterator<Item = &Play> {
        self.plays.values()
    }
}

impl From<BTreeMap<PlayId, PlayEntry>> for Catalog {
    fn from(entries: BTreeMap<PlayId, PlayEntry>) -> Self {
        let plays = entries
            .into_iter()
            .map(|(id, entry)| {
                let play = Play {
                    id: id.clone(),
                    name: entry.name,
                    category: entry.category,
                };
                (id, play)
            })
            .collect();
        Self { plays }
    }
}

impl From<Catalog> for BTreeMap<PlayId, PlayEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog
            .plays
            .into_iter()
            .map(|(id, play)| {
                let entry = PlayEntry {
                    name: play.name,
                    category: play.category,
                };
                (id, entry)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keeps_unrecognized_values_verbatim() {
        assert_eq!(PlayCategory::from("tragedy"), PlayCategory::Tragedy);
        assert_eq!(PlayCategory::from("comedy"), PlayCategory::Comedy);
        assert_eq!(
            PlayCategory::from("farce"),
            PlayCategory::Unrecognized("farce".to_string())
        );
        // Matching is exact.
        assert_eq!(
            PlayCategory::from("Comedy"),
            PlayCategory::Unrecognized("Comedy".to_string())
        );
    }

    #[test]
    fn catalog_deserializes_from_object_keyed_by_id() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "as-like": {"name": "As You Like It", "type": "comedy"},
            "pirates": {"name": "The Pirates of Penzance", "type": "operetta"}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 3);
        let hamlet = catalog.get("hamlet").unwrap();
        assert_eq!(hamlet.id().as_str(), "hamlet");
        assert_eq!(hamlet.name(), "Hamlet");
        assert_eq!(hamlet.category(), &PlayCategory::Tragedy);
        assert_eq!(
            catalog.get("pirates").unwrap().category(),
            &PlayCategory::Unrecognized("operetta".to_string())
        );
    }

    #[test]
    fn catalog_serializes_back_to_wire_shape() {
        let catalog =
            Catalog::from_plays([Play::new("othello", "Othello", PlayCategory::Tragedy)]).unwrap();
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"othello": {"name": "Othello", "type": "tragedy"}})
        );
    }

    #[test]
    fn from_plays_rejects_duplicate_ids() {
        let err = Catalog::from_plays([
            Play::new("hamlet", "Hamlet", "tragedy"),
            Play::new("hamlet", "Hamlet (abridged)", "comedy"),
        ])
        .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("hamlet") => {}
            other => panic!("Expected Validation for duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn resolve_surfaces_missing_play() {
        let catalog = Catalog::default();
        let err = catalog.resolve(&PlayId::new("macbeth")).unwrap_err();
        assert_eq!(err, DomainError::unknown_play(PlayId::new("macbeth")));
    }
}
