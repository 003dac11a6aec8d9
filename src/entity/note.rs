// src/entity/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled, tagged, timestamped piece of free text.
///
/// Field names on the wire are camelCase (`createdAt`, `updatedAt`) and
/// timestamps travel as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note stamped with `now` for both timestamps.
    pub fn new(id: String, title: String, content: String, tags: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            content,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
    }

    /// Short id used in listings: the first [`SHORT_ID_CHARS`] characters,
    /// which reach past the timestamp into the random digits.
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(SHORT_ID_CHARS)
            .map_or(&self.id[..], |(i, _)| &self.id[..i])
    }
}

/// Characters shown by [`Note::short_id`].
pub const SHORT_ID_CHARS: usize = 12;

/// Trim and lowercase a raw tag. Returns `None` for blank input.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Normalize a list of tags, dropping blanks and later duplicates.
pub fn normalize_tags<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.into_iter().filter_map(|t| normalize_tag(t.as_ref())) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_has_equal_timestamps() {
        let now = Utc::now();
        let note = Note::new(
            "abc".to_string(),
            "Title".to_string(),
            "Body".to_string(),
            vec![],
            now,
        );
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  Rust "), Some("rust".to_string()));
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn test_normalize_tags_dedupes_in_order() {
        let tags = normalize_tags(["Work", "idea", "work", " ", "IDEA", "misc"]);
        assert_eq!(tags, vec!["work", "idea", "misc"]);
    }

    #[test]
    fn test_wire_field_names() {
        let note = Note::new(
            "id1".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec!["a".to_string()],
            Utc::now(),
        );
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_missing_tags_defaults_to_empty() {
        let json = r#"{
            "id": "x",
            "title": "T",
            "content": "C",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert!(note.tags.is_empty());
        assert!(note.created_at < note.updated_at);
    }

    #[test]
    fn test_short_id() {
        let note = Note::new(
            "0123456789".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec![],
            Utc::now(),
        );
        assert_eq!(note.short_id(), "0123456789");

        let long = Note::new(
            "0123456789abcdef".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec![],
            Utc::now(),
        );
        assert_eq!(long.short_id(), "0123456789ab");
    }

    #[test]
    fn test_short_id_multibyte() {
        let note = Note::new(
            "ééééé".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec![],
            Utc::now(),
        );
        assert_eq!(note.short_id(), "ééééé");

        let long = Note::new(
            "ééééééééééééééé".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec![],
            Utc::now(),
        );
        assert_eq!(long.short_id().chars().count(), SHORT_ID_CHARS);
    }

    #[test]
    fn test_short_id_includes_random_digits() {
        let a = Note::new(crate::id::generate(), "T".to_string(), "C".to_string(), vec![], Utc::now());
        let b = Note::new(crate::id::generate(), "T".to_string(), "C".to_string(), vec![], Utc::now());
        assert_ne!(a.short_id(), b.short_id());
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let note = Note::new(
            "x".to_string(),
            "T".to_string(),
            "C".to_string(),
            vec!["Work".to_string()],
            Utc::now(),
        );
        assert!(note.has_tag("work"));
        assert!(note.has_tag("WORK"));
        assert!(!note.has_tag("home"));
    }
}
