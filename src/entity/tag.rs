// src/entity/tag.rs
use serde::{Deserialize, Serialize};

/// A tag and the number of notes carrying it. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

/// Display bucket for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Green,
    Purple,
    Yellow,
    Pink,
    Indigo,
    Red,
    Teal,
}

/// Bucket order is part of the mapping; reordering changes every tag's colour.
pub const TAG_COLORS: [TagColor; 8] = [
    TagColor::Blue,
    TagColor::Green,
    TagColor::Purple,
    TagColor::Yellow,
    TagColor::Pink,
    TagColor::Indigo,
    TagColor::Red,
    TagColor::Teal,
];

impl TagColor {
    /// Style classes used by the web front end this format is shared with.
    pub fn css_class(&self) -> &'static str {
        match self {
            TagColor::Blue => "bg-blue-100 text-blue-800 hover:bg-blue-200",
            TagColor::Green => "bg-green-100 text-green-800 hover:bg-green-200",
            TagColor::Purple => "bg-purple-100 text-purple-800 hover:bg-purple-200",
            TagColor::Yellow => "bg-yellow-100 text-yellow-800 hover:bg-yellow-200",
            TagColor::Pink => "bg-pink-100 text-pink-800 hover:bg-pink-200",
            TagColor::Indigo => "bg-indigo-100 text-indigo-800 hover:bg-indigo-200",
            TagColor::Red => "bg-red-100 text-red-800 hover:bg-red-200",
            TagColor::Teal => "bg-teal-100 text-teal-800 hover:bg-teal-200",
        }
    }

    /// ANSI SGR foreground code for terminal output.
    pub fn ansi_code(&self) -> u8 {
        match self {
            TagColor::Blue => 34,
            TagColor::Green => 32,
            TagColor::Purple => 35,
            TagColor::Yellow => 33,
            TagColor::Pink => 95,
            TagColor::Indigo => 94,
            TagColor::Red => 31,
            TagColor::Teal => 36,
        }
    }

    /// Wrap `text` in this colour's escape sequence.
    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.ansi_code(), text)
    }
}

impl std::fmt::Display for TagColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagColor::Blue => write!(f, "blue"),
            TagColor::Green => write!(f, "green"),
            TagColor::Purple => write!(f, "purple"),
            TagColor::Yellow => write!(f, "yellow"),
            TagColor::Pink => write!(f, "pink"),
            TagColor::Indigo => write!(f, "indigo"),
            TagColor::Red => write!(f, "red"),
            TagColor::Teal => write!(f, "teal"),
        }
    }
}

/// Map a tag to its colour bucket.
///
/// Sums the UTF-16 code units of the tag and reduces modulo the bucket
/// count, so the mapping matches what a browser computes for the same tag.
pub fn color_for(tag: &str) -> TagColor {
    let hash: u64 = tag.encode_utf16().map(u64::from).sum();
    TAG_COLORS[(hash % TAG_COLORS.len() as u64) as usize]
}
