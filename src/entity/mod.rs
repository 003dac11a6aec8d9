mod note;
mod tag;

pub use note::{normalize_tag, normalize_tags, Note, SHORT_ID_CHARS};
pub use tag::{color_for, TagColor, TagCount, TAG_COLORS};
