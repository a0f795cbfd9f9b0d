//! Markdown model for assistant replies.
//!
//! A reply is split into an ordered list of typed segments (fenced code vs
//! prose), and each segment is lowered into a display-ready view: a code
//! block view with truncation and per-block toggle state, or per-line prose
//! views with inline emphasis resolved. Everything here is pure computation
//! over in-memory strings; the ratatui layer consumes these views.

mod block;
mod inline;
mod line;
mod segment;

pub use block::{
    Accent, BlockState, BlockStateMap, CodeBlockView, LanguageMeta, PREVIEW_LINES, TRUNCATE_THRESHOLD,
    TRUNCATION_MARKER, language_meta,
};
pub use inline::{InlineSpan, parse_inline};
pub use line::{TextLine, classify_line};
pub use segment::{CodeSegment, Segment, TextSegment, segment};
