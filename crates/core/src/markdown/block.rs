use std::collections::HashMap;

use super::segment::CodeSegment;

/// Code blocks longer than this many lines are collapsed by default
pub const TRUNCATE_THRESHOLD: usize = 20;

/// Number of lines shown for a collapsed block
pub const PREVIEW_LINES: usize = 15;

/// Marker line appended to a collapsed preview
pub const TRUNCATION_MARKER: &str = "...";

/// UI-independent color token for a language badge.
///
/// The theme maps these onto concrete terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Yellow,
    Blue,
    Cyan,
    Green,
    Orange,
    Red,
    Purple,
    Gray,
}

/// Display metadata for a fence language token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageMeta {
    pub glyph: &'static str,
    pub accent: Accent,
}

const DEFAULT_META: LanguageMeta = LanguageMeta { glyph: "📄", accent: Accent::Gray };

/// Look up the badge glyph and accent for a language token.
///
/// Case-insensitive exact match against a fixed table; anything unknown gets
/// the default pair. Pure data, no fallback chain.
pub fn language_meta(language: &str) -> LanguageMeta {
    match language.to_lowercase().as_str() {
        "javascript" => LanguageMeta { glyph: "🟨", accent: Accent::Yellow },
        "typescript" => LanguageMeta { glyph: "🔷", accent: Accent::Blue },
        "python" => LanguageMeta { glyph: "🐍", accent: Accent::Green },
        "java" => LanguageMeta { glyph: "☕", accent: Accent::Orange },
        "cpp" => LanguageMeta { glyph: "⚙", accent: Accent::Blue },
        "c" => LanguageMeta { glyph: "🔧", accent: Accent::Gray },
        "html" => LanguageMeta { glyph: "🌐", accent: Accent::Red },
        "css" => LanguageMeta { glyph: "🎨", accent: Accent::Purple },
        "php" => LanguageMeta { glyph: "🐘", accent: Accent::Purple },
        "ruby" => LanguageMeta { glyph: "💎", accent: Accent::Red },
        "go" => LanguageMeta { glyph: "🐹", accent: Accent::Cyan },
        "rust" => LanguageMeta { glyph: "🦀", accent: Accent::Orange },
        "sql" => LanguageMeta { glyph: "🗃", accent: Accent::Blue },
        "json" => LanguageMeta { glyph: "📋", accent: Accent::Green },
        "yaml" => LanguageMeta { glyph: "📝", accent: Accent::Purple },
        "bash" | "shell" | "sh" => LanguageMeta { glyph: "💻", accent: Accent::Gray },
        "dockerfile" => LanguageMeta { glyph: "🐳", accent: Accent::Cyan },
        "markdown" => LanguageMeta { glyph: "📝", accent: Accent::Blue },
        "plaintext" => LanguageMeta { glyph: "📄", accent: Accent::Gray },
        _ => DEFAULT_META,
    }
}

/// Per-block toggle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    pub expanded: bool,
    pub line_numbers: bool,
    pub copied: bool,
}

/// Toggle state for the code blocks of the currently rendered reply, keyed
/// by segment position.
///
/// Owned by the view layer and reset whenever a new reply is rendered; there
/// is no cross-message persistence.
#[derive(Debug, Clone, Default)]
pub struct BlockStateMap {
    states: HashMap<usize, BlockState>,
}

impl BlockStateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a segment index (default state if never touched)
    pub fn state(&self, index: usize) -> BlockState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    /// Flip the expanded toggle for one segment
    pub fn toggle_expanded(&mut self, index: usize) {
        let entry = self.states.entry(index).or_default();
        entry.expanded = !entry.expanded;
    }

    /// Flip the line-number toggle for one segment
    pub fn toggle_line_numbers(&mut self, index: usize) {
        let entry = self.states.entry(index).or_default();
        entry.line_numbers = !entry.line_numbers;
    }

    /// Set the transient copied flag for one segment
    pub fn set_copied(&mut self, index: usize, copied: bool) {
        let entry = self.states.entry(index).or_default();
        entry.copied = copied;
    }

    /// Drop all per-block state (called when a new reply arrives)
    pub fn reset(&mut self) {
        self.states.clear();
    }
}

/// Display-ready view of one code segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockView {
    pub language: String,
    pub line_count: usize,
    pub displayed_code: String,
    pub is_truncated: bool,
    pub is_expanded: bool,
    pub show_line_numbers: bool,
    pub is_copied: bool,
}

impl CodeBlockView {
    /// Build the view for a code segment at the given position.
    ///
    /// Blocks over [`TRUNCATE_THRESHOLD`] lines collapse to the first
    /// [`PREVIEW_LINES`] lines plus a marker unless the block is expanded.
    pub fn build(segment: &CodeSegment, index: usize, states: &BlockStateMap) -> Self {
        let state = states.state(index);
        let lines: Vec<&str> = segment.code.split('\n').collect();
        let line_count = lines.len();
        let is_truncated = line_count > TRUNCATE_THRESHOLD;

        let displayed_code = if is_truncated && !state.expanded {
            let mut preview = lines[..PREVIEW_LINES].join("\n");
            preview.push('\n');
            preview.push_str(TRUNCATION_MARKER);
            preview
        } else {
            segment.code.clone()
        };

        Self {
            language: segment.language.clone(),
            line_count,
            displayed_code,
            is_truncated,
            is_expanded: state.expanded,
            show_line_numbers: state.line_numbers,
            is_copied: state.copied,
        }
    }
}
