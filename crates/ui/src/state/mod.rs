mod input;

pub use input::InputState;

use crate::transcript::Transcript;
use siaga_core::markdown::{self, BlockStateMap, CodeSegment, Segment};

/// Top-level TUI state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Displayed conversation
    pub transcript: Transcript,
    /// Input composer
    pub input: InputState,
    /// Per-block toggle state for the latest reply, keyed by segment index
    pub blocks: BlockStateMap,
    /// Segment index of the code block keyboard toggles act on
    pub selected_block: Option<usize>,
    /// Whether a completion request is in flight
    pub is_loading: bool,
    /// Animation counter for the typing indicator
    pub animation_frame: u8,
    /// Model name shown in the header
    pub model_name: String,
}

impl AppState {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self { model_name: model_name.into(), ..Default::default() }
    }

    /// Advance indicator animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Record a finished assistant reply.
    ///
    /// The new reply replaces the prior render wholesale: all per-block
    /// toggle state and the block selection are reset.
    pub fn apply_reply(&mut self, content: impl Into<String>) {
        self.transcript.add_assistant_reply(content);
        self.blocks.reset();
        self.selected_block = None;
        self.is_loading = false;
    }

    /// Segment indices of the code blocks in the latest reply
    pub fn code_block_indices(&self) -> Vec<usize> {
        let Some(reply) = self.transcript.last_assistant_reply() else {
            return Vec::new();
        };

        markdown::segment(reply)
            .iter()
            .enumerate()
            .filter_map(|(idx, segment)| matches!(segment, Segment::Code(_)).then_some(idx))
            .collect()
    }

    /// The code segment the selection points at, if any
    pub fn selected_code_segment(&self) -> Option<(usize, CodeSegment)> {
        let index = self.selected_block?;
        let reply = self.transcript.last_assistant_reply()?;

        markdown::segment(reply).into_iter().enumerate().find_map(|(idx, segment)| match segment {
            Segment::Code(code) if idx == index => Some((idx, code)),
            _ => None,
        })
    }

    /// Cycle the block selection forward
    pub fn select_next_block(&mut self) {
        let indices = self.code_block_indices();
        if indices.is_empty() {
            self.selected_block = None;
            return;
        }

        self.selected_block = Some(match self.selected_block {
            None => indices[0],
            Some(current) => indices
                .iter()
                .copied()
                .find(|&idx| idx > current)
                .unwrap_or(indices[0]),
        });
    }

    /// Cycle the block selection backward
    pub fn select_prev_block(&mut self) {
        let indices = self.code_block_indices();
        let Some(&last) = indices.last() else {
            self.selected_block = None;
            return;
        };

        self.selected_block = Some(match self.selected_block {
            None => last,
            Some(current) => indices.iter().rev().copied().find(|&idx| idx < current).unwrap_or(last),
        });
    }

    /// Flip the expanded toggle on the selected block
    pub fn toggle_selected_expanded(&mut self) {
        if let Some(index) = self.selected_block {
            self.blocks.toggle_expanded(index);
        }
    }

    /// Flip the line-number toggle on the selected block
    pub fn toggle_selected_line_numbers(&mut self) {
        if let Some(index) = self.selected_block {
            self.blocks.toggle_line_numbers(index);
        }
    }
}
