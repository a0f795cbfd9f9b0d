use std::collections::VecDeque;

use super::entry::ChatEntry;

const DEFAULT_MAX_ENTRIES: usize = 500;

/// Displayed conversation state.
///
/// Bounded deque of entries plus a vertical scroll offset. This is the view
/// model only; the transcript sent to the provider lives in the assistant.
#[derive(Debug, Clone)]
pub struct Transcript {
    entries: VecDeque<ChatEntry>,
    max_entries: usize,
    scroll: u16,
}

impl Transcript {
    pub fn new() -> Self {
        Self { entries: VecDeque::new(), max_entries: DEFAULT_MAX_ENTRIES, scroll: 0 }
    }

    /// Add an entry, evicting the oldest when over capacity
    pub fn add(&mut self, entry: ChatEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.scroll_to_bottom();
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) {
        self.add(ChatEntry::user_message(content));
    }

    pub fn add_assistant_reply(&mut self, content: impl Into<String>) {
        self.add(ChatEntry::assistant_reply(content));
    }

    pub fn add_notice(&mut self, content: impl Into<String>) {
        self.add(ChatEntry::notice(content));
    }

    /// Drop every entry (the clear-history action)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.scroll = 0;
    }

    pub fn entries(&self) -> &VecDeque<ChatEntry> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Content of the most recent assistant reply, if any
    pub fn last_assistant_reply(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            ChatEntry::AssistantReply { content } => Some(content.as_str()),
            _ => None,
        })
    }

    /// Lines scrolled back from the bottom
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
