pub mod app;
pub mod clipboard;
pub mod components;
pub mod event_handler;
pub mod state;
pub mod syntax;
pub mod theme;
pub mod transcript;

pub use app::{AgentEvent, App};
pub use clipboard::Clipboard;
pub use event_handler::{EventHandler, KeyAction};
pub use state::{AppState, InputState};
pub use theme::Theme;
pub use transcript::{ChatEntry, Transcript, TranscriptRenderer};
