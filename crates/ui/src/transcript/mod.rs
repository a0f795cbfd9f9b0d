mod entry;
mod renderer;
mod state;

pub use entry::ChatEntry;
pub use renderer::TranscriptRenderer;
pub use state::Transcript;
