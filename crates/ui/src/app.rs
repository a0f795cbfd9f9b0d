use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use tokio::sync::{Mutex, mpsc};

use crate::clipboard::Clipboard;
use crate::components::{Footer, Header};
use crate::event_handler::{EventHandler, KeyAction};
use crate::state::AppState;
use crate::transcript::TranscriptRenderer;
use siaga_agent::Assistant;

/// Events delivered back to the UI loop from spawned tasks
#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// A completion finished (successfully or as a canned error reply)
    Reply(String),
    /// The transient copied-confirmation on a block timed out
    CopyExpired(usize),
}

/// How long the copied-confirmation stays visible
const COPY_CONFIRM_MS: u64 = 2000;

/// The interactive chat application
pub struct App {
    pub state: AppState,
    assistant: Arc<Mutex<Assistant>>,
    event_tx: mpsc::UnboundedSender<AgentEvent>,
    event_rx: mpsc::UnboundedReceiver<AgentEvent>,
    pub should_exit: bool,
}

impl App {
    pub fn new(assistant: Assistant, model_name: impl Into<String>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(model_name),
            assistant: Arc::new(Mutex::new(assistant)),
            event_tx,
            event_rx,
            should_exit: false,
        }
    }

    /// Run the TUI until the user exits
    pub async fn run(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let backend = CrosstermBackend::new(std::io::stdout());
            if let Ok(mut terminal) = Terminal::new(backend) {
                let _ = terminal.show_cursor();
            }
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        self.draw(&mut terminal)?;

        while !self.should_exit {
            let tui_poll = async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                EventHandler::read()
            };

            tokio::select! {
                maybe_action = tui_poll => {
                    if let Some(action) = maybe_action {
                        self.handle_action(action);
                    }
                    self.state.tick();
                    self.draw(&mut terminal)?;
                }
                maybe_event = self.event_rx.recv() => {
                    if let Some(event) = maybe_event {
                        self.handle_agent_event(event);
                        self.draw(&mut terminal)?;
                    }
                }
            }
        }

        terminal.show_cursor()?;
        crossterm::terminal::disable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;

        Ok(())
    }

    /// Draw one frame
    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> io::Result<()> {
        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(5), Constraint::Min(3), Constraint::Length(5)])
                .split(frame.area());

            Header::new(&self.state).render(frame, rows[0]);

            TranscriptRenderer::new(&self.state.transcript, &self.state.blocks)
                .with_selected_block(self.state.selected_block)
                .with_typing_indicator(self.state.is_loading, self.state.animation_frame)
                .render(frame, rows[1]);

            Footer::new(&self.state).render(frame, rows[2]);
        })?;

        Ok(())
    }

    /// Apply one key action to the state
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::InsertChar(c) => {
                self.state.input.reset_history_navigation();
                self.state.input.insert_char(c);
            }
            KeyAction::Newline => self.state.input.insert_newline(),
            KeyAction::Backspace => self.state.input.backspace(),
            KeyAction::Delete => self.state.input.delete(),
            KeyAction::MoveLeft => self.state.input.move_left(),
            KeyAction::MoveRight => self.state.input.move_right(),
            KeyAction::MoveHome => self.state.input.move_home(),
            KeyAction::MoveEnd => self.state.input.move_end(),
            KeyAction::Send => {
                if self.state.input.can_send() && !self.state.is_loading {
                    self.send_current_input();
                }
            }
            KeyAction::HistoryUp => self.state.input.navigate_up(),
            KeyAction::HistoryDown => self.state.input.navigate_down(),
            KeyAction::ScrollUp => self.state.transcript.scroll_up(3),
            KeyAction::ScrollDown => self.state.transcript.scroll_down(3),
            KeyAction::NextBlock => self.state.select_next_block(),
            KeyAction::PrevBlock => self.state.select_prev_block(),
            KeyAction::ToggleExpand => self.state.toggle_selected_expanded(),
            KeyAction::ToggleLineNumbers => self.state.toggle_selected_line_numbers(),
            KeyAction::CopyCode => self.copy_selected_block(),
            KeyAction::ClearHistory => self.clear_history(),
            KeyAction::Exit => self.should_exit = true,
        }
    }

    /// React to a completion or timer event
    pub fn handle_agent_event(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::Reply(content) => self.state.apply_reply(content),
            AgentEvent::CopyExpired(index) => self.state.blocks.set_copied(index, false),
        }
    }

    /// Take the composer content and fire the completion request.
    ///
    /// The request runs detached; the reply arrives as an [`AgentEvent`].
    /// A later reply always replaces the prior render wholesale.
    fn send_current_input(&mut self) {
        let text = self.state.input.take().trim().to_string();
        self.state.input.add_to_history(text.clone());
        self.state.transcript.add_user_message(text.clone());
        self.state.is_loading = true;

        let assistant = Arc::clone(&self.assistant);
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let reply = assistant.lock().await.send(&text).await;
            let _ = event_tx.send(AgentEvent::Reply(reply));
        });
    }

    /// Copy the selected block's raw code (not the truncated display slice)
    /// to the clipboard; confirmation auto-reverts after 2 seconds.
    fn copy_selected_block(&mut self) {
        let Some((index, segment)) = self.state.selected_code_segment() else {
            return;
        };

        match Clipboard::copy(&segment.code) {
            Ok(()) => {
                self.state.blocks.set_copied(index, true);

                let event_tx = self.event_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(COPY_CONFIRM_MS)).await;
                    let _ = event_tx.send(AgentEvent::CopyExpired(index));
                });
            }
            Err(e) => {
                // Silent to the user beyond the confirmation not appearing.
                tracing::error!(error = %e, "failed to copy code block");
            }
        }
    }

    /// Clear the displayed history and reset the assistant transcript
    fn clear_history(&mut self) {
        self.state.transcript.clear();
        self.state.blocks.reset();
        self.state.selected_block = None;
        self.state.transcript.add_notice("Riwayat percakapan dihapus");

        let assistant = Arc::clone(&self.assistant);
        tokio::spawn(async move {
            assistant.lock().await.reset();
        });
    }
}
