//! Terminal shell for the demo binary (impure).
//!
//! Owns the terminal and a [`VirtualList`] of demo items. Follow-up events
//! returned by the list are queued and delivered one per loop iteration,
//! with a redraw in between, so a lazy first render shows up before its
//! continuation has run.

use crate::integration;
use crate::list::VirtualList;
use crate::model::{Command, ListEvent};
use crate::widgets::DynItem;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    Terminal,
};
use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Interval between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    list: VirtualList<DynItem>,
    pending: VecDeque<ListEvent>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(list: VirtualList<DynItem>) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, list))
    }

    /// Run the main event loop. Returns when the user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        let command = self.list.init();
        self.dispatch(command);
        self.draw()?;

        let mut last_tick = Instant::now();
        loop {
            let timeout = if self.pending.is_empty() {
                TICK_INTERVAL.saturating_sub(last_tick.elapsed())
            } else {
                Duration::ZERO
            };

            let input = if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            };
            if self.step(input) {
                return Ok(());
            }

            if last_tick.elapsed() >= TICK_INTERVAL {
                self.deliver(ListEvent::Tick);
                last_tick = Instant::now();
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an existing terminal.
    pub fn with_terminal(terminal: Terminal<B>, list: VirtualList<DynItem>) -> Self {
        Self {
            terminal,
            list,
            pending: VecDeque::new(),
        }
    }

    /// The list being shown.
    pub fn list(&self) -> &VirtualList<DynItem> {
        &self.list
    }

    /// Text under the mouse selection.
    pub fn selected_text(&self) -> String {
        self.list.selected_text()
    }

    /// One loop iteration: handle `input`, then deliver the follow-up event
    /// that was queued before it. Events queued by `input` itself wait for
    /// the next iteration, after a redraw.
    ///
    /// Returns true if app should quit
    fn step(&mut self, input: Option<Event>) -> bool {
        let queued = self.pending.pop_front();
        let quit = match input {
            Some(Event::Key(key)) => self.handle_key(key),
            Some(Event::Mouse(mouse)) => {
                self.deliver(ListEvent::Mouse(mouse));
                false
            }
            _ => false,
        };
        if quit {
            return true;
        }
        if let Some(event) = queued {
            self.deliver(event);
        }
        false
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match key.code {
            KeyCode::Char('q') => true,
            KeyCode::Esc => {
                self.list.clear_selection();
                false
            }
            _ => {
                self.deliver(ListEvent::Key(key));
                false
            }
        }
    }

    /// Feed one event to the list and queue whatever it asks for next.
    fn deliver(&mut self, event: ListEvent) {
        let command = self.list.update(event);
        self.dispatch(command);
    }

    fn dispatch(&mut self, command: Option<Command>) {
        if let Some(command) = command {
            self.pending.extend(integration::run_command(command));
        }
    }

    /// Lay out the frame, resize the list if needed and render.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame_area);

        if self.list.area() != list_area {
            debug!(?list_area, "list area changed");
            let command = self.list.set_area(list_area);
            self.dispatch(command);
        }

        let status = status_line(&self.list, self.pending.len());
        self.terminal.draw(|frame| {
            frame.render_widget(&self.list, list_area);
            frame.render_widget(status, status_area);
        })?;
        Ok(())
    }
}

fn status_line(list: &VirtualList<DynItem>, pending: usize) -> Line<'static> {
    let selected = list.selected_id().unwrap_or("-");
    let mut text = format!(
        " item {selected} | line {}/{} | {:?}",
        list.offset(),
        list.total_height(),
        list.direction()
    );
    if pending > 0 {
        text.push_str(" | rendering");
    }
    Line::styled(text, Style::new().fg(Color::Black).bg(Color::Gray))
}

/// Initialize and run the TUI application, returning the selected text.
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by caller before calling this
/// function.
pub fn run(list: VirtualList<DynItem>) -> Result<String, TuiError> {
    let mut app = TuiApp::new(list)?;
    let result = app.run();
    restore_terminal()?;
    result?;
    info!(items = app.list().len(), "application exited");
    Ok(app.selected_text())
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
