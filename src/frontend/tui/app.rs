use super::help_line::HelpLine;
use super::results_overlay::ResultsOverlay;
use super::star_grid::StarGrid;
use super::status_bar::StatusBar;
use super::tooltip_popup::TooltipPopup;
use crate::core::AppCore;
use crate::data::ResultsArrows;
use crate::frontend::{Frontend, FrontendEvent};
use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// This frontend renders the application using ratatui (terminal UI library)
/// and handles events via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture, and enters alternate screen.
    pub fn new() -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16), // ~60 FPS
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only process key press events (ignore repeats and releases)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Mouse(mouse_event) => Some(FrontendEvent::mouse(
                mouse_event.kind,
                mouse_event.column,
                mouse_event.row,
                mouse_event.modifiers,
            )),
            Event::Resize(w, h) => Some(FrontendEvent::Resize {
                width: w,
                height: h,
            }),
            _ => None,
        }
    }

    fn draw(&mut self, core: &mut AppCore) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            let [status_area, board_area, help_area] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

            let colors = &core.config.ui.colors;
            let buf = f.buffer_mut();

            StatusBar::new(
                core.ui_state.mode,
                &core.devotion,
                colors,
                &core.ui_state.status_text,
            )
            .render(status_area, buf);

            let geometry = StarGrid::new(&core.catalog, &core.board, colors)
                .cursor(core.ui_state.cursor)
                .render(board_area, buf);

            HelpLine::new(&core.keybind_map, core.input_context()).render(help_area, buf);

            let mut arrows = ResultsArrows::default();
            if core.results.open {
                arrows = ResultsOverlay::new(&core.results).render(board_area, buf);
            } else if core.ui_state.show_tooltips {
                let anchor = core.ui_state.cursor.and_then(|star| {
                    let pos = core.catalog.star(star)?;
                    let (x, y) = geometry?.screen_pos(pos.col, pos.row)?;
                    Some((star, pos.name.as_str(), (x, y)))
                });
                if let Some((star, name, position)) = anchor {
                    TooltipPopup::new(name, core.tooltip(star), colors)
                        .render(position, board_area, buf);
                }
            }

            core.ui_state.grid = geometry;
            core.ui_state.results_arrows = arrows;
        })?;

        Ok(())
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Wait up to one frame for the first event, then drain what is queued
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, app: &mut dyn std::any::Any) -> Result<()> {
        let core = app
            .downcast_mut::<AppCore>()
            .ok_or_else(|| anyhow!("render() called with wrong type - expected AppCore"))?;
        self.draw(core)
    }

    fn cleanup(&mut self) -> Result<()> {
        // Restore terminal
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    #[test]
    fn test_convert_event_keeps_presses_only() {
        let press = KeyEvent::new(KeyCode::Char('v'), KeyModifiers::NONE);
        assert_eq!(
            TuiFrontend::convert_event(Event::Key(press)),
            Some(FrontendEvent::key(KeyCode::Char('v'), KeyModifiers::NONE))
        );

        let release = KeyEvent {
            code: KeyCode::Char('v'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TuiFrontend::convert_event(Event::Key(release)), None);
    }

    #[test]
    fn test_convert_event_mouse_and_resize() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            TuiFrontend::convert_event(Event::Mouse(click)),
            Some(FrontendEvent::mouse(
                MouseEventKind::Down(MouseButton::Left),
                12,
                3,
                KeyModifiers::NONE
            ))
        );
        assert_eq!(
            TuiFrontend::convert_event(Event::Resize(100, 30)),
            Some(FrontendEvent::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(TuiFrontend::convert_event(Event::FocusGained), None);
    }
}
