//! Two-line status bar: mode buttons, devotion points, affinity counters,
//! backend status and the last status message.

use super::colors::color_or;
use crate::config::ColorConfig;
use crate::core::DevotionState;
use crate::data::InteractionMode;
use crate::protocol::Affinity;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar<'a> {
    mode: InteractionMode,
    devotion: &'a DevotionState,
    colors: &'a ColorConfig,
    message: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        mode: InteractionMode,
        devotion: &'a DevotionState,
        colors: &'a ColorConfig,
        message: &'a str,
    ) -> Self {
        Self {
            mode,
            devotion,
            colors,
            message,
        }
    }

    fn mode_button(&self, mode: InteractionMode) -> Span<'static> {
        let active = self.mode == mode;
        let mut style = Style::default().fg(color_or(self.colors.mode_button(active), Color::Gray));
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(format!(" {} ", mode.label()), style)
    }

    fn counters_line(&self) -> Line<'static> {
        let counters = &self.devotion.counters;
        let mut spans = vec![
            self.mode_button(InteractionMode::Standard),
            Span::raw(" "),
            self.mode_button(InteractionMode::Blink),
            Span::raw("  "),
            Span::styled(
                format!("Points {}", counters.devpoints),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];

        for affinity in Affinity::ALL {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} {}", affinity.short_name(), counters.affinity(affinity)),
                Style::default().fg(color_or(self.colors.affinity_color(affinity), Color::White)),
            ));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", self.devotion.connection.label()),
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(time) = self.devotion.last_update_label() {
            spans.push(Span::styled(
                format!(" {}", time),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut message = self.message.to_string();
        if self.devotion.is_busy() {
            message.push_str(" …");
        }
        let lines = vec![
            self.counters_line(),
            Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
