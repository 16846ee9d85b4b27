//! Hover tooltip drawn next to the star under the cursor.

use super::colors::color_or;
use crate::config::ColorConfig;
use crate::data::StarTooltip;
use crate::protocol::Affinity;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct TooltipPopup<'a> {
    name: &'a str,
    tooltip: Option<&'a StarTooltip>,
    colors: &'a ColorConfig,
}

impl<'a> TooltipPopup<'a> {
    pub fn new(name: &'a str, tooltip: Option<&'a StarTooltip>, colors: &'a ColorConfig) -> Self {
        Self {
            name,
            tooltip,
            colors,
        }
    }

    fn affinity_line(&self, label: &str, values: &[(Affinity, i32)]) -> Line<'static> {
        let mut spans = vec![Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )];
        for (affinity, value) in values {
            spans.push(Span::styled(
                format!(" {} {}", affinity.short_name(), value),
                Style::default().fg(color_or(self.colors.affinity_color(*affinity), Color::White)),
            ));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(tooltip) = self.tooltip else {
            return vec![Line::from(Span::styled(
                "Loading…",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let mut lines = Vec::new();
        for (i, section) in tooltip.sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if let Some(title) = &section.title {
                lines.push(Line::from(Span::styled(
                    title.clone(),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )));
            }
            lines.extend(section.lines.iter().map(|l| Line::from(l.clone())));
        }
        if !tooltip.requirements.is_empty() {
            lines.push(self.affinity_line("Requires", &tooltip.requirements));
        }
        if !tooltip.bonuses.is_empty() {
            lines.push(self.affinity_line("Grants", &tooltip.bonuses));
        }
        lines
    }

    fn title(&self) -> String {
        let name = self.tooltip.map(|t| t.name.as_str()).unwrap_or(self.name);
        format!(" {} ", name)
    }

    /// Place a `width`x`height` popup beside `anchor`, kept inside `bounds`
    pub fn popup_area(anchor: (u16, u16), width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;

        // Prefer the right side of the star, flip left when it does not fit
        let x = if anchor.0 + 2 + width <= right {
            anchor.0 + 2
        } else {
            anchor.0.saturating_sub(width + 1).max(bounds.x)
        };
        let y = anchor.1.min(bottom.saturating_sub(height)).max(bounds.y);
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, anchor: (u16, u16), bounds: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let title = self.title();
        let content_width = lines
            .iter()
            .map(|line| line.width())
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(content_width + 2).unwrap_or(u16::MAX);
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

        let area = Self::popup_area(anchor, width, height, bounds);
        if area.width < 3 || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title);
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
