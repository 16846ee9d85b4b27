//! Devotion board: every catalog star drawn at its grid cell.
//!
//! Stars are colored by their [`StarVisual`]; the star under the cursor is
//! drawn with the glow variant. The widget reports the geometry it used so
//! mouse positions can be mapped back to grid cells.

use super::colors::color_or;
use crate::catalog::{StarCatalog, StarIndex};
use crate::config::ColorConfig;
use crate::data::{GridGeometry, ScreenRect, StarBoard, StarVisual};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

const SKILL_GLYPH: &str = "◆";
const UNLOCKED_GLYPH: &str = "●";
const STAR_GLYPH: &str = "○";

pub struct StarGrid<'a> {
    catalog: &'a StarCatalog,
    board: &'a StarBoard,
    colors: &'a ColorConfig,
    cursor: Option<StarIndex>,
}

impl<'a> StarGrid<'a> {
    pub fn new(catalog: &'a StarCatalog, board: &'a StarBoard, colors: &'a ColorConfig) -> Self {
        Self {
            catalog,
            board,
            colors,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<StarIndex>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Terminal columns per grid column: spaced out when the board fits
    pub fn cell_width(grid_cols: u16, available: u16) -> u16 {
        if grid_cols.saturating_mul(2) <= available {
            2
        } else {
            1
        }
    }

    fn glyph(visual: StarVisual) -> &'static str {
        match visual {
            StarVisual::Skill | StarVisual::SkillGlow => SKILL_GLYPH,
            StarVisual::Unlocked | StarVisual::UnlockedGlow => UNLOCKED_GLYPH,
            _ => STAR_GLYPH,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Option<GridGeometry> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Devotion ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (grid_cols, _) = self.catalog.grid_size();
        let geometry = GridGeometry {
            area: ScreenRect::new(inner.x, inner.y, inner.width, inner.height),
            cell_width: Self::cell_width(grid_cols, inner.width),
        };

        for (index, star) in self.catalog.stars().iter().enumerate() {
            // Stars outside the visible area are clipped
            let Some((x, y)) = geometry.screen_pos(star.col, star.row) else {
                continue;
            };
            let visual = self.board.visual(index, self.cursor == Some(index));
            let mut style = Style::default().fg(color_or(
                self.colors.star_color(visual),
                Color::White,
            ));
            if visual.is_glow() {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_string(x, y, Self::glyph(visual), style);
        }

        Some(geometry)
    }
}
