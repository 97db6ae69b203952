//! Particle backdrop rendered behind the page content.
//!
//! The field simulates in a virtual pixel space so distances behave the way
//! they would on a real canvas. A terminal cell is taller than it is wide, so
//! one cell maps to an 8x16 pixel block and the braille marker gives 2x4 dots
//! per cell, one dot per 4x4 pixels.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::widgets::Block;
use ratatui::Frame;
use starlit_core::Vec2;

use crate::app::App;

/// Virtual pixels covered by one terminal column
pub const CELL_PIXEL_WIDTH: f32 = 8.0;
/// Virtual pixels covered by one terminal row
pub const CELL_PIXEL_HEIGHT: f32 = 16.0;

/// Fraction of the page scroll applied to the hero backdrop
pub const PARALLAX_FACTOR: f32 = 0.5;

/// Rows of backdrop offset for a given page scroll position
pub fn parallax_rows(scroll: u16) -> u16 {
    (scroll as f32 * PARALLAX_FACTOR) as u16
}

/// Virtual pixel dimensions of a cell grid
pub fn surface_size(cols: u16, rows: u16) -> (f32, f32) {
    (
        cols as f32 * CELL_PIXEL_WIDTH,
        rows as f32 * CELL_PIXEL_HEIGHT,
    )
}

/// Map a terminal cell inside `area` to virtual pixel coordinates
/// (cell center). Returns None when the cell lies outside the area.
pub fn cell_to_pixels(column: u16, row: u16, area: Rect) -> Option<Vec2> {
    if column < area.x
        || row < area.y
        || column >= area.x.saturating_add(area.width)
        || row >= area.y.saturating_add(area.height)
    {
        return None;
    }
    Some(Vec2::new(
        (column - area.x) as f32 * CELL_PIXEL_WIDTH + CELL_PIXEL_WIDTH / 2.0,
        (row - area.y) as f32 * CELL_PIXEL_HEIGHT + CELL_PIXEL_HEIGHT / 2.0,
    ))
}

/// Particle backdrop behind the scrolling page. Pans at half the scroll
/// rate and slides off the top of the page with the hero.
pub struct BackgroundWidget;

impl BackgroundWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = &app.theme;

        // The page paragraphs write only their own glyphs, so the body
        // needs one opaque fill behind everything
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let pan_rows = parallax_rows(app.scroll.current_scroll());
        let visible_rows = area.height.saturating_sub(pan_rows);
        if visible_rows == 0 {
            return;
        }
        let canvas_area = Rect::new(area.x, area.y, area.width, visible_rows);

        // Bounds come from the field, not the area: during the resize
        // debounce window the field still has its old dimensions and the
        // backdrop stretches until regeneration lands.
        let field = &app.field;
        let width_px = field.width() as f64;
        let height_px = field.height() as f64;
        let pan_px = pan_rows as f64 * CELL_PIXEL_HEIGHT as f64;
        if width_px <= 0.0 || height_px - pan_px <= 0.0 {
            return;
        }

        let glide = &app.glide;
        let canvas = Canvas::default()
            .background_color(theme.bg0)
            .marker(Marker::Braille)
            .x_bounds([0.0, width_px])
            // The y window starts `pan_px` into the field; dots above it
            // fall outside the bounds and are clipped
            .y_bounds([0.0, height_px - pan_px])
            .paint(|ctx| {
                // Links first so particle dots win the cell color
                for link in field.links() {
                    ctx.draw(&CanvasLine {
                        x1: link.a.x as f64,
                        y1: height_px - link.a.y as f64,
                        x2: link.b.x as f64,
                        y2: height_px - link.b.y as f64,
                        color: theme.fade(theme.accent, link.alpha * 2.0),
                    });
                }

                for particle in field.particles() {
                    let coords = [(
                        particle.position.x as f64,
                        height_px - particle.position.y as f64,
                    )];
                    ctx.draw(&Points {
                        coords: &coords,
                        color: theme.fade(theme.muted, particle.opacity),
                    });
                }

                if glide.is_engaged() {
                    let pos = glide.position();
                    ctx.draw(&Circle {
                        x: pos.x as f64,
                        y: height_px - pos.y as f64,
                        radius: CELL_PIXEL_WIDTH as f64 / 2.0,
                        color: theme.fade(theme.accent_alt, 0.35),
                    });
                }
            });

        frame.render_widget(canvas, canvas_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size_scales_cells() {
        let (w, h) = surface_size(120, 40);
        assert_eq!(w, 960.0);
        assert_eq!(h, 640.0);
    }

    #[test]
    fn test_cell_to_pixels_maps_center() {
        let area = Rect::new(0, 2, 80, 20);
        let px = cell_to_pixels(0, 2, area).unwrap();
        assert_eq!(px, Vec2::new(4.0, 8.0));

        let px = cell_to_pixels(10, 5, area).unwrap();
        assert_eq!(px, Vec2::new(84.0, 56.0));
    }

    #[test]
    fn test_cell_to_pixels_outside_area() {
        let area = Rect::new(0, 2, 80, 20);
        assert!(cell_to_pixels(0, 0, area).is_none());
        assert!(cell_to_pixels(80, 5, area).is_none());
        assert!(cell_to_pixels(5, 22, area).is_none());
    }

    #[test]
    fn test_parallax_rows_halves_scroll() {
        assert_eq!(parallax_rows(0), 0);
        assert_eq!(parallax_rows(10), 5);
        assert_eq!(parallax_rows(11), 5);
    }
}
