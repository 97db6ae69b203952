use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::app::App;

const BAR_CELLS: usize = 24;

/// Boot overlay shown while the page warms up. Any key or click skips it.
pub struct SplashWidget;

impl SplashWidget {
    pub fn render(frame: &mut ratatui::Frame, app: &App) {
        let area = frame.area();
        let theme = &app.theme;

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            area,
        );

        // Brand with letter spacing, progress bar, hint
        let name: String = app
            .content
            .site
            .name
            .chars()
            .flat_map(|c| [c, ' '])
            .collect();
        let progress = app.splash_progress();
        let filled = ((progress * BAR_CELLS as f32) as usize).min(BAR_CELLS);

        let lines = vec![
            Line::from(vec![
                Span::styled("\u{2726} ", Style::default().fg(theme.accent_alt)),
                Span::styled(
                    name.trim_end().to_string(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    "\u{2501}".repeat(filled),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    "\u{2500}".repeat(BAR_CELLS - filled),
                    Style::default().fg(theme.bg2),
                ),
            ])
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        ];

        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let content = Rect::new(
            area.x,
            area.y + top,
            area.width,
            (lines.len() as u16).min(area.height),
        );
        frame.render_widget(Paragraph::new(lines), content);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_bar_fill_bounds() {
        use super::BAR_CELLS;
        let filled = |p: f32| (p * BAR_CELLS as f32) as usize;
        assert_eq!(filled(0.0), 0);
        assert_eq!(filled(1.0), BAR_CELLS);
        assert!(filled(0.5) < BAR_CELLS);
    }
}
