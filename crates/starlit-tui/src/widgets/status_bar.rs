use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use starlit_core::interact::scroll_progress;
use unicode_width::UnicodeWidthStr;

use super::Section;
use crate::app::{App, StatusKind};

const PROGRESS_CELLS: usize = 8;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let section = Section::ALL[app
            .layout
            .section_at(app.scroll.current_scroll())
            .min(Section::ALL.len() - 1)];

        let (status_text, status_color) = match app.status_line() {
            Some((kind, msg)) => {
                let color = match kind {
                    StatusKind::Info => theme.info,
                    StatusKind::Success => theme.success,
                    StatusKind::Error => theme.error,
                };
                (format!(" {}", msg), color)
            }
            None => (format!(" \u{25cf} {}", section.label()), theme.fg0),
        };

        // Reading progress as a small bar plus percentage
        let progress = scroll_progress(app.scroll.current_scroll(), app.max_scroll);
        let filled = (progress * PROGRESS_CELLS as f32).round() as usize;
        let bar: String = (0..PROGRESS_CELLS)
            .map(|i| if i < filled { '\u{25b0}' } else { '\u{25b1}' })
            .collect();

        let right = format!(
            "{} {:>3.0}%  {}  t:theme ?:help q:quit ",
            bar,
            progress * 100.0,
            Local::now().format("%H:%M"),
        );

        let padding = area
            .width
            .saturating_sub(status_text.width() as u16 + right.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(status_color).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(theme.bg2)),
            Span::styled(right, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.bg2)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_cells_round() {
        // Mirror of the fill math used in render
        let filled = |p: f32| (p * PROGRESS_CELLS as f32).round() as usize;
        assert_eq!(filled(0.0), 0);
        assert_eq!(filled(0.5), 4);
        assert_eq!(filled(1.0), 8);
    }
}
