use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;

/// Key binding overlay. Reads the configured bindings so remapped keys
/// show up correctly.
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut ratatui::Frame, app: &App) {
        let theme = &app.theme;
        let keys = &app.config.keymap;

        let rows: Vec<(String, &str)> = vec![
            (format!("{} / \u{2193}", keys.scroll_down), "scroll down"),
            (format!("{} / \u{2191}", keys.scroll_up), "scroll up"),
            (keys.scroll_half_down.clone(), "half page down"),
            (keys.scroll_half_up.clone(), "half page up"),
            (format!("{} / {}", keys.next_section, keys.prev_section), "next / prev section"),
            (format!("{} / {}", keys.jump_to_top, keys.jump_to_bottom), "top / bottom"),
            (
                format!("{} / {} / \u{2190} \u{2192}", keys.prev_slide, keys.next_slide),
                "carousel",
            ),
            (keys.toggle_theme.clone(), "toggle theme"),
            (keys.open_link.clone(), "open main link"),
            (keys.quit.clone(), "quit"),
        ];

        let width = 44u16.min(frame.area().width.saturating_sub(4));
        let height = (rows.len() as u16 + 4).min(frame.area().height.saturating_sub(2));
        let popup_area = centered_rect(width, height, frame.area());

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", key),
                        Style::default()
                            .fg(theme.accent_alt)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "any key to close",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(44, 14, area);
        assert_eq!(rect.x, 28);
        assert_eq!(rect.y, 13);
        assert_eq!(rect.width, 44);
    }
}
