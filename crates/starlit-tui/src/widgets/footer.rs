use chrono::{Datelike, Local};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{centered_start, SectionBlock};
use crate::app::App;
use crate::input::Action;

/// Closing section: rule, note, link row and copyright line.
pub struct FooterWidget;

impl FooterWidget {
    pub fn build(width: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let content = &app.content.footer;
        let opacity = app.section_opacity(super::Section::Footer);

        block.blank();
        let rule = width.saturating_sub(8).clamp(16, 60);
        block.push(
            Line::from(Span::styled(
                "\u{2500}".repeat(rule as usize),
                Style::default().fg(theme.fade(theme.bg2, opacity.max(0.15))),
            ))
            .alignment(Alignment::Center),
        );
        block.blank();

        if !content.note.is_empty() {
            block.push(
                Line::from(Span::styled(
                    content.note.clone(),
                    Style::default().fg(theme.fade(theme.muted, opacity)),
                ))
                .alignment(Alignment::Center),
            );
            block.blank();
        }

        if !content.links.is_empty() {
            let links_row = block.height();
            let mut spans = Vec::new();
            let mut cols = Vec::new();
            let mut cursor = 0u16;
            for (i, link) in content.links.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(
                        "  \u{b7}  ",
                        Style::default().fg(theme.fade(theme.muted, opacity)),
                    ));
                    cursor += 5;
                }
                let label_width = link.label.width() as u16;
                cols.push((cursor, label_width, link.url.clone()));
                spans.push(Span::styled(
                    link.label.clone(),
                    Style::default().fg(theme.fade(theme.accent_alt, opacity)),
                ));
                cursor += label_width;
            }

            let start = centered_start(width, cursor);
            for (col, label_width, url) in cols {
                if let Some(url) = url {
                    block.hit(links_row, start + col, label_width, Action::OpenUrl(url));
                }
            }
            block.push(Line::from(spans).alignment(Alignment::Center));
            block.blank();
        }

        block.push(
            Line::from(Span::styled(
                format!(
                    "\u{a9} {} {}",
                    Local::now().year(),
                    app.content.site.name
                ),
                Style::default().fg(theme.fade(theme.muted, opacity)),
            ))
            .alignment(Alignment::Center),
        );
        block.blank();

        block
    }
}
