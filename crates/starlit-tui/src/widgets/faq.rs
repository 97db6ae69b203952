use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{centered_start, pad_to_width, push_section_header, wrap_text, SectionBlock};
use crate::app::App;
use crate::input::Action;

/// Question list where at most one answer is expanded at a time.
/// Questions toggle on click; opening one closes the rest.
pub struct FaqWidget;

impl FaqWidget {
    pub fn build(width: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let opacity = app.section_opacity(super::Section::Faq);

        block.blank();
        block.blank();
        push_section_header(&mut block, "FAQ", "Questions, answered", theme, opacity);

        let column = width.saturating_sub(8).clamp(20, 60);
        let start = centered_start(width, column);

        for (i, item) in app.content.faq.iter().enumerate() {
            let open = app.faq.is_open(i);
            let marker = if open { '\u{25be}' } else { '\u{25b8}' };

            let question_row = block.height();
            block.push(
                Line::from(vec![
                    Span::styled(
                        format!("{} ", marker),
                        Style::default().fg(theme.fade(theme.accent, opacity)),
                    ),
                    Span::styled(
                        pad_to_width(&item.question, (column - 2) as usize),
                        Style::default()
                            .fg(theme.fade(theme.fg0, opacity))
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .alignment(Alignment::Center),
            );
            block.hit(question_row, start, column, Action::ToggleFaq(i));

            if open {
                for text in wrap_text(&item.answer, (column - 4) as usize) {
                    block.push(
                        Line::from(vec![
                            Span::raw("  "),
                            Span::styled(
                                pad_to_width(&text, (column - 2) as usize),
                                Style::default().fg(theme.fade(theme.muted, opacity)),
                            ),
                        ])
                        .alignment(Alignment::Center),
                    );
                }
            }
            block.blank();
        }

        block.blank();
        block.blank();
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlit_core::config::AppConfig;
    use starlit_core::content::SiteContent;

    fn test_app() -> App {
        let mut app = App::new(
            AppConfig::default(),
            SiteContent::embedded(),
            fastrand::Rng::with_seed(3),
            100,
            30,
        );
        app.skip_splash();
        app
    }

    #[test]
    fn test_closed_items_hide_answers() {
        let app = test_app();
        let block = FaqWidget::build(100, &app);
        let text: String = block
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        let first_answer = &app.content.faq[0].answer[..12];
        assert!(!text.contains(first_answer));
    }

    #[test]
    fn test_open_item_grows_section() {
        let mut app = test_app();
        let closed = FaqWidget::build(100, &app).height();
        app.faq.toggle(0);
        let open = FaqWidget::build(100, &app).height();
        assert!(open > closed);
    }

    #[test]
    fn test_every_question_is_clickable() {
        let app = test_app();
        let block = FaqWidget::build(100, &app);
        for i in 0..app.content.faq.len() {
            assert!(block
                .hits
                .iter()
                .any(|h| h.action == Action::ToggleFaq(i)));
        }
    }
}
