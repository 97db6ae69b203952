use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{centered_start, pad_to_width, push_section_header, wrap_text, SectionBlock};
use crate::app::App;
use crate::input::Action;

/// Quote carousel. One slide at a time, arrows and dots for manual
/// navigation, autoplay handled by the app's carousel state.
pub struct TestimonialsWidget;

impl TestimonialsWidget {
    pub fn build(width: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let opacity = app.section_opacity(super::Section::Testimonials);

        block.blank();
        block.blank();
        push_section_header(&mut block, "Stories", "What people say", theme, opacity);

        let slides = &app.content.testimonials;
        if slides.is_empty() {
            block.blank();
            return block;
        }

        let card_width = width.saturating_sub(8).clamp(24, 56);
        let inner = (card_width - 2) as usize;
        let quote_width = inner.saturating_sub(4);

        // Card height holds the tallest quote so slides swap without the
        // page reflowing underneath
        let quote_rows = slides
            .iter()
            .map(|t| wrap_text(&format!("\u{201c}{}\u{201d}", t.quote), quote_width).len())
            .max()
            .unwrap_or(1);

        let border = Style::default().fg(theme.fade(theme.bg2, opacity.max(0.15)));
        let index = app.carousel.index().min(slides.len() - 1);
        let slide = &slides[index];

        block.push(
            Line::from(Span::styled(
                format!("\u{256d}{}\u{256e}", "\u{2500}".repeat(inner)),
                border,
            ))
            .alignment(Alignment::Center),
        );

        let mut quote = wrap_text(&format!("\u{201c}{}\u{201d}", slide.quote), quote_width);
        while quote.len() < quote_rows {
            quote.push(String::new());
        }
        for text in quote {
            block.push(
                Line::from(vec![
                    Span::styled("\u{2502}  ", border),
                    Span::styled(
                        pad_to_width(&text, quote_width),
                        Style::default()
                            .fg(theme.fade(theme.fg1, opacity))
                            .add_modifier(Modifier::ITALIC),
                    ),
                    Span::styled("  \u{2502}", border),
                ])
                .alignment(Alignment::Center),
            );
        }

        let byline = format!("\u{2014} {} \u{b7} {}", slide.author, slide.role);
        block.push(
            Line::from(vec![
                Span::styled("\u{2502}  ", border),
                Span::styled(
                    pad_to_width(&byline, quote_width),
                    Style::default().fg(theme.fade(theme.accent_alt, opacity)),
                ),
                Span::styled("  \u{2502}", border),
            ])
            .alignment(Alignment::Center),
        );

        block.push(
            Line::from(Span::styled(
                format!("\u{2570}{}\u{256f}", "\u{2500}".repeat(inner)),
                border,
            ))
            .alignment(Alignment::Center),
        );
        block.blank();

        // Controls row: arrows around one dot per slide
        let controls_row = block.height();
        let mut controls = String::from("\u{2039}  ");
        let mut dot_cols = Vec::new();
        for i in 0..slides.len() {
            if i > 0 {
                controls.push(' ');
            }
            dot_cols.push(controls.width() as u16);
            controls.push(if i == index { '\u{25cf}' } else { '\u{25cb}' });
        }
        controls.push_str("  \u{203a}");

        let controls_width = controls.width() as u16;
        let start = centered_start(width, controls_width);

        let mut spans = vec![Span::styled(
            "\u{2039}",
            Style::default().fg(theme.fade(theme.fg1, opacity)),
        )];
        spans.push(Span::raw("  "));
        for i in 0..slides.len() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let (glyph, color) = if i == index {
                ('\u{25cf}', theme.accent)
            } else {
                ('\u{25cb}', theme.muted)
            };
            spans.push(Span::styled(
                glyph.to_string(),
                Style::default().fg(theme.fade(color, opacity)),
            ));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "\u{203a}",
            Style::default().fg(theme.fade(theme.fg1, opacity)),
        ));
        block.push(Line::from(spans).alignment(Alignment::Center));

        block.hit(controls_row, start, 1, Action::PrevSlide);
        for (i, col) in dot_cols.iter().enumerate() {
            block.hit(controls_row, start + col, 1, Action::GoToSlide(i));
        }
        block.hit(
            controls_row,
            start + controls_width - 1,
            1,
            Action::NextSlide,
        );

        block.blank();
        block.blank();
        block.blank();
        block
    }
}
