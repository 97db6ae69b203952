use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use starlit_core::motion::magnetic_offset;
use starlit_core::Vec2;
use unicode_width::UnicodeWidthStr;

use super::{centered_start, wrap_text, SectionBlock};
use crate::app::App;
use crate::input::Action;

/// Full-viewport opening section: headline, typed tagline, call-to-action
/// buttons and the scroll hint. The particle backdrop shows through every
/// row this widget leaves blank.
pub struct HeroWidget;

impl HeroWidget {
    pub fn build(width: u16, viewport_rows: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let hero = &app.content.hero;
        let opacity = app.section_opacity(super::Section::Hero);
        let fade = |color| theme.fade(color, opacity);

        let text_width = (width.saturating_sub(4) as usize).min(64);
        let headline_lines = wrap_text(&hero.headline, text_width);

        // eyebrow + headline + tagline + buttons + hint, with breathing room
        let content_rows = 8 + headline_lines.len() as u16;
        let pad_total = viewport_rows.saturating_sub(content_rows);
        let pad_top = pad_total * 2 / 5;
        let pad_bottom = pad_total - pad_top;

        for _ in 0..pad_top {
            block.blank();
        }

        // Eyebrow tag above the headline
        let eyebrow = format!("\u{2726} {}", app.content.site.tagline.to_uppercase());
        block.push(
            Line::from(Span::styled(
                eyebrow,
                Style::default().fg(fade(theme.accent_alt)),
            ))
            .alignment(Alignment::Center),
        );
        block.blank();

        // Headline with the last two words picked out in accent colors
        let total_words: usize = headline_lines.iter().map(|l| l.split(' ').count()).sum();
        let mut word_index = 0;
        for text in &headline_lines {
            let mut spans = Vec::new();
            for (i, word) in text.split(' ').enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let color = if word_index + 2 == total_words {
                    theme.accent
                } else if word_index + 1 == total_words {
                    theme.accent_alt
                } else {
                    theme.fg0
                };
                spans.push(Span::styled(
                    word.to_string(),
                    Style::default()
                        .fg(fade(color))
                        .add_modifier(Modifier::BOLD),
                ));
                word_index += 1;
            }
            block.push(Line::from(spans).alignment(Alignment::Center));
        }
        block.blank();

        // Tagline, revealed one character at a time
        let typed: String = hero.tagline.chars().take(app.typed_chars()).collect();
        let mut tagline_spans = vec![Span::styled(typed, Style::default().fg(fade(theme.fg1)))];
        if !app.tagline_done() {
            tagline_spans.push(Span::styled(
                "\u{258c}",
                Style::default().fg(theme.accent),
            ));
        }
        block.push(Line::from(tagline_spans).alignment(Alignment::Center));
        block.blank();

        Self::build_buttons(&mut block, width, app, opacity);
        block.blank();

        // Scroll hint pulses by alternating its fade level
        let hint_bright = app.frame_count() % 40 < 20;
        let hint_color = if hint_bright {
            fade(theme.fg1)
        } else {
            fade(theme.muted)
        };
        block.push(
            Line::from(Span::styled(
                format!("\u{25be} {}", hero.hint),
                Style::default().fg(hint_color),
            ))
            .alignment(Alignment::Center),
        );

        for _ in 0..pad_bottom {
            block.blank();
        }

        block
    }

    /// The CTA row is left-aligned with manual centering so the buttons can
    /// shift by whole columns when the pointer pulls on them.
    fn build_buttons(block: &mut SectionBlock, width: u16, app: &App, opacity: f32) {
        let theme = &app.theme;
        let hero = &app.content.hero;
        let row = block.height();

        let mut labels: Vec<(String, Action)> = Vec::new();
        for (i, action) in hero.actions.iter().take(2).enumerate() {
            let text = if i == 0 {
                format!("  {}  ", action.label)
            } else {
                format!("[ {} ]", action.label)
            };
            let act = match &action.url {
                Some(url) => Action::OpenUrl(url.clone()),
                // Actions without a URL scroll to the feature grid instead
                None => Action::GoToSection(1),
            };
            labels.push((text, act));
        }
        if labels.is_empty() {
            // Keep the row so the padding math above stays truthful
            block.blank();
            return;
        }

        const GAP: u16 = 3;
        let total: u16 = labels.iter().map(|(t, _)| t.width() as u16).sum::<u16>()
            + GAP * (labels.len() as u16 - 1);
        let base_start = centered_start(width, total);

        let pointer = app.pointer_page();
        let mut spans = Vec::new();
        let mut written = 0u16;
        let mut plain_start = base_start;

        for (i, (text, action)) in labels.iter().enumerate() {
            let label_width = text.width() as u16;
            let center = Vec2::new(plain_start as f32 + label_width as f32 / 2.0, row as f32);

            // Pull toward the pointer while it hovers near this button
            let pull = pointer
                .filter(|(col, r)| {
                    let near_row = (*r as i32 - row as i32).abs() <= 1;
                    let near_col = (*col as i32) >= plain_start as i32 - 2
                        && (*col as i32) < (plain_start + label_width) as i32 + 2;
                    near_row && near_col
                })
                .map(|(col, r)| {
                    magnetic_offset(
                        Vec2::new(col as f32, r as f32),
                        center,
                        app.config.motion.magnetic_strength,
                    )
                    .x
                    .round() as i32
                })
                .unwrap_or(0)
                .clamp(-2, 2);

            // Shifted start, never overlapping what is already on the line
            let min_start = if i == 0 { 0 } else { written + 1 };
            let start = ((plain_start as i32 + pull).max(min_start as i32)) as u16;

            spans.push(Span::raw(" ".repeat((start - written) as usize)));
            let style = if i == 0 {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.fade(theme.accent, opacity.max(0.4)))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fade(theme.accent_alt, opacity))
            };
            spans.push(Span::styled(text.clone(), style));
            block.hit(row, start, label_width, action.clone());

            written = start + label_width;
            plain_start += label_width + GAP;
        }

        block.push(Line::from(spans));
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
    fn test_hero_fills_viewport() {
        let app = test_app();
        let block = HeroWidget::build(100, 30, &app);
        assert_eq!(block.height(), 30);
    }

    #[test]
    fn test_hero_has_button_hits() {
        let app = test_app();
        let block = HeroWidget::build(100, 30, &app);
        assert!(block.hits.len() >= 2);
        assert!(block
            .hits
            .iter()
            .all(|h| (h.col + h.width) <= 100 && h.row < block.height()));
    }

    #[test]
    fn test_hero_small_viewport_keeps_content() {
        let app = test_app();
        let block = HeroWidget::build(40, 8, &app);
        // Content rows survive even when padding cannot fit
        assert!(block.height() >= 8);
    }
}
