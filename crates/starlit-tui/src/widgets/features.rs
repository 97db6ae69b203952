use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{pad_to_width, push_section_header, wrap_text, SectionBlock};
use crate::app::App;

const CARD_WIDTH: u16 = 26;
const CARD_GAP: u16 = 2;
/// Border, title, two body rows, border
const CARD_ROWS: usize = 5;

/// Feature cards in a responsive grid: three across on wide terminals,
/// stacking down to a single column as the width shrinks.
pub struct FeaturesWidget;

impl FeaturesWidget {
    pub fn build(width: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let opacity = app.section_opacity(super::Section::Features);

        block.blank();
        block.blank();
        push_section_header(&mut block, "Features", "Built for flow", theme, opacity);

        let columns = (width.saturating_sub(4) / (CARD_WIDTH + CARD_GAP)).clamp(1, 3) as usize;

        for (row_index, chunk) in app.content.features.chunks(columns).enumerate() {
            if row_index > 0 {
                block.blank();
            }

            // Render each card, then zip the rows together
            let cards: Vec<Vec<Line<'static>>> = chunk
                .iter()
                .enumerate()
                .map(|(i, feature)| {
                    let card_index = row_index * columns + i;
                    let card_opacity = app
                        .card_reveals
                        .get(card_index)
                        .map(|r| r.opacity())
                        .unwrap_or(opacity);
                    card_lines(feature, theme, card_opacity)
                })
                .collect();

            for row in 0..CARD_ROWS {
                let mut spans = Vec::new();
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" ".repeat(CARD_GAP as usize)));
                    }
                    spans.extend(card[row].spans.iter().cloned());
                }
                block.push(Line::from(spans).alignment(Alignment::Center));
            }
        }

        block.blank();
        block.blank();
        block.blank();
        block
    }
}

fn card_lines(
    feature: &starlit_core::content::Feature,
    theme: &crate::theme::Theme,
    opacity: f32,
) -> Vec<Line<'static>> {
    let inner = (CARD_WIDTH - 2) as usize;
    let border = Style::default().fg(theme.fade(theme.bg2, opacity.max(0.15)));
    let bg = theme.fade(theme.bg1, opacity);

    let mut lines = Vec::with_capacity(CARD_ROWS);
    lines.push(Line::from(Span::styled(
        format!("\u{256d}{}\u{256e}", "\u{2500}".repeat(inner)),
        border,
    )));

    // Title row: icon in accent, name in bold
    let title = pad_to_width(&feature.title, inner.saturating_sub(4));
    lines.push(Line::from(vec![
        Span::styled("\u{2502} ", border),
        Span::styled(
            feature.icon.clone(),
            Style::default().fg(theme.fade(theme.accent, opacity)).bg(bg),
        ),
        Span::styled(
            format!(" {}", title),
            Style::default()
                .fg(theme.fade(theme.fg0, opacity))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{2502}", border),
    ]));

    let mut body = wrap_text(&feature.body, inner.saturating_sub(2));
    body.truncate(2);
    while body.len() < 2 {
        body.push(String::new());
    }
    for text in body {
        lines.push(Line::from(vec![
            Span::styled("\u{2502} ", border),
            Span::styled(
                pad_to_width(&text, inner.saturating_sub(2)),
                Style::default().fg(theme.fade(theme.muted, opacity)).bg(bg),
            ),
            Span::styled(" \u{2502}", border),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("\u{2570}{}\u{256f}", "\u{2500}".repeat(inner)),
        border,
    )));
    lines
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
    fn test_three_columns_on_wide_terminal() {
        let app = test_app();
        let block = FeaturesWidget::build(100, &app);
        // Header (3) + padding (5) + one card row
        assert_eq!(block.height() as usize, 3 + 5 + CARD_ROWS);
    }

    #[test]
    fn test_cards_stack_when_narrow() {
        let app = test_app();
        let narrow = FeaturesWidget::build(40, &app);
        let wide = FeaturesWidget::build(100, &app);
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn test_card_row_widths_align() {
        let app = test_app();
        let block = FeaturesWidget::build(100, &app);
        let widths: Vec<usize> = block
            .lines
            .iter()
            .map(|l| l.width())
            .filter(|w| *w > 0)
            .collect();
        // All card rows in a chunk share the same width so the borders line up
        let card_rows: Vec<usize> = widths
            .iter()
            .copied()
            .filter(|w| *w >= CARD_WIDTH as usize)
            .collect();
        assert!(card_rows.windows(2).all(|w| w[0] == w[1]));
    }
}
