use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{pad_to_width, push_section_header, SectionBlock};
use crate::app::App;

const COLUMN_GAP: usize = 6;

/// Headline numbers that count up from zero once half the section has
/// scrolled into view.
pub struct StatsWidget;

impl StatsWidget {
    pub fn build(width: u16, app: &App) -> SectionBlock {
        let mut block = SectionBlock::new();
        let theme = &app.theme;
        let opacity = app.section_opacity(super::Section::Stats);

        block.blank();
        block.blank();
        push_section_header(&mut block, "By the numbers", "starlit in production", theme, opacity);

        let stats = &app.content.stats;
        if stats.is_empty() {
            block.blank();
            return block;
        }

        // Column widths come from the final values so the row does not
        // wobble while the counters run
        let cells: Vec<(String, String, usize)> = stats
            .iter()
            .enumerate()
            .map(|(i, stat)| {
                let value = format!(
                    "{}{}",
                    app.counters.get(i).map(|c| c.value()).unwrap_or(stat.value),
                    stat.suffix
                );
                let final_width = format!("{}{}", stat.value, stat.suffix).width();
                let col = final_width.max(stat.label.width());
                (value, stat.label.clone(), col)
            })
            .collect();

        let total: usize =
            cells.iter().map(|(_, _, w)| w).sum::<usize>() + COLUMN_GAP * (cells.len() - 1);

        if total <= width.saturating_sub(4) as usize {
            // Single row, values over labels
            let mut value_spans = Vec::new();
            let mut label_spans = Vec::new();
            for (i, (value, label, col)) in cells.iter().enumerate() {
                if i > 0 {
                    value_spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                    label_spans.push(Span::raw(" ".repeat(COLUMN_GAP)));
                }
                let pad = col.saturating_sub(value.width()) / 2;
                value_spans.push(Span::styled(
                    format!("{}{}", " ".repeat(pad), pad_to_width(value, col - pad)),
                    Style::default()
                        .fg(theme.fade(theme.accent, opacity))
                        .add_modifier(Modifier::BOLD),
                ));
                let pad = col.saturating_sub(label.width()) / 2;
                label_spans.push(Span::styled(
                    format!("{}{}", " ".repeat(pad), pad_to_width(label, col - pad)),
                    Style::default().fg(theme.fade(theme.muted, opacity)),
                ));
            }
            block.push(Line::from(value_spans).alignment(Alignment::Center));
            block.push(Line::from(label_spans).alignment(Alignment::Center));
        } else {
            // Narrow terminal: stack the stats
            for (value, label, _) in &cells {
                block.push(
                    Line::from(Span::styled(
                        value.clone(),
                        Style::default()
                            .fg(theme.fade(theme.accent, opacity))
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Center),
                );
                block.push(
                    Line::from(Span::styled(
                        label.clone(),
                        Style::default().fg(theme.fade(theme.muted, opacity)),
                    ))
                    .alignment(Alignment::Center),
                );
                block.blank();
            }
        }

        block.blank();
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
    use std::time::Duration;

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
    fn test_counters_render_zero_before_start() {
        let app = test_app();
        let block = StatsWidget::build(120, &app);
        let text: String = block
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("0+"));
        assert!(!text.contains("4800+"));
    }

    #[test]
    fn test_counters_render_target_when_done() {
        let mut app = test_app();
        for counter in &mut app.counters {
            counter.start();
            counter.advance(Duration::from_secs(10));
        }
        let block = StatsWidget::build(120, &app);
        let text: String = block
            .lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("4800+"));
    }

    #[test]
    fn test_row_height_stable_while_counting() {
        let mut app = test_app();
        let before = StatsWidget::build(120, &app).height();
        for counter in &mut app.counters {
            counter.start();
            counter.advance(Duration::from_millis(700));
        }
        let during = StatsWidget::build(120, &app).height();
        assert_eq!(before, during);
    }
}
