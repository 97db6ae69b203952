use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use starlit_core::interact::is_condensed;
use unicode_width::UnicodeWidthStr;

use super::Section;
use crate::app::App;
use crate::input::Action;

/// Fixed navigation bar. Two rows at the top of the page, condensing to a
/// single tighter row once the reader scrolls past the threshold. Links
/// highlight to match the section currently in view.
pub struct NavbarWidget;

impl NavbarWidget {
    /// Rows the navbar occupies at the current scroll position
    pub fn rows(app: &App) -> u16 {
        if is_condensed(
            app.scroll.current_scroll(),
            app.config.motion.scroll_threshold_rows,
        ) {
            1
        } else {
            2
        }
    }

    pub fn render(frame: &mut ratatui::Frame, area: Rect, app: &mut App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = &app.theme;
        let condensed = area.height == 1;
        let bg = if condensed { theme.bg2 } else { theme.bg1 };
        let row = Rect::new(area.x, area.y, area.width, 1);

        let active = app.layout.section_at(app.scroll.current_scroll());

        // Left side: brand + section links
        let brand = format!(" \u{2726} {}", app.content.site.name);
        let mut spans = vec![Span::styled(
            brand.clone(),
            Style::default()
                .fg(theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )];
        let mut hits = vec![(0u16, brand.width() as u16, Action::JumpToTop)];
        let mut cursor = brand.width() as u16;

        // Right side: theme toggle + call to action
        let cta = app
            .content
            .hero
            .actions
            .first()
            .map(|a| format!(" {} ", a.label));
        let toggle = "\u{25d0}";
        let right_width = 2
            + toggle.width() as u16
            + cta.as_ref().map(|c| c.width() as u16 + 2).unwrap_or(0)
            + 1;

        // Section links, dropped wholesale when the bar is too tight
        let links_width: u16 = Section::NAV
            .iter()
            .map(|s| s.label().width() as u16 + 3)
            .sum();
        if cursor + links_width + right_width <= area.width {
            for section in Section::NAV {
                spans.push(Span::styled("   ", Style::default().bg(bg)));
                cursor += 3;
                let label = section.label();
                let style = if section.index() == active {
                    Style::default()
                        .fg(theme.accent)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg1).bg(bg)
                };
                spans.push(Span::styled(label.to_string(), style));
                hits.push((
                    cursor,
                    label.width() as u16,
                    Action::GoToSection(section.index()),
                ));
                cursor += label.width() as u16;
            }
        }

        // Spacer, then the right cluster
        let pad = area.width.saturating_sub(cursor + right_width);
        spans.push(Span::styled(
            " ".repeat(pad as usize),
            Style::default().bg(bg),
        ));
        cursor += pad;

        spans.push(Span::styled(
            toggle.to_string(),
            Style::default().fg(theme.accent_alt).bg(bg),
        ));
        hits.push((cursor, toggle.width() as u16, Action::ToggleTheme));
        cursor += toggle.width() as u16;
        spans.push(Span::styled("  ", Style::default().bg(bg)));
        cursor += 2;

        if let Some(cta) = cta {
            let cta_width = cta.width() as u16;
            if cursor + cta_width < area.width {
                spans.push(Span::styled(
                    cta,
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ));
                hits.push((cursor, cta_width, Action::OpenPrimaryLink));
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
            row,
        );

        // Expanded bar gets a hairline under it
        if !condensed && area.height >= 2 {
            let divider = Rect::new(area.x, area.y + 1, area.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "\u{2500}".repeat(area.width as usize),
                    Style::default().fg(theme.bg2).bg(theme.bg0),
                ))),
                divider,
            );
        }

        for (col, width, action) in hits {
            let width = width.min(area.width.saturating_sub(col));
            if width > 0 {
                app.add_hit_region(Rect::new(area.x + col, area.y, width, 1), action);
            }
        }
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
    fn test_navbar_condenses_past_threshold() {
        let mut app = test_app();
        assert_eq!(NavbarWidget::rows(&app), 2);
        app.scroll
            .set_scroll(app.config.motion.scroll_threshold_rows + 1);
        assert_eq!(NavbarWidget::rows(&app), 1);
    }

    #[test]
    fn test_navbar_at_threshold_stays_expanded() {
        let mut app = test_app();
        app.scroll.set_scroll(app.config.motion.scroll_threshold_rows);
        assert_eq!(NavbarWidget::rows(&app), 2);
    }
}
