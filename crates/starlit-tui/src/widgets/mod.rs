//! Page widgets.
//!
//! Section widgets build their content as owned lines plus clickable spans in
//! section-local coordinates; `PageWidget` stacks them into the scrolling
//! page, clips against the viewport and translates the clickable spans into
//! screen-space hit regions. Fixed chrome (navbar, status bar, overlays)
//! renders directly.

mod faq;
mod features;
mod footer;
mod help;
mod hero;
mod navbar;
mod page;
mod splash;
mod stats;
mod status_bar;
mod testimonials;

pub use faq::FaqWidget;
pub use features::FeaturesWidget;
pub use footer::FooterWidget;
pub use help::HelpWidget;
pub use hero::HeroWidget;
pub use navbar::NavbarWidget;
pub use page::PageWidget;
pub use splash::SplashWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;
pub use testimonials::TestimonialsWidget;

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::input::Action;

/// Page sections in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Stats,
    Testimonials,
    Faq,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Features,
        Section::Stats,
        Section::Testimonials,
        Section::Faq,
        Section::Footer,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Features => 1,
            Section::Stats => 2,
            Section::Testimonials => 3,
            Section::Faq => 4,
            Section::Footer => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Features => "Features",
            Section::Stats => "Stats",
            Section::Testimonials => "Stories",
            Section::Faq => "FAQ",
            Section::Footer => "Footer",
        }
    }

    /// Sections linked from the navbar
    pub const NAV: [Section; 4] = [
        Section::Features,
        Section::Stats,
        Section::Testimonials,
        Section::Faq,
    ];
}

/// A clickable span in section-local coordinates
#[derive(Debug, Clone)]
pub struct HitSpan {
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub action: Action,
}

/// One section's rendered content, before placement on screen
pub struct SectionBlock {
    pub lines: Vec<Line<'static>>,
    pub hits: Vec<HitSpan>,
}

impl SectionBlock {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            hits: Vec::new(),
        }
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn hit(&mut self, row: u16, col: u16, width: u16, action: Action) {
        self.hits.push(HitSpan {
            row,
            col,
            width,
            action,
        });
    }
}

impl Default for SectionBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// Start column of centered content, mirroring `Alignment::Center`
pub(crate) fn centered_start(total: u16, content: u16) -> u16 {
    total.saturating_sub(content) / 2
}

/// Standard section opener: small uppercase tag over a bold title
pub(crate) fn push_section_header(
    block: &mut SectionBlock,
    tag: &str,
    title: &str,
    theme: &crate::theme::Theme,
    opacity: f32,
) {
    use ratatui::layout::Alignment;
    use ratatui::style::{Modifier, Style};
    use ratatui::text::Span;

    block.push(
        Line::from(Span::styled(
            tag.to_uppercase(),
            Style::default().fg(theme.fade(theme.accent_alt, opacity)),
        ))
        .alignment(Alignment::Center),
    );
    block.push(
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.fade(theme.fg0, opacity))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    block.blank();
}

/// Truncate a string to max display width with ellipsis
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let budget = max_width.saturating_sub(1);
    for c in s.chars() {
        let next = format!("{}{}", out, c);
        if next.width() > budget {
            break;
        }
        out = next;
    }
    format!("{}\u{2026}", out)
}

/// Greedy word wrap by display width
pub(crate) fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        if current.is_empty() {
            if word.width() > width {
                lines.push(truncate_str(word, width));
            } else {
                current.push_str(word);
            }
            continue;
        }

        if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word.width() > width {
                lines.push(truncate_str(word, width));
            } else {
                current.push_str(word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Pad or truncate a string to an exact display width
pub(crate) fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = if s.width() > width {
        truncate_str(s, width)
    } else {
        s.to_string()
    };
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_start() {
        assert_eq!(centered_start(80, 20), 30);
        assert_eq!(centered_start(81, 20), 30);
        assert_eq!(centered_start(10, 20), 0);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 8), "a longe\u{2026}");
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 12);
        assert_eq!(lines[0], "the quick");
        assert!(lines.iter().all(|l| l.width() <= 12));
        assert_eq!(
            lines.join(" "),
            "the quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("antidisestablishmentarianism now", 10);
        assert!(lines[0].width() <= 10);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 4), "abc\u{2026}");
    }

    #[test]
    fn test_section_order_matches_index() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }
}
