use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use starlit_core::interact::SectionLayout;

use super::{
    FaqWidget, FeaturesWidget, FooterWidget, HeroWidget, Section, SectionBlock, StatsWidget,
    TestimonialsWidget,
};
use crate::app::App;

/// Stacks the section widgets into one scrolling page.
///
/// Builds every section for the current width, refreshes the section layout
/// and scroll bounds, then renders the slice of each section that intersects
/// the viewport. Clickable spans are translated into screen-space hit
/// regions here; rows scrolled off the top are dropped via `Paragraph::scroll`.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, body: Rect, app: &mut App) {
        app.viewport = body;
        if body.width == 0 || body.height == 0 {
            return;
        }
        let width = body.width;

        let blocks: Vec<SectionBlock> = Section::ALL
            .iter()
            .map(|section| match section {
                Section::Hero => HeroWidget::build(width, body.height, app),
                Section::Features => FeaturesWidget::build(width, app),
                Section::Stats => StatsWidget::build(width, app),
                Section::Testimonials => TestimonialsWidget::build(width, app),
                Section::Faq => FaqWidget::build(width, app),
                Section::Footer => FooterWidget::build(width, app),
            })
            .collect();

        let heights: Vec<u16> = blocks.iter().map(|b| b.height()).collect();
        app.layout = SectionLayout::new(&heights);
        app.max_scroll = app.layout.max_scroll(body.height);
        let scroll = app.scroll.update(app.max_scroll);

        app.hit_regions.clear();
        app.carousel_rect = None;

        for (i, block) in blocks.into_iter().enumerate() {
            let top = app.layout.offset_of(i);
            let height = heights[i];
            if top + height <= scroll || top >= scroll + body.height {
                continue;
            }

            // Rows clipped off the top, and the on-screen slice
            let skip = scroll.saturating_sub(top);
            let screen_y = body.y + top.saturating_sub(scroll);
            let available = body.height - (screen_y - body.y);
            let visible = (height - skip).min(available);
            let area = Rect::new(body.x, screen_y, width, visible);

            if i == Section::Testimonials.index() {
                app.carousel_rect = Some(area);
            }

            for hit in &block.hits {
                if hit.row < skip || hit.row - skip >= visible {
                    continue;
                }
                let x = body.x.saturating_add(hit.col);
                if x >= body.x + body.width {
                    continue;
                }
                let hit_width = hit.width.min(body.x + body.width - x);
                app.add_hit_region(
                    Rect::new(x, screen_y + (hit.row - skip), hit_width, 1),
                    hit.action.clone(),
                );
            }

            frame.render_widget(Paragraph::new(block.lines).scroll((skip, 0)), area);
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
    fn test_section_heights_cover_all_sections() {
        let app = test_app();
        let heights: Vec<u16> = Section::ALL
            .iter()
            .map(|section| match section {
                Section::Hero => HeroWidget::build(100, 28, &app).height(),
                Section::Features => FeaturesWidget::build(100, &app).height(),
                Section::Stats => StatsWidget::build(100, &app).height(),
                Section::Testimonials => TestimonialsWidget::build(100, &app).height(),
                Section::Faq => FaqWidget::build(100, &app).height(),
                Section::Footer => FooterWidget::build(100, &app).height(),
            })
            .collect();
        assert_eq!(heights.len(), 6);
        assert!(heights.iter().all(|h| *h > 0));

        let layout = SectionLayout::new(&heights);
        assert_eq!(layout.total(), heights.iter().sum::<u16>());
        // The page is taller than one viewport, so it scrolls
        assert!(layout.max_scroll(28) > 0);
    }
}
