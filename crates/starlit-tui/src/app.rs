use std::time::Duration;

use ratatui::layout::{Position, Rect};
use starlit_core::config::AppConfig;
use starlit_core::content::SiteContent;
use starlit_core::interact::{
    visible_fraction, Accordion, Carousel, Reveal, SectionLayout, COUNTER_VISIBLE_FRACTION,
    REVEAL_VISIBLE_FRACTION,
};
use starlit_core::motion::{CountUp, Debouncer, FrameClock, PointerGlide};
use starlit_core::{ParticleField, Vec2};

use crate::background::{cell_to_pixels, parallax_rows, surface_size, CELL_PIXEL_HEIGHT};
use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::themes;
use crate::widgets::Section;

/// Delay between consecutive feature cards fading in
const CARD_STAGGER: Duration = Duration::from_millis(100);
/// How long a transient status message stays up
const STATUS_TTL: Duration = Duration::from_secs(3);
/// Rows taken by fixed chrome when estimating the body before the first
/// draw (expanded navbar plus status bar)
const CHROME_ROWS: u16 = 3;

/// A clickable screen rectangle, rebuilt on every draw
pub struct HitRegion {
    pub rect: Rect,
    pub action: Action,
}

/// Tint of a transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub content: SiteContent,
    pub theme: Theme,
    pub theme_name: String,

    /// Particle backdrop, simulated in fixed steps
    pub field: ParticleField,
    /// Trailing pointer dot drawn on the backdrop
    pub glide: PointerGlide,
    clock: FrameClock,
    frames_total: u64,

    /// Page scroll animation
    pub scroll: ScrollAnimator,
    /// Section offsets from the last draw
    pub layout: SectionLayout,
    /// Body area from the last draw
    pub viewport: Rect,
    pub max_scroll: u16,

    pub carousel: Carousel,
    pub faq: Accordion,
    pub counters: Vec<CountUp>,
    section_reveals: Vec<Reveal>,
    pub card_reveals: Vec<Reveal>,
    typewriter: CountUp,

    splash_remaining: Option<Duration>,
    splash_total: Duration,
    help_open: bool,

    pub hit_regions: Vec<HitRegion>,
    pub carousel_rect: Option<Rect>,
    pointer_cells: Option<(u16, u16)>,
    pub pending_key: Option<char>,

    resize_debounce: Debouncer,

    status: Option<(String, StatusKind, Duration)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: AppConfig,
        content: SiteContent,
        rng: fastrand::Rng,
        cols: u16,
        rows: u16,
    ) -> Self {
        let theme_name = config.ui.theme.name.clone();
        let theme = themes::load_theme(&config.ui.theme);
        let motion = &config.motion;

        let body_rows = rows.saturating_sub(CHROME_ROWS);
        let (width_px, height_px) = surface_size(cols, body_rows);
        let field = ParticleField::new(width_px, height_px, rng);

        let reveal_duration = Duration::from_millis(motion.reveal_duration_ms);
        let easing = motion.easing;
        let section_reveals = Section::ALL
            .iter()
            .map(|_| Reveal::new(Duration::ZERO, reveal_duration, easing))
            .collect();
        let card_reveals = content
            .features
            .iter()
            .enumerate()
            .map(|(i, _)| Reveal::new(CARD_STAGGER * i as u32, reveal_duration, easing))
            .collect();

        let counter_duration = Duration::from_millis(motion.counter_duration_ms);
        let counters = content
            .stats
            .iter()
            .map(|stat| CountUp::new(stat.value, counter_duration))
            .collect();

        let tagline_chars = content.hero.tagline.chars().count() as u64;
        let typewriter = CountUp::new(
            tagline_chars,
            Duration::from_millis(motion.typewriter_char_ms) * tagline_chars as u32,
        );

        let carousel = Carousel::new(
            content.testimonials.len(),
            Duration::from_millis(motion.autoplay_interval_ms),
        );
        let faq = Accordion::new(content.faq.len());

        let splash_total = Duration::from_millis(motion.splash_ms);
        let splash_remaining = config.ui.splash.then_some(splash_total);

        let mut app = Self {
            scroll: ScrollAnimator::from_motion(motion),
            resize_debounce: Debouncer::new(Duration::from_millis(motion.resize_debounce_ms)),
            config,
            content,
            theme,
            theme_name,
            field,
            glide: PointerGlide::default(),
            clock: FrameClock::sixty_hz(),
            frames_total: 0,
            layout: SectionLayout::new(&[]),
            viewport: Rect::new(0, 2, cols, body_rows),
            max_scroll: 0,
            carousel,
            faq,
            counters,
            section_reveals,
            card_reveals,
            typewriter,
            splash_remaining,
            splash_total,
            help_open: false,
            hit_regions: Vec::new(),
            carousel_rect: None,
            pointer_cells: None,
            pending_key: None,
            status: None,
            should_quit: false,
        };
        if app.splash_remaining.is_none() {
            app.start_page_intro();
        }
        app
    }

    /// Advance every time-driven piece of state by `dt`
    pub fn advance(&mut self, dt: Duration) {
        // The tick that ends the splash does not bleed its delta into the
        // page animations; the hero fade starts from zero next frame
        let mut intro_tick = false;
        if let Some(remaining) = self.splash_remaining {
            if dt >= remaining {
                self.splash_remaining = None;
                self.start_page_intro();
                intro_tick = true;
            } else {
                self.splash_remaining = Some(remaining - dt);
            }
        }

        // The backdrop simulates in whole frames so per-frame velocities
        // behave identically at any event-loop rate
        let frames = self.clock.advance(dt);
        for _ in 0..frames {
            self.field.update();
            self.glide.step();
        }
        self.frames_total += frames as u64;

        // Regenerate the field once a resize burst has settled
        if self.resize_debounce.advance(dt) {
            let (width_px, height_px) = surface_size(self.viewport.width, self.viewport.height);
            self.field.resize(width_px, height_px);
        }

        if self.splash_remaining.is_none() && !intro_tick {
            self.typewriter.advance(dt);
            self.trigger_visible();
            for reveal in &mut self.section_reveals {
                reveal.advance(dt);
            }
            for reveal in &mut self.card_reveals {
                reveal.advance(dt);
            }
            for counter in &mut self.counters {
                counter.advance(dt);
            }

            let hovering = match (self.pointer_cells, self.carousel_rect) {
                (Some((col, row)), Some(rect)) => rect.contains(Position::new(col, row)),
                _ => false,
            };
            self.carousel.set_paused(hovering);
            self.carousel.advance(dt);
        }

        if let Some((_, _, remaining)) = &mut self.status {
            if dt >= *remaining {
                self.status = None;
            } else {
                *remaining -= dt;
            }
        }
    }

    /// Fire one-shot animations for sections that have scrolled into view
    fn trigger_visible(&mut self) {
        let scroll = self.scroll.current_scroll();
        let viewport = self.viewport.height;

        for i in 1..self.section_reveals.len() {
            if self.section_reveals[i].is_triggered() {
                continue;
            }
            let fraction = visible_fraction(
                self.layout.offset_of(i),
                self.layout.height_of(i),
                scroll,
                viewport,
            );
            if fraction >= REVEAL_VISIBLE_FRACTION {
                self.section_reveals[i].trigger();
                if i == Section::Features.index() {
                    for card in &mut self.card_reveals {
                        card.trigger();
                    }
                }
            }
        }

        let stats = Section::Stats.index();
        let fraction = visible_fraction(
            self.layout.offset_of(stats),
            self.layout.height_of(stats),
            scroll,
            viewport,
        );
        if fraction >= COUNTER_VISIBLE_FRACTION {
            for counter in &mut self.counters {
                counter.start();
            }
        }
    }

    /// Kick off the hero animations (after the splash, or immediately when
    /// the splash is disabled)
    fn start_page_intro(&mut self) {
        self.section_reveals[Section::Hero.index()].trigger();
        self.typewriter.start();
    }

    // Splash

    pub fn in_splash(&self) -> bool {
        self.splash_remaining.is_some()
    }

    pub fn splash_progress(&self) -> f32 {
        match self.splash_remaining {
            Some(remaining) if !self.splash_total.is_zero() => {
                1.0 - remaining.as_secs_f32() / self.splash_total.as_secs_f32()
            }
            Some(_) => 1.0,
            None => 1.0,
        }
    }

    pub fn skip_splash(&mut self) {
        if self.splash_remaining.take().is_some() {
            self.start_page_intro();
        }
    }

    pub fn restart_splash(&mut self) {
        self.splash_remaining = Some(self.splash_total);
    }

    // Overlays and transient status

    pub fn help_visible(&self) -> bool {
        self.help_open
    }

    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    pub fn dismiss_overlay(&mut self) {
        self.help_open = false;
    }

    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((message.into(), kind, STATUS_TTL));
    }

    pub fn status_line(&self) -> Option<(StatusKind, &str)> {
        self.status
            .as_ref()
            .map(|(message, kind, _)| (*kind, message.as_str()))
    }

    // Pointer and hit testing

    /// Record a pointer position in terminal cells
    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        self.pointer_cells = Some((column, row));
        if let Some(px) = cell_to_pixels(column, row, self.viewport) {
            // The backdrop pans with scroll, so the same screen cell points
            // deeper into the field once the page has moved
            let pan = parallax_rows(self.scroll.current_scroll()) as f32 * CELL_PIXEL_HEIGHT;
            self.field.set_pointer(px.x, px.y + pan);
            self.glide.retarget(Vec2::new(px.x, px.y + pan));
        }
    }

    /// Pointer position in page coordinates (columns relative to the body,
    /// rows including scroll)
    pub fn pointer_page(&self) -> Option<(u16, u16)> {
        let (col, row) = self.pointer_cells?;
        if !self.viewport.contains(Position::new(col, row)) {
            return None;
        }
        Some((
            col - self.viewport.x,
            self.scroll.current_scroll() + (row - self.viewport.y),
        ))
    }

    pub fn add_hit_region(&mut self, rect: Rect, action: Action) {
        self.hit_regions.push(HitRegion { rect, action });
    }

    /// Topmost clickable action under the given cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.hit_regions
            .iter()
            .rev()
            .find(|region| region.rect.contains(position))
            .map(|region| region.action.clone())
    }

    // Resize

    /// Note a terminal resize; the field regenerates after the debounce
    /// quiet period using the body size from the next draws
    pub fn on_resize(&mut self, _columns: u16, _rows: u16) {
        self.resize_debounce.trigger();
    }

    // Scroll targets

    pub fn scroll_to_section(&mut self, index: usize) {
        let target = self.layout.offset_of(index.min(Section::ALL.len() - 1));
        self.scroll.scroll_to(target, self.max_scroll);
    }

    pub fn next_section(&mut self) {
        let current = self.layout.section_at(self.scroll.target_scroll());
        self.scroll_to_section((current + 1).min(Section::ALL.len() - 1));
    }

    pub fn prev_section(&mut self) {
        let current = self.layout.section_at(self.scroll.target_scroll());
        self.scroll_to_section(current.saturating_sub(1));
    }

    // Animation state read by the widgets

    pub fn section_opacity(&self, section: Section) -> f32 {
        self.section_reveals[section.index()].opacity()
    }

    pub fn typed_chars(&self) -> usize {
        self.typewriter.value() as usize
    }

    pub fn tagline_done(&self) -> bool {
        self.typewriter.target() == 0 || self.typewriter.is_done()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames_total
    }

    // Theme

    /// Swap to the other half of the current theme's dark/light pair.
    /// The swap is session-only; the configured theme is untouched.
    pub fn toggle_theme(&mut self) {
        let name = themes::counterpart(&self.theme_name);
        self.theme = themes::theme_by_name(name);
        self.theme_name = name.to_string();
        self.set_status(StatusKind::Info, format!("Theme: {}", name));
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(
            AppConfig::default(),
            SiteContent::embedded(),
            fastrand::Rng::with_seed(9),
            120,
            40,
        )
    }

    /// Run one draw's worth of layout bookkeeping without a terminal
    fn settle_layout(app: &mut App, heights: &[u16]) {
        app.layout = SectionLayout::new(heights);
        app.max_scroll = app.layout.max_scroll(app.viewport.height);
    }

    #[test]
    fn test_splash_gates_intro() {
        let mut app = test_app();
        assert!(app.in_splash());
        assert_eq!(app.typed_chars(), 0);

        app.advance(Duration::from_millis(500));
        assert!(app.in_splash());

        app.advance(Duration::from_millis(1100));
        assert!(!app.in_splash());

        // Typewriter starts only after the splash clears
        app.advance(Duration::from_millis(100));
        assert_eq!(app.typed_chars(), 3);
    }

    #[test]
    fn test_skip_splash_starts_intro() {
        let mut app = test_app();
        app.skip_splash();
        assert!(!app.in_splash());
        app.advance(Duration::from_millis(45));
        assert_eq!(app.typed_chars(), 1);
    }

    #[test]
    fn test_splash_progress_monotonic() {
        let mut app = test_app();
        let start = app.splash_progress();
        app.advance(Duration::from_millis(700));
        let mid = app.splash_progress();
        assert!(mid > start);
        app.advance(Duration::from_secs(2));
        assert_eq!(app.splash_progress(), 1.0);
    }

    #[test]
    fn test_hero_reveals_after_splash() {
        let mut app = test_app();
        app.skip_splash();
        assert_eq!(app.section_opacity(Section::Hero), 0.0);
        app.advance(Duration::from_secs(1));
        assert_eq!(app.section_opacity(Section::Hero), 1.0);
    }

    #[test]
    fn test_sections_reveal_when_scrolled_into_view() {
        let mut app = test_app();
        app.skip_splash();
        settle_layout(&mut app, &[40, 20, 10, 15, 15, 8]);

        // Features (rows 40..60) is out of view in a 37-row viewport
        app.advance(Duration::from_secs(1));
        assert_eq!(app.section_opacity(Section::Features), 0.0);

        app.scroll.set_scroll(30);
        app.advance(Duration::from_secs(1));
        assert_eq!(app.section_opacity(Section::Features), 1.0);
    }

    #[test]
    fn test_counters_wait_for_half_visibility() {
        let mut app = test_app();
        app.skip_splash();
        settle_layout(&mut app, &[40, 20, 10, 15, 15, 8]);

        // Stats occupies rows 60..70; scroll 28 shows rows 28..65, five of
        // its ten rows -> exactly half visible
        app.scroll.set_scroll(27);
        app.advance(Duration::from_millis(16));
        assert!(!app.counters[0].is_running());

        app.scroll.set_scroll(28);
        app.advance(Duration::from_millis(16));
        assert!(app.counters[0].is_running() || app.counters[0].is_done());
    }

    #[test]
    fn test_card_reveals_stagger() {
        let mut app = test_app();
        app.skip_splash();
        settle_layout(&mut app, &[10, 20, 10, 15, 15, 8]);

        // Everything near the top is visible at scroll 0
        app.advance(Duration::from_millis(16));
        app.advance(Duration::from_millis(150));

        let first = app.card_reveals[0].opacity();
        let second = app.card_reveals[1].opacity();
        assert!(first > second);
    }

    #[test]
    fn test_field_pointer_follows_mouse() {
        let mut app = test_app();
        app.skip_splash();
        assert!(app.field.pointer().is_none());

        app.on_pointer_move(10, 5);
        let pointer = app.field.pointer().unwrap();
        assert_eq!(pointer.x, 84.0);
        assert_eq!(pointer.y, 56.0);
    }

    #[test]
    fn test_pointer_outside_body_ignored_by_field() {
        let mut app = test_app();
        app.skip_splash();
        // Row 0 is the navbar
        app.on_pointer_move(10, 0);
        assert!(app.field.pointer().is_none());
    }

    #[test]
    fn test_resize_debounce_regenerates_once() {
        let mut app = test_app();
        app.skip_splash();
        let before = app.field.particles().len();

        app.on_resize(200, 60);
        app.viewport = Rect::new(0, 2, 200, 57);
        // Still within the quiet period: same field
        app.advance(Duration::from_millis(100));
        assert_eq!(app.field.particles().len(), before);

        app.advance(Duration::from_millis(200));
        assert!(app.field.particles().len() > before);
    }

    #[test]
    fn test_hover_pauses_carousel() {
        let mut app = test_app();
        app.skip_splash();
        app.carousel_rect = Some(Rect::new(0, 10, 100, 10));

        app.on_pointer_move(50, 15);
        app.advance(Duration::from_millis(16));
        assert!(app.carousel.is_paused());

        app.on_pointer_move(50, 30);
        app.advance(Duration::from_millis(16));
        assert!(!app.carousel.is_paused());
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut app = test_app();
        app.add_hit_region(Rect::new(0, 0, 100, 1), Action::JumpToTop);
        app.add_hit_region(Rect::new(10, 0, 5, 1), Action::ToggleTheme);
        assert_eq!(app.hit_test(12, 0), Some(Action::ToggleTheme));
        assert_eq!(app.hit_test(2, 0), Some(Action::JumpToTop));
        assert_eq!(app.hit_test(50, 20), None);
    }

    #[test]
    fn test_toggle_theme_flips_brightness() {
        let mut app = test_app();
        let dark = app.theme.dark;
        app.toggle_theme();
        assert_ne!(app.theme.dark, dark);
        app.toggle_theme();
        assert_eq!(app.theme.dark, dark);
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = test_app();
        app.set_status(StatusKind::Success, "hello");
        assert_eq!(app.status_line(), Some((StatusKind::Success, "hello")));
        app.advance(Duration::from_secs(2));
        assert!(app.status_line().is_some());
        app.advance(Duration::from_secs(2));
        assert!(app.status_line().is_none());
    }

    #[test]
    fn test_section_navigation_clamps() {
        let mut app = test_app();
        app.skip_splash();
        settle_layout(&mut app, &[40, 20, 10, 15, 15, 8]);

        for _ in 0..10 {
            app.next_section();
            app.scroll.set_scroll(app.scroll.target_scroll());
        }
        assert_eq!(app.scroll.current_scroll(), app.max_scroll.min(app.layout.offset_of(5)));

        for _ in 0..10 {
            app.prev_section();
            app.scroll.set_scroll(app.scroll.target_scroll());
        }
        assert_eq!(app.scroll.current_scroll(), 0);
    }
}
