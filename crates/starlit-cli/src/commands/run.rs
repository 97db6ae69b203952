use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use starlit_core::{content::SiteContent, AppConfig};
use starlit_tui::{
    app::{App, StatusKind},
    background::BackgroundWidget,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    widgets::{HelpWidget, NavbarWidget, PageWidget, SplashWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, content_path: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // The --content flag wins over the configured content file
    let content = match content_path.or_else(|| config.general.content_file.clone()) {
        Some(path) => SiteContent::load(&path)
            .with_context(|| format!("failed to load page content from {}", path.display()))?,
        None => SiteContent::embedded(),
    };

    let rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("starlit")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    let mut app = App::new(config, content, rng, size.width, size.height);

    info!("page loop starting at {}x{}", size.width, size.height);

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore the terminal whether the loop finished or failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Drive animations by wall-clock delta rather than loop iterations,
        // so input bursts do not speed the page up
        let now = Instant::now();
        app.advance(now - last_tick);
        last_tick = now;

        // Draw UI
        terminal.draw(|frame| {
            if app.in_splash() {
                SplashWidget::render(frame, app);
                return;
            }

            // Main layout: navigation, page body, status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NavbarWidget::rows(app)),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(frame.area());

            // The particle backdrop paints first; the page writes only its
            // own glyph cells over it
            BackgroundWidget::render(frame, main_layout[1], app);
            PageWidget::render(frame, main_layout[1], app);
            NavbarWidget::render(frame, main_layout[0], app);
            StatusBarWidget::render(frame, main_layout[2], app);

            if app.help_visible() {
                HelpWidget::render(frame, app);
            }
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    handle_action(app, action);
                }
                AppEvent::Resize(columns, rows) => {
                    app.on_resize(columns, rows);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply an action to the application state
fn handle_action(app: &mut App, action: Action) {
    // Any action other than the prefix itself resolves a pending `g`
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => {
            app.scroll.scroll_by(1, app.max_scroll);
        }
        Action::ScrollUp => {
            app.scroll.scroll_by(-1, app.max_scroll);
        }
        Action::ScrollHalfPageDown => {
            app.scroll
                .scroll_half_page_down(app.viewport.height, app.max_scroll);
        }
        Action::ScrollHalfPageUp => {
            app.scroll
                .scroll_half_page_up(app.viewport.height, app.max_scroll);
        }
        Action::ScrollPageDown => {
            app.scroll
                .scroll_full_page_down(app.viewport.height, app.max_scroll);
        }
        Action::ScrollPageUp => {
            app.scroll
                .scroll_full_page_up(app.viewport.height, app.max_scroll);
        }
        Action::NextSection => {
            app.next_section();
        }
        Action::PrevSection => {
            app.prev_section();
        }
        Action::GoToSection(index) => {
            app.scroll_to_section(index);
        }
        Action::JumpToTop => {
            app.scroll.scroll_to(0, app.max_scroll);
        }
        Action::JumpToBottom => {
            app.scroll.scroll_to(app.max_scroll, app.max_scroll);
        }
        Action::NextSlide => {
            app.carousel.next();
        }
        Action::PrevSlide => {
            app.carousel.prev();
        }
        Action::GoToSlide(index) => {
            app.carousel.go_to(index);
        }
        Action::ToggleFaq(index) => {
            app.faq.toggle(index);
        }
        Action::ToggleTheme => {
            app.toggle_theme();
        }
        Action::OpenPrimaryLink => {
            match app.content.hero.actions.iter().find_map(|a| a.url.clone()) {
                Some(url) => open_url(app, &url),
                // A page with no links scrolls to the first section instead
                None => app.scroll_to_section(1),
            }
        }
        Action::OpenUrl(url) => {
            open_url(app, &url);
        }
        Action::ShowHelp => {
            app.toggle_help();
        }
        Action::Dismiss => {
            app.dismiss_overlay();
        }
        Action::SkipSplash => {
            app.skip_splash();
        }
        Action::PointerMoved(column, row) => {
            app.on_pointer_move(column, row);
        }
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::None => {}
    }
}

/// Open a URL with the system handler, reporting the outcome in the
/// status bar
fn open_url(app: &mut App, url: &str) {
    info!("opening {url}");
    match open::that(url) {
        Ok(()) => app.set_status(StatusKind::Success, format!("Opened {url}")),
        Err(err) => app.set_status(StatusKind::Error, format!("Could not open {url}: {err}")),
    }
}
