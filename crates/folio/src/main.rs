use std::time::{Duration, Instant};

use chrono::{Datelike as _, Local};
use clap::Parser as _;
use color_eyre::eyre::WrapErr as _;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_config::Config;
use folio_content::Profile;
use folio_core::{Section, Theme};
use folio_effects::{EffectError, ParticleBackground, TypewriterCycler, render_caret};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::cli_args::CliArgs;
use crate::page::PageContext;

mod cli_args;
mod logging;
mod page;

/// Widest the page content gets, in columns.
const MAX_CONTENT_WIDTH: u16 = 96;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .wrap_err("Couldn't load config")?;
    let config = args.apply(config);
    logging::setup(&config).wrap_err("Couldn't set up logging")?;

    let profile = config.load_profile().wrap_err("Couldn't load content")?;
    let app = App::new(&config, profile).wrap_err("Couldn't set up the hero typewriter")?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current color scheme.
    theme: Theme,
    /// First page line shown in the viewport.
    scroll: usize,
    /// Height of the page viewport at the last render.
    viewport: usize,
    /// Number of page lines at the last render.
    page_len: usize,
    /// Section anchors at the last render.
    anchors: [usize; 5],
    profile: Profile,
    background: ParticleBackground,
    typewriter: TypewriterCycler,
    /// Time between redraws.
    frame_interval: Duration,
    started: Instant,
    last_tick: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config, profile: Profile) -> Result<Self, EffectError> {
        let typewriter = TypewriterCycler::new(
            profile.roles.iter().cloned(),
            Duration::from_millis(config.type_interval_ms),
            Duration::from_millis(config.pause_ms),
        )?;
        let background =
            ParticleBackground::new(config.density, config.cell_width_px, config.cell_height_px);
        let frame_interval = Duration::from_millis(1000 / u64::from(config.frame_rate.max(1)));
        let now = Instant::now();

        Ok(Self {
            running: false,
            theme: config.theme,
            scroll: 0,
            viewport: 0,
            page_len: 0,
            anchors: [0; 5],
            profile,
            background,
            typewriter,
            frame_interval,
            started: now,
            last_tick: now,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.background.start(Rect::new(0, 0, size.width, size.height));
        self.typewriter.start();
        self.last_tick = Instant::now();
        self.running = true;
        tracing::info!("Portfolio started at {}x{}", size.width, size.height);

        let result = self.event_loop(&mut terminal);

        self.background.stop();
        self.typewriter.stop();
        tracing::info!("Portfolio stopped");
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            let now = Instant::now();
            self.typewriter.advance(now - self.last_tick);
            self.last_tick = now;

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let theme = self.theme;
        let area = frame.area();

        frame.render_widget(Block::new().style(Style::new().bg(theme.background())), area);
        self.background.render(frame, theme);

        let [nav, body, help] = Layout::vertical([
            Constraint::Length(2), // Navbar
            Constraint::Fill(1),   // Page
            Constraint::Length(1), // Help text
        ])
        .areas(area);

        let content = centered(body, MAX_CONTENT_WIDTH);
        let caret_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let page = PageContext {
            profile: &self.profile,
            theme,
            width: usize::from(content.width.saturating_sub(4)),
            typed: self.typewriter.text(),
            caret: render_caret(caret_ms, theme.accent()),
            year: Local::now().year(),
        }
        .build();

        self.viewport = usize::from(content.height);
        self.page_len = page.lines.len();
        self.anchors = page.anchors;
        self.scroll = self.scroll.min(self.max_scroll());

        let active = if self.scroll > 0 && self.scroll >= self.max_scroll() {
            // The last section is too short to reach the top of the viewport.
            Some(Section::Contact)
        } else {
            page.section_at(self.scroll)
        };
        self.render_navbar(frame, nav, active);

        let scroll = u16::try_from(self.scroll).unwrap_or(u16::MAX);
        let body_widget = Paragraph::new(page.lines)
            .block(Block::new().padding(Padding::horizontal(2)))
            .scroll((scroll, 0));
        frame.render_widget(body_widget, content);

        let key = |k: &'static str| k.bold().fg(theme.accent());
        let hint = |h: &'static str| Span::styled(h, Style::new().fg(theme.muted()));
        let help_line = Line::from(vec![
            key("q"),
            hint(" sair  "),
            key("1-5"),
            hint(" seções  "),
            key("↑↓"),
            hint(" rolar  "),
            key("p"),
            hint(" projetos  "),
            key("c"),
            hint(" contato  "),
            key("t"),
            hint(" tema"),
        ])
        .centered();
        frame.render_widget(help_line, help);
    }

    fn render_navbar(&self, frame: &mut Frame, area: Rect, active: Option<Section>) {
        let theme = self.theme;
        let toggle = theme.toggle_label();
        let block = Block::new()
            .borders(Borders::BOTTOM)
            .border_style(Style::new().fg(theme.border()));
        let inner = centered(block.inner(area), MAX_CONTENT_WIDTH);
        frame.render_widget(block, area);

        let toggle_width = u16::try_from(toggle.chars().count() + 4).unwrap_or(u16::MAX);
        let [links_area, toggle_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(toggle_width)])
                .areas(inner);

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(self.profile.brand.clone(), Style::new().fg(theme.foreground()).bold()),
            Span::raw("   "),
        ];
        for section in Section::ALL {
            let style = if Some(section) == active {
                Style::new().fg(theme.foreground()).bold().underlined()
            } else {
                Style::new().fg(theme.muted())
            };
            spans.push(Span::styled(section.label(), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Line::from(spans), links_area);

        let toggle_line = Line::from(vec![
            Span::styled("[", Style::new().fg(theme.border())),
            Span::styled(toggle, Style::new().fg(theme.foreground())),
            Span::styled("]", Style::new().fg(theme.border())),
        ]);
        frame.render_widget(toggle_line, toggle_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval so animations keep moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.background.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C'))
            | (_, KeyCode::Esc | KeyCode::Char('q')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('p')) => self.jump_to(Section::Projects),
            (_, KeyCode::Char('c')) => self.jump_to(Section::Contact),
            (_, KeyCode::Char(digit @ '1'..='5')) => {
                if let Some(section) = Section::from_digit(digit) {
                    self.jump_to(section);
                }
            }
            (_, KeyCode::Tab) => {
                let next = self.current_section().map_or(Section::About, Section::next);
                self.jump_to(next);
            }
            (_, KeyCode::BackTab) => {
                let prev = self.current_section().map_or(Section::Contact, Section::prev);
                self.jump_to(prev);
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.scroll_by(self.page_step()),
            (_, KeyCode::PageUp) => self.scroll_by(-self.page_step()),
            (_, KeyCode::Home) => self.scroll = 0,
            (_, KeyCode::End) => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn max_scroll(&self) -> usize {
        self.page_len.saturating_sub(self.viewport)
    }

    fn page_step(&self) -> isize {
        isize::try_from(self.viewport.saturating_sub(2).max(1)).unwrap_or(1)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    /// Section whose anchor is at or above the top of the viewport.
    fn current_section(&self) -> Option<Section> {
        Section::ALL
            .iter()
            .rev()
            .find(|section| self.anchors[section.index()] <= self.scroll)
            .copied()
    }

    fn jump_to(&mut self, section: Section) {
        self.scroll = self.anchors[section.index()].min(self.max_scroll());
        tracing::debug!("Jumped to {section:?} at line {}", self.scroll);
    }

    /// Switch between the dark and light schemes.
    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        tracing::debug!("Theme switched to {:?}", self.theme);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Horizontally center a column at most `max_width` wide inside `area`.
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(&Config::default(), Profile::builtin()).expect("builtin roles")
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> String {
        terminal.draw(|frame| app.render(frame)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_new_rejects_empty_roles() {
        let profile = Profile {
            roles: Vec::new(),
            ..Profile::builtin()
        };
        let result = App::new(&Config::default(), profile);
        assert!(matches!(result, Err(EffectError::EmptyPhrases)));
    }

    #[test]
    fn test_render_shows_navbar_and_hero() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
        let screen = draw(&mut app, &mut terminal);
        assert!(screen.contains("JVLArut"));
        assert!(screen.contains("Projetos"));
        assert!(screen.contains("light"));
        assert!(screen.contains("João Vitor L. Arut"));
    }

    #[test]
    fn test_section_keys_scroll_to_anchor() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        draw(&mut app, &mut terminal);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.scroll, app.anchors[Section::Skills.index()]);
        assert_eq!(app.current_section(), Some(Section::Skills));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_section(), Some(Section::Experience));

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_section(), Some(Section::Skills));

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.scroll, app.anchors[Section::Projects.index()].min(app.max_scroll()));
    }

    #[test]
    fn test_tab_from_hero_goes_to_about() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        draw(&mut app, &mut terminal);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.scroll, app.anchors[Section::About.index()]);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        draw(&mut app, &mut terminal);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll, app.max_scroll());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, app.max_scroll());
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = app();
        app.running = true;
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Light);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Dark);

        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_contact_key_does_not_quit() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        draw(&mut app, &mut terminal);
        app.running = true;
        press(&mut app, KeyCode::Char('c'));
        assert!(app.running);
        assert_eq!(app.scroll, app.anchors[Section::Contact.index()].min(app.max_scroll()));
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered(Rect::new(0, 0, 200, 10), 96), Rect::new(52, 0, 96, 10));
        assert_eq!(centered(Rect::new(0, 0, 50, 10), 96), Rect::new(0, 0, 50, 10));
    }
}
