use std::collections::HashMap;
use std::time::Duration;

use chrono::{Datelike, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use unfurl_config::Config;
use unfurl_core::{AnimationSpeed, ColorTheme, Easing, ElementId, MetricValue};
use unfurl_motion::{
    CounterTween, FrameClock, MonotonicClock, RevealWatcher, RowSpan, TextRotator, ViewportSignal,
};

use crate::layout::{ChromeKind, PageLayout};
use crate::page::{Page, SectionKind};

mod layout;
mod page;
mod view;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The visible page rows implied by the scroll offset.
struct ScrollViewport {
    top: i32,
    height: u16,
}

impl ViewportSignal for ScrollViewport {
    fn viewport(&self) -> Option<RowSpan> {
        Some(RowSpan::new(self.top, self.height))
    }
}

/// The main application which holds the state and logic of the viewer.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current accent theme.
    theme: ColorTheme,
    speed: AnimationSpeed,
    page: Page,
    /// Canvas layout for the current terminal width.
    layout: PageLayout,
    /// Scroll offset in canvas rows.
    scroll: i32,
    /// Content rows on screen, captured at the last render.
    view_height: u16,
    clock: MonotonicClock,
    rotator: TextRotator,
    /// Generic reveal watcher over every panel.
    reveal_watcher: RevealWatcher,
    /// Metric watcher layered over the metric panels with its own
    /// threshold; independent of the generic watcher.
    metric_watcher: RevealWatcher,
    /// When each element revealed, for entry transition progress.
    revealed_at: HashMap<ElementId, Duration>,
    /// Running counter tweens, one per metric panel at most.
    counters: HashMap<ElementId, CounterTween>,
    menu_open: bool,
    menu_cursor: usize,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        let page = config
            .content
            .as_deref()
            .and_then(Page::load)
            .unwrap_or_else(Page::demo);
        let speed = config.speed();
        let rotator = TextRotator::new(
            page.tagline.clone(),
            Duration::from_millis(speed.rotate_period_ms()),
        );

        Self {
            running: false,
            theme: config.theme(),
            speed,
            rotator,
            page,
            layout: PageLayout::default(),
            scroll: 0,
            view_height: 0,
            clock: MonotonicClock::new(),
            reveal_watcher: RevealWatcher::new(config.reveal_options()),
            metric_watcher: RevealWatcher::new(config.metric_options()),
            revealed_at: HashMap::new(),
            counters: HashMap::new(),
            menu_open: false,
            menu_cursor: 0,
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.clock.now();

        let chunks = Layout::vertical([
            Constraint::Length(1), // Header bar
            Constraint::Fill(1),   // Page content
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());
        let content = chunks[1];

        self.ensure_layout(content.width);
        self.view_height = content.height;
        self.scroll = self.scroll.clamp(0, self.max_scroll());
        self.advance(now, content.height);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, content, now);
        self.render_footer(frame, chunks[2]);

        if self.menu_open {
            let entries: Vec<String> = self
                .page
                .sections
                .iter()
                .map(|section| {
                    section
                        .heading
                        .clone()
                        .unwrap_or_else(|| self.page.title.clone())
                })
                .collect();
            view::render_menu(frame, content, &entries, self.menu_cursor, self.theme.color());
        }
    }

    /// Recompute the layout when the terminal width changes and point
    /// the watchers at the new panel extents.
    fn ensure_layout(&mut self, width: u16) {
        if self.layout.width == width {
            return;
        }
        self.layout = layout::compute(&self.page, width);
        self.register_watchers();
    }

    /// Register every panel with the watchers (new ids) and refresh the
    /// extents of panels still awaiting their reveal.
    fn register_watchers(&mut self) {
        for slot in &self.layout.slots {
            let section = &self.page.sections[slot.section];
            let delay_ms = section.reveal_delay_ms(slot.panel);
            let delay = (delay_ms > 0).then(|| Duration::from_millis(delay_ms));

            self.reveal_watcher.watch(slot.id, slot.span, delay);
            self.reveal_watcher.relocate(slot.id, slot.span);

            if section.kind == SectionKind::Metrics {
                self.metric_watcher.watch(slot.id, slot.span, None);
                self.metric_watcher.relocate(slot.id, slot.span);
            }
        }
    }

    /// Feed both watchers one intersection batch and drain due reveals.
    fn advance(&mut self, now: Duration, height: u16) {
        let signal = ScrollViewport {
            top: self.scroll,
            height,
        };
        self.reveal_watcher.check(&signal, now);
        self.metric_watcher.check(&signal, now);

        for id in self.reveal_watcher.take_revealed(now) {
            self.revealed_at.entry(id).or_insert(now);
        }
        for id in self.metric_watcher.take_revealed(now) {
            self.start_counter(id, now);
        }
    }

    /// Begin the counter tween for a metric panel.
    ///
    /// Unknown ids and non-numeric source text are silent no-ops; the
    /// panel then shows its source text unanimated.
    fn start_counter(&mut self, id: ElementId, now: Duration) {
        self.revealed_at.entry(id).or_insert(now);
        let Some(slot) = self.layout.slot(id) else {
            return;
        };
        let panel = &self.page.sections[slot.section].panels[slot.panel];
        let Some(metric) = panel.value.as_deref().and_then(MetricValue::parse) else {
            return;
        };
        let duration = self.config.counter_duration();
        self.counters
            .entry(id)
            .or_insert_with(|| CounterTween::new(metric, duration, now));
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = format!(" {}", self.page.title);
        let year = format!("© {} ", Local::now().year());
        let pad = usize::from(area.width).saturating_sub(title.chars().count() + year.chars().count());
        let line = Line::from(vec![
            Span::styled(title, Style::new().fg(self.theme.color()).bold()),
            Span::raw(" ".repeat(pad)),
            Span::raw(year).dark_gray(),
        ]);
        frame.render_widget(line, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let accent = self.theme.color();
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "j/k".bold().fg(accent),
            " scroll  ".dark_gray(),
            "m".bold().fg(accent),
            " sections  ".dark_gray(),
            "t".bold().fg(accent),
            " theme  ".dark_gray(),
            "r".bold().fg(accent),
            " replay".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, area);
    }

    /// Draw the chrome rows and every visible panel.
    fn render_content(&mut self, frame: &mut Frame, content: Rect, now: Duration) {
        let accent = self.theme.color();
        let default_style = self.config.reveal_style();
        let reveal_duration = Duration::from_millis(self.speed.reveal_duration_ms());
        let scroll = self.scroll;

        let App {
            page,
            layout,
            revealed_at,
            counters,
            rotator,
            ..
        } = self;

        for chrome in &layout.chrome {
            let rel = chrome.row - scroll;
            if rel < 0 || rel >= i32::from(content.height) {
                continue;
            }
            let rect = Rect::new(content.x, content.y + rel as u16, content.width, 1);
            let line = match &chrome.kind {
                ChromeKind::Title => view::title_line(&page.title, accent),
                ChromeKind::Tagline => {
                    view::tagline_line(&page.tagline_lead, rotator.current(now), accent)
                }
                ChromeKind::Heading(si) => {
                    view::heading_line(page.sections[*si].heading.as_deref().unwrap_or(""), 1.0)
                }
            };
            frame.render_widget(line.centered(), rect);
        }

        for slot in &layout.slots {
            let Some(&revealed) = revealed_at.get(&slot.id) else {
                continue;
            };
            let progress = if reveal_duration.is_zero() {
                1.0
            } else {
                (now.saturating_sub(revealed).as_secs_f32() / reveal_duration.as_secs_f32())
                    .min(1.0)
            };
            let progress = Easing::EaseOutCubic.apply(progress);

            let rel = slot.span.top - scroll;
            let height = i32::from(slot.span.height);
            if rel >= i32::from(content.height) || rel + height <= 0 {
                continue;
            }
            let skip = (-rel).max(0) as u16;
            let y = content.y + rel.max(0) as u16;
            let available = content.y + content.height - y;
            let visible = (slot.span.height - skip).min(available);
            if visible == 0 {
                continue;
            }
            let base = Rect::new(content.x + slot.x, y, slot.width.min(content.width), visible);

            let section = &page.sections[slot.section];
            let panel = &section.panels[slot.panel];
            let style = section.reveal_style(default_style);
            let rect = view::entry_transform(style, progress, base).intersection(content);

            let lines = match section.kind {
                SectionKind::Hero => view::hero_lines(&panel.body, progress),
                SectionKind::Cards => {
                    view::card_lines(&panel.title, &panel.body, accent, progress)
                }
                SectionKind::List => {
                    vec![view::list_line(&panel.title, &panel.body, accent, progress)]
                }
                SectionKind::Tags => vec![view::tag_line(&panel.title, accent, progress)],
                SectionKind::Metrics => {
                    let raw = panel.value.as_deref().unwrap_or("");
                    let text = match counters.get_mut(&slot.id) {
                        Some(tween) => tween.frame(now),
                        None => raw.to_string(),
                    };
                    view::metric_lines(&text, &panel.title, accent, progress)
                }
            };
            let centered = matches!(section.kind, SectionKind::Hero | SectionKind::Metrics);
            view::render_lines(frame, lines, rect, skip, centered);
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a tick timeout so animations keep advancing.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.tick())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.menu_open {
            self.on_menu_key(key);
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.scroll_by(1),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.scroll_by(-1),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => {
                self.scroll_by(i32::from(self.view_height));
            }
            (_, KeyCode::PageUp) => self.scroll_by(-i32::from(self.view_height)),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.scroll = 0,
            (_, KeyCode::End | KeyCode::Char('G')) => self.scroll = self.max_scroll(),
            (_, KeyCode::Char('t')) => self.theme = self.theme.next(),
            (_, KeyCode::Char('m')) => self.menu_open = true,
            (_, KeyCode::Char('r')) => self.replay(),
            _ => {}
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.menu_open = false,
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.page.sections.len().saturating_sub(1);
                self.menu_cursor = (self.menu_cursor + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                self.jump_to_section(self.menu_cursor);
                self.menu_open = false;
            }
            _ => {}
        }
    }

    /// Jump the scroll straight to a section's first row.
    fn jump_to_section(&mut self, index: usize) {
        if let Some(&top) = self.layout.section_tops.get(index) {
            self.scroll = (top - 1).clamp(0, self.max_scroll());
        }
    }

    /// Replay the reveal animations with fresh watchers over the same
    /// page, the way re-initialized observers replay on the original.
    fn replay(&mut self) {
        self.reveal_watcher = RevealWatcher::new(self.config.reveal_options());
        self.metric_watcher = RevealWatcher::new(self.config.metric_options());
        self.revealed_at.clear();
        self.counters.clear();
        self.register_watchers();
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll = (self.scroll + delta).clamp(0, self.max_scroll());
    }

    fn max_scroll(&self) -> i32 {
        (self.layout.total_height - i32::from(self.view_height)).max(0)
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
