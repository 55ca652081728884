use anyhow::Result;
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};
use std::time::Duration;

use miqat::config::{AppConfig, ScheduleSource};
use miqat::prayer_times::{
    Alert, Clock, DaySchedule, NextPrayer, PrayerSlot, alerts_between, resolve_next, today_board,
};
use miqat::profile::{ProfileSettings, ProfileStore};
use miqat::utils::hijri_label;
use miqat::{BaseSchedule, PrayerKey, UserProfile};

use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{alert, header, next_prayer, prayers, schedule, statusbar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Today,
    Week,
    Month,
}

impl View {
    fn cycled(self) -> Self {
        match self {
            View::Today => View::Week,
            View::Week => View::Month,
            View::Month => View::Today,
        }
    }
}

pub struct App<S: ProfileStore> {
    pub view: View,
    pub config: AppConfig,
    pub base: BaseSchedule,
    pub profile: UserProfile,
    pub focus_idx: usize,
    pub month_scroll: u16,
    pub should_quit: bool,
    pub status_msg: Option<String>,
    pub alert: Option<Alert>,

    // Derived on every tick from the resolver
    pub now: NaiveDateTime,
    pub hijri_str: String,
    pub next: NextPrayer,
    pub board: Vec<PrayerSlot>,

    // Rebuilt when the date or the profile changes
    pub week: Vec<DaySchedule>,
    pub month: Vec<DaySchedule>,

    settings: ProfileSettings<S>,
    clock: Box<dyn Clock>,
}

impl<S: ProfileStore> App<S> {
    pub fn new(
        config: AppConfig,
        base: BaseSchedule,
        profile: UserProfile,
        settings: ProfileSettings<S>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let now = clock.now();
        let next = resolve_next(&base, &profile.prayer_offsets, now);
        let board = today_board(&base, &profile.prayer_offsets, now);
        let hijri_str =
            hijri_label(now.date(), config.display.hijri_offset, profile.language).unwrap_or_default();

        let mut app = App {
            view: View::Today,
            config,
            base,
            profile,
            focus_idx: 0,
            month_scroll: 0,
            should_quit: false,
            status_msg: None,
            alert: None,
            now,
            hijri_str,
            next,
            board,
            week: Vec::new(),
            month: Vec::new(),
            settings,
            clock,
        };
        app.rebuild_tables();
        app
    }

    fn rebuild_tables(&mut self) {
        let today = self.now.date();
        let offsets = &self.profile.prayer_offsets;
        self.week = self.config.schedule_days(offsets, today, self.config.display.week_days);
        self.month = self.config.schedule_days(offsets, today, self.config.display.month_days);
    }

    /// Re-derive everything shown from the current instant and profile.
    fn refresh(&mut self) {
        let offsets = &self.profile.prayer_offsets;
        self.next = resolve_next(&self.base, offsets, self.now);
        self.board = today_board(&self.base, offsets, self.now);
        self.hijri_str = hijri_label(
            self.now.date(),
            self.config.display.hijri_offset,
            self.profile.language,
        )
        .unwrap_or_default();
    }

    pub fn tick(&mut self) {
        let previous = self.now;
        self.now = self.clock.now();

        if self.now.date() != previous.date() {
            if self.config.schedule.source == ScheduleSource::Calculated {
                self.base = self.config.base_schedule(self.now.date());
            }
            self.rebuild_tables();
        }

        let fired = alerts_between(
            &self.base,
            &self.profile.prayer_offsets,
            &self.profile.prayer_configs,
            previous,
            self.now,
        );
        if let Some(latest) = fired.into_iter().last() {
            log::info!("{:?} alert for {}", latest.kind, latest.key.as_str());
            self.alert = Some(latest);
        }

        self.refresh();
    }

    fn focused_key(&self) -> PrayerKey {
        PrayerKey::ALL[self.focus_idx.min(PrayerKey::ALL.len() - 1)]
    }

    fn update_profile(&mut self, result: miqat::Result<UserProfile>) {
        match result {
            Ok(profile) => {
                self.profile = profile;
                self.status_msg = None;
                self.rebuild_tables();
            }
            Err(e) => {
                log::warn!("saving profile failed: {e}");
                self.status_msg = Some(format!("✗ {e}"));
            }
        }
        self.refresh();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.alert.take().is_some() {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => {
                self.view = self.view.cycled();
                self.month_scroll = 0;
            }
            KeyCode::Char('t') => {
                let result = self
                    .settings
                    .set_use_12_hour(&self.profile, !self.profile.use_12_hour_format);
                self.update_profile(result);
            }
            KeyCode::Char('l') => {
                let result = self
                    .settings
                    .set_language(&self.profile, self.profile.language.toggled());
                self.update_profile(result);
            }
            _ => match self.view {
                View::Today => self.handle_today_key(key.code),
                View::Month => self.handle_month_key(key.code),
                View::Week => {}
            },
        }
    }

    fn handle_today_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.focus_idx = self.focus_idx.saturating_sub(1),
            KeyCode::Down => {
                if self.focus_idx + 1 < PrayerKey::ALL.len() {
                    self.focus_idx += 1;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let result = self.settings.adjust_offset(&self.profile, self.focused_key(), 1);
                self.update_profile(result);
            }
            KeyCode::Char('-') => {
                let result = self.settings.adjust_offset(&self.profile, self.focused_key(), -1);
                self.update_profile(result);
            }
            KeyCode::Char('0') => {
                let result = self.settings.set_offset(&self.profile, self.focused_key(), 0);
                self.update_profile(result);
            }
            _ => {}
        }
    }

    fn handle_month_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.month_scroll = self.month_scroll.saturating_sub(1),
            KeyCode::Down => {
                let max = u16::try_from(self.config.display.month_days).unwrap_or(u16::MAX);
                if self.month_scroll < max {
                    self.month_scroll += 1;
                }
            }
            KeyCode::PageUp => self.month_scroll = self.month_scroll.saturating_sub(10),
            KeyCode::PageDown => self.month_scroll = self.month_scroll.saturating_add(10),
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], self.now, &self.hijri_str, &self.profile);
        statusbar::render(frame, outer_chunks[2], &self.view, self.status_msg.as_deref());

        let body = outer_chunks[1];
        let today = self.now.date();
        match self.view {
            View::Today => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .split(body);
                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(8), Constraint::Min(0)])
                    .split(columns[1]);

                prayers::render(frame, columns[0], &self.board, &self.profile, self.focus_idx);
                next_prayer::render(frame, right[0], &self.next, &self.profile);
            }
            View::Week => {
                schedule::render(frame, body, "This Week", &self.week, today, &self.profile, 0);
            }
            View::Month => {
                let title = format!("Next {} Days", self.config.display.month_days);
                schedule::render(frame, body, &title, &self.month, today, &self.profile, self.month_scroll);
            }
        }

        if let Some(alert) = &self.alert {
            alert::render(frame, alert, &self.profile);
        }
    }
}

/// Run the TUI event loop.
pub fn run<S: ProfileStore>(
    config: AppConfig,
    base: BaseSchedule,
    profile: UserProfile,
    settings: ProfileSettings<S>,
    clock: Box<dyn Clock>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.display.tick_rate_ms.max(100));
    let mut app = App::new(config, base, profile, settings, clock);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(tick_rate);

    let outcome: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome
}
