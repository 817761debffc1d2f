//! Interactive form: input line, buffer/group selectors and the record
//! table, all on one thread. The blink loop is cooperative: the event
//! poll timeout is the time left until the next highlighter tick.

use crate::config::Config;
use crate::core::length::format_length;
use crate::core::{FormSession, SubmitOutcome};
use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic, ExportOutcome};
use crate::models::BufferType;
use crate::ui::messages::Level;
use crate::ui::view;
use crate::utils::path::default_export_path;
use chrono::{Local, Utc};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Poll timeout while nothing blinks.
const IDLE_POLL: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    ConfirmDelete(i64),
    /// Save prompt; Esc means "cancelled".
    ExportPath { format: ExportFormat, path: String },
    ConfirmOverwrite { format: ExportFormat, path: PathBuf },
}

pub struct FormApp<S: RecordStore> {
    pub session: FormSession<S>,
    pub selected: Option<usize>,
    pub mode: Mode,
    pub status: Option<(Level, String)>,
    pub next_tick: Option<Instant>,
    export_dir: PathBuf,
    pub quit: bool,
}

impl<S: RecordStore> FormApp<S> {
    pub fn new(session: FormSession<S>, export_dir: PathBuf) -> Self {
        Self {
            session,
            selected: None,
            mode: Mode::Normal,
            status: None,
            next_tick: None,
            export_dir,
            quit: false,
        }
    }

    fn set_status(&mut self, level: Level, msg: impl Into<String>) {
        self.status = Some((level, msg.into()));
    }

    fn selected_id(&self) -> Option<i64> {
        self.selected
            .and_then(|i| self.session.visible().get(i))
            .map(|r| r.id)
    }

    /// Keep the selection inside the visible rows.
    fn clamp_selection(&mut self) {
        let len = self.session.visible().len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            other => other,
        };
    }

    /// Run a session operation and surface its error on the status line.
    fn report<T>(&mut self, res: AppResult<T>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(e) => {
                self.set_status(Level::Error, e.to_string());
                None
            }
        }
    }

    pub fn refresh(&mut self) {
        let res = self.session.refresh(Utc::now());
        self.report(res);
        self.clamp_selection();
    }

    /// Arm the first tick when a refresh woke the highlighter up; the
    /// first blink happens right away.
    pub fn schedule_ticks(&mut self, now: Instant) {
        if self.session.take_tick_request() {
            self.next_tick = Some(now);
        }
    }

    /// Run the highlighter if its tick is due.
    pub fn on_timer(&mut self, now: Instant) {
        if let Some(due) = self.next_tick
            && now >= due
        {
            let tick = self.session.tick(Utc::now());
            let interval = self.session.highlighter().interval();
            self.next_tick = tick.reschedule.then(|| now + interval);
        }
    }

    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_tick
            .map(|t| t.saturating_duration_since(now))
            .unwrap_or(IDLE_POLL)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::ConfirmDelete(id) => self.handle_confirm_delete(id, key),
            Mode::ExportPath { format, path } => self.handle_export_path(format, path, key),
            Mode::ConfirmOverwrite { format, path } => {
                self.mode = Mode::Normal;
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    self.write_export(format, path);
                } else {
                    self.set_status(Level::Info, "Export cancelled.");
                }
            }
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+') => {
                self.session.fields.length.push(c);
            }
            KeyCode::Backspace => {
                self.session.fields.length.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => {
                let next = BufferType::from_label(&self.session.fields.buffer_type)
                    .map(BufferType::next)
                    .unwrap_or_default();
                self.session.fields.buffer_type = next.as_str().to_string();
            }
            KeyCode::Left | KeyCode::Right => {
                let current = self.session.filter();
                let filter = if key.code == KeyCode::Left {
                    current.prev()
                } else {
                    current.next()
                };
                let res = self.session.set_filter(filter, Utc::now());
                self.report(res);
                self.clamp_selection();
            }
            KeyCode::Up => {
                self.selected = match self.selected {
                    Some(i) if i > 0 => Some(i - 1),
                    Some(i) => Some(i),
                    None => self.session.visible().len().checked_sub(1),
                };
            }
            KeyCode::Down => {
                let len = self.session.visible().len();
                self.selected = match self.selected {
                    Some(i) if i + 1 < len => Some(i + 1),
                    Some(i) => Some(i),
                    None if len > 0 => Some(0),
                    None => None,
                };
            }
            KeyCode::Char('e') => match self.selected_id() {
                Some(id) => {
                    let res = self.session.begin_edit(id);
                    if self.report(res).is_some() {
                        self.set_status(Level::Info, format!("Editing record #{id}"));
                    }
                }
                None => self.set_status(Level::Warning, "Select a row to edit."),
            },
            KeyCode::Esc => {
                if self.session.dismiss() {
                    self.set_status(Level::Info, "Edit cancelled.");
                }
                self.selected = None;
            }
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_id() {
                Some(id) => self.mode = Mode::ConfirmDelete(id),
                None => self.set_status(Level::Warning, "Select a row to delete."),
            },
            KeyCode::Char('x') => self.start_export(ExportFormat::Xlsx),
            KeyCode::Char('p') => self.start_export(ExportFormat::Pdf),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn submit(&mut self) {
        let res = self.session.submit(Utc::now());
        match self.report(res) {
            Some(SubmitOutcome::Created(id)) => {
                self.set_status(Level::Success, format!("Record #{id} added."));
            }
            Some(SubmitOutcome::Updated(id)) => {
                self.set_status(Level::Success, format!("Record #{id} updated."));
            }
            None => {}
        }
        self.clamp_selection();
    }

    fn handle_confirm_delete(&mut self, id: i64, key: KeyEvent) {
        self.mode = Mode::Normal;
        if !matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.set_status(Level::Info, "Delete cancelled.");
            return;
        }

        let res = self.session.delete(id, Utc::now());
        if self.report(res).is_some() {
            self.set_status(Level::Success, format!("Record #{id} deleted."));
        } else {
            self.refresh();
        }
        self.clamp_selection();
    }

    fn start_export(&mut self, format: ExportFormat) {
        match ExportLogic::snapshot(self.session.store()) {
            Ok(rows) if rows.is_empty() => {
                self.set_status(Level::Warning, "Nothing to export.");
            }
            Ok(_) => {
                let path = default_export_path(&self.export_dir, format.extension(), Local::now());
                self.mode = Mode::ExportPath {
                    format,
                    path: path.to_string_lossy().to_string(),
                };
            }
            Err(e) => self.set_status(Level::Error, e.to_string()),
        }
    }

    fn handle_export_path(&mut self, format: ExportFormat, mut path: String, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.set_status(Level::Info, "Export cancelled.");
            }
            KeyCode::Enter => {
                let p = PathBuf::from(path.trim());
                if p.as_os_str().is_empty() {
                    self.mode = Mode::Normal;
                    self.set_status(Level::Info, "Export cancelled.");
                } else if p.exists() {
                    self.mode = Mode::ConfirmOverwrite { format, path: p };
                } else {
                    self.mode = Mode::Normal;
                    self.write_export(format, p);
                }
            }
            KeyCode::Backspace => {
                path.pop();
                self.mode = Mode::ExportPath { format, path };
            }
            KeyCode::Char(c) => {
                path.push(c);
                self.mode = Mode::ExportPath { format, path };
            }
            _ => {}
        }
    }

    fn write_export(&mut self, format: ExportFormat, path: PathBuf) {
        let res = ExportLogic::snapshot(self.session.store())
            .and_then(|rows| ExportLogic::write(format, &rows, &path));
        match res {
            Ok(ExportOutcome::Written { path, rows }) => self.set_status(
                Level::Success,
                format!("{} created ({rows} records): {}", format.label(), path.display()),
            ),
            Ok(ExportOutcome::NothingToExport) => self.set_status(Level::Warning, "Nothing to export."),
            Err(e) => self.set_status(
                Level::Error,
                format!("{} export failed: {e}", format.label()),
            ),
        }
    }

    /// Length of the selected record, for the delete prompt.
    pub fn describe(&self, id: i64) -> String {
        self.session
            .visible()
            .iter()
            .find(|r| r.id == id)
            .map(|r| format!("#{} ({} m, {})", r.id, format_length(r.length), r.buffer_type))
            .unwrap_or_else(|| format!("#{id}"))
    }
}

/// Set up the terminal, run the form until the operator quits, restore.
pub fn run<S: RecordStore>(session: FormSession<S>, cfg: &Config) -> AppResult<()> {
    let mut app = FormApp::new(session, cfg.export_dir());
    app.refresh();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<S: RecordStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut FormApp<S>,
) -> AppResult<()> {
    loop {
        app.schedule_ticks(Instant::now());
        terminal.draw(|f| view::draw(f, app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        app.on_timer(Instant::now());

        if app.quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditState;
    use crate::db::SqliteStore;
    use std::env;

    fn app() -> FormApp<SqliteStore> {
        let store = SqliteStore::in_memory().unwrap();
        let session = FormSession::new(store, BufferType::Sabit, Duration::from_millis(700));
        let mut app = FormApp::new(session, env::temp_dir());
        app.refresh();
        app
    }

    fn press(app: &mut FormApp<SqliteStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut FormApp<SqliteStore>, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_enter_adds_a_record() {
        let mut app = app();
        type_str(&mut app, "7,25");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let rows = app.session.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].length, 7.25);
        assert_eq!(rows[0].buffer_type, "Hareketli");
        assert!(matches!(app.status, Some((Level::Success, _))));
    }

    #[test]
    fn bad_input_is_reported_and_kept() {
        let mut app = app();
        type_str(&mut app, "1.2.3");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.status, Some((Level::Error, _))));
        assert_eq!(app.session.fields.length, "1.2.3");
        assert!(app.session.visible().is_empty());
    }

    #[test]
    fn edit_escape_and_delete_flow() {
        let mut app = app();
        type_str(&mut app, "6");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        let id = app.session.visible()[0].id;
        assert_eq!(app.session.edit_state(), EditState::Editing(id));
        assert_eq!(app.session.fields.length, "6.00");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.edit_state(), EditState::Idle);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::ConfirmDelete(id));
        press(&mut app, KeyCode::Char('y'));

        assert_eq!(app.session.edit_state(), EditState::Idle);
        assert!(app.session.visible().is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut app = app();
        type_str(&mut app, "6");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.visible().len(), 1);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn export_on_empty_store_never_prompts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Normal);
        assert!(matches!(&app.status, Some((Level::Warning, m)) if m.contains("Nothing to export")));
    }

    #[test]
    fn export_prompt_can_be_cancelled_or_accepted() {
        let mut app = app();
        type_str(&mut app, "8");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('p'));
        assert!(matches!(app.mode, Mode::ExportPath { format: ExportFormat::Pdf, .. }));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Normal);

        let target = env::temp_dir().join("kesimlog_form_export.pdf");
        std::fs::remove_file(&target).ok();
        app.mode = Mode::ExportPath {
            format: ExportFormat::Pdf,
            path: target.to_string_lossy().to_string(),
        };
        press(&mut app, KeyCode::Enter);
        assert!(target.exists());
        assert!(matches!(app.status, Some((Level::Success, _))));
    }

    #[test]
    fn group_selector_filters_rows() {
        let mut app = app();
        for v in ["4", "5.5"] {
            type_str(&mut app, v);
            press(&mut app, KeyCode::Enter);
        }
        // All -> 5
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.visible().len(), 1);
        assert_eq!(app.session.visible()[0].length, 5.5);
        // 5 -> All -> Other
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.visible().len(), 1);
        assert_eq!(app.session.visible()[0].length, 4.0);
    }

    #[test]
    fn new_record_starts_the_blink_timer() {
        let mut app = app();
        let t = Instant::now();
        app.schedule_ticks(t);
        assert_eq!(app.next_tick, None);

        type_str(&mut app, "6");
        press(&mut app, KeyCode::Enter);
        app.schedule_ticks(t);
        assert_eq!(app.next_tick, Some(t));

        app.on_timer(t);
        assert_eq!(app.next_tick, Some(t + Duration::from_millis(700)));
        assert!(app.poll_timeout(t) <= Duration::from_millis(700));
    }
}
