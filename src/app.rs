//! Main application logic and TUI event loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::cli::AppConfig;
use crate::data::{
    default_configs, find_detail, plants_from_snapshot, Plant, PlantStore, SensorClient,
};
use crate::settings::SettingsState;
use crate::ui::{
    detail::DetailView,
    settings::SettingsForm,
    widgets::{LoadingView, PlantList, StatusBar},
    HelpOverlay, Theme,
};

/// Which view is currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Plants,
    Detail(String),
    Settings,
}

/// Application state
pub struct App {
    theme: Theme,

    // Data
    store: PlantStore,
    sensor: SensorClient,
    plants: Vec<Plant>,
    fetched_at: Option<DateTime<Utc>>,

    // Settings edit state
    settings: SettingsState,

    // UI state
    screen: Screen,
    selected_plant: usize,
    loading: bool,
    show_help: bool,

    // Exit flag
    should_quit: bool,

    // Error message to display (non-fatal)
    error_message: Option<String>,
}

impl App {
    /// Create a new App instance. The first fetch happens after the loading
    /// frame is drawn, not here.
    pub fn new(config: AppConfig) -> Result<Self> {
        let sensor = SensorClient::new(config.endpoint.clone())?;
        let store = PlantStore::new(config.store_dir.clone());

        Ok(App {
            theme: Theme::default(),
            store,
            sensor,
            plants: Vec::new(),
            fetched_at: None,
            settings: SettingsState::new(),
            screen: Screen::Plants,
            selected_plant: 0,
            loading: true,
            show_help: false,
            should_quit: false,
            error_message: None,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Set an error message to display (non-fatal)
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Issue the single GET to the moisture endpoint and map the response
    /// onto the listing plants. A failure clears the list and surfaces the
    /// error in the status bar; there is no retry.
    pub fn fetch_readings(&mut self) {
        match self.sensor.fetch_snapshot() {
            Ok(snapshot) => {
                self.plants = plants_from_snapshot(&snapshot);
                self.fetched_at = Some(Utc::now());
                self.error_message = None;
            }
            Err(e) => {
                self.plants.clear();
                self.set_error(format!("{e:#}"));
            }
        }
        self.loading = false;
        if self.selected_plant >= self.plants.len() {
            self.selected_plant = self.plants.len().saturating_sub(1);
        }
    }

    /// Enter the settings view, loading the persisted list. A missing or
    /// empty entry seeds the defaults; a corrupt one surfaces the error and
    /// falls back to the defaults.
    fn open_settings(&mut self) {
        let plants = match self.store.load_plants() {
            Ok(plants) if !plants.is_empty() => plants,
            Ok(_) => default_configs(),
            Err(e) => {
                self.set_error(format!("{e:#}"));
                default_configs()
            }
        };
        self.settings.set_plants(plants);
        self.screen = Screen::Settings;
    }

    /// Handle keyboard input
    fn handle_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if self.show_help {
            if matches!(
                key,
                KeyCode::Esc
                    | KeyCode::Char('q')
                    | KeyCode::Char('h')
                    | KeyCode::Char('?')
                    | KeyCode::F(1)
            ) {
                self.show_help = false;
            }
            return Ok(());
        }

        match self.screen.clone() {
            Screen::Plants => self.handle_plants_input(key),
            Screen::Detail(_) => self.handle_detail_input(key),
            Screen::Settings => self.handle_settings_input(key, modifiers),
        }
    }

    fn handle_plants_input(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Char('r') => self.fetch_readings(),
            KeyCode::Char('e') => self.open_settings(),
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.plants.is_empty() {
                    self.selected_plant = (self.selected_plant + 1) % self.plants.len();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.plants.is_empty() {
                    self.selected_plant = self
                        .selected_plant
                        .checked_sub(1)
                        .unwrap_or(self.plants.len() - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(plant) = self.plants.get(self.selected_plant) {
                    self.screen = Screen::Detail(plant.id.clone());
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_detail_input(&mut self, key: KeyCode) -> Result<()> {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Plants,
            _ => {}
        }
        Ok(())
    }

    fn handle_settings_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        // Ctrl+S saves; plain characters belong to the text fields
        if key == KeyCode::Char('s') && modifiers.contains(KeyModifiers::CONTROL) {
            if let Err(e) = self.settings.save(&self.store) {
                self.set_error(format!("{e:#}"));
            }
            return Ok(());
        }

        match key {
            KeyCode::Esc => self.screen = Screen::Plants,
            KeyCode::F(1) => self.show_help = true,
            KeyCode::Tab => self.settings.next_field(),
            KeyCode::BackTab => self.settings.prev_field(),
            KeyCode::Down => self.settings.select_next(),
            KeyCode::Up => self.settings.select_prev(),
            KeyCode::Left => self.settings.adjust(-1),
            KeyCode::Right => self.settings.adjust(1),
            KeyCode::Backspace => self.settings.backspace(),
            KeyCode::Char(c) => {
                if self.settings.field().is_text() {
                    self.settings.push_char(c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn status_hint(&self) -> &'static str {
        match self.screen {
            Screen::Plants => "[Enter] Details [e] Settings [r] Refresh [h] Help [q] Quit",
            Screen::Detail(_) => "[Esc] Back [h] Help [q] Quit",
            Screen::Settings => "[Ctrl+S] Save All [Tab] Field [Esc] Back",
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        // Main layout: body and status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(2), // Status bar
            ])
            .split(size);

        match &self.screen {
            Screen::Plants => {
                if self.loading {
                    LoadingView::new(&self.theme).render(frame, main_chunks[0]);
                } else {
                    PlantList::new(&self.plants, self.selected_plant, &self.theme)
                        .render(frame, main_chunks[0]);
                }
            }
            Screen::Detail(id) => {
                DetailView::new(find_detail(id), &self.theme).render(frame, main_chunks[0]);
            }
            Screen::Settings => {
                SettingsForm::new(&self.settings, &self.theme).render(frame, main_chunks[0]);
            }
        }

        let message = if self.screen == Screen::Settings {
            self.settings.status()
        } else {
            None
        };
        let status_bar = StatusBar::new(
            self.status_hint(),
            self.fetched_at,
            message,
            self.error_message.as_deref(),
            &self.theme,
        );
        status_bar.render(frame, main_chunks[1]);

        // Render help overlay if active
        if self.show_help {
            let help = HelpOverlay::new(&self.theme);
            help.render(frame, size);
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() {
    // Best effort cleanup - ignore errors since we may be in a panic
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        restore_terminal();
        return Err(e).context("Failed to setup terminal");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to create terminal");
        }
    };

    // Create app - if this fails, restore terminal first
    let mut app = match App::new(config) {
        Ok(a) => a,
        Err(e) => {
            restore_terminal();
            return Err(e).context("Failed to initialize application");
        }
    };

    // Main loop - wrap in a closure to ensure cleanup
    let result = run_main_loop(&mut terminal, &mut app);

    // Always restore terminal, regardless of result
    restore_terminal();
    terminal.show_cursor().ok();

    result
}

/// Main application loop
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render - if this fails, we should exit
        terminal.draw(|f| app.render(f))?;

        // The initial fetch runs after the loading frame is visible, blocking
        // until the endpoint answers or the client times out
        if app.is_loading() {
            app.fetch_readings();
            continue;
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = app.handle_input(key.code, key.modifiers) {
                    // Log error but don't crash
                    app.set_error(format!("Input error: {e}"));
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let config = AppConfig::from_watch_command(
            Some("http://127.0.0.1:1/moisture".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
        );
        App::new(config).unwrap()
    }

    #[test]
    fn test_starts_loading_on_plants_screen() {
        let dir = TempDir::new().unwrap();
        let app = app_in(&dir);
        assert!(app.is_loading());
        assert_eq!(*app.screen(), Screen::Plants);
    }

    #[test]
    fn test_settings_seed_defaults_when_store_empty() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(*app.screen(), Screen::Settings);
        assert_eq!(app.settings.plants().len(), 2);
        assert_eq!(app.settings.plants()[0].name, "Aloe Vera");

        app.handle_input(KeyCode::Esc, KeyModifiers::NONE).unwrap();
        assert_eq!(*app.screen(), Screen::Plants);
    }

    #[test]
    fn test_settings_load_persisted_list() {
        let dir = TempDir::new().unwrap();
        let store = PlantStore::new(dir.path().to_path_buf());
        store
            .save_plants(&[crate::data::PlantConfig::new("9", "Basil", 20, 55)])
            .unwrap();

        let mut app = app_in(&dir);
        app.handle_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.settings.plants().len(), 1);
        assert_eq!(app.settings.plants()[0].name, "Basil");
    }

    #[test]
    fn test_typed_q_edits_name_instead_of_quitting() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.handle_input(KeyCode::Char('e'), KeyModifiers::NONE)
            .unwrap();
        app.handle_input(KeyCode::Char('q'), KeyModifiers::NONE)
            .unwrap();
        assert!(!app.should_quit());
        assert!(app.settings.plants()[0].name.ends_with('q'));
    }

    #[test]
    fn test_quit_from_plants_screen() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.handle_input(KeyCode::Char('q'), KeyModifiers::NONE)
            .unwrap();
        assert!(app.should_quit());
    }
}
