// Main TUI application
use crate::error::{PrefsError, Result};
use crate::store::{ProfileBackend, Store};
use crate::ui::connect::map_state_to_props;
use crate::ui::prefs::{AwsPrefs, KeyOutcome};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

const HELP_TEXT: &str =
    "q:quit | ↑↓/jk:select | a:add | d:delete | s:save | Enter/Tab:edit | Ctrl+S:save | Esc:back";

pub struct App<B: ProfileBackend> {
    /// Whether the app should quit
    should_quit: bool,
    store: Store<B>,
    prefs: AwsPrefs,
    /// Message shown in place of the help bar
    status_message: Option<String>,
    /// Last Ctrl+C press time for double-press detection
    last_ctrl_c_time: Option<Instant>,
    tick_rate: Duration,
}

impl<B: ProfileBackend> App<B> {
    pub fn new(store: Store<B>, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            store,
            prefs: AwsPrefs::new(),
            status_message: None,
            last_ctrl_c_time: None,
            tick_rate,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().map_err(PrefsError::Io)?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(PrefsError::Io)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(PrefsError::Io)?;

        self.prefs.mount();
        let result = self.run_event_loop(&mut terminal).await;
        self.prefs.unmount();

        // Restore terminal
        disable_raw_mode().map_err(PrefsError::Io)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(PrefsError::Io)?;
        terminal.show_cursor().map_err(PrefsError::Io)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            let props = map_state_to_props(self.store.state());
            terminal
                .draw(|f| self.ui(f, &props))
                .map_err(PrefsError::Io)?;
            self.prefs.after_render(&mut self.store);

            if self.store.process_events() {
                tracing::debug!("Applied store completions");
            }
            self.prefs.tick(Instant::now());

            if event::poll(self.tick_rate).map_err(PrefsError::Io)? {
                if let Event::Key(key) = event::read().map_err(PrefsError::Io)? {
                    // Only handle key press events, ignore key release
                    if key.kind == KeyEventKind::Press {
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && key.code == KeyCode::Char('c')
                        {
                            self.handle_ctrl_c();
                        } else {
                            self.status_message = None;
                            // Handlers see the state as it is now, not as it was drawn
                            let props = map_state_to_props(self.store.state());
                            let outcome = self.prefs.handle_key(key, &props, &mut self.store)?;
                            if outcome == KeyOutcome::Quit {
                                self.should_quit = true;
                            }
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();

        if let Some(last_press) = self.last_ctrl_c_time {
            if now.duration_since(last_press).as_secs() < 2 {
                tracing::info!("Ctrl+C pressed twice - forcing exit");
                self.should_quit = true;
                return;
            }
        }

        self.last_ctrl_c_time = Some(now);
        self.status_message = Some("Press Ctrl+C again within 2 seconds to force quit".to_string());
    }

    fn ui(&mut self, f: &mut Frame, props: &crate::ui::prefs::PrefsProps) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(1)])
            .split(f.area());

        self.prefs.render(f, chunks[0], props);

        let (text, color) = match &self.status_message {
            Some(msg) => (msg.as_str(), Color::Yellow),
            None => (HELP_TEXT, Color::Gray),
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            chunks[1],
        );
    }
}
