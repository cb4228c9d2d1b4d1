// src/tui/app.rs - TUI application state, event loop, and rendering.
//
// Page fetches run on tokio tasks and report back through an inbox channel
// that the loop drains before every frame. Results are applied in arrival
// order; nothing is cancelled.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{ListState, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::types::SessionPage;
use crate::core::ViewerState;
use crate::infra::config::Config;
use crate::infra::errors::ChatdeckError;
use crate::source::SessionSource;

use super::theme::Theme;
use super::widgets::{self, conversation::ConversationView};

/// Below this width only one pane is shown at a time.
const NARROW_WIDTH: u16 = 80;

/// Lines moved per PageUp/PageDown in the conversation pane.
const PAGE_SCROLL: u16 = 10;

/// A finished page fetch, delivered through the inbox.
#[derive(Debug)]
pub struct PageLoaded {
    pub page: u32,
    pub result: Result<SessionPage, ChatdeckError>,
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    pub state: ViewerState,
    source: Arc<dyn SessionSource>,
    inbox_tx: mpsc::UnboundedSender<PageLoaded>,
    inbox_rx: mpsc::UnboundedReceiver<PageLoaded>,

    list_state: ListState,
    /// Session rows that fit in the list viewport, from the last frame.
    list_rows: usize,
    /// Whether the last frame drew the session list.
    list_drawn: bool,
    conversation_scroll: u16,
    narrow: bool,
    frame_count: usize,
}

impl App {
    pub fn new(config: &Config, source: Arc<dyn SessionSource>) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            state: ViewerState::new(config.ui.notification_duration()),
            source,
            inbox_tx,
            inbox_rx,
            list_state: ListState::default(),
            list_rows: 0,
            list_drawn: false,
            conversation_scroll: 0,
            narrow: false,
            frame_count: 0,
        }
    }

    /// Kick off the first page load.
    pub fn start(&mut self) {
        if let Some(page) = self.state.start() {
            self.spawn_load(page);
        }
    }

    fn spawn_load(&self, page: u32) {
        let source = Arc::clone(&self.source);
        let tx = self.inbox_tx.clone();
        tracing::debug!(page, source = source.id(), "spawning page load");
        tokio::spawn(async move {
            let result = source.fetch_page(page).await;
            // The receiver only goes away when the UI has exited.
            let _ = tx.send(PageLoaded { page, result });
        });
    }

    /// Apply every finished fetch. Returns how many were applied.
    pub fn drain_inbox(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(loaded) = self.inbox_rx.try_recv() {
            tracing::debug!(page = loaded.page, ok = loaded.result.is_ok(), "page load settled");
            self.state.apply_load(loaded.result);
            applied += 1;
        }
        applied
    }

    /// Feed the list viewport into the continuation trigger. Skipped while
    /// the list is hidden behind the conversation pane.
    fn check_end_of_list(&mut self) {
        if !self.list_drawn {
            return;
        }
        let visible = widgets::sessions::last_row_visible(
            self.list_state.offset(),
            self.list_rows,
            self.state.sessions().len(),
        );
        if let Some(page) = self.state.on_last_row_visible(visible) {
            self.spawn_load(page);
        }
    }

    fn conversation_focused(&self) -> bool {
        self.narrow && self.state.viewer.active_session_id().is_some()
    }

    /// Handle one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                if self.state.viewer.active_session_id().is_none() {
                    return true;
                }
                self.state.back();
            }
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => self.state.back(),

            KeyCode::Down | KeyCode::Char('j') => {
                if self.conversation_focused() {
                    self.conversation_scroll = self.conversation_scroll.saturating_add(1);
                } else {
                    self.state.move_highlight(1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.conversation_focused() {
                    self.conversation_scroll = self.conversation_scroll.saturating_sub(1);
                } else {
                    self.state.move_highlight(-1);
                }
            }
            KeyCode::PageDown => {
                self.conversation_scroll = self.conversation_scroll.saturating_add(PAGE_SCROLL);
            }
            KeyCode::PageUp => {
                self.conversation_scroll = self.conversation_scroll.saturating_sub(PAGE_SCROLL);
            }

            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                self.state.open_highlighted();
            }

            KeyCode::Char('m') => {
                if let Some(page) = self.state.request_more() {
                    self.spawn_load(page);
                }
            }
            KeyCode::Char('x') => self.state.dismiss_banner(),
            _ => {}
        }
        false
    }

    /// Draw one frame and run the post-render visibility check.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        terminal.draw(|f| render(f, self))?;
        self.frame_count = self.frame_count.wrapping_add(1);
        self.check_end_of_list();
        Ok(())
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the viewer. Blocks until the user quits (q / Esc / Ctrl-C).
pub fn run_viewer(config: &Config, source: Arc<dyn SessionSource>) -> anyhow::Result<()> {
    let mut app = App::new(config, source);
    app.start();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    let tick = config.ui.tick();

    loop {
        app.drain_inbox();
        app.state.tick(Instant::now());
        app.draw(terminal)?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    app.narrow = size.width < NARROW_WIDTH;
    app.list_drawn = false;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Panes
            Constraint::Length(1), // Footer / key hints
        ])
        .split(size);

    let now = Utc::now();
    let has_active = app.state.viewer.active_session_id().is_some();

    if app.narrow {
        if has_active {
            render_conversation(f, chunks[0], app);
        } else {
            render_sessions(f, chunks[0], app, now, true);
        }
    } else {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Min(20)])
            .split(chunks[0]);
        render_sessions(f, panes[0], app, now, !has_active);
        render_conversation(f, panes[1], app);
    }

    render_footer(f, chunks[1], app);

    if let Some(banner) = app.state.notifier.visible() {
        widgets::banner::render(f, size, banner);
    }
}

fn render_sessions(
    f: &mut Frame,
    area: Rect,
    app: &mut App,
    now: chrono::DateTime<Utc>,
    focused: bool,
) {
    app.list_drawn = true;
    app.list_rows = widgets::sessions::render(
        f,
        area,
        &app.state,
        &mut app.list_state,
        now,
        focused,
        app.frame_count,
    );
}

fn render_conversation(f: &mut Frame, area: Rect, app: &mut App) {
    let scroll_to_end = app.state.viewer.take_scroll_to_end();
    let view = ConversationView {
        session: app.state.active_session(),
        messages: app.state.viewer.messages(),
        focused: app.state.viewer.active_session_id().is_some(),
        narrow: app.narrow,
    };
    widgets::conversation::render(f, area, &view, &mut app.conversation_scroll, scroll_to_end);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" q", Theme::key_hint()),
        Span::styled(" quit  ", Theme::key_desc()),
        Span::styled("j/k/\u{2191}\u{2193}", Theme::key_hint()),
        Span::styled(" move  ", Theme::key_desc()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" open  ", Theme::key_desc()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" back  ", Theme::key_desc()),
        Span::styled("PgUp/PgDn", Theme::key_hint()),
        Span::styled(" scroll  ", Theme::key_desc()),
    ];
    if app.state.loader.has_more() {
        spans.push(Span::styled("m", Theme::key_hint()));
        spans.push(Span::styled(" load more  ", Theme::key_desc()));
    }
    if app.state.notifier.visible().is_some() {
        spans.push(Span::styled("x", Theme::key_hint()));
        spans.push(Span::styled(" dismiss", Theme::key_desc()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Message, Sender, Session};
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;

    struct StaticSource;

    #[async_trait]
    impl SessionSource for StaticSource {
        fn id(&self) -> &str {
            "static"
        }

        fn per_page(&self) -> u32 {
            20
        }

        async fn fetch_page(&self, _page: u32) -> Result<SessionPage, ChatdeckError> {
            Ok(SessionPage::default())
        }
    }

    fn app() -> App {
        App::new(&Config::default(), Arc::new(StaticSource))
    }

    fn page(names: &[&str], total: u32) -> SessionPage {
        SessionPage {
            chat_sessions: names
                .iter()
                .enumerate()
                .map(|(i, name)| Session {
                    id: i as i64 + 1,
                    name: name.to_string(),
                    messages: vec![Message {
                        id: 1,
                        content: format!("hello {name}"),
                        action: Sender::User,
                        timestamp: "2024-01-01T10:00:00Z".into(),
                    }],
                    message_count: 1,
                    role: None,
                })
                .collect(),
            total_pages: Some(total),
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_renders_session_list_and_conversation() {
        let mut app = app();
        app.state.start();
        app.state.apply_load(Ok(page(&["Alice", "Bob"], 1)));
        app.handle_key(key(KeyCode::Enter));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        app.draw(&mut terminal).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Alice"));
        assert!(text.contains("Bob"));
        assert!(text.contains("hello Alice"));
    }

    #[tokio::test]
    async fn test_narrow_layout_shows_one_pane() {
        let mut app = app();
        app.state.start();
        app.state.apply_load(Ok(page(&["Alice", "Bob"], 1)));

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(!buffer_text(&terminal).contains("Select a session"));

        app.handle_key(key(KeyCode::Enter));
        app.draw(&mut terminal).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("hello Alice"));
        assert!(!text.contains("Bob"));

        app.handle_key(key(KeyCode::Esc));
        app.draw(&mut terminal).unwrap();
        assert!(buffer_text(&terminal).contains("Bob"));
    }

    #[tokio::test]
    async fn test_short_list_triggers_next_page_after_draw() {
        let mut app = app();
        app.state.start();
        app.state.apply_load(Ok(page(&["Alice"], 2)));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        app.draw(&mut terminal).unwrap();
        // The whole list fits, so the next page was requested.
        assert!(app.state.loader.is_loading());
    }

    #[tokio::test]
    async fn test_hidden_list_does_not_page() {
        let mut app = app();
        app.state.start();
        app.state.apply_load(Ok(page(&["Alice"], 2)));
        app.handle_key(key(KeyCode::Enter));

        // Narrow layout with a session open: only the conversation is drawn.
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(!app.state.loader.is_loading());

        app.handle_key(key(KeyCode::Esc));
        app.draw(&mut terminal).unwrap();
        assert!(app.state.loader.is_loading());
    }

    #[tokio::test]
    async fn test_banner_is_drawn_and_dismissed() {
        let mut app = app();
        app.state.start();
        app.state.apply_load(Err(ChatdeckError::Status { status: 500 }));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(buffer_text(&terminal).contains("Unable to fetch sessions"));

        app.handle_key(key(KeyCode::Char('x')));
        app.draw(&mut terminal).unwrap();
        assert!(!buffer_text(&terminal).contains("Unable to fetch sessions"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.handle_key(key(KeyCode::Esc)));
    }
}
