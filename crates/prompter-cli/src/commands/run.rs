use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use prompter_core::{AppConfig, PresentationController, Viewport};
use prompter_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    viewport::TermViewport,
    widgets::{DescriptionWidget, InputBarWidget, StatusBarWidget},
};

pub async fn run(
    config: Arc<AppConfig>,
    script: Option<PathBuf>,
    script_interval_ms: u64,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Prompter"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire up the presenter: events flow controller -> app, geometry flows
    // render pass -> controller
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let viewport = Arc::new(TermViewport::new());
    let controller = Arc::new(PresentationController::new(
        config.presenter.clone(),
        viewport.clone() as Arc<dyn Viewport>,
        event_tx,
    ));

    let mut app = App::new();

    // Replay a script in the background, one line per interval; intervals
    // below the debounce window demonstrate that only the last line wins
    if let Some(path) = script {
        let lines: Vec<String> = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script {}", path.display()))?
            .lines()
            .map(str::to_string)
            .filter(|line| !line.trim().is_empty())
            .collect();
        info!(count = lines.len(), "replaying script");

        let controller = controller.clone();
        let interval = Duration::from_millis(script_interval_ms);
        tokio::spawn(async move {
            for line in lines {
                controller.set_text(&line);
                tokio::time::sleep(interval).await;
            }
        });
    }

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Main loop
    loop {
        // Apply any presenter updates (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            app.apply_event(event);
        }

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Layout: description panel + input bar + status line
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .split(size);

            DescriptionWidget::render(frame, layout[0], &app, &viewport);
            InputBarWidget::render(frame, layout[1], &app);
            StatusBarWidget::render(
                frame,
                layout[2],
                &app,
                controller.phase(),
                controller.generation(),
            );
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => handle_key(&mut app, &controller, key),
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    controller.dispose();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key(app: &mut App, controller: &PresentationController, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            // An empty submission clears the display
            let line = app.take_input();
            app.clear_status();
            controller.set_text(&line);
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.push_input(c),
        _ => {}
    }
}
