use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod view_model;
mod views;
mod workspace;

use actions::{Action, GlobalAction, PanelAction, WorkspaceAction};
use domain_event_config::DisplayConfig;
use middleware::{
    domain_events::DomainEventMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
};
use state::AppState;
use store::Store;
use workspace::Workspace;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting domain-event-console (logging to {:?})", log_file);

    let config = DisplayConfig::load();
    let workspace = Workspace::new();

    let mut store = Store::new(AppState {
        documents: workspace.names(),
        ..AppState::default()
    });

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(DomainEventMiddleware::new(config, workspace)));

    store.dispatch(Action::Workspace(WorkspaceAction::Activate(Some(0))));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if store.state().running {
        // Loop ended on an error; still dispose the plugin and save config
        store.dispatch(Action::Global(GlobalAction::Quit));
    }

    if let Err(err) = &result {
        log::error!("Console failed: {:#}", err);
    }

    log::info!("Exiting domain-event-console");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> Result<()> {
    loop {
        // Keep scroll bounds in sync with the terminal size
        let height = views::panel_height(terminal.get_frame().area());
        if height != store.state().panel.visible_height {
            store.dispatch(Action::Panel(PanelAction::SetVisibleHeight(height)));
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
