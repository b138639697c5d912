pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::app::{AppContext, Result};
use crate::query::{Route, Ticket};
use crate::search::SearchResults;

use self::app::{InputMode, Target, TuiApp, View};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A finished search on its way back to the event loop.
type Response = (Target, Ticket, SearchResults);

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let config = ctx.config.clone();
    let mut tui_app = TuiApp::new(config.search.debounce_window());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<Response>();

    let default_term = ctx.search.default_term().to_string();
    request_home(&mut tui_app, &ctx, &tx, default_term);

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        // Blocks for at most one tick, so responses and debounce deadlines
        // are picked up promptly.
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = config.keybindings.get_action(&key);
                if tui_app.input_mode == InputMode::Normal {
                    handle_action(&mut tui_app, &ctx, &tx, action);
                } else {
                    tui_app.handle_input(key, action, Instant::now());
                }
            }
            AppEvent::Tick => {}
        }

        while let Ok((target, ticket, results)) = rx.try_recv() {
            tui_app.apply_results(target, ticket, results);
        }

        let now = Instant::now();
        if let Some(route) = tui_app.search_bar.poll(now) {
            follow_route(&mut tui_app, &ctx, &tx, route);
        }
        if let Some(route) = tui_app.home_filter.poll(now) {
            let term = match route {
                Route::Home => ctx.search.default_term().to_string(),
                Route::Search { query } => query,
            };
            request_home(&mut tui_app, &ctx, &tx, term);
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<Response>,
    action: Action,
) {
    match action {
        Action::Quit => {
            tui_app.should_quit = true;
        }
        Action::MoveUp => tui_app.move_up(),
        Action::MoveDown => tui_app.move_down(),
        Action::NextPage => tui_app.next_page(),
        Action::PrevPage => tui_app.prev_page(),
        Action::NextView => {
            let view = tui_app.view.next();
            enter_view(tui_app, ctx, view);
        }
        Action::PrevView => {
            let view = tui_app.view.prev();
            enter_view(tui_app, ctx, view);
        }
        Action::OpenArticle => {
            if let Some(article) = tui_app.selected_article().cloned() {
                match ctx.open_article(&article) {
                    Ok(()) => tui_app.set_status(format!("Opened {}", article.url)),
                    Err(e) => {
                        tracing::warn!("Failed to open {}: {}", article.url, e);
                        tui_app.set_status(format!("Failed to open browser: {}", e));
                    }
                }
                tui_app.set_history(ctx.bookmarks.list_all());
            }
        }
        Action::FocusSearch => {
            tui_app.status_message = None;
            tui_app.input_mode = InputMode::SearchBar;
        }
        Action::QuickFilter => {
            if tui_app.view == View::Home {
                tui_app.status_message = None;
                tui_app.input_mode = InputMode::HomeFilter;
            }
        }
        Action::ToggleSort => {
            if tui_app.view == View::Search {
                tui_app.toggle_sort();
                tui_app.set_status(format!("Sorted: {}", tui_app.sort_order.label()));
            }
        }
        Action::Refresh => match tui_app.view {
            View::Home => {
                let term = tui_app.home_term.clone();
                request_home(tui_app, ctx, tx, term);
            }
            View::Search => {
                if !tui_app.search_query.is_empty() {
                    let query = tui_app.search_query.clone();
                    request_search(tui_app, ctx, tx, query);
                }
            }
            View::History => tui_app.set_history(ctx.bookmarks.list_all()),
        },
        Action::None => {}
    }
}

fn enter_view(tui_app: &mut TuiApp, ctx: &AppContext, view: View) {
    if view == View::History {
        tui_app.set_history(ctx.bookmarks.list_all());
    }
    tui_app.switch_view(view);
}

/// Navigate to where the settled search bar text points.
fn follow_route(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<Response>,
    route: Route,
) {
    match route {
        Route::Home => enter_view(tui_app, ctx, View::Home),
        Route::Search { query } => {
            enter_view(tui_app, ctx, View::Search);
            request_search(tui_app, ctx, tx, query);
        }
    }
}

fn request_home(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<Response>,
    term: String,
) {
    let ticket = tui_app.begin_request(Target::Home);
    let ctx = ctx.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let results = ctx.search.home(&term).await;
        // The receiver is gone once the TUI has quit.
        let _ = tx.send((Target::Home, ticket, results));
    });
}

fn request_search(
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<Response>,
    query: String,
) {
    let ticket = tui_app.begin_request(Target::Search);
    let ctx = ctx.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(results) = ctx.search.search_view(&query).await {
            let _ = tx.send((Target::Search, ticket, results));
        }
    });
}
