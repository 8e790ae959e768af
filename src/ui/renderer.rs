//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::{App, MainView, Screen};
use super::components::{
    dialogs::{
        CommentComposerDialog, DeleteConfirmationDialog, ErrorDialog, InfoDialog, LogsDialog, PostComposerDialog,
        ProfileEditDialog,
    },
    CommentsPanel, FriendsList, HelpPanel, LoginScreen, PostsList, ProfilePanel, RegisterScreen, RequestsList,
    SearchPanel, Sidebar, StatusBar,
};
use super::events::{handle_events, load_view_data};
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::ERROR_FEED_LOAD_FAILED;
use crate::service::SessionService;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state and the service every screen talks to
    let mut app = App::new(&config);
    let service = SessionService::new(&config)?;

    // A persisted session skips the login screen
    if let Some(user) = service.current_user().filter(|_| service.has_session()) {
        app.enter_main(user);
        load_view_data(&mut app, &service).await;
    }

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &service).await;

    // Cleanup
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    service: &SessionService,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout to allow for async operations
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app, service).await?;
                }
                Event::Resize(_, _) => {
                    // Redrawn on the next loop iteration
                }
                _ => {}
            }
        }

        // If a background feed load finished, merge its result
        if let Some(handle_ref) = app.feed_task.as_ref() {
            if handle_ref.is_finished() {
                if let Some(handle) = app.feed_task.take() {
                    match handle.await {
                        Ok(Ok(page)) => app.apply_feed_page(page),
                        Ok(Err(err)) => {
                            if crate::service::is_session_expired(&err) {
                                app.force_logout(crate::constants::ERROR_SESSION_EXPIRED);
                            } else {
                                app.error_message = Some(format!("{}: {}", ERROR_FEED_LOAD_FAILED, err));
                            }
                        }
                        Err(join_err) => {
                            app.error_message = Some(format!("Feed task error: {join_err}"));
                        }
                    }
                    app.refreshing = false;
                    app.loading = false;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    match app.screen {
        Screen::Login => {
            LoginScreen::render(f, app);
            ErrorDialog::render(f, app);
            InfoDialog::render(f, app);
            return;
        }
        Screen::Register => {
            RegisterScreen::render(f, app);
            ErrorDialog::render(f, app);
            InfoDialog::render(f, app);
            return;
        }
        Screen::Main => {}
    }

    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());
    let top_chunks = LayoutManager::top_pane_layout(chunks[0], app.sidebar_width);

    // Render components
    Sidebar::render(f, top_chunks[0], app);
    render_content(f, top_chunks[1], app);
    StatusBar::render(f, chunks[1], app);

    // Dialogs stack on top of everything else
    PostComposerDialog::render(f, app);
    CommentComposerDialog::render(f, app);
    ProfileEditDialog::render(f, app);
    DeleteConfirmationDialog::render(f, app);
    LogsDialog::render(f, app);
    ErrorDialog::render(f, app);
    InfoDialog::render(f, app);
    if app.show_help {
        HelpPanel::render(f, app);
    }
}

fn render_content(f: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &mut App) {
    match app.view {
        MainView::Feed | MainView::MyPosts => {
            if app.comments_post.is_some() {
                let halves = LayoutManager::thread_layout(area);
                PostsList::render(f, halves[0], app);
                CommentsPanel::render(f, halves[1], app);
            } else {
                PostsList::render(f, area, app);
            }
        }
        MainView::Friends => FriendsList::render(f, area, app),
        MainView::Requests => RequestsList::render(f, area, app),
        MainView::Search => SearchPanel::render(f, area, app),
        MainView::Profile => ProfilePanel::render(f, area, app),
    }
}
