//! Event handling and key bindings

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, CommentTarget, DeleteTarget, MainView, Screen};
use crate::api::models::ProfileUpdate;
use crate::constants::*;
use crate::service::{is_session_expired, SessionService};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App, service: &SessionService) -> Result<bool> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Ctrl+C always quits, whatever mode we are in
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return Ok(true);
            }

            return match app.screen {
                Screen::Login => handle_login_screen(key, app, service).await,
                Screen::Register => handle_register_screen(key, app, service).await,
                Screen::Main => handle_main_screen(key, app, service).await,
            };
        }
    }
    Ok(false)
}

/// Append/remove characters on a focused text field.
/// Returns true when the key was consumed.
fn edit_field(field: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.push(c);
            true
        }
        KeyCode::Backspace => {
            field.pop();
            true
        }
        _ => false,
    }
}

/// Map a service error onto the message area, dropping back to the login
/// screen when the session is gone.
fn handle_service_error(app: &mut App, prefix: &str, err: anyhow::Error) {
    if is_session_expired(&err) {
        app.force_logout(ERROR_SESSION_EXPIRED);
    } else {
        app.error_message = Some(format!("{}: {}", prefix, err));
    }
}

// ── Login / register screens ──

async fn handle_login_screen(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    // Dismiss any message first
    if app.error_message.is_some() || app.info_message.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.error_message = None;
            app.info_message = None;
            return Ok(true);
        }
    }

    if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.screen = Screen::Register;
        return Ok(true);
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Tab | KeyCode::Down => {
            app.login_form.focus = (app.login_form.focus + 1) % 2;
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.login_form.focus = (app.login_form.focus + 1) % 2;
            Ok(true)
        }
        KeyCode::Enter => {
            submit_login(app, service).await;
            Ok(true)
        }
        _ => {
            let field = if app.login_form.focus == 0 {
                &mut app.login_form.email
            } else {
                &mut app.login_form.password
            };
            Ok(edit_field(field, key))
        }
    }
}

async fn submit_login(app: &mut App, service: &SessionService) {
    if app.login_form.email.trim().is_empty() || app.login_form.password.is_empty() {
        app.error_message = Some("Email and password are required".to_string());
        return;
    }

    app.auth_in_flight = true;
    let result = service.login(app.login_form.email.trim(), &app.login_form.password).await;
    app.auth_in_flight = false;

    match result {
        Ok(user) => {
            app.enter_main(user);
            load_view_data(app, service).await;
        }
        Err(err) => {
            app.error_message = Some(format!("Login failed: {err}"));
        }
    }
}

async fn handle_register_screen(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    if app.error_message.is_some() || app.info_message.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.error_message = None;
            app.info_message = None;
            return Ok(true);
        }
    }

    match key.code {
        KeyCode::Esc => {
            app.screen = Screen::Login;
            Ok(true)
        }
        KeyCode::Tab | KeyCode::Down => {
            app.register_form.focus = (app.register_form.focus + 1) % 5;
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.register_form.focus = (app.register_form.focus + 4) % 5;
            Ok(true)
        }
        KeyCode::Enter => {
            submit_register(app, service).await;
            Ok(true)
        }
        _ => {
            let form = &mut app.register_form;
            let field = match form.focus {
                0 => &mut form.email,
                1 => &mut form.first_name,
                2 => &mut form.last_name,
                3 => &mut form.password,
                _ => &mut form.password2,
            };
            Ok(edit_field(field, key))
        }
    }
}

async fn submit_register(app: &mut App, service: &SessionService) {
    let form = &app.register_form;
    if form.email.trim().is_empty() || form.password.is_empty() {
        app.error_message = Some("Email and password are required".to_string());
        return;
    }
    if form.password != form.password2 {
        app.error_message = Some("Password fields didn't match".to_string());
        return;
    }

    app.auth_in_flight = true;
    let result = service
        .register(
            form.email.trim(),
            form.first_name.trim(),
            form.last_name.trim(),
            &form.password,
            &form.password2,
        )
        .await;
    app.auth_in_flight = false;

    match result {
        Ok(_) => {
            let email = app.register_form.email.trim().to_string();
            app.screen = Screen::Login;
            app.login_form.email = email;
            app.login_form.password.clear();
            app.login_form.focus = 1;
            app.info_message = Some("Account created, please log in".to_string());
        }
        Err(err) => {
            app.error_message = Some(format!("Registration failed: {err}"));
        }
    }
}

// ── Main screen dispatch ──

async fn handle_main_screen(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    // Handle error/info message dialogs
    if app.error_message.is_some() || app.info_message.is_some() {
        return Ok(handle_message_dialog(key, app));
    }

    // Handle delete confirmation dialog
    if app.delete_confirmation.is_some() {
        return handle_delete_confirmation(key, app, service).await;
    }

    // Handle post composer / editor dialog
    if app.composing_post || app.editing_post.is_some() {
        return handle_post_composer(key, app, service).await;
    }

    // Handle comment composer / editor dialog
    if app.composing_comment.is_some() || app.editing_comment.is_some() {
        return handle_comment_composer(key, app, service).await;
    }

    // Handle profile editor dialog
    if app.editing_profile {
        return handle_profile_editor(key, app, service).await;
    }

    // Help panel blocks all other shortcuts while open
    if app.show_help {
        return Ok(handle_help_panel(key, app));
    }

    // Logs dialog
    if app.show_logs {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')) {
            app.show_logs = false;
        }
        return Ok(true);
    }

    // Search input captures typing while active
    if app.search_input_active {
        return handle_search_input(key, app, service).await;
    }

    // Comment thread panel
    if app.comments_post.is_some() {
        return handle_comments_panel(key, app, service).await;
    }

    handle_normal_mode(key, app, service).await
}

fn handle_message_dialog(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.error_message = None;
            app.info_message = None;
            true
        }
        _ => false,
    }
}

fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.show_help = false;
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Char('g') => {
            app.help_scroll_offset = 0;
            true
        }
        _ => false,
    }
}

// ── Dialog handlers ──

async fn handle_delete_confirmation(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            let target = app.delete_confirmation.take();
            match target {
                Some(DeleteTarget::Post(id)) => match service.delete_post(id).await {
                    Ok(()) => {
                        app.info_message = Some(SUCCESS_POST_DELETED.to_string());
                        spawn_feed_load(app, service, 1);
                    }
                    Err(err) => handle_service_error(app, ERROR_POST_DELETE_FAILED, err),
                },
                Some(DeleteTarget::Comment(id)) => match service.delete_comment(id).await {
                    Ok(()) => {
                        app.info_message = Some(SUCCESS_COMMENT_DELETED.to_string());
                        reload_comments(app, service).await;
                    }
                    Err(err) => handle_service_error(app, ERROR_COMMENT_DELETE_FAILED, err),
                },
                Some(DeleteTarget::Friend { user_id, .. }) => match service.unfriend(user_id).await {
                    Ok(()) => {
                        app.info_message = Some(SUCCESS_UNFRIENDED.to_string());
                        reload_friends(app, service).await;
                    }
                    Err(err) => handle_service_error(app, ERROR_UNFRIEND_FAILED, err),
                },
                None => {}
            }
            Ok(true)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.delete_confirmation = None;
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys during confirmation
    }
}

async fn handle_post_composer(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.composing_post = false;
            app.editing_post = None;
            app.new_post_content.clear();
            app.new_post_image.clear();
            app.post_field_focus = 0;
            Ok(true)
        }
        KeyCode::Tab => {
            app.new_post_visibility = app.new_post_visibility.toggled();
            Ok(true)
        }
        KeyCode::Down | KeyCode::Up => {
            // The edit dialog has no image field
            if app.editing_post.is_none() {
                app.post_field_focus = (app.post_field_focus + 1) % 2;
            }
            Ok(true)
        }
        KeyCode::Enter => {
            submit_post(app, service).await;
            Ok(true)
        }
        _ => {
            let field = if app.post_field_focus == 0 || app.editing_post.is_some() {
                &mut app.new_post_content
            } else {
                &mut app.new_post_image
            };
            Ok(edit_field(field, key))
        }
    }
}

async fn submit_post(app: &mut App, service: &SessionService) {
    let content = app.new_post_content.trim().to_string();
    if content.is_empty() {
        app.error_message = Some("Post content cannot be empty".to_string());
        return;
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        app.error_message = Some(format!("Post content too long (max {} characters)", MAX_CONTENT_LENGTH));
        return;
    }

    let result = if let Some(id) = app.editing_post {
        service
            .update_post(id, Some(content), Some(app.new_post_visibility))
            .await
            .map(|_| SUCCESS_POST_UPDATED)
    } else {
        let image = if app.new_post_image.trim().is_empty() {
            None
        } else {
            Some(std::path::PathBuf::from(app.new_post_image.trim()))
        };
        service
            .create_post(&content, app.new_post_visibility, image)
            .await
            .map(|_| SUCCESS_POST_CREATED)
    };

    let prefix = if app.editing_post.is_some() {
        ERROR_POST_UPDATE_FAILED
    } else {
        ERROR_POST_CREATE_FAILED
    };

    match result {
        Ok(message) => {
            app.composing_post = false;
            app.editing_post = None;
            app.new_post_content.clear();
            app.new_post_image.clear();
            app.post_field_focus = 0;
            app.info_message = Some(message.to_string());
            spawn_feed_load(app, service, 1);
        }
        Err(err) => handle_service_error(app, prefix, err),
    }
}

async fn handle_comment_composer(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.composing_comment = None;
            app.editing_comment = None;
            app.new_comment_content.clear();
            Ok(true)
        }
        KeyCode::Enter => {
            submit_comment(app, service).await;
            Ok(true)
        }
        _ => Ok(edit_field(&mut app.new_comment_content, key)),
    }
}

async fn submit_comment(app: &mut App, service: &SessionService) {
    let content = app.new_comment_content.trim().to_string();
    if content.is_empty() {
        app.error_message = Some("Comment cannot be empty".to_string());
        return;
    }

    let result = if let Some(id) = app.editing_comment {
        service.update_comment(id, &content).await.map(|_| SUCCESS_COMMENT_UPDATED)
    } else if let Some(target) = app.composing_comment {
        service
            .add_comment(target.post_id, &content, target.parent)
            .await
            .map(|_| {
                if target.parent.is_some() {
                    SUCCESS_REPLY_CREATED
                } else {
                    SUCCESS_COMMENT_CREATED
                }
            })
    } else {
        return;
    };

    let prefix = if app.editing_comment.is_some() {
        ERROR_COMMENT_UPDATE_FAILED
    } else {
        ERROR_COMMENT_CREATE_FAILED
    };

    match result {
        Ok(message) => {
            app.composing_comment = None;
            app.editing_comment = None;
            app.new_comment_content.clear();
            app.info_message = Some(message.to_string());
            reload_comments(app, service).await;
        }
        Err(err) => handle_service_error(app, prefix, err),
    }
}

async fn handle_profile_editor(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.editing_profile = false;
            Ok(true)
        }
        KeyCode::Tab | KeyCode::Down => {
            app.profile_form.focus = (app.profile_form.focus + 1) % 5;
            Ok(true)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.profile_form.focus = (app.profile_form.focus + 4) % 5;
            Ok(true)
        }
        KeyCode::Enter => {
            submit_profile(app, service).await;
            Ok(true)
        }
        _ => {
            let form = &mut app.profile_form;
            let field = match form.focus {
                0 => &mut form.first_name,
                1 => &mut form.last_name,
                2 => &mut form.bio,
                3 => &mut form.location,
                _ => &mut form.website,
            };
            Ok(edit_field(field, key))
        }
    }
}

async fn submit_profile(app: &mut App, service: &SessionService) {
    let form = &app.profile_form;
    let optional = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };
    let update = ProfileUpdate {
        first_name: optional(&form.first_name),
        last_name: optional(&form.last_name),
        bio: optional(&form.bio),
        location: optional(&form.location),
        website: optional(&form.website),
    };

    match service.update_profile(update).await {
        Ok(profile) => {
            app.profile = Some(profile);
            app.editing_profile = false;
            app.info_message = Some(SUCCESS_PROFILE_UPDATED.to_string());
        }
        Err(err) => handle_service_error(app, ERROR_PROFILE_UPDATE_FAILED, err),
    }
}

// ── Search ──

async fn handle_search_input(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.search_input_active = false;
            Ok(true)
        }
        KeyCode::Enter => {
            app.search_input_active = false;
            run_search(app, service).await;
            Ok(true)
        }
        _ => Ok(edit_field(&mut app.search_query, key)),
    }
}

async fn run_search(app: &mut App, service: &SessionService) {
    let query = app.search_query.trim().to_string();
    if query.is_empty() {
        return;
    }
    match service.search_users(&query).await {
        Ok(results) => {
            let select = if results.is_empty() { None } else { Some(0) };
            app.search_results = results;
            app.search_list_state.select(select);
        }
        Err(err) => handle_service_error(app, "❌ Search failed", err),
    }
}

// ── Comment thread panel ──

async fn handle_comments_panel(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') => {
            app.comments_post = None;
            app.comments.clear();
            Ok(true)
        }
        KeyCode::Char('j') | KeyCode::Down => {
            App::next_in(&mut app.comment_list_state, app.comments.len());
            Ok(true)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::previous_in(&mut app.comment_list_state, app.comments.len());
            Ok(true)
        }
        KeyCode::Char('r') => {
            reload_comments(app, service).await;
            Ok(true)
        }
        KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(comment) = app.selected_comment() {
                let id = comment.id;
                match service.toggle_comment_like(id).await {
                    Ok((liked, likes_count)) => app.update_selected_comment_like(liked, likes_count),
                    Err(err) => handle_service_error(app, ERROR_LIKE_FAILED, err),
                }
            }
            Ok(true)
        }
        KeyCode::Char('n') => {
            if let Some(post_id) = app.comments_post {
                app.composing_comment = Some(CommentTarget { post_id, parent: None });
                app.new_comment_content.clear();
            }
            Ok(true)
        }
        KeyCode::Char('c') => {
            // Reply to the selected comment
            let parent = app.selected_comment().map(|comment| comment.id);
            if let (Some(post_id), Some(parent)) = (app.comments_post, parent) {
                app.composing_comment = Some(CommentTarget {
                    post_id,
                    parent: Some(parent),
                });
                app.new_comment_content.clear();
            }
            Ok(true)
        }
        KeyCode::Char('e') => {
            let own = app
                .selected_comment()
                .filter(|comment| comment.is_own)
                .map(|comment| (comment.id, comment.content.clone()));
            if let Some((id, content)) = own {
                app.editing_comment = Some(id);
                app.new_comment_content = content;
            }
            Ok(true)
        }
        KeyCode::Char('d') => {
            let own = app.selected_comment().filter(|comment| comment.is_own).map(|comment| comment.id);
            if let Some(id) = own {
                app.delete_confirmation = Some(DeleteTarget::Comment(id));
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn open_comments(app: &mut App, service: &SessionService) {
    let Some(post) = app.selected_post() else { return };
    let post_id = post.id;
    match service.comments(post_id).await {
        Ok(comments) => {
            let select = if comments.is_empty() { None } else { Some(0) };
            app.comments = comments;
            app.comments_post = Some(post_id);
            app.comment_list_state.select(select);
        }
        Err(err) => handle_service_error(app, "❌ Failed to load comments", err),
    }
}

async fn reload_comments(app: &mut App, service: &SessionService) {
    let Some(post_id) = app.comments_post else { return };
    match service.comments(post_id).await {
        Ok(comments) => {
            let len = comments.len();
            app.comments = comments;
            let selected = app.comment_list_state.selected().unwrap_or(0);
            let select = if len == 0 { None } else { Some(selected.min(len - 1)) };
            app.comment_list_state.select(select);
        }
        Err(err) => handle_service_error(app, "❌ Failed to load comments", err),
    }
}

// ── Normal mode ──

async fn handle_normal_mode(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            app.help_scroll_offset = 0;
            return Ok(true);
        }
        KeyCode::Char('G') => {
            app.logs_snapshot = service.logger().get_logs();
            app.show_logs = true;
            return Ok(true);
        }
        KeyCode::Char('L') => {
            // Explicit logout
            if let Err(err) = service.logout() {
                app.error_message = Some(format!("Logout failed: {err}"));
            } else {
                app.force_logout("Logged out");
                app.error_message = None;
                app.info_message = Some("Logged out".to_string());
            }
            return Ok(true);
        }
        KeyCode::Char(']') => {
            app.next_view();
            load_view_data(app, service).await;
            return Ok(true);
        }
        KeyCode::Char('[') => {
            app.previous_view();
            load_view_data(app, service).await;
            return Ok(true);
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = (c as usize) - ('1' as usize);
            app.switch_view(MainView::ALL[index]);
            load_view_data(app, service).await;
            return Ok(true);
        }
        KeyCode::Char('r') => {
            load_view_data(app, service).await;
            return Ok(true);
        }
        _ => {}
    }

    match app.view {
        MainView::Feed | MainView::MyPosts => handle_posts_keys(key, app, service).await,
        MainView::Friends => handle_friends_keys(key, app, service).await,
        MainView::Requests => handle_requests_keys(key, app, service).await,
        MainView::Search => handle_search_keys(key, app, service).await,
        MainView::Profile => {
            if key.code == KeyCode::Char('e') {
                app.open_profile_editor();
                return Ok(true);
            }
            Ok(false)
        }
    }
}

async fn handle_posts_keys(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            App::next_in(&mut app.post_list_state, app.posts.len());
            Ok(true)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::previous_in(&mut app.post_list_state, app.posts.len());
            Ok(true)
        }
        KeyCode::Enter => {
            open_comments(app, service).await;
            Ok(true)
        }
        KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(post) = app.selected_post() {
                let id = post.id;
                match service.toggle_post_like(id).await {
                    Ok((liked, likes_count)) => app.update_selected_post_like(liked, likes_count),
                    Err(err) => handle_service_error(app, ERROR_LIKE_FAILED, err),
                }
            }
            Ok(true)
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.composing_post = true;
            app.editing_post = None;
            app.new_post_content.clear();
            app.new_post_image.clear();
            app.post_field_focus = 0;
            Ok(true)
        }
        KeyCode::Char('e') => {
            let own = app
                .selected_post()
                .filter(|post| post.is_own)
                .map(|post| (post.id, post.content.clone(), post.visibility));
            if let Some((id, content, visibility)) = own {
                app.editing_post = Some(id);
                app.new_post_content = content;
                app.new_post_visibility = visibility;
                app.composing_post = false;
            }
            Ok(true)
        }
        KeyCode::Char('d') => {
            let own = app.selected_post().filter(|post| post.is_own).map(|post| post.id);
            if let Some(id) = own {
                app.delete_confirmation = Some(DeleteTarget::Post(id));
            }
            Ok(true)
        }
        KeyCode::Char('m') => {
            // Load the next feed page
            if app.has_more_posts {
                let next_page = app.feed_page + 1;
                spawn_feed_load(app, service, next_page);
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn handle_friends_keys(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            App::next_in(&mut app.friend_list_state, app.friends.len());
            Ok(true)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::previous_in(&mut app.friend_list_state, app.friends.len());
            Ok(true)
        }
        KeyCode::Enter => {
            view_selected_friend(app, service).await;
            Ok(true)
        }
        KeyCode::Char('d') => {
            let friend = app.selected_friend().map(|friend| (friend.id, friend.name.clone()));
            if let Some((user_id, name)) = friend {
                app.delete_confirmation = Some(DeleteTarget::Friend { user_id, name });
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn view_selected_friend(app: &mut App, service: &SessionService) {
    let Some(user_id) = app.selected_friend().map(|friend| friend.id) else { return };
    match service.user_profile(user_id).await {
        Ok(user) => {
            let mut text = format!("{} <{}>", user.name, user.email);
            if let Some(bio) = &user.bio {
                text.push_str(&format!("\n\n{bio}"));
            }
            if let Some(location) = &user.location {
                text.push_str(&format!("\nLocation: {location}"));
            }
            text.push_str(&format!(
                "\n\nPosts: {}   Friends: {}",
                user.posts_count.unwrap_or(0),
                user.friends_count.unwrap_or(0)
            ));
            app.info_message = Some(text);
        }
        Err(err) => handle_service_error(app, "❌ Failed to load profile", err),
    }
}

async fn handle_requests_keys(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            App::next_in(&mut app.request_list_state, app.requests.len());
            Ok(true)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::previous_in(&mut app.request_list_state, app.requests.len());
            Ok(true)
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            respond_selected_request(app, service, true).await;
            Ok(true)
        }
        KeyCode::Char('x') => {
            respond_selected_request(app, service, false).await;
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn respond_selected_request(app: &mut App, service: &SessionService, accept: bool) {
    let Some(request) = app.selected_request() else { return };
    let id = request.id;
    match service.respond_friend_request(id, accept).await {
        Ok(()) => {
            app.info_message = Some(
                if accept {
                    SUCCESS_FRIEND_REQUEST_ACCEPTED
                } else {
                    SUCCESS_FRIEND_REQUEST_REJECTED
                }
                .to_string(),
            );
            reload_requests(app, service).await;
        }
        Err(err) => handle_service_error(app, ERROR_FRIEND_RESPOND_FAILED, err),
    }
}

async fn handle_search_keys(key: KeyEvent, app: &mut App, service: &SessionService) -> Result<bool> {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.search_input_active = true;
            Ok(true)
        }
        KeyCode::Char('j') | KeyCode::Down => {
            App::next_in(&mut app.search_list_state, app.search_results.len());
            Ok(true)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            App::previous_in(&mut app.search_list_state, app.search_results.len());
            Ok(true)
        }
        KeyCode::Char('f') | KeyCode::Enter => {
            send_request_to_selected(app, service).await;
            Ok(true)
        }
        _ => Ok(false),
    }
}

async fn send_request_to_selected(app: &mut App, service: &SessionService) {
    use crate::api::models::FriendshipStatus;

    let Some(index) = app.search_list_state.selected() else { return };
    let Some(user) = app.search_results.get(index) else { return };
    if user.friendship_status != Some(FriendshipStatus::None) && user.friendship_status.is_some() {
        return;
    }
    let user_id = user.id;
    match service.send_friend_request(user_id).await {
        Ok(()) => {
            app.info_message = Some(SUCCESS_FRIEND_REQUEST_SENT.to_string());
            if let Some(user) = app.search_results.get_mut(index) {
                user.friendship_status = Some(FriendshipStatus::PendingSent);
            }
        }
        Err(err) => handle_service_error(app, ERROR_FRIEND_REQUEST_FAILED, err),
    }
}

// ── Data loading ──

/// Load the data backing the current view.
///
/// Feed pages load in the background through `feed_task`; the smaller lists
/// load inline.
pub async fn load_view_data(app: &mut App, service: &SessionService) {
    match app.view {
        MainView::Feed | MainView::MyPosts => spawn_feed_load(app, service, 1),
        MainView::Friends => reload_friends(app, service).await,
        MainView::Requests => reload_requests(app, service).await,
        MainView::Search => {}
        MainView::Profile => match service.profile().await {
            Ok(profile) => app.profile = Some(profile),
            Err(err) => handle_service_error(app, "❌ Failed to load profile", err),
        },
    }
}

/// Start a background feed load unless one is already running.
pub fn spawn_feed_load(app: &mut App, service: &SessionService, page: u32) {
    if app.feed_task.is_some() {
        return;
    }
    let mine_only = app.view == MainView::MyPosts;
    let svc = service.clone();
    app.refreshing = true;
    app.feed_task = Some(tokio::spawn(async move { svc.load_feed(page, mine_only).await }));
}

async fn reload_friends(app: &mut App, service: &SessionService) {
    match service.friends().await {
        Ok(friends) => {
            let select = if friends.is_empty() { None } else { Some(0) };
            app.friends = friends;
            app.friend_list_state.select(select);
        }
        Err(err) => handle_service_error(app, "❌ Failed to load friends", err),
    }
}

async fn reload_requests(app: &mut App, service: &SessionService) {
    match service.friend_requests().await {
        Ok(requests) => {
            let select = if requests.is_empty() { None } else { Some(0) };
            app.requests = requests;
            app.request_list_state.select(select);
        }
        Err(err) => handle_service_error(app, "❌ Failed to load requests", err),
    }
}
