//! Sidebar component: view menu plus the signed-in user

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::{App, MainView};

/// Sidebar component
pub struct Sidebar;

impl Sidebar {
    /// Render the sidebar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let mut items: Vec<ListItem> = Vec::new();

        if let Some(user) = &app.current_user {
            items.push(ListItem::new(Line::from(Span::styled(
                user.full_name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))));
            items.push(ListItem::new(""));
        }

        for (index, view) in MainView::ALL.iter().enumerate() {
            let icon = match view {
                MainView::Feed | MainView::MyPosts => icons.ui.feed_title,
                MainView::Friends | MainView::Requests => icons.ui.friends_title,
                MainView::Search => icons.ui.search_title,
                MainView::Profile => icons.ui.profile_title,
            };
            let mut spans = vec![Span::raw(format!("{} {} {}", index + 1, icon, view.label()))];
            // Show the pending request count next to the Requests entry
            if *view == MainView::Requests && !app.requests.is_empty() {
                spans.push(Span::styled(
                    format!(" ({})", app.requests.len()),
                    Style::default().fg(Color::Yellow),
                ));
            }
            let mut line = Line::from(spans);
            if *view == app.view {
                line = line.style(Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD));
            }
            items.push(ListItem::new(line));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Menu")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(list, area);
    }
}
