//! Friends list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;

/// Friends list component
pub struct FriendsList;

impl FriendsList {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let title = format!("{} Friends ({})", icons.ui.friends_title, app.friends.len());

        if app.friends.is_empty() {
            let empty_list = List::new(vec![ListItem::new("No friends yet. Try the Find Friends view.")]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
            f.render_stateful_widget(empty_list, area, &mut app.friend_list_state.clone());
            return;
        }

        let items: Vec<ListItem> = app
            .friends
            .iter()
            .map(|friend| {
                let presence = if friend.is_online {
                    Span::styled(icons.presence.online, Style::default().fg(Color::Green))
                } else {
                    Span::styled(icons.presence.offline, Style::default().fg(Color::DarkGray))
                };
                let mut spans = vec![
                    presence,
                    Span::raw(" "),
                    Span::styled(friend.name.clone(), Style::default().fg(Color::Cyan)),
                ];
                if !friend.email.is_empty() {
                    spans.push(Span::styled(
                        format!("  <{}>", friend.email),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, &mut app.friend_list_state.clone());
    }
}
