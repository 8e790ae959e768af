//! Incoming friend requests component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::utils::datetime;

/// Friend requests list component
pub struct RequestsList;

impl RequestsList {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let title = format!("{} Friend Requests ({})", icons.presence.pending, app.requests.len());

        if app.requests.is_empty() {
            let empty_list = List::new(vec![ListItem::new("No pending requests.")]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
            f.render_stateful_widget(empty_list, area, &mut app.request_list_state.clone());
            return;
        }

        let items: Vec<ListItem> = app
            .requests
            .iter()
            .map(|request| {
                ListItem::new(Line::from(vec![
                    Span::styled(request.from_name.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!("  <{}>", request.from_email),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("  {}", datetime::format_relative(&request.created_at)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
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

        f.render_stateful_widget(list, area, &mut app.request_list_state.clone());
    }
}
