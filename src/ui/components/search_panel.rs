//! User search panel: query input plus results list

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::api::models::FriendshipStatus;

/// User search panel component
pub struct SearchPanel;

impl SearchPanel {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        // Query input
        let input_style = if app.search_input_active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let input_text = if app.search_query.is_empty() && !app.search_input_active {
            "Press '/' to search by name or email".to_string()
        } else {
            app.search_query.clone()
        };
        let input = Paragraph::new(input_text).style(input_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} Find Friends", icons.ui.search_title))
                .title_alignment(Alignment::Center),
        );
        f.render_widget(input, chunks[0]);

        // Results list
        if app.search_results.is_empty() {
            let empty = List::new(vec![ListItem::new("No results.")])
                .block(Block::default().borders(Borders::ALL).title("Results"));
            f.render_stateful_widget(empty, chunks[1], &mut app.search_list_state.clone());
            return;
        }

        let items: Vec<ListItem> = app
            .search_results
            .iter()
            .map(|user| {
                let status = match user.friendship_status {
                    Some(FriendshipStatus::Friends) => {
                        Span::styled(format!("{} friends", icons.presence.friend), Style::default().fg(Color::Green))
                    }
                    Some(FriendshipStatus::PendingSent) => {
                        Span::styled("request sent", Style::default().fg(Color::Yellow))
                    }
                    Some(FriendshipStatus::PendingReceived) => {
                        Span::styled("wants to be friends", Style::default().fg(Color::Yellow))
                    }
                    Some(FriendshipStatus::Own) => Span::styled("you", Style::default().fg(Color::DarkGray)),
                    _ => Span::styled("'f' to add", Style::default().fg(Color::DarkGray)),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(user.name.clone(), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("  <{}>  ", user.email), Style::default().fg(Color::DarkGray)),
                    status,
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Results"))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, chunks[1], &mut app.search_list_state.clone());
    }
}
