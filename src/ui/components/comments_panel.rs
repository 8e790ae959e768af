//! Comment thread panel
//!
//! Renders the flattened thread rows; a reply sits one indent level to the
//! right of its parent.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::service::display::CommentDisplay;
use crate::utils::{datetime, text};

const INDENT_WIDTH: usize = 2;

/// Comment thread panel component
pub struct CommentsPanel;

impl CommentsPanel {
    /// Render the thread for the open post
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let title = format!("{} Comments", icons.reaction.comment);

        if app.comments.is_empty() {
            let empty_list = List::new(vec![ListItem::new("No comments yet. Press 'n' to add one.")]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
            f.render_stateful_widget(empty_list, area, &mut app.comment_list_state.clone());
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = app
            .comments
            .iter()
            .map(|comment| Self::comment_item(comment, app, width))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, &mut app.comment_list_state.clone());
    }

    fn comment_item<'a>(comment: &'a CommentDisplay, app: &App, width: usize) -> ListItem<'a> {
        let icons = app.icons.icons();
        let indent = " ".repeat(comment.depth * INDENT_WIDTH);

        let mut header = vec![Span::raw(indent.clone())];
        if comment.depth > 0 {
            header.push(Span::styled(
                format!("{} ", icons.reaction.reply),
                Style::default().fg(Color::DarkGray),
            ));
        }
        header.push(Span::styled(
            comment.author_name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        header.push(Span::styled(
            format!("  {}", datetime::format_relative(&comment.created_at)),
            Style::default().fg(Color::DarkGray),
        ));
        if comment.is_own {
            header.push(Span::styled("  (you)", Style::default().fg(Color::Green)));
        }

        let body_width = width.saturating_sub(indent.len());
        let body = format!(
            "{}{}",
            indent,
            text::truncate_with_ellipsis(&text::single_line(&comment.content), body_width)
        );

        let like_icon = if comment.is_liked {
            icons.reaction.liked
        } else {
            icons.reaction.not_liked
        };
        let footer = Line::from(vec![
            Span::raw(indent),
            Span::styled(
                format!("{} {}", like_icon, comment.likes_count),
                if comment.is_liked {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]);

        ListItem::new(vec![Line::from(header), Line::from(body), footer])
    }
}
