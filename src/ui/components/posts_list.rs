//! Posts list component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::{App, MainView};
use crate::service::display::PostDisplay;
use crate::utils::{datetime, text};

/// Posts list component
pub struct PostsList;

impl PostsList {
    /// Render the feed (or the viewer's own posts)
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let title = match app.view {
            MainView::MyPosts => format!("{} My Posts", icons.ui.feed_title),
            _ => format!("{} Feed", icons.ui.feed_title),
        };

        if app.posts.is_empty() {
            let empty_message = if app.refreshing || app.loading {
                "Loading posts..."
            } else {
                "No posts yet. Press 'n' to write the first one."
            };
            let empty_list = List::new(vec![ListItem::new(empty_message)]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            );
            f.render_stateful_widget(empty_list, area, &mut app.post_list_state.clone());
            return;
        }

        let width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = app
            .posts
            .iter()
            .map(|post| Self::post_item(post, app, width))
            .collect();

        let mut title = title;
        if app.has_more_posts {
            title.push_str(" (m: more)");
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_alignment(Alignment::Center),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, area, &mut app.post_list_state.clone());
    }

    fn post_item<'a>(post: &'a PostDisplay, app: &App, width: usize) -> ListItem<'a> {
        let icons = app.icons.icons();

        let mut header = vec![Span::styled(
            post.author_name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        header.push(Span::styled(
            format!("  {}", datetime::format_relative(&post.created_at)),
            Style::default().fg(Color::DarkGray),
        ));
        if app.show_visibility {
            let marker = match post.visibility {
                crate::api::models::Visibility::Public => icons.visibility.public,
                crate::api::models::Visibility::Private => icons.visibility.private,
            };
            header.push(Span::styled(format!("  {marker}"), Style::default().fg(Color::DarkGray)));
        }
        if post.has_image {
            header.push(Span::styled(
                format!("  {}", icons.visibility.image),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if post.is_own {
            header.push(Span::styled("  (you)", Style::default().fg(Color::Green)));
        }

        let body = text::truncate_with_ellipsis(&text::single_line(&post.content), width);

        let like_icon = if post.is_liked {
            icons.reaction.liked
        } else {
            icons.reaction.not_liked
        };
        let footer = Line::from(vec![
            Span::styled(
                format!("{} {}", like_icon, post.likes_count),
                if post.is_liked {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
            Span::styled(
                format!("  {} {}", icons.reaction.comment, post.comments_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        ListItem::new(vec![Line::from(header), Line::from(body), footer, Line::from("")])
    }
}
