//! Comment composer / editor dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Comment composer dialog component
pub struct CommentComposerDialog;

impl CommentComposerDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let title = if app.editing_comment.is_some() {
            "✏️ Edit Comment"
        } else if app.composing_comment.map(|t| t.parent.is_some()).unwrap_or(false) {
            "↩️ Reply"
        } else if app.composing_comment.is_some() {
            "💬 New Comment"
        } else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect(60, 30, f.area());
        f.render_widget(Clear, dialog_area);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
            dialog_area,
        );

        let content_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 2,
            dialog_area.width.saturating_sub(4),
            3,
        );
        let content_text = if app.new_comment_content.is_empty() {
            "Write something..."
        } else {
            &app.new_comment_content
        };
        let content = Paragraph::new(content_text.to_string())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Green));
        f.render_widget(content, content_rect);

        let instructions_rect = Rect::new(
            dialog_area.x + 2,
            content_rect.y + 4,
            dialog_area.width.saturating_sub(4),
            1,
        );
        let instructions = Paragraph::new("Enter: submit • Esc: cancel")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(instructions, instructions_rect);
    }
}
