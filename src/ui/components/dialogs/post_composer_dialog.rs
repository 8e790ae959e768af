//! Post composer / editor dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::api::models::Visibility;

/// Post composer dialog component
pub struct PostComposerDialog;

impl PostComposerDialog {
    /// Render the post composer (or editor) dialog
    pub fn render(f: &mut Frame, app: &App) {
        if !app.composing_post && app.editing_post.is_none() {
            return;
        }

        let editing = app.editing_post.is_some();
        let dialog_area = LayoutManager::centered_rect(60, 45, f.area());
        f.render_widget(Clear, dialog_area);

        let title = if editing { "✏️ Edit Post" } else { "📝 New Post" };
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
            dialog_area,
        );

        // Content input
        let content_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 2,
            dialog_area.width.saturating_sub(4),
            3,
        );
        let content_text = if app.new_post_content.is_empty() {
            "What's on your mind?"
        } else {
            &app.new_post_content
        };
        let content_focused = app.post_field_focus == 0 || editing;
        let content = Paragraph::new(content_text.to_string())
            .block(Block::default().borders(Borders::ALL).title("Content"))
            .style(if content_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            });
        f.render_widget(content, content_rect);

        // Image path input (new posts only; images cannot be swapped on edit)
        let mut next_y = content_rect.y + 4;
        if !editing {
            let image_rect = Rect::new(dialog_area.x + 2, next_y, dialog_area.width.saturating_sub(4), 3);
            let image_text = if app.new_post_image.is_empty() {
                "Optional image path"
            } else {
                &app.new_post_image
            };
            let image = Paragraph::new(image_text.to_string())
                .block(Block::default().borders(Borders::ALL).title("Image"))
                .style(if app.post_field_focus == 1 {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                });
            f.render_widget(image, image_rect);
            next_y += 4;
        }

        // Visibility indicator
        let visibility_rect = Rect::new(dialog_area.x + 2, next_y, dialog_area.width.saturating_sub(4), 1);
        let visibility_text = match app.new_post_visibility {
            Visibility::Public => "Visibility: public (Tab to toggle)",
            Visibility::Private => "Visibility: private (Tab to toggle)",
        };
        f.render_widget(
            Paragraph::new(visibility_text).style(Style::default().fg(Color::Yellow)),
            visibility_rect,
        );

        // Instructions
        let instructions_y = next_y + 2;
        if instructions_y < dialog_area.y + dialog_area.height.saturating_sub(1) {
            let instructions_rect = Rect::new(dialog_area.x + 2, instructions_y, dialog_area.width.saturating_sub(4), 1);
            let instructions = Paragraph::new("Enter: submit • Up/Down: switch field • Esc: cancel")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(instructions, instructions_rect);
        }
    }
}
