//! Profile edit dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Profile edit dialog component
pub struct ProfileEditDialog;

impl ProfileEditDialog {
    pub fn render(f: &mut Frame, app: &App) {
        if !app.editing_profile {
            return;
        }

        let dialog_area = LayoutManager::centered_rect(60, 80, f.area());
        f.render_widget(Clear, dialog_area);
        f.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title("👤 Edit Profile")
                .title_alignment(Alignment::Center),
            dialog_area,
        );

        let form = &app.profile_form;
        let fields: [(&str, &str); 5] = [
            ("First name", form.first_name.as_str()),
            ("Last name", form.last_name.as_str()),
            ("Bio", form.bio.as_str()),
            ("Location", form.location.as_str()),
            ("Website", form.website.as_str()),
        ];

        let mut y = dialog_area.y + 2;
        for (index, (label, value)) in fields.iter().enumerate() {
            if y + 3 > dialog_area.y + dialog_area.height.saturating_sub(2) {
                break;
            }
            let rect = Rect::new(dialog_area.x + 2, y, dialog_area.width.saturating_sub(4), 3);
            let style = if form.focus == index {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            let input = Paragraph::new((*value).to_string())
                .block(Block::default().borders(Borders::ALL).title(*label))
                .style(style);
            f.render_widget(input, rect);
            y += 3;
        }

        let instructions_rect = Rect::new(dialog_area.x + 2, y, dialog_area.width.saturating_sub(4), 1);
        if instructions_rect.y < dialog_area.y + dialog_area.height {
            let instructions = Paragraph::new("Enter: save • Tab: next field • Esc: cancel")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(instructions, instructions_rect);
        }
    }
}
