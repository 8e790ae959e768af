//! Info dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Info dialog component
pub struct InfoDialog;

impl InfoDialog {
    pub fn render(f: &mut Frame, app: &App) {
        // Errors take precedence
        if app.error_message.is_some() {
            return;
        }
        let Some(message) = &app.info_message else { return };

        let dialog_area = LayoutManager::centered_rect(50, 20, f.area());
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(message.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Info - press Enter to dismiss")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        f.render_widget(paragraph, dialog_area);
    }
}
