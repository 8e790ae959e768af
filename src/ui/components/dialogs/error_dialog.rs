//! Error dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Error dialog component
pub struct ErrorDialog;

impl ErrorDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(message) = &app.error_message else { return };

        let dialog_area = LayoutManager::centered_rect(50, 25, f.area());
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(message.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Error - press Enter to dismiss")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        f.render_widget(paragraph, dialog_area);
    }
}
