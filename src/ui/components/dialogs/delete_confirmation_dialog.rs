//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::app::{App, DeleteTarget};
use super::super::super::layout::LayoutManager;

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(target) = &app.delete_confirmation else { return };

        let question = match target {
            DeleteTarget::Post(_) => "Delete this post?".to_string(),
            DeleteTarget::Comment(_) => "Delete this comment?".to_string(),
            DeleteTarget::Friend { name, .. } => format!("Remove {name} from your friends?"),
        };

        let dialog_area = LayoutManager::centered_rect(40, 20, f.area());
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(format!("{question}\n\n(y)es / (n)o"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("⚠️ Confirm")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, dialog_area);
    }
}
