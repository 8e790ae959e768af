//! Logs dialog component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::constants::DIALOG_TITLE_LOGS;

/// Logs dialog component
pub struct LogsDialog;

impl LogsDialog {
    pub fn render(f: &mut Frame, app: &App) {
        if !app.show_logs {
            return;
        }

        let dialog_area = LayoutManager::centered_rect(80, 80, f.area());
        f.render_widget(Clear, dialog_area);

        let items: Vec<ListItem> = if app.logs_snapshot.is_empty() {
            vec![ListItem::new("No log entries yet.")]
        } else {
            app.logs_snapshot.iter().map(|entry| ListItem::new(entry.clone())).collect()
        };

        let list = List::new(items).style(Style::default()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_LOGS)
                .title_alignment(Alignment::Center),
        );
        f.render_widget(list, dialog_area);
    }
}
