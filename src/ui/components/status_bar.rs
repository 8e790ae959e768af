//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::{App, MainView};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.loading {
            "Loading...".to_string()
        } else if app.refreshing {
            "🔄 Refreshing feed...".to_string()
        } else if app.comments_post.is_some() {
            "j/k: move • l: like • n: comment • c: reply • e: edit • d: delete • Esc: close • ?: help".to_string()
        } else {
            match app.view {
                MainView::Feed | MainView::MyPosts => {
                    "j/k: move • Enter: comments • l: like • n: new post • r: refresh • ?: help • q: quit".to_string()
                }
                MainView::Friends => {
                    "j/k: move • Enter: view profile • d: unfriend • r: refresh • ?: help • q: quit".to_string()
                }
                MainView::Requests => "j/k: move • a: accept • x: reject • r: refresh • ?: help • q: quit".to_string(),
                MainView::Search => "/: search • j/k: move • f: send request • ?: help • q: quit".to_string(),
                MainView::Profile => "e: edit profile • r: refresh • ?: help • q: quit".to_string(),
            }
        };

        let status_color = if app.refreshing {
            Color::Yellow
        } else if app.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
