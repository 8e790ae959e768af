//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel with scroll support
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(70, 80, f.area());
        f.render_widget(Clear, area);

        let lines = Self::help_lines();
        let offset = app.help_scroll_offset.min(lines.len().saturating_sub(1));
        let visible: Vec<Line> = lines.into_iter().skip(offset).collect();

        let paragraph = Paragraph::new(visible).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - j/k to scroll, Esc to close")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(paragraph, area);
    }

    fn help_lines() -> Vec<Line<'static>> {
        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        };
        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Green)),
                Span::raw(what),
            ])
        };

        vec![
            section("Global"),
            entry("1-6", "jump to a view"),
            entry("[ / ]", "previous / next view"),
            entry("r", "refresh the current view"),
            entry("G", "show logs"),
            entry("L", "log out"),
            entry("?", "toggle this help"),
            entry("q", "quit"),
            Line::from(""),
            section("Feed / My Posts"),
            entry("j / k", "move selection"),
            entry("Enter", "open the comment thread"),
            entry("l / Space", "toggle like"),
            entry("n", "write a new post"),
            entry("e", "edit your post"),
            entry("d", "delete your post"),
            entry("m", "load more posts"),
            Line::from(""),
            section("Comments"),
            entry("j / k", "move selection"),
            entry("l / Space", "toggle like"),
            entry("n", "comment on the post"),
            entry("c", "reply to the selected comment"),
            entry("e", "edit your comment"),
            entry("d", "delete your comment"),
            entry("Esc", "close the thread"),
            Line::from(""),
            section("Friends"),
            entry("Enter", "view profile"),
            entry("d", "unfriend"),
            Line::from(""),
            section("Requests"),
            entry("a / Enter", "accept"),
            entry("x", "reject"),
            Line::from(""),
            section("Find Friends"),
            entry("/ or i", "edit the search query"),
            entry("Enter", "run the search / send request"),
            entry("f", "send a friend request"),
            Line::from(""),
            section("Profile"),
            entry("e", "edit your profile"),
            Line::from(""),
            section("Dialogs"),
            entry("Tab", "toggle post visibility"),
            entry("Up / Down", "switch field"),
            entry("Enter", "submit"),
            entry("Esc", "cancel"),
        ]
    }
}
