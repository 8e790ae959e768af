//! Own profile panel

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;

/// Profile panel component
pub struct ProfilePanel;

impl ProfilePanel {
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let icons = app.icons.icons();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} Profile", icons.ui.profile_title))
            .title_alignment(Alignment::Center);

        let Some(profile) = &app.profile else {
            let paragraph = Paragraph::new("Loading profile... (press 'r' to retry)").block(block);
            f.render_widget(paragraph, area);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(
                profile.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(profile.email.clone(), Style::default().fg(Color::DarkGray))),
            Line::from(""),
        ];

        if let Some(bio) = &profile.bio {
            lines.push(Line::from(bio.clone()));
            lines.push(Line::from(""));
        }
        if let Some(location) = &profile.location {
            lines.push(Line::from(format!("Location: {location}")));
        }
        if let Some(website) = &profile.website {
            lines.push(Line::from(format!("Website: {website}")));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("Posts: {}", profile.posts_count.unwrap_or(0)),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("   Friends: {}", profile.friends_count.unwrap_or(0)),
                Style::default().fg(Color::White),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press 'e' to edit your profile",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        f.render_widget(paragraph, area);
    }
}
