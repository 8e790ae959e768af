//! Login screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Login screen component
pub struct LoginScreen;

impl LoginScreen {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(50, 50, f.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title("BuddyScript - Login")
            .title_alignment(Alignment::Center);
        f.render_widget(block, area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // welcome
                Constraint::Length(1),
                Constraint::Length(3), // email
                Constraint::Length(3), // password
                Constraint::Length(1),
                Constraint::Min(1), // footer
            ])
            .split(area);

        let welcome = Paragraph::new("Welcome back, log in to your account")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(welcome, inner[0]);

        f.render_widget(field("Email", &app.login_form.email, app.login_form.focus == 0), inner[2]);

        let masked = "*".repeat(app.login_form.password.chars().count());
        f.render_widget(field("Password", &masked, app.login_form.focus == 1), inner[3]);

        let footer_text = if app.auth_in_flight {
            Line::from(Span::styled("Logging in...", Style::default().fg(Color::Yellow)))
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": log in  "),
                Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": next field  "),
                Span::styled("Ctrl+R", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": register  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": quit"),
            ])
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(footer, inner[5]);
    }
}

/// A one-line labeled input box, highlighted when focused
pub(super) fn field<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };
    Paragraph::new(value.to_string())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(label))
}
