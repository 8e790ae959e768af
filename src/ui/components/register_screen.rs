//! Registration screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use super::login_screen::field;

/// Registration screen component
pub struct RegisterScreen;

impl RegisterScreen {
    pub fn render(f: &mut Frame, app: &App) {
        let area = LayoutManager::centered_rect(50, 80, f.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title("BuddyScript - Create Account")
            .title_alignment(Alignment::Center);
        f.render_widget(block, area);

        let inner = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // email
                Constraint::Length(3), // first name
                Constraint::Length(3), // last name
                Constraint::Length(3), // password
                Constraint::Length(3), // confirm password
                Constraint::Length(1),
                Constraint::Min(1), // footer
            ])
            .split(area);

        let form = &app.register_form;
        f.render_widget(field("Email", &form.email, form.focus == 0), inner[0]);
        f.render_widget(field("First name", &form.first_name, form.focus == 1), inner[1]);
        f.render_widget(field("Last name", &form.last_name, form.focus == 2), inner[2]);

        let masked = "*".repeat(form.password.chars().count());
        f.render_widget(field("Password", &masked, form.focus == 3), inner[3]);
        let masked2 = "*".repeat(form.password2.chars().count());
        f.render_widget(field("Confirm password", &masked2, form.focus == 4), inner[4]);

        let footer_text = if app.auth_in_flight {
            Line::from(Span::styled("Creating account...", Style::default().fg(Color::Yellow)))
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": register  "),
                Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": next field  "),
                Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(": back to login"),
            ])
        };
        let footer = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(footer, inner[6]);
    }
}
