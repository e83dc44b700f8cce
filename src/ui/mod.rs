//! UI module for rendering the TUI

mod components;
mod forms;

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use components::render_success_dialog;
use forms::draw_registration_form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use signup_tui::state::{FormSnapshot, SubmissionPhase};
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.form.snapshot();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Banner / progress
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

    draw_registration_form(frame, chunks[0], app, &snapshot);
    draw_status_line(frame, chunks[1], app);
    draw_help_line(frame, chunks[2], app, &snapshot);

    if let SubmissionPhase::Succeeded(receipt) = &snapshot.phase {
        render_success_dialog(frame, receipt);
    }
}

/// Progress gauge while submitting, otherwise the error banner if any
fn draw_status_line(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(progress) = app.submit_progress(Instant::now()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
            .ratio(progress.clamp(0.0, 1.0))
            .label("Creating your account...");
        frame.render_widget(gauge, area);
    } else if let Some(banner) = &app.banner {
        let line = Line::from(Span::styled(
            format!(" {} ", banner.message),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn draw_help_line(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);
    let reveal = if app.show_passwords { " hide" } else { " show" };

    let spans = if snapshot.confirmation().is_some() {
        vec![
            Span::styled("Enter/Esc", key),
            Span::styled(" continue  ", text),
            Span::styled("Ctrl+C", key),
            Span::styled(" quit", text),
        ]
    } else {
        vec![
            Span::styled("Tab/Shift+Tab", key),
            Span::styled(" move  ", text),
            Span::styled("←/→", key),
            Span::styled(" choose  ", text),
            Span::styled("Space", key),
            Span::styled(" toggle  ", text),
            Span::styled(SUBMIT_SHORTCUT, key),
            Span::styled(" sign up  ", text),
            Span::styled(REVEAL_SHORTCUT, key),
            Span::styled(format!("{reveal} passwords  "), text),
            Span::styled(RESET_SHORTCUT, key),
            Span::styled(" clear  ", text),
            Span::styled("Ctrl+C", key),
            Span::styled(" quit", text),
        ]
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
