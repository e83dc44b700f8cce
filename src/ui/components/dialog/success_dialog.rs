//! Registration confirmation dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};
use signup_tui::account::AccountReceipt;

fn detail<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// Render the success overlay for a created account
pub fn render_success_dialog(frame: &mut Frame, receipt: &AccountReceipt) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "✓ Registration Successful!",
            title_color: Color::Green,
            border_color: Color::Green,
            message: "Welcome aboard! Your account has been created successfully.",
            details: vec![
                detail("Username:   ", receipt.username.clone()),
                detail("Email:      ", receipt.email.clone()),
                detail("Account ID: ", receipt.account_id.to_string()),
            ],
            hint: Some(hint),
            max_width: 64,
        },
    );
}
