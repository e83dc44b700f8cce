//! Registration form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::{App, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Gauge},
    Frame,
};
use signup_tui::state::{choice_label, Field, FieldKind, FormSnapshot, SubmissionPhase};
use signup_tui::validation::rules::MAX_ABOUT_ME_LENGTH;
use signup_tui::validation::StrengthLevel;

const LEFT_COLUMN: [Field; 6] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Username,
    Field::Password,
    Field::ConfirmPassword,
];

/// Draw both form columns and the submit button
pub fn draw_registration_form(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let block = Block::default()
        .title(" Create Your Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    draw_account_column(frame, columns[0], app, snapshot);
    draw_profile_column(frame, columns[1], app, snapshot);
}

fn draw_account_column(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let mut constraints: Vec<Constraint> =
        LEFT_COLUMN.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(3)); // Strength meter
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, chunk) in LEFT_COLUMN.into_iter().zip(chunks.iter()) {
        draw_form_field(frame, *chunk, field, app, snapshot);
    }
    draw_strength_meter(frame, chunks[LEFT_COLUMN.len()], snapshot);
}

fn draw_profile_column(frame: &mut Frame, area: Rect, app: &App, snapshot: &FormSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Birth date
            Constraint::Length(3),             // Gender
            Constraint::Length(3),             // Profession
            Constraint::Min(5),                // About me
            Constraint::Length(3),             // Terms
            Constraint::Length(BUTTON_HEIGHT), // Sign up
        ])
        .split(area);

    let fields = [
        Field::BirthDate,
        Field::Gender,
        Field::Profession,
        Field::AboutMe,
        Field::Terms,
    ];
    for (field, chunk) in fields.into_iter().zip(chunks.iter()) {
        draw_form_field(frame, *chunk, field, app, snapshot);
    }

    let submitting = snapshot.phase == SubmissionPhase::Submitting;
    render_button(
        frame,
        chunks[5],
        if submitting { "Signing Up..." } else { "Sign Up" },
        app.focus == Focus::SubmitButton,
        snapshot.is_submit_enabled(),
        Color::Green,
    );
}

fn draw_form_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    app: &App,
    snapshot: &FormSnapshot,
) {
    let is_active = app.focus == Focus::Field(field);
    let note = (field == Field::AboutMe)
        .then(|| format!("{}/{MAX_ABOUT_ME_LENGTH}", snapshot.about_me_count()));

    draw_field(
        frame,
        area,
        &FieldView {
            label: field.label(),
            required: field.is_required(),
            value: display_value(field, snapshot, app.show_passwords),
            placeholder: placeholder(field),
            is_active,
            is_multiline: field.kind() == FieldKind::Multiline,
            error: snapshot.visible_error(field).map(ToString::to_string),
            note,
        },
    );
}

/// What the input box shows for a field's raw value
pub(crate) fn display_value(field: Field, snapshot: &FormSnapshot, show_passwords: bool) -> String {
    let raw = snapshot.values.text(field);
    match field.kind() {
        FieldKind::Secret if !show_passwords => "•".repeat(raw.chars().count()),
        FieldKind::Choice => choice_label(field, raw)
            .map(|label| format!("◀ {label} ▶"))
            .unwrap_or_default(),
        FieldKind::Checkbox => {
            let mark = if snapshot.values.terms { "x" } else { " " };
            format!("[{mark}] I'm accepting Terms and Conditions")
        }
        _ => raw.to_string(),
    }
}

fn placeholder(field: Field) -> &'static str {
    match field.kind() {
        FieldKind::Date => "YYYY-MM-DD",
        FieldKind::Choice => "←/→ to choose",
        FieldKind::Multiline => "Tell us a little about yourself (optional)",
        _ => "",
    }
}

fn draw_strength_meter(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot) {
    let (ratio, color) = strength_bar(snapshot.strength.level(&snapshot.values.password));
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Password Strength ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(Span::styled(
            snapshot.strength_hint(),
            Style::default().fg(Color::White),
        ));
    frame.render_widget(gauge, area);
}

/// Fill ratio and color of the strength meter
pub(crate) fn strength_bar(level: StrengthLevel) -> (f64, Color) {
    match level {
        StrengthLevel::Empty => (0.0, Color::DarkGray),
        StrengthLevel::Weak => (0.25, Color::Red),
        StrengthLevel::VeryStrong => (1.0, Color::Green),
    }
}
