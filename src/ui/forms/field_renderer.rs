//! Field rendering utilities for forms

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one input box
pub struct FieldView<'a> {
    pub label: &'a str,
    pub required: bool,
    /// Text to show; already masked or labelled by the caller
    pub value: String,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Error to show in the bottom border
    pub error: Option<String>,
    /// Right-aligned bottom note, e.g. a character counter
    pub note: Option<String>,
}

/// Draw a form field with its error and note in the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let accent = match (&field.error, field.is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };
    let value_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.as_str(), value_style),
            cursor,
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(note) = &field.note {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {note} "),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        );
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
