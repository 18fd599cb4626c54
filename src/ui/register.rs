//! Registration form rendering

use super::components::render_button;
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FormButton, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const LEFT_FIELDS: [FormField; 5] = [
    FormField::CompanyName,
    FormField::ContactPersonFullName,
    FormField::Country,
    FormField::City,
    FormField::PhoneNumber,
];

const RIGHT_FIELDS: [FormField; 4] = [
    FormField::Industry,
    FormField::Email,
    FormField::Password,
    FormField::ReWritePassword,
];

/// Draw the registration form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons = app.state.form.active_field == FormField::Buttons;
    let border_color = if on_buttons {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Create Account For Company ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(15),   // Field columns
            Constraint::Length(3), // Button row
        ])
        .margin(1)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_field_column(frame, columns[0], app, &LEFT_FIELDS);
    draw_field_column(frame, columns[1], app, &RIGHT_FIELDS);
    draw_button_row(frame, chunks[1], app);
}

fn draw_field_column(frame: &mut Frame, area: Rect, app: &App, fields: &[FormField]) {
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, &field) in chunks.iter().zip(fields) {
        draw_field(
            frame,
            *chunk,
            field.label(),
            &app.state.form.display_value(field),
            field_placeholder(&app.state.form.country, field),
            app.state.form.active_field == field,
        );
    }
}

fn field_placeholder(country: &str, field: FormField) -> &'static str {
    match field {
        FormField::Country => "Select your country (↑/↓)",
        FormField::City if country.is_empty() => "Select a country first",
        FormField::City => "Select your city (↑/↓)",
        FormField::Industry => "Select your industry (↑/↓)",
        _ => "",
    }
}

fn draw_button_row(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons = app.state.form.active_field == FormField::Buttons;
    let selected = app.state.form.selected_button;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        FormButton::Register.label(),
        on_buttons && selected == FormButton::Register,
        Color::Green,
    );
    render_button(
        frame,
        chunks[1],
        FormButton::LogIn.label(),
        on_buttons && selected == FormButton::LogIn,
        Color::Blue,
    );
}
