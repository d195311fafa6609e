use ratatui::{prelude::*, widgets::Paragraph};

use crate::flow::StepId;
use crate::strings;
use crate::wizard::WizardApp;

use super::company::draw_submit_hint;
use super::{draw_input_field, draw_step_heading};

pub fn draw_branding_form(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 12 || area.width < 40 {
        return;
    }

    draw_step_heading(frame, area, app, StepId::Branding);

    let form_x = area.x + 2;
    let form_width = area.width.saturating_sub(4);
    let mut y = area.y + 3;

    draw_input_field(
        frame,
        Rect::new(form_x, y, form_width, 1),
        app,
        "Logo (optional)",
        &app.logo_path,
        "Path to a JPG or PNG file",
        0,
    );
    y += 1;

    draw_logo_preview(frame, Rect::new(form_x + 18, y, form_width.saturating_sub(18), 4), app);
    y += 5;

    draw_input_field(
        frame,
        Rect::new(form_x, y, form_width, 1),
        app,
        "Description",
        &app.description,
        "Enter a description (optional)",
        1,
    );
    y += 1;

    let max = app.config.branding.max_description_len;
    frame.render_widget(
        Paragraph::new(format!("{}/{max} characters", app.description.len()))
            .style(app.theme.muted_style()),
        Rect::new(form_x + 18, y, form_width.saturating_sub(18), 1),
    );

    draw_submit_hint(frame, area, app, " [Enter] Finish ");
}

/// File metadata when a logo is set, otherwise an initials badge derived
/// from the company name.
fn draw_logo_preview(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 3 {
        return;
    }

    match app.logo_preview {
        Some(ref preview) => {
            let lines = vec![
                Line::from(Span::styled(
                    preview.file_name.clone(),
                    app.theme.style().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{}, {}", preview.kind.display_name(), preview.display_size()),
                    app.theme.muted_style(),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        None => {
            let name = app.company_name.content();
            let badge = match strings::initials(name) {
                s if s.is_empty() => "NA".to_string(),
                s => s,
            };

            // Small circle-ish badge, like the avatar placeholder
            let lines = vec![
                Line::from(Span::styled("╭────╮", app.theme.secondary_style())),
                Line::from(vec![
                    Span::styled("│", app.theme.secondary_style()),
                    Span::styled(
                        format!(" {badge:<2} "),
                        app.theme.secondary_style().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("│", app.theme.secondary_style()),
                ]),
                Line::from(Span::styled("╰────╯", app.theme.secondary_style())),
                Line::from(Span::styled("JPG or PNG", app.theme.muted_style())),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
    }
}
