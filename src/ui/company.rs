use ratatui::{prelude::*, widgets::Paragraph};

use crate::flow::StepId;
use crate::vim::VimMode;
use crate::wizard::{ContentFocus, WizardApp};

use super::{draw_input_field, draw_step_heading};

pub fn draw_company_form(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 10 || area.width < 40 {
        return;
    }

    draw_step_heading(frame, area, app, StepId::CompanyInfo);

    let form_x = area.x + 2;
    let form_width = area.width.saturating_sub(4);
    let mut y = area.y + 3;

    draw_input_field(
        frame,
        Rect::new(form_x, y, form_width, 1),
        app,
        "Company Name*",
        &app.company_name,
        "Enter company name",
        0,
    );
    y += 2;

    draw_input_field(
        frame,
        Rect::new(form_x, y, form_width, 1),
        app,
        "Company Website*",
        &app.company_website,
        "Enter website",
        1,
    );
    y += 2;

    draw_location_field(frame, Rect::new(form_x, y, form_width, 1), app);
    y += 2;

    if app.content_focus == ContentFocus::Picker {
        let list_area = Rect::new(
            form_x,
            y,
            form_width,
            area.y + area.height - y,
        );
        draw_country_picker(frame, list_area, app);
    } else {
        draw_submit_hint(frame, area, app, " [Enter] Next ");
    }
}

/// The Location field shows the selection; editing opens the picker
fn draw_location_field(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let is_focused = app.content_focus == ContentFocus::InputField(2)
        || app.content_focus == ContentFocus::Picker;

    let label_style = if is_focused {
        app.theme.primary_style()
    } else {
        app.theme.style()
    };
    frame.render_widget(
        Paragraph::new("Location*").style(label_style),
        Rect::new(area.x, area.y, 18.min(area.width), 1),
    );

    let value_area = Rect::new(area.x + 18, area.y, area.width.saturating_sub(18), 1);
    match app.location {
        Some(ref country) => {
            frame.render_widget(
                Paragraph::new(country.as_str()).style(if is_focused {
                    app.theme.primary_style()
                } else {
                    app.theme.style()
                }),
                value_area,
            );
        }
        None => {
            frame.render_widget(
                Paragraph::new(if is_focused {
                    "Select a country [Enter]"
                } else {
                    "Select a country"
                })
                .style(app.theme.muted_style()),
                value_area,
            );
        }
    }
}

/// Filterable country list, shown while the Location picker is open
fn draw_country_picker(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 3 {
        return;
    }

    let is_insert = app.vim_mode == VimMode::Insert;

    // Filter input
    let filter_label = "Filter: ";
    frame.render_widget(
        Paragraph::new(filter_label).style(app.theme.style()),
        Rect::new(area.x, area.y, filter_label.len() as u16, 1),
    );

    let filter_x = area.x + filter_label.len() as u16;
    let filter_width = area.width.saturating_sub(filter_label.len() as u16);
    let filter_content = app.picker_filter.content();

    if is_insert {
        let cursor_pos = app.picker_filter.cursor();
        let before: String = filter_content.chars().take(cursor_pos).collect();
        let after: String = filter_content.chars().skip(cursor_pos).collect();
        let line = Line::from(vec![
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(filter_x, area.y, filter_width, 1),
        );
    } else {
        let display = if filter_content.is_empty() {
            "(type to filter)".to_string()
        } else {
            filter_content.to_string()
        };
        frame.render_widget(
            Paragraph::new(display).style(app.theme.muted_style()),
            Rect::new(filter_x, area.y, filter_width, 1),
        );
    }

    // Country list with scroll
    let filtered = app.filtered_picker_items();
    let list_y = area.y + 1;
    let list_height = (area.height - 1) as usize;

    let scroll_offset = if app.picker_selected >= list_height {
        app.picker_selected - list_height + 1
    } else {
        0
    };

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new("  No results").style(app.theme.muted_style()),
            Rect::new(area.x, list_y, area.width, 1),
        );
        return;
    }

    for (i, item) in filtered
        .iter()
        .skip(scroll_offset)
        .take(list_height)
        .enumerate()
    {
        let idx = i + scroll_offset;
        let is_selected = idx == app.picker_selected;

        let prefix = if is_selected { ">" } else { " " };
        let style = if is_selected {
            app.theme.primary_style().add_modifier(Modifier::BOLD)
        } else {
            app.theme.style()
        };

        frame.render_widget(
            Paragraph::new(format!("{prefix} {item}")).style(style),
            Rect::new(area.x, list_y + i as u16, area.width, 1),
        );
    }
}

/// Action hint at the bottom of the form
pub(super) fn draw_submit_hint(frame: &mut Frame, area: Rect, app: &WizardApp, text: &str) {
    let y = area.y + area.height.saturating_sub(2);
    frame.render_widget(
        Paragraph::new(text.to_string()).style(
            app.theme
                .primary_style()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Rect::new(area.x + 2, y, (text.len() as u16).min(area.width), 1),
    );
}
