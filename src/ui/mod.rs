mod branding;
mod company;
mod theme;
mod widgets;

pub use theme::Theme;
pub use widgets::StatusBarState;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::flow::StepId;
use crate::vim::VimMode;
use crate::wizard::{ContentFocus, WizardApp};

/// Main draw function for the wizard
pub fn draw(frame: &mut Frame, app: &WizardApp) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    // 1-line header, content, 3-line message panel, 1-line status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_content(frame, chunks[1], app);
    draw_message(frame, chunks[2], app);
    draw_status_bar(frame, chunks[3], app);

    if app.show_help {
        draw_help(frame, app);
    }
}

/// Header bar (1 line, no borders)
fn draw_header(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let title = format!(
        " {} (v{}) ",
        app.config.general.title,
        env!("CARGO_PKG_VERSION")
    );
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );
    frame.render_widget(
        Paragraph::new(format!("{} ", app.config.general.subtitle))
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_content(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 8 || area.width < 40 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    draw_step_indicator(frame, chunks[0], app);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    if app.completed {
        draw_finished(frame, inner, app);
        return;
    }

    match app.current_step() {
        StepId::CompanyInfo => company::draw_company_form(frame, inner, app),
        StepId::Branding => branding::draw_branding_form(frame, inner, app),
    }
}

/// Progress bars flanking "Step N of M"
fn draw_step_indicator(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let (idx, total) = app.flow.position();
    let label = format!("  Step {} of {}  ", idx + 1, total);

    let bar_width = (area.width as usize).saturating_sub(label.len() + 4) / 2;
    let mut spans = Vec::new();
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "━".repeat(bar_width),
        app.theme.primary_style(),
    ));
    spans.push(Span::styled(label, app.theme.muted_style()));
    spans.push(Span::styled(
        "━".repeat(bar_width),
        if idx + 1 == total || app.completed {
            app.theme.primary_style()
        } else {
            app.theme.muted_style()
        },
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Shared step heading: centered title and subtitle
pub(crate) fn draw_step_heading(frame: &mut Frame, area: Rect, app: &WizardApp, step: StepId) {
    frame.render_widget(
        Paragraph::new(step.title())
            .style(app.theme.style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Rect::new(area.x, area.y, area.width, 1),
    );
    frame.render_widget(
        Paragraph::new(step.subtitle())
            .style(app.theme.muted_style())
            .alignment(Alignment::Center),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

/// Shared single-line input field with a label and vim-style cursor
pub(crate) fn draw_input_field(
    frame: &mut Frame,
    area: Rect,
    app: &WizardApp,
    label: &str,
    buffer: &crate::vim::InputBuffer,
    placeholder: &str,
    field_idx: usize,
) {
    let is_focused = app.content_focus == ContentFocus::InputField(field_idx);
    let is_insert = is_focused && app.vim_mode == VimMode::Insert;

    let label_style = if is_focused {
        app.theme.primary_style()
    } else {
        app.theme.style()
    };
    frame.render_widget(
        Paragraph::new(label).style(label_style),
        Rect::new(area.x, area.y, 18.min(area.width), 1),
    );

    let field_x = area.x + 18;
    let field_width = area.width.saturating_sub(18);
    let field_area = Rect::new(field_x, area.y, field_width, 1);
    let content = buffer.content();

    if is_insert {
        // Insert mode: bar cursor
        let cursor_pos = buffer.cursor();
        let before: String = content.chars().take(cursor_pos).collect();
        let after: String = content.chars().skip(cursor_pos).collect();
        let line = Line::from(vec![
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
        frame.render_widget(Paragraph::new(line), field_area);
    } else if is_focused {
        // Normal mode: block cursor
        let cursor_pos = buffer.cursor();
        let chars: Vec<char> = content.chars().collect();
        let mut spans = Vec::new();
        for (i, ch) in chars.iter().enumerate() {
            let style = if i == cursor_pos {
                app.theme.style().add_modifier(Modifier::REVERSED)
            } else {
                app.theme.style()
            };
            spans.push(Span::styled(ch.to_string(), style));
        }
        if cursor_pos >= chars.len() {
            spans.push(Span::styled(
                " ",
                app.theme.style().add_modifier(Modifier::REVERSED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), field_area);
    } else {
        let display = if content.is_empty() {
            placeholder
        } else {
            content
        };
        let style = if content.is_empty() {
            app.theme.muted_style()
        } else {
            app.theme.style()
        };
        frame.render_widget(Paragraph::new(display).style(style), field_area);
    }
}

fn draw_finished(frame: &mut Frame, area: Rect, app: &WizardApp) {
    if area.height < 8 {
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            "You're all set!",
            app.theme.success_style().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Your workspace has been configured:",
            app.theme.style(),
        )),
        Line::default(),
        summary_line(app, "Company", app.company_name.content()),
        summary_line(app, "Website", app.company_website.content()),
        summary_line(app, "Location", app.location.as_deref().unwrap_or("-")),
    ];

    let logo = app
        .logo_preview
        .as_ref()
        .map(|p| format!("{} ({}, {})", p.file_name, p.kind.display_name(), p.display_size()));
    lines.push(summary_line(app, "Logo", logo.as_deref().unwrap_or("-")));

    let description = app.description.content();
    lines.push(summary_line(
        app,
        "Description",
        if description.is_empty() { "-" } else { description },
    ));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Enter to close",
        app.theme.muted_style(),
    )));

    let height = lines.len() as u16;
    let top = area.y + (area.height.saturating_sub(height)) / 2;
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect::new(area.x, top, area.width, height.min(area.height)),
    );
}

fn summary_line<'a>(app: &WizardApp, label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), app.theme.muted_style()),
        Span::styled(value.to_string(), app.theme.style()),
    ])
}

fn draw_message(frame: &mut Frame, area: Rect, app: &WizardApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(ref message) = app.message {
        let style = if message.is_error {
            app.theme.error_style()
        } else {
            app.theme.success_style()
        };
        frame.render_widget(
            Paragraph::new(message.text.as_str()).style(style),
            inner,
        );
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &WizardApp) {
    // Command mode shows the command line itself
    if app.vim_mode == VimMode::Command {
        let line = Line::from(vec![
            Span::styled(":", app.theme.mode_style("COMMAND")),
            Span::styled(app.command_buffer.content().to_string(), app.theme.style()),
            Span::styled("|", app.theme.primary_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mode = app.vim_mode.display_name();
    let left = Line::from(vec![
        Span::styled(format!(" {mode} "), app.theme.mode_style(mode)),
        Span::styled(
            format!(" {}", app.status_bar.left_hint),
            app.theme.muted_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    frame.render_widget(
        Paragraph::new(format!("{} ", app.status_bar.right_hint))
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_help(frame: &mut Frame, app: &WizardApp) {
    let area = frame.area();
    let width = 52.min(area.width.saturating_sub(4));
    let height = 14.min(area.height.saturating_sub(2));
    let popup = Rect::new(
        (area.width - width) / 2,
        (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.primary_style())
        .title(" Help ");
    let inner = block.inner(popup);
    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let entries = [
        ("j/k, Tab", "move between fields"),
        ("i", "edit the focused field"),
        ("Esc", "back to normal mode"),
        ("Enter", "next field / submit step"),
        (":next", "validate and go to the next step"),
        (":back", "return to the previous step"),
        (":step <n>", "jump to a step by name or number"),
        (":finish", "submit the final step"),
        (":quit", "leave the wizard"),
        ("?", "this help"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<12}"), app.theme.secondary_style()),
                Span::styled((*what).to_string(), app.theme.style()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
