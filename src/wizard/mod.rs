//! Wizard application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::config::OnboardConfig;
use crate::flow::{StepFlow, StepId, StepResult, WIZARD_STEPS};
use crate::logo::{self, LogoPreview};
use crate::ui::{StatusBarState, Theme};
use crate::vim::{InputBuffer, ModeAction, VimMode};

/// What is currently focused in the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFocus {
    /// Focused on an input field of the current step
    InputField(usize),
    /// Focused on the country picker list
    Picker,
}

/// Message displayed to the user
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

/// Main wizard application state
pub struct WizardApp {
    pub config: OnboardConfig,
    pub theme: Theme,

    // Vim mode state
    pub vim_mode: VimMode,
    pub command_buffer: InputBuffer,

    // Step sequencing
    pub flow: StepFlow,
    pub step_results: Vec<StepResult>,

    // Field focus within the current step
    pub content_focus: ContentFocus,

    // Company info form
    pub company_name: InputBuffer,
    pub company_website: InputBuffer,
    pub location: Option<String>,
    pub picker_selected: usize,
    pub picker_filter: InputBuffer,

    // Branding form
    pub logo_path: InputBuffer,
    pub logo_preview: Option<LogoPreview>,
    pub description: InputBuffer,

    // UI state
    pub message: Option<Message>,
    pub show_help: bool,
    pub should_exit: bool,
    pub completed: bool,
    pub status_bar: StatusBarState,
}

impl WizardApp {
    /// Build the app, optionally resuming at `resume` (saved session or
    /// `--step` override).
    pub fn new(config: OnboardConfig, resume: Option<StepId>) -> Self {
        let flow = StepFlow::new(&WIZARD_STEPS, resume);
        let mut app = Self {
            config,
            theme: Theme::default(),
            vim_mode: VimMode::Normal,
            command_buffer: InputBuffer::new(),
            flow,
            step_results: vec![StepResult::Pending; WIZARD_STEPS.len()],
            content_focus: ContentFocus::InputField(0),
            company_name: InputBuffer::new(),
            company_website: InputBuffer::new(),
            location: None,
            picker_selected: 0,
            picker_filter: InputBuffer::new(),
            logo_path: InputBuffer::new(),
            logo_preview: None,
            description: InputBuffer::new(),
            message: None,
            show_help: false,
            should_exit: false,
            completed: false,
            status_bar: StatusBarState::default(),
        };
        app.update_status_bar();
        app
    }

    pub fn current_step(&self) -> StepId {
        self.flow.current()
    }

    /// Number of input fields on the current step
    fn field_count(&self) -> usize {
        match self.current_step() {
            StepId::CompanyInfo => 3,
            StepId::Branding => 2,
        }
    }

    /// True when the focused field is the Location picker trigger
    fn on_location_field(&self) -> bool {
        self.current_step() == StepId::CompanyInfo
            && self.content_focus == ContentFocus::InputField(2)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear the previous message on any key
        if self.message.is_some() {
            self.message = None;
        }

        // Help popup swallows keys until dismissed
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            self.update_status_bar();
            return;
        }

        // Completion screen: any of Enter/q leaves
        if self.completed {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                self.should_exit = true;
            }
            return;
        }

        match self.vim_mode {
            VimMode::Normal => self.handle_normal_mode(key),
            VimMode::Insert => self.handle_insert_mode(key),
            VimMode::Command => self.handle_command_mode(key),
        }

        self.update_status_bar();
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        match key.code {
            // Enter command mode
            KeyCode::Char(':') => {
                self.vim_mode = self.vim_mode.transition(ModeAction::EnterCommand);
                self.command_buffer.clear();
            }

            // Field navigation
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.focus_next_field();
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev_field();
            }

            // Enter insert mode on the focused field
            KeyCode::Char('i') | KeyCode::Char('a') => {
                if self.on_location_field() {
                    self.open_picker();
                } else {
                    self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
                }
            }

            KeyCode::Enter => {
                match self.content_focus {
                    ContentFocus::Picker => self.select_picker_item(),
                    ContentFocus::InputField(_) if self.on_location_field() => {
                        self.open_picker();
                    }
                    ContentFocus::InputField(_) => {
                        self.vim_mode = self.vim_mode.transition(ModeAction::EnterInsert);
                    }
                }
            }

            KeyCode::Esc => {
                if self.content_focus == ContentFocus::Picker {
                    self.close_picker();
                }
            }

            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = true;
            }

            _ => {}
        }
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                if self.content_focus == ContentFocus::Picker {
                    self.close_picker();
                }
            }
            KeyCode::Enter => match self.content_focus {
                ContentFocus::Picker => {
                    self.select_picker_item();
                    self.vim_mode = VimMode::Normal;
                }
                ContentFocus::InputField(field) => {
                    self.handle_field_enter(field);
                }
            },
            KeyCode::Tab => {
                self.vim_mode = VimMode::Normal;
                self.focus_next_field();
            }
            KeyCode::BackTab => {
                self.vim_mode = VimMode::Normal;
                self.focus_prev_field();
            }
            KeyCode::Down => {
                if self.content_focus == ContentFocus::Picker {
                    let count = self.filtered_picker_items().len();
                    if self.picker_selected + 1 < count {
                        self.picker_selected += 1;
                    }
                }
            }
            KeyCode::Up => {
                if self.content_focus == ContentFocus::Picker {
                    self.picker_selected = self.picker_selected.saturating_sub(1);
                }
            }
            KeyCode::Backspace => {
                if self.content_focus == ContentFocus::Picker {
                    self.picker_filter.delete_back();
                    self.picker_selected = 0;
                } else if let Some(buffer) = self.current_input_buffer() {
                    buffer.delete_back();
                }
            }
            KeyCode::Delete => {
                if let Some(buffer) = self.current_input_buffer() {
                    buffer.delete_forward();
                }
            }
            KeyCode::Left => {
                if let Some(buffer) = self.current_input_buffer() {
                    buffer.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(buffer) = self.current_input_buffer() {
                    buffer.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(buffer) = self.current_input_buffer() {
                    buffer.move_start();
                }
            }
            KeyCode::End => {
                if let Some(buffer) = self.current_input_buffer() {
                    buffer.move_end();
                }
            }
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match c {
                        'u' => {
                            if let Some(buffer) = self.current_input_buffer() {
                                buffer.clear();
                            }
                        }
                        'a' => {
                            if let Some(buffer) = self.current_input_buffer() {
                                buffer.move_start();
                            }
                        }
                        'e' => {
                            if let Some(buffer) = self.current_input_buffer() {
                                buffer.move_end();
                            }
                        }
                        _ => {}
                    }
                } else if self.content_focus == ContentFocus::Picker {
                    self.picker_filter.insert(c);
                    self.picker_selected = 0;
                } else if let Some(buffer) = self.current_input_buffer() {
                    buffer.insert(c);
                }
            }
            _ => {}
        }
    }

    /// Enter inside an input field: move on, or submit on the last field.
    fn handle_field_enter(&mut self, field: usize) {
        // Leaving the logo path field refreshes the preview
        if self.current_step() == StepId::Branding && field == 0 {
            self.refresh_logo_preview();
        }

        if self.on_location_field() {
            self.open_picker();
            return;
        }

        if field + 1 < self.field_count() {
            self.content_focus = ContentFocus::InputField(field + 1);
            if self.on_location_field() {
                self.vim_mode = VimMode::Normal;
            }
        } else {
            self.vim_mode = VimMode::Normal;
            self.submit_step();
        }
    }

    fn handle_command_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let cmd = self.command_buffer.content().to_string();
                self.vim_mode = self.vim_mode.transition(ModeAction::Execute);
                self.command_buffer.clear();
                self.execute_command(&cmd);
            }
            KeyCode::Backspace => {
                if self.command_buffer.is_empty() {
                    self.vim_mode = self.vim_mode.transition(ModeAction::Escape);
                } else {
                    self.command_buffer.delete_back();
                }
            }
            KeyCode::Char(c) => {
                self.command_buffer.insert(c);
            }
            _ => {}
        }
    }

    fn execute_command(&mut self, cmd: &str) {
        let cmd = cmd.trim().to_lowercase();
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let cmd_name = parts.first().copied().unwrap_or("");

        match cmd_name {
            "next" | "n" | "submit" | "finish" => {
                self.submit_step();
            }
            "back" | "b" => {
                let (idx, _) = self.flow.position();
                match idx.checked_sub(1).and_then(|i| WIZARD_STEPS.get(i)) {
                    Some(prev) => self.jump_to_step(*prev),
                    None => self.set_error("Already on the first step".to_string()),
                }
            }
            "step" | "goto" => match parts.get(1).copied().and_then(StepId::from_name) {
                Some(target) => self.jump_to_step(target),
                None => self.set_error("Usage: :step <name|number>".to_string()),
            },
            "help" | "h" => {
                self.show_help = true;
            }
            "quit" | "q" => {
                self.should_exit = true;
            }
            _ => {
                self.set_error(format!("Unknown command: {cmd_name}"));
            }
        }
    }

    /// Reposition via an external jump request (`:back`, `:step`).
    pub fn jump_to_step(&mut self, target: StepId) {
        self.flow.observe_external_target(target);
        self.completed = self.flow.is_finished();
        self.load_step_content();
    }

    fn load_step_content(&mut self) {
        self.content_focus = ContentFocus::InputField(0);
        self.picker_filter.clear();
        self.picker_selected = 0;
        self.vim_mode = VimMode::Normal;
    }

    fn focus_next_field(&mut self) {
        if let ContentFocus::InputField(field) = self.content_focus {
            if field + 1 < self.field_count() {
                self.content_focus = ContentFocus::InputField(field + 1);
            }
        }
    }

    fn focus_prev_field(&mut self) {
        match self.content_focus {
            ContentFocus::InputField(field) if field > 0 => {
                self.content_focus = ContentFocus::InputField(field - 1);
            }
            ContentFocus::Picker => self.close_picker(),
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        self.content_focus = ContentFocus::Picker;
        self.picker_filter.clear();
        self.picker_selected = 0;
        self.vim_mode = VimMode::Insert;
    }

    fn close_picker(&mut self) {
        self.content_focus = ContentFocus::InputField(2);
        self.vim_mode = VimMode::Normal;
    }

    fn select_picker_item(&mut self) {
        let filtered = self.filtered_picker_items();
        if let Some(item) = filtered.get(self.picker_selected) {
            let item = item.clone();
            self.set_info(format!("Location selected: {item}"));
            self.location = Some(item);
        }
        self.close_picker();
    }

    /// Input buffer for the focused field, if it is a text field. The
    /// Location field is picker-backed and has no buffer of its own.
    fn current_input_buffer(&mut self) -> Option<&mut InputBuffer> {
        match self.content_focus {
            ContentFocus::InputField(idx) => match self.current_step() {
                StepId::CompanyInfo => match idx {
                    0 => Some(&mut self.company_name),
                    1 => Some(&mut self.company_website),
                    _ => None,
                },
                StepId::Branding => match idx {
                    0 => Some(&mut self.logo_path),
                    1 => Some(&mut self.description),
                    _ => None,
                },
            },
            ContentFocus::Picker => Some(&mut self.picker_filter),
        }
    }

    pub fn filtered_picker_items(&self) -> Vec<String> {
        let filter = self.picker_filter.content().to_lowercase();
        if filter.is_empty() {
            self.config.company.countries.clone()
        } else {
            self.config
                .company
                .countries
                .iter()
                .filter(|item| item.to_lowercase().contains(&filter))
                .cloned()
                .collect()
        }
    }

    /// Validate and submit the current step; on success the flow advances.
    pub fn submit_step(&mut self) {
        match self.current_step() {
            StepId::CompanyInfo => {
                if !self.validate_company_form() {
                    return;
                }
                info!(
                    company_name = self.company_name.content(),
                    company_website = self.company_website.content(),
                    location = self.location.as_deref().unwrap_or_default(),
                    "company info submitted"
                );
                let (idx, _) = self.flow.position();
                self.step_results[idx] = StepResult::Completed;
                self.flow.advance();
                self.load_step_content();
                self.set_info("Company information saved".to_string());
            }
            StepId::Branding => {
                if !self.validate_branding_form() {
                    return;
                }
                info!(
                    logo = self.logo_path.content(),
                    description = self.description.content(),
                    "branding submitted"
                );
                let (idx, _) = self.flow.position();
                self.step_results[idx] = StepResult::Completed;
                self.flow.advance();
                self.completed = self.flow.is_finished();
            }
        }
    }

    pub fn validate_company_form(&mut self) -> bool {
        if self.company_name.content().trim().is_empty() {
            self.set_error("Company Name is required".to_string());
            return false;
        }

        let website = self.company_website.content().trim();
        if website.is_empty() {
            self.set_error("Company Website is required".to_string());
            return false;
        }
        if website.contains(char::is_whitespace) || !website.contains('.') {
            self.set_error("Website must look like a domain or URL".to_string());
            return false;
        }

        if self.location.is_none() {
            self.set_error("Location is required".to_string());
            return false;
        }

        true
    }

    pub fn validate_branding_form(&mut self) -> bool {
        if !self.logo_path.is_empty() && !self.refresh_logo_preview() {
            return false;
        }

        let max = self.config.branding.max_description_len;
        if self.description.len() > max {
            self.set_error(format!("Description must be {max} characters or less"));
            return false;
        }

        true
    }

    /// Re-inspect the logo path, updating the preview. Returns false (with an
    /// error message) when the path is set but not a usable image.
    fn refresh_logo_preview(&mut self) -> bool {
        let raw = self.logo_path.content().trim().to_string();
        if raw.is_empty() {
            self.logo_preview = None;
            return true;
        }
        match logo::inspect(std::path::Path::new(&raw)) {
            Ok(preview) => {
                self.logo_preview = Some(preview);
                true
            }
            Err(e) => {
                self.logo_preview = None;
                self.set_error(format!("Logo: {e}"));
                false
            }
        }
    }

    pub fn set_error(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: true,
        });
    }

    pub fn set_info(&mut self, text: String) {
        self.message = Some(Message {
            text,
            is_error: false,
        });
    }

    pub fn tick(&mut self) {
        self.update_status_bar();
    }

    /// Update status bar hints for the current state
    pub fn update_status_bar(&mut self) {
        if self.completed {
            self.status_bar = StatusBarState::finished();
            return;
        }
        if self.vim_mode == VimMode::Command {
            self.status_bar = StatusBarState::command_mode();
            return;
        }
        self.status_bar = match self.content_focus {
            ContentFocus::Picker => {
                if self.vim_mode == VimMode::Insert {
                    StatusBarState::picker_insert()
                } else {
                    StatusBarState::picker_normal()
                }
            }
            ContentFocus::InputField(_) => {
                if self.vim_mode == VimMode::Insert {
                    StatusBarState::form_insert()
                } else if self.flow.is_terminal() {
                    StatusBarState::form_final_step()
                } else {
                    StatusBarState::form_normal()
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> WizardApp {
        WizardApp::new(OnboardConfig::default(), None)
    }

    fn type_text(app: &mut WizardApp, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn starts_on_company_info() {
        let app = app();
        assert_eq!(app.current_step(), StepId::CompanyInfo);
        assert_eq!(app.content_focus, ContentFocus::InputField(0));
    }

    #[test]
    fn resumes_at_saved_step() {
        let app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        assert_eq!(app.current_step(), StepId::Branding);
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "Acme");
        assert_eq!(app.company_name.content(), "Acme");
    }

    #[test]
    fn typing_reaches_each_text_field() {
        let mut app = app();
        app.content_focus = ContentFocus::InputField(1);
        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "acme.io");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.company_website.content(), "acme.i");

        let mut app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "logo.png");
        assert_eq!(app.logo_path.content(), "logo.png");

        app.handle_key(key(KeyCode::Esc));
        app.content_focus = ContentFocus::InputField(1);
        app.handle_key(key(KeyCode::Char('i')));
        type_text(&mut app, "We make things");
        assert_eq!(app.description.content(), "We make things");
    }

    #[test]
    fn submit_rejects_empty_company_name() {
        let mut app = app();
        app.submit_step();
        assert_eq!(app.current_step(), StepId::CompanyInfo);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn submit_rejects_bad_website() {
        let mut app = app();
        app.company_name.set("Acme");
        app.company_website.set("not a url");
        app.location = Some("Japan".to_string());
        app.submit_step();
        assert_eq!(app.current_step(), StepId::CompanyInfo);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn valid_company_info_advances_to_branding() {
        let mut app = app();
        app.company_name.set("Acme Corp");
        app.company_website.set("acme.example.com");
        app.location = Some("Japan".to_string());
        app.submit_step();

        assert_eq!(app.current_step(), StepId::Branding);
        assert_eq!(app.step_results[0], StepResult::Completed);
        assert!(!app.completed);
    }

    #[test]
    fn branding_is_optional_and_finishes() {
        let mut app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        app.submit_step();

        assert!(app.completed);
        assert!(app.flow.is_finished());
        assert_eq!(app.step_results[1], StepResult::Completed);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        let max = app.config.branding.max_description_len;
        app.description.set(&"x".repeat(max + 1));
        app.submit_step();

        assert!(!app.completed);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn missing_logo_file_is_rejected() {
        let mut app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        app.logo_path.set("/definitely/not/here.png");
        app.submit_step();

        assert!(!app.completed);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn picker_filters_and_selects_location() {
        let mut app = app();
        app.content_focus = ContentFocus::InputField(2);
        app.handle_key(key(KeyCode::Enter)); // opens picker in insert mode
        assert_eq!(app.content_focus, ContentFocus::Picker);

        type_text(&mut app, "jap");
        assert_eq!(app.filtered_picker_items(), vec!["Japan".to_string()]);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.location.as_deref(), Some("Japan"));
        assert_eq!(app.content_focus, ContentFocus::InputField(2));
    }

    #[test]
    fn step_command_jumps_between_steps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "step 2");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_step(), StepId::Branding);

        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "back");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_step(), StepId::CompanyInfo);
    }

    #[test]
    fn back_command_works_each_time_a_step_is_resubmitted() {
        let mut app = app();
        app.company_name.set("Acme Corp");
        app.company_website.set("acme.example.com");
        app.location = Some("Japan".to_string());

        let back = |app: &mut WizardApp| {
            app.handle_key(key(KeyCode::Char(':')));
            type_text(app, "back");
            app.handle_key(key(KeyCode::Enter));
        };

        app.submit_step();
        assert_eq!(app.current_step(), StepId::Branding);
        back(&mut app);
        assert_eq!(app.current_step(), StepId::CompanyInfo);

        // Round two: submitting again must not swallow the next :back
        app.submit_step();
        assert_eq!(app.current_step(), StepId::Branding);
        back(&mut app);
        assert_eq!(app.current_step(), StepId::CompanyInfo);
    }

    #[test]
    fn unknown_step_command_is_an_error() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "step billing");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.current_step(), StepId::CompanyInfo);
        assert!(app.message.as_ref().is_some_and(|m| m.is_error));
    }

    #[test]
    fn quit_command_exits() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "q");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_exit);
    }

    #[test]
    fn completion_screen_exits_on_enter() {
        let mut app = WizardApp::new(OnboardConfig::default(), Some(StepId::Branding));
        app.submit_step();
        assert!(app.completed);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_exit);
    }
}
