/// Dynamic status bar hints, updated by the wizard state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Left side hint text (e.g. "j/k: fields  i: edit")
    pub left_hint: String,
    /// Right side hint text (e.g. ":help  :quit")
    pub right_hint: String,
}

impl StatusBarState {
    /// Hints for normal mode on a form field
    pub fn form_normal() -> Self {
        Self {
            left_hint: "j/k: fields  i: edit".to_string(),
            right_hint: "Enter: edit  :next  :help".to_string(),
        }
    }

    /// Hints for insert mode on a form field
    pub fn form_insert() -> Self {
        Self {
            left_hint: "Type to enter text".to_string(),
            right_hint: "Esc: normal  Enter: next field".to_string(),
        }
    }

    /// Hints for the last step's form in normal mode
    pub fn form_final_step() -> Self {
        Self {
            left_hint: "j/k: fields  i: edit".to_string(),
            right_hint: ":finish  :back  :help".to_string(),
        }
    }

    /// Hints for the country picker in normal mode
    pub fn picker_normal() -> Self {
        Self {
            left_hint: "j/k: navigate  Enter: select".to_string(),
            right_hint: "i: filter  Esc: close".to_string(),
        }
    }

    /// Hints for the country picker while filtering
    pub fn picker_insert() -> Self {
        Self {
            left_hint: "Type to filter".to_string(),
            right_hint: "Up/Down: navigate  Enter: select".to_string(),
        }
    }

    /// Hints for command mode
    pub fn command_mode() -> Self {
        Self {
            left_hint: String::new(),
            right_hint: "Enter: run  Esc: cancel".to_string(),
        }
    }

    /// Hints for the completion screen
    pub fn finished() -> Self {
        Self {
            left_hint: "Setup complete!".to_string(),
            right_hint: "Enter: close".to_string(),
        }
    }
}
