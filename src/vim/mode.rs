#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VimMode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl VimMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            VimMode::Normal => "NORMAL",
            VimMode::Insert => "INSERT",
            VimMode::Command => "COMMAND",
        }
    }

    pub fn transition(&self, action: ModeAction) -> VimMode {
        match (self, action) {
            (VimMode::Normal, ModeAction::EnterInsert) => VimMode::Insert,
            (VimMode::Normal, ModeAction::EnterCommand) => VimMode::Command,
            (VimMode::Insert, ModeAction::Escape) => VimMode::Normal,
            (VimMode::Command, ModeAction::Escape) => VimMode::Normal,
            (VimMode::Command, ModeAction::Execute) => VimMode::Normal,
            _ => *self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    EnterInsert,
    EnterCommand,
    Escape,
    Execute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_between_modes() {
        let mode = VimMode::Normal;
        let mode = mode.transition(ModeAction::EnterInsert);
        assert_eq!(mode, VimMode::Insert);
        let mode = mode.transition(ModeAction::Escape);
        assert_eq!(mode, VimMode::Normal);
        let mode = mode.transition(ModeAction::EnterCommand);
        assert_eq!(mode, VimMode::Command);
        assert_eq!(mode.transition(ModeAction::Execute), VimMode::Normal);
    }

    #[test]
    fn invalid_transitions_are_ignored() {
        assert_eq!(
            VimMode::Insert.transition(ModeAction::EnterCommand),
            VimMode::Insert
        );
        assert_eq!(VimMode::Normal.transition(ModeAction::Escape), VimMode::Normal);
    }
}
