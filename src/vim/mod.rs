mod input;
mod mode;

pub use input::InputBuffer;
pub use mode::{ModeAction, VimMode};
