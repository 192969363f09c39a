//! Module trait for page-level UI components

use crossterm::event::KeyEvent;

use super::{Action, Context};

/// A page that owns its own state and input handling
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action;

    /// True while the module is consuming raw keystrokes (text entry,
    /// open popups) and global shortcuts must not fire.
    fn captures_input(&self) -> bool {
        false
    }
}
