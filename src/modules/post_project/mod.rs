//! Post-project wizard module
//!
//! Owns the wizard state for one visit to the page, tracks which field has
//! focus, and turns key presses into state transitions or app actions.

pub mod submission;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Action, Context, Module, NotifyLevel, Route};
use crate::domain::project::{accepts_budget_char, Choice, Step, WizardState};
use crate::ui::widgets::{ChainSelector, ChainSelectorProps};

pub use submission::{SubmissionHandler, SubmissionOutcome};

pub const DESTINATION_LABEL: &str = "Select Destination Chain";

/// Lines moved per PageUp/PageDown in the step view
const SCROLL_PAGE: u16 = 5;

/// Input fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Category,
    Skills,
    Experience,
    Budget,
    BudgetType,
    Duration,
    CrossChain,
    DestinationChain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Choice,
    Checkbox,
    Picker,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Project Title",
            Field::Description => "Description",
            Field::Category => "Category",
            Field::Skills => "Required Skills",
            Field::Experience => "Experience Level",
            Field::Budget => "Budget (AVAX)",
            Field::BudgetType => "Budget Type",
            Field::Duration => "Project Duration",
            Field::CrossChain => "Create as Cross-Chain Project",
            Field::DestinationChain => DESTINATION_LABEL,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Title => "e.g., Build a mobile app",
            Field::Description => "Describe your project in detail...",
            Field::Skills => "e.g., React, Node.js, TypeScript",
            Field::Budget => "e.g., 10",
            _ => "",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Field::Title | Field::Description | Field::Skills | Field::Budget => FieldKind::Text,
            Field::Category | Field::Experience | Field::BudgetType | Field::Duration => {
                FieldKind::Choice
            }
            Field::CrossChain => FieldKind::Checkbox,
            Field::DestinationChain => FieldKind::Picker,
        }
    }
}

/// Fields shown on a step. The destination picker only exists while the
/// cross-chain box is ticked.
pub fn fields_for(step: Step, is_cross_chain: bool) -> Vec<Field> {
    match step {
        Step::Details => vec![Field::Title, Field::Description, Field::Category],
        Step::Skills => vec![Field::Skills, Field::Experience],
        Step::Budget => {
            let mut fields = vec![
                Field::Budget,
                Field::BudgetType,
                Field::Duration,
                Field::CrossChain,
            ];
            if is_cross_chain {
                fields.push(Field::DestinationChain);
            }
            fields
        }
        Step::Review => Vec::new(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostProject {
    state: WizardState,
    focus: usize,
    editing: bool,
    scroll: u16,
    selector: Option<ChainSelector>,
}

impl PostProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wizard for one visit to the page; replies tagged with another id are
    /// not applied to it.
    pub fn with_mount_id(mount_id: u64) -> Self {
        let mut wizard = Self::default();
        wizard.state.mount_id = mount_id;
        wizard
    }

    pub fn mount_id(&self) -> u64 {
        self.state.mount_id
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn selector(&self) -> Option<&ChainSelector> {
        self.selector.as_ref()
    }

    pub fn fields(&self) -> Vec<Field> {
        fields_for(self.state.step, self.state.is_cross_chain)
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.fields().get(self.focus).copied()
    }

    /// Whether the chain selector region is visible on the budget step
    pub fn shows_chain_selector(&self) -> bool {
        self.state.step == Step::Budget && self.state.is_cross_chain
    }

    /// Next control. Scrolls the step view back to the top when it moves.
    pub fn advance(&mut self) -> bool {
        let moved = self.state.advance();
        if moved {
            self.reset_view();
        }
        moved
    }

    /// Back control. Scrolls the step view back to the top when it moves.
    pub fn retreat(&mut self) -> bool {
        let moved = self.state.retreat();
        if moved {
            self.reset_view();
        }
        moved
    }

    pub fn toggle_cross_chain(&mut self) {
        self.state.toggle_cross_chain();
        let len = self.fields().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    pub fn select_destination(&mut self, chain_id: alloy_primitives::ChainId) {
        self.state.select_destination(chain_id);
        self.selector = None;
    }

    /// Submit control. Only produces a request from the review step.
    pub fn submit(&mut self, ctx: &Context) -> Action {
        match self.state.begin_submission(ctx.current_chain_id) {
            Ok(request) => {
                tracing::debug!(
                    cross_chain = self.state.is_cross_chain,
                    destination = ?request.destination_chain_id,
                    "submitting project"
                );
                Action::Submit(request)
            }
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
        }
    }

    /// Leave the loading state once the handler has settled
    pub fn finish_submission(&mut self) {
        self.state.finish_submission();
    }

    pub fn scroll_by(&mut self, down: bool, amount: u16) {
        self.scroll = if down {
            self.scroll.saturating_add(amount)
        } else {
            self.scroll.saturating_sub(amount)
        };
    }

    fn reset_view(&mut self) {
        self.scroll = 0;
        self.focus = 0;
        self.editing = false;
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.fields().len();
        if len == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let draft = &mut self.state.draft;
        match field {
            Field::Title => Some(&mut draft.title),
            Field::Description => Some(&mut draft.description),
            Field::Skills => Some(&mut draft.skills),
            Field::Budget => Some(&mut draft.budget),
            _ => None,
        }
    }

    fn cycle_choice(&mut self, field: Field, forward: bool) {
        let draft = &mut self.state.draft;
        match field {
            Field::Category => draft.category = draft.category.cycle(forward),
            Field::Experience => draft.experience = draft.experience.cycle(forward),
            Field::BudgetType => draft.budget_type = draft.budget_type.cycle(forward),
            Field::Duration => draft.duration = draft.duration.cycle(forward),
            _ => {}
        }
    }

    fn open_selector(&mut self, ctx: &Context) {
        self.selector = Some(ChainSelector::new(ChainSelectorProps {
            chains: ctx.chains.clone(),
            selected: self.state.destination_chain_id,
            current: ctx.current_chain_id,
            exclude_current: true,
            label: DESTINATION_LABEL,
        }));
    }

    /// Enter/Space on the focused field
    fn activate(&mut self, field: Field, ctx: &Context) {
        match field.kind() {
            FieldKind::Text => self.editing = true,
            FieldKind::Choice => self.cycle_choice(field, true),
            FieldKind::Checkbox => self.toggle_cross_chain(),
            FieldKind::Picker => self.open_selector(ctx),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        let Some(field) = self.focused_field() else {
            self.editing = false;
            return Action::None;
        };
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Enter if field == Field::Description => {
                if let Some(text) = self.text_mut(field) {
                    text.push('\n');
                }
            }
            KeyCode::Enter | KeyCode::Tab => self.editing = false,
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut(field) {
                    text.pop();
                }
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Action::None;
                }
                if let Some(text) = self.text_mut(field) {
                    if field != Field::Budget || accepts_budget_char(text, ch) {
                        text.push(ch);
                    }
                }
            }
            _ => {}
        }
        Action::None
    }
}

impl Module for PostProject {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        if let Some(selector) = self.selector.as_mut() {
            return match selector.handle_key(key, ctx) {
                Action::SelectChain(chain_id) => {
                    self.select_destination(chain_id);
                    Action::Notify(
                        format!("Destination chain: {}", ctx.chain_label(chain_id)),
                        NotifyLevel::Info,
                    )
                }
                Action::CloseOverlay => {
                    self.selector = None;
                    Action::None
                }
                other => other,
            };
        }

        if self.editing {
            return self.handle_editing_key(key);
        }

        let focused = self.focused_field();
        match key.code {
            KeyCode::Esc => Action::Navigate(Route::Home),
            KeyCode::Char(']') | KeyCode::Char('n') => {
                if !self.state.step.is_last() {
                    self.advance();
                }
                Action::None
            }
            KeyCode::Char('[') | KeyCode::Char('b') => {
                self.retreat();
                Action::None
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Right | KeyCode::Char('l') => {
                let forward = matches!(key.code, KeyCode::Right | KeyCode::Char('l'));
                if let Some(field) = focused {
                    self.cycle_choice(field, forward);
                }
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(true, SCROLL_PAGE);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(false, SCROLL_PAGE);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s')
                if self.state.step.is_last() =>
            {
                if self.state.is_loading {
                    return Action::None;
                }
                self.submit(ctx)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(field) = focused {
                    self.activate(field, ctx);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn captures_input(&self) -> bool {
        self.editing || self.selector.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(wizard: &mut PostProject, ctx: &Context, codes: &[KeyCode]) -> Action {
        let mut last = Action::None;
        for code in codes {
            last = wizard.handle_key(key(*code), ctx);
        }
        last
    }

    fn type_text(wizard: &mut PostProject, ctx: &Context, text: &str) {
        for ch in text.chars() {
            wizard.handle_key(key(KeyCode::Char(ch)), ctx);
        }
    }

    #[test]
    fn test_text_fields_are_bound_to_draft() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        press(&mut wizard, &ctx, &[KeyCode::Enter]);
        assert!(wizard.is_editing());
        type_text(&mut wizard, &ctx, "Wallet UI");
        press(&mut wizard, &ctx, &[KeyCode::Backspace, KeyCode::Enter]);
        assert!(!wizard.is_editing());
        assert_eq!(wizard.state().draft.title, "Wallet U");
    }

    #[test]
    fn test_budget_field_filters_keystrokes() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.focused_field(), Some(Field::Budget));
        press(&mut wizard, &ctx, &[KeyCode::Enter]);
        type_text(&mut wizard, &ctx, "1a2.5.0");
        assert_eq!(wizard.state().draft.budget, "12.50");
    }

    #[test]
    fn test_choice_fields_cycle_with_arrows() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        press(&mut wizard, &ctx, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(wizard.focused_field(), Some(Field::Category));
        press(&mut wizard, &ctx, &[KeyCode::Right]);
        assert_eq!(wizard.state().draft.category.label(), "Mobile Development");
        press(&mut wizard, &ctx, &[KeyCode::Left, KeyCode::Left]);
        assert_eq!(wizard.state().draft.category.label(), "Other");
    }

    #[test]
    fn test_step_change_resets_scroll_and_focus() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        press(&mut wizard, &ctx, &[KeyCode::Tab, KeyCode::PageDown]);
        assert_eq!(wizard.scroll(), SCROLL_PAGE);
        press(&mut wizard, &ctx, &[KeyCode::Char(']')]);
        assert_eq!(wizard.step(), Step::Skills);
        assert_eq!(wizard.scroll(), 0);
        assert_eq!(wizard.focused_field(), Some(Field::Skills));

        press(&mut wizard, &ctx, &[KeyCode::PageDown, KeyCode::Char('[')]);
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.scroll(), 0);
    }

    #[test]
    fn test_back_on_first_step_keeps_scroll() {
        let mut wizard = PostProject::new();
        wizard.scroll_by(true, 3);
        assert!(!wizard.retreat());
        assert_eq!(wizard.scroll(), 3);
    }

    #[test]
    fn test_cross_chain_checkbox_reveals_selector_region() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        wizard.advance();
        wizard.advance();
        assert!(!wizard.shows_chain_selector());
        assert!(!wizard.fields().contains(&Field::DestinationChain));

        press(&mut wizard, &ctx, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(wizard.focused_field(), Some(Field::CrossChain));
        press(&mut wizard, &ctx, &[KeyCode::Char(' ')]);
        assert!(wizard.shows_chain_selector());
        assert!(wizard.fields().contains(&Field::DestinationChain));

        press(&mut wizard, &ctx, &[KeyCode::Char(' ')]);
        assert!(!wizard.shows_chain_selector());
    }

    #[test]
    fn test_unticking_while_on_destination_clamps_focus() {
        let mut wizard = PostProject::new();
        wizard.advance();
        wizard.advance();
        wizard.toggle_cross_chain();
        wizard.focus = 4;
        assert_eq!(wizard.focused_field(), Some(Field::DestinationChain));
        wizard.toggle_cross_chain();
        assert_eq!(wizard.focused_field(), Some(Field::CrossChain));
    }

    #[test]
    fn test_destination_picked_through_selector() {
        let ctx = Context {
            current_chain_id: Some(43114),
            ..Context::default()
        };
        let mut wizard = PostProject::new();
        wizard.advance();
        wizard.advance();
        wizard.toggle_cross_chain();
        wizard.focus = 4;
        press(&mut wizard, &ctx, &[KeyCode::Enter]);
        assert!(wizard.selector().is_some());
        assert!(wizard.captures_input());

        let action = press(&mut wizard, &ctx, &[KeyCode::Enter]);
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Info)));
        assert!(wizard.selector().is_none());
        assert_eq!(wizard.state().destination_chain_id, Some(43113));
    }

    #[test]
    fn test_submit_only_from_review() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        assert!(matches!(
            wizard.submit(&ctx),
            Action::Notify(_, NotifyLevel::Warn)
        ));
        assert!(!wizard.state().is_loading);

        for _ in 0..3 {
            press(&mut wizard, &ctx, &[KeyCode::Char(']')]);
        }
        assert_eq!(wizard.step(), Step::Review);
        let action = press(&mut wizard, &ctx, &[KeyCode::Enter]);
        assert!(matches!(action, Action::Submit(_)));
        assert!(wizard.state().is_loading);

        // Submit control is disabled while posting
        assert_eq!(press(&mut wizard, &ctx, &[KeyCode::Enter]), Action::None);
        wizard.finish_submission();
        assert!(!wizard.state().is_loading);
    }

    #[test]
    fn test_next_on_review_is_noop() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        for _ in 0..6 {
            press(&mut wizard, &ctx, &[KeyCode::Char(']')]);
        }
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn test_escape_leaves_page() {
        let ctx = Context::default();
        let mut wizard = PostProject::new();
        assert_eq!(
            press(&mut wizard, &ctx, &[KeyCode::Esc]),
            Action::Navigate(Route::Home)
        );
    }
}
