// AWS EC2 preferences page
use crate::error::{PrefsError, Result};
use crate::models::{AwsProfile, User};
use crate::ui::aws_form::{AwsForm, AwsFormState};
use crate::ui::panels::{
    breadcrumb, ActiveList, ButtonBar, ButtonSpec, ConfirmDialog, EmptyPlaceholder, ListEntry,
    Toolbar, ToolbarAction,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    Frame,
};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// How long a validation message stays on screen
pub const ERROR_TIMEOUT: Duration = Duration::from_millis(3000);

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this profile?";

pub const ERR_ALREADY_SAVED: &str = "Profile cannot be modified once saved";
pub const ERR_EMPTY_NAME: &str = "Name cannot be empty";
pub const ERR_MISSING_KEYS: &str = "Access keys are required";

const TITLE: &str = "AWS EC2";

const ADD_ACTION: ToolbarAction = ToolbarAction {
    name: "add",
    icon: "[+]",
    key: 'a',
};

/// Read-only inputs derived from the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefsProps {
    pub active: usize,
    pub list: Vec<AwsProfile>,
    /// Network error recorded by the store for save/remove
    pub error: Option<String>,
    /// True while a save or remove is pending
    pub buttons_disabled: bool,
    pub user: Option<User>,
}

impl PrefsProps {
    pub fn active_profile(&self) -> Option<&AwsProfile> {
        self.list.get(self.active)
    }
}

/// Requests the page sends back to the store
#[cfg_attr(test, mockall::automock)]
pub trait PrefsActions {
    fn update_item(&mut self, index: usize, profile: AwsProfile, save: bool);
    fn active_change(&mut self, index: usize);
    fn add_item(&mut self);
    fn remove_item(&mut self, index: usize, profile: AwsProfile);
    fn mount(&mut self);
    fn invalidate_errors(&mut self);
}

/// Actions reachable from the button bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    RemoveItem,
    SaveItem,
}

impl FormAction {
    pub fn name(&self) -> &'static str {
        match self {
            FormAction::RemoveItem => "removeItem",
            FormAction::SaveItem => "saveItem",
        }
    }
}

impl FromStr for FormAction {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "removeItem" => Ok(FormAction::RemoveItem),
            "saveItem" => Ok(FormAction::SaveItem),
            other => Err(PrefsError::UnknownAction(other.to_string())),
        }
    }
}

/// Buttons for the active profile: Delete always, Save only for drafts
pub fn get_actions(disabled: bool, show_save: bool) -> Vec<ButtonSpec> {
    let mut actions = vec![ButtonSpec {
        name: FormAction::RemoveItem.name(),
        label: "Delete",
        key: "d",
        disabled,
    }];
    if show_save {
        actions.push(ButtonSpec {
            name: FormAction::SaveItem.name(),
            label: "Save",
            key: "s",
            disabled,
        });
    }
    actions
}

/// First validation failure for a profile about to be saved
pub fn validate(profile: &AwsProfile) -> Option<&'static str> {
    if profile.is_persisted() {
        Some(ERR_ALREADY_SAVED)
    } else if profile.name.is_empty() {
        Some(ERR_EMPTY_NAME)
    } else if profile.access_key_id.is_empty() {
        Some(ERR_MISSING_KEYS)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Menu,
    Form,
}

/// Result of handing a key to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    Quit,
}

/// The preferences page for AWS EC2 profiles.
///
/// Owns only UI state: the transient validation error, the open
/// confirmation and focus. Everything else comes in through `PrefsProps`
/// on each call, and every change goes out through `PrefsActions`.
#[derive(Debug, Default)]
pub struct AwsPrefs {
    local_error: Option<String>,
    /// When the local error is cleared automatically
    clear_at: Option<Instant>,
    mount_scheduled: bool,
    confirming: bool,
    focus: Focus,
    form: AwsFormState,
}

impl AwsPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the initial fetch for after the first render
    pub fn mount(&mut self) {
        self.mount_scheduled = true;
    }

    /// Run work deferred until a frame has been drawn
    pub fn after_render(&mut self, actions: &mut dyn PrefsActions) {
        if self.mount_scheduled {
            self.mount_scheduled = false;
            actions.mount();
        }
    }

    pub fn unmount(&mut self) {
        self.clear_at = None;
        self.mount_scheduled = false;
        self.confirming = false;
    }

    pub fn local_error(&self) -> Option<&str> {
        self.local_error.as_deref()
    }

    pub fn clear_deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Expire the local error once its deadline has passed. Returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                tracing::debug!("Local error expired");
                self.local_error = None;
                self.clear_at = None;
                true
            }
            _ => false,
        }
    }

    fn set_local_error(&mut self, error: Option<&str>) {
        if self.local_error.as_deref() == error {
            return;
        }
        self.local_error = error.map(str::to_string);
        // A new value always replaces the previous deadline
        self.clear_at = self.local_error.as_ref().map(|_| Instant::now() + ERROR_TIMEOUT);
    }

    /// Forward an edit of the active profile as a draft-only update
    pub fn change_item(
        &mut self,
        profile: AwsProfile,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) {
        actions.update_item(props.active, profile, false);
    }

    pub fn active_change(&mut self, index: usize, actions: &mut dyn PrefsActions) {
        self.set_local_error(None);
        actions.active_change(index);
    }

    pub fn add_item(&mut self, props: &PrefsProps, actions: &mut dyn PrefsActions) {
        if props.error.is_some() {
            actions.invalidate_errors();
        }
        self.set_local_error(None);
        actions.add_item();
    }

    /// Remove the active profile. Saved profiles ask for confirmation first.
    pub fn remove_item(&mut self, props: &PrefsProps, actions: &mut dyn PrefsActions) {
        let Some(profile) = props.active_profile() else {
            return;
        };

        if profile.is_persisted() {
            self.confirming = true;
        } else {
            actions.remove_item(props.active, profile.clone());
        }
        self.set_local_error(None);
    }

    /// Answer the delete confirmation opened by `remove_item`
    pub fn resolve_confirmation(
        &mut self,
        accepted: bool,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) {
        if !std::mem::take(&mut self.confirming) {
            return;
        }
        if !accepted {
            tracing::debug!("Profile deletion declined");
            return;
        }
        if let Some(profile) = props.active_profile().filter(|p| p.is_persisted()) {
            actions.remove_item(props.active, profile.clone());
        }
    }

    pub fn save_item(&mut self, props: &PrefsProps, actions: &mut dyn PrefsActions) {
        let Some(profile) = props.active_profile() else {
            return;
        };

        if let Some(error) = validate(profile) {
            tracing::debug!("Rejected save of '{}': {}", profile.name, error);
            self.set_local_error(Some(error));
            return;
        }

        self.set_local_error(None);
        actions.update_item(props.active, profile.clone(), true);
    }

    pub fn form_action(
        &mut self,
        action: FormAction,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) {
        match action {
            FormAction::RemoveItem => self.remove_item(props, actions),
            FormAction::SaveItem => self.save_item(props, actions),
        }
    }

    /// Trigger a button by its symbolic name if it is shown and enabled
    fn press(&mut self, name: &str, props: &PrefsProps, actions: &mut dyn PrefsActions) -> Result<()> {
        let action = FormAction::from_str(name)?;
        let show_save = props.active_profile().map(|p| p.is_draft()).unwrap_or(false);
        let enabled = get_actions(props.buttons_disabled, show_save)
            .iter()
            .any(|b| b.name == name && !b.disabled);

        if enabled && props.active_profile().is_some() {
            self.form_action(action, props, actions);
        }
        Ok(())
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) -> Result<KeyOutcome> {
        if self.confirming {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.resolve_confirmation(true, props, actions)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.resolve_confirmation(false, props, actions)
                }
                _ => {}
            }
            return Ok(KeyOutcome::Handled);
        }

        if props.list.is_empty() {
            self.focus = Focus::Menu;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.press(FormAction::SaveItem.name(), props, actions)?;
            return Ok(KeyOutcome::Handled);
        }

        match self.focus {
            Focus::Menu => self.handle_menu_key(key, props, actions),
            Focus::Form => Ok(self.handle_form_key(key, props, actions)),
        }
    }

    fn handle_menu_key(
        &mut self,
        key: KeyEvent,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) -> Result<KeyOutcome> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(KeyOutcome::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(next) = ActiveList::step(props.active, props.list.len(), 1) {
                    self.active_change(next, actions);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(prev) = ActiveList::step(props.active, props.list.len(), -1) {
                    self.active_change(prev, actions);
                }
            }
            KeyCode::Char(c) if c == ADD_ACTION.key => self.add_item(props, actions),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.press(FormAction::RemoveItem.name(), props, actions)?
            }
            KeyCode::Char('s') => self.press(FormAction::SaveItem.name(), props, actions)?,
            KeyCode::Enter | KeyCode::Tab => {
                if !props.list.is_empty() {
                    self.focus = Focus::Form;
                }
            }
            _ => return Ok(KeyOutcome::Ignored),
        }
        Ok(KeyOutcome::Handled)
    }

    fn handle_form_key(
        &mut self,
        key: KeyEvent,
        props: &PrefsProps,
        actions: &mut dyn PrefsActions,
    ) -> KeyOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Tab => {
                self.focus = Focus::Menu;
                KeyOutcome::Handled
            }
            _ => {
                let Some(profile) = props.active_profile() else {
                    return KeyOutcome::Ignored;
                };
                if let Some(edited) = self.form.edit(profile, key) {
                    self.change_item(edited, props, actions);
                }
                KeyOutcome::Handled
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, props: &PrefsProps) {
        if props.list.is_empty() {
            self.focus = Focus::Menu;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let crumb = breadcrumb(props.user.as_ref(), "EC2");
        f.render_widget(
            Toolbar {
                breadcrumb: &crumb,
                title: TITLE,
                actions: &[ADD_ACTION],
                user: props.user.as_ref(),
            },
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        let entries: Vec<ListEntry> = props
            .list
            .iter()
            .map(|p| ListEntry {
                label: p.name.clone(),
                badge: p.is_draft().then_some("*"),
            })
            .collect();
        f.render_widget(
            ActiveList {
                title: "Profiles",
                entries: &entries,
                active: props.active,
                focused: self.focus == Focus::Menu,
            },
            body[0],
        );

        match props.active_profile() {
            Some(active) => {
                let content = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(8), Constraint::Length(3)])
                    .split(body[1]);

                f.render_widget(
                    AwsForm {
                        data: active,
                        state: &self.form,
                        focused: self.focus == Focus::Form,
                    },
                    content[0],
                );

                let buttons = get_actions(props.buttons_disabled, active.is_draft());
                f.render_widget(
                    ButtonBar {
                        visible: true,
                        error: self.local_error.as_deref().or(props.error.as_deref()),
                        actions: &buttons,
                    },
                    content[1],
                );
            }
            None => {
                f.render_widget(
                    EmptyPlaceholder {
                        phrase: vec![
                            Line::from("There are no EC2 Profiles available"),
                            Line::from(format!(
                                "You can create some with the {} above",
                                ADD_ACTION.icon
                            )),
                        ],
                    },
                    body[1],
                );
            }
        }

        if self.confirming {
            f.render_widget(
                ConfirmDialog {
                    message: CONFIRM_DELETE,
                },
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn draft(name: &str, key: &str) -> AwsProfile {
        AwsProfile {
            name: name.to_string(),
            access_key_id: key.to_string(),
            ..AwsProfile::default()
        }
    }

    fn saved(name: &str) -> AwsProfile {
        AwsProfile {
            id: Some("x".to_string()),
            ..draft(name, "k")
        }
    }

    fn props(list: Vec<AwsProfile>) -> PrefsProps {
        PrefsProps {
            list,
            ..PrefsProps::default()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(prefs: &mut AwsPrefs, props: &PrefsProps) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| prefs.render(f, f.area(), props))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_save_valid_draft_dispatches_once() {
        let props = props(vec![draft("a", "k")]);
        let mut actions = MockPrefsActions::new();
        actions
            .expect_update_item()
            .with(eq(0), eq(draft("a", "k")), eq(true))
            .times(1)
            .return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.save_item(&props, &mut actions);
        assert_eq!(prefs.local_error(), None);
        assert_eq!(prefs.clear_deadline(), None);
    }

    #[test]
    fn test_save_persisted_is_rejected() {
        let props = props(vec![saved("a")]);
        let mut actions = MockPrefsActions::new();

        let mut prefs = AwsPrefs::new();
        prefs.save_item(&props, &mut actions);
        assert_eq!(prefs.local_error(), Some(ERR_ALREADY_SAVED));
    }

    #[test]
    fn test_save_validation_order() {
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();

        prefs.save_item(&props(vec![draft("", "")]), &mut actions);
        assert_eq!(prefs.local_error(), Some(ERR_EMPTY_NAME));

        prefs.save_item(&props(vec![draft("a", "")]), &mut actions);
        assert_eq!(prefs.local_error(), Some(ERR_MISSING_KEYS));

        let mut persisted_without_name = draft("", "");
        persisted_without_name.id = Some("x".to_string());
        prefs.save_item(&props(vec![persisted_without_name]), &mut actions);
        assert_eq!(prefs.local_error(), Some(ERR_ALREADY_SAVED));
    }

    #[test]
    fn test_save_uses_current_active_index() {
        let mut props = props(vec![draft("a", "k"), draft("b", "k2")]);
        props.active = 1;
        let mut actions = MockPrefsActions::new();
        actions
            .expect_update_item()
            .with(eq(1), eq(draft("b", "k2")), eq(true))
            .times(1)
            .return_const(());

        AwsPrefs::new().save_item(&props, &mut actions);
    }

    #[test]
    fn test_remove_draft_needs_no_confirmation() {
        let props = props(vec![draft("a", "")]);
        let mut actions = MockPrefsActions::new();
        actions
            .expect_remove_item()
            .with(eq(0), eq(draft("a", "")))
            .times(1)
            .return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.remove_item(&props, &mut actions);
        assert!(!prefs.is_confirming());
    }

    #[test]
    fn test_remove_persisted_waits_for_confirmation() {
        let props = props(vec![saved("a")]);
        let mut actions = MockPrefsActions::new();

        let mut prefs = AwsPrefs::new();
        prefs.remove_item(&props, &mut actions);
        assert!(prefs.is_confirming());
        actions.checkpoint();

        actions
            .expect_remove_item()
            .with(eq(0), eq(saved("a")))
            .times(1)
            .return_const(());
        prefs.resolve_confirmation(true, &props, &mut actions);
        assert!(!prefs.is_confirming());
    }

    #[test]
    fn test_declined_confirmation_removes_nothing() {
        let props = props(vec![saved("a")]);
        let mut actions = MockPrefsActions::new();

        let mut prefs = AwsPrefs::new();
        prefs.remove_item(&props, &mut actions);
        prefs.resolve_confirmation(false, &props, &mut actions);
        assert!(!prefs.is_confirming());

        // A stray answer without an open prompt does nothing either
        prefs.resolve_confirmation(true, &props, &mut actions);
    }

    #[test]
    fn test_remove_clears_local_error() {
        let props = props(vec![draft("", "")]);
        let mut actions = MockPrefsActions::new();
        actions.expect_remove_item().return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.save_item(&props, &mut actions);
        assert!(prefs.local_error().is_some());
        prefs.remove_item(&props, &mut actions);
        assert_eq!(prefs.local_error(), None);
    }

    #[test]
    fn test_local_error_expires_after_timeout() {
        let props = props(vec![draft("", "")]);
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();

        let before = Instant::now();
        prefs.save_item(&props, &mut actions);
        let deadline = prefs.clear_deadline().unwrap();
        assert!(deadline >= before + ERROR_TIMEOUT);

        assert!(!prefs.tick(deadline - Duration::from_millis(1)));
        assert_eq!(prefs.local_error(), Some(ERR_EMPTY_NAME));

        assert!(prefs.tick(deadline));
        assert_eq!(prefs.local_error(), None);
        assert_eq!(prefs.clear_deadline(), None);
    }

    #[test]
    fn test_new_error_rearms_deadline() {
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();

        prefs.save_item(&props(vec![draft("", "")]), &mut actions);
        let first = prefs.clear_deadline().unwrap();

        std::thread::sleep(Duration::from_millis(5));
        prefs.save_item(&props(vec![draft("a", "")]), &mut actions);
        let second = prefs.clear_deadline().unwrap();
        assert!(second > first);

        // The old deadline no longer clears the newer message
        assert!(!prefs.tick(first));
        assert_eq!(prefs.local_error(), Some(ERR_MISSING_KEYS));
    }

    #[test]
    fn test_active_change_clears_error_immediately() {
        let props = props(vec![draft("", ""), draft("b", "")]);
        let mut actions = MockPrefsActions::new();
        actions
            .expect_active_change()
            .with(eq(1))
            .times(1)
            .return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.save_item(&props, &mut actions);
        prefs.active_change(1, &mut actions);
        assert_eq!(prefs.local_error(), None);
        assert_eq!(prefs.clear_deadline(), None);
    }

    #[test]
    fn test_add_invalidates_store_error_first() {
        let mut props = props(vec![]);
        props.error = Some("boom".to_string());

        let mut seq = mockall::Sequence::new();
        let mut actions = MockPrefsActions::new();
        actions
            .expect_invalidate_errors()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        actions
            .expect_add_item()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        AwsPrefs::new().add_item(&props, &mut actions);
    }

    #[test]
    fn test_add_without_store_error() {
        let mut actions = MockPrefsActions::new();
        actions.expect_add_item().times(1).return_const(());
        AwsPrefs::new().add_item(&props(vec![]), &mut actions);
    }

    #[test]
    fn test_change_item_is_draft_update() {
        let mut props = props(vec![draft("a", ""), draft("b", "")]);
        props.active = 1;
        let mut actions = MockPrefsActions::new();
        actions
            .expect_update_item()
            .with(eq(1), eq(draft("bc", "")), eq(false))
            .times(1)
            .return_const(());

        AwsPrefs::new().change_item(draft("bc", ""), &props, &mut actions);
    }

    #[test]
    fn test_mount_is_deferred_until_after_render() {
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();
        prefs.mount();
        actions.checkpoint();

        actions.expect_mount().times(1).return_const(());
        prefs.after_render(&mut actions);
        // Only once
        prefs.after_render(&mut actions);
    }

    #[test]
    fn test_unmount_cancels_timer() {
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();
        prefs.save_item(&props(vec![draft("", "")]), &mut actions);
        assert!(prefs.clear_deadline().is_some());

        prefs.unmount();
        assert_eq!(prefs.clear_deadline(), None);
        assert!(!prefs.tick(Instant::now() + ERROR_TIMEOUT * 2));
    }

    #[test]
    fn test_form_action_by_name() {
        assert_eq!(FormAction::from_str("saveItem").unwrap(), FormAction::SaveItem);
        assert_eq!(
            FormAction::from_str("removeItem").unwrap(),
            FormAction::RemoveItem
        );
        assert!(FormAction::from_str("launch").is_err());

        let props = props(vec![draft("a", "k")]);
        let mut actions = MockPrefsActions::new();
        actions.expect_update_item().times(1).return_const(());
        AwsPrefs::new().form_action(FormAction::SaveItem, &props, &mut actions);
    }

    #[test]
    fn test_get_actions() {
        let with_save = get_actions(false, true);
        assert_eq!(
            with_save.iter().map(|b| b.label).collect::<Vec<_>>(),
            vec!["Delete", "Save"]
        );

        let disabled = get_actions(true, false);
        assert_eq!(disabled.len(), 1);
        assert!(disabled[0].disabled);
    }

    #[test]
    fn test_disabled_buttons_ignore_keys() {
        let mut props = props(vec![draft("a", "k")]);
        props.buttons_disabled = true;
        let mut actions = MockPrefsActions::new();

        let mut prefs = AwsPrefs::new();
        prefs.handle_key(key(KeyCode::Char('s')), &props, &mut actions).unwrap();
        prefs.handle_key(key(KeyCode::Char('d')), &props, &mut actions).unwrap();
    }

    #[test]
    fn test_save_key_hidden_for_persisted() {
        let props = props(vec![saved("a")]);
        let mut actions = MockPrefsActions::new();

        let mut prefs = AwsPrefs::new();
        prefs.handle_key(key(KeyCode::Char('s')), &props, &mut actions).unwrap();
        assert_eq!(prefs.local_error(), None);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut props = props(vec![draft("a", ""), draft("b", "")]);
        props.active = 1;
        let mut actions = MockPrefsActions::new();
        actions
            .expect_active_change()
            .with(eq(0))
            .times(2)
            .return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.handle_key(key(KeyCode::Down), &props, &mut actions).unwrap();
        prefs.handle_key(key(KeyCode::Char('k')), &props, &mut actions).unwrap();
    }

    #[test]
    fn test_confirmation_keys() {
        let props = props(vec![saved("a")]);
        let mut actions = MockPrefsActions::new();
        actions.expect_remove_item().times(1).return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.handle_key(key(KeyCode::Char('d')), &props, &mut actions).unwrap();
        assert!(prefs.is_confirming());

        // Quit is swallowed while the prompt is open
        let outcome = prefs.handle_key(key(KeyCode::Char('q')), &props, &mut actions).unwrap();
        assert_eq!(outcome, KeyOutcome::Handled);

        prefs.handle_key(key(KeyCode::Char('y')), &props, &mut actions).unwrap();
        assert!(!prefs.is_confirming());
    }

    #[test]
    fn test_form_typing_forwards_edit() {
        let props = props(vec![draft("a", "")]);
        let mut actions = MockPrefsActions::new();
        actions
            .expect_update_item()
            .with(eq(0), eq(draft("ab", "")), eq(false))
            .times(1)
            .return_const(());

        let mut prefs = AwsPrefs::new();
        prefs.handle_key(key(KeyCode::Enter), &props, &mut actions).unwrap();
        assert_eq!(prefs.focus(), Focus::Form);
        prefs.handle_key(key(KeyCode::Char('b')), &props, &mut actions).unwrap();

        let outcome = prefs.handle_key(key(KeyCode::Esc), &props, &mut actions).unwrap();
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(prefs.focus(), Focus::Menu);
        let outcome = prefs.handle_key(key(KeyCode::Esc), &props, &mut actions).unwrap();
        assert_eq!(outcome, KeyOutcome::Quit);
    }

    #[test]
    fn test_render_empty_list_shows_placeholder() {
        let mut prefs = AwsPrefs::new();
        let text = screen(&mut prefs, &props(vec![]));
        assert!(text.contains("There are no EC2 Profiles available"));
        assert!(text.contains("AWS EC2"));
        assert!(!text.contains("Delete"));
        assert!(!text.contains("Save"));
    }

    #[test]
    fn test_render_draft_shows_save() {
        let mut prefs = AwsPrefs::new();
        let text = screen(&mut prefs, &props(vec![draft("dev", "")]));
        assert!(text.contains("[d] Delete"));
        assert!(text.contains("[s] Save"));
        assert!(!text.contains("There are no EC2 Profiles available"));
    }

    #[test]
    fn test_render_persisted_hides_save() {
        let mut prefs = AwsPrefs::new();
        let text = screen(&mut prefs, &props(vec![saved("prod")]));
        assert!(text.contains("[d] Delete"));
        assert!(!text.contains("[s] Save"));
    }

    #[test]
    fn test_render_local_error_takes_precedence() {
        let mut props = props(vec![draft("", "")]);
        props.error = Some("Network unreachable".to_string());
        let mut prefs = AwsPrefs::new();

        let text = screen(&mut prefs, &props);
        assert!(text.contains("Network unreachable"));

        let mut actions = MockPrefsActions::new();
        prefs.save_item(&props, &mut actions);
        let text = screen(&mut prefs, &props);
        assert!(text.contains(ERR_EMPTY_NAME));
        assert!(!text.contains("Network unreachable"));
    }

    #[test]
    fn test_render_confirmation_prompt() {
        let props = props(vec![saved("prod")]);
        let mut actions = MockPrefsActions::new();
        let mut prefs = AwsPrefs::new();
        prefs.remove_item(&props, &mut actions);

        let text = screen(&mut prefs, &props);
        assert!(text.contains(CONFIRM_DELETE));
    }
}
