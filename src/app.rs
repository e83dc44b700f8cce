//! Application state and key handling

use crate::platform::is_shortcut;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use signup_tui::account::AccountService;
use signup_tui::config::AppConfig;
use signup_tui::state::{Field, FieldKind, FormState, SubmissionPhase};
use signup_tui::submission::{SubmissionController, SubmissionEvent, SubmitOutcome, Transition};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

/// What has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    SubmitButton,
}

impl Focus {
    const ORDER_LEN: usize = Field::ALL.len() + 1;

    fn index(self) -> usize {
        match self {
            Self::Field(field) => Field::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or_default(),
            Self::SubmitButton => Field::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        Field::ALL
            .get(index)
            .map_or(Self::SubmitButton, |field| Self::Field(*field))
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ORDER_LEN)
    }

    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::ORDER_LEN - 1) % Self::ORDER_LEN)
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::SubmitButton => None,
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(Field::FirstName)
    }
}

/// Message shown above the help line until it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub expires_at: Instant,
}

/// Main application struct
pub struct App {
    pub form: FormState,
    controller: SubmissionController,
    pub focus: Focus,
    pub show_passwords: bool,
    pub banner: Option<Banner>,
    submitting_since: Option<Instant>,
    submit_delay: Duration,
    banner_timeout: Duration,
    mask_passwords: bool,
    quit: bool,
}

impl App {
    /// Create the app and the receiver its deferred transitions report to
    pub fn new(
        config: &AppConfig,
        service: Arc<dyn AccountService>,
    ) -> (Self, UnboundedReceiver<SubmissionEvent>) {
        let (controller, events) = SubmissionController::channel(service);
        let controller = controller.with_auto_dismiss(config.success_dismiss());
        let app = Self {
            form: FormState::new(),
            controller,
            focus: Focus::default(),
            show_passwords: !config.mask_passwords(),
            banner: None,
            submitting_since: None,
            submit_delay: config.submit_delay(),
            banner_timeout: config.banner_timeout(),
            mask_passwords: config.mask_passwords(),
            quit: false,
        };
        (app, events)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Frames need redrawing quickly while something is moving
    pub fn is_animating(&self) -> bool {
        self.submitting_since.is_some() || self.banner.is_some()
    }

    /// Eased 0.0..=1.0 progress of the simulated sign-up
    pub fn submit_progress(&self, now: Instant) -> Option<f64> {
        let started = self.submitting_since?;
        let progress = if self.submit_delay.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started).as_secs_f32();
            (elapsed / self.submit_delay.as_secs_f32()).min(1.0)
        };
        Some(f64::from(simple_easing::cubic_out(progress)))
    }

    /// Expire the banner once its time is up
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| now >= b.expires_at) {
            self.banner = None;
        }
    }

    fn show_banner(&mut self, message: String) {
        self.banner = Some(Banner {
            message,
            expires_at: Instant::now() + self.banner_timeout,
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Success dialog is modal
        if matches!(self.form.phase(), SubmissionPhase::Succeeded(_)) {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc)
                && self.controller.dismiss(&mut self.form)
            {
                self.after_reset();
            }
            return Ok(());
        }

        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('p') => self.show_passwords = !self.show_passwords,
                KeyCode::Char('r') => {
                    self.controller.reset(&mut self.form);
                    self.after_reset();
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.move_focus(self.focus.next()),
            KeyCode::BackTab => self.move_focus(self.focus.prev()),
            KeyCode::Esc => self.banner = None,
            _ => match self.focus {
                Focus::SubmitButton => {
                    if key.code == KeyCode::Enter {
                        self.submit();
                    }
                }
                Focus::Field(field) => self.edit_field(field, key.code),
            },
        }
        Ok(())
    }

    fn edit_field(&mut self, field: Field, code: KeyCode) {
        match field.kind() {
            FieldKind::Checkbox => {
                if code == KeyCode::Char(' ') {
                    let checked = self.form.values().terms;
                    self.form.set_value(field, !checked);
                }
            }
            FieldKind::Choice => match code {
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_choice(field, true),
                KeyCode::Left => self.cycle_choice(field, false),
                KeyCode::Enter => self.move_focus(self.focus.next()),
                _ => {}
            },
            FieldKind::Text | FieldKind::Secret | FieldKind::Date | FieldKind::Multiline => {
                match code {
                    KeyCode::Char(c) => self.input_char(field, c),
                    KeyCode::Backspace => {
                        let mut value = self.form.values().text(field).to_string();
                        if value.pop().is_some() {
                            self.form.set_value(field, value);
                        }
                    }
                    KeyCode::Enter if field.kind() == FieldKind::Multiline => {
                        self.input_char(field, '\n')
                    }
                    KeyCode::Enter => self.move_focus(self.focus.next()),
                    _ => {}
                }
            }
        }
    }

    fn input_char(&mut self, field: Field, c: char) {
        let current = self.form.values().text(field);
        if field
            .input_limit()
            .is_some_and(|limit| current.chars().count() >= limit)
        {
            return;
        }
        let mut value = current.to_string();
        value.push(c);
        self.form.set_value(field, value);
    }

    /// Step through a closed set; an empty value starts at either end
    fn cycle_choice(&mut self, field: Field, forward: bool) {
        let choices = field.choices();
        if choices.is_empty() {
            return;
        }
        let current = choices
            .iter()
            .position(|c| *c == self.form.values().text(field));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => choices.len() - 1,
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
        };
        self.form.set_value(field, choices[next]);
    }

    /// Leaving a field counts as a blur
    fn move_focus(&mut self, to: Focus) {
        if let Some(field) = self.focus.field() {
            self.form.mark_touched(field);
        }
        self.focus = to;
    }

    fn submit(&mut self) {
        match self.controller.submit(&mut self.form) {
            SubmitOutcome::Accepted => {
                self.banner = None;
                self.submitting_since = Some(Instant::now());
            }
            SubmitOutcome::Rejected(errors) => {
                if let Some(first) = errors.fields().next() {
                    self.move_focus(Focus::Field(first));
                }
                self.show_banner(errors.summary());
            }
            SubmitOutcome::Failed(message) => self.show_banner(message),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Apply a deferred transition reported by the submission controller
    pub fn handle_submission_event(&mut self, event: SubmissionEvent) {
        match self.controller.handle_event(&mut self.form, event) {
            Transition::Succeeded(_) => self.submitting_since = None,
            Transition::Failed(message) => {
                self.submitting_since = None;
                self.show_banner(format!("Registration failed: {message}"));
            }
            Transition::Dismissed => self.after_reset(),
            Transition::Stale => {}
        }
    }

    fn after_reset(&mut self) {
        self.focus = Focus::default();
        self.show_passwords = !self.mask_passwords;
        self.submitting_since = None;
        self.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use signup_tui::account::SimulatedAccountService;

    fn test_app() -> (App, UnboundedReceiver<SubmissionEvent>) {
        let config = AppConfig {
            submit_delay_ms: Some(0),
            success_dismiss_ms: Some(0),
            ..Default::default()
        };
        let service = SimulatedAccountService::new(config.submit_delay());
        App::new(&config, Arc::new(service))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn focus(app: &mut App, field: Field) {
        app.focus = Focus::Field(field);
    }

    fn fill_valid(app: &mut App) {
        for (field, text) in [
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Username, "ada_l"),
            (Field::Password, "Abc12345!"),
            (Field::ConfirmPassword, "Abc12345!"),
            (Field::BirthDate, "1990-12-10"),
        ] {
            focus(app, field);
            type_str(app, text);
        }
        focus(app, Field::Gender);
        press(app, KeyCode::Right);
        focus(app, Field::Profession);
        press(app, KeyCode::Left);
        focus(app, Field::Terms);
        press(app, KeyCode::Char(' '));
    }

    mod focus_tests {
        use super::*;

        #[test]
        fn test_tab_cycles_through_fields_and_button() {
            let mut focus = Focus::default();
            for _ in 0..Field::ALL.len() {
                focus = focus.next();
            }
            assert_eq!(focus, Focus::SubmitButton);
            assert_eq!(focus.next(), Focus::Field(Field::FirstName));
        }

        #[test]
        fn test_back_tab_wraps_to_button() {
            assert_eq!(Focus::default().prev(), Focus::SubmitButton);
        }

        #[tokio::test]
        async fn test_leaving_a_field_marks_it_touched() {
            let (mut app, _rx) = test_app();
            press(&mut app, KeyCode::Tab);
            assert!(app.form.touched().contains(Field::FirstName));
            assert_eq!(app.focus, Focus::Field(Field::LastName));
        }
    }

    mod input_tests {
        use super::*;

        #[tokio::test]
        async fn test_typing_updates_value_and_errors() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::Username);
            type_str(&mut app, "ab");
            assert_eq!(app.form.values().username, "ab");
            assert!(app.form.errors().contains(Field::Username));
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.form.values().username, "a");
        }

        #[tokio::test]
        async fn test_input_is_capped_at_limit() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::Username);
            type_str(&mut app, &"a".repeat(30));
            assert_eq!(app.form.values().username.len(), 20);
        }

        #[tokio::test]
        async fn test_choice_cycles_both_ways() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::Gender);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.form.values().gender, "male");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.form.values().gender, "other");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.form.values().gender, "female");
        }

        #[tokio::test]
        async fn test_space_toggles_terms() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::Terms);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.form.values().terms);
            press(&mut app, KeyCode::Char(' '));
            assert!(!app.form.values().terms);
        }

        #[tokio::test]
        async fn test_enter_adds_newline_in_about_me() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::AboutMe);
            type_str(&mut app, "hi");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.form.values().about_me, "hi\n");
            assert_eq!(app.focus, Focus::Field(Field::AboutMe));
        }

        #[tokio::test]
        async fn test_altgr_characters_are_typed() {
            let (mut app, _rx) = test_app();
            focus(&mut app, Field::Email);
            type_str(&mut app, "ada");
            app.handle_key(KeyEvent::new(
                KeyCode::Char('@'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ))
            .unwrap();
            assert_eq!(app.form.values().email, "ada@");
        }

        #[tokio::test]
        async fn test_ctrl_p_toggles_password_visibility() {
            let (mut app, _rx) = test_app();
            assert!(!app.show_passwords);
            ctrl(&mut app, 'p');
            assert!(app.show_passwords);
        }
    }

    mod submit_tests {
        use super::*;

        #[tokio::test]
        async fn test_rejected_submit_shows_banner() {
            let (mut app, _rx) = test_app();
            ctrl(&mut app, 's');
            let banner = app.banner.as_ref().unwrap();
            assert!(banner
                .message
                .starts_with("Please fix the following errors: firstName: First name is required"));
            assert_eq!(app.form.phase(), &SubmissionPhase::Editing);
        }

        #[tokio::test]
        async fn test_rejected_submit_focuses_first_error() {
            let (mut app, _rx) = test_app();
            fill_valid(&mut app);
            app.form.set_value(Field::Username, "ab");
            app.form.set_value(Field::Terms, false);
            app.focus = Focus::SubmitButton;
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.focus, Focus::Field(Field::Username));
        }

        #[tokio::test]
        async fn test_ctrl_r_cancels_submission_and_clears_form() {
            let (mut app, mut rx) = test_app();
            fill_valid(&mut app);
            ctrl(&mut app, 's');
            assert_eq!(app.form.phase(), &SubmissionPhase::Submitting);

            ctrl(&mut app, 'r');
            tokio::task::yield_now().await;

            assert!(rx.try_recv().is_err());
            assert_eq!(app.form.phase(), &SubmissionPhase::Editing);
            assert!(app.form.values().email.is_empty());
            assert!(app.submit_progress(Instant::now()).is_none());
            assert_eq!(app.focus, Focus::default());
        }

        #[tokio::test]
        async fn test_banner_expires() {
            let (mut app, _rx) = test_app();
            ctrl(&mut app, 's');
            let expires_at = app.banner.as_ref().unwrap().expires_at;
            app.tick(expires_at - Duration::from_millis(1));
            assert!(app.banner.is_some());
            app.tick(expires_at);
            assert!(app.banner.is_none());
        }

        #[tokio::test]
        async fn test_valid_submit_then_dismiss() {
            let (mut app, mut rx) = test_app();
            fill_valid(&mut app);
            app.focus = Focus::SubmitButton;
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.form.phase(), &SubmissionPhase::Submitting);
            assert!(app.submit_progress(Instant::now()).is_some());

            let event = rx.recv().await.unwrap();
            app.handle_submission_event(event);
            assert_eq!(
                app.form.snapshot().confirmation(),
                Some(("ada_l", "ada@example.com"))
            );
            assert!(app.submit_progress(Instant::now()).is_none());

            // Typing is swallowed by the dialog
            type_str(&mut app, "x");
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.form.phase(), &SubmissionPhase::Editing);
            assert!(app.form.values().username.is_empty());
            assert_eq!(app.focus, Focus::default());
        }
    }
}
