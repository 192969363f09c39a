//! Drive the app through the wizard the way the main loop does, without a
//! terminal.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use post_project::app::App;
use post_project::core::{NotifyLevel, Route, Router};
use post_project::domain::project::{Step, MAX_BUDGET_LEN};
use post_project::infrastructure::crosschain::DemoCrossChain;
use post_project::modules::post_project::submission::{
    cross_chain_message, FAILED_MESSAGE, POSTED_MESSAGE,
};
use post_project::modules::post_project::{Field, SubmissionHandler, SubmissionOutcome};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.handle_key(key(*code));
    }
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

fn step(app: &App) -> Step {
    app.wizard().map(|w| w.step()).expect("wizard mounted")
}

fn handler() -> SubmissionHandler {
    SubmissionHandler::new(Arc::new(DemoCrossChain::new()))
}

#[test]
fn test_home_opens_wizard_on_first_step() {
    let mut app = App::new();
    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.current_path(), "/");
    assert!(app.wizard().is_none());

    press(&mut app, &[KeyCode::Char('p')]);
    assert_eq!(app.route(), Route::PostProject);
    assert_eq!(app.current_path(), "/post-project");
    assert_eq!(step(&app), Step::Details);
    assert!(!app.wizard().unwrap().state().is_cross_chain);
    assert!(!app.wizard().unwrap().state().is_loading);
}

#[test]
fn test_back_and_next_clamp_at_the_ends() {
    let mut app = App::new();
    app.push("/post-project");

    press(&mut app, &[KeyCode::Char('[')]);
    assert_eq!(step(&app), Step::Details);

    press(&mut app, &[KeyCode::Char(']'); 5]);
    assert_eq!(step(&app), Step::Review);

    press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
    assert_eq!(step(&app), Step::Skills);
}

#[tokio::test]
async fn test_standard_submission_returns_home() {
    let mut app = App::new();
    app.push("/post-project");

    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "Wallet redesign");
    press(&mut app, &[KeyCode::Enter]);
    press(&mut app, &[KeyCode::Char(']'); 3]);
    assert_eq!(step(&app), Step::Review);

    press(&mut app, &[KeyCode::Enter]);
    assert!(app.wizard().unwrap().state().is_loading);
    let request = app.take_submission_request().expect("submission queued");
    assert_eq!(request.draft.title, "Wallet redesign");
    assert_eq!(request.destination_chain_id, None);
    assert!(app.take_submission_request().is_none());

    let outcome = handler().run(request).await;
    assert_eq!(outcome.message, POSTED_MESSAGE);
    app.apply_submission_finished(outcome);

    assert_eq!(app.route(), Route::Home);
    assert!(app.wizard().is_none());
    let notice = app.notice().expect("confirmation shown");
    assert_eq!(notice.text, POSTED_MESSAGE);
    assert_eq!(notice.level, NotifyLevel::Info);

    press(&mut app, &[KeyCode::Enter]);
    assert!(app.notice().is_none());
    assert_eq!(app.route(), Route::Home);
}

#[tokio::test]
async fn test_cross_chain_submission_names_destination() {
    let mut app = App::new();
    app.apply_network_detected(Some(43113), "static".to_string());
    app.push("/post-project");
    press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
    assert_eq!(step(&app), Step::Budget);

    press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
    assert_eq!(
        app.wizard().unwrap().focused_field(),
        Some(Field::CrossChain)
    );
    press(&mut app, &[KeyCode::Char(' ')]);
    assert!(app.wizard().unwrap().shows_chain_selector());

    press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
    assert!(app.captures_input());
    // Fuji is the current chain and is hidden: C-Chain, DFK, Dispatch
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    assert!(!app.captures_input());
    assert_eq!(
        app.wizard().unwrap().state().destination_chain_id,
        Some(53935)
    );

    press(&mut app, &[KeyCode::Char(']')]);
    press(&mut app, &[KeyCode::Char('s')]);
    let request = app.take_submission_request().expect("submission queued");
    assert_eq!(request.source_chain_id, Some(43113));
    assert_eq!(request.destination_chain_id, Some(53935));

    let outcome = handler().run(request).await;
    assert_eq!(outcome.message, cross_chain_message(53935));
    app.apply_submission_finished(outcome);
    assert_eq!(app.route(), Route::Home);
    assert_eq!(
        app.notice().map(|n| n.text.as_str()),
        Some("Cross-chain project will be created on chain 53935! (Demo Mode)")
    );
}

#[tokio::test]
async fn test_cross_chain_without_destination_posts_standard() {
    let mut app = App::new();
    app.push("/post-project");
    if let Some(wizard) = app.wizard_mut() {
        wizard.advance();
        wizard.advance();
        wizard.toggle_cross_chain();
        wizard.advance();
    }
    press(&mut app, &[KeyCode::Enter]);
    let request = app.take_submission_request().expect("submission queued");
    assert_eq!(request.destination_chain_id, None);
    assert_eq!(handler().run(request).await.message, POSTED_MESSAGE);
}

#[tokio::test]
async fn test_failed_submission_stays_on_review() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "1.2.3");
    press(&mut app, &[KeyCode::Enter]);
    // Budget input filter keeps only one decimal point
    assert_eq!(app.wizard().unwrap().state().draft.budget, "1.23");

    if let Some(wizard) = app.wizard_mut() {
        wizard.advance();
    }
    press(&mut app, &[KeyCode::Enter]);
    let mut request = app.take_submission_request().expect("submission queued");
    request.draft.budget = "1.2.3".to_string();

    let outcome = handler().run(request).await;
    assert!(!outcome.is_success());
    app.apply_submission_finished(outcome);

    assert_eq!(app.route(), Route::PostProject);
    assert_eq!(step(&app), Step::Review);
    assert!(!app.wizard().unwrap().state().is_loading);
    assert_eq!(app.notice().map(|n| n.text.as_str()), Some(FAILED_MESSAGE));
}

#[test]
fn test_leaving_and_returning_resets_wizard() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "Draft");
    press(&mut app, &[KeyCode::Enter, KeyCode::Char(']')]);
    assert_eq!(step(&app), Step::Skills);

    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.route(), Route::Home);

    press(&mut app, &[KeyCode::Char('p')]);
    assert_eq!(step(&app), Step::Details);
    assert!(app.wizard().unwrap().state().draft.title.is_empty());
}

#[test]
fn test_worker_loss_clears_loading() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Char(']'); 3]);
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.wizard().unwrap().state().is_loading);

    app.apply_worker_lost();
    assert!(!app.wizard().unwrap().state().is_loading);
    assert_eq!(app.notice().map(|n| n.text.as_str()), Some(FAILED_MESSAGE));
    let (_, level) = app.status_text().expect("status set");
    assert_eq!(level, NotifyLevel::Error);
}

#[test]
fn test_unknown_path_is_ignored() {
    let mut app = App::new();
    app.push("/nowhere");
    assert_eq!(app.route(), Route::Home);
    assert!(matches!(app.status_text(), Some((_, NotifyLevel::Warn))));

    app.push("/post-project/");
    assert_eq!(app.route(), Route::PostProject);
}

#[test]
fn test_quit_and_help_keys() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Char('?')]);
    assert!(app.help_open);
    // Help swallows everything but ? and Esc
    press(&mut app, &[KeyCode::Char('q')]);
    assert!(!app.should_quit);
    press(&mut app, &[KeyCode::Esc, KeyCode::Char('q')]);
    assert!(app.should_quit);
}

#[test]
fn test_q_is_text_while_editing() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "quiz");
    assert!(!app.should_quit);
    assert_eq!(app.wizard().unwrap().state().draft.title, "quiz");

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_reply_from_earlier_visit_keeps_new_wizard_loading() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Char(']'); 3]);
    press(&mut app, &[KeyCode::Enter]);
    let first = app.take_submission_request().expect("first submission");

    press(&mut app, &[KeyCode::Esc, KeyCode::Char('p')]);
    assert_eq!(app.route(), Route::PostProject);
    press(&mut app, &[KeyCode::Char(']'); 3]);
    press(&mut app, &[KeyCode::Enter]);
    let second = app.take_submission_request().expect("second submission");
    assert_ne!(first.mount_id, second.mount_id);

    app.apply_submission_finished(SubmissionOutcome::failed(first.mount_id));
    assert_eq!(app.notice().map(|n| n.text.as_str()), Some(FAILED_MESSAGE));
    assert!(app.wizard().unwrap().state().is_loading);

    // Dismiss the notice, then try to post again while the second is in flight
    press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
    assert!(app.take_submission_request().is_none());
    assert!(app.wizard().unwrap().state().is_loading);

    app.apply_submission_finished(SubmissionOutcome::failed(second.mount_id));
    assert!(!app.wizard().unwrap().state().is_loading);
}

#[test]
fn test_r_requests_chain_detection() {
    let mut app = App::new();
    assert!(!app.take_detect_request());

    press(&mut app, &[KeyCode::Char('r')]);
    assert!(app.take_detect_request());
    assert!(!app.take_detect_request());
    assert!(matches!(app.status_text(), Some((_, NotifyLevel::Info))));

    // Typed as text while a field is being edited
    app.push("/post-project");
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "rr");
    assert!(!app.take_detect_request());
    assert_eq!(app.wizard().unwrap().state().draft.title, "rr");
}

#[tokio::test]
async fn test_long_budget_is_capped_while_typing() {
    let mut app = App::new();
    app.push("/post-project");
    press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
    press(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, &"9".repeat(77));
    press(&mut app, &[KeyCode::Enter]);
    let budget = app.wizard().unwrap().state().draft.budget.clone();
    assert_eq!(budget, "9".repeat(MAX_BUDGET_LEN));

    press(&mut app, &[KeyCode::Char(']')]);
    press(&mut app, &[KeyCode::Enter]);
    let request = app.take_submission_request().expect("submission queued");
    let outcome = handler().run(request).await;
    assert_eq!(outcome.message, POSTED_MESSAGE);
}
