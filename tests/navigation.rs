//! End-to-end navigation through the Engine with an in-memory backend
//!
//! Drives the dashboard the way the TUI does (key messages in, background
//! results drained) and checks pages, history and panel state.

use serde_json::json;
use tokio::time::{timeout, Duration};

use tabdeck_app::app;
use tabdeck_app::config::Settings;
use tabdeck_app::panels::PanelState;
use tabdeck_app::state::{AppState, UiMode};
use tabdeck_app::tabs;
use tabdeck_app::{Engine, InputKey, MemoryBackend, Message};
use tabdeck_core::NativeLocation;

fn at(href: &str) -> NativeLocation {
    NativeLocation::parse_href(href).unwrap()
}

fn backend() -> MemoryBackend {
    MemoryBackend::new()
        .with_response("/feature-flags", json!({"weatherReports": true}))
        .with_response(
            "/tabs",
            json!([{"id": 1, "name": "Sales"}, {"id": 2, "name": "Ops"}]),
        )
        .with_response(
            "/tab/1",
            json!([
                {"type": "singleValue", "value": 3},
                {"type": "weather", "place": "Oslo", "isOkay": true}
            ]),
        )
        .with_response(
            "/tab/2",
            json!([
                {"type": "text", "value": "notes"},
                {"type": "animal", "value": "cat"}
            ]),
        )
}

/// Process background messages until `done` holds for the state.
async fn settle_until<F>(engine: &mut Engine<MemoryBackend>, done: F)
where
    F: Fn(&AppState) -> bool,
{
    while !done(&engine.state) {
        let processed = timeout(Duration::from_secs(2), engine.process_next())
            .await
            .expect("timed out waiting for the engine");
        assert!(processed, "message channel closed");
    }
}

fn key(engine: &mut Engine<MemoryBackend>, c: char) {
    engine.process_message(Message::Key(InputKey::Char(c)));
}

fn single_value(state: &AppState) -> Option<i64> {
    state.visible_panels().iter().find_map(|(_, panel)| match panel {
        PanelState::SingleValue(single) => Some(single.value),
        _ => None,
    })
}

fn panels_loaded(state: &AppState, id: i64) -> bool {
    state
        .active_tab()
        .is_some_and(|tab| tab.id == id && !tab.panels().is_empty())
}

#[tokio::test]
async fn test_welcome_to_tab_via_keys() {
    let mut engine = Engine::new(Settings::default(), at("/"), backend());
    assert_eq!(engine.state.app.page, app::Page::Welcome);

    key(&mut engine, 't');
    settle_until(&mut engine, |state| {
        matches!(
            state.app.tabs(),
            Some(tabs::State::Ready {
                page: tabs::Page::ChooseATab,
                ..
            })
        )
    })
    .await;
    assert_eq!(engine.state.href(), "/tabs");
    assert_eq!(engine.state.tab_list().len(), 2);

    key(&mut engine, '1');
    settle_until(&mut engine, |state| panels_loaded(state, 1)).await;
    assert_eq!(engine.state.href(), "/tabs/1");
    assert_eq!(single_value(&engine.state), Some(3));
}

#[tokio::test]
async fn test_panel_interaction_and_history() {
    let mut engine = Engine::new(Settings::default(), at("/tabs/1"), backend());
    settle_until(&mut engine, |state| {
        panels_loaded(state, 1) && state.app.weather_reports_enabled()
    })
    .await;
    assert_eq!(engine.state.visible_panels().len(), 2);

    key(&mut engine, '+');
    key(&mut engine, '+');
    assert_eq!(single_value(&engine.state), Some(5));

    // Switching tabs replaces the tab state
    key(&mut engine, '2');
    settle_until(&mut engine, |state| panels_loaded(state, 2)).await;
    assert_eq!(engine.state.href(), "/tabs/2");

    // Back re-creates tab 1 from a fresh fetch
    key(&mut engine, 'b');
    settle_until(&mut engine, |state| panels_loaded(state, 1)).await;
    assert_eq!(engine.state.href(), "/tabs/1");
    assert_eq!(single_value(&engine.state), Some(3));

    key(&mut engine, 'f');
    settle_until(&mut engine, |state| panels_loaded(state, 2)).await;
    assert_eq!(
        engine.current_location().map(|location| location.pathname),
        Some("/tabs/2".to_string())
    );
}

#[tokio::test]
async fn test_address_bar_and_not_found() {
    let mut engine = Engine::new(Settings::default(), at("/"), backend());

    key(&mut engine, 'g');
    assert_eq!(engine.state.ui_mode(), UiMode::AddressBar);

    // The bar opens with the current href; clear it first
    while engine
        .state
        .ui
        .address_bar
        .as_deref()
        .is_some_and(|input| !input.is_empty())
    {
        engine.process_message(Message::Key(InputKey::Backspace));
    }
    for c in "/nowhere".chars() {
        key(&mut engine, c);
    }
    engine.process_message(Message::Key(InputKey::Enter));

    settle_until(&mut engine, |state| state.app.page == app::Page::NotFound).await;
    assert_eq!(engine.state.ui_mode(), UiMode::Normal);
    assert_eq!(engine.state.href(), "/nowhere");

    key(&mut engine, 'a');
    settle_until(&mut engine, |state| state.app.page == app::Page::About).await;
    assert_eq!(engine.state.href(), "/about");
}

#[tokio::test]
async fn test_login_gate() {
    let mut settings = Settings::default();
    settings.behavior.require_login = true;
    let mut engine = Engine::new(settings, at("/about"), backend());

    assert_eq!(engine.state.ui_mode(), UiMode::Login);
    // Navigation keys are login input while logged out
    key(&mut engine, 'q');
    assert!(!engine.should_quit());

    engine.process_message(Message::Key(InputKey::Enter));
    assert!(engine.state.app.is_logged_in);
    assert_eq!(engine.state.app.page, app::Page::About);

    key(&mut engine, 'q');
    assert!(engine.should_quit());
}

#[tokio::test]
async fn test_unreachable_tab_shows_failure_and_reloads() {
    let mut engine = Engine::new(Settings::default(), at("/tabs/9"), backend());

    settle_until(&mut engine, |state| {
        state
            .active_tab()
            .is_some_and(|tab| matches!(tab.data, tabdeck_app::tab::Data::Failed { .. }))
    })
    .await;

    let before = engine.backend().requests().len();
    key(&mut engine, 'r');
    settle_until(&mut engine, |state| {
        state
            .active_tab()
            .is_some_and(|tab| matches!(tab.data, tabdeck_app::tab::Data::Failed { .. }))
    })
    .await;
    let requests = engine.backend().requests();
    assert!(requests.len() > before);
    assert_eq!(requests.last().map(String::as_str), Some("/tab/9"));
}
