//! End-to-end flow: typed form input through to the revealed card.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sweet_surprise::sequencer::{Phase, Sequencer};
use sweet_surprise::tui::form_app::{handle_key, FormSignal, FormState};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(state: &mut FormState, text: &str) {
    for c in text.chars() {
        let key = if c == '\n' {
            press(KeyCode::Enter)
        } else {
            press(KeyCode::Char(c))
        };
        handle_key(state, key);
    }
}

#[test]
fn mia_scenario_reaches_satisfied_with_the_message_intact() {
    // Fill the form the way a user would
    let mut form = FormState::default();
    type_str(&mut form, "Mia");
    handle_key(&mut form, press(KeyCode::Tab));
    type_str(&mut form, "You mean everything to me.");

    // Submit via the button
    handle_key(&mut form, press(KeyCode::Tab));
    let signal = handle_key(&mut form, press(KeyCode::Enter));
    assert_eq!(signal, FormSignal::Submitted);

    let greeting = form.greeting.clone();
    assert_eq!(greeting.name, "Mia");
    assert_eq!(greeting.message, "You mean everything to me.");

    // The card view arms a run on open; by 4200ms the phase is Satisfied
    let mut seq = Sequencer::new(false);
    seq.start(true);
    seq.tick_at(Duration::from_millis(4200), false);
    assert_eq!(seq.phase(), Phase::Satisfied);

    // The displayed message is the literal input, unmodified
    assert_eq!(greeting.message, "You mean everything to me.");
}

#[test]
fn empty_fields_leave_the_trigger_inert() {
    let mut form = FormState::default();
    type_str(&mut form, "Mia");
    // Message untouched: submit must not fire from anywhere
    handle_key(&mut form, press(KeyCode::Tab));
    handle_key(&mut form, press(KeyCode::Tab));
    let signal = handle_key(&mut form, press(KeyCode::Enter));
    assert_eq!(signal, FormSignal::Continue);
}

#[test]
fn multiline_message_survives_the_form_verbatim() {
    let mut form = FormState::default();
    type_str(&mut form, "Mia");
    handle_key(&mut form, press(KeyCode::Tab));
    type_str(&mut form, "first\n\nthird");

    assert_eq!(form.greeting.message, "first\n\nthird");
    assert!(form.greeting.is_valid());
}

#[test]
fn edit_round_trip_preserves_fields() {
    let mut form = FormState::default();
    type_str(&mut form, "Mia");
    handle_key(&mut form, press(KeyCode::Tab));
    type_str(&mut form, "hello");

    // Simulate returning from the card view: a new form opens prefilled
    let reopened = FormState {
        greeting: form.greeting.clone(),
        ..FormState::default()
    };
    assert_eq!(reopened.greeting, form.greeting);
}
