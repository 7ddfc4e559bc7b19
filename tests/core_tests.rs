use jarvis::normalize::normalize;
use jarvis::state::{SessionState, StateMachine};

#[test]
fn known_mishearings_are_repaired() {
    assert_eq!(normalize("kenya open chrome"), "can you open chrome");
    assert_eq!(normalize("jobless what time"), "jarvis time");
    assert_eq!(normalize("please shut down now"), "please shutdown now");
    assert_eq!(normalize("go to sleep"), "shutdown");
}

#[test]
fn longer_patterns_win_over_their_prefixes() {
    // "search torture" must be repaired as a unit, not left as a bare
    // "search" plus garbage.
    assert_eq!(normalize("search torture quantum computing"), "search for quantum computing");
}

#[test]
fn clean_input_passes_through() {
    assert_eq!(normalize("open the downloads folder"), "open the downloads folder");
    assert_eq!(normalize(""), "");
}

#[test]
fn transitions_update_state_and_timestamp() {
    let mut machine = StateMachine::new();
    assert_eq!(machine.current(), SessionState::Idle);

    let before = machine.last_transition();
    machine.transition(SessionState::FocusMode);
    assert_eq!(machine.current(), SessionState::FocusMode);
    assert!(machine.last_transition() >= before);
}

#[test]
fn self_transitions_do_not_touch_the_timestamp() {
    let mut machine = StateMachine::new();
    machine.transition(SessionState::Chatting);
    let stamp = machine.last_transition();

    std::thread::sleep(std::time::Duration::from_millis(5));
    machine.transition(SessionState::Chatting);
    assert_eq!(machine.last_transition(), stamp, "a no-op transition must not reset the clock");
}
