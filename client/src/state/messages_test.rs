use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_message(id: i64, sender: &str, body: &str) -> Message {
    Message {
        id,
        sender: sender.to_owned(),
        message: body.to_owned(),
        timestamp: "2024-01-01T10:00:00Z".to_owned(),
    }
}

fn loaded_with(messages: Vec<Message>) -> MessageBoardState {
    let mut state = MessageBoardState::default();
    state.finish_load(Ok(messages));
    state
}

// =============================================================
// Defaults / view states
// =============================================================

#[test]
fn default_state_is_loading_with_empty_form() {
    let state = MessageBoardState::default();
    assert!(state.loading);
    assert!(!state.sending);
    assert!(state.messages.is_empty());
    assert!(state.sender.is_empty());
    assert!(state.body.is_empty());
    assert_eq!(state.view(), BoardView::Loading);
}

#[test]
fn failed_load_ends_in_error_with_empty_list() {
    let mut state = MessageBoardState::default();
    state.finish_load(Err(RequestFailure::Status(500)));
    assert!(!state.loading);
    assert!(state.messages.is_empty());
    assert_eq!(state.view(), BoardView::Error);
    assert_eq!(
        state.load_error.as_ref().map(ToString::to_string).as_deref(),
        Some("Failed to load messages: 500")
    );
}

#[test]
fn transport_failure_surfaces_transport_message() {
    let mut state = MessageBoardState::default();
    state.finish_load(Err(RequestFailure::Transport("Failed to fetch".to_owned())));
    assert_eq!(
        state.load_error.map(|e| e.to_string()).as_deref(),
        Some("Failed to load messages: Failed to fetch")
    );
}

#[test]
fn empty_fetch_is_ready_empty() {
    let state = loaded_with(Vec::new());
    assert!(!state.loading);
    assert_eq!(state.view(), BoardView::ReadyEmpty);
}

#[test]
fn fetch_of_n_messages_keeps_backend_order() {
    let state = loaded_with(vec![make_message(3, "C", "c"), make_message(1, "A", "a"), make_message(2, "B", "b")]);
    assert_eq!(state.view(), BoardView::ReadyWithMessages);
    assert_eq!(state.rendered_ids(), vec![3, 1, 2]);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_trims_payload_and_marks_sending() {
    let mut state = loaded_with(Vec::new());
    state.sender = "  Bo ".to_owned();
    state.body = " Agreed! \n".to_owned();

    let attempt = state.begin_submit();
    assert_eq!(
        attempt,
        SubmitAttempt::Send(NewMessage { sender: "Bo".to_owned(), message: "Agreed!".to_owned() })
    );
    assert!(state.sending);
    assert!(!state.can_submit());
}

#[test]
fn blank_fields_fail_validation_without_payload() {
    let cases = [("", "hello"), ("Ada", ""), ("   ", "hello"), ("Ada", " \t\n"), ("", "")];
    for (sender, body) in cases {
        let mut state = loaded_with(Vec::new());
        state.sender = sender.to_owned();
        state.body = body.to_owned();
        assert_eq!(state.begin_submit(), SubmitAttempt::Invalid, "sender={sender:?} body={body:?}");
        assert!(!state.sending);
        assert_eq!(state.form_error, Some(BoardError::Validation));
        assert_eq!(
            state.form_error.as_ref().map(ToString::to_string).as_deref(),
            Some("Please enter both your name and a message")
        );
    }
}

#[test]
fn successful_submit_appends_one_and_clears_only_body() {
    let mut state = loaded_with(vec![make_message(1, "Ada", "Loved Clean Code")]);
    state.sender = "Bo".to_owned();
    state.body = "Agreed!".to_owned();

    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));
    state.finish_submit(Ok(make_message(2, "Bo", "Agreed!")));

    assert_eq!(state.rendered_ids(), vec![1, 2]);
    assert_eq!(state.messages[1].sender, "Bo");
    assert_eq!(state.sender, "Bo");
    assert!(state.body.is_empty());
    assert!(!state.sending);
    assert!(state.form_error.is_none());
}

#[test]
fn failed_submit_preserves_typed_text() {
    let mut state = loaded_with(vec![make_message(1, "Ada", "hi")]);
    state.sender = "Bo".to_owned();
    state.body = "Agreed!".to_owned();

    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));
    state.finish_submit(Err(RequestFailure::Status(503)));

    assert_eq!(state.rendered_ids(), vec![1]);
    assert_eq!(state.sender, "Bo");
    assert_eq!(state.body, "Agreed!");
    assert!(!state.sending);
    assert_eq!(
        state.form_error.as_ref().map(ToString::to_string).as_deref(),
        Some("Failed to send message: 503")
    );
    assert_eq!(state.view(), BoardView::ReadyWithMessages);
}

#[test]
fn second_submit_while_in_flight_is_noop() {
    let mut state = loaded_with(Vec::new());
    state.sender = "Bo".to_owned();
    state.body = "first".to_owned();
    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));

    state.body = "second".to_owned();
    assert_eq!(state.begin_submit(), SubmitAttempt::InFlight);
    assert!(state.sending);
    assert!(state.form_error.is_none());

    state.finish_submit(Err(RequestFailure::Status(500)));
    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));
}

#[test]
fn new_attempt_clears_previous_form_error() {
    let mut state = loaded_with(Vec::new());
    state.sender = "Bo".to_owned();
    assert_eq!(state.begin_submit(), SubmitAttempt::Invalid);

    state.body = "now filled".to_owned();
    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));
    assert!(state.form_error.is_none());
}

#[test]
fn submit_does_not_clear_load_error() {
    let mut state = MessageBoardState::default();
    state.finish_load(Err(RequestFailure::Status(500)));
    state.sender = "Bo".to_owned();
    state.body = "hi".to_owned();

    assert!(matches!(state.begin_submit(), SubmitAttempt::Send(_)));
    assert_eq!(state.view(), BoardView::Error);
}

#[test]
fn can_submit_requires_both_fields() {
    let mut state = loaded_with(Vec::new());
    assert!(!state.can_submit());
    state.sender = "Ada".to_owned();
    assert!(!state.can_submit());
    state.body = "   ".to_owned();
    assert!(!state.can_submit());
    state.body = "hello".to_owned();
    assert!(state.can_submit());
}

#[test]
fn ada_then_bo_example_flow() {
    let mut state = MessageBoardState::default();
    let fetched: Vec<Message> = serde_json::from_str(
        r#"[{"id":1,"sender":"Ada","message":"Loved Clean Code","timestamp":"2024-01-01T10:00:00Z"}]"#,
    )
    .unwrap();
    state.finish_load(Ok(fetched));
    assert_eq!(state.messages.len(), 1);

    state.sender = "Bo".to_owned();
    state.body = "Agreed!".to_owned();
    let SubmitAttempt::Send(payload) = state.begin_submit() else {
        panic!("expected send");
    };
    assert_eq!(payload.sender, "Bo");

    state.finish_submit(Ok(Message {
        id: 2,
        sender: payload.sender,
        message: payload.message,
        timestamp: "2024-01-01T10:05:00Z".to_owned(),
    }));
    assert_eq!(state.rendered_ids(), vec![1, 2]);
    assert_eq!(state.messages[1].message, "Agreed!");
}
