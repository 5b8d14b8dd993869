use super::*;

#[test]
fn normalize_base_url_strips_whitespace_and_trailing_slash() {
    assert_eq!(
        normalize_base_url(" https://api.example.test/api/messages/ "),
        "https://api.example.test/api/messages"
    );
}

#[test]
fn default_base_url_is_already_normalized() {
    assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
}

#[test]
fn list_messages_endpoint_appends_hello() {
    assert_eq!(
        list_messages_endpoint("https://api.example.test/api/messages"),
        "https://api.example.test/api/messages/hello"
    );
}

#[test]
fn create_message_endpoint_is_collection_root() {
    assert_eq!(
        create_message_endpoint("https://api.example.test/api/messages"),
        "https://api.example.test/api/messages"
    );
}

#[test]
fn success_status_covers_2xx_and_3xx() {
    assert!(is_success_status(200));
    assert!(is_success_status(201));
    assert!(is_success_status(304));
    assert!(!is_success_status(404));
    assert!(!is_success_status(500));
    assert!(!is_success_status(199));
}

#[test]
fn request_failure_displays_status_code() {
    assert_eq!(RequestFailure::Status(500).to_string(), "500");
}

#[test]
fn request_failure_displays_transport_message() {
    assert_eq!(RequestFailure::Transport("Failed to fetch".to_owned()).to_string(), "Failed to fetch");
}
