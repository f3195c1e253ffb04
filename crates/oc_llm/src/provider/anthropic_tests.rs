use oc_conversation::Turn;
use pretty_assertions::assert_eq;

use super::*;

fn query() -> ChatQuery {
    ChatQuery::new("You are an IT administration expert.", vec![
        Turn::user("How do I restart the spooler?"),
    ])
}

#[test]
fn request_carries_model_and_history() {
    let parameters = ParametersConfig::default();

    let request = create_request(&parameters, query()).unwrap();

    assert_eq!(request.model, parameters.model);
    assert_eq!(request.messages.len(), 1);
    assert!(request.thinking.is_none());
}

#[test]
fn extended_thinking_is_requested_only_when_enabled() {
    let mut parameters = ParametersConfig::default();
    parameters.set("extended_thinking", "true").unwrap();

    let request = create_request(&parameters, query()).unwrap();

    assert!(matches!(
        request.thinking,
        Some(types::ExtendedThinking::Enabled { .. })
    ));
}

#[test]
fn turns_map_to_role_content_messages() {
    let turns = vec![
        Turn::user("first"),
        Turn::assistant("second"),
        Turn::user("third"),
    ];

    let messages = convert_turns(&turns);

    assert_eq!(messages.len(), 3);
    assert!(matches!(messages[0].role, types::MessageRole::User));
    assert!(matches!(messages[1].role, types::MessageRole::Assistant));
    assert!(matches!(messages[2].role, types::MessageRole::User));
}
