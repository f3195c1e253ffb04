use assert_matches::assert_matches;
use oc_config::ParametersConfig;
use oc_conversation::Role;
use oc_llm::provider::mock::MockProvider;
use pretty_assertions::assert_eq;
use test_log::test;

use super::*;
use crate::error::Error;

fn session() -> Session {
    Session::new(ParametersConfig::default()).with_api_key(ApiKey::new("sk-test"))
}

#[test(tokio::test)]
async fn successful_exchange_appends_user_and_assistant_turns() {
    let mut session = session();
    let provider = MockProvider::with_reply("Run Get-Service.");

    let snapshot = exchange(&mut session, &provider, "instructions", "How?")
        .await
        .unwrap();

    assert_eq!(snapshot.turns.len(), 2);
    assert_eq!(snapshot.turns[0].role, Role::User);
    assert_eq!(snapshot.turns[1].role, Role::Assistant);
    assert_eq!(snapshot.turns[1].content, "Run Get-Service.");
    assert!(!snapshot.is_loading);
}

#[test(tokio::test)]
async fn failed_exchange_keeps_user_turn_and_idles() {
    let mut session = session();
    let provider = MockProvider::with_error("503 Service Unavailable");

    let error = exchange(&mut session, &provider, "instructions", "How?")
        .await
        .unwrap_err();

    assert_matches!(error, Error::Completion(_));
    assert!(error.to_string().contains("503 Service Unavailable"));
    assert_eq!(session.conversation().len(), 1);
    assert!(!session.is_loading());

    // The session accepts a new submission after the failure.
    let provider = MockProvider::with_reply("recovered");
    let snapshot = exchange(&mut session, &provider, "instructions", "Again?")
        .await
        .unwrap();
    assert_eq!(snapshot.turns.len(), 3);
}

#[test(tokio::test)]
async fn blank_input_is_rejected_without_a_request() {
    let mut session = session();
    let provider = MockProvider::with_reply("never sent");

    let error = exchange(&mut session, &provider, "instructions", "   ")
        .await
        .unwrap_err();

    assert_matches!(error, Error::Session(SessionError::EmptyInput));
    assert!(session.conversation().is_empty());
}

#[test(tokio::test)]
async fn missing_credential_is_rejected_without_a_request() {
    let mut session = Session::new(ParametersConfig::default());
    let provider = MockProvider::with_reply("never sent");

    let error = exchange(&mut session, &provider, "instructions", "hello")
        .await
        .unwrap_err();

    assert_matches!(error, Error::Session(SessionError::MissingCredential));
    assert!(session.conversation().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn set_parameter_accepts_space_and_equals_separators() {
    let mut session = session();

    set_parameter(&mut session, "temperature 0.4").unwrap();
    assert_eq!(session.parameters().temperature, 0.4);

    set_parameter(&mut session, "max_tokens=128").unwrap();
    assert_eq!(session.parameters().max_tokens, 128);
}

#[test]
fn set_parameter_keeps_previous_value_on_bad_input() {
    let mut session = session();

    set_parameter(&mut session, "temperature hot").unwrap();
    assert_eq!(
        session.parameters().temperature,
        ParametersConfig::default().temperature
    );
}
