use assert_matches::assert_matches;
use oc_conversation::Turn;
use pretty_assertions::assert_eq;
use test_log::test;

use super::*;

fn query() -> ChatQuery {
    ChatQuery::new("system", vec![Turn::user("hello")])
}

#[test(tokio::test)]
async fn canned_reply_is_returned_verbatim() {
    let provider = MockProvider::with_reply("Hello, admin!");

    let reply = provider
        .chat_completion(&ParametersConfig::default(), query())
        .await
        .unwrap();

    assert_eq!(reply, "Hello, admin!");
}

#[test(tokio::test)]
async fn canned_error_surfaces_its_message() {
    let provider = MockProvider::with_error("401 Unauthorized");

    let error = provider
        .chat_completion(&ParametersConfig::default(), query())
        .await
        .unwrap_err();

    assert_matches!(&error, Error::Other(message) if message == "401 Unauthorized");
}
