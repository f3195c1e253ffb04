use pretty_assertions::assert_eq;

use super::*;
use crate::message::Turn;

fn conversation() -> Conversation {
    let mut conversation = Conversation::default();
    conversation.push(Turn::user("How do I list stopped services?"));
    conversation.push(Turn::assistant(
        "```powershell\nGet-Service | Where-Object Status -eq 'Stopped'\n```",
    ));
    conversation
}

#[test]
fn artifact_round_trips_as_role_content_records() {
    let dir = camino_tempfile::tempdir().unwrap();
    let conversation = conversation();

    let path = write(&conversation, dir.path().as_std_path()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let turns: Vec<Turn> = serde_json::from_str(&content).unwrap();

    assert_eq!(turns, conversation.turns());
}

#[test]
fn filename_is_timestamped_json() {
    let dir = camino_tempfile::tempdir().unwrap();

    let path = write(&conversation(), dir.path().as_std_path()).unwrap();
    let name = path.file_name().unwrap().to_str().unwrap();

    assert!(name.starts_with("chat_history_"), "{name}");
    assert!(name.ends_with(".json"), "{name}");
}

#[test]
fn repeated_exports_never_overwrite() {
    let dir = camino_tempfile::tempdir().unwrap();
    let conversation = conversation();

    // Within one second both exports get the same timestamp, forcing the
    // collision path.
    let first = write(&conversation, dir.path().as_std_path()).unwrap();
    let second = write(&conversation, dir.path().as_std_path()).unwrap();
    let third = write(&conversation, dir.path().as_std_path()).unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert!(first.exists() && second.exists() && third.exists());
}

#[test]
fn empty_conversation_exports_an_empty_array() {
    let dir = camino_tempfile::tempdir().unwrap();

    let path = write(&Conversation::default(), dir.path().as_std_path()).unwrap();
    let turns: Vec<Turn> = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert!(turns.is_empty());
}

#[test]
fn missing_directory_surfaces_io_error() {
    let dir = camino_tempfile::tempdir().unwrap();
    let missing = dir.path().as_std_path().join("nope");

    let error = write(&conversation(), &missing).unwrap_err();
    assert!(matches!(error, crate::Error::Io(_)));
}
