//! The interactive chat loop.
//!
//! Each iteration reads one line of input. Slash commands mutate the session
//! locally; anything else is submitted to the completion provider through
//! the session state machine. After every transition the loop renders from a
//! fresh [`SessionSnapshot`], never from the live session.

use std::path::PathBuf;

use crossterm::style::Stylize as _;
use inquire::{InquireError, Password, Text};
use oc_config::Config;
use oc_conversation::{ApiKey, Error as SessionError, Session, SessionSnapshot, export};
use oc_llm::{ChatQuery, Provider, provider::anthropic::Anthropic};
use oc_term::Clipboard;
use tracing::debug;

use crate::{error::Result, render};

pub(crate) async fn run(mut session: Session, mut config: Config) -> Result<()> {
    println!("{}", "OpsChat — IT administration assistant".bold());
    println!(
        "Ask a question, or type {} for the list of commands.\n",
        "/help".yellow()
    );

    if session.api_key().is_none() {
        prompt_credential(&mut session)?;
    }

    loop {
        let line = match Text::new("›").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(error) => return Err(error.into()),
        };

        if let Some(command) = line.trim().strip_prefix('/') {
            match handle_command(command, &mut session, &mut config)? {
                Flow::Continue => continue,
                Flow::Quit => break,
            }
        }

        submit(&mut session, &config, &line).await;
    }

    Ok(())
}

/// Send a single query and print the reply.
pub(crate) async fn one_shot(mut session: Session, config: &Config, query: &str) -> Result<()> {
    let Some(api_key) = session.api_key() else {
        return Err(SessionError::MissingCredential.into());
    };

    let provider = Anthropic::new(api_key.expose());
    let snapshot = exchange(&mut session, &provider, &config.assistant.instructions, query).await?;

    if let Some(turn) = snapshot.turns.last() {
        render::reply(&turn.content, config);
    }

    Ok(())
}

/// Submit one line of user input, reporting every failure to the user
/// without leaving the loop.
async fn submit(session: &mut Session, config: &Config, line: &str) {
    let Some(api_key) = session.api_key() else {
        // Mirrors the `MissingCredential` rejection inside the state
        // machine, but before any turn is appended here too.
        println!("{}\n", "No API key configured. Set one with /key.".red());
        return;
    };

    let provider = Anthropic::new(api_key.expose());
    println!("{}", "… thinking".dim());

    match exchange(session, &provider, &config.assistant.instructions, line).await {
        Ok(snapshot) => {
            if let Some(turn) = snapshot.turns.last() {
                render::reply(&turn.content, config);
            }
        }
        Err(crate::error::Error::Session(SessionError::EmptyInput)) => {
            // Blank submissions are ignored.
        }
        Err(error) => println!("{}\n", format!("Error: {error}").red()),
    }
}

/// One full submit → completion cycle against the provider.
///
/// On success the conversation grows by two turns. On a completion failure
/// the user turn is kept, no assistant turn is appended, and the session
/// returns to idle so a new submission can proceed.
pub(crate) async fn exchange(
    session: &mut Session,
    provider: &dyn Provider,
    instructions: &str,
    input: &str,
) -> Result<SessionSnapshot> {
    session.submit(input)?;

    let query = ChatQuery::new(instructions, session.conversation().turns().to_vec());
    match provider.chat_completion(session.parameters(), query).await {
        Ok(reply) => {
            session.complete(reply);
            Ok(session.snapshot())
        }
        Err(error) => {
            debug!(%error, "Completion failed.");
            session.fail();
            Err(error.into())
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

fn handle_command(command: &str, session: &mut Session, config: &mut Config) -> Result<Flow> {
    let (name, rest) = command.split_once(' ').unwrap_or((command, ""));

    match name {
        "help" | "" => help(),
        "quit" | "exit" => return Ok(Flow::Quit),
        "clear" => {
            session.clear()?;
            println!("Conversation cleared.\n");
        }
        "export" | "save" => {
            let dir = config.export.dir.clone().unwrap_or_else(|| PathBuf::from("."));
            let path = export::write(session.conversation(), &dir)?;
            println!("Chat history saved to {}.\n", path.display());
        }
        "copy" => copy_artifact(session, rest)?,
        "set" => set_parameter(session, rest)?,
        "key" => prompt_credential(session)?,
        _ => println!("Unknown command: /{name}. Type /help for the list of commands.\n"),
    }

    Ok(Flow::Continue)
}

fn help() {
    println!("{}", "Commands".bold());
    println!("  /clear            Empty the conversation, keeping parameters and key.");
    println!("  /save             Export the chat history to a timestamped JSON file.");
    println!("  /copy <N>         Copy code artifact N of the last reply to the clipboard.");
    println!("  /set <KEY> <VAL>  Adjust a parameter (model, temperature, max_tokens,");
    println!("                    top_p, extended_thinking).");
    println!("  /key              Set the API key for this session.");
    println!("  /quit             Leave the chat.\n");
}

fn copy_artifact(session: &Session, rest: &str) -> Result<()> {
    let index: usize = match rest.trim().parse() {
        Ok(index) if index >= 1 => index,
        _ => {
            println!("Usage: /copy <N>\n");
            return Ok(());
        }
    };

    let Some(turn) = session.conversation().last_reply() else {
        println!("No assistant reply to copy from yet.\n");
        return Ok(());
    };

    match oc_md::extract(&turn.content).nth(index - 1) {
        Some(block) => {
            Clipboard::new()?.set_text(&block.code)?;
            println!("Copied artifact {index} to the clipboard.\n");
        }
        None => println!("The last reply has no artifact {index}.\n"),
    }

    Ok(())
}

fn set_parameter(session: &mut Session, rest: &str) -> Result<()> {
    let (key, value) = rest.split_once([' ', '=']).unwrap_or((rest, ""));

    let mut parameters = session.parameters().clone();
    match parameters.set(key.trim(), value.trim()) {
        Ok(()) => {
            session.set_parameters(parameters)?;
            println!("{} updated.\n", key.trim());
        }
        Err(error) => println!("{error}\n"),
    }

    Ok(())
}

fn prompt_credential(session: &mut Session) -> Result<()> {
    let prompt = Password::new("Anthropic API key:")
        .without_confirmation()
        .prompt();

    match prompt {
        Ok(key) if !key.trim().is_empty() => {
            session.set_api_key(ApiKey::new(key));
            println!("API key set for this session.\n");
        }
        Ok(_) => println!("No key entered. Submissions will be rejected until one is set.\n"),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {}
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
