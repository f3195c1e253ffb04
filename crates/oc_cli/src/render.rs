//! Rendering of assistant replies and their code artifacts.

use crossterm::style::Stylize as _;
use oc_config::Config;
use oc_md::CodeBlock;
use tracing::warn;

/// Print an assistant reply, followed by its numbered code artifacts.
pub(crate) fn reply(content: &str, config: &Config) {
    println!("\n{content}\n");

    let blocks: Vec<CodeBlock> = oc_md::extract(content).collect();
    for (index, block) in blocks.iter().enumerate() {
        artifact(index + 1, block, config);
    }

    if !blocks.is_empty() {
        println!("{}\n", "Use /copy <N> to copy an artifact.".dim());
    }
}

fn artifact(index: usize, block: &CodeBlock, config: &Config) {
    let label = if block.language.is_empty() {
        "code"
    } else {
        &block.language
    };

    println!("{}", format!("── artifact {index} ({label}) ──").bold());

    let theme = config.style.theme.as_deref();
    match oc_term::code::highlight(&block.code, &block.language, theme) {
        Ok(text) => println!("{text}"),
        Err(error) => {
            warn!(%error, "Highlighting failed, printing plain code.");
            println!("{}", block.code);
        }
    }
    println!();
}
