//! Parse command handler.

use super::{OutputFormat, load_inputs};
use chatbox::{ChatAssembler, ChatBoxResult, JsonError, ParsedDocument};
use std::path::Path;

/// Parse a chat script and print the merged roster and dialogue blocks.
pub fn handle_parse(
    document: &Path,
    config: Option<&Path>,
    format: OutputFormat,
) -> ChatBoxResult<()> {
    let (text, settings) = load_inputs(document, config)?;
    let parsed = ChatAssembler::new()?.assemble(&settings.people, &text)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&parsed)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_document(&parsed),
    }
    Ok(())
}

fn print_document(parsed: &ParsedDocument) {
    println!("People:");
    for (key, person) in parsed.roster().iter() {
        println!(
            "  {:<12} {} ({})",
            key,
            person.name().as_deref().unwrap_or("-"),
            person.avatar().as_deref().unwrap_or("-")
        );
    }
    println!("{:-<80}", "");

    for block in parsed.blocks() {
        match block.reply_to() {
            Some(target) => println!("[{}] replying to [{}]", block.speaker(), target),
            None => println!("[{}]", block.speaker()),
        }
        for line in block.content().lines() {
            println!("  {}", line);
        }
        if !block.mentions().is_empty() {
            println!("  mentions: {}", block.mentions().join(", "));
        }
        println!("{:-<80}", "");
    }

    let missing = parsed.missing_keys();
    if !missing.is_empty() {
        println!("Unknown speakers: {}", missing.join(", "));
    }
    let replies = parsed.blocks().iter().filter(|block| block.is_reply()).count();
    println!("Total: {} blocks ({} replies)", parsed.blocks().len(), replies);
}
