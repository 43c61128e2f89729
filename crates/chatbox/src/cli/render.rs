//! Render command handler.

use super::{OutputFormat, load_inputs};
use chatbox::{ChatAssembler, ChatBoxResult, Conversation, JsonError};
use std::path::Path;

/// Shown in place of a conversation that failed to render.
const FALLBACK: &str = "chatBox Error!";

/// Resolve a chat script into a conversation and print it.
///
/// On any failure, including unreadable inputs, the fallback line is printed
/// before the error is returned, so pipelines consuming stdout still receive a
/// placeholder.
pub fn handle_render(
    document: &Path,
    config: Option<&Path>,
    viewer: Option<&str>,
    title: Option<&str>,
    format: OutputFormat,
) -> ChatBoxResult<()> {
    let conversation = match resolve_document(document, config, viewer, title) {
        Ok(conversation) => conversation,
        Err(e) => {
            println!("{}", FALLBACK);
            return Err(e);
        }
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&conversation)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => print_conversation(&conversation),
    }
    Ok(())
}

fn resolve_document(
    document: &Path,
    config: Option<&Path>,
    viewer: Option<&str>,
    title: Option<&str>,
) -> ChatBoxResult<Conversation> {
    let (text, settings) = load_inputs(document, config)?;
    let title = title.or(settings.title.as_deref());
    ChatAssembler::new()?.render(&settings.people, &text, title, viewer)
}

fn print_conversation(conversation: &Conversation) {
    println!("{}", conversation.title());
    println!("{:=<80}", "");

    for message in conversation.messages() {
        let name = message
            .speaker()
            .name()
            .as_deref()
            .unwrap_or(message.speaker_key().as_str());
        let marker = if *message.is_self() { " (me)" } else { "" };
        println!("{}{}", name, marker);
        if let Some(quoted) = message.reply_to() {
            println!("  > reply to @{}", quoted.name().as_deref().unwrap_or("?"));
        }
        for line in message.content().lines() {
            println!("  {}", line);
        }
        println!("{:-<80}", "");
    }
}
