//! Composition of extraction, roster merge and dialogue parsing.

use crate::{DialogueParser, extract_config};
use chatbox_core::{Conversation, ParsedDocument, PeopleRoster, ResolvedMessage};
use chatbox_error::{ChatBoxResult, ResolveError, ResolveErrorKind};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Title used when neither the caller nor the settings supply one.
pub const DEFAULT_TITLE: &str = "群聊消息";

/// Turns chat scripts into [`ParsedDocument`]s and [`Conversation`]s.
///
/// The base roster is passed to each call rather than stored, so one
/// assembler can serve documents with different theme rosters.
///
/// # Examples
///
/// ```
/// use chatbox_core::{PeopleRoster, Person};
/// use chatbox_parser::ChatAssembler;
///
/// let base: PeopleRoster = [("alice", Person::new("Alice", "a.png"))].into_iter().collect();
/// let document = "(ChatConfig) { people: { bob: { name: 'Bob', avatar: 'b.png' } } }
/// [bob] | [回复: alice]
/// Hi @alice
/// |";
///
/// let assembler = ChatAssembler::new().unwrap();
/// let parsed = assembler.assemble(&base, document).unwrap();
///
/// assert_eq!(parsed.roster().len(), 2);
/// assert_eq!(parsed.blocks()[0].reply_to().as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone)]
pub struct ChatAssembler {
    parser: DialogueParser,
}

impl ChatAssembler {
    /// Creates an assembler.
    ///
    /// # Errors
    ///
    /// Returns an error if the dialogue patterns fail to compile.
    pub fn new() -> ChatBoxResult<Self> {
        Ok(Self {
            parser: DialogueParser::new()?,
        })
    }

    /// Extracts the config block, merges rosters and parses the dialogue.
    ///
    /// The config block is extracted once; the dialogue parser only sees the
    /// text after it. Speaker keys are not checked here, see
    /// [`ChatAssembler::resolve`].
    ///
    /// # Errors
    ///
    /// Returns the extraction error if the config block is malformed.
    #[instrument(skip_all, fields(document_len = document.len(), base = base.len()))]
    pub fn assemble(&self, base: &PeopleRoster, document: &str) -> ChatBoxResult<ParsedDocument> {
        let (config, residual) = extract_config(document)?;
        let roster = PeopleRoster::merge(base, &config.into_people());
        let blocks = self.parser.parse(&residual);
        debug!(people = roster.len(), blocks = blocks.len(), "Assembled document");
        Ok(ParsedDocument::new(roster, blocks))
    }

    /// Looks up every speaker and reply target of `parsed` in its roster.
    ///
    /// Messages spoken by `viewer` are flagged as the viewer's own.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveErrorKind::UnknownSpeaker`] or
    /// [`ResolveErrorKind::UnknownReplyTarget`] for the first block that
    /// references a key missing from the roster.
    pub fn resolve(
        parsed: &ParsedDocument,
        title: &str,
        viewer: Option<&str>,
    ) -> ChatBoxResult<Conversation> {
        let roster = parsed.roster();
        let mut messages = Vec::with_capacity(parsed.blocks().len());

        for (index, block) in parsed.blocks().iter().enumerate() {
            let speaker = roster.get(block.speaker()).ok_or_else(|| {
                ResolveError::new(ResolveErrorKind::UnknownSpeaker {
                    key: block.speaker().clone(),
                    block: index,
                })
            })?;
            let reply_to = match block.reply_to() {
                Some(key) => Some(roster.get(key).cloned().ok_or_else(|| {
                    ResolveError::new(ResolveErrorKind::UnknownReplyTarget {
                        key: key.clone(),
                        block: index,
                    })
                })?),
                None => None,
            };

            messages.push(ResolvedMessage::new(
                block.speaker().as_str(),
                speaker.clone(),
                reply_to,
                block.content().as_str(),
                block.mentions().clone(),
                viewer == Some(block.speaker().as_str()),
            ));
        }

        Ok(Conversation::new(title, messages))
    }

    /// Assembles and resolves a document, logging the outcome.
    ///
    /// A missing `title` falls back to [`DEFAULT_TITLE`].
    ///
    /// # Errors
    ///
    /// Returns any extraction or resolution error; the error is logged before
    /// it is returned so callers can substitute a fallback fragment.
    #[instrument(skip_all, fields(viewer = viewer.unwrap_or_default()))]
    pub fn render(
        &self,
        base: &PeopleRoster,
        document: &str,
        title: Option<&str>,
        viewer: Option<&str>,
    ) -> ChatBoxResult<Conversation> {
        let started = Instant::now();
        let result = self.assemble(base, document).and_then(|parsed| {
            Self::resolve(&parsed, title.unwrap_or(DEFAULT_TITLE), viewer)
        });

        match &result {
            Ok(conversation) => info!(
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                messages = conversation.messages().len(),
                "[chatBox] Render complete"
            ),
            Err(e) => error!(error = %e, "[chatBox] Render failed"),
        }
        result
    }
}

/// Assembles `document` against `base` with a one-off [`ChatAssembler`].
///
/// # Errors
///
/// See [`ChatAssembler::assemble`].
pub fn assemble(base: &PeopleRoster, document: &str) -> ChatBoxResult<ParsedDocument> {
    ChatAssembler::new()?.assemble(base, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatbox_core::{DialogueBlock, Person};

    fn roster() -> PeopleRoster {
        [
            ("alice", Person::new("Alice", "a.png")),
            ("bob", Person::new("Bob", "b.png")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_flags_viewer_messages() {
        let parsed = ParsedDocument::new(
            roster(),
            vec![
                DialogueBlock::new("alice", None, "hi", vec![]),
                DialogueBlock::new("bob", Some("alice".to_string()), "yo", vec![]),
            ],
        );

        let conversation = ChatAssembler::resolve(&parsed, "t", Some("bob")).unwrap();
        let flags: Vec<bool> = conversation.messages().iter().map(|m| *m.is_self()).collect();
        assert_eq!(flags, vec![false, true]);
        assert_eq!(
            conversation.messages()[1].reply_to().as_ref().and_then(|p| p.name().clone()),
            Some("Alice".to_string())
        );
    }

    #[test]
    fn test_resolve_unknown_speaker() {
        let parsed = ParsedDocument::new(
            roster(),
            vec![
                DialogueBlock::new("alice", None, "hi", vec![]),
                DialogueBlock::new("mallory", None, "hi", vec![]),
            ],
        );

        let err = ChatAssembler::resolve(&parsed, "t", None).unwrap_err();
        match err.kind() {
            chatbox_error::ChatBoxErrorKind::Resolve(e) => assert_eq!(
                e.kind,
                ResolveErrorKind::UnknownSpeaker {
                    key: "mallory".to_string(),
                    block: 1
                }
            ),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_reply_target() {
        let parsed = ParsedDocument::new(
            roster(),
            vec![DialogueBlock::new("alice", Some("ghost".to_string()), "hi", vec![])],
        );

        let err = ChatAssembler::resolve(&parsed, "t", None).unwrap_err();
        assert!(format!("{}", err).contains("Unknown reply target 'ghost'"));
    }

    #[test]
    fn test_render_uses_default_title() {
        let conversation = ChatAssembler::new()
            .unwrap()
            .render(&roster(), "[alice] |\nhello\n|", None, None)
            .unwrap();
        assert_eq!(conversation.title(), DEFAULT_TITLE);
        assert_eq!(conversation.messages().len(), 1);
    }
}
