//! ChatLab JSON export format.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::format::FormatDescriptor;
use crate::model::{ChatPlatform, ChatType, ConversationMeta, Member, Message, ParseResult};
use crate::parser::ChatFormat;
use crate::parsing::{has_extension, probe_json, strip_bom};

const DESCRIPTOR: FormatDescriptor = FormatDescriptor::new("ChatLab JSON", ChatPlatform::ChatLab);

/// ChatLab's own unified export format.
///
/// ChatLab exports are JSON files (usually `*.chatlab.json`) with the
/// following structure:
/// ```json
/// {
///   "chatlab": {"version": "1.0"},
///   "meta": {"name": "Team", "platform": "qq", "type": "group"},
///   "members": [{"platformId": "u1", "name": "Alice"}],
///   "messages": [
///     {"sender": "u1", "name": "Alice", "timestamp": 1700000000, "type": "text", "content": "hi"}
///   ]
/// }
/// ```
///
/// Members and messages map 1:1 onto the normalized model, in file order.
///
/// # Example
///
/// ```rust
/// use chatimport::parser::ChatFormat;
/// use chatimport::parsers::ChatLabJsonFormat;
///
/// let content = r#"{"chatlab":{"version":"1.0"},"meta":{"name":"Team"},"members":[],"messages":[]}"#;
/// assert!(ChatLabJsonFormat.detect(content, "export.json"));
///
/// let result = ChatLabJsonFormat.parse(content, "export.json")?;
/// assert_eq!(result.meta.name.as_deref(), Some("Team"));
/// # Ok::<(), chatimport::ImportError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLabJsonFormat;

impl ChatLabJsonFormat {
    pub fn new() -> Self {
        Self
    }
}

// Internal structures for deserializing ChatLab JSON

#[derive(Debug, Deserialize)]
struct ChatLabExport {
    chatlab: ChatLabHeader,
    meta: ChatLabMeta,
    members: Vec<ChatLabMember>,
    messages: Vec<ChatLabMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatLabHeader {
    version: String,
}

#[derive(Debug, Deserialize)]
struct ChatLabMeta {
    name: Option<String>,
    /// Free-form tags; anything that is not a string falls back to the default
    platform: Option<Value>,
    #[serde(rename = "type")]
    chat_type: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatLabMember {
    platform_id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChatLabMessage {
    /// Sender platform id
    sender: String,
    /// Sender display name
    name: String,
    timestamp: i64,
    #[serde(rename = "type")]
    msg_type: TypeTag,
    #[serde(default)]
    content: Option<String>,
}

/// Message types are strings in current exports and numeric codes in older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeTag {
    Name(String),
    Code(i64),
}

impl TypeTag {
    fn into_string(self) -> String {
        match self {
            TypeTag::Name(name) => name,
            TypeTag::Code(code) => code.to_string(),
        }
    }
}

/// Shape check over the loosely typed document.
fn probe(content: &str) -> Option<()> {
    let root = probe_json(content)?;
    root.get("chatlab")?.get("version")?.as_str()?;
    root.get("meta")?.as_object()?;
    root.get("members")?.as_array()?;
    root.get("messages")?.as_array()?;
    Some(())
}

impl ChatFormat for ChatLabJsonFormat {
    fn descriptor(&self) -> FormatDescriptor {
        DESCRIPTOR
    }

    fn detect(&self, content: &str, filename: &str) -> bool {
        has_extension(filename, "json") && probe(content).is_some()
    }

    fn parse(&self, content: &str, filename: &str) -> Result<ParseResult> {
        let export: ChatLabExport = serde_json::from_str(strip_bom(content))
            .map_err(|e| ImportError::json(DESCRIPTOR.name, filename, e))?;

        debug!(
            version = %export.chatlab.version,
            members = export.members.len(),
            messages = export.messages.len(),
            "parsing ChatLab export"
        );

        let meta = ConversationMeta {
            name: export.meta.name,
            platform: export
                .meta
                .platform
                .as_ref()
                .and_then(Value::as_str)
                .map_or(ChatPlatform::Unknown, ChatPlatform::from_tag),
            chat_type: export
                .meta
                .chat_type
                .as_ref()
                .and_then(Value::as_str)
                .map_or(ChatType::Group, ChatType::from_tag),
        };

        let members = export
            .members
            .into_iter()
            .map(|m| Member::new(m.platform_id, m.name))
            .collect();

        let messages = export
            .messages
            .into_iter()
            .map(|msg| Message {
                sender_platform_id: msg.sender,
                sender_name: msg.name,
                timestamp: msg.timestamp,
                message_type: msg.msg_type.into_string(),
                content: msg.content,
            })
            .collect();

        Ok(ParseResult::new(meta, members, messages))
    }
}
