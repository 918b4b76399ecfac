//! Normalized data model shared by every import format.
//!
//! All format parsers convert their native exports into a [`ParseResult`]:
//! conversation-level [`ConversationMeta`], a roster of [`Member`]s, and the
//! ordered list of [`Message`]s.
//!
//! # Example
//!
//! ```
//! use chatimport::model::{ChatPlatform, ChatType, ConversationMeta, Member, Message, ParseResult};
//!
//! let result = ParseResult::new(
//!     ConversationMeta::new(ChatPlatform::Qq).with_name("Team"),
//!     vec![Member::new("10001", "Alice")],
//!     vec![Message::new("10001", "Alice", 1700000000, "text").with_content("hi")],
//! );
//!
//! assert_eq!(result.meta.chat_type, ChatType::Group);
//! assert_eq!(result.members.len(), 1);
//! assert_eq!(result.messages[0].content.as_deref(), Some("hi"));
//! ```
//!
//! # Serialization
//!
//! Field names follow the camelCase wire shape used by the ChatLab format,
//! so a serialized [`ParseResult`] reads like a ChatLab export body:
//!
//! ```
//! use chatimport::model::{Member, Message};
//!
//! let json = serde_json::to_string(&Member::new("u1", "Alice"))?;
//! assert_eq!(json, r#"{"platformId":"u1","name":"Alice"}"#);
//!
//! let json = serde_json::to_string(&Message::new("u1", "Alice", 1, "text"))?;
//! assert!(json.contains(r#""senderPlatformId":"u1""#));
//! assert!(json.contains(r#""type":"text""#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Platform a conversation originated from.
///
/// Unrecognized or absent tags resolve to [`ChatPlatform::Unknown`] through
/// [`ChatPlatform::from_tag`], so a parsed conversation always carries a
/// defined platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatPlatform {
    /// Exports written by ChatLab itself
    ChatLab,
    /// Tencent QQ
    Qq,
    /// WeChat
    WeChat,
    /// Telegram
    Telegram,
    /// WhatsApp
    WhatsApp,
    /// Discord
    Discord,
    /// LINE
    Line,
    /// Anything else
    #[default]
    Unknown,
}

impl ChatPlatform {
    /// Resolves a free-form platform tag, falling back to [`ChatPlatform::Unknown`].
    ///
    /// ```
    /// use chatimport::model::ChatPlatform;
    ///
    /// assert_eq!(ChatPlatform::from_tag("QQ"), ChatPlatform::Qq);
    /// assert_eq!(ChatPlatform::from_tag("weixin"), ChatPlatform::WeChat);
    /// assert_eq!(ChatPlatform::from_tag("myspace"), ChatPlatform::Unknown);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "chatlab" => ChatPlatform::ChatLab,
            "qq" => ChatPlatform::Qq,
            "wechat" | "weixin" => ChatPlatform::WeChat,
            "telegram" | "tg" => ChatPlatform::Telegram,
            "whatsapp" | "wa" => ChatPlatform::WhatsApp,
            "discord" => ChatPlatform::Discord,
            "line" => ChatPlatform::Line,
            _ => ChatPlatform::Unknown,
        }
    }

    /// Returns the lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatPlatform::ChatLab => "chatlab",
            ChatPlatform::Qq => "qq",
            ChatPlatform::WeChat => "wechat",
            ChatPlatform::Telegram => "telegram",
            ChatPlatform::WhatsApp => "whatsapp",
            ChatPlatform::Discord => "discord",
            ChatPlatform::Line => "line",
            ChatPlatform::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ChatPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    /// Group chat (default when the source does not say)
    #[default]
    Group,
    /// One-to-one chat
    Private,
}

impl ChatType {
    /// Resolves a free-form conversation type tag, falling back to [`ChatType::Group`].
    ///
    /// ```
    /// use chatimport::model::ChatType;
    ///
    /// assert_eq!(ChatType::from_tag("private"), ChatType::Private);
    /// assert_eq!(ChatType::from_tag("c2c"), ChatType::Private);
    /// assert_eq!(ChatType::from_tag("channel"), ChatType::Group);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "private" | "friend" | "c2c" => ChatType::Private,
            _ => ChatType::Group,
        }
    }
}

/// Session-level information about an imported conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationMeta {
    /// Display name of the conversation, when the source provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub name: Option<String>,

    /// Originating platform.
    pub platform: ChatPlatform,

    /// Conversation type.
    #[serde(rename = "type")]
    pub chat_type: ChatType,
}

impl ConversationMeta {
    /// Creates metadata for a group conversation on the given platform.
    pub fn new(platform: ChatPlatform) -> Self {
        Self {
            name: None,
            platform,
            chat_type: ChatType::Group,
        }
    }

    /// Builder method to set the conversation name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the conversation type.
    #[must_use]
    pub fn with_type(mut self, chat_type: ChatType) -> Self {
        self.chat_type = chat_type;
        self
    }
}

/// A conversation participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Platform-native identifier (QQ number, ChatLab id, ...).
    pub platform_id: String,

    /// Display name.
    pub name: String,
}

impl Member {
    /// Creates a member.
    pub fn new(platform_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            name: name.into(),
        }
    }
}

/// One chat event.
///
/// Timestamps keep the epoch semantics of their source: ChatLab and QQ TXT
/// imports carry seconds, QQ exporter JSON carries milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Platform identifier of the sender.
    pub sender_platform_id: String,

    /// Display name of the sender at the time of the message.
    pub sender_name: String,

    /// Platform-native epoch timestamp.
    pub timestamp: i64,

    /// Format-specific message type (e.g. `"text"`, `"system"`).
    #[serde(rename = "type")]
    pub message_type: String,

    /// Message body. `None` when the source carries no textual payload.
    #[serde(default)]
    pub content: Option<String>,
}

impl Message {
    /// Creates a message without content.
    pub fn new(
        sender_platform_id: impl Into<String>,
        sender_name: impl Into<String>,
        timestamp: i64,
        message_type: impl Into<String>,
    ) -> Self {
        Self {
            sender_platform_id: sender_platform_id.into(),
            sender_name: sender_name.into(),
            timestamp,
            message_type: message_type.into(),
            content: None,
        }
    }

    /// Builder method to set the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns `true` if the message has no content or only whitespace.
    pub fn is_empty(&self) -> bool {
        self.content.as_deref().is_none_or(|c| c.trim().is_empty())
    }
}

/// The normalized output of one parse.
///
/// `members` and `messages` are always present, even when empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Conversation metadata.
    pub meta: ConversationMeta,
    /// Participants, in source order.
    pub members: Vec<Member>,
    /// Messages, in source order.
    pub messages: Vec<Message>,
}

impl ParseResult {
    /// Assembles a parse result.
    pub fn new(meta: ConversationMeta, members: Vec<Member>, messages: Vec<Message>) -> Self {
        Self {
            meta,
            members,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_tag_fallback() {
        assert_eq!(ChatPlatform::from_tag("chatlab"), ChatPlatform::ChatLab);
        assert_eq!(ChatPlatform::from_tag(" Discord "), ChatPlatform::Discord);
        assert_eq!(ChatPlatform::from_tag(""), ChatPlatform::Unknown);
        assert_eq!(ChatPlatform::from_tag("icq"), ChatPlatform::Unknown);
    }

    #[test]
    fn test_platform_display_matches_serde() {
        for platform in [ChatPlatform::Qq, ChatPlatform::WeChat, ChatPlatform::Unknown] {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform));
        }
    }

    #[test]
    fn test_chat_type_default_is_group() {
        assert_eq!(ChatType::default(), ChatType::Group);
        assert_eq!(ChatType::from_tag("GROUP"), ChatType::Group);
        assert_eq!(ChatType::from_tag("friend"), ChatType::Private);
    }

    #[test]
    fn test_meta_serializes_type_key() {
        let meta = ConversationMeta::new(ChatPlatform::Qq)
            .with_name("Team")
            .with_type(ChatType::Private);
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"name":"Team","platform":"qq","type":"private"}"#);
    }

    #[test]
    fn test_meta_without_name_omits_it() {
        let json = serde_json::to_string(&ConversationMeta::default()).unwrap();
        assert!(!json.contains("name"));
        assert!(json.contains("unknown"));
    }

    #[test]
    fn test_message_is_empty() {
        assert!(Message::new("u1", "A", 0, "image").is_empty());
        assert!(Message::new("u1", "A", 0, "text").with_content("  ").is_empty());
        assert!(!Message::new("u1", "A", 0, "text").with_content("hi").is_empty());
    }

    #[test]
    fn test_parse_result_empty_lists_serialize_as_arrays() {
        let result = ParseResult::new(ConversationMeta::default(), vec![], vec![]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""members":[]"#));
        assert!(json.contains(r#""messages":[]"#));
    }

    #[test]
    fn test_message_deserialization_without_content() {
        let json = r#"{"senderPlatformId":"u1","senderName":"Bob","timestamp":5,"type":"image"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender_name, "Bob");
        assert!(msg.content.is_none());
    }
}
