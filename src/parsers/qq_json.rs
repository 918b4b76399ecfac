//! QQ chat exporter JSON format.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::QqJsonConfig;
use crate::error::{ImportError, Result};
use crate::format::FormatDescriptor;
use crate::model::{ChatPlatform, ChatType, ConversationMeta, Message, ParseResult};
use crate::parser::ChatFormat;
use crate::parsing::{RosterBuilder, has_extension, probe_json, strip_bom};

const DESCRIPTOR: FormatDescriptor =
    FormatDescriptor::new("QQ Chat Exporter JSON", ChatPlatform::Qq);

/// JSON written by the QQ chat exporter tool.
///
/// Exports have the following structure:
/// ```json
/// {
///   "metadata": {"name": "QQChatExporter", "version": "4.0.0"},
///   "chatInfo": {"name": "Group name", "type": "group"},
///   "messages": [
///     {
///       "id": "7300",
///       "timestamp": 1700000000000,
///       "sender": {"uid": "u_abc", "uin": "10001", "name": "Alice", "groupCard": "Ally"},
///       "type": "text",
///       "content": {"text": "hi"}
///     }
///   ]
/// }
/// ```
///
/// Timestamps are milliseconds and are carried unchanged. There is no
/// member list in the export; members are the distinct senders in order of
/// first appearance.
#[derive(Debug, Clone)]
pub struct QqJsonFormat {
    config: QqJsonConfig,
}

impl QqJsonFormat {
    /// Creates the format with default configuration.
    pub fn new() -> Self {
        Self {
            config: QqJsonConfig::default(),
        }
    }

    /// Creates the format with custom configuration.
    pub fn with_config(config: QqJsonConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &QqJsonConfig {
        &self.config
    }
}

impl Default for QqJsonFormat {
    fn default() -> Self {
        Self::new()
    }
}

// Internal structures for deserializing exporter JSON

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QqExport {
    chat_info: QqChatInfo,
    /// Kept optional so a missing array reports as such rather than as a serde error
    messages: Option<Vec<QqMessage>>,
}

#[derive(Debug, Deserialize)]
struct QqChatInfo {
    name: Option<String>,
    /// Some exporter versions write a numeric chat type; only string tags are mapped
    #[serde(rename = "type")]
    chat_type: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct QqMessage {
    timestamp: i64,
    sender: QqSender,
    #[serde(rename = "type")]
    msg_type: Option<String>,
    #[serde(default)]
    content: Option<QqContent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QqSender {
    uid: Option<String>,
    /// QQ number; older exporter versions write it as a JSON number
    uin: Option<QqId>,
    name: Option<String>,
    group_card: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QqId {
    Text(String),
    Number(u64),
}

#[derive(Debug, Deserialize)]
struct QqContent {
    text: Option<String>,
}

impl QqSender {
    /// The QQ number when present, otherwise the opaque uid.
    fn platform_id(&self) -> Option<String> {
        let uin = match &self.uin {
            Some(QqId::Text(s)) if !s.is_empty() => Some(s.clone()),
            Some(QqId::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        uin.or_else(|| self.uid.clone().filter(|uid| !uid.is_empty()))
    }

    fn display_name(&self, prefer_group_card: bool, fallback: &str) -> String {
        let card = self
            .group_card
            .as_deref()
            .filter(|c| prefer_group_card && !c.trim().is_empty());
        card.or(self.name.as_deref())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Shape check over the loosely typed document.
fn probe(content: &str) -> Option<()> {
    let root = probe_json(content)?;
    root.get("chatInfo")?.as_object()?.get("name")?.as_str()?;
    Some(())
}

impl ChatFormat for QqJsonFormat {
    fn descriptor(&self) -> FormatDescriptor {
        DESCRIPTOR
    }

    fn detect(&self, content: &str, filename: &str) -> bool {
        has_extension(filename, "json") && probe(content).is_some()
    }

    fn parse(&self, content: &str, filename: &str) -> Result<ParseResult> {
        let export: QqExport = serde_json::from_str(strip_bom(content))
            .map_err(|e| ImportError::json(DESCRIPTOR.name, filename, e))?;

        let raw_messages = export
            .messages
            .ok_or_else(|| ImportError::missing(DESCRIPTOR.name, filename, "`messages` array"))?;

        debug!(messages = raw_messages.len(), "parsing QQ exporter JSON");

        let mut roster = RosterBuilder::new();
        let mut messages = Vec::with_capacity(raw_messages.len());

        for (index, raw) in raw_messages.into_iter().enumerate() {
            let sender_id = raw.sender.platform_id().ok_or_else(|| {
                ImportError::invalid(
                    DESCRIPTOR.name,
                    filename,
                    format!("message #{index}: sender has neither `uin` nor `uid`"),
                )
            })?;
            let sender_name = raw
                .sender
                .display_name(self.config.prefer_group_card, &sender_id);

            roster.observe(&sender_id, &sender_name);

            messages.push(Message {
                sender_platform_id: sender_id,
                sender_name,
                timestamp: raw.timestamp,
                message_type: raw.msg_type.unwrap_or_else(|| "text".to_string()),
                content: raw.content.and_then(|c| c.text),
            });
        }

        let meta = ConversationMeta {
            name: export.chat_info.name,
            platform: ChatPlatform::Qq,
            chat_type: export
                .chat_info
                .chat_type
                .as_ref()
                .and_then(Value::as_str)
                .map_or(ChatType::Group, ChatType::from_tag),
        };

        Ok(ParseResult::new(meta, roster.finish(), messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatErrorKind;

    const SAMPLE: &str = r#"{
  "metadata": {"name": "QQChatExporter", "version": "4.0.0"},
  "chatInfo": {"name": "Rust 学习群", "type": "group"},
  "messages": [
    {"id": "1", "timestamp": 1705314600000,
     "sender": {"uid": "u_alice", "uin": "10001", "name": "Alice", "groupCard": "Ally"},
     "type": "text", "content": {"text": "大家好"}},
    {"id": "2", "timestamp": 1705314660000,
     "sender": {"uid": "u_bob", "name": "Bob"},
     "type": "image", "content": {"text": null}},
    {"id": "3", "timestamp": 1705314720000,
     "sender": {"uid": "u_alice", "uin": 10001, "name": "Alice"},
     "content": {"text": "again"}}
  ]
}"#;

    #[test]
    fn test_descriptor() {
        let format = QqJsonFormat::new();
        assert_eq!(format.name(), "QQ Chat Exporter JSON");
        assert_eq!(format.platform(), ChatPlatform::Qq);
    }

    #[test]
    fn test_detect_sample() {
        assert!(QqJsonFormat::new().detect(SAMPLE, "group.json"));
        assert!(!QqJsonFormat::new().detect(SAMPLE, "group.txt"));
    }

    #[test]
    fn test_detect_rejects_chatlab_shape() {
        let chatlab = r#"{"chatlab":{"version":"1.0"},"meta":{"name":"Team"},"members":[],"messages":[]}"#;
        assert!(!QqJsonFormat::new().detect(chatlab, "export.json"));
    }

    #[test]
    fn test_detect_requires_string_name() {
        let format = QqJsonFormat::new();
        assert!(!format.detect(r#"{"chatInfo":{"name":5},"messages":[]}"#, "a.json"));
        assert!(!format.detect(r#"{"chatInfo":"x","messages":[]}"#, "a.json"));
        assert!(!format.detect(r#"{"messages":[]}"#, "a.json"));
    }

    #[test]
    fn test_parse_sample() {
        let result = QqJsonFormat::new().parse(SAMPLE, "group.json").unwrap();

        assert_eq!(result.meta.name.as_deref(), Some("Rust 学习群"));
        assert_eq!(result.meta.platform, ChatPlatform::Qq);
        assert_eq!(result.meta.chat_type, ChatType::Group);

        assert_eq!(result.messages.len(), 3);
        assert_eq!(result.messages[0].sender_platform_id, "10001");
        assert_eq!(result.messages[0].sender_name, "Alice");
        assert_eq!(result.messages[0].timestamp, 1705314600000);
        assert_eq!(result.messages[0].content.as_deref(), Some("大家好"));

        // uid fallback, null text
        assert_eq!(result.messages[1].sender_platform_id, "u_bob");
        assert_eq!(result.messages[1].message_type, "image");
        assert!(result.messages[1].content.is_none());

        // numeric uin, default type
        assert_eq!(result.messages[2].sender_platform_id, "10001");
        assert_eq!(result.messages[2].message_type, "text");

        let ids: Vec<_> = result.members.iter().map(|m| m.platform_id.as_str()).collect();
        assert_eq!(ids, ["10001", "u_bob"]);
    }

    #[test]
    fn test_parse_prefers_group_card_when_configured() {
        let format = QqJsonFormat::with_config(QqJsonConfig::new().with_prefer_group_card(true));
        let result = format.parse(SAMPLE, "group.json").unwrap();
        assert_eq!(result.messages[0].sender_name, "Ally");
        // no card on later messages
        assert_eq!(result.messages[2].sender_name, "Alice");
        assert_eq!(result.members[0].name, "Ally");
    }

    #[test]
    fn test_parse_private_chat() {
        let content = r#"{"chatInfo":{"name":"Bob","type":"private"},"messages":[]}"#;
        let result = QqJsonFormat::new().parse(content, "bob.json").unwrap();
        assert_eq!(result.meta.chat_type, ChatType::Private);
        assert!(result.members.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_parse_non_string_chat_type_falls_back() {
        let cases = [
            r#"{"chatInfo":{"name":"T","type":2},"messages":[]}"#,
            r#"{"chatInfo":{"name":"T","type":{"kind":"private"}},"messages":[]}"#,
            r#"{"chatInfo":{"name":"T","type":null},"messages":[]}"#,
        ];
        for content in cases {
            let result = QqJsonFormat::new().parse(content, "t.json").unwrap();
            assert_eq!(result.meta.chat_type, ChatType::Group, "{content}");
            assert_eq!(result.meta.name.as_deref(), Some("T"));
        }
    }

    #[test]
    fn test_parse_missing_messages_fails() {
        let content = r#"{"chatInfo":{"name":"Team"}}"#;
        assert!(QqJsonFormat::new().detect(content, "team.json"));

        let err = QqJsonFormat::new().parse(content, "team.json").unwrap_err();
        assert!(matches!(
            err,
            ImportError::Format {
                source: FormatErrorKind::Missing(_),
                ..
            }
        ));
        assert!(err.to_string().contains("messages"));
    }

    #[test]
    fn test_parse_sender_without_id_fails() {
        let content = r#"{"chatInfo":{"name":"Team"},"messages":[
            {"timestamp": 1, "sender": {"name": "Ghost"}}
        ]}"#;
        let err = QqJsonFormat::new().parse(content, "team.json").unwrap_err();
        assert!(matches!(
            err,
            ImportError::Format {
                source: FormatErrorKind::Invalid(_),
                ..
            }
        ));
        assert!(err.to_string().contains("message #0"));
    }

    #[test]
    fn test_parse_missing_timestamp_fails() {
        let content = r#"{"chatInfo":{"name":"Team"},"messages":[
            {"sender": {"uin": "1"}}
        ]}"#;
        let err = QqJsonFormat::new().parse(content, "team.json").unwrap_err();
        assert!(err.is_format());
    }
}
