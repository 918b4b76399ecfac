//! QQ desktop client TXT export format.
//!
//! The desktop client writes a short preamble followed by message blocks:
//!
//! ```text
//! 消息记录（此消息记录为文本格式，不支持重新导入）
//!
//! ================================================================
//! 消息分组:我的群聊
//! ================================================================
//! 消息对象:技术交流群
//! ================================================================
//!
//! 2024-01-15 10:30:00 Alice(10001)
//! 大家好
//!
//! 2024-01-15 10:31:05 Bob<bob@example.com>
//! first line
//! second line
//! ```
//!
//! A block starts at a header line (`<date> <time> <name>(<qq>)` or
//! `<date> <time> <name><<email>>`) and runs until the next header.
//!
//! Malformed blocks are skipped: a header whose date or time is not a real
//! calendar value is dropped together with its body, and parsing continues
//! at the next header.

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::config::QqTxtConfig;
use crate::error::{ImportError, Result};
use crate::format::FormatDescriptor;
use crate::model::{ChatPlatform, ChatType, ConversationMeta, Message, ParseResult};
use crate::parser::ChatFormat;
use crate::parsing::{RosterBuilder, file_stem, has_extension};

const DESCRIPTOR: FormatDescriptor = FormatDescriptor::new("QQ TXT", ChatPlatform::Qq);

// 2024-01-15 10:30:00 Alice(10001)
// 2024-01-15 10:31:05 Bob<bob@example.com>
const HEADER_PATTERN: &str =
    r"^(\d{4}-\d{1,2}-\d{1,2} \d{1,2}:\d{2}:\d{2}) (.*?)(?:\((\d+)\)|<([^<>]+)>)$";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const EXPORT_BANNER: &str = "消息记录";

/// QQ number of the system account (join/leave notices, recalls, ...).
const SYSTEM_UIN: &str = "10000";

/// Parser for QQ desktop TXT exports. Registered last as the catch-all.
///
/// # Example
///
/// ```rust
/// use chatimport::parser::ChatFormat;
/// use chatimport::parsers::QqTxtFormat;
///
/// let content = "2024-01-15 10:30:00 Alice(10001)\nhello\n";
/// let format = QqTxtFormat::new();
/// assert!(format.detect(content, "chat.txt"));
///
/// let result = format.parse(content, "chat.txt")?;
/// assert_eq!(result.messages[0].content.as_deref(), Some("hello"));
/// # Ok::<(), chatimport::ImportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QqTxtFormat {
    config: QqTxtConfig,
    header: Regex,
}

impl QqTxtFormat {
    /// Creates the format with default configuration.
    pub fn new() -> Self {
        Self::with_config(QqTxtConfig::default())
    }

    /// Creates the format with custom configuration.
    pub fn with_config(config: QqTxtConfig) -> Self {
        Self {
            config,
            header: Regex::new(HEADER_PATTERN).expect("header pattern is valid"),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &QqTxtConfig {
        &self.config
    }
}

impl Default for QqTxtFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Header fields of one message block.
struct Block<'a> {
    timestamp: i64,
    sender_name: &'a str,
    sender_id: &'a str,
    lines: Vec<&'a str>,
}

impl Block<'_> {
    fn is_system(&self) -> bool {
        self.sender_id == SYSTEM_UIN
    }

    /// Joins body lines, trimming blank lines at both ends.
    fn body(&self) -> Option<String> {
        let start = self.lines.iter().position(|l| !l.trim().is_empty())?;
        let end = self.lines.iter().rposition(|l| !l.trim().is_empty())?;
        Some(self.lines[start..=end].join("\n"))
    }
}

/// `消息分组` / `消息对象` values read from the preamble.
#[derive(Default)]
struct Preamble {
    group: Option<String>,
    target: Option<String>,
}

impl Preamble {
    fn observe(&mut self, line: &str) {
        if let Some(value) = preamble_value(line, "消息分组") {
            self.group = Some(value);
        } else if let Some(value) = preamble_value(line, "消息对象") {
            self.target = Some(value);
        }
    }

    fn chat_type(&self) -> ChatType {
        match &self.group {
            Some(group) if group.contains("好友") => ChatType::Private,
            _ => ChatType::Group,
        }
    }
}

/// Extracts `value` from `key:value` or `key：value`.
fn preamble_value(line: &str, key: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(key)?;
    let value = rest
        .strip_prefix(':')
        .or_else(|| rest.strip_prefix('：'))?
        .trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Line normalization shared by detection and parsing before header matching.
fn header_text(line: &str) -> &str {
    line.trim_start_matches('\u{feff}').trim()
}

/// Builds a block from header captures; `None` if the timestamp is not a real date.
fn open_block<'a>(caps: &Captures<'a>) -> Option<Block<'a>> {
    let time = caps.get(1)?.as_str();
    let timestamp = NaiveDateTime::parse_from_str(time, TIMESTAMP_FORMAT)
        .ok()?
        .and_utc()
        .timestamp();
    let sender_id = caps.get(3).or_else(|| caps.get(4))?.as_str();
    let name = caps.get(2).map_or("", |m| m.as_str().trim());
    let sender_name = if name.is_empty() { sender_id } else { name };

    Some(Block {
        timestamp,
        sender_name,
        sender_id,
        lines: Vec::new(),
    })
}

impl QqTxtFormat {
    fn finish_block(
        &self,
        block: &Block<'_>,
        roster: &mut RosterBuilder,
        messages: &mut Vec<Message>,
    ) {
        let message_type = if block.is_system() {
            if self.config.skip_system_messages {
                return;
            }
            "system"
        } else {
            "text"
        };

        roster.observe(block.sender_id, block.sender_name);
        messages.push(Message {
            sender_platform_id: block.sender_id.to_string(),
            sender_name: block.sender_name.to_string(),
            timestamp: block.timestamp,
            message_type: message_type.to_string(),
            content: block.body(),
        });
    }
}

impl ChatFormat for QqTxtFormat {
    fn descriptor(&self) -> FormatDescriptor {
        DESCRIPTOR
    }

    fn detect(&self, content: &str, filename: &str) -> bool {
        if !has_extension(filename, "txt") {
            return false;
        }

        let mut lines = content
            .lines()
            .map(header_text)
            .filter(|l| !l.is_empty());

        let Some(first) = lines.next() else {
            return false;
        };
        if first.starts_with(EXPORT_BANNER) {
            return true;
        }

        std::iter::once(first)
            .chain(lines)
            .take(self.config.sample_lines)
            .any(|l| self.header.is_match(l))
    }

    fn parse(&self, content: &str, filename: &str) -> Result<ParseResult> {
        let mut preamble = Preamble::default();
        let mut roster = RosterBuilder::new();
        let mut messages = Vec::new();

        let mut current: Option<Block<'_>> = None;
        let mut seen_header = false;
        let mut skipped = 0usize;

        for line in content.lines() {
            let line = line.trim_start_matches('\u{feff}');

            if let Some(caps) = self.header.captures(header_text(line)) {
                seen_header = true;
                if let Some(block) = current.take() {
                    self.finish_block(&block, &mut roster, &mut messages);
                }
                current = open_block(&caps);
                if current.is_none() {
                    skipped += 1;
                    warn!(
                        header = header_text(line),
                        "skipping QQ TXT block with invalid timestamp"
                    );
                }
                continue;
            }

            match current.as_mut() {
                Some(block) => block.lines.push(line),
                None if !seen_header => preamble.observe(line),
                // body of a skipped block
                None => {}
            }
        }

        if let Some(block) = current.take() {
            self.finish_block(&block, &mut roster, &mut messages);
        }

        if !seen_header {
            return Err(ImportError::missing(DESCRIPTOR.name, filename, "message header"));
        }

        debug!(messages = messages.len(), skipped, "parsed QQ TXT export");

        let meta = ConversationMeta {
            name: preamble.target.clone().or_else(|| {
                let stem = file_stem(filename);
                (!stem.is_empty()).then(|| stem.to_string())
            }),
            platform: ChatPlatform::Qq,
            chat_type: preamble.chat_type(),
        };

        Ok(ParseResult::new(meta, roster.finish(), messages))
    }
}
