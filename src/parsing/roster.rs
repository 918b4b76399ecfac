//! Member roster collection for formats without an explicit member list.

use std::collections::HashSet;

use crate::model::Member;

/// Collects distinct senders in order of first appearance.
///
/// The first display name seen for an id wins.
///
/// ```
/// use chatimport::parsing::RosterBuilder;
///
/// let mut roster = RosterBuilder::new();
/// roster.observe("10001", "Alice");
/// roster.observe("10002", "Bob");
/// roster.observe("10001", "Alice (renamed)");
///
/// let members = roster.finish();
/// assert_eq!(members.len(), 2);
/// assert_eq!(members[0].name, "Alice");
/// ```
#[derive(Debug, Default)]
pub struct RosterBuilder {
    seen: HashSet<String>,
    members: Vec<Member>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sender, ignoring ids already present.
    pub fn observe(&mut self, platform_id: &str, name: &str) {
        if self.seen.insert(platform_id.to_string()) {
            self.members.push(Member::new(platform_id, name));
        }
    }

    pub fn finish(self) -> Vec<Member> {
        self.members
    }
}
