/// One row of the contacts overview: a conversation partner plus the unread
/// badge state derived from that conversation's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    pub name: String,
    pub unread_count: u32,
    pub is_read: bool,
    pub last_message_preview: Option<String>,
    pub last_message_unix_ms: Option<i64>,
}

impl ContactSummary {
    /// Whether the contact should be rendered with an unread badge.
    pub fn has_unread(&self) -> bool {
        !self.is_read && self.unread_count > 0
    }
}
