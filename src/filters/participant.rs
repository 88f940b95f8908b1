use serde::Serialize;

use crate::models::MessageRecord;

/// Label used by the wildcard selection in user pickers
pub const OVERALL: &str = "Overall";

/// Which sender's messages a statistic is computed over
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ParticipantFilter {
    /// Every sender, including group notifications
    #[default]
    All,
    /// Exactly one sender (exact, case-sensitive match)
    Sender(String),
}

impl ParticipantFilter {
    pub fn sender(name: impl Into<String>) -> Self {
        Self::Sender(name.into())
    }

    /// Map a picker selection to a filter; `"Overall"` (any case) means every sender
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection.map(str::trim) {
            None | Some("") => Self::All,
            Some(s) if s.eq_ignore_ascii_case(OVERALL) => Self::All,
            Some(s) => Self::Sender(s.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            Self::All => true,
            Self::Sender(name) => record.sender() == name,
        }
    }

    /// Iterate the matching records, in source order
    pub fn select<'a>(
        &'a self,
        records: &'a [MessageRecord],
    ) -> impl Iterator<Item = &'a MessageRecord> + Clone + 'a {
        records.iter().filter(move |record| self.matches(record))
    }

    /// Sender name, or `None` for the wildcard
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Sender(name) => Some(name),
        }
    }
}
