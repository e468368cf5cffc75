//! Closed sets of actions accepted by the mock endpoints.

use std::fmt;
use std::str::FromStr;

use crate::error::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupabaseAction {
    ListTables,
    ReadRecords,
    CreateRecord,
    UpdateRecord,
    DeleteRecord,
}

impl SupabaseAction {
    /// Every action, in the order reported to callers.
    pub const ALL: [SupabaseAction; 5] = [
        SupabaseAction::ListTables,
        SupabaseAction::ReadRecords,
        SupabaseAction::CreateRecord,
        SupabaseAction::UpdateRecord,
        SupabaseAction::DeleteRecord,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SupabaseAction::ListTables => "list_tables",
            SupabaseAction::ReadRecords => "read_records",
            SupabaseAction::CreateRecord => "create_record",
            SupabaseAction::UpdateRecord => "update_record",
            SupabaseAction::DeleteRecord => "delete_record",
        }
    }

    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.as_str()).collect()
    }
}

impl FromStr for SupabaseAction {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| RelayError::UnsupportedAction(s.to_string()))
    }
}

impl fmt::Display for SupabaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptAction {
    GetTranscript,
}

impl FromStr for TranscriptAction {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get_transcript" => Ok(TranscriptAction::GetTranscript),
            other => Err(RelayError::UnsupportedTranscriptAction(other.to_string())),
        }
    }
}
