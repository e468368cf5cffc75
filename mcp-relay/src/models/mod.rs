pub mod action;
pub mod envelope;

pub use action::{SupabaseAction, TranscriptAction};
pub use envelope::{display_value, is_present, Envelope, Parameters, RequestEnvelope};
