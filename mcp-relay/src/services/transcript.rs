use serde_json::{json, Value};

use crate::error::RelayError;
use crate::models::{display_value, Parameters, TranscriptAction};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Mock transcript lookup. A missing `url` is not an error; it just leaves
/// the template empty.
pub fn get_transcript(action: &str, parameters: Parameters<'_>) -> Result<Value, RelayError> {
    match action.parse::<TranscriptAction>()? {
        TranscriptAction::GetTranscript => {
            let url = parameters
                .present("url")
                .map(|url| display_value(url).into_owned())
                .unwrap_or_default();
            let language = parameters
                .present("lang")
                .cloned()
                .unwrap_or_else(|| json!(DEFAULT_LANGUAGE));

            tracing::info!(url = %url, "Returning mock transcript");

            Ok(json!({
                "transcript": format!("Mock transcript for {}", url),
                "language": language,
            }))
        }
    }
}
