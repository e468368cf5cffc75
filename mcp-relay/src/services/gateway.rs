//! Dispatch gateway for the mock data service.
//!
//! Every action produces a response shaped like the real service's reply
//! but built from literals; the upstream is never contacted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::error::RelayError;
use crate::models::{display_value, is_present, Parameters, SupabaseAction};

/// Tables reported by `list_tables`.
pub const TABLES: [&str; 5] = ["users", "products", "orders", "transactions", "profiles"];

/// Id assigned to every created record; callers cannot override it.
pub const CREATED_RECORD_ID: i64 = 999;

/// Id echoed when a filter carries no usable `id`.
pub const DEFAULT_RECORD_ID: i64 = 1;

const READ_RECORD_COUNT: i64 = 2;

#[derive(Debug, Clone)]
pub struct Gateway {
    upstream_url: String,
}

impl Gateway {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
        }
    }

    pub fn handle(&self, action: &str, parameters: Parameters<'_>) -> Result<Value, RelayError> {
        self.handle_at(action, parameters, Utc::now())
    }

    /// Dispatch with an explicit clock, stamping `now` into timestamps.
    pub fn handle_at(
        &self,
        action: &str,
        parameters: Parameters<'_>,
        now: DateTime<Utc>,
    ) -> Result<Value, RelayError> {
        let action: SupabaseAction = action.parse()?;
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        match action {
            SupabaseAction::ListTables => Ok(json!({ "tables": TABLES })),
            SupabaseAction::ReadRecords => {
                let table = require_table(parameters)?;
                self.log_mock(action, &table);

                let data = (1..=READ_RECORD_COUNT)
                    .map(|id| {
                        json!({
                            "id": id,
                            "name": format!("Sample record {} from {}", id, table),
                            "created_at": stamp,
                        })
                    })
                    .collect::<Vec<_>>();

                Ok(json!({ "data": data }))
            }
            SupabaseAction::CreateRecord => {
                let table = require_table(parameters)?;
                let data = require_record_data(parameters)?;
                self.log_mock(action, &table);

                let mut record = data;
                record.insert("id".to_string(), json!(CREATED_RECORD_ID));
                record.insert("created_at".to_string(), json!(stamp));

                Ok(json!({ "data": [record] }))
            }
            SupabaseAction::UpdateRecord => {
                let table = require_table(parameters)?;
                let data = require_record_data(parameters)?;
                let filter = require_filter(parameters)?;
                self.log_mock(action, &table);

                let mut record = Map::new();
                record.insert("id".to_string(), filter_id(filter));
                record.extend(data);
                record.insert("updated_at".to_string(), json!(stamp));

                Ok(json!({ "data": [record] }))
            }
            SupabaseAction::DeleteRecord => {
                let table = require_table(parameters)?;
                let filter = require_filter(parameters)?;
                self.log_mock(action, &table);

                Ok(json!({ "data": [{ "id": filter_id(filter), "deleted": true }] }))
            }
        }
    }

    fn log_mock(&self, action: SupabaseAction, table: &str) {
        tracing::info!(
            action = %action,
            table = %table,
            upstream = %self.upstream_url,
            "Returning mock data"
        );
    }
}

fn require_table(parameters: Parameters<'_>) -> Result<String, RelayError> {
    parameters
        .present("table")
        .map(|table| display_value(table).into_owned())
        .ok_or(RelayError::MissingTable)
}

fn require_record_data(parameters: Parameters<'_>) -> Result<Map<String, Value>, RelayError> {
    parameters
        .present("data")
        .map(spread_fields)
        .ok_or(RelayError::MissingData)
}

/// Fields contributed by spreading `data` into a record: objects merge
/// their keys, arrays and strings contribute one key per index, and scalars
/// contribute nothing.
fn spread_fields(data: &Value) -> Map<String, Value> {
    match data {
        Value::Object(fields) => fields.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        Value::String(s) => s
            .chars()
            .enumerate()
            .map(|(i, c)| (i.to_string(), Value::String(c.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}

fn require_filter<'a>(parameters: Parameters<'a>) -> Result<&'a Value, RelayError> {
    parameters.present("filter").ok_or(RelayError::MissingFilter)
}

fn filter_id(filter: &Value) -> Value {
    filter
        .get("id")
        .filter(|id| is_present(id))
        .cloned()
        .unwrap_or_else(|| json!(DEFAULT_RECORD_ID))
}
