//! Typed-value encoding of user documents.
//!
//! Firestore wraps every field: integers travel as decimal strings under
//! `integerValue`, dates are stored as `YYYY-MM-DD` strings.

use bingo_domain::remote::{ScoreUpdate, UserScoreDocument};
use bingo_domain::shared::{format_date, parse_date};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{json, Map, Value};

use super::FirestoreError;

pub(super) const DISPLAY_NAME: &str = "displayName";
pub(super) const TOTAL_SCORE: &str = "totalScore";
pub(super) const BINGO_COUNT: &str = "bingoCount";
pub(super) const STREAK: &str = "streak";
pub(super) const LAST_ATTENDANCE_DATE: &str = "lastAttendanceDate";
pub(super) const UPDATED_AT: &str = "updatedAt";

pub(super) fn integer_value(value: i64) -> Value {
    json!({ "integerValue": value.to_string() })
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn timestamp_value(value: DateTime<Utc>) -> Value {
    json!({ "timestampValue": value.to_rfc3339() })
}

fn date_value(value: Option<NaiveDate>) -> Value {
    match value {
        Some(date) => string_value(&format_date(date)),
        None => json!({ "nullValue": null }),
    }
}

/// Full field map for a newly created document
pub(super) fn encode_document(document: &UserScoreDocument, now: DateTime<Utc>) -> Value {
    let mut fields = Map::new();
    fields.insert(DISPLAY_NAME.into(), string_value(&document.display_name));
    fields.insert(TOTAL_SCORE.into(), integer_value(document.total_score));
    fields.insert(BINGO_COUNT.into(), integer_value(document.bingo_count.into()));
    fields.insert(STREAK.into(), integer_value(document.streak.into()));
    fields.insert(
        LAST_ATTENDANCE_DATE.into(),
        date_value(document.last_attendance_date),
    );
    fields.insert(UPDATED_AT.into(), timestamp_value(now));
    Value::Object(fields)
}

/// Field map plus the update mask naming exactly the written fields
pub(super) fn encode_update(update: &ScoreUpdate, now: DateTime<Utc>) -> (Value, Vec<&'static str>) {
    let mut fields = Map::new();
    let mut mask = Vec::new();

    if let Some(name) = &update.display_name {
        fields.insert(DISPLAY_NAME.into(), string_value(name));
        mask.push(DISPLAY_NAME);
    }
    if let Some(total) = update.total_score {
        fields.insert(TOTAL_SCORE.into(), integer_value(total));
        mask.push(TOTAL_SCORE);
    }
    if let Some(count) = update.bingo_count {
        fields.insert(BINGO_COUNT.into(), integer_value(count.into()));
        mask.push(BINGO_COUNT);
    }
    if let Some(streak) = update.streak {
        fields.insert(STREAK.into(), integer_value(streak.into()));
        mask.push(STREAK);
    }
    if let Some(date) = update.last_attendance_date {
        fields.insert(LAST_ATTENDANCE_DATE.into(), date_value(date));
        mask.push(LAST_ATTENDANCE_DATE);
    }

    fields.insert(UPDATED_AT.into(), timestamp_value(now));
    mask.push(UPDATED_AT);

    (Value::Object(fields), mask)
}

/// Decode a `Document` resource into its id and contents
pub(super) fn decode_document(document: &Value) -> Result<(String, UserScoreDocument), FirestoreError> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| FirestoreError::Decode("document has no name".to_string()))?;
    let id = name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| FirestoreError::Decode(format!("malformed document name: {name}")))?
        .to_string();

    let empty = Map::new();
    let fields = document
        .get("fields")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let last_attendance_date = match read_string(fields, LAST_ATTENDANCE_DATE) {
        Some(raw) => Some(
            parse_date(&raw)
                .ok_or_else(|| FirestoreError::Decode(format!("invalid attendance date: {raw}")))?,
        ),
        None => None,
    };

    let doc = UserScoreDocument {
        display_name: read_string(fields, DISPLAY_NAME).unwrap_or_default(),
        total_score: read_integer(fields, TOTAL_SCORE).unwrap_or(0),
        bingo_count: to_count(read_integer(fields, BINGO_COUNT)),
        streak: to_count(read_integer(fields, STREAK)),
        last_attendance_date,
        updated_at: read_timestamp(fields, UPDATED_AT),
    };

    Ok((id, doc))
}

/// Integer out of a typed value; doubles are truncated
pub(super) fn integer_of(value: &Value) -> Option<i64> {
    if let Some(raw) = value.get("integerValue") {
        return match raw {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        };
    }
    value
        .get("doubleValue")
        .and_then(Value::as_f64)
        .map(|d| d as i64)
}

fn read_integer(fields: &Map<String, Value>, name: &str) -> Option<i64> {
    fields.get(name).and_then(integer_of)
}

fn read_string(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields
        .get(name)
        .and_then(|v| v.get("stringValue"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn read_timestamp(fields: &Map<String, Value>, name: &str) -> Option<DateTime<Utc>> {
    fields
        .get(name)
        .and_then(|v| v.get("timestampValue"))
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn to_count(value: Option<i64>) -> u32 {
    value
        .map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}
