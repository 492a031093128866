//! Request bodies and query strings.

use extrack_core::{LogRequest, NewExerciseInput, NewUserInput};
use serde::Deserialize;

/// A field as sent by the client, whatever its JSON type.
///
/// Every value is handed to validation in textual form, so `"duration": 30`
/// and `"duration": "30"` are the same input. Booleans, arrays and objects
/// become their JSON text and fail validation like any other bad string.
/// `0` is the text `"0"`, a valid duration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
            Self::Other(value) => value.to_string(),
        }
    }
}

fn text(value: Option<FieldValue>) -> Option<String> {
    value.map(FieldValue::into_text)
}

/// Body of `POST /api/exercise/new-user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUserRequest {
    #[serde(default)]
    pub username: Option<FieldValue>,
}

impl From<NewUserRequest> for NewUserInput {
    fn from(req: NewUserRequest) -> Self {
        Self {
            username: text(req.username),
        }
    }
}

/// Body of `POST /api/exercise/add`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub user_id: Option<FieldValue>,
    #[serde(default)]
    pub description: Option<FieldValue>,
    #[serde(default)]
    pub duration: Option<FieldValue>,
    #[serde(default)]
    pub date: Option<FieldValue>,
}

impl From<AddExerciseRequest> for NewExerciseInput {
    fn from(req: AddExerciseRequest) -> Self {
        Self {
            user_id: text(req.user_id),
            description: text(req.description),
            duration: text(req.duration),
            date: text(req.date),
        }
    }
}

/// Query string of `GET /api/exercise/log`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogParams {
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl From<LogParams> for LogRequest {
    fn from(params: LogParams) -> Self {
        Self {
            user_id: params.user_id,
            from: params.from,
            to: params.to,
            limit: params.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_become_text() {
        let req: AddExerciseRequest = serde_json::from_str(
            r#"{"userId":"u1","description":"run","duration":30,"date":null}"#,
        )
        .unwrap();
        let input = NewExerciseInput::from(req);

        assert_eq!(input.user_id.as_deref(), Some("u1"));
        assert_eq!(input.duration.as_deref(), Some("30"));
        assert_eq!(input.date, None);
    }

    #[test]
    fn test_fractional_number_keeps_fraction() {
        let req: AddExerciseRequest = serde_json::from_str(r#"{"duration":12.5}"#).unwrap();
        assert_eq!(NewExerciseInput::from(req).duration.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_other_json_types_become_json_text() {
        let req: AddExerciseRequest = serde_json::from_str(
            r#"{"userId":{"id":1},"description":true,"duration":[30]}"#,
        )
        .unwrap();
        let input = NewExerciseInput::from(req);

        assert_eq!(input.user_id.as_deref(), Some(r#"{"id":1}"#));
        assert_eq!(input.description.as_deref(), Some("true"));
        assert_eq!(input.duration.as_deref(), Some("[30]"));
    }

    #[test]
    fn test_zero_duration_is_present() {
        let req: AddExerciseRequest = serde_json::from_str(r#"{"duration":0}"#).unwrap();
        assert_eq!(NewExerciseInput::from(req).duration.as_deref(), Some("0"));
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let req: NewUserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(NewUserInput::from(req).username, None);
    }
}
