//! Checks that a raw API answer has the shape the bot relies on.

use serde_json::Value;
use tracing::{debug, error};

use crate::error::BotError;

/// Extracts the `homeworks` list from a parsed response.
///
/// Records inside the list are not inspected here; that is the
/// translator's job.
pub fn check_response(response: &Value) -> Result<&[Value], BotError> {
    debug!("checking API response shape");
    if is_falsy(response) {
        error!("API returned an empty response");
        return Err(BotError::EmptyResponse);
    }
    let Some(map) = response.as_object() else {
        error!("API response is not a mapping");
        return Err(BotError::Shape("ответ API не является словарём".into()));
    };
    let Some(homeworks) = map.get("homeworks") else {
        error!("API response has no `homeworks` key");
        return Err(BotError::Shape("в ответе API нет ключа 'homeworks'".into()));
    };
    match homeworks.as_array() {
        Some(list) => Ok(list),
        None => {
            error!("`homeworks` is not a list");
            Err(BotError::Shape("под ключом 'homeworks' не список".into()))
        }
    }
}

/// Server timestamp to use as the next `from_date`, if the response has one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_mapping_is_empty_response() {
        let err = check_response(&json!({})).unwrap_err();
        assert!(matches!(err, BotError::EmptyResponse));
    }

    #[test]
    fn null_is_empty_response() {
        assert!(matches!(
            check_response(&Value::Null).unwrap_err(),
            BotError::EmptyResponse
        ));
    }

    #[test]
    fn top_level_list_is_shape_error() {
        let err = check_response(&json!([{"homework_name": "x"}])).unwrap_err();
        assert!(matches!(err, BotError::Shape(_)));
    }

    #[test]
    fn missing_homeworks_key_is_shape_error() {
        let err = check_response(&json!({"current_date": 1})).unwrap_err();
        match err {
            BotError::Shape(detail) => assert!(detail.contains("homeworks")),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[test]
    fn homeworks_not_a_list_is_shape_error() {
        let err = check_response(&json!({"homeworks": "not-a-list"})).unwrap_err();
        assert!(matches!(err, BotError::Shape(_)));
    }

    #[test]
    fn returns_records_unchanged() {
        let response = json!({
            "homeworks": [
                {"homework_name": "b", "status": "rejected"},
                {"homework_name": "a", "status": "whatever", "extra": 1}
            ],
            "current_date": 5
        });
        let list = check_response(&response).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["homework_name"], "b");
        assert_eq!(list[1]["extra"], 1);
    }

    #[test]
    fn empty_list_passes_validation() {
        let response = json!({"homeworks": []});
        assert!(check_response(&response).unwrap().is_empty());
    }

    #[test]
    fn current_date_is_optional() {
        assert_eq!(current_date(&json!({"homeworks": [], "current_date": 1_700_000_000})), Some(1_700_000_000));
        assert_eq!(current_date(&json!({"homeworks": []})), None);
        assert_eq!(current_date(&json!({"homeworks": [], "current_date": "soon"})), None);
    }
}
