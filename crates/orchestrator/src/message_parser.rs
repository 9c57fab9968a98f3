use codegen_core::{Priority, Review, Task};
use serde_json::Value;
use tracing::debug;

const PREVIEW_CHARS: usize = 200;

pub struct MessageParser;

impl MessageParser {
    /// Parse a planner response as a JSON array of tasks.
    ///
    /// The whole response must be JSON; nothing is extracted from prose or
    /// code fences. Array elements are decoded leniently (numeric ids are
    /// stringified, missing fields are empty, unknown priorities become
    /// medium) and the array length is not checked. Returns `None` for
    /// anything that is not a JSON array of objects.
    pub fn parse_task_list(content: &str) -> Option<Vec<Task>> {
        let value: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                debug!(error = %e, "Planner response is not JSON");
                return None;
            }
        };

        let Value::Array(items) = value else {
            debug!("Planner response is JSON but not an array");
            return None;
        };

        items.iter().map(Self::task_from_value).collect()
    }

    fn task_from_value(value: &Value) -> Option<Task> {
        let object = value.as_object()?;

        let id = match object.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let task = object
            .get("task")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let priority = object
            .get("priority")
            .and_then(Value::as_str)
            .and_then(Priority::parse)
            .unwrap_or_default();

        Some(Task { id, task, priority })
    }

    /// Parse a reviewer response as a JSON critique.
    ///
    /// `score` and `approved` are required; `issues` and `suggestions`
    /// default to empty.
    pub fn parse_review(content: &str) -> Option<Review> {
        serde_json::from_str(content)
            .map_err(|e| debug!(error = %e, "Review response does not match the critique shape"))
            .ok()
    }

    /// Short prefix of a response, for log fields.
    pub fn preview(content: &str) -> String {
        content.chars().take(PREVIEW_CHARS).collect()
    }
}
