use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Sentinel meaning "every task in the suite", resolved by the evaluator.
pub const ALL_TASKS: &str = "all";

/// Representative subset used when `--tasks` is blank.
pub const DEFAULT_TASKS: [&str; 5] = [
    // Classic control, dense reward
    "cartpole_balance",
    // Classic control, swing-up
    "acrobot_swingup",
    // Manipulation
    "reacher_easy",
    // Locomotion (biped)
    "walker_walk",
    // Locomotion (fast)
    "cheetah_run",
];

#[derive(Debug, Error)]
pub enum TaskSpecError {
    #[error("Invalid JSON for tasks: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("JSON tasks must be a list of strings")]
    NotStringList,
    #[error("tasks list is empty")]
    Empty,
}

/// Value written to `[config].tasks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskList {
    All,
    /// Never empty, every entry trimmed and non-empty. Duplicates are kept.
    Tasks(Vec<String>),
}

impl TaskList {
    pub fn defaults() -> Self {
        Self::Tasks(DEFAULT_TASKS.iter().map(|t| t.to_string()).collect())
    }
}

impl Serialize for TaskList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TaskList::All => serializer.serialize_str(ALL_TASKS),
            TaskList::Tasks(tasks) => tasks.serialize(serializer),
        }
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskList::All => write!(f, "{}", ALL_TASKS),
            TaskList::Tasks(tasks) => write!(f, "{:?}", tasks),
        }
    }
}

/// Normalize the raw `--tasks` argument.
///
/// Accepts a blank value (defaults), `all`, a JSON array of strings, a
/// comma-separated list, or a single task name.
pub fn parse_tasks(raw: Option<&str>) -> Result<TaskList, TaskSpecError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(TaskList::defaults());
    }

    if raw.eq_ignore_ascii_case(ALL_TASKS) {
        return Ok(TaskList::All);
    }

    if raw.starts_with('[') {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let Some(items) = value.as_array() else {
            return Err(TaskSpecError::NotStringList);
        };
        let mut names = Vec::with_capacity(items.len());
        for item in items {
            let Some(name) = item.as_str() else {
                return Err(TaskSpecError::NotStringList);
            };
            names.push(name);
        }
        return non_empty(names);
    }

    if raw.contains(',') {
        return non_empty(raw.split(','));
    }

    Ok(TaskList::Tasks(vec![raw.to_owned()]))
}

fn non_empty<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<TaskList, TaskSpecError> {
    let tasks: Vec<String> = names
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();
    if tasks.is_empty() {
        return Err(TaskSpecError::Empty);
    }
    Ok(TaskList::Tasks(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks(names: &[&str]) -> TaskList {
        TaskList::Tasks(names.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn blank_input_uses_defaults() {
        let expected = tasks(&[
            "cartpole_balance",
            "acrobot_swingup",
            "reacher_easy",
            "walker_walk",
            "cheetah_run",
        ]);
        for raw in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(parse_tasks(raw).unwrap(), expected, "{:?}", raw);
        }
    }

    #[test]
    fn all_is_case_insensitive() {
        for raw in ["all", "ALL", " All "] {
            assert_eq!(parse_tasks(Some(raw)).unwrap(), TaskList::All);
        }
    }

    #[test]
    fn json_list() {
        assert_eq!(
            parse_tasks(Some(r#"["a", "b", "c"]"#)).unwrap(),
            tasks(&["a", "b", "c"])
        );
        assert_eq!(
            parse_tasks(Some(r#"[" a ", "", "  "]"#)).unwrap(),
            tasks(&["a"])
        );
    }

    #[test]
    fn json_list_errors() {
        assert!(matches!(parse_tasks(Some("[]")), Err(TaskSpecError::Empty)));
        assert!(matches!(parse_tasks(Some(r#"[""]"#)), Err(TaskSpecError::Empty)));
        assert!(matches!(
            parse_tasks(Some("[1, 2]")),
            Err(TaskSpecError::NotStringList)
        ));
        assert!(matches!(
            parse_tasks(Some(r#"["a", null]"#)),
            Err(TaskSpecError::NotStringList)
        ));
        assert!(matches!(
            parse_tasks(Some("[oops")),
            Err(TaskSpecError::InvalidJson(_))
        ));
    }

    #[test]
    fn comma_separated() {
        assert_eq!(parse_tasks(Some("a,b,,c")).unwrap(), tasks(&["a", "b", "c"]));
        assert_eq!(parse_tasks(Some(" a , a ")).unwrap(), tasks(&["a", "a"]));
        assert!(matches!(parse_tasks(Some(" , , ")), Err(TaskSpecError::Empty)));
    }

    #[test]
    fn single_task() {
        assert_eq!(
            parse_tasks(Some("walker_walk")).unwrap(),
            tasks(&["walker_walk"])
        );
        // Not an array, so it is taken verbatim
        assert_eq!(
            parse_tasks(Some(r#"{"a": 1}"#)).unwrap(),
            tasks(&[r#"{"a": 1}"#])
        );
    }

    #[test]
    fn display() {
        assert_eq!(TaskList::All.to_string(), "all");
        assert_eq!(tasks(&["walker_walk"]).to_string(), r#"["walker_walk"]"#);
    }

    #[test]
    fn error_messages() {
        assert_eq!(TaskSpecError::Empty.to_string(), "tasks list is empty");
        let err = parse_tasks(Some("[oops")).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON for tasks: "));
    }
}
