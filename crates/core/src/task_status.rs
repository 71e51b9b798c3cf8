//! Task status lifecycle.
//!
//! Three states, any transition allowed through an explicit update, no
//! terminal state. New tasks start in [`TaskStatus::ToDo`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const STATUS_TODO: &str = "To-Do";
pub const STATUS_IN_PROGRESS: &str = "In Progress";
pub const STATUS_DONE: &str = "Done";

/// All valid stored/serialized status values.
pub const VALID_STATUSES: &[&str] = &[STATUS_TODO, STATUS_IN_PROGRESS, STATUS_DONE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To-Do", alias = "ToDo", alias = "Todo")]
    ToDo,
    #[serde(rename = "In Progress", alias = "In-Progress", alias = "InProgress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => STATUS_TODO,
            TaskStatus::InProgress => STATUS_IN_PROGRESS,
            TaskStatus::Done => STATUS_DONE,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "To-Do" | "ToDo" | "Todo" => Ok(TaskStatus::ToDo),
            "In Progress" | "In-Progress" | "InProgress" => Ok(TaskStatus::InProgress),
            "Done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }
}

/// Row decoding goes through `String` (`#[sqlx(try_from = "String")]`).
impl TryFrom<String> for TaskStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
