//! Notification type values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum stored length of a notification message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    TaskCreated,
    TaskCompleted,
    ProjectUpdate,
    TaskAssigned,
}

impl NotificationType {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::TaskCreated => "task_created",
            NotificationType::TaskCompleted => "task_completed",
            NotificationType::ProjectUpdate => "project_update",
            NotificationType::TaskAssigned => "task_assigned",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task_created" => Ok(NotificationType::TaskCreated),
            "task_completed" => Ok(NotificationType::TaskCompleted),
            "project_update" => Ok(NotificationType::ProjectUpdate),
            "task_assigned" => Ok(NotificationType::TaskAssigned),
            other => Err(format!("Unknown notification type '{other}'")),
        }
    }
}

impl TryFrom<String> for NotificationType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
