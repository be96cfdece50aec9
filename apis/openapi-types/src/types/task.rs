// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Deferred operation (task) status document
//!
//! A write answered with `202 Accepted` carries a `Location` header naming
//! one of these documents. It is polled until `status` is terminal.

use serde::{Deserialize, Serialize};

use super::common::{ApiError, OpenApiReference};

/// Server-side task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Queued,
    PreRunning,
    Running,
    Success,
    Error,
    Canceled,
    Aborted,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Whether the task can no longer change state
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Success | Self::Error | Self::Canceled | Self::Aborted
        )
    }
}

/// Task status document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: String,
    pub status: TaskStatus,
    /// Operation summary (e.g. "Created IP Space r1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Entity the task acted on; its id is what a create re-fetches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OpenApiReference>,
    /// Failure details, present when `status` is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Completion percentage, when the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl Task {
    /// Id of the owning entity, if the server filled one in
    pub fn owner_id(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .map(|owner| owner.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Best available failure description
    pub fn failure_message(&self) -> String {
        if let Some(error) = &self.error {
            return error.message.clone();
        }
        if let Some(details) = &self.details {
            return details.clone();
        }
        format!("task finished with status {:?}", self.status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_decoding() {
        let task: Result<Task, _> =
            serde_json::from_str(r#"{"id":"t1","status":"preRunning"}"#);
        assert!(matches!(task, Ok(Task { status: TaskStatus::PreRunning, .. })));

        let task: Result<Task, _> = serde_json::from_str(r#"{"status":"paused"}"#);
        assert!(matches!(task, Ok(Task { status: TaskStatus::Unknown, .. })));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(TaskStatus::Success.is_terminal());
        assert!(TaskStatus::Error.is_terminal());
        assert!(TaskStatus::Aborted.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
        assert!(!TaskStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_owner_id_ignores_empty() {
        let task: Task =
            serde_json::from_str(r#"{"status":"success","owner":{"name":"r1","id":""}}"#)
                .expect("decode");
        assert_eq!(task.owner_id(), None);
    }

    #[test]
    fn test_failure_message_prefers_error_body() {
        let task: Task = serde_json::from_str(
            r#"{"status":"error","details":"d","error":{"minorErrorCode":"X","message":"boom"}}"#,
        )
        .expect("decode");
        assert_eq!(task.failure_message(), "boom");
    }
}
