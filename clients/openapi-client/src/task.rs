// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Deferred operation tracking
//!
//! A write answered with `202 Accepted` names an operation status document
//! in its `Location` header. The operation moves through
//!
//! ```text
//! Accepted -> Running -> { Succeeded | Failed }
//! ```
//!
//! and is polled with exponential backoff until it is terminal, the
//! configured timeout elapses, or the caller cancels. Giving up never
//! touches the server-side operation. Status checks are plain GETs and are
//! retried on transient failures; the write that started the operation is
//! never re-sent.

use std::fmt;

use http::Method;
use http::header::HeaderMap;
use openapi_types::{Task, TaskStatus};
use tokio::time::{Instant, sleep, sleep_until};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::retry::with_retries;
use crate::transport::ApiResponse;

/// Client-side view of a deferred operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationState {
    Accepted,
    Running,
    Succeeded,
    Failed,
}

impl From<TaskStatus> for OperationState {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Queued | TaskStatus::PreRunning => OperationState::Accepted,
            TaskStatus::Running | TaskStatus::Unknown => OperationState::Running,
            TaskStatus::Success => OperationState::Succeeded,
            TaskStatus::Error | TaskStatus::Canceled | TaskStatus::Aborted => {
                OperationState::Failed
            }
        }
    }
}

impl OperationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, OperationState::Succeeded | OperationState::Failed)
    }
}

/// Address of an operation status document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationHandle(Url);

impl OperationHandle {
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    /// Handle from the `Location` header of a deferred response
    ///
    /// A relative location is resolved against the request address.
    pub fn from_response(response: &ApiResponse, request_url: &Url) -> Result<Self> {
        let location = response.location().ok_or(Error::MissingOperationHandle {
            status: response.status,
        })?;
        let url = request_url.join(location).map_err(|e| Error::Endpoint {
            template: location.to_string(),
            reason: format!("invalid operation Location: {}", e),
        })?;
        Ok(Self(url))
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for OperationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves at `deadline`, or never without one
async fn until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

impl Client {
    /// Fetch the current status document of an operation (retried)
    ///
    /// `headers` are the extra headers of the call that started the
    /// operation; the status document lives in the same tenant scope.
    pub async fn operation_status(
        &self,
        handle: &OperationHandle,
        headers: &HeaderMap,
    ) -> Result<Task> {
        let poll = &self.config().poll;
        with_retries(
            || async move {
                self.get_json(handle.url().clone(), &[], headers, "operation status")
                    .await
            },
            "operation status check",
            poll.status_retries,
            poll.retry_delay,
        )
        .await
    }

    /// Wait for an operation to finish and return its final status document
    ///
    /// Fails with [`Error::OperationFailed`] if the operation failed,
    /// [`Error::OperationTimeout`] once the poll timeout elapses and
    /// [`Error::OperationCancelled`] when `cancel` fires. A timeout too large
    /// to represent as an instant means waiting without a deadline.
    pub async fn await_task(
        &self,
        handle: &OperationHandle,
        headers: &HeaderMap,
        cancel: &CancellationToken,
    ) -> Result<Task> {
        let poll = &self.config().poll;
        let deadline = Instant::now().checked_add(poll.timeout);
        let mut interval = poll.initial_interval;
        let mut state = OperationState::Accepted;

        let timeout = || Error::OperationTimeout {
            handle: handle.to_string(),
            waited: poll.timeout,
        };
        let cancelled = || Error::OperationCancelled {
            handle: handle.to_string(),
        };

        loop {
            let task = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled()),
                _ = until(deadline) => return Err(timeout()),
                task = self.operation_status(handle, headers) => task?,
            };

            let next = OperationState::from(task.status);
            if next != state {
                tracing::debug!(
                    handle = %handle,
                    from = ?state,
                    to = ?next,
                    progress = task.progress,
                    "Operation state changed"
                );
                state = next;
            }

            match state {
                OperationState::Succeeded => {
                    tracing::info!(
                        handle = %handle,
                        owner = task.owner_id().unwrap_or_default(),
                        "Operation completed"
                    );
                    return Ok(task);
                }
                OperationState::Failed => {
                    return Err(Error::OperationFailed {
                        handle: handle.to_string(),
                        minor_error_code: task
                            .error
                            .as_ref()
                            .map(|e| e.minor_error_code.clone())
                            .unwrap_or_default(),
                        message: task.failure_message(),
                    });
                }
                OperationState::Accepted | OperationState::Running => {}
            }

            let now = Instant::now();
            let pause = match deadline {
                Some(deadline) if now >= deadline => return Err(timeout()),
                Some(deadline) => interval.min(deadline - now),
                None => interval,
            };

            tokio::select! {
                _ = cancel.cancelled() => return Err(cancelled()),
                _ = sleep(pause) => {}
            }
            interval = poll.next_interval(interval);
        }
    }

    /// Wait for an operation and return the id of the entity it affected
    pub async fn await_completion(
        &self,
        handle: &OperationHandle,
        headers: &HeaderMap,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let task = self.await_task(handle, headers, cancel).await?;
        task.owner_id()
            .map(str::to_string)
            .ok_or_else(|| Error::MissingOwner {
                handle: handle.to_string(),
            })
    }

    /// Send a write and, if the server defers it, wait for the operation
    ///
    /// Returns the response together with the completed operation, if any.
    pub(crate) async fn send_write(
        &self,
        method: Method,
        url: &Url,
        query: &[(String, String)],
        body: Option<Vec<u8>>,
        headers: &HeaderMap,
        cancel: &CancellationToken,
    ) -> Result<(ApiResponse, Option<(OperationHandle, Task)>)> {
        let response = self
            .send(method, url.clone(), query, body, headers)
            .await?;

        if response.status == http::StatusCode::ACCEPTED {
            let handle = OperationHandle::from_response(&response, url)?;
            tracing::debug!(handle = %handle, "Request accepted, waiting for operation");
            let task = self.await_task(&handle, headers, cancel).await?;
            return Ok((response, Some((handle, task))));
        }

        if !response.status.is_success() {
            return Err(Error::from_response(response.status, &response.body));
        }

        Ok((response, None))
    }
}
