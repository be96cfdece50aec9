// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Bounded retries for idempotent reads

use std::time::Duration;

use crate::error::Result;

/// Longest delay between two attempts
const MAX_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Run `f` until it succeeds, fails permanently, or `max_retries` is spent
///
/// Only transient failures (transport errors, 5xx, 429) are retried, with
/// exponential backoff and a little jitter. Never wrap a write in this.
pub(crate) async fn with_retries<F, Fut, T>(
    mut f: F,
    op_name: &str,
    max_retries: u32,
    initial_delay: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0u32;
    let mut delay = initial_delay;

    loop {
        match f().await {
            Ok(v) => return Ok(v),
            Err(e) => {
                attempt += 1;
                if !e.is_transient() || attempt > max_retries {
                    return Err(e);
                }

                tracing::warn!(
                    op = op_name,
                    attempt,
                    max_retries,
                    error = %e,
                    "Retrying after transient failure"
                );

                let jitter: u64 = (rand::random::<u8>() as u64) % 50;
                tokio::time::sleep(delay + Duration::from_millis(jitter)).await;
                delay = std::cmp::min(delay * 2, MAX_RETRY_DELAY);
            }
        }
    }
}
