// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command implementations invoked from the CLI.

pub mod set;

use crate::cli::{Command, SetCommand};
use crate::config::Config;
use crate::error::{OdfError, Result};
use kube::Client;
use std::future::Future;
use std::time::Duration;

/// Run a parsed command against the cluster and return the message to report
pub async fn execute(client: &Client, config: &Config, command: &Command) -> Result<String> {
    match command {
        Command::Set(SetCommand::MultiClusterService { cluster_id }) => {
            let enabled = with_deadline(
                config.timeout,
                set::multicluster_service::run(client, &config.storage_cluster_namespace, cluster_id),
            )
            .await?;
            Ok(enabled.to_string())
        }
    }
}

/// Await `fut`, giving up once `timeout` elapses. The pending request is
/// dropped on expiry and not retried.
pub async fn with_deadline<T, F>(timeout: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| OdfError::Timeout(limit))?,
        None => fut.await,
    }
}
