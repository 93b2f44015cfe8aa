// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server API discovery that tolerates individual group/versions failing.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

/// An API group and version, e.g. `multicluster.x-k8s.io/v1alpha1`.
/// The core group has an empty `group` and renders as just the version.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupVersion {
    pub group: String,
    pub version: String,
}

impl GroupVersion {
    pub fn new(group: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            version: version.to_string(),
        }
    }

    /// Parse the `groupVersion` string used by discovery documents
    pub fn parse(group_version: &str) -> Self {
        match group_version.split_once('/') {
            Some((group, version)) => Self::new(group, version),
            None => Self::new("", group_version),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Some group/versions could not be enumerated. `resources` holds the
    /// lists that were retrieved successfully.
    #[error(
        "unable to retrieve the complete list of server APIs: {}",
        describe_failures(.failed_groups)
    )]
    GroupDiscoveryFailed {
        resources: Vec<APIResourceList>,
        failed_groups: BTreeMap<GroupVersion, kube::Error>,
    },

    #[error("failed to query server API groups: {0}")]
    Request(#[source] kube::Error),
}

fn describe_failures(failed_groups: &BTreeMap<GroupVersion, kube::Error>) -> String {
    failed_groups
        .iter()
        .map(|(gv, e)| format!("{}: {}", gv, e))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 404 and 403 on the top level discovery endpoints mean "nothing served here"
fn is_ignorable(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(e) if e.code == 404 || e.code == 403)
}

/// Fetch every group/version the server advertises together with its resources.
///
/// Group/versions are queried one after another. Failures on individual
/// group/versions are collected into `DiscoveryError::GroupDiscoveryFailed`
/// instead of aborting the whole query.
#[instrument(skip(client))]
pub async fn server_groups_and_resources(
    client: &Client,
) -> std::result::Result<Vec<APIResourceList>, DiscoveryError> {
    let mut group_versions = Vec::new();

    match client.list_core_api_versions().await {
        Ok(core) => group_versions.extend(core.versions.iter().map(|v| GroupVersion::new("", v))),
        Err(e) if is_ignorable(&e) => debug!("Core API versions not served: {}", e),
        Err(e) => return Err(DiscoveryError::Request(e)),
    }

    match client.list_api_groups().await {
        Ok(groups) => {
            for group in groups.groups {
                group_versions.extend(
                    group
                        .versions
                        .iter()
                        .map(|v| GroupVersion::new(&group.name, &v.version)),
                );
            }
        }
        Err(e) if is_ignorable(&e) => debug!("API groups not served: {}", e),
        Err(e) => return Err(DiscoveryError::Request(e)),
    }

    let mut resources = Vec::with_capacity(group_versions.len());
    let mut failed_groups = BTreeMap::new();

    for gv in group_versions {
        let result = if gv.group.is_empty() {
            client.list_core_api_resources(&gv.version).await
        } else {
            client.list_api_group_resources(&gv.to_string()).await
        };

        match result {
            Ok(list) => resources.push(list),
            Err(e) => {
                debug!("Discovery failed for {}: {}", gv, e);
                failed_groups.insert(gv, e);
            }
        }
    }

    if failed_groups.is_empty() {
        Ok(resources)
    } else {
        Err(DiscoveryError::GroupDiscoveryFailed {
            resources,
            failed_groups,
        })
    }
}
