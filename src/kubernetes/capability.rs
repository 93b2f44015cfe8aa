// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API availability checks based on server discovery.

use crate::error::{OdfError, Result};
use crate::kubernetes::discovery::{server_groups_and_resources, DiscoveryError, GroupVersion};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIResourceList;
use kube::Client;
use tracing::{debug, instrument, warn};

/// Check whether the server serves `resource` under `group_version`.
///
/// If discovery only partially fails and the wanted group/version is among
/// the failing ones, the API counts as available: the group is registered
/// even though its resources could not be listed. Any other discovery error
/// is returned to the caller.
#[instrument(skip(client, group_version), fields(group_version = %group_version))]
pub async fn is_capability_available(
    client: &Client,
    group_version: &GroupVersion,
    resource: &str,
) -> Result<bool> {
    let resources = match server_groups_and_resources(client).await {
        Ok(resources) => resources,
        Err(DiscoveryError::GroupDiscoveryFailed {
            resources,
            failed_groups,
        }) => {
            if let Some(e) = failed_groups.get(group_version) {
                warn!(
                    "{} is registered but failed discovery ({}), treating {} as available",
                    group_version, e, resource
                );
                return Ok(true);
            }
            debug!(
                "Discovery incomplete for {} group/versions, checking the rest",
                failed_groups.len()
            );
            resources
        }
        Err(DiscoveryError::Request(e)) => return Err(OdfError::DiscoveryError(e)),
    };

    Ok(serves_resource(&resources, group_version, resource))
}

fn serves_resource(lists: &[APIResourceList], group_version: &GroupVersion, resource: &str) -> bool {
    lists
        .iter()
        .filter(|list| GroupVersion::parse(&list.group_version) == *group_version)
        .any(|list| list.resources.iter().any(|r| r.name == resource))
}
