// src/cloud.rs
//! ECS and CloudFormation calls behind one session.

#![deny(missing_docs)]

use crate::context::Context;
use crate::error::{StackError, StackResult};
use crate::events::{ClusterStatus, ServiceEventRecord, StackEventRecord};
use crate::template::Template;
use anyhow::Context as _;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::primitives::{DateTime, DateTimeFormat};
use aws_sdk_cloudformation::types::Capability;
use std::time::Duration;

/// How often `deploy --wait` polls the stack.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// What a deploy did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// A new stack was requested; carries the stack id.
    Created(String),
    /// An existing stack was updated; carries the stack id.
    Updated(String),
    /// CloudFormation found nothing to change.
    Unchanged,
    /// Dry run; `exists` tells whether an update or a create was skipped.
    Skipped {
        /// The stack already existed.
        exists: bool,
    },
}

/// Authenticated ECS and CloudFormation clients.
pub struct Cloud {
    ecs: aws_sdk_ecs::Client,
    cfn: aws_sdk_cloudformation::Client,
}

impl Cloud {
    /// Build both clients from the context's profile and region.
    pub async fn connect(ctx: &Context) -> Cloud {
        tracing::debug!(profile = %ctx.profile, region = %ctx.region, "loading aws config");
        let sdk = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(ctx.region.clone()))
            .profile_name(&ctx.profile)
            .load()
            .await;
        Cloud {
            ecs: aws_sdk_ecs::Client::new(&sdk),
            cfn: aws_sdk_cloudformation::Client::new(&sdk),
        }
    }

    /// Describe one ECS cluster.
    pub async fn describe_cluster(&self, name: &str) -> StackResult<ClusterStatus> {
        tracing::debug!(cluster = name, "DescribeClusters");
        let out = self
            .ecs
            .describe_clusters()
            .clusters(name)
            .send()
            .await
            .context("Error Describing Cluster")?;

        if let Some(failure) = out.failures().first() {
            return Err(StackError::ClusterNotFound {
                name: name.to_string(),
                reason: failure.reason().unwrap_or("unknown").to_string(),
            }
            .into());
        }
        let cluster = out
            .clusters()
            .first()
            .ok_or_else(|| StackError::ClusterNotFound {
                name: name.to_string(),
                reason: "no cluster returned".to_string(),
            })?;

        Ok(ClusterStatus {
            name: cluster.cluster_name().unwrap_or(name).to_string(),
            status: cluster.status().unwrap_or_default().to_string(),
            active_services: cluster.active_services_count(),
            running_tasks: cluster.running_tasks_count(),
            pending_tasks: cluster.pending_tasks_count(),
            container_instances: cluster.registered_container_instances_count(),
        })
    }

    /// Events of a CloudFormation stack, newest first.
    pub async fn stack_events(&self, stack: &str) -> StackResult<Vec<StackEventRecord>> {
        tracing::debug!(stack, "DescribeStackEvents");
        let out = self
            .cfn
            .describe_stack_events()
            .stack_name(stack)
            .send()
            .await
            .context("Error Describing Stack Events")?;

        Ok(out
            .stack_events()
            .iter()
            .map(|e| StackEventRecord {
                status: e
                    .resource_status()
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_default(),
                logical_id: e.logical_resource_id().unwrap_or_default().to_string(),
                resource_type: e.resource_type().unwrap_or_default().to_string(),
                timestamp: e.timestamp().map(format_time).unwrap_or_default(),
                reason: e.resource_status_reason().map(str::to_string),
            })
            .collect())
    }

    /// Events of an ECS service, newest first.
    pub async fn service_events(
        &self,
        cluster: &str,
        service: &str,
    ) -> StackResult<Vec<ServiceEventRecord>> {
        tracing::debug!(cluster, service, "DescribeServices");
        let out = self
            .ecs
            .describe_services()
            .cluster(cluster)
            .services(service)
            .send()
            .await
            .context("Error Describing Container Instances")?;

        let svc = out
            .services()
            .first()
            .ok_or_else(|| StackError::ServiceNotFound(service.to_string()))?;

        Ok(svc
            .events()
            .iter()
            .map(|e| ServiceEventRecord {
                created_at: e.created_at().map(format_time).unwrap_or_default(),
                message: e.message().unwrap_or_default().to_string(),
            })
            .collect())
    }

    /// Names of the services in a cluster.
    pub async fn list_services(&self, cluster: &str) -> StackResult<Vec<String>> {
        tracing::debug!(cluster, "ListServices");
        let out = self
            .ecs
            .list_services()
            .cluster(cluster)
            .max_results(100)
            .send()
            .await
            .context("Error Listing Services")?;

        Ok(out
            .service_arns()
            .iter()
            .map(|arn| service_name(arn).to_string())
            .collect())
    }

    /// Create the stack, or update it when it already exists.
    pub async fn deploy(
        &self,
        stack: &str,
        template: &Template,
        dry_run: bool,
    ) -> StackResult<DeployOutcome> {
        self.create_or_update(stack, template, dry_run)
            .await
            .context("Error Deploying New Stack")
    }

    /// Poll until the stack leaves its `*_IN_PROGRESS` state.
    pub async fn wait_for_stack(&self, stack: &str) -> StackResult<String> {
        loop {
            let status = self
                .stack_status(stack)
                .await
                .context("Error Waiting For Stack")?
                .unwrap_or_default();
            tracing::info!(stack, status = %status, "stack status");
            if !status.ends_with("_IN_PROGRESS") {
                return match status.as_str() {
                    "CREATE_COMPLETE" | "UPDATE_COMPLETE" => Ok(status),
                    _ => Err(StackError::DeployFailed {
                        stack: stack.to_string(),
                        status,
                    }
                    .into()),
                };
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn create_or_update(
        &self,
        stack: &str,
        template: &Template,
        dry_run: bool,
    ) -> StackResult<DeployOutcome> {
        let exists = self.stack_status(stack).await?.is_some();
        if dry_run {
            tracing::info!(stack, exists, "dry run, deploy skipped");
            return Ok(DeployOutcome::Skipped { exists });
        }

        if !exists {
            tracing::debug!(stack, "CreateStack");
            let out = self
                .cfn
                .create_stack()
                .stack_name(stack)
                .template_body(template.body())
                .capabilities(Capability::CapabilityIam)
                .capabilities(Capability::CapabilityNamedIam)
                .send()
                .await?;
            return Ok(DeployOutcome::Created(
                out.stack_id().unwrap_or_default().to_string(),
            ));
        }

        tracing::debug!(stack, "UpdateStack");
        let res = self
            .cfn
            .update_stack()
            .stack_name(stack)
            .template_body(template.body())
            .capabilities(Capability::CapabilityIam)
            .capabilities(Capability::CapabilityNamedIam)
            .send()
            .await;
        match res {
            Ok(out) => Ok(DeployOutcome::Updated(
                out.stack_id().unwrap_or_default().to_string(),
            )),
            Err(err)
                if err
                    .as_service_error()
                    .and_then(|e| e.message())
                    .is_some_and(|m| m.contains("No updates are to be performed")) =>
            {
                Ok(DeployOutcome::Unchanged)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Current status of the stack, `None` when it does not exist.
    async fn stack_status(&self, stack: &str) -> StackResult<Option<String>> {
        tracing::debug!(stack, "DescribeStacks");
        match self.cfn.describe_stacks().stack_name(stack).send().await {
            Ok(out) => Ok(out.stacks().first().map(|s| {
                s.stack_status()
                    .map(|st| st.as_str().to_string())
                    .unwrap_or_default()
            })),
            Err(err)
                if err
                    .as_service_error()
                    .and_then(|e| e.message())
                    .is_some_and(|m| m.contains("does not exist")) =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Last path segment of an ECS service ARN.
pub fn service_name(arn: &str) -> &str {
    arn.rsplit('/').next().unwrap_or(arn)
}

fn format_time(t: &DateTime) -> String {
    t.fmt(DateTimeFormat::DateTime)
        .unwrap_or_else(|_| t.secs().to_string())
}
