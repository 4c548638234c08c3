// src/events.rs
//! Plain records for what the cloud calls return.

#![deny(missing_docs)]

/// One CloudFormation stack event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackEventRecord {
    /// Resource status, e.g. `CREATE_COMPLETE`.
    pub status: String,
    /// Logical resource id from the template.
    pub logical_id: String,
    /// Resource type, e.g. `AWS::ECS::Cluster`.
    pub resource_type: String,
    /// Event timestamp.
    pub timestamp: String,
    /// Status reason, if CloudFormation gave one.
    pub reason: Option<String>,
}

/// One ECS service event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEventRecord {
    /// When the event was recorded.
    pub created_at: String,
    /// Event message.
    pub message: String,
}

/// Summary of an ECS cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterStatus {
    /// Cluster name.
    pub name: String,
    /// Cluster status, e.g. `ACTIVE`.
    pub status: String,
    /// Services in `ACTIVE` state.
    pub active_services: i32,
    /// Tasks in `RUNNING` state.
    pub running_tasks: i32,
    /// Tasks in `PENDING` state.
    pub pending_tasks: i32,
    /// Registered container instances.
    pub container_instances: i32,
}

/// Pick which events to print.
///
/// The APIs return newest first. `number` keeps the first N of them; with
/// `tail` the newest N are returned oldest first instead. `number` is clamped
/// to the list length.
pub fn take_events<T>(events: &[T], number: Option<usize>, tail: bool) -> Vec<&T> {
    let n = number.unwrap_or(events.len()).min(events.len());
    if tail {
        events[..n].iter().rev().collect()
    } else {
        events[..n].iter().collect()
    }
}
