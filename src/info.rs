// src/info.rs
//! Print config, cluster and event information.

#![deny(missing_docs)]

use crate::config::Config;
use crate::error::StackResult;
use crate::events::{ClusterStatus, ServiceEventRecord, StackEventRecord};
use colored::Colorize;
use std::io::Write;

/// Print stack information.
pub struct StackInfo();

impl StackInfo {
    /// Print the three config fields.
    pub fn show_config(config: &Config, out: &mut impl Write) -> StackResult<()> {
        writeln!(out)?;
        writeln!(out, "\n{}", "📖  Config".bold())?;
        writeln!(out, "First Name:📓  {}", config.fname)?;
        writeln!(out, " Last Name:📓  {}", config.lname)?;
        writeln!(out, "     Email:📧  {}", config.email)?;
        Ok(())
    }

    /// Print a cluster summary.
    pub fn show_cluster(status: &ClusterStatus, out: &mut impl Write) -> StackResult<()> {
        writeln!(out, "{}", format!("Cluster: {}", status.name).bold())?;
        writeln!(out, "               Status: {}", status.status)?;
        writeln!(out, "      Active Services: {}", status.active_services)?;
        writeln!(out, "        Running Tasks: {}", status.running_tasks)?;
        writeln!(out, "        Pending Tasks: {}", status.pending_tasks)?;
        writeln!(out, "  Container Instances: {}", status.container_instances)?;
        Ok(())
    }

    /// Print one stack event.
    pub fn show_stack_event(event: &StackEventRecord, out: &mut impl Write) -> StackResult<()> {
        writeln!(out)?;
        writeln!(out, "    Resource Status: {}", event.status)?;
        writeln!(out, "Logical Resource Id: {}", event.logical_id)?;
        writeln!(out, "      Resource Type: {}", event.resource_type)?;
        writeln!(out, "          Timestamp: {}", event.timestamp)?;
        if let Some(reason) = &event.reason {
            writeln!(out, "             Reason: {reason}")?;
        }
        Ok(())
    }

    /// Print one service event.
    pub fn show_service_event(
        event: &ServiceEventRecord,
        out: &mut impl Write,
    ) -> StackResult<()> {
        writeln!(out)?;
        writeln!(out, "{}  {}", event.created_at.dimmed(), event.message)?;
        Ok(())
    }

    /// Print how many events were shown out of how many exist.
    pub fn show_event_totals(printed: usize, total: usize, out: &mut impl Write) -> StackResult<()> {
        writeln!(out)?;
        writeln!(out, "Events Printed: {printed}")?;
        writeln!(out, "  Events Total: {total}")?;
        Ok(())
    }
}
