//! CLI argument parser for stack.

#![deny(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Template deployed when `--template` is not given.
pub const DEFAULT_TEMPLATE: &str = "json/test.json";

/// Amazon ECS interface.
#[derive(Parser, Debug)]
#[command(
    name = "stack",
    version,
    about = "Amazon ECS Interface",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Set AWS profile.
    #[arg(short, long, default_value = "default", global = true)]
    pub profile: String,

    /// Set AWS region.
    #[arg(short, long, default_value = "us-east-1", global = true)]
    pub region: String,

    /// Set the ECS cluster name.
    #[arg(short, long, default_value = "default", global = true)]
    pub cluster: String,

    /// Set AWS CloudFormation stack name.
    #[arg(
        short,
        long,
        default_value = "EC2ContainerService-default",
        global = true
    )]
    pub stack: String,

    /// More output; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report what would change without writing files or deploying.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands supported by the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the status of the ECS cluster.
    Status,

    /// List current events for the stack or a service.
    Events {
        /// Number of events to output (all when omitted).
        #[arg(short, long)]
        number: Option<usize>,

        /// Name of the ECS container service.
        #[arg(long, conflicts_with = "select")]
        service: Option<String>,

        /// Pick the service from the cluster's services.
        #[arg(long)]
        select: bool,

        /// Print the most recent events, oldest first.
        #[arg(long)]
        tail: bool,
    },

    /// Interface for configuring stack.
    Config {
        /// List current config.
        #[arg(short, long)]
        list: bool,
    },

    /// Deploy a CloudFormation stack from a JSON template.
    Deploy {
        /// Template file to deploy.
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: PathBuf,

        /// Block until the stack settles.
        #[arg(long)]
        wait: bool,
    },
}
