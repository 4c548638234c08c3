// src/context.rs
//! Flag values shared by every subcommand.

#![deny(missing_docs)]

use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::error::StackResult;

/// Everything bound once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Context {
    /// Named AWS profile.
    pub profile: String,
    /// AWS region.
    pub region: String,
    /// ECS cluster name.
    pub cluster: String,
    /// CloudFormation stack name.
    pub stack: String,
    /// Verbosity count.
    pub verbose: u8,
    /// Skip every state-changing action.
    pub dry_run: bool,
}

impl Context {
    /// Fold the global flags into a context.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            profile: cli.profile.clone(),
            region: cli.region.clone(),
            cluster: cli.cluster.clone(),
            stack: cli.stack.clone(),
            verbose: cli.verbose,
            dry_run: cli.dry_run,
        }
    }

    /// Whether extra confirmation output is wanted.
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    /// Config store at the default location, honouring dry run and verbosity.
    pub fn config_store(&self) -> StackResult<ConfigStore> {
        ConfigStore::locate(self.dry_run, self.is_verbose())
    }
}
