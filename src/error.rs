// src/error.rs
//! Error handling for stack.

#![deny(missing_docs)]

use std::path::PathBuf;
use thiserror::Error;

/// StackResult is alias for anyhow
pub type StackResult<T> = anyhow::Result<T>;

/// Conditions the dispatcher needs to tell apart from a generic failure.
#[derive(Debug, Error)]
pub enum StackError {
    /// The user declined to create a missing config file.
    #[error("Skipping Configuration File Creation")]
    ConfigDeclined,

    /// The config file exists but is not a valid config object.
    #[error("Config File Is Corrupt: {path}")]
    CorruptConfig {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Standard input reached end of file while an answer was expected.
    #[error("Input Closed While Waiting For An Answer")]
    InputClosed,

    /// A selection was not a number.
    #[error("Error Getting Integer Input from User: {0:?}")]
    InvalidSelection(String),

    /// The user kept giving answers that could not be accepted.
    #[error("No Valid Answer After {0} Attempts")]
    TooManyAttempts(usize),

    /// The home directory could not be determined.
    #[error("Failed to get Home Directory")]
    NoHomeDir,

    /// ECS reported the cluster as a failure entry.
    #[error("Cluster {name} Not Found: {reason}")]
    ClusterNotFound {
        /// Requested cluster.
        name: String,
        /// Failure reason from ECS.
        reason: String,
    },

    /// ECS returned no service with that name.
    #[error("Error Finding Events for {0}: Please Check Service Name")]
    ServiceNotFound(String),

    /// A waited-on deploy settled in a failed state.
    #[error("Stack {stack} Finished With Status {status}")]
    DeployFailed {
        /// Stack name.
        stack: String,
        /// Terminal CloudFormation status.
        status: String,
    },
}
