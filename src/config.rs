// src/config.rs
//! User configuration file for stack.

#![deny(missing_docs)]

use crate::error::{StackError, StackResult};
use crate::info::StackInfo;
use crate::input::Prompter;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the config file.
pub const CONFIG_DIR: &str = ".stack";
/// File name of the config file.
pub const CONFIG_FILE_NAME: &str = "config";

/// Config struct for stack. Missing fields read as empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
    /// Email address.
    pub email: String,
}

/// Result of the interactive edit flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The user confirmed and the file was written (or skipped by dry run).
    Saved,
    /// The user declined; nothing was persisted.
    Discarded,
}

/// What [`ConfigStore::get_config`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// The file already existed and was read.
    Existing(Config),
    /// The file was missing, got built interactively, and saved.
    Created(Config),
    /// The file was missing and got built, but the user chose not to save.
    Unsaved(Config),
}

impl Loaded {
    /// The in-memory config regardless of how it was obtained.
    pub fn config(&self) -> &Config {
        match self {
            Loaded::Existing(c) | Loaded::Created(c) | Loaded::Unsaved(c) => c,
        }
    }

    /// Give up ownership of the config.
    pub fn into_config(self) -> Config {
        match self {
            Loaded::Existing(c) | Loaded::Created(c) | Loaded::Unsaved(c) => c,
        }
    }
}

/// Reads and writes the config file at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    dry_run: bool,
    verbose: bool,
}

impl ConfigStore {
    /// Store at `<home>/.stack/config`.
    pub fn locate(dry_run: bool, verbose: bool) -> StackResult<Self> {
        let home = dirs::home_dir().ok_or(StackError::NoHomeDir)?;
        Ok(Self::at(
            home.join(CONFIG_DIR).join(CONFIG_FILE_NAME),
            dry_run,
            verbose,
        ))
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>, dry_run: bool, verbose: bool) -> Self {
        Self {
            path: path.into(),
            dry_run,
            verbose,
        }
    }

    /// Resolved config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the config, offering to create it when the file is missing.
    ///
    /// Declining creation yields [`StackError::ConfigDeclined`]. A file that
    /// exists but does not parse yields [`StackError::CorruptConfig`].
    pub fn get_config<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> StackResult<Loaded> {
        if self.path.exists() {
            return self.load().map(Loaded::Existing);
        }

        writeln!(prompter.output(), "❗  Stack CONFIG NOT FOUND")?;
        if !prompter.confirm("⚙  Want to Create one now?")? {
            return Err(StackError::ConfigDeclined.into());
        }

        if let Some(dir) = self.path.parent() {
            self.create_dir(dir)?;
        }

        let mut config = Config::default();
        match self.build_config(prompter, &mut config)? {
            BuildOutcome::Saved => Ok(Loaded::Created(config)),
            BuildOutcome::Discarded => Ok(Loaded::Unsaved(config)),
        }
    }

    /// Read and parse the file.
    pub fn load(&self) -> StackResult<Config> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Error Reading Config File: {}", self.path.display()))?;
        let config = serde_json::from_str(&raw).map_err(|source| StackError::CorruptConfig {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    /// Prompt for every field, then ask whether to persist.
    pub fn build_config<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
        config: &mut Config,
    ) -> StackResult<BuildOutcome> {
        writeln!(prompter.output(), "📝  Writing {}", self.path.display())?;
        prompter.set_from_input(&mut config.fname, "\nFirst Name: ")?;
        prompter.set_from_input(&mut config.lname, " Last Name: ")?;
        prompter.set_from_input(&mut config.email, "     Email: ")?;

        if prompter.confirm("Save Configuration File?")? {
            self.save_config(config)?;
            if self.verbose {
                writeln!(prompter.output(), "\n✨  Configuration File Saved Successfully")?;
            }
            writeln!(prompter.output(), "\n✨  Configuration File Saved")?;
            Ok(BuildOutcome::Saved)
        } else {
            writeln!(prompter.output(), "\n🚫  Configuration File Not Saved")?;
            Ok(BuildOutcome::Discarded)
        }
    }

    /// Overwrite the file with `config`. A no-op under dry run.
    pub fn save_config(&self, config: &Config) -> StackResult<()> {
        let data = serde_json::to_string(config).context("Error Parsing Json")?;
        if self.dry_run {
            tracing::info!(path = %self.path.display(), "dry run, config not written");
            return Ok(());
        }
        fs::write(&self.path, data)
            .with_context(|| format!("Error Saving Config File: {}", self.path.display()))?;
        set_mode(&self.path, 0o644)
            .with_context(|| format!("Error Saving Config File: {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Print every field.
    pub fn list_config(&self, config: &Config, out: &mut impl Write) -> StackResult<()> {
        StackInfo::show_config(config, out)
    }

    fn create_dir(&self, dir: &Path) -> StackResult<()> {
        if self.dry_run {
            tracing::info!(dir = %dir.display(), "dry run, config directory not created");
            return Ok(());
        }
        create_private_dir(dir)
            .with_context(|| format!("Error Creating Config Directory: {}", dir.display()))?;
        Ok(())
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
