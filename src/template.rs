// src/template.rs
//! CloudFormation templates read from disk.

#![deny(missing_docs)]

use crate::error::StackResult;
use anyhow::{Context, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A JSON template ready to be sent to CloudFormation.
#[derive(Debug)]
pub struct Template {
    path: PathBuf,
    body: String,
    doc: Value,
}

impl Template {
    /// Read and parse the template at `path`.
    pub fn load(path: &Path) -> StackResult<Template> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("Error Reading Template File: {}", path.display()))?;
        let doc: Value = serde_json::from_str(&body)
            .with_context(|| format!("Error Parsing Template File: {}", path.display()))?;
        if !doc.is_object() {
            bail!(
                "template must be a JSON object: {}",
                path.display()
            );
        }
        Ok(Template {
            path: path.to_path_buf(),
            body,
            doc,
        })
    }

    /// Where the template was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw template text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `AWSTemplateFormatVersion`, empty when the template omits it.
    pub fn format_version(&self) -> &str {
        self.doc
            .get("AWSTemplateFormatVersion")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Number of entries under `Resources`.
    pub fn resource_count(&self) -> usize {
        self.doc
            .get("Resources")
            .and_then(Value::as_object)
            .map_or(0, |r| r.len())
    }
}
