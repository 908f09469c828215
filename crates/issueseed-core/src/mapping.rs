// SPDX-License-Identifier: Apache-2.0

//! Student-to-GitHub-login mapping.
//!
//! The mapping file is YAML with a top-level `mappings` section:
//!
//! ```yaml
//! mappings:
//!   "42":
//!     login: octocat
//!     name: Mona
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::SeederError;

#[derive(Debug, Default, Deserialize)]
struct MappingFile {
    #[serde(default)]
    mappings: Option<BTreeMap<String, Value>>,
}

/// Read-only lookup from student identifier to an arbitrary record.
#[derive(Debug, Clone, Default)]
pub struct StudentMapping {
    entries: BTreeMap<String, Value>,
}

impl StudentMapping {
    /// Builds a mapping from in-memory entries.
    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, Value>) -> Self {
        Self { entries }
    }

    /// Parses a YAML document; an empty document yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns the parser message if the document is not valid YAML or the
    /// `mappings` section is not a map.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let file: Option<MappingFile> =
            serde_saphyr::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self {
            entries: file.and_then(|f| f.mappings).unwrap_or_default(),
        })
    }

    /// Number of mapped students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no students are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assignees for a student: the `login` of its record, or none.
    #[must_use]
    pub fn assignees_for(&self, student_id: &str) -> Vec<String> {
        self.entries
            .get(student_id)
            .and_then(|record| record.get("login"))
            .and_then(Value::as_str)
            .filter(|login| !login.is_empty())
            .map(|login| vec![login.to_string()])
            .unwrap_or_default()
    }
}

/// Loads the mapping file, returning an empty mapping if it does not exist.
///
/// # Errors
///
/// Returns [`SeederError::Mapping`] if the file exists but cannot be read or
/// parsed.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_mapping(path: &Path) -> crate::Result<StudentMapping> {
    if !path.exists() {
        info!("Student mapping not found, continuing without assignees");
        return Ok(StudentMapping::default());
    }

    let mapping_error = |message: String| SeederError::Mapping {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| mapping_error(e.to_string()))?;
    let mapping = StudentMapping::from_yaml(&content).map_err(mapping_error)?;

    debug!(students = mapping.len(), "Loaded student mapping");
    Ok(mapping)
}
