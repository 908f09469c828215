// SPDX-License-Identifier: Apache-2.0

//! Typed spreadsheet records.
//!
//! A [`TaskRow`] is one spreadsheet line with its four required columns
//! resolved to trimmed text and every optional column resolved to
//! `Option<String>` at load time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeederError;

/// Week column.
pub const COL_WEEK: &str = "Semana";
/// Student identifier column.
pub const COL_STUDENT_ID: &str = "Id Aluno";
/// Squad column.
pub const COL_SQUAD: &str = "SQUAD";
/// Task name column.
pub const COL_TASK: &str = "Tarefa";

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_WEEK, COL_STUDENT_ID, COL_SQUAD, COL_TASK];

/// Description column.
pub const COL_DESCRIPTION: &str = "Descrição";
/// Deliverables column.
pub const COL_DELIVERABLES: &str = "Entregáveis";
/// Acceptance criteria column.
pub const COL_ACCEPTANCE: &str = "Critérios de Aceite";
/// Suggested files column.
pub const COL_FILES: &str = "Arquivos Sugeridos";
/// Verification command column.
pub const COL_COMMAND: &str = "Comando de Verificação";
/// Suggested branch column.
pub const COL_BRANCH: &str = "Branch Sugerida";
/// Pull request title column.
pub const COL_PR_TITLE: &str = "Título do PR";
/// Reviewer column.
pub const COL_REVIEWER: &str = "Revisor";
/// Observations column.
pub const COL_OBSERVATIONS: &str = "Observações";
/// Task type column.
pub const COL_TASK_TYPE: &str = "IA";

/// Columns that are read when present and treated as empty otherwise.
pub const OPTIONAL_COLUMNS: [&str; 10] = [
    COL_DESCRIPTION,
    COL_DELIVERABLES,
    COL_ACCEPTANCE,
    COL_FILES,
    COL_COMMAND,
    COL_BRANCH,
    COL_PR_TITLE,
    COL_REVIEWER,
    COL_OBSERVATIONS,
    COL_TASK_TYPE,
];

/// Whether a task is expected to be solved with AI assistance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskType {
    /// AI-assisted task.
    ComIa,
    /// Task solved without AI assistance.
    #[default]
    SemIa,
}

impl TaskType {
    /// Canonical upper-case form used in labels and titles.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::ComIa => "COMIA",
            TaskType::SemIa => "SEMIA",
        }
    }

    /// Resolves a row's raw task type against the run default.
    ///
    /// Absent, empty, or unrecognised values fall back to `default`.
    #[must_use]
    pub fn resolve(raw: Option<&str>, default: TaskType) -> TaskType {
        raw.and_then(|value| value.parse().ok()).unwrap_or(default)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = SeederError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMIA" => Ok(TaskType::ComIa),
            "SEMIA" => Ok(TaskType::SemIa),
            _ => Err(SeederError::InvalidTaskType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TaskType {
    type Error = SeederError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskType> for String {
    fn from(value: TaskType) -> Self {
        value.as_str().to_string()
    }
}

/// One spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Week identifier.
    pub week: String,
    /// Student identifier.
    pub student_id: String,
    /// Squad identifier.
    pub squad: String,
    /// Task name.
    pub task: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Expected deliverables.
    pub deliverables: Option<String>,
    /// Acceptance criteria.
    pub acceptance_criteria: Option<String>,
    /// Files the student is expected to touch.
    pub suggested_files: Option<String>,
    /// Command that verifies the work.
    pub verification_command: Option<String>,
    /// Branch name to work on.
    pub suggested_branch: Option<String>,
    /// Title for the student's pull request.
    pub pr_title: Option<String>,
    /// Reviewer handle.
    pub reviewer: Option<String>,
    /// Extra notes.
    pub observations: Option<String>,
    /// Raw task type as written in the sheet.
    pub task_type: Option<String>,
}

impl TaskRow {
    /// Builds a row from a column lookup.
    ///
    /// `cell` returns the coerced text of a column, or `None` when the column
    /// is absent or the cell is empty. Required fields are trimmed.
    pub fn from_lookup<F>(mut cell: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |name: &str| cell(name).unwrap_or_default().trim().to_string();
        let week = required(COL_WEEK);
        let student_id = required(COL_STUDENT_ID);
        let squad = required(COL_SQUAD);
        let task = required(COL_TASK);

        let mut optional = |name: &str| cell(name).filter(|v| !v.trim().is_empty());
        Self {
            week,
            student_id,
            squad,
            task,
            description: optional(COL_DESCRIPTION),
            deliverables: optional(COL_DELIVERABLES),
            acceptance_criteria: optional(COL_ACCEPTANCE),
            suggested_files: optional(COL_FILES),
            verification_command: optional(COL_COMMAND),
            suggested_branch: optional(COL_BRANCH),
            pr_title: optional(COL_PR_TITLE),
            reviewer: optional(COL_REVIEWER),
            observations: optional(COL_OBSERVATIONS),
            task_type: optional(COL_TASK_TYPE),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn task_type_parses_case_insensitively() {
        assert_eq!("comia".parse::<TaskType>().unwrap(), TaskType::ComIa);
        assert_eq!(" SemIA ".parse::<TaskType>().unwrap(), TaskType::SemIa);
        assert!("talvez".parse::<TaskType>().is_err());
    }

    #[test]
    fn task_type_resolve_falls_back_to_default() {
        assert_eq!(TaskType::resolve(None, TaskType::ComIa), TaskType::ComIa);
        assert_eq!(
            TaskType::resolve(Some(""), TaskType::SemIa),
            TaskType::SemIa
        );
        assert_eq!(
            TaskType::resolve(Some("outro"), TaskType::ComIa),
            TaskType::ComIa
        );
        assert_eq!(
            TaskType::resolve(Some("comia"), TaskType::SemIa),
            TaskType::ComIa
        );
    }

    #[test]
    fn task_type_display_is_upper_case() {
        assert_eq!(TaskType::ComIa.to_string(), "COMIA");
        assert_eq!(TaskType::SemIa.to_string(), "SEMIA");
    }

    #[test]
    fn from_lookup_trims_required_and_drops_empty_optional() {
        let cells: HashMap<&str, &str> = HashMap::from([
            (COL_WEEK, " 2 "),
            (COL_STUDENT_ID, "42"),
            (COL_SQUAD, "B "),
            (COL_TASK, "  Layout"),
            (COL_DESCRIPTION, "   "),
            (COL_DELIVERABLES, ""),
            (COL_OBSERVATIONS, "- um\n- dois"),
            (COL_REVIEWER, "@mentor"),
        ]);

        let row = TaskRow::from_lookup(|name| cells.get(name).map(ToString::to_string));

        assert_eq!(row.week, "2");
        assert_eq!(row.squad, "B");
        assert_eq!(row.task, "Layout");
        assert_eq!(row.description, None);
        assert_eq!(row.deliverables, None);
        assert_eq!(row.observations.as_deref(), Some("- um\n- dois"));
        assert_eq!(row.reviewer.as_deref(), Some("@mentor"));
        assert_eq!(row.task_type, None);
    }
}
