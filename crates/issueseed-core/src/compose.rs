// SPDX-License-Identifier: Apache-2.0

//! Issue composition.
//!
//! Turns a [`TaskRow`] into an [`IssueDraft`]: title, markdown body with
//! nine fixed sections, five labels, and the assignee list.

use std::fmt::Write;

use serde::Serialize;

use crate::mapping::StudentMapping;
use crate::task::TaskRow;
use crate::task::TaskType;

/// Marker label attached to every seeded issue.
pub const TASK_LABEL: &str = "tarefa";

/// Default description.
pub const DEFAULT_DESCRIPTION: &str = "Descreva brevemente o objetivo desta tarefa.";
/// Default deliverables.
pub const DEFAULT_DELIVERABLES: &str =
    "- Código funcional\n- Prints ou GIF breve\n- README atualizado (se aplicável)";
/// Default acceptance criteria.
pub const DEFAULT_ACCEPTANCE: &str = "- Passar nos checks: ESLint, Prettier e html-validate\n\
    - Atender aos requisitos funcionais\n\
    - Seguir padrão de branch e PR";
/// Default suggested files.
pub const DEFAULT_FILES: &str = "src/index.html, src/styles.css, src/main.js";
/// Default verification command.
pub const DEFAULT_COMMAND: &str = "npm run check";
/// Default branch name pattern.
pub const DEFAULT_BRANCH: &str = "feat/aluno-<IdAluno>-<slug>-<COMIA|SEMIA>";
/// Default reviewer.
pub const DEFAULT_REVIEWER: &str = "@wagnerjohnatan";
/// Default observations.
pub const DEFAULT_OBSERVATIONS: &str = "Preencha Id Aluno, Squad e IA no PR template.";

/// A fully formed issue-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueDraft {
    /// Issue title.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Labels, always five.
    pub labels: Vec<String>,
    /// Zero or one GitHub logins.
    pub assignees: Vec<String>,
}

/// Composes the issue for one row.
#[must_use]
pub fn compose_issue(
    row: &TaskRow,
    default_type: TaskType,
    mapping: &StudentMapping,
) -> IssueDraft {
    let task_type = TaskType::resolve(row.task_type.as_deref(), default_type);

    IssueDraft {
        title: issue_title(row, task_type),
        body: issue_body(row, task_type),
        labels: issue_labels(row, task_type),
        assignees: mapping.assignees_for(&row.student_id),
    }
}

/// `[Semana <w>] <task> (<id> - Squad <s> - <type>)`
///
/// Also the default pull request title. Row values are inserted verbatim,
/// so braces inside a task name are never read as placeholders.
#[must_use]
pub fn issue_title(row: &TaskRow, task_type: TaskType) -> String {
    format!(
        "[Semana {}] {} ({} - Squad {} - {})",
        row.week, row.task, row.student_id, row.squad, task_type
    )
}

/// The five labels of a row, in fixed order.
#[must_use]
pub fn issue_labels(row: &TaskRow, task_type: TaskType) -> Vec<String> {
    vec![
        TASK_LABEL.to_string(),
        format!("Semana:{}", row.week),
        format!("SQUAD:{}", row.squad),
        format!("IdAluno:{}", row.student_id),
        format!("IA:{task_type}"),
    ]
}

/// Markdown body with every optional field resolved against its default.
#[must_use]
pub fn issue_body(row: &TaskRow, task_type: TaskType) -> String {
    let or_default = |value: &Option<String>, default: &str| {
        value.clone().unwrap_or_else(|| default.to_string())
    };

    let pr_title = row
        .pr_title
        .clone()
        .unwrap_or_else(|| issue_title(row, task_type));

    let sections = [
        (
            "Descrição",
            or_default(&row.description, DEFAULT_DESCRIPTION),
        ),
        (
            "Entregáveis",
            or_default(&row.deliverables, DEFAULT_DELIVERABLES),
        ),
        (
            "Critérios de Aceite",
            or_default(&row.acceptance_criteria, DEFAULT_ACCEPTANCE),
        ),
        (
            "Arquivos Sugeridos",
            or_default(&row.suggested_files, DEFAULT_FILES),
        ),
        (
            "Comando de Verificação",
            format!(
                "`{}`",
                or_default(&row.verification_command, DEFAULT_COMMAND)
            ),
        ),
        (
            "Branch Sugerida",
            format!("`{}`", or_default(&row.suggested_branch, DEFAULT_BRANCH)),
        ),
        ("Título do PR", pr_title),
        ("Revisor", or_default(&row.reviewer, DEFAULT_REVIEWER)),
        (
            "Observações",
            or_default(&row.observations, DEFAULT_OBSERVATIONS),
        ),
    ];

    let mut body = String::new();
    for (i, (header, value)) in sections.iter().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        let _ = writeln!(body, "**{header}**\n{value}");
    }
    body
}
