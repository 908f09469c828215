// SPDX-License-Identifier: Apache-2.0

//! Text rendering of the seeding summary.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use console::style;
use issueseed_core::RowOutcome;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::SeedResult;

use super::Renderable;

impl Renderable for SeedResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let report = &self.report;

        if !ctx.quiet && !report.issues.is_empty() {
            writeln!(w)?;
            writeln!(w, "{}", outcome_table(self))?;
        }

        writeln!(w)?;
        let heading = if self.dry_run {
            "Dry Run Summary"
        } else {
            "Seeding Summary"
        };
        writeln!(w, "{}", style(heading).bold().green())?;
        writeln!(w, "{}", style("=".repeat(heading.len())).dim())?;
        writeln!(w, "  Repository: {}", self.repository)?;
        if self.dry_run {
            writeln!(w, "  Previewed:  {}", style(report.previewed).cyan())?;
        } else {
            writeln!(w, "  Created:    {}", style(report.created).green())?;
            writeln!(w, "  Failed:     {}", style(report.failed).red())?;
            if report.label_warnings > 0 {
                writeln!(
                    w,
                    "  Label warnings: {}",
                    style(report.label_warnings).yellow()
                )?;
            }
        }
        writeln!(w, "  Total:      {}", report.total())?;
        writeln!(w)?;
        Ok(())
    }
}

fn outcome_table(result: &SeedResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Issue", "Assignees", "Result"]);

    for (idx, entry) in result.report.issues.iter().enumerate() {
        let assignees = if entry.issue.assignees.is_empty() {
            "-".to_string()
        } else {
            entry.issue.assignees.join(", ")
        };
        let outcome = match &entry.outcome {
            RowOutcome::Created { number, .. } => format!("created #{number}"),
            RowOutcome::Failed { error } => format!("failed: {error}"),
            RowOutcome::DryRun => "preview".to_string(),
        };
        table.add_row(vec![
            (idx + 1).to_string(),
            entry.issue.title.clone(),
            assignees,
            outcome,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use issueseed_core::{IssueDraft, IssueReport, SeedReport};

    use super::*;
    use crate::cli::OutputFormat;

    fn draft(title: &str, assignees: &[&str]) -> IssueDraft {
        IssueDraft {
            title: title.to_string(),
            body: String::new(),
            labels: vec!["tarefa".to_string()],
            assignees: assignees.iter().map(ToString::to_string).collect(),
        }
    }

    fn render_to_string(result: &SeedResult, quiet: bool) -> String {
        console::set_colors_enabled(false);
        let ctx = OutputContext::from_cli(OutputFormat::Text, quiet, false);
        let mut buf = Vec::new();
        result.render_text(&mut buf, &ctx).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> SeedResult {
        SeedResult {
            repository: "turma/web".to_string(),
            dry_run: false,
            report: SeedReport {
                created: 1,
                failed: 1,
                previewed: 0,
                label_warnings: 0,
                issues: vec![
                    IssueReport {
                        issue: draft("[Semana 1] Setup (42 - Squad A - SEMIA)", &["octocat"]),
                        outcome: RowOutcome::Created {
                            number: 7,
                            url: "https://github.com/turma/web/issues/7".to_string(),
                        },
                        label_warnings: Vec::new(),
                    },
                    IssueReport {
                        issue: draft("[Semana 1] Setup (43 - Squad A - SEMIA)", &[]),
                        outcome: RowOutcome::Failed {
                            error: "Validation failed".to_string(),
                        },
                        label_warnings: Vec::new(),
                    },
                ],
            },
        }
    }

    #[test]
    fn text_summary_lists_each_row() {
        let text = render_to_string(&sample(), false);

        assert!(text.contains("Seeding Summary"));
        assert!(text.contains("created #7"));
        assert!(text.contains("octocat"));
        assert!(text.contains("failed: Validation failed"));
        assert!(text.contains("Total:      2"));
    }

    #[test]
    fn quiet_summary_skips_the_table() {
        let text = render_to_string(&sample(), true);

        assert!(!text.contains("created #7"));
        assert!(text.contains("Created:    1"));
    }

    #[test]
    fn json_flattens_the_report() {
        let value = serde_json::to_value(sample()).unwrap();

        assert_eq!(value["repository"], "turma/web");
        assert_eq!(value["created"], 1);
        assert_eq!(value["issues"][0]["outcome"]["status"], "created");
        assert_eq!(value["issues"][1]["outcome"]["status"], "failed");
    }
}
