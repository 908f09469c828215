// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the issueseed CLI.

pub mod types;

use anyhow::Result;
use console::style;
use issueseed_core::github::client::GitHubTracker;
use issueseed_core::{
    AppConfig, SeedEvent, SeedOptions, StudentMapping, load_mapping, parse_owner_repo, read_tasks,
    seed_issues,
};
use secrecy::SecretString;
use tracing::debug;

use self::types::SeedResult;
use crate::cli::{Cli, OutputContext};
use crate::output;

/// Runs one seeding batch and renders its summary.
///
/// Setup failures (bad repository, unreadable inputs) are returned before
/// any GitHub call is made. Failed rows only show up in the summary.
pub async fn run(cli: Cli, ctx: OutputContext, config: &AppConfig) -> Result<()> {
    let (owner, repo) = parse_owner_repo(&cli.repo)?;

    let mapping = match &cli.students {
        Some(path) => load_mapping(path)?,
        None => StudentMapping::default(),
    };
    debug!(entries = mapping.len(), "Student mapping ready");

    let rows = read_tasks(&cli.excel, cli.sheet.as_deref())?;
    debug!(rows = rows.len(), "Spreadsheet loaded");

    let default_type = cli.ia_default.unwrap_or(config.defaults.task_type);
    let options = SeedOptions::builder()
        .default_type(default_type)
        .label_color(config.labels.color.clone())
        .dry_run(cli.dry_run)
        .build();

    let token = SecretString::from(cli.token);
    let tracker = GitHubTracker::new(&token, &owner, &repo)?;

    let report = seed_issues(&tracker, &rows, &mapping, &options, |event| {
        print_event(&event, &ctx, cli.dry_run);
    })
    .await;

    let result = SeedResult {
        repository: format!("{owner}/{repo}"),
        dry_run: cli.dry_run,
        report,
    };
    output::render(&result, &ctx)
}

/// Progress goes to stdout, warnings and failures to stderr.
fn print_event(event: &SeedEvent<'_>, ctx: &OutputContext, dry_run: bool) {
    match event {
        SeedEvent::Submitting { draft, .. } => {
            if !ctx.shows_progress() {
                return;
            }
            let action = if dry_run {
                "[dry run] Would create issue"
            } else {
                "Creating issue"
            };
            println!(
                "{} {action}: {} | assignees={:?} | labels={:?}",
                style("→").cyan(),
                draft.title,
                draft.assignees,
                draft.labels
            );
            if ctx.verbose {
                for line in draft.body.lines() {
                    println!("    {line}");
                }
            }
        }
        SeedEvent::Created { issue, .. } => {
            if ctx.shows_progress() {
                println!("  {} #{} {}", style("✓").green(), issue.number, issue.url);
            }
        }
        SeedEvent::LabelFailed { label, error } => {
            eprintln!(
                "{} Could not ensure label '{label}': {error}",
                style("Warning:").yellow().bold()
            );
        }
        SeedEvent::Failed { draft, error } => {
            eprintln!(
                "{} Failed to create issue '{}': {error}",
                style("Error:").red().bold(),
                draft.title
            );
        }
    }
}
