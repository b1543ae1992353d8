// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Performance and workload insight commands

use anyhow::{Context, Result};
use colored::*;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{format_duration, resolve_record_files};
use crate::analytics::{analyze_performance, distribute_workload, WorkloadTier};
use crate::cli::{DataArgs, OutputFormat};
use crate::config::OpsdeskConfig;
use crate::models::{Agent, Interaction};
use crate::storage::{load_agents, load_interactions};

/// Print team averages, top performer, needs-support, and trend chips
pub fn performance_summary(data: &DataArgs, format: OutputFormat) -> Result<()> {
    let (interactions, agents) = load_records(data)?;
    let report = analyze_performance(&interactions, &agents);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{} Performance Summary", "[*]".blue());
    println!("{}", "=".repeat(70));
    println!(
        "Avg Interactions: {} | Avg Duration: {} | Active Agents: {}",
        report.team_average.interactions.to_string().green(),
        format_duration(report.team_average.avg_length_seconds).cyan(),
        report.active_agent_count.to_string().yellow()
    );

    if let Some(top) = &report.top_performer {
        println!(
            "\n{} Top Performer: {} ({} interactions, {} avg)",
            "[+]".green(),
            top.name.bold(),
            top.interaction_count,
            format_duration(top.average_length_seconds)
        );
    }

    if let Some(support) = &report.needs_support {
        println!(
            "{} Needs Support: {} ({} interactions, {} avg)",
            "[!]".yellow(),
            support.name.bold(),
            support.interaction_count,
            format_duration(support.average_length_seconds)
        );
    }

    println!(
        "\nTrends: {} improving, {} declining {}",
        report.trends.improving.to_string().green(),
        report.trends.declining.to_string().red(),
        "(illustrative, not measured)".dimmed()
    );

    match (&report.needs_support, &report.top_performer) {
        (Some(support), Some(top)) if support.agent_id != top.agent_id => {
            println!(
                "{} Consider pairing {} with {} for mentoring",
                "[*]".blue(),
                support.name,
                top.name
            );
        }
        _ => {
            println!(
                "{} Team performance is strong across all agents",
                "[*]".blue()
            );
        }
    }

    Ok(())
}

#[derive(Tabled)]
struct WorkloadRow {
    #[tabled(rename = "Agent")]
    agent: String,
    #[tabled(rename = "Interactions")]
    interactions: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Workload")]
    workload: String,
}

/// Print the top-8 workload distribution with capacity tiers
pub fn workload_distribution(data: &DataArgs, format: OutputFormat) -> Result<()> {
    let (interactions, agents) = load_records(data)?;
    let report = distribute_workload(&interactions, &agents);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{} Agent Workload Distribution", "[*]".blue());
    println!("{}", "=".repeat(70));
    println!(
        "{} Overloaded | {} Balanced | {} Underutilized",
        report.tier_counts.overloaded.to_string().red(),
        report.tier_counts.balanced.to_string().yellow(),
        report.tier_counts.underutilized.to_string().green()
    );

    if report.entries.is_empty() {
        println!("\n{} No attributable interactions found", "[!]".yellow());
        return Ok(());
    }

    let rows: Vec<WorkloadRow> = report
        .entries
        .iter()
        .map(|entry| WorkloadRow {
            agent: entry.agent_name.clone(),
            interactions: entry.interaction_count,
            share: format!("{:.1}%", entry.percentage_of_total),
            workload: tier_label(entry.tier),
        })
        .collect();

    let table = Table::new(rows)
        .with(TableStyle::ascii_rounded())
        .to_string();
    println!("{}", table);

    if report.tier_counts.overloaded > 0 {
        println!(
            "{} Consider redistributing work from {} overloaded agent(s)",
            "[*]".blue(),
            report.tier_counts.overloaded
        );
    } else if report.tier_counts.underutilized > 0 {
        println!(
            "{} {} agent(s) have capacity for additional interactions",
            "[*]".blue(),
            report.tier_counts.underutilized
        );
    } else {
        println!("{} Workload is well distributed across the team", "[*]".blue());
    }

    Ok(())
}

fn tier_label(tier: WorkloadTier) -> String {
    match tier {
        WorkloadTier::High => "high".red().to_string(),
        WorkloadTier::Medium => "medium".yellow().to_string(),
        WorkloadTier::Low => "low".green().to_string(),
    }
}

fn load_records(data: &DataArgs) -> Result<(Vec<Interaction>, Vec<Agent>)> {
    let config = OpsdeskConfig::load().context("Failed to load config")?;
    let (interactions_file, agents_file) = resolve_record_files(data, &config)?;
    let interactions = load_interactions(&interactions_file)?;
    let agents = load_agents(&agents_file)?;
    Ok((interactions, agents))
}
