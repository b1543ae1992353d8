// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Agents daily report command

use anyhow::{Context, Result};
use chrono::Utc;
use colored::*;
use std::path::Path;
use tabled::{settings::Style as TableStyle, Table, Tabled};

use super::{format_duration, resolve_record_files};
use crate::analytics::{
    compute_daily_summaries, daily_report_csv, query_daily_summaries, AgentDailySummary,
    PageRequest, ReportFilter, ReportSort,
};
use crate::cli::{DataArgs, OutputFormat, QueryArgs};
use crate::config::OpsdeskConfig;
use crate::storage::{load_agents, load_interactions};

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Agent")]
    agent: String,
    #[tabled(rename = "Total Interactions")]
    total_interactions: usize,
    #[tabled(rename = "Average Length")]
    average_length: String,
}

/// Print the filtered, sorted, paginated daily report
pub fn daily_report(
    data: &DataArgs,
    query: &QueryArgs,
    page: usize,
    page_size: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let config = OpsdeskConfig::load().context("Failed to load config")?;
    let page_size = page_size.unwrap_or(config.rows_per_page).max(1);

    let summaries = load_summaries(data, &config)?;
    let result = query_daily_summaries(
        &summaries,
        &report_filter(query),
        &report_sort(query),
        &PageRequest { page, page_size },
    );

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\n{} Agents Daily Report", "[*]".blue());
    println!("{}", "=".repeat(70));
    println!(
        "{} agent(s) | {} total interaction(s) | {} avg length | {} result(s)",
        result.stats.agent_count.to_string().cyan(),
        result.stats.total_interactions.to_string().green(),
        format_duration(result.stats.avg_length_seconds).yellow(),
        result.total_rows
    );

    if result.rows.is_empty() {
        println!("\n{} No rows match the current filters", "[!]".yellow());
        return Ok(());
    }

    let rows: Vec<ReportRow> = result
        .rows
        .iter()
        .map(|row| ReportRow {
            date: row.date.clone(),
            agent: row.agent_name.clone(),
            total_interactions: row.total_interactions,
            average_length: format_duration(row.average_length_seconds),
        })
        .collect();

    let table = Table::new(rows)
        .with(TableStyle::ascii_rounded())
        .to_string();
    println!("{}", table);

    let total_pages = result.total_rows.div_ceil(page_size).max(1);
    println!("Page {} of {}", page.max(1), total_pages);

    Ok(())
}

/// Export the filtered, sorted daily report (all pages) as CSV
pub fn export_report(data: &DataArgs, query: &QueryArgs, output: &Path) -> Result<()> {
    let config = OpsdeskConfig::load().context("Failed to load config")?;
    let summaries = load_summaries(data, &config)?;

    // Export covers the whole filtered set, not a single page
    let result = query_daily_summaries(
        &summaries,
        &report_filter(query),
        &report_sort(query),
        &PageRequest {
            page: 1,
            page_size: summaries.len().max(1),
        },
    );

    let csv = daily_report_csv(&result.rows);
    std::fs::write(output, csv)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Exported {} row(s) to {}",
        "[OK]".green(),
        result.rows.len(),
        output.display()
    );

    Ok(())
}

fn load_summaries(data: &DataArgs, config: &OpsdeskConfig) -> Result<Vec<AgentDailySummary>> {
    let (interactions_file, agents_file) = resolve_record_files(data, config)?;
    let interactions = load_interactions(&interactions_file)?;
    let agents = load_agents(&agents_file)?;
    Ok(compute_daily_summaries(
        &interactions,
        &agents,
        Utc::now().date_naive(),
    ))
}

fn report_filter(query: &QueryArgs) -> ReportFilter {
    ReportFilter {
        search_term: query.search.clone(),
        // "all" mirrors the dashboard's all-agents option
        selected_agent: query
            .agent
            .clone()
            .filter(|agent| agent != "all"),
        min_date: query.from_date.clone(),
    }
}

fn report_sort(query: &QueryArgs) -> ReportSort {
    ReportSort {
        field: query.sort_by,
        direction: query.direction,
    }
}
