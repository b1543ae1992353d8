//! Tests for the report query engine
//!
//! Covers the fixed filter -> sort -> paginate pipeline and the
//! pre-pagination statistics.

use opsdesk::analytics::{
    query_daily_summaries, AgentDailySummary, PageRequest, ReportFilter, ReportSort,
    SortDirection, SortField,
};

fn row(date: &str, agent_id: i64, name: &str, total: usize, avg: i64) -> AgentDailySummary {
    AgentDailySummary {
        date: date.to_string(),
        agent_id,
        agent_name: name.to_string(),
        total_interactions: total,
        average_length_seconds: avg,
    }
}

fn sample_rows() -> Vec<AgentDailySummary> {
    vec![
        row("2024-05-03", 1, "Alice", 4, 120),
        row("2024-05-01", 2, "Bob", 7, 45),
        row("2024-05-02", 1, "Alice", 2, 90),
        row("2024-05-02", 3, "Carolina", 7, 200),
    ]
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_filters_apply_in_sequence() {
    // search keeps the names containing "li" (Alice twice, Carolina once),
    // then the date bound drops everything before 2024-05-03
    let filter = ReportFilter {
        search_term: "li".to_string(),
        selected_agent: None,
        min_date: "2024-05-03".to_string(),
    };
    let page = query_daily_summaries(
        &sample_rows(),
        &filter,
        &ReportSort::default(),
        &PageRequest::default(),
    );
    let names: Vec<&str> = page.rows.iter().map(|r| r.agent_name.as_str()).collect();
    assert_eq!(names, vec!["Alice"]);
    assert_eq!(page.rows[0].date, "2024-05-03");
}

#[test]
fn test_selected_agent_is_exact_not_substring() {
    let filter = ReportFilter {
        selected_agent: Some("Alice".to_string()),
        ..Default::default()
    };
    let page = query_daily_summaries(
        &sample_rows(),
        &filter,
        &ReportSort::default(),
        &PageRequest::default(),
    );
    assert_eq!(page.rows.len(), 2);
    assert!(page.rows.iter().all(|r| r.agent_name == "Alice"));
}

#[test]
fn test_all_pass_filter_round_trips_the_multiset() {
    let rows = sample_rows();
    let page = query_daily_summaries(
        &rows,
        &ReportFilter::default(),
        &ReportSort::default(),
        &PageRequest {
            page: 1,
            page_size: rows.len(),
        },
    );

    assert_eq!(page.rows.len(), rows.len());
    let mut expected: Vec<String> = rows.iter().map(|r| format!("{r:?}")).collect();
    let mut actual: Vec<String> = page.rows.iter().map(|r| format!("{r:?}")).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_date_desc_is_the_default_sort() {
    let page = query_daily_summaries(
        &sample_rows(),
        &ReportFilter::default(),
        &ReportSort::default(),
        &PageRequest::default(),
    );
    let dates: Vec<&str> = page.rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        vec!["2024-05-03", "2024-05-02", "2024-05-02", "2024-05-01"]
    );
}

#[test]
fn test_ties_keep_pre_sort_order() {
    // Bob and Carolina tie on total_interactions; Bob comes first in the
    // input and must stay first
    let page = query_daily_summaries(
        &sample_rows(),
        &ReportFilter::default(),
        &ReportSort {
            field: SortField::TotalInteractions,
            direction: SortDirection::Desc,
        },
        &PageRequest::default(),
    );
    assert_eq!(page.rows[0].agent_name, "Bob");
    assert_eq!(page.rows[1].agent_name, "Carolina");
}

#[test]
fn test_desc_is_the_reverse_of_asc() {
    let sort_asc = ReportSort {
        field: SortField::AverageLengthSeconds,
        direction: SortDirection::Asc,
    };
    let sort_desc = ReportSort {
        field: SortField::AverageLengthSeconds,
        direction: SortDirection::Desc,
    };
    let asc = query_daily_summaries(
        &sample_rows(),
        &ReportFilter::default(),
        &sort_asc,
        &PageRequest::default(),
    );
    let desc = query_daily_summaries(
        &sample_rows(),
        &ReportFilter::default(),
        &sort_desc,
        &PageRequest::default(),
    );

    let asc_avgs: Vec<i64> = asc.rows.iter().map(|r| r.average_length_seconds).collect();
    let mut desc_avgs: Vec<i64> = desc.rows.iter().map(|r| r.average_length_seconds).collect();
    desc_avgs.reverse();
    assert_eq!(asc_avgs, desc_avgs);
}

// ============================================================================
// Pagination and Statistics
// ============================================================================

#[test]
fn test_out_of_range_page_is_empty_but_stats_cover_filtered_set() {
    let rows: Vec<AgentDailySummary> = (0..5i64)
        .map(|i| row("2024-05-01", i, &format!("A{i}"), 1, 60))
        .collect();
    let page = query_daily_summaries(
        &rows,
        &ReportFilter::default(),
        &ReportSort::default(),
        &PageRequest {
            page: 3,
            page_size: 10,
        },
    );
    assert!(page.rows.is_empty());
    assert_eq!(page.total_rows, 5);
    assert_eq!(page.stats.agent_count, 5);
    assert_eq!(page.stats.total_interactions, 5);
    assert_eq!(page.stats.avg_interactions_per_agent, 1);
    assert_eq!(page.stats.avg_length_seconds, 60);
}

#[test]
fn test_stats_average_rounds() {
    let rows = vec![
        row("2024-05-01", 1, "Alice", 1, 100),
        row("2024-05-02", 1, "Alice", 2, 101),
    ];
    let page = query_daily_summaries(
        &rows,
        &ReportFilter::default(),
        &ReportSort::default(),
        &PageRequest::default(),
    );
    // mean of per-row averages: 100.5 -> 101
    assert_eq!(page.stats.avg_length_seconds, 101);
    // 3 interactions over 1 agent
    assert_eq!(page.stats.avg_interactions_per_agent, 3);
}

#[test]
fn test_stats_are_zero_on_empty_filter_result() {
    let filter = ReportFilter {
        search_term: "nobody".to_string(),
        ..Default::default()
    };
    let page = query_daily_summaries(
        &sample_rows(),
        &filter,
        &ReportSort::default(),
        &PageRequest::default(),
    );
    assert!(page.rows.is_empty());
    assert_eq!(page.stats.agent_count, 0);
    assert_eq!(page.stats.avg_interactions_per_agent, 0);
    assert_eq!(page.stats.avg_length_seconds, 0);
}
