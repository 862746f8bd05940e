use comfy_table::{Cell, Table};

use super::{Report, short_id};
use crate::pipeline::aggregate::StatEntry;

pub fn render(report: &Report) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!(
        "=== Survey Responses ({}) ===\n\n",
        report.generated_at
    ));

    if let Some(err) = &report.load_error {
        output.push_str(&format!("!! Could not load responses: {err}\n\n"));
    }

    // Summary
    output.push_str("--- Summary ---\n");
    output.push_str(&format!(
        "Responses:            {}\n",
        report.summary.total_responses
    ));
    output.push_str(&format!(
        "Matching filters:     {}\n",
        report.summary.filtered_responses
    ));
    output.push_str(&format!("Filters:              {}\n", report.filter_summary()));
    output.push_str(&format!(
        "Selected for delete:  {}\n",
        report.summary.selected
    ));

    // Stats
    if !report.topic_stats.is_empty() {
        output.push_str(&format!(
            "\n--- Topics ({} mentions) ---\n",
            report.summary.topic_mentions
        ));
        output.push_str(&stats_table(&report.topic_stats).to_string());
        output.push('\n');
    }
    if !report.format_stats.is_empty() {
        output.push_str("\n--- Podcast Formats ---\n");
        output.push_str(&stats_table(&report.format_stats).to_string());
        output.push('\n');
    }

    // Current page
    output.push_str("\n--- Responses ---\n");
    if report.rows.is_empty() {
        output.push_str("No responses found.\n");
    } else {
        let mut table = Table::new();
        table.set_header(vec![
            "", "ID", "Name", "Topics", "Formats", "Guest", "Submitted",
        ]);
        for row in &report.rows {
            let r = &row.record;
            table.add_row(vec![
                Cell::new(if row.selected { "x" } else { "" }),
                Cell::new(short_id(&r.id)),
                Cell::new(r.display_name()),
                Cell::new(r.topics.join(", ")),
                Cell::new(r.podcast_formats.join(", ")),
                Cell::new(r.suggested_guest.as_deref().unwrap_or("-")),
                Cell::new(&r.created_at),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "Page {} of {}\n",
        report.summary.current_page, report.summary.total_pages
    ));

    Ok(output)
}

fn stats_table(entries: &[StatEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Label", "Count"]);
    for e in entries {
        table.add_row(vec![Cell::new(&e.label), Cell::new(e.count)]);
    }
    table
}
