use super::{Report, short_id};
use crate::pipeline::aggregate::StatEntry;

pub fn render(report: &Report) -> anyhow::Result<String> {
    let p = &report.palette;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>Survey Responses</title>\n");
    html.push_str("<style>\n");
    html.push_str(&format!(
        "  body {{ font-family: system-ui, sans-serif; max-width: 1080px; margin: 2rem auto; padding: 0 1rem; background: {}; color: {}; }}\n",
        p.background, p.text
    ));
    html.push_str(&format!(
        "  h1 {{ border-bottom: 2px solid {}; padding-bottom: 0.5rem; }}\n",
        p.accent
    ));
    html.push_str("  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }\n");
    html.push_str(&format!(
        "  th, td {{ border: 1px solid {}; padding: 0.5rem; text-align: left; }}\n",
        p.border
    ));
    html.push_str(&format!(
        "  th {{ background: {}; font-weight: 600; }}\n",
        p.surface
    ));
    html.push_str("  .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem; margin: 1rem 0; }\n");
    html.push_str(&format!(
        "  .stat {{ background: {}; padding: 1rem; border-radius: 4px; }}\n",
        p.surface
    ));
    html.push_str("  .stat .value { font-size: 1.5rem; font-weight: 700; }\n");
    html.push_str(&format!(
        "  .stat .label, .muted {{ color: {}; font-size: 0.875rem; }}\n",
        p.muted
    ));
    html.push_str("  .error { border: 1px solid #dc2626; color: #dc2626; padding: 1rem; border-radius: 4px; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<h1>Survey Responses</h1>\n<p class=\"muted\">Generated: {} &middot; Filters: {}</p>\n",
        escape_html(&report.generated_at),
        escape_html(&report.filter_summary()),
    ));

    if let Some(err) = &report.load_error {
        html.push_str(&format!(
            "<div class=\"error\">Could not load responses: {}</div>\n",
            escape_html(err)
        ));
    }

    // Summary cards
    html.push_str("<div class=\"summary\">\n");
    write_stat(&mut html, "Responses", report.summary.total_responses);
    write_stat(&mut html, "Matching Filters", report.summary.filtered_responses);
    write_stat(&mut html, "Selected", report.summary.selected);
    html.push_str("</div>\n");

    write_stats_table(&mut html, "Topics", &report.topic_stats);
    write_stats_table(&mut html, "Podcast Formats", &report.format_stats);

    html.push_str("<h2>Responses</h2>\n");
    if report.rows.is_empty() {
        html.push_str("<p>No responses found.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th></th><th>ID</th><th>Name</th><th>Topics</th><th>Formats</th><th>Description</th><th>Guest</th><th>Submitted</th></tr></thead>\n<tbody>\n");
        for row in &report.rows {
            let r = &row.record;
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                if row.selected { "&#10003;" } else { "" },
                escape_html(short_id(&r.id)),
                escape_html(r.display_name()),
                escape_html(&r.topics.join(", ")),
                escape_html(&r.podcast_formats.join(", ")),
                escape_html(&r.description),
                escape_html(r.suggested_guest.as_deref().unwrap_or("-")),
                escape_html(&r.created_at),
            ));
        }
        html.push_str("</tbody></table>\n");
    }

    html.push_str(&format!(
        "<p class=\"muted\">Page {} of {}</p>\n",
        report.summary.current_page, report.summary.total_pages
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn write_stat(html: &mut String, label: &str, value: usize) {
    html.push_str(&format!(
        "<div class=\"stat\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>\n"
    ));
}

fn write_stats_table(html: &mut String, title: &str, entries: &[StatEntry]) {
    if entries.is_empty() {
        return;
    }
    html.push_str(&format!("<h2>{title}</h2>\n"));
    html.push_str("<table>\n<thead><tr><th>Label</th><th>Count</th></tr></thead>\n<tbody>\n");
    for e in entries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&e.label),
            e.count
        ));
    }
    html.push_str("</tbody></table>\n");
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::{failed_load_report, sample_report};
    use crate::theme::ThemeMode;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Q&A\"</b>"),
            "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;"
        );
    }

    #[tokio::test]
    async fn test_html_uses_theme_palette() {
        let dark = render(&sample_report(ThemeMode::Dark).await).unwrap();
        assert!(dark.contains(ThemeMode::Dark.palette().background));
        assert!(!dark.contains(ThemeMode::Light.palette().background));
        assert!(dark.contains("Page 1 of 2"));
        assert!(dark.contains("&#10003;"));
        assert!(!dark.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_load_error_banner() {
        let html = render(&failed_load_report(ThemeMode::Light).await).unwrap();
        assert!(html.contains("<div class=\"error\">Could not load responses:"));
        assert!(html.contains("<p>No responses found.</p>"));
    }
}
