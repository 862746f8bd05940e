use crate::dashboard::Dashboard;
use crate::report::{Report, ReportFormat};

/// Render the dashboard snapshot and send it to `output` or stdout.
pub fn emit(dashboard: &Dashboard, format: &str, output: Option<&str>) -> anyhow::Result<()> {
    let report = Report::build(dashboard);
    let rendered = report.render(ReportFormat::parse(format))?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Report written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
