use super::Report;

pub fn render(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use crate::theme::ThemeMode;

    #[tokio::test]
    async fn test_json_shape() {
        let report = sample_report(ThemeMode::Dark).await;
        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["summary"]["total_pages"], 2);
        assert_eq!(value["rows"][0]["id"], "r1");
        assert_eq!(value["rows"][1]["selected"], true);
        assert_eq!(value["selected"][0], "r2");
        assert!(value.get("palette").is_none());
    }
}
