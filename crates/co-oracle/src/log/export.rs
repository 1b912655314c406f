//! Session log export.

use co_core::{DrawOutcome, HistoryItem};

use super::SessionLog;

/// Output format for [`SessionLog::export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown document.
    Markdown,
    /// Plain text.
    Text,
    /// Pretty-printed JSON array.
    Json,
}

impl ExportFormat {
    /// Parse a format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn time_of(item: &HistoryItem) -> String {
    item.timestamp.format("%H:%M:%S").to_string()
}

fn trigram_line(outcome: &DrawOutcome) -> Option<String> {
    let reading = outcome.hexagram()?;
    let upper = reading.upper_trigram()?;
    let lower = reading.lower_trigram()?;
    Some(format!(
        "{}{} over {}{} ({})",
        upper.symbol, upper.name, lower.symbol, lower.name, reading.binary_code
    ))
}

impl SessionLog {
    /// Export in the given format.
    pub fn export(&self, format: ExportFormat) -> serde_json::Result<String> {
        match format {
            ExportFormat::Markdown => Ok(self.export_markdown()),
            ExportFormat::Text => Ok(self.export_text()),
            ExportFormat::Json => self.export_json(),
        }
    }

    /// Export as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Chronos Oracle Session\n\n");
        for item in self.entries() {
            out.push_str(&format!("## {}\n\n", item.result_text()));
            out.push_str(&format!("- **Mode**: {}\n", item.mode));
            if let Some(question) = &item.question {
                out.push_str(&format!("- **Question**: {question}\n"));
            }
            if let Some(trigrams) = trigram_line(&item.outcome) {
                out.push_str(&format!("- **Trigrams**: {trigrams}\n"));
            }
            out.push_str(&format!("- **Seed**: .{:03} ms\n", item.millisecond_seed));
            out.push_str(&format!("- **Time**: {}\n", time_of(item)));
            if let Some(insight) = item.insight() {
                out.push_str(&format!("\n> {insight}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Chronos Oracle Session\n======================\n\n");
        for item in self.entries() {
            out.push_str(&format!(
                "[{}] {} .{:03}ms  {}\n",
                time_of(item),
                item.mode,
                item.millisecond_seed,
                item.result_text()
            ));
            if let Some(question) = &item.question {
                out.push_str(&format!("  Question: {question}\n"));
            }
            if let Some(trigrams) = trigram_line(&item.outcome) {
                out.push_str(&format!("  Trigrams: {trigrams}\n"));
            }
            if let Some(insight) = item.insight() {
                out.push_str(&format!("  Insight: {insight}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export as a JSON array, newest first.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.entries())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use co_core::resolve::resolve_hexagram;
    use co_core::{SeedBundle, SelectionMode};

    use super::*;

    fn sample_log() -> SessionLog {
        let mut log = SessionLog::new();
        log.record(
            HistoryItem::new(
                SelectionMode::Numeric,
                DrawOutcome::Number(42),
                &SeedBundle::new(7, 0.0),
                None,
                Utc::now(),
            )
            .with_insight("A lucky sign.")
            .unwrap(),
        );
        log.record(HistoryItem::new(
            SelectionMode::Divination,
            DrawOutcome::Hexagram(resolve_hexagram("101", "010", 5)),
            &SeedBundle::new(250, 0.0),
            Some("Should I travel?".to_string()),
            Utc::now(),
        ));
        log
    }

    #[test]
    fn parse_formats() {
        assert_eq!(ExportFormat::parse("MD"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Text));
        assert_eq!(ExportFormat::parse("json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("pdf"), None);
    }

    #[test]
    fn markdown_export() {
        let md = sample_log().export_markdown();
        assert!(md.starts_with("# Chronos Oracle Session"));
        assert!(md.contains("## 水火既济 九五"));
        assert!(md.contains("- **Question**: Should I travel?"));
        assert!(md.contains("- **Trigrams**: ☵坎 over ☲离 (010101)"));
        assert!(md.contains("- **Seed**: .007 ms"));
        assert!(md.contains("> A lucky sign."));
        // Newest first.
        assert!(md.find("水火既济").unwrap() < md.find("## 42").unwrap());
    }

    #[test]
    fn text_export() {
        let txt = sample_log().export_text();
        assert!(txt.contains("NUMERIC .007ms  42"));
        assert!(txt.contains("  Insight: A lucky sign."));
        assert!(txt.contains("DIVINATION .250ms  水火既济 九五"));
    }

    #[test]
    fn json_export() {
        let json = sample_log().export(ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["mode"], "DIVINATION");
        assert_eq!(items[0]["outcome"]["kind"], "hexagram");
        assert_eq!(items[1]["insight"], "A lucky sign.");
    }

    #[test]
    fn empty_log_exports_header_only() {
        let log = SessionLog::new();
        assert_eq!(log.export_markdown(), "# Chronos Oracle Session\n\n");
        assert_eq!(log.export_json().unwrap(), "[]");
    }
}
