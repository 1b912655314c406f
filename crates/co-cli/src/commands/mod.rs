pub mod draw;
pub mod hexagram;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use colored::Colorize;
use tracing::debug;

use co_core::{HexagramReading, HistoryItem, SelectionMode};
use co_insight::{GeminiClient, InsightConfig, InsightRequester, InsightService, OfflineInsight};
use co_oracle::OracleConfig;

/// Flags controlling the narrative insight request.
#[derive(Args, Debug, Clone)]
pub struct InsightArgs {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Skip the model call and use the fallback insight
    #[arg(long, global = true)]
    offline: bool,

    /// Model for every insight (overrides the per-mode defaults)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Sampling temperature for every insight (0.0-2.0)
    #[arg(long, global = true)]
    temperature: Option<f32>,

    /// Language the insight is written in
    #[arg(long, global = true)]
    language: Option<String>,

    /// Seconds before the model call is abandoned
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,
}

impl InsightArgs {
    fn config(&self) -> InsightConfig {
        let mut config =
            InsightConfig::default().with_timeout(Some(Duration::from_secs(self.timeout)));
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(temperature) = self.temperature {
            config = config
                .with_numeric_temperature(temperature)
                .with_divination_temperature(temperature);
        }
        if let Some(language) = &self.language {
            config = config.with_language(language.clone());
        }
        config
    }

    fn api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Build the requester and the matching oracle configuration.
    pub fn build(&self) -> Result<(Arc<dyn InsightRequester>, OracleConfig), String> {
        let config = self.config();
        let oracle_config = OracleConfig::default().with_fallbacks_from(&config);

        if self.offline {
            debug!("offline, using fallback insights");
            let requester: Arc<dyn InsightRequester> = Arc::new(OfflineInsight::new(config));
            return Ok((requester, oracle_config));
        }

        let Some(api_key) = self.api_key() else {
            eprintln!(
                "  {} no GEMINI_API_KEY set, insights will use fallback text",
                "note:".yellow()
            );
            let requester: Arc<dyn InsightRequester> = Arc::new(OfflineInsight::new(config));
            return Ok((requester, oracle_config));
        };

        let client = match config.timeout {
            Some(timeout) => GeminiClient::with_timeout(api_key, timeout)
                .map_err(|e| format!("cannot create HTTP client: {e}"))?,
            None => GeminiClient::new(api_key),
        };
        debug!(
            numeric_model = %config.numeric.model,
            divination_model = %config.divination.model,
            "using Gemini for insights"
        );
        let requester: Arc<dyn InsightRequester> = Arc::new(InsightService::new(client, config));
        Ok((requester, oracle_config))
    }
}

/// Print the modes and what they do.
pub fn modes() -> Result<(), String> {
    for mode in SelectionMode::all() {
        println!("  {:<12} {}", mode.to_string().bold(), mode.describe());
    }
    Ok(())
}

/// Render the six lines of `code` from top to bottom.
///
/// `moving` marks one line (1 = bottom) and labels it.
pub fn render_lines(code: &str, moving: Option<(u8, &str)>) -> String {
    let mut out = String::new();
    for (bit, position) in code.bytes().zip((1..=6u8).rev()) {
        let figure = if bit == b'1' { "━━━━━━━━━━━" } else { "━━━━   ━━━━" };
        let line = match moving {
            Some((active, label)) if active == position => {
                format!("    {}  {} {label}", figure.cyan().bold(), "◀".cyan())
            }
            _ => format!("    {}  {}", figure.dimmed(), position.to_string().dimmed()),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Print the figure, name, and trigrams of a reading.
pub fn print_reading(reading: &HexagramReading) {
    println!();
    print!(
        "{}",
        render_lines(
            &reading.binary_code,
            Some((reading.active_line, reading.line_name.as_str()))
        )
    );
    println!();
    let number = reading.number.map(|n| format!("#{n} ")).unwrap_or_default();
    println!(
        "  {}{}  {}",
        number.dimmed(),
        reading.hexagram_name.bold(),
        reading.line_name.cyan()
    );
    if let (Some(upper), Some(lower)) = (reading.upper_trigram(), reading.lower_trigram()) {
        println!(
            "  {} {}{} ({}) over {}{} ({})",
            "Trigrams".dimmed(),
            upper.symbol,
            upper.name,
            upper.image,
            lower.symbol,
            lower.name,
            lower.image
        );
    }
}

/// Print a freshly resolved draw, before its insight arrives.
pub fn print_result(item: &HistoryItem) {
    match item.outcome.hexagram() {
        Some(reading) => print_reading(reading),
        None => println!("  {}  {}", "Result".dimmed(), item.result_text().bold()),
    }
    println!(
        "  {}    .{:03} ms  ({})",
        "Seed".dimmed(),
        item.millisecond_seed,
        item.mode
    );
}

/// Print the insight of a finished draw.
pub fn print_insight(item: &HistoryItem) {
    if let Some(insight) = item.insight() {
        println!();
        println!("  {} {}", "Insight".cyan().bold(), insight.italic());
    }
}
