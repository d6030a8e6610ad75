use std::fmt::Write as _;
use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use meshcfg_proto::schema::{hardware_model_name, Channel};
use meshcfg_session::{SessionOutcome, SessionReport};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    complete: bool,
    #[serde(flatten)]
    report: &'a SessionReport,
}

pub fn print_report(report: &SessionReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", render_json(report)),
        OutputFormat::Table => println!("{}", render_table(report)),
        OutputFormat::Pretty => print!("{}", render_pretty(report)),
    }
}

pub fn render_json(report: &SessionReport) -> String {
    let out = ReportOutput {
        complete: report.is_complete(),
        report,
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn render_table(report: &SessionReport) -> String {
    let config = &report.config;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FIELD", "VALUE"]);

    let rows = [
        ("Node number", node_number(config.node_number)),
        ("Hardware ID", config.hardware_id.clone()),
        ("Long name", config.long_name.clone()),
        ("Short name", config.short_name.clone()),
        (
            "Device ID",
            config.device_identity.as_deref().map(hex::encode).unwrap_or_default(),
        ),
        ("Firmware", firmware(report)),
        ("Hardware model", hardware_model(report)),
        ("Config", join_names(config.config.keys().copied())),
        ("Modules", join_names(config.module_config.keys().copied())),
        ("Channels", channel_summary(&config.channels)),
        ("Config complete", config.config_complete.to_string()),
        ("Outcome", outcome_name(report.outcome).to_string()),
        (
            "Frames",
            format!(
                "{} ({} undecodable, {} ignored)",
                report.stats.frames, report.stats.decode_failures, report.stats.ignored_messages
            ),
        ),
        ("Elapsed", format!("{}ms", report.elapsed.as_millis())),
    ];
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    table.to_string()
}

/// Line-oriented summary for humans.
pub fn render_pretty(report: &SessionReport) -> String {
    let config = &report.config;
    let mut out = String::new();
    let _ = writeln!(out, "Device Configuration:");
    let _ = writeln!(out, "  Node Number: {}", node_number(config.node_number));
    let _ = writeln!(out, "  Hardware ID: {}", config.hardware_id);
    let _ = writeln!(out, "  Long Name: {}", config.long_name);
    let _ = writeln!(out, "  Short Name: {}", config.short_name);
    if config.metadata.is_some() {
        let _ = writeln!(out, "  Firmware: {}", firmware(report));
        let _ = writeln!(out, "  Hardware Model: {}", hardware_model(report));
    }
    let _ = writeln!(out, "  Channels: {}", config.channels.len());
    let _ = writeln!(out, "  Config Complete: {}", config.config_complete);
    if !report.is_complete() {
        let _ = writeln!(out, "  Result: partial ({})", outcome_name(report.outcome));
    }
    out
}

fn node_number(node: Option<u32>) -> String {
    match node {
        Some(num) => format!("{num} (0x{num:08x})"),
        None => "unknown".to_string(),
    }
}

fn firmware(report: &SessionReport) -> String {
    report
        .config
        .metadata
        .as_ref()
        .map(|meta| meta.firmware_version.clone())
        .unwrap_or_default()
}

fn hardware_model(report: &SessionReport) -> String {
    match &report.config.metadata {
        Some(meta) => match hardware_model_name(meta.hw_model) {
            Some(name) => name.to_string(),
            None => meta.hw_model.to_string(),
        },
        None => String::new(),
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn channel_summary(channels: &[Channel]) -> String {
    let names = channels
        .iter()
        .filter(|channel| channel.role != 0)
        .map(|channel| {
            let name = channel
                .settings
                .as_ref()
                .map(|settings| settings.name.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or("default");
            format!("{}:{name}", channel.index)
        })
        .collect::<Vec<_>>();
    if names.is_empty() {
        channels.len().to_string()
    } else {
        format!("{} ({})", channels.len(), names.join(", "))
    }
}

fn outcome_name(outcome: SessionOutcome) -> &'static str {
    match outcome {
        SessionOutcome::Completed => "completed",
        SessionOutcome::TimedOut => "timed out",
        SessionOutcome::EndOfInput => "end of input",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use meshcfg_proto::schema::{ChannelSettings, DeviceMetadata};
    use meshcfg_session::{DeviceConfig, SessionStats};

    use super::*;

    fn report(outcome: SessionOutcome) -> SessionReport {
        SessionReport {
            config: DeviceConfig {
                node_number: Some(0x0BAD_CAFE),
                device_identity: Some(vec![0xAB, 0x01]),
                hardware_id: "!0badcafe".into(),
                long_name: "Base Station".into(),
                short_name: "BASE".into(),
                metadata: Some(DeviceMetadata {
                    firmware_version: "2.5.6.abc".into(),
                    hw_model: 43,
                    ..Default::default()
                }),
                channels: vec![
                    Channel {
                        index: 0,
                        role: 1,
                        settings: Some(ChannelSettings::default()),
                    },
                    Channel {
                        index: 1,
                        role: 0,
                        settings: None,
                    },
                ],
                config_complete: outcome == SessionOutcome::Completed,
                ..Default::default()
            },
            outcome,
            stats: SessionStats::default(),
            elapsed: Duration::from_millis(1250),
        }
    }

    #[test]
    fn pretty_shows_node_number_in_both_bases() {
        let text = render_pretty(&report(SessionOutcome::Completed));
        assert!(text.contains("  Node Number: 195939070 (0x0badcafe)\n"));
        assert!(text.contains("  Hardware Model: HELTEC_V3\n"));
        assert!(text.contains("  Channels: 2\n"));
        assert!(text.contains("  Config Complete: true\n"));
        assert!(!text.contains("Result: partial"));
    }

    #[test]
    fn pretty_flags_partial_results() {
        let text = render_pretty(&report(SessionOutcome::TimedOut));
        assert!(text.contains("  Config Complete: false\n"));
        assert!(text.contains("  Result: partial (timed out)\n"));
    }

    #[test]
    fn json_includes_completion_flag() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&report(SessionOutcome::Completed))).unwrap();
        assert_eq!(json["complete"], true);
        assert_eq!(json["outcome"], "completed");
        assert_eq!(json["config"]["device_identity"], "ab01");
        assert_eq!(json["elapsed_ms"], 1250);
    }

    #[test]
    fn table_lists_active_channels() {
        let text = render_table(&report(SessionOutcome::Completed));
        assert!(text.contains("2 (0:default)"));
        assert!(text.contains("HELTEC_V3"));
        assert!(text.contains("ab01"));
    }
}
