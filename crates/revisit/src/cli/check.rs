//! The `revisit check` command for validating services.

use clap::{Args, ValueEnum};
use futures_util::stream::{self, StreamExt};
use revisit_core::{parse_max_size, Config, LimitsConfig, ProbePayload, ValidationReport, Validator};

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Service root URLs (no trailing slash)
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Maximum decoded image size in bytes (non-numeric values use the default)
    #[arg(long)]
    pub max_size: Option<String>,

    /// Data sent as `content.data` in the POST probe
    #[arg(long, default_value = "")]
    pub probe_data: String,

    /// HEAD probe timeout in milliseconds
    #[arg(long)]
    pub head_timeout_ms: Option<u64>,

    /// POST probe timeout in milliseconds
    #[arg(long)]
    pub post_timeout_ms: Option<u64>,

    /// Number of services validated concurrently
    #[arg(short, long, default_value = "4")]
    pub parallel: usize,

    /// Report format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: ReportFormat,
}

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One human-readable block per service
    Pretty,
    /// A single JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Execute the check command.
pub async fn execute(args: CheckArgs, config: Config) -> anyhow::Result<()> {
    if args.parallel == 0 {
        anyhow::bail!("--parallel must be > 0");
    }

    let limits = resolve_limits(&args, config.limits);
    tracing::debug!(
        max_size = limits.max_size,
        head_timeout_ms = limits.head_timeout_ms,
        post_timeout_ms = limits.post_timeout_ms,
        "Validating {} service(s)",
        args.urls.len()
    );

    let validator = Validator::new(limits)?;
    let payload = ProbePayload::new(args.probe_data.clone());

    // `buffered` keeps reports in input order.
    let reports: Vec<ValidationReport> = stream::iter(args.urls.iter())
        .map(|url| validator.validate(url, &payload))
        .buffered(args.parallel)
        .collect()
        .await;

    match args.format {
        ReportFormat::Pretty => {
            for report in &reports {
                print!("{}", render_pretty(report));
            }
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        ReportFormat::Jsonl => {
            for report in &reports {
                println!("{}", serde_json::to_string(report)?);
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} service(s) failed validation", reports.len());
    }

    Ok(())
}

/// Apply command-line overrides on top of the configured limits.
fn resolve_limits(args: &CheckArgs, mut limits: LimitsConfig) -> LimitsConfig {
    if let Some(raw) = &args.max_size {
        limits.max_size = parse_max_size(raw);
    }
    if let Some(ms) = args.head_timeout_ms.filter(|ms| *ms > 0) {
        limits.head_timeout_ms = ms;
    }
    if let Some(ms) = args.post_timeout_ms.filter(|ms| *ms > 0) {
        limits.post_timeout_ms = ms;
    }
    limits
}

fn render_pretty(report: &ValidationReport) -> String {
    let mut out = if report.is_valid() {
        format!("PASS {} ({} ms)\n", report.url, report.elapsed_ms)
    } else {
        let stage = report
            .failed_at
            .map(|s| format!(" at {s}"))
            .unwrap_or_default();
        format!("FAIL {}{stage} ({} ms)\n", report.url, report.elapsed_ms)
    };

    for (kind, message) in &report.errors {
        out.push_str(&format!("  {kind}: {message}\n"));
    }

    if let Some(image) = &report.image {
        out.push_str(&format!("  image: {} ({} bytes)\n", image.media_type, image.len()));
    }

    out
}
