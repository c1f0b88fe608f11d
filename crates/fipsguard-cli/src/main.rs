//! CLI entry point for fipsguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `fipsguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use fipsguard_app::{
    CheckInput, ExplainOutput, render_markdown, run_check, run_explain, runtime_error_report,
    serialize_report,
};
use fipsguard_host::{FixedHost, HostFips};
use fipsguard_settings::Overrides;
use fipsguard_types::FipsguardReport;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "fipsguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "fipsguard",
    version,
    about = "Check TPM algorithm profiles against host FIPS mode"
)]
struct Cli {
    /// Path to fipsguard config TOML. Defaults to fipsguard.toml, which may be absent; an
    /// explicit path must exist.
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Log evaluation steps to stderr (same as FIPSGUARD_LOG=debug).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HostArg {
    /// The provider this binary was built against.
    Auto,
    /// Pretend the host enforces FIPS mode.
    Enabled,
    /// Pretend the host does not enforce FIPS mode.
    Disabled,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the enabled algorithms against the host FIPS state.
    Check {
        /// Requested profile attributes (comma-separated).
        #[arg(long)]
        attributes: Option<String>,

        /// Enabled algorithm tokens (comma-separated).
        #[arg(long)]
        algorithms: Option<String>,

        /// Runtime-info JSON supplying attributes/algorithms not given otherwise.
        #[arg(long)]
        runtime_info: Option<String>,

        /// Override mode (check|apply).
        #[arg(long)]
        mode: Option<String>,

        /// Override fail_on (disable|never).
        #[arg(long)]
        fail_on: Option<String>,

        /// Override key size parsing (trusting|strict).
        #[arg(long)]
        key_size_parse: Option<String>,

        /// Host FIPS provider.
        #[arg(long, value_enum, default_value = "auto")]
        host: HostArg,

        /// Where to write the JSON report.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown summary.
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "fips.key_sizes") or code (e.g., "disallowed_algorithm") to explain.
        identifier: String,
    },

    /// Print the JSON schema of the config file.
    Schema {
        /// Print the report schema instead.
        #[arg(long)]
        report: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            attributes,
            algorithms,
            runtime_info,
            mode,
            fail_on,
            key_size_parse,
            host,
            report_out,
            markdown_out,
        } => {
            let overrides = Overrides {
                attributes,
                algorithms,
                runtime_info,
                mode,
                fail_on,
                key_size_parse,
            };
            cmd_check(
                cli.config.as_deref(),
                overrides,
                host,
                report_out.as_deref(),
                markdown_out.as_deref(),
            )
        }
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema { report } => cmd_schema(report),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FIPSGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("off"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn select_host(arg: HostArg) -> Box<dyn HostFips> {
    match arg {
        HostArg::Auto => fipsguard_host::default_host(),
        HostArg::Enabled => Box::new(FixedHost::new(true)),
        HostArg::Disabled => Box::new(FixedHost::new(false)),
    }
}

fn cmd_check(
    config: Option<&Utf8Path>,
    overrides: Overrides,
    host: HostArg,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let (config, cfg_text) = load_config(config)?;
        let base_dir = match config.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let host = select_host(host);
        tracing::debug!(provider = host.provider_name(), "selected host provider");

        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();
        let output = run_check(CheckInput {
            base_dir,
            config_text: &cfg_text,
            overrides,
            host: host.as_ref(),
            stdout: &mut stdout,
            stderr: &mut stderr,
        })?;

        write_artifacts(&output.report, report_out, markdown_out)?;
        if output.host_error.is_some() {
            eprintln!("fipsguard error: host FIPS mode is still enabled");
        }
        Ok(output.exit_code)
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_artifacts(&report, report_out, None);
            eprintln!("fipsguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Read the config file. The implicit default may be missing (defaults apply); an explicit
/// `--config` path may not.
fn load_config(explicit: Option<&Utf8Path>) -> anyhow::Result<(&Utf8Path, String)> {
    match explicit {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config: {path}"))?;
            Ok((path, text))
        }
        None => {
            let path = Utf8Path::new(DEFAULT_CONFIG);
            Ok((path, std::fs::read_to_string(path).unwrap_or_default()))
        }
    }
}

fn write_artifacts(
    report: &FipsguardReport,
    report_out: Option<&Utf8Path>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    if let Some(path) = report_out {
        let data = serialize_report(report).context("serialize report")?;
        write_file(path, &data).context("write report json")?;
    }
    if let Some(path) = markdown_out {
        write_file(path, render_markdown(report).as_bytes()).context("write markdown")?;
    }
    Ok(())
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write: {path}"))?;
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", fipsguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                fipsguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(report: bool) -> anyhow::Result<()> {
    let schema = if report {
        fipsguard_types::report_schema()
    } else {
        fipsguard_settings::config_schema()
    };
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
