use anyhow::{Context, Result};
use clap::Parser;
use resource_type_core::ResourceType;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parse resource type strings into type, label and version.
#[derive(Debug, Parser)]
#[command(name = "restype", version, about)]
struct Args {
    /// Resource type strings, e.g. `a/b/c/1.0.0`
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<String>,

    /// Print one JSON object per input instead of tab-separated columns
    #[arg(long)]
    json: bool,
}

/// RUST_LOG でログレベルを制御（未設定なら warn）
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn render(t: &ResourceType, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string(t).context("json encode");
    }
    let version = t
        .version()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());
    Ok(format!("{}\t{}\t{}", t.resource_type(), t.resource_label(), version))
}

/// 先頭から順に出力し、最初の不正な入力で止める
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    info!(count = args.inputs.len(), json = args.json, "parsing resource types");

    for input in &args.inputs {
        let t = ResourceType::parse(input)
            .with_context(|| format!("cannot parse resource type {input:?}"))?;
        writeln!(out, "{}", render(&t, args.json)?).context("write output")?;
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();
    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
