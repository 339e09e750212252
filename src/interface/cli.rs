use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::serde_json_adapter::{read_network_file, write_report_file};
use crate::usecase::connectivity::analyze_routes;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_network;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::RoutesAnalyze {
            input,
            start,
            output,
            emit_events,
        } => {
            let dto = read_network_file(&input)
                .await
                .with_context(|| format!("reading network JSON: {input}"))?;
            validate_network(&dto).with_context(|| format!("validating network: {input}"))?;
            let network = dto
                .to_network()
                .with_context(|| format!("building network: {input}"))?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let scc = KosarajuSccDetector;
            let report = analyze_routes(&network, &start, &scc, Some(tx))
                .await
                .with_context(|| format!("analyzing routes from: {start}"))?;

            if let Some(output) = output.as_deref() {
                write_report_file(output, &report)
                    .await
                    .with_context(|| format!("writing report JSON: {output}"))?;
            }

            if let Some(handle) = printer {
                handle.await.ok();
            }

            eprintln!(
                "summary: start={} airports={} components={} additional_routes={}",
                report.start,
                report.airports,
                report.components.len(),
                report.additional_routes_needed
            );

            Ok(())
        }

        Cli::RoutesValidate { input } => {
            let dto = read_network_file(&input)
                .await
                .with_context(|| format!("reading network JSON: {input}"))?;

            validate_network(&dto).with_context(|| format!("validating network: {input}"))?;

            eprintln!("ok: network validated");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    RoutesAnalyze {
        input: String,
        start: String,
        output: Option<String>,
        emit_events: bool,
    },
    RoutesValidate {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> routes analyze --in/--input <network.json> --start <CODE> [--out/--output <report.json>] [--emit-events]
        // <bin> routes validate --in/--input <network.json>
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "routes" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => Self::parse_analyze(args),
            "validate" => Self::parse_validate(args),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut start: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--start" => {
                    i += 1;
                    start = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let start = start.ok_or_else(|| anyhow!(format!("missing --start\n\n{}", usage())))?;

        Ok(Cli::RoutesAnalyze {
            input,
            start,
            output,
            emit_events,
        })
    }

    fn parse_validate(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        Ok(Cli::RoutesValidate { input })
    }
}

fn usage() -> &'static str {
    "Usage:\n  routes analyze --in/--input <network.json> --start <CODE> [--out/--output <report.json>] [--emit-events]\n  routes validate --in/--input <network.json>\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nInput:\n  {\"airports\": {\"DSM\": 0, ...}, \"routes\": [[\"DSM\", \"ORD\"], ...]}"
}
