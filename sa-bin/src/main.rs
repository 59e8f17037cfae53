use astarsa::stats::AstarStats;
use clap::Parser;
use log::{error, info};
use sa_bin::cli::{Cli, CliError};
use sa_types::AlignmentResult;
use serde::Serialize;
use std::{
    fs::File,
    io::BufWriter,
    ops::ControlFlow,
    process::ExitCode,
    time::Instant,
};

/// One aligned pair in the JSON output.
#[derive(Serialize)]
struct PairReport {
    pair: String,
    #[serde(flatten)]
    result: AlignmentResult,
}

fn print_result(result: &AlignmentResult, silent: u8) {
    println!("Total cost: {}", result.total_cost);
    if silent == 0 {
        for step in &result.alignment_path {
            let index = |i: Option<usize>| i.map_or("-".to_string(), |i| i.to_string());
            println!(
                "  {:<6} A {:>4}  B {:>4}  cost {:>5}",
                step.op,
                index(step.index_a()),
                index(step.index_b()),
                step.cost
            );
        }
    }
    for c in result.flagged() {
        println!(
            "  flagged: A[{}] ~ B[{}] similarity {:.3}",
            c.index_a, c.index_b, c.similarity
        );
    }
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let params = cli.params()?;
    info!(
        "Aligning {:?} units with heuristic {}, threshold {}",
        params.unit_mode,
        params.heuristic.to_string(),
        params.similarity_threshold
    );
    let aligner = params.aligner();

    let mut avg_result = AstarStats::default();
    let mut reports = vec![];
    let mut failed = 0;
    let start = Instant::now();

    // Process the input.
    cli.input.process_input_pairs(|pair, a, b| {
        match aligner.align(&a, &b) {
            Ok((result, stats)) => {
                if cli.silent <= 1 {
                    println!("{pair}");
                    print_result(&result, cli.silent);
                    stats.print();
                }
                avg_result += stats;
                if cli.output.is_some() {
                    reports.push(PairReport { pair, result });
                }
            }
            Err(e) => {
                error!("{pair}: {e}");
                failed += 1;
            }
        }

        match cli.timeout {
            Some(d) if start.elapsed() > d => {
                info!("Timeout of {d:?} reached");
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        }
    })?;

    if avg_result.sample_size > 1 {
        avg_result.print();
    }

    if let Some(output) = &cli.output {
        let file = File::create(output).map_err(|source| CliError::Io {
            path: output.clone(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), &reports).map_err(|source| {
            CliError::Json {
                path: output.clone(),
                source,
            }
        })?;
    }

    Ok(failed)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!("{failed} pair(s) failed to align");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cli_test() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn report_json() {
        let a = sa_bin::preprocess("The cat sat. It was red.");
        let b = sa_bin::preprocess("The cat sat! Something else.");
        let (result, _) = astarsa::AstarSaParams::default().align(&a, &b).unwrap();
        let json = serde_json::to_value(PairReport {
            pair: "test".into(),
            result,
        })
        .unwrap();
        assert_eq!(json["pair"], "test");
        assert_eq!(json["alignment_path"][0]["op"], "align");
        assert_eq!(json["plagiarism_candidates"][0]["flagged"], true);
        assert!(json["total_cost"].is_u64());
    }
}
