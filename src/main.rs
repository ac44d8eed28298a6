//! root-equidist CLI: fractional-part equidistribution survey over the real
//! roots of integer quadratics and cubics.
//!
//! Modes:
//!   --mode=sweep     All 8 flag combinations over both degrees (default)
//!   --mode=single    One run with the flags given below
//!
//! Options:
//!   --height=<N>     Maximum coefficient height (default: 100)
//!   --workers=<N>    Worker pool size (default: available parallelism)
//!   --degree=<2|3>   Restrict to one degree (default: both)
//!   --int-only       Fix the leading coefficient to 1
//!   --no-small       Exclude roots with |root| < height/2
//!   --invert-q       Inverted form of the bad-root predicate
//!   --diag-rate=<N>  Spot-check 1-in-N roots (default: 1000; 0 disables)
//!   --seed=<N>       Diagnostic sampling seed (default: 1)
//!   --out=<path>     Results JSON path (default: results/equidist.json)

use std::time::Instant;

use root_equidist::diagnostics::DiagnosticPolicy;
use root_equidist::{driver, Degree, HeightReport, RunConfig, RunSummary};

struct CliConfig {
    sweep: bool,
    max_height: u32,
    num_workers: usize,
    degrees: Vec<Degree>,
    int_only: bool,
    no_small: bool,
    invert_q: bool,
    diag_rate: u32,
    seed: u64,
    out: String,
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();

    let sweep = !args.iter().any(|a| a == "--mode=single");

    let max_height = args
        .iter()
        .find(|a| a.starts_with("--height="))
        .and_then(|a| a.strip_prefix("--height=")?.parse::<u32>().ok())
        .unwrap_or(100)
        .min(root_equidist::HEIGHT_LIMIT);

    let num_workers = args
        .iter()
        .find(|a| a.starts_with("--workers="))
        .and_then(|a| a.strip_prefix("--workers=")?.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        });

    let degrees = match args
        .iter()
        .find(|a| a.starts_with("--degree="))
        .and_then(|a| a.strip_prefix("--degree=")?.parse::<u32>().ok())
    {
        Some(2) => vec![Degree::Quadratic],
        Some(3) => vec![Degree::Cubic],
        _ => vec![Degree::Quadratic, Degree::Cubic],
    };

    let diag_rate = args
        .iter()
        .find(|a| a.starts_with("--diag-rate="))
        .and_then(|a| a.strip_prefix("--diag-rate=")?.parse::<u32>().ok())
        .unwrap_or(1000);

    let seed = args
        .iter()
        .find(|a| a.starts_with("--seed="))
        .and_then(|a| a.strip_prefix("--seed=")?.parse::<u64>().ok())
        .unwrap_or(1);

    let out = args
        .iter()
        .find_map(|a| a.strip_prefix("--out="))
        .unwrap_or("results/equidist.json")
        .to_string();

    CliConfig {
        sweep,
        max_height,
        num_workers,
        degrees,
        int_only: args.iter().any(|a| a == "--int-only"),
        no_small: args.iter().any(|a| a == "--no-small"),
        invert_q: args.iter().any(|a| a == "--invert-q"),
        diag_rate,
        seed,
        out,
    }
}

fn print_report_header() {
    println!(
        "  {:>6} {:>14} {:>11} {:>9} {:>9} {:>7} {:>9} {:>9} {:>9} {:>11} {:>8} {:>9} {:>10}",
        "height",
        "tuples",
        "count",
        "bad",
        "small",
        "double",
        "imag",
        "2roots",
        "3roots",
        "!irred",
        "bad%",
        "1/log(h)",
        "1/sqrt(lg)"
    );
    println!("  {}", "-".repeat(132));
}

fn print_report(r: &HeightReport) {
    println!(
        "  {:>6} {:>14} {:>11} {:>9} {:>9} {:>7} {:>9} {:>9} {:>9} {:>11} {:>8.2} {:>9.2} {:>10.2}",
        r.height,
        r.tuples_enumerated,
        r.counts.count,
        r.counts.bad,
        r.counts.small,
        r.counts.double_root,
        r.counts.imaginary,
        r.counts.two_roots,
        r.counts.three_roots,
        r.counts.not_irreducible,
        r.bad_percent,
        r.inv_log_height_percent,
        r.inv_sqrt_log_height_percent
    );
}

fn run_one(config: RunConfig, degree: Degree, policy: DiagnosticPolicy) -> RunSummary {
    println!(
        "degree {}: int_only={} no_small={} invert_q={}",
        degree.as_u32(),
        config.int_only,
        config.no_small,
        config.invert_q
    );
    print_report_header();

    let summary = match driver::run_heights(&config, degree, &policy, print_report) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "  totals: count {} bad {} ({:.2}%) small {} !irred {} in {:.2}s\n",
        summary.totals.count,
        summary.totals.bad,
        summary.bad_percent,
        summary.totals.small,
        summary.totals.not_irreducible,
        summary.wall_seconds
    );
    summary
}

fn main() {
    env_logger::init();

    let cli = parse_args();

    println!("==============================================================");
    println!("  root-equidist: fractional parts of real algebraic numbers");
    println!("==============================================================");
    println!(
        "max height {}, {} workers, diag rate {}\n",
        cli.max_height, cli.num_workers, cli.diag_rate
    );

    // Validate the results path before any processing starts.
    let out_path = std::path::Path::new(&cli.out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error creating output directory {}: {}", parent.display(), e);
                std::process::exit(1);
            }
        }
    }

    let combos: Vec<(bool, bool, bool)> = if cli.sweep {
        let mut combos = Vec::new();
        for int_only in [false, true] {
            for no_small in [false, true] {
                for invert_q in [false, true] {
                    combos.push((int_only, no_small, invert_q));
                }
            }
        }
        combos
    } else {
        vec![(cli.int_only, cli.no_small, cli.invert_q)]
    };

    let policy = DiagnosticPolicy {
        rate: cli.diag_rate,
        seed: cli.seed,
    };

    let start = Instant::now();
    let mut summaries = Vec::new();

    for (int_only, no_small, invert_q) in combos {
        for &degree in &cli.degrees {
            let config = RunConfig {
                max_height: cli.max_height,
                num_workers: cli.num_workers,
                int_only,
                no_small,
                invert_q,
            };
            summaries.push(run_one(config, degree, policy));
        }
    }

    println!("==============================================================");
    println!(
        "Total wall time: {:.2}s over {} runs",
        start.elapsed().as_secs_f64(),
        summaries.len()
    );

    match serde_json::to_string_pretty(&summaries) {
        Ok(json) => {
            if let Err(e) = std::fs::write(out_path, json) {
                eprintln!("Error writing results to {}: {}", out_path.display(), e);
                std::process::exit(1);
            }
            println!("Results saved to {}", out_path.display());
        }
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            std::process::exit(1);
        }
    }
}
