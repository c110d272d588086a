//! Read `N` and `N` heights from stdin, print the minimum-cost hop path.
//!
//! ```text
//! $ printf '6\n30 10 60 10 60 50\n' | hop_path
//! 4
//! 1 3 5 6
//! ```

use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use hop_dp::input::parse_positions;
use hop_dp::problems::{AbsDiff, SquaredDiff};
use hop_dp::{CostModel, Offsets, PathSolver};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

#[derive(Parser, Debug)]
#[command(
    name = "hop_path",
    version,
    about = "Minimum-cost hop path with reconstruction",
    long_about = "Reads N followed by N integers from stdin and prints the length of an \
                  optimal path followed by its 1-indexed positions."
)]
struct Cli {
    /// Allowed backward offsets, comma separated.
    #[arg(long, default_value_t = Offsets::default())]
    offsets: Offsets,

    /// Cost of a hop between two positions.
    #[arg(long, value_enum, default_value_t = CostKind::Abs)]
    cost: CostKind,

    /// Print timing, memory and the optimal cost to stderr.
    #[arg(long)]
    stats: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CostKind {
    /// |h[i] - h[j]|
    Abs,
    /// (h[i] - h[j])^2
    Squared,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hop_path: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let mut sys = System::new();
    let before = rss_kib(&mut sys);
    let start = Instant::now();

    let positions = parse_positions(&text)?;
    let model: Box<dyn CostModel> = match cli.cost {
        CostKind::Abs => Box::new(AbsDiff::new(positions)),
        CostKind::Squared => Box::new(SquaredDiff::new(positions)),
    };
    let solution = PathSolver::with_offsets(model, cli.offsets.clone()).run()?;

    let elapsed = start.elapsed();
    let after = rss_kib(&mut sys);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", solution.report())?;
    stdout.flush()?;

    if cli.stats {
        eprintln!("cost: {}", solution.cost);
        eprintln!("offsets: {}", cli.offsets);
        eprintln!("time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
        eprintln!("rss_delta: {} KiB", after.saturating_sub(before));
    }
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|process| process.memory() / 1024)
        .unwrap_or(0)
}
