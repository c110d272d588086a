use std::collections::BTreeMap;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use hop_dp::problems::{AbsDiff, SquaredDiff};
use hop_dp::utils::path_cost;
use hop_dp::{CostModel, Offsets, PathSolver};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Exhaustive enumeration doubles roughly every step; keep it small.
const EXHAUSTIVE_CAP: usize = 20;

#[derive(Parser, Debug)]
#[command(
    name = "scale_probe",
    about = "Timing, memory and correctness sweep for the hop-path solver",
    after_help = "Examples:\n  cargo run --bin scale_probe\n  cargo run --bin scale_probe -- --format table --verify-limit 16"
)]
struct Options {
    /// Output format for the measurements written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest N cross-checked by exhaustive search (capped at 20).
    #[arg(long, default_value_t = 16)]
    verify_limit: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), serde_json::Error> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(measurements)?),
        }
        Ok(())
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size: usize,
    cost: u64,
    path_len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    /// Rolling cost and path sum agree; too large for exhaustive search.
    Consistent,
    /// Also matches exhaustive search.
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Consistent => "consistent",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Consistent => "○",
            VerificationStatus::Failed => "✗",
        }
    }
}

struct Scenario {
    name: &'static str,
    steps: &'static [usize],
    squared: bool,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "abs_offsets_1_2",
        steps: &[1, 2],
        squared: false,
    },
    Scenario {
        name: "squared_offsets_1_2_3",
        steps: &[1, 2, 3],
        squared: true,
    },
    Scenario {
        name: "abs_offsets_1_5_10",
        steps: &[1, 5, 10],
        squared: false,
    },
];

const SIZES: &[usize] = &[1, 2, 8, 16, 256, 4096, 65_536, 1_048_576];

fn main() {
    let options = Options::parse();
    let verify_limit = options.verify_limit.min(EXHAUSTIVE_CAP);

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Hop-path scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • every size: table cost == rolling cost == sum along path");
    eprintln!("  • N <= {verify_limit}: table cost == exhaustive minimum");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();
    for (k, scenario) in SCENARIOS.iter().enumerate() {
        eprintln!("[{}/{}] {}", k + 1, SCENARIOS.len(), scenario.name);
        for &n in SIZES {
            eprint!("      N={n}... ");
            let m = run_scenario(scenario, n, verify_limit, &mut sys);
            eprintln!(
                "{} cost={}, path_len={}, time={:.3}s, status={}",
                m.status.icon(),
                m.cost,
                m.path_len,
                m.wall_s,
                m.status.label()
            );
            measurements.push(m);
        }
        eprintln!();
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements
        .iter()
        .any(|m| m.status == VerificationStatus::Failed)
    {
        std::process::exit(1);
    }
}

fn run_scenario(scenario: &Scenario, n: usize, verify_limit: usize, sys: &mut System) -> Measurement {
    let heights = deterministic_heights(n);
    let model: Box<dyn CostModel> = if scenario.squared {
        Box::new(SquaredDiff::from_heights(heights).expect("sizes are non-empty"))
    } else {
        Box::new(AbsDiff::from_heights(heights).expect("sizes are non-empty"))
    };
    let offsets = Offsets::new(scenario.steps.iter().copied()).expect("scenario offsets are valid");
    let solver = PathSolver::with_offsets(model, offsets);

    let before = rss_kib(sys);
    let start = Instant::now();
    let result = solver.run();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    let mut m = Measurement {
        scenario: scenario.name,
        size: n,
        cost: 0,
        path_len: 0,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        status: VerificationStatus::Failed,
        detail: None,
    };
    let solution = match result {
        Ok(solution) => solution,
        Err(err) => {
            m.detail = Some(err.to_string());
            return m;
        }
    };
    m.cost = solution.cost;
    m.path_len = solution.path.len();

    let (status, detail) = verify(&solver, &solution.path, solution.cost, n, verify_limit);
    m.status = status;
    m.detail = detail;
    m
}

fn verify<M: CostModel>(
    solver: &PathSolver<M>,
    path: &[usize],
    cost: u64,
    n: usize,
    verify_limit: usize,
) -> (VerificationStatus, Option<String>) {
    let failed = |detail: String| (VerificationStatus::Failed, Some(detail));

    if path.first() != Some(&0) || path.last() != Some(&(n - 1)) {
        return failed(format!("path endpoints {:?}..{:?}", path.first(), path.last()));
    }
    match solver.min_cost() {
        Ok(rolling) if rolling == cost => {}
        Ok(rolling) => return failed(format!("rolling={rolling}, table={cost}")),
        Err(err) => return failed(format!("rolling failed: {err}")),
    }
    match path_cost(solver.model(), path) {
        Ok(summed) if summed == cost => {}
        Ok(summed) => return failed(format!("path sum={summed}, table={cost}")),
        Err(err) => return failed(format!("path sum failed: {err}")),
    }
    if n > verify_limit {
        return (VerificationStatus::Consistent, None);
    }
    match exhaustive_min(solver.model(), solver.offsets().as_slice(), 0) {
        Some(best) if best == cost => (VerificationStatus::Passed, None),
        other => failed(format!("exhaustive={other:?}, table={cost}")),
    }
}

/// Minimum over every offset sequence from `at` to the last position.
fn exhaustive_min<M: CostModel + ?Sized>(model: &M, steps: &[usize], at: usize) -> Option<u64> {
    let last = model.len() - 1;
    if at == last {
        return Some(0);
    }
    steps
        .iter()
        .filter(|&&d| at + d <= last)
        .filter_map(|&d| {
            let hop = u64::try_from(model.cost(at, at + d)).ok()?;
            exhaustive_min(model, steps, at + d).map(|rest| rest + hop)
        })
        .min()
}

fn deterministic_heights(n: usize) -> Vec<i64> {
    // Small LCG so every run probes the same instance.
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ((state >> 33) % 10_000) as i64
        })
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let count = |status| measurements.iter().filter(|m| m.status == status).count();
    eprintln!("  ✓ passed:     {}", count(VerificationStatus::Passed));
    eprintln!("  ○ consistent: {}", count(VerificationStatus::Consistent));
    eprintln!("  ✗ failed:     {}", count(VerificationStatus::Failed));
    for m in measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
    {
        eprintln!(
            "     {} N={}: {}",
            m.scenario,
            m.size,
            m.detail.as_deref().unwrap_or("")
        );
    }
    eprintln!();

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: max_time={max_time:.3}s, max_rss_delta={max_mem} KiB");
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,size,cost,path_len,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.cost,
            m.path_len,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());
    println!(
        "{:<col1$}  {:>9}  {:>14}  {:>9}  {:>9}  {:>13}  {:>10}",
        "scenario", "size", "cost", "path_len", "wall_s", "rss_delta_kib", "status"
    );
    println!("{}", "-".repeat(col1 + 2 + 9 + 2 + 14 + 2 + 9 + 2 + 9 + 2 + 13 + 2 + 10));
    for m in measurements {
        println!(
            "{:<col1$}  {:>9}  {:>14}  {:>9}  {:>9.3}  {:>13}  {:>10}",
            m.scenario,
            m.size,
            m.cost,
            m.path_len,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label()
        );
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
