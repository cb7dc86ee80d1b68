use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use putnam::dimacs;
use putnam::error::PutnamError;
use putnam::generate;
use putnam::solver::heuristic::{BranchHeuristic, EliminationStrategy};
use putnam::timeout::run_with_timeout;
use putnam::{dp, dpll, resolution, Formula, Telemetry};

#[derive(Parser)]
#[command(name = "putnam", about = "Resolution, Davis-Putnam, and DPLL satisfiability procedures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide satisfiability of a DIMACS CNF file.
    Solve {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = Solver::Dpll)]
        solver: Solver,
        /// Elimination strategy for resolution/dp (null, mostfreq, leastfreq).
        #[arg(long, default_value = "null")]
        strategy: String,
        /// Branch heuristic for dpll (fixed, mostfreq, jeroslow).
        #[arg(long, default_value = "fixed")]
        heuristic: String,
        /// Wall-clock timeout in seconds.
        #[arg(long)]
        timeout: Option<f64>,
        /// Print the telemetry record as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
    /// Generate benchmark CNF instances.
    Generate {
        #[command(subcommand)]
        what: GenerateCommand,
    },
    /// Run every solver/strategy combination over a directory of CNF files.
    Bench {
        dir: PathBuf,
        #[arg(long, default_value_t = 60.0)]
        timeout: f64,
        #[arg(long, default_value = "results.csv")]
        csv: PathBuf,
    },
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Pigeonhole instance PHP(holes+1 -> holes), unsatisfiable.
    Php {
        #[arg(long)]
        holes: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Random 3-SAT instance with a seeded RNG.
    Random {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: u32,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Solver {
    Resolution,
    Dp,
    Dpll,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PutnamError> {
    match cli.command {
        Command::Solve { file, solver, strategy, heuristic, timeout, json } => {
            solve_file(file, solver, &strategy, &heuristic, timeout, json)
        }
        Command::Generate { what } => generate_file(what),
        Command::Bench { dir, timeout, csv } => run_bench(dir, timeout, csv),
    }
}

fn solve_file(
    file: PathBuf,
    solver: Solver,
    strategy: &str,
    heuristic: &str,
    timeout: Option<f64>,
    json: bool,
) -> Result<(), PutnamError> {
    let reader = BufReader::new(File::open(&file)?);
    let (formula, _num_vars) = dimacs::parse(reader)?;
    info!("parsed {} clauses from {}", formula.len(), file.display());

    let strategy: EliminationStrategy =
        strategy.parse().map_err(|_| PutnamError::UnknownStrategy(strategy.to_string()))?;
    let heuristic: BranchHeuristic =
        heuristic.parse().map_err(|_| PutnamError::UnknownStrategy(heuristic.to_string()))?;

    let telemetry = match timeout {
        Some(secs) if secs > 0.0 => {
            let budget = Duration::from_secs_f64(secs);
            let (telemetry, elapsed, timed_out) =
                run_with_timeout(budget, move || dispatch(solver, formula, strategy, heuristic));
            if timed_out {
                warn!("solve timed out after {:.3}s", elapsed.as_secs_f64());
            }
            telemetry
        }
        Some(_) => return Err(PutnamError::InvalidTimeout),
        None => dispatch(solver, formula, strategy, heuristic),
    };

    print_telemetry(&telemetry, json)?;
    process::exit(if telemetry.sat { 10 } else { 20 });
}

fn dispatch(
    solver: Solver,
    formula: Formula,
    strategy: EliminationStrategy,
    heuristic: BranchHeuristic,
) -> Telemetry {
    match solver {
        Solver::Resolution => resolution(formula, strategy),
        Solver::Dp => dp(formula, strategy),
        Solver::Dpll => dpll(formula, heuristic),
    }
}

fn print_telemetry(telemetry: &Telemetry, json: bool) -> Result<(), PutnamError> {
    if json {
        println!("{}", serde_json::to_string_pretty(telemetry)?);
    } else {
        println!("{}", if telemetry.sat { "SAT" } else { "UNSAT" });
        if let Some(counts) = &telemetry.clause_counts {
            println!("clause_counts: {counts:?}");
        }
        if let Some(decisions) = telemetry.decisions {
            println!("decisions: {decisions}");
        }
    }
    Ok(())
}

fn generate_file(what: GenerateCommand) -> Result<(), PutnamError> {
    match what {
        GenerateCommand::Php { holes, out } => {
            let (formula, num_vars) = generate::pigeonhole(holes);
            write_formula(&formula, num_vars, &out)
        }
        GenerateCommand::Random { vars, clauses, seed, out } => {
            let formula = generate::random_3sat(vars, clauses, seed);
            write_formula(&formula, vars, &out)
        }
    }
}

fn write_formula(formula: &Formula, num_vars: u32, out: &PathBuf) -> Result<(), PutnamError> {
    let writer = BufWriter::new(File::create(out)?);
    dimacs::emit(formula, num_vars, writer)?;
    info!("wrote {} clauses to {}", formula.len(), out.display());
    Ok(())
}

fn run_bench(dir: PathBuf, timeout_secs: f64, csv_path: PathBuf) -> Result<(), PutnamError> {
    use std::io::Write;

    const ELIMINATION_RUNS: &[(&str, EliminationStrategy)] = &[
        ("mostfreq", EliminationStrategy::MostFreq),
        ("leastfreq", EliminationStrategy::LeastFreq),
    ];
    const BRANCH_RUNS: &[(&str, BranchHeuristic)] = &[
        ("fixed", BranchHeuristic::Fixed),
        ("mostfreq", BranchHeuristic::MostFreq),
        ("jeroslow", BranchHeuristic::Jeroslow),
    ];

    let budget = Duration::from_secs_f64(timeout_secs);
    let mut csv = BufWriter::new(File::create(&csv_path)?);
    writeln!(csv, "instance,solver,option,sat,seconds,timed_out")?;

    let mut entries: Vec<_> = std::fs::read_dir(&dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "cnf").unwrap_or(false))
        .collect();
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        let (formula, _) = dimacs::parse(BufReader::new(File::open(&path)?))?;
        let instance = path.file_name().unwrap().to_string_lossy().into_owned();

        for (label, strategy) in ELIMINATION_RUNS {
            let f = formula.clone();
            let strategy = *strategy;
            let (t, elapsed, timed_out) = run_with_timeout(budget, move || resolution(f, strategy));
            writeln!(csv, "{instance},resolution,{label},{},{:.3},{timed_out}", t.sat, elapsed.as_secs_f64())?;

            let f = formula.clone();
            let (t, elapsed, timed_out) = run_with_timeout(budget, move || dp(f, strategy));
            writeln!(csv, "{instance},dp,{label},{},{:.3},{timed_out}", t.sat, elapsed.as_secs_f64())?;
        }

        for (label, heuristic) in BRANCH_RUNS {
            let f = formula.clone();
            let heuristic = *heuristic;
            let (t, elapsed, timed_out) = run_with_timeout(budget, move || dpll(f, heuristic));
            writeln!(csv, "{instance},dpll,{label},{},{:.3},{timed_out}", t.sat, elapsed.as_secs_f64())?;
        }
    }

    info!("wrote {}", csv_path.display());
    Ok(())
}
