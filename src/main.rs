//! Noughts command-line interface.
//!
//! Generates the tic-tac-toe state space, solves it, and prints the number of
//! states, the number of sweeps, and the value of the initial state.
//!
//! Usage:
//!   noughts [OPTIONS]
//!
//! Options:
//!   --config FILE     JSON configuration file
//!   --start X|O       Player to move first (default: X)
//!   --discount D      Discount factor in [0, 1] (default: 1.0)
//!   --epsilon E       Convergence threshold (default: 1e-5)
//!   --max-sweeps N    Sweep cap before giving up (default: 1000)
//!   --threads N       Worker threads per sweep and for self-play (default: 1)
//!   --position P      Also print the value of position P, e.g. "XX./OO./... X"
//!   --selfplay        Play self-play games against the solution
//!   --games N         Number of self-play games (implies --selfplay)
//!   --seed N          Self-play random seed, 0 for entropy (default: 0)
//!   --json FILE       Write the JSON report to FILE ("-" for stdout)
//!   --quiet           Suppress progress output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use noughts::board::Player;
use noughts::config::{load_config, Config};
use noughts::engine::Engine;
use noughts::protocol::{parse_position, write_report};

/// Command-line options layered on top of the configuration file.
#[derive(Default)]
struct Options {
    config_path: Option<String>,
    start: Option<Player>,
    discount: Option<f64>,
    epsilon: Option<f64>,
    max_sweeps: Option<usize>,
    threads: Option<usize>,
    position: Option<String>,
    games: Option<usize>,
    selfplay: bool,
    seed: Option<u64>,
    json: Option<String>,
    quiet: bool,
    help: bool,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            process::exit(1);
        }
    };
    if opts.help {
        print_usage();
        return;
    }
    if let Err(e) = run(&opts) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(opts: &Options) -> Result<(), String> {
    let config = build_config(opts)?;
    let position = match &opts.position {
        Some(p) => Some(parse_position(p).map_err(|e| format!("invalid --position: {}", e))?),
        None => None,
    };

    let start = Instant::now();
    let engine = Engine::new(config);
    if !opts.quiet {
        eprintln!(
            "Generated {} states ({} terminal) in {:.1}ms",
            engine.space().len(),
            engine.space().terminal_count(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    let solution = if opts.quiet {
        engine.solve(&mut io::sink())
    } else {
        engine.solve(&mut io::stderr())
    }
    .map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let write_err = |e: io::Error| format!("failed to write output: {}", e);

    writeln!(out, "states {}", engine.space().len()).map_err(write_err)?;
    writeln!(out, "sweeps {}", solution.sweeps).map_err(write_err)?;
    writeln!(out, "value {}", solution.initial_value(engine.space())).map_err(write_err)?;

    if let (Some(state), Some(text)) = (position, &opts.position) {
        match engine.evaluate(&solution, &state) {
            Some(pv) => {
                writeln!(out, "position {} value {}", text.trim(), pv.value).map_err(write_err)?;
                for (cell, value) in pv.moves {
                    writeln!(out, "move {} {}", cell, value).map_err(write_err)?;
                }
            }
            None => return Err(format!("position is not reachable: {}", text.trim())),
        }
    }

    if opts.selfplay {
        let summary = engine.self_play(&solution).map_err(|e| e.to_string())?;
        writeln!(
            out,
            "selfplay games {} x_wins {} o_wins {} draws {} mean {}",
            summary.games, summary.x_wins, summary.o_wins, summary.draws, summary.mean_reward
        )
        .map_err(write_err)?;
    }

    match opts.json.as_deref() {
        Some("-") => write_report(&engine.report(&solution), &mut out).map_err(write_err)?,
        Some(path) => {
            let file = File::create(path).map_err(|e| format!("failed to create {}: {}", path, e))?;
            let mut writer = BufWriter::new(file);
            write_report(&engine.report(&solution), &mut writer).map_err(write_err)?;
            if !opts.quiet {
                eprintln!("Wrote report to {}", path);
            }
        }
        None => {}
    }

    out.flush().map_err(write_err)
}

/// Loads the configuration file, if any, and applies flag overrides.
fn build_config(opts: &Options) -> Result<Config, String> {
    let mut config = match &opts.config_path {
        Some(path) => load_config(Path::new(path)).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    if let Some(start) = opts.start {
        config.start = start;
    }
    if let Some(d) = opts.discount {
        config.solver.discount = d;
    }
    if let Some(e) = opts.epsilon {
        config.solver.epsilon = e;
    }
    if let Some(n) = opts.max_sweeps {
        config.solver.max_sweeps = n;
    }
    if let Some(n) = opts.threads {
        config.solver.threads = n;
        config.selfplay.threads = n;
    }
    if let Some(n) = opts.games {
        config.selfplay.games = n;
    }
    if let Some(s) = opts.seed {
        config.selfplay.seed = s;
    }
    config.solver.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let arg = arg.as_str();
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("missing value for {}", flag))
        };
        match arg {
            "--config" => opts.config_path = Some(value(arg)?),
            "--start" => {
                let v = value(arg)?;
                let mut chars = v.chars();
                opts.start = match (chars.next(), chars.next()) {
                    (Some(c), None) => Player::from_symbol(c),
                    _ => None,
                };
                if opts.start.is_none() {
                    return Err(format!("invalid --start value: {}", v));
                }
            }
            "--discount" => opts.discount = Some(parse_value(arg, &value(arg)?)?),
            "--epsilon" => opts.epsilon = Some(parse_value(arg, &value(arg)?)?),
            "--max-sweeps" => opts.max_sweeps = Some(parse_value(arg, &value(arg)?)?),
            "--threads" => opts.threads = Some(parse_value(arg, &value(arg)?)?),
            "--position" => opts.position = Some(value(arg)?),
            "--games" => {
                opts.games = Some(parse_value(arg, &value(arg)?)?);
                opts.selfplay = true;
            }
            "--selfplay" => opts.selfplay = true,
            "--seed" => opts.seed = Some(parse_value(arg, &value(arg)?)?),
            "--json" => opts.json = Some(value(arg)?),
            "--quiet" => opts.quiet = true,
            "--help" | "-h" => opts.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(opts)
}

fn parse_value<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid {} value: {}", flag, raw))
}

fn print_usage() {
    eprintln!("Usage: noughts [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    JSON configuration file");
    eprintln!("  --start X|O      Player to move first (default: X)");
    eprintln!("  --discount D     Discount factor in [0, 1] (default: 1.0)");
    eprintln!("  --epsilon E      Convergence threshold (default: 1e-5)");
    eprintln!("  --max-sweeps N   Sweep cap before giving up (default: 1000)");
    eprintln!("  --threads N      Worker threads (default: 1)");
    eprintln!("  --position P     Also print the value of position P, e.g. \"XX./OO./... X\"");
    eprintln!("  --selfplay       Play self-play games against the solution");
    eprintln!("  --games N        Number of self-play games (implies --selfplay)");
    eprintln!("  --seed N         Self-play random seed, 0 for entropy (default: 0)");
    eprintln!("  --json FILE      Write the JSON report to FILE (\"-\" for stdout)");
    eprintln!("  --quiet          Suppress progress output");
    eprintln!("  --help           Show this help");
}
