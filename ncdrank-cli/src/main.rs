mod config;
mod output;
mod parse;

use clap::Parser;
use ncdrank_core::{FileId, RankSession, Submission};
use rand::{rngs::SmallRng, SeedableRng};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::parse::{parse_verdict, Verdict};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "ncdrank", version, about = "Rank files by pairwise preference, weighted by compression distance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Interactively rank a set of files
    Rank(RankArgs),
    /// Create a default config file at ~/.config/ncdrank/config.toml
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// Files to rank (at least 2)
    files: Vec<PathBuf>,

    /// Stop after this many recorded judgments (default: until 'q')
    #[arg(long)]
    judgments: Option<usize>,

    /// Output JSON instead of table
    #[arg(long)]
    json: bool,

    /// Show standings after every recorded judgment
    #[arg(short, long)]
    verbose: bool,

    /// Seed for pair sampling (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to config file (default: ~/.config/ncdrank/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Read every file into (name, bytes) pairs. Names keep the full path so
/// same-named files from different directories stay distinguishable.
fn load_files(paths: &[PathBuf]) -> Vec<(String, Vec<u8>)> {
    if paths.len() < 2 {
        bail(format!("Need at least 2 files to rank, got {}", paths.len()));
    }
    paths
        .iter()
        .map(|path| {
            let bytes = std::fs::read(path)
                .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", path.display())));
            (path.display().to_string(), bytes)
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default judgment count, output format, etc.");
        }
    }
}

fn name_of(session: &RankSession, id: FileId) -> String {
    session
        .files()
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn run_rank(args: RankArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let target = args.judgments.or(cfg.judgments);
    let json = args.json || cfg.json.unwrap_or(false);
    let verbose = args.verbose || cfg.verbose.unwrap_or(false);

    let files = load_files(&args.files);

    let mut session = RankSession::new();
    session.ingest_files(files);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!(
            "Judging {} files. For each pair enter -2..2 (negative prefers the left \
             file, positive the right), s to skip, q to finish.",
            session.files().len(),
        );
    }

    let mut recorded: usize = 0;
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(target) = target {
            if recorded >= target {
                break;
            }
        }

        let (left, right) = session
            .next_pair_with(&mut rng)
            .unwrap_or_else(|e| bail(e));
        let left_name = name_of(&session, left);
        let right_name = name_of(&session, right);

        println!("\nCompare these two files:");
        println!("  [left]  {left_name}");
        println!("  [right] {right_name}");
        print!("Preference (-2..2, s = skip, q = quit): ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => bail(format!("Failed to read from stdin: {e}")),
            None => break, // EOF ends the session like 'q'
        };

        match parse_verdict(&line) {
            Verdict::Quit => break,
            Verdict::Skip => continue,
            Verdict::Invalid => {
                eprintln!("Enter a number between -2 and 2, s to skip, or q to quit.");
                continue;
            }
            Verdict::Strength(strength) => {
                match session.submit_judgment(left, right, strength) {
                    Ok(Submission::Recorded(standings)) => {
                        recorded += 1;
                        if verbose {
                            eprintln!("Standings after {recorded} judgments:");
                            for (i, r) in standings.iter().enumerate() {
                                eprintln!("  {:>2}. {} ({:.4})", i + 1, r.name, r.score);
                            }
                        }
                    }
                    Ok(Submission::Noop) => {} // zero strength: nothing recorded
                    Err(e) => bail(e),
                }
            }
        }
    }

    let rankings = session.current_ranking();
    let judged = output::judgment_counts(&session);

    if json {
        output::print_json(&rankings, &judged, recorded);
    } else {
        output::print_table(&rankings, &judged, recorded);
    }
}
