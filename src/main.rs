use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use attune::adaptive::QuickSetOptions;
use attune::{AssessmentEngine, ResponseMap};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a response file and print the attachment profile
    Score {
        /// Response file (JSON or YAML map of question id -> 1-5)
        responses: PathBuf,
        /// Score core and scenario items together
        #[arg(long)]
        scenarios: bool,
        /// Print the outcome as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write a JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the most useful question to ask next
    Next {
        responses: PathBuf,
        /// Choose from core and scenario items
        #[arg(long)]
        scenarios: bool,
    },
    /// Assemble a short adaptive question set
    QuickSet {
        /// Maximum number of items, quality checks included
        #[arg(long, default_value_t = 8)]
        total: usize,
        /// Draw from the core catalog before scenario items
        #[arg(long)]
        core_first: bool,
        /// Leave out the attention and social-desirability checks
        #[arg(long)]
        no_quality_checks: bool,
        /// Seed for reproducible sets
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Assemble the six-item mini screener
    Screener {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pick follow-up questions for a partially answered set
    FollowUp {
        /// Answers so far; every key counts as already asked
        responses: PathBuf,
        /// Maximum number of follow-ups
        #[arg(long, default_value_t = 3)]
        max: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the active question bank
    Bank {
        /// Only validate the bank and report problems
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "attune")]
#[command(about = "Adaptive attachment-style questionnaire scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/attune/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn load_responses_or_exit(path: &Path) -> ResponseMap {
    match attune::responses::load_responses(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` picks debug over info.
fn log_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match attune::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = attune::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let engine = match config.engine() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Question bank error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let bank_check = attune::bank::validate_bank(engine.bank());
    if let Commands::Bank { validate: true } = cli.command {
        match bank_check {
            Ok(()) => {
                println!("Question bank OK ({} items)", engine.bank().all().count());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(errors) => {
                eprintln!("Question bank errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }
        }
    }
    if let Err(errors) = bank_check {
        eprintln!("Question bank errors ({}), run `attune bank --validate`", errors.len());
        std::process::exit(EXIT_CONFIG);
    }

    tracing::debug!(items = engine.bank().all().count(), "engine ready");

    run_command(cli.command, &engine);
    std::process::exit(EXIT_SUCCESS);
}

fn run_command(command: Commands, engine: &AssessmentEngine) {
    let use_colors = attune::output::should_use_colors();

    match command {
        Commands::Score {
            responses,
            scenarios,
            json,
            output,
        } => {
            let responses = load_responses_or_exit(&responses);
            let outcome = if scenarios {
                engine.run_with_items(&responses, &engine.bank().scored_items())
            } else {
                engine.run(&responses)
            };

            if json {
                match serde_json::to_string_pretty(&outcome) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Failed to serialize outcome: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                println!("{}", attune::output::format_outcome(&outcome, use_colors));
            }

            if let Some(path) = output {
                let report = attune::output::Report::new(outcome);
                if let Err(e) = attune::output::save_report(&path, &report) {
                    eprintln!("Report error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                tracing::info!("report written to {}", path.display());
            }
        }
        Commands::Next {
            responses,
            scenarios,
        } => {
            let responses = load_responses_or_exit(&responses);
            let pool = if scenarios {
                engine.bank().scored_items()
            } else {
                engine.bank().core.clone()
            };
            match engine.pick_next(&responses, &pool) {
                Some(q) => println!("{}", attune::output::format_question_detail(q, use_colors)),
                None => println!("Assessment complete: every question has an answer."),
            }
        }
        Commands::QuickSet {
            total,
            core_first,
            no_quality_checks,
            seed,
        } => {
            let options = QuickSetOptions {
                total,
                prefer_scenarios: !core_first,
                include_quality_checks: !no_quality_checks,
            };
            let set = engine.build_quick_set(&options, &mut make_rng(seed));
            println!("{}", attune::output::format_question_list(&set, use_colors));
        }
        Commands::Screener { seed } => {
            let set = engine.build_mini_screener(&mut make_rng(seed));
            println!("{}", attune::output::format_question_list(&set, use_colors));
        }
        Commands::FollowUp {
            responses,
            max,
            seed,
        } => {
            let responses = load_responses_or_exit(&responses);
            let mut asked: Vec<String> = responses.keys().cloned().collect();
            asked.sort();
            let set = engine.build_follow_up_set(&responses, &asked, max, &mut make_rng(seed));
            println!("{}", attune::output::format_question_list(&set, use_colors));
        }
        Commands::Bank { .. } => {
            let items: Vec<_> = engine.bank().all().collect();
            println!("{}", attune::output::format_question_list(&items, use_colors));
        }
    }
}
