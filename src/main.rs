use clap::CommandFactory;
use colored::*;
use env_logger::{Builder, Env, Target};
use log::info;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;
use strmatch::compare::compare_engines;
use strmatch::config::Config;
use strmatch::demo::demo_lines;
use strmatch::output::{format_offsets, OutputFormatter};
use strmatch::search_algorithms::{SearchAlgorithm, SearchAlgorithmFactory};
use strmatch::{collect_files, search_files, Cli, Commands, Parser, Result, SearchError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    setup_logging(cli)?;

    let start_time = Instant::now();
    info!("Application started with command: {:?}", cli.command);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if !config.display.color {
        colored::control::set_override(false);
    }

    let mut options = config.search_options()?;
    if let Some(heuristics) = cli.heuristics {
        options.heuristics = heuristics;
    }
    let default_algorithm = config.search.default_algorithm;

    match &cli.command {
        Commands::Find {
            pattern,
            text,
            algorithm,
        } => {
            let algorithm = algorithm.unwrap_or(default_algorithm);
            let engine = SearchAlgorithmFactory::create::<u8>(algorithm, &options);
            let offsets = engine.search(text.as_bytes(), pattern.as_bytes())?;
            println!("{}", format_offsets(&offsets));
        }

        Commands::Search {
            pattern,
            paths,
            algorithm,
            recursive,
            hidden,
            output_format,
        } => {
            let algorithm = algorithm.unwrap_or(default_algorithm);
            let collected = collect_files(paths, *recursive, *hidden);
            info!("Searching {} files with {algorithm}", collected.files.len());

            let mut report = search_files(&collected.files, pattern.as_bytes(), algorithm, &options);
            report.errors = collected.errors.into_iter().chain(report.errors).collect();
            print!(
                "{}",
                OutputFormatter::new(*output_format).format_results(&report.matches, pattern)
            );
            if config.display.show_timing {
                eprintln!(
                    "{}",
                    format!(
                        "Searched {} files in {:.2?}",
                        report.files_searched,
                        start_time.elapsed()
                    )
                    .dimmed()
                );
            }

            if !report.errors.is_empty() {
                eprintln!("\n{}", "Errors encountered during processing:".red().bold());
                for err in &report.errors {
                    eprintln!("{}", err.to_string().red());
                }
                return Err(SearchError::Other(format!(
                    "{} paths could not be searched",
                    report.errors.len()
                )));
            }
        }

        Commands::Compare {
            pattern,
            text,
            file,
        } => {
            let haystack = match (text, file) {
                (Some(text), _) => text.as_bytes().to_vec(),
                (None, Some(path)) => fs::read(path)?,
                (None, None) => {
                    return Err(SearchError::Other("compare needs a text or --file".to_string()))
                }
            };

            let comparison = compare_engines(&haystack, pattern.as_bytes(), &options)?;
            for run in &comparison.runs {
                let mut line = format!("{:<12} {}", run.name, format_offsets(&run.offsets));
                if config.display.show_timing {
                    line.push_str(&format!(" ({:.2?})", run.elapsed).dimmed().to_string());
                }
                println!("{line}");
            }

            if comparison.agrees() {
                println!("{}", "All engines agree".green());
            } else {
                let names: Vec<_> = comparison.dissenters().iter().map(|r| r.name).collect();
                return Err(SearchError::Other(format!(
                    "engines disagree: {}",
                    names.join(", ")
                )));
            }
        }

        Commands::Demo { algorithm } => {
            let algorithms = match algorithm {
                Some(a) => vec![*a],
                None => SearchAlgorithm::ALL.to_vec(),
            };
            for (i, algorithm) in algorithms.iter().enumerate() {
                if algorithms.len() > 1 {
                    if i > 0 {
                        println!();
                    }
                    println!("{}", format!("[{algorithm}]").cyan().bold());
                }
                for line in demo_lines(*algorithm, &options)? {
                    println!("{line}");
                }
            }
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "strmatch", &mut std::io::stdout());
        }
    }

    info!(
        "Application finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir)?;
            }
        }
        let log_file = fs::File::create(log_path)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| SearchError::Other(e.to_string()))?;
    Ok(())
}
