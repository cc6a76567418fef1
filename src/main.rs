use clap::{CommandFactory, Parser, Subcommand};
use side_diff::{Diff, RenderOptions, read_source, render, to_json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "side-diff")]
#[command(about = "Render unified diffs as side-by-side plain text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a diff as two aligned columns (old left, new right)
    Render {
        /// Diff file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Width of each column, line-number gutter included
        #[arg(
            short,
            long,
            env = "SIDE_DIFF_WIDTH",
            default_value_t = 80,
            value_parser = clap::value_parser!(u16).range(1..)
        )]
        width: u16,
        /// Leave out line numbers
        #[arg(long)]
        no_line_numbers: bool,
    },
    /// Print the parsed diff structure as JSON
    Parse {
        /// Diff file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Re-emit the diff as normalized unified diff text
    Normalize {
        /// Diff file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Summarize added and deleted lines per file
    Stat {
        /// Diff file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn load(file: Option<PathBuf>) -> Result<Diff, side_diff::SideDiffError> {
    Ok(Diff::parse(&read_source(file.as_deref())?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            width,
            no_line_numbers,
        } => {
            let options = RenderOptions {
                total_width: usize::from(width),
                show_line_numbers: !no_line_numbers,
            };
            println!("{}", render::format(&load(file)?, &options));
        }
        Commands::Parse { file } => {
            println!("{}", to_json(&load(file)?)?);
        }
        Commands::Normalize { file } => {
            print!("{}", load(file)?);
        }
        Commands::Stat { file } => {
            let diff = load(file)?;
            for file_diff in &diff.files {
                println!("{} | {}", file_diff.display_path(), file_diff.stat());
            }
            println!("{} file(s) changed, {}", diff.files.len(), diff.stat());
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "side-diff", &mut std::io::stdout());
        }
    }

    Ok(())
}
