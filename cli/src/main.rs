//! vaccert CLI - vaccination certificate data extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use vaccert::{
    detect_format, extract_lines, parse_bytes_with_options, parse_file_with_options, render,
    JsonFormat, ParseOptions,
};

#[derive(Parser)]
#[command(name = "vaccert")]
#[command(version)]
#[command(about = "Extract personal and vaccination data from certificate PDFs", long_about = None)]
struct Cli {
    /// Input certificate PDF
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output text file (windows-1251)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a certificate to a windows-1251 text file
    Convert {
        /// Input certificate PDF
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output text file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Leave fields absent instead of failing on missing anchors
        #[arg(long)]
        lenient: bool,
    },

    /// Extract certificate data as JSON
    Json {
        /// Input certificate PDF
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Leave fields absent instead of failing on missing anchors
        #[arg(long)]
        lenient: bool,
    },

    /// Show document information
    Info {
        /// Input certificate PDF
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Convert many certificates in parallel
    Batch {
        /// Input certificate PDFs
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Leave fields absent instead of failing on missing anchors
        #[arg(long)]
        lenient: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            lenient,
        }) => cmd_convert(&input, &output, lenient),
        Some(Commands::Json {
            input,
            output,
            compact,
            lenient,
        }) => cmd_json(&input, output.as_deref(), compact, lenient),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Batch {
            inputs,
            output,
            lenient,
        }) => cmd_batch(&inputs, &output, lenient),
        None => {
            // Default behavior: convert when both paths are given
            match (cli.input, cli.output) {
                (Some(input), Some(output)) => cmd_convert(&input, &output, false),
                _ => {
                    println!("{}", "Usage: vaccert <FILE> <OUTPUT>".yellow());
                    println!("       vaccert --help for more information");
                    Ok(())
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(lenient: bool) -> ParseOptions {
    if lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    }
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = parse_file_with_options(input, parse_options(lenient))?;
    fs::write(output, render::to_cp1251(&record))?;

    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = parse_file_with_options(input, parse_options(lenient))?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&record, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    match detect_format(&data) {
        Some(format) => println!("{}: {}", "Format".bold(), format),
        None => println!("{}: {}", "Format".bold(), "no %PDF header".yellow()),
    }

    let lines = extract_lines(&data);
    println!("{}: {}", "Text lines".bold(), lines.len());

    let record = parse_bytes_with_options(&data, ParseOptions::new().lenient())?;

    println!();
    println!("{}", "Extracted Fields".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let labels = [
        "Last name",
        "First name",
        "Middle name",
        "Birthday",
        "Sex",
        "Passport",
        "Last vaccination date",
        "Last vaccine name",
    ];
    for (label, field) in labels.iter().zip(record.fields()) {
        match field {
            Some(value) => println!("{}: {}", label.bold(), value),
            None => println!("{}: {}", label.bold(), "absent".dimmed()),
        }
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing certificates...");
    let results = vaccert::parse_batch(inputs, &parse_options(lenient));

    let mut failed = 0;
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(record) => {
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                let path = output_dir.join(format!("{}.txt", stem));
                fs::write(&path, render::to_cp1251(&record))?;
            }
            Err(e) => {
                failed += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), input.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    let converted = inputs.len() - failed;
    println!(
        "\n{} {} converted, {} failed",
        "Batch complete:".green().bold(),
        converted,
        failed
    );

    Ok(())
}
