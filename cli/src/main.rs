//! ankigen CLI - generate Anki flashcard decks from PDF documents

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ankigen::generate::{generate_section, AnthropicClient, GenerateOptions};
use ankigen::output::write_tsv_file;
use ankigen::{extract, ExtractOptions, PdfSource};

#[derive(Parser)]
#[command(name = "ankigen")]
#[command(version)]
#[command(about = "Generate Anki flashcards from a PDF using Claude", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output TSV file (default: <pdf_name>_flashcards.tsv)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model to use
    #[arg(long, default_value = "claude-sonnet-4-5")]
    model: String,

    /// Maximum flashcards per section
    #[arg(long)]
    max_cards: Option<usize>,

    /// Print the detected sections and exit without generating cards
    #[arg(long)]
    sections: bool,

    /// Maximum characters per model request
    #[arg(long, default_value_t = 80_000)]
    max_chunk_chars: usize,

    /// Overlap in characters between consecutive chunks
    #[arg(long, default_value_t = 2_000)]
    chunk_overlap: usize,

    /// Font-size ratio over the median that marks a heading
    #[arg(long, default_value_t = 1.2)]
    heading_ratio: f32,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let extract_options = ExtractOptions::new()
        .with_heading_ratio(cli.heading_ratio)
        .with_max_chunk_len(cli.max_chunk_chars)
        .with_chunk_overlap(cli.chunk_overlap);

    println!("Extracting sections from: {}", cli.input.display());
    let source = PdfSource::open(&cli.input)?;
    let sections = extract::extract_sections(&source, &extract_options)?;
    println!("Found {} section(s).", sections.len());

    if cli.sections {
        for section in &sections {
            println!(
                "  pages {:>4}-{:<4} {:>8} chars  {}",
                section.start_page,
                section.end_page,
                section.text.chars().count(),
                section.title.bold()
            );
        }
        return Ok(());
    }

    let api_key = cli.api_key.clone().ok_or(
        "provide an API key via --api-key or the ANTHROPIC_API_KEY environment variable",
    )?;

    let gen_options = GenerateOptions::new(&cli.model).with_max_cards(cli.max_cards);
    let client = AnthropicClient::new(api_key, &gen_options);

    let pb = ProgressBar::new(sections.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut deck = Vec::new();
    for section in &sections {
        pb.set_message(section.title.clone());
        let cards = generate_section(&client, section, &extract_options, &gen_options)?;
        pb.inc(1);
        deck.extend(cards);
    }
    pb.finish_and_clear();

    if deck.is_empty() {
        println!("{}", "No flashcards were generated.".yellow());
        return Ok(());
    }

    let output = cli.output.clone().unwrap_or_else(|| {
        let stem = cli.input.file_stem().unwrap_or_default().to_string_lossy();
        cli.input
            .with_file_name(format!("{}_flashcards.tsv", stem))
    });
    write_tsv_file(&output, &deck)?;

    println!(
        "{} {} flashcards written to: {}",
        "Done!".green().bold(),
        deck.len(),
        output.display()
    );
    Ok(())
}
