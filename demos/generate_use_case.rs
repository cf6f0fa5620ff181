//! Generate a use-case specification from a JSON form.
//!
//! ```text
//! cargo run --example generate_use_case -- form.json -o out/ --config docgen.yaml
//! RUST_LOG=usecase_docgen=debug cargo run --example generate_use_case -- form.json
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use usecase_docgen::ooxml::docx::{DocumentSummary, InspectedBlock};
use usecase_docgen::{DocumentConfig, UseCaseForm, generate_document};

#[derive(Parser, Debug)]
#[command(about = "Generate a .docx use-case specification from a JSON form")]
struct Args {
    /// JSON form files
    #[arg(required = true)]
    forms: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the structure of each generated document
    #[arg(long)]
    inspect: bool,
}

fn print_summary(summary: &DocumentSummary) {
    let counts = summary.counts();
    println!(
        "  {} paragraphs, {} tables, {} images, {} lists",
        counts.paragraphs, counts.tables, counts.images, summary.list_instances
    );
    for block in &summary.blocks {
        match block {
            InspectedBlock::Paragraph(p) => match (p.heading_level(), p.level) {
                (Some(rank), _) => println!("  {}{}", "#".repeat(rank as usize), p.text),
                (None, Some(level)) => println!("  {}- {}", "  ".repeat(level as usize + 1), p.text),
                (None, None) if p.has_image => println!("    [image]"),
                (None, None) => println!("    {}", p.text),
            },
            InspectedBlock::Table(t) => {
                println!("    [table {}x{}]", t.rows.len(), t.columns);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DocumentConfig::from_yaml_file(path)?,
        None => DocumentConfig::default(),
    };
    std::fs::create_dir_all(&args.output)?;

    for path in &args.forms {
        let json = std::fs::read_to_string(path)?;
        let form = UseCaseForm::from_json(&json)?;
        let document = generate_document(&form, &config)?;

        let target = args.output.join(&document.file_name);
        std::fs::write(&target, &document.bytes)?;
        println!("{} -> {} ({} bytes)", path.display(), target.display(), document.bytes.len());

        if args.inspect {
            print_summary(&DocumentSummary::from_bytes(&document.bytes)?);
        }
    }

    Ok(())
}
