//! Extract structured records from positioned-fragment XML.
//!
//! Reads a pdftohtml-style XML file, reconstructs the table and writes one
//! JSON record per accepted row to stdout; a processing summary goes to
//! stderr. Fetching documents and persisting records stay with the caller —
//! this binary is the thinnest possible driver around the library.
//!
//! Usage:
//!   cargo run --bin extract_records -- data.xml
//!   cargo run --bin extract_records -- --profile finance-pdf-legacy data.xml

use retable::{profiles, xml, Error, Extractor, Profile};
use std::fs;
use std::path::PathBuf;
use std::process;

struct CliConfig {
    input: PathBuf,
    profile: String,
}

impl CliConfig {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut profile = "finance-pdf-2014".to_string();
        let mut input = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--profile" | "-p" => {
                    i += 1;
                    if i < args.len() {
                        profile = args[i].clone();
                    }
                },
                "--help" | "-h" => return None,
                other => input = Some(PathBuf::from(other)),
            }
            i += 1;
        }

        Some(Self {
            input: input?,
            profile,
        })
    }
}

fn usage() -> ! {
    eprintln!("Usage: extract_records [--profile NAME] FILE");
    eprintln!();
    eprintln!("Reads pdftohtml-style positioned-fragment XML from FILE and writes");
    eprintln!("one JSON record per accepted row to stdout.");
    eprintln!();
    eprintln!("Built-in profiles: {}", profiles::names().join(", "));
    process::exit(2);
}

fn run(config: &CliConfig, profile: Profile) -> retable::Result<()> {
    let extractor = Extractor::new(profile)?;

    let data = fs::read_to_string(&config.input)?;
    let pages = xml::parse_pages(&data)?;
    let page_count = pages.len();

    let result = extractor.process_document(pages);
    let rows = result.total_rows();
    let rejected = result.total_rejected();

    let mut emitted = 0usize;
    for record in result.records() {
        let line = serde_json::to_string(record)
            .map_err(|e| Error::Malformed(format!("serializing record {}: {}", record.id, e)))?;
        println!("{}", line);
        emitted += 1;
    }

    eprintln!(
        "Processed {} pages and {} rows. Emitted {} records, skipped {} invalid rows.",
        page_count, rows, emitted, rejected
    );

    Ok(())
}

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Some(config) => config,
        None => usage(),
    };

    let profile = match profiles::by_name(&config.profile) {
        Some(profile) => profile,
        None => {
            eprintln!(
                "Unknown profile '{}' (built-in: {})",
                config.profile,
                profiles::names().join(", ")
            );
            process::exit(2);
        },
    };

    if let Err(err) = run(&config, profile) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
