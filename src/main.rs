// Passport field extraction and invitation letter CLI

use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use passport_invite::{
    models::{InvitationData, PassportFields, NOT_FOUND},
    processing::{InvitationLetter, PassportFieldParser},
    utils::{OcrConfig, PassportError},
    validation::FormatValidator,
    PassportExtractor,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

// How many OCR lines --show-lines prints
const DIAGNOSTIC_LINE_LIMIT: usize = 20;

#[derive(Parser)]
#[command(name = "passport-invite", version, about = "Extract passport fields and generate invitation letters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run OCR on a passport image (.jpg, .jpeg, .png) and extract its fields
    Extract {
        image: PathBuf,
        /// Tesseract language, e.g. "eng" or "eng+hin"
        #[arg(long)]
        lang: Option<String>,
        /// Directory holding the Tesseract traineddata files
        #[arg(long)]
        tessdata: Option<String>,
        #[arg(long)]
        json: bool,
        /// Print the first OCR lines to stderr
        #[arg(long)]
        show_lines: bool,
    },
    /// Parse raw OCR text from FILE, or stdin when FILE is omitted
    Parse {
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        show_lines: bool,
    },
    /// Print the invitation letter for the given (corrected) fields
    Letter {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, default_value = NOT_FOUND)]
        date_of_birth: String,
        #[arg(long)]
        place_of_birth: String,
        #[arg(long)]
        passport_number: String,
        #[arg(long)]
        letter_number: Option<String>,
    },
}

fn build_parser(show_lines: bool) -> PassportFieldParser {
    let parser = PassportFieldParser::new();
    if !show_lines {
        return parser;
    }
    parser.with_observer(|lines| {
        eprintln!("OCR lines ({} total):", lines.len());
        for (i, line) in lines.iter().take(DIAGNOSTIC_LINE_LIMIT).enumerate() {
            eprintln!("  {:>2}: {}", i + 1, line);
        }
    })
}

// Print the extracted fields as a report or as JSON
fn print_fields(fields: &PassportFields, json: bool) -> Result<(), PassportError> {
    if json {
        let out = serde_json::to_string_pretty(fields)
            .map_err(|e| PassportError::ValidationError(format!("Failed to serialize fields: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!("\n===============================================");
    println!("      EXTRACTED PASSPORT DATA");
    println!("===============================================\n");
    println!("  First Name: {}", fields.first_name);
    println!("  Last Name: {}", fields.last_name);
    println!("  Date of Birth: {}", fields.date_of_birth);
    println!("  Place of Birth: {}", fields.place_of_birth);
    println!("  Passport Number: {}", fields.passport_number);

    if !fields.has_date_of_birth() || !fields.has_place_of_birth() {
        println!("\nSome optional fields were not found; please fill them in before generating the letter.");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), PassportError> {
    match cli.command {
        Command::Extract { image, lang, tessdata, json, show_lines } => {
            let mut config = OcrConfig::from_env();
            if let Some(lang) = lang {
                config = config.with_language(lang);
            }
            if let Some(tessdata) = tessdata {
                config = config.with_tessdata_prefix(tessdata);
            }

            info!("Extracting passport data from {:?}", image);
            let extractor = PassportExtractor::new(config).with_parser(build_parser(show_lines));
            let fields = extractor.extract_file(&image)?;
            print_fields(&fields, json)
        }
        Command::Parse { file, json, show_lines } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let fields = build_parser(show_lines).parse(&text)?;
            print_fields(&fields, json)
        }
        Command::Letter {
            first_name,
            last_name,
            date_of_birth,
            place_of_birth,
            passport_number,
            letter_number,
        } => {
            let data = InvitationData {
                first_name,
                last_name,
                date_of_birth,
                place_of_birth,
                passport_number,
            };
            FormatValidator::validate(&data)?;

            let mut letter = InvitationLetter::new(&data);
            if let Some(number) = letter_number {
                letter = letter.with_letter_number(number);
            }

            println!("{}\n", letter.filename());
            println!("{}", letter.render_text(Local::now().date_naive()));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
