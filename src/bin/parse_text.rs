// Reads raw OCR text from stdin and prints the parsed passport fields as JSON.
use passport_invite::PassportFieldParser;
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("Failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let parser = PassportFieldParser::new().with_observer(|lines| {
        log::debug!("Extracted lines: {:?}", &lines[..lines.len().min(20)]);
    });

    match parser.parse(&text) {
        Ok(fields) => match serde_json::to_string(&fields) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize fields: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
