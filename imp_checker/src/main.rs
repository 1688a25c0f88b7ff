use imp_checker::config::runtime::RuntimePreferences;
use imp_checker::file_processor::{self, SourceFile};
use imp_checker::pipeline::CheckResult;
use imp_checker::{logging, pipeline};
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.imp> [more files...] [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        return ExitCode::FAILURE;
    }

    if args[1] == "--help" {
        print_help(&args[0]);
        return ExitCode::SUCCESS;
    }

    let (files, options) = parse_options(&args[1..]);

    let mut preferences = match options.config_path {
        Some(ref path) => match RuntimePreferences::load(Path::new(path)) {
            Ok(preferences) => preferences,
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        },
        None => RuntimePreferences::default(),
    };
    options.apply(&mut preferences);

    if let Err(error) = logging::init_global_logging(&preferences.logging) {
        eprintln!("Error: {}", error);
        return ExitCode::FAILURE;
    }

    if files.is_empty() {
        eprintln!("Error: No input files given");
        return ExitCode::FAILURE;
    }

    let mut clean = true;
    for file in &files {
        if !process_single_file(Path::new(file), &preferences) {
            clean = false;
        }
    }

    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Command line toggles layered over the runtime preferences
#[derive(Debug, Default)]
struct CliOptions {
    quiet: bool,
    no_echo: bool,
    no_tokens: bool,
    structured_log: bool,
    config_path: Option<String>,
}

impl CliOptions {
    fn apply(&self, preferences: &mut RuntimePreferences) {
        if self.quiet {
            preferences.report.echo_input = false;
            preferences.report.dump_tokens = false;
            preferences.report.show_confirmations = false;
        }
        if self.no_echo {
            preferences.report.echo_input = false;
        }
        if self.no_tokens {
            preferences.report.dump_tokens = false;
        }
        if self.structured_log {
            preferences.logging.use_structured_logging = true;
        }
    }
}

fn parse_options(args: &[String]) -> (Vec<String>, CliOptions) {
    let mut files = Vec::new();
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--quiet" => options.quiet = true,
            "--no-echo" => options.no_echo = true,
            "--no-tokens" => options.no_tokens = true,
            "--structured-log" => options.structured_log = true,
            "--config" => {
                if i + 1 < args.len() {
                    options.config_path = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Warning: --config requires a path");
                }
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            file => files.push(file.to_string()),
        }
        i += 1;
    }

    (files, options)
}

fn print_help(program_name: &str) {
    println!("Imp Checker v{}", env!("CARGO_PKG_VERSION"));
    println!("Batch lexical and syntax checker for the Imp mini-language");
    println!();
    println!("USAGE:");
    println!("    {} <input.imp> [more files...] [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.imp>    One or more source files to check");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --quiet             Only print diagnostics");
    println!("    --no-echo           Don't echo the input text");
    println!("    --no-tokens         Don't dump the token table");
    println!("    --structured-log    Emit log events as JSON");
    println!("    --config PATH       Load preferences from a TOML file");
    println!();
    println!("OUTPUT:");
    println!("    Per file: the input text, the token table, one confirmation");
    println!("    per valid statement, and every lexical and syntax finding");
    println!("    sorted by source line. Exit code 1 if anything was found.");
}

/// Check one file and print its report. Returns false if the file produced
/// findings or failed to load.
fn process_single_file(path: &Path, preferences: &RuntimePreferences) -> bool {
    if !preferences.report_is_quiet() {
        println!();
        println!(
            " ------------------------------------------ {} --------------------------------------------",
            path.display()
        );
        println!();
    }

    let file = match file_processor::load_source(path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Error: {}", error);
            return false;
        }
    };

    let result = pipeline::check_source(file.source());
    print_report(&file, &result, preferences);

    result.is_clean()
}

fn print_report(file: &SourceFile, result: &CheckResult, preferences: &RuntimePreferences) {
    if preferences.report.echo_input {
        println!("Input: {}", file.source());
    }

    if preferences.report.dump_tokens {
        println!(" -------------------------------------  Tokens  -----------------------------------------");
        for token in result.tokens() {
            let lexeme = token
                .lexeme()
                .map(|lexeme| format!("{:?}", lexeme))
                .unwrap_or_else(|| "-".to_string());
            println!(
                " Value: {} Type: {} Lexeme: {}",
                token.value(),
                token.kind(),
                lexeme
            );
        }
        println!();
    }

    if preferences.report.show_confirmations {
        println!(" ------------------------------------- Syntax analysis ----------------------------------");
        for confirmation in result.confirmations() {
            println!("{}", confirmation);
        }
        println!();
    }

    for diagnostic in result.diagnostics() {
        println!("{}", diagnostic);
    }
}

trait ReportQuiet {
    fn report_is_quiet(&self) -> bool;
}

impl ReportQuiet for RuntimePreferences {
    fn report_is_quiet(&self) -> bool {
        !self.report.echo_input && !self.report.dump_tokens && !self.report.show_confirmations
    }
}
