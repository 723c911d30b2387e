//! Quill CLI

use quillc::commands::{lex_file, parse_file, run_file, run_repl};
use quillc::{init_tracing, RunConfig, LOG_ENV};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut config = RunConfig::new();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--tokens" || arg == "-t" {
                    config.dump_tokens = true;
                } else if arg == "--interactive" || arg == "-i" {
                    config.interactive_input = true;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("Usage: quill run <file.quill> [--tokens] [--interactive]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --tokens, -t        Print the token stream before running");
                eprintln!("  --interactive, -i   Let input() prompt and read stdin");
                std::process::exit(1);
            };

            run_file(path, &config);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file.quill>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: quill parse <file.quill>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "repl" => {
            run_repl();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("quill"))
            {
                run_file(command, &RunConfig::new());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Quill interpreter");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.quill>     Run a Quill program");
    println!("  lex <file.quill>     Tokenize and display tokens");
    println!("  parse <file.quill>   Parse and display the statement tree");
    println!("  repl                 Start the interactive console");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --tokens, -t         Print the token stream before running");
    println!("  --interactive, -i    Let input() prompt and read stdin");
    println!();
    println!("Environment:");
    println!("  {LOG_ENV}=<filter>    Log filter for stderr (default: warn)");
    println!();
    println!("Examples:");
    println!("  quill run main.quill");
    println!("  quill main.quill                # Same as run");
    println!("  quill run main.quill --tokens");
    println!("  quill repl");
}
