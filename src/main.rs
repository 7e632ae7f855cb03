use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use lumen::{interpreter::scope::Context, run_source};

/// lumen is a small, friendly scripting language for getting ideas onto
/// the screen.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lumen to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run, or a path to one with --file. Omit it to start
    /// an interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        prompt();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let context = Context::new();
    if let Err(e) = run_source(&script, &context) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt.
///
/// One global context lives for the whole session, so bindings made on one
/// line are visible on the next. Each line prints its value unless the
/// value is null; diagnostics go to stderr and do not end the session.
fn prompt() {
    let context = Context::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("lumen> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        match run_source(source, &context) {
            Ok(value) if !value.is_null() => println!("{value}"),
            Ok(_) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}
