use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use lisma::eval_source;

/// lisma is a minimal, easy to use Lisp-style calculator language for
/// integer arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lisma to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script to run. When omitted, lisma starts an interactive
    /// session reading expressions from standard input.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        interactive();
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

    for line in script.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match eval_source(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }
}

/// Runs the interactive read-evaluate-print loop.
///
/// Each line is evaluated to completion before the next is accepted.
/// Failing expressions print their rendered error and the session
/// continues; the loop ends on end of input.
fn interactive() {
    println!("Press Ctrl+c to Exit\n");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("lisma> ");

        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();

        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        if line.trim().is_empty() {
            continue;
        }

        match eval_source(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
