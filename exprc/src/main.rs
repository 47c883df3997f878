mod cli;
mod repl;

use std::path::PathBuf;

use clap::Parser;
use expr_core::{parse_source, read_source, run, scan_source};

/// Scans, parses and evaluates an expression source file,
/// or starts the interactive loop when no path is given
#[derive(Parser)]
#[command(name = "exprc")]
struct Args {
    /// Path of the source file (at most one)
    paths: Vec<PathBuf>,
    /// Print the scanned tokens instead of evaluating
    #[arg(short, long, default_value_t = false)]
    tokens: bool,
    /// Print the parsed tree instead of evaluating
    #[arg(long, default_value_t = false)]
    print_ast: bool,
}

fn main() {
    let args = Args::parse();

    match args.paths.as_slice() {
        [] => {
            ctrlc::set_handler(|| std::process::exit(0))
                .expect("setting interrupt handler");

            let _ = repl::start();
        },
        [path] => run_path(path.clone(), args.tokens, args.print_ast),
        _ => {
            eprintln!("Usage: exprc [path]");
            std::process::exit(64);
        }
    }
}

fn run_path(path: PathBuf, tokens: bool, print_ast: bool) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    cli::print_running(&path.to_string_lossy());
    let start = std::time::Instant::now();

    let outcome = read_source(&path).and_then(|src| {
        if tokens {
            let tokens = scan_source(path.clone(), &src)?;

            for token in &tokens {
                println!("{token}");
            }
        } else if print_ast {
            let expr = parse_source(path.clone(), &src)?;

            println!("{expr}");
        } else {
            let value = run(path.clone(), &src)?;

            println!("{value}");
        }

        Ok(())
    });

    if let Err(err) = outcome {
        err.pretty(&mut buf);
        buf_writer
            .print(&buf)
            .expect("Writing diagnostics to stderr");

        std::process::exit(err.exit_code());
    }

    cli::print_evaluated(std::time::Instant::now() - start);
}
