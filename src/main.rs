use std::{fs, io, process};

use clap::Parser;

/// tortue is a tiny turtle-graphics scripting language. It evaluates a
/// program and emits drawing primitives on stdout; `print` output and error
/// diagnostics go to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tortue to read the program from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed program back as source instead of running it.
    #[arg(long)]
    pretty: bool,

    /// Fix the seed used by `random`, for reproducible drawings.
    #[arg(long)]
    seed: Option<u64>,

    /// The program text, or a path to it with `--file`.
    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.pretty {
        match tortue::parse_program(&script) {
            Ok(ast) => print!("{ast}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
        return;
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    match tortue::run_program(&script, &mut out, &mut diag, args.seed) {
        Ok(true) => {},
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
