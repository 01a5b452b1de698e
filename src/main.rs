use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser};
use log::LevelFilter;
use reckon::{
    interpreter::session::Session,
    repl::{Ending, run},
};

/// reckon is an interactive integer calculator with variables, parentheses
/// and operator precedence.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read input lines from this file instead of standard input.
    script: Option<PathBuf>,

    /// Text printed before every line is read.
    #[arg(short, long)]
    prompt: Option<String>,

    /// Log more details to standard error. Repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let mut session = Session::new();
    let mut output = io::stdout().lock();
    let prompt = args.prompt.as_deref();

    let ending = if let Some(path) = &args.script {
        let file = File::open(path).unwrap_or_else(|e| {
                                       eprintln!("Failed to read the script '{}': {e}",
                                                 path.display());
                                       process::exit(1);
                                   });
        run(&mut session, BufReader::new(file), &mut output, prompt)
    } else {
        run(&mut session, io::stdin().lock(), &mut output, prompt)
    };

    match ending {
        Ok(Ending::Exit | Ending::EndOfInput) => {},
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
