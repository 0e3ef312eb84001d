use radixa::get_result;
use clap::Parser;

/// radixa converts integers between bases and rounds numbers by hand.
///
/// The argument is a script with one expression per line, for example
/// `convert(255, 16, "0123456789ABCDEF")`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pipe mode is a feature that automatically prints out the last printable
    /// value of a radixa script.
    #[arg(short, long)]
    pipe_mode: bool,

    script: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = get_result(&args.script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
