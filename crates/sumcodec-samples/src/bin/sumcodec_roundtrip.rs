//! Reads one JSON document from stdin, decodes it as `--kind`, and writes the
//! re-encoded document to stdout.
//!
//! Usage: `sumcodec-roundtrip --kind <name> [--pretty]`

use std::io::{self, Read, Write};
use std::process;

use sumcodec::Style;
use sumcodec_samples::{roundtrip, KINDS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn usage() -> ! {
    eprintln!("usage: sumcodec-roundtrip --kind <name> [--pretty]");
    eprintln!("kinds: {}", KINDS.join(", "));
    process::exit(1);
}

fn install_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    install_logging();

    let mut kind: Option<String> = None;
    let mut style = Style::Compact;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--kind" => match args.next() {
                Some(name) => kind = Some(name),
                None => usage(),
            },
            "--pretty" => style = Style::Pretty,
            "-h" | "--help" => usage(),
            other => {
                eprintln!("unexpected argument `{other}`");
                usage();
            }
        }
    }
    let Some(kind) = kind else { usage() };

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        process::exit(1);
    }

    match roundtrip(&input, &kind, style) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{output}") {
                eprintln!("failed to write stdout: {err}");
                process::exit(1);
            }
        }
        Err(err) => {
            tracing::warn!(kind = %kind, "round trip failed");
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
