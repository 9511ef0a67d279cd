//! Same as `turrell` but also prints how long every stage took
#![deny(warnings)]

use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};
use turrell::Renderer;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let renderer = Renderer::default();
    match renderer.run() {
        Ok(timings) => {
            println!("\n{}", timings);
            println!("\nSaved as {}", renderer.output_path().display());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
