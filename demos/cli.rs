//! Solve equations read from stdin, one per line.
//!
//! Each line starts with the kind of equation (`1`, `2`, `3`, `single`,
//! `two`, or `three`) followed by its coefficients, for example:
//!
//! ```text
//! 2  1 0 3  0 1 5
//! ```

use std::{
    error::Error,
    io::{BufRead, BufReader},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();

    for line in BufReader::new(stdin.lock()).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match cramer::parse_request(&line) {
            Ok((kind, coefficients)) => {
                let result = cramer::solve(kind, &coefficients);
                println!("{}", cramer::render(&result));
            },
            Err(e) => match e.source() {
                Some(cause) => {
                    eprintln!("Unable to parse \"{}\": {}: {}", line, e, cause)
                },
                None => eprintln!("Unable to parse \"{}\": {}", line, e),
            },
        }
    }

    Ok(())
}
