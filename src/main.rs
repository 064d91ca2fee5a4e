//! Command-line entry point.
//!
//! Draws ten integers from the default `[1, 100]` bounds using the
//! system-seeded source, prints the two-line report, and exercises the
//! arithmetic combinator.

use randmean::prelude::*;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut source = SystemSource::new();
    let report = Sampler::builder(10).build()?.run(&mut source);
    println!("{report}");

    let _ = combine(1, 2, 3, 4, 5, 6);

    Ok(())
}
