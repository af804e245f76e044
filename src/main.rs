use std::io::{self, Write};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::prelude::*;

use snakes_ladders_solver::{solve, CaseSet, BOARD_SIZE};

fn main() -> Result<()> {
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path).context("Failed to read the input file")?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };
    let CaseSet { cases } = input.parse().context("Failed to parse the test cases")?;

    // Each (graph, search) pair is independent, so cases solve in parallel;
    // collecting keeps them in input order.
    let bar = ProgressBar::new_spinner();
    let results = cases
        .par_iter()
        .map(|case| -> Result<i64> {
            let graph = case.build_graph(BOARD_SIZE)?;
            Ok(solve::minimum_rolls(&graph, || bar.inc(1)).map_or(-1, i64::from))
        })
        .collect::<Result<Vec<_>>>()?;
    bar.finish_and_clear();

    let mut stdout = io::stdout().lock();
    for rolls in results {
        writeln!(stdout, "{rolls}")?;
    }
    Ok(())
}
