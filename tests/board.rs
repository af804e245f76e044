use anyhow::Context;
use snakes_ladders_solver::{BoardGraph, Square};

use crate::common::*;

mod common;

fn main() {
    run_tests("board", |content| {
        let input = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let mut lines = input.lines();
        let board_size = lines
            .next()
            .context("Missing board size")?
            .trim()
            .parse::<u16>()
            .context("Invalid board size")?;

        let mut graph = BoardGraph::new(board_size);
        for line in lines {
            let (start, end) = line.trim().split_once(' ').context("Invalid shortcut line")?;
            let start = Square(start.parse().context("Invalid shortcut start")?);
            let end = Square(end.trim().parse().context("Invalid shortcut end")?);
            graph
                .apply_shortcut(start, end)
                .with_context(|| format!("Cannot apply shortcut {start} -> {end}"))?;
        }

        Ok(format!("{input}\n\n{SEPARATOR}{graph}"))
    });
}
