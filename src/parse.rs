use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{CaseSet, Square, TestCase};

impl FromStr for CaseSet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let case_count = next_number(&mut tokens, "test case count")?;
        let cases = (1..=case_count)
            .map(|i| parse_case(&mut tokens).with_context(|| format!("In test case {i}")))
            .collect::<Result<Vec<_>>>()?;
        ensure!(
            tokens.next().is_none(),
            "Trailing input after the last test case",
        );
        Ok(CaseSet { cases })
    }
}

fn parse_case<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<TestCase> {
    let ladders = parse_pairs(tokens, "ladder")?;
    let snakes = parse_pairs(tokens, "snake")?;
    Ok(TestCase { ladders, snakes })
}

fn parse_pairs<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<Vec<(Square, Square)>> {
    let count = next_number(tokens, &format!("{what} count"))?;
    (0..count)
        .map(|_| {
            let start = next_number(tokens, &format!("{what} start"))?;
            let end = next_number(tokens, &format!("{what} end"))?;
            Ok((Square(start), Square(end)))
        })
        .collect()
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<u16> {
    let token = tokens
        .next()
        .with_context(|| format!("Missing {what}"))?;
    token
        .parse()
        .with_context(|| format!("Invalid {what}: {token:?}"))
}
