use std::str::FromStr;

use crate::data::Pos;
use crate::state::{State, StateErr};

impl FromStr for State {
    type Err = StateErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the same format `State` is displayed in: `[(0,0),(2,0),(1,1),(0,2)]`.
/// Whitespace is ignored.
pub(crate) fn parse(text: &str) -> Result<State, StateErr> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let syntax_err = || StateErr::Syntax(text.trim().to_owned());

    let inner = compact
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(syntax_err)?;

    let mut positions = Vec::new();
    if !inner.is_empty() {
        let pairs = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(syntax_err)?;
        for pair in pairs.split("),(") {
            positions.push(parse_pos(pair).ok_or_else(syntax_err)?);
        }
    }

    State::new(&positions)
}

fn parse_pos(pair: &str) -> Option<Pos> {
    let mut coords = pair.split(',');
    let r = coords.next()?.parse().ok()?;
    let c = coords.next()?.parse().ok()?;
    if coords.next().is_some() {
        return None;
    }
    Some(Pos::new(r, c))
}
