//! Textual input: `N` followed by `N` integers, whitespace separated.

use crate::error::{ParseError, Result};
use crate::problems::Positions;

/// Parse `N` and the `N` position values from `text`.
///
/// Line structure is not significant; tokens may be split across lines in any
/// way. Exactly `N` values must follow the length.
///
/// ```
/// use hop_dp::input::parse_positions;
///
/// let p = parse_positions("6\n30 10 60 10 60 50\n").unwrap();
/// assert_eq!(p.values(), &[30, 10, 60, 10, 60, 50]);
/// ```
pub fn parse_positions(text: &str) -> Result<Positions> {
    let mut tokens = text.split_whitespace().enumerate();

    let (_, first) = tokens.next().ok_or(ParseError::MissingLength)?;
    let declared = parse_int(0, first)?;
    if declared < 1 {
        return Err(ParseError::LengthTooSmall(declared).into());
    }
    let expected = usize::try_from(declared).map_err(|_| ParseError::NotAnInteger {
        index: 0,
        token: first.to_string(),
    })?;

    let values = tokens
        .map(|(index, token)| parse_int(index, token))
        .collect::<Result<Vec<i64>>>()?;
    if values.len() != expected {
        return Err(ParseError::CountMismatch {
            expected,
            found: values.len(),
        }
        .into());
    }

    Positions::new(values)
}

fn parse_int(index: usize, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| {
        ParseError::NotAnInteger {
            index,
            token: token.to_string(),
        }
        .into()
    })
}
