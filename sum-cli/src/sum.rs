use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum SumError {
    #[error("'{text}' is not an integer")]
    NotAnInteger {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses one operand as a base-10 signed integer.
pub fn parse_operand(text: &str) -> Result<i32, SumError> {
    text.parse().map_err(|source| SumError::NotAnInteger {
        text: text.to_string(),
        source,
    })
}

/// Builds the result line, e.g. `3 + 5 = 8`.
pub fn sum_line(int1: &str, int2: &str) -> Result<String, SumError> {
    let int1 = parse_operand(int1)?;
    let int2 = parse_operand(int2)?;
    let result = int1 + int2;
    Ok(format!("{} + {} = {}", int1, int2, result))
}
