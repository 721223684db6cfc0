use super::Pattern;
use crate::config::get_config;
use anyhow::{anyhow, Result};
use std::fmt::Write;

/// Body lines of encoded patterns are wrapped at this width.
const LINE_WIDTH: usize = 70;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Body,
    Done,
}

/// Parses a pattern in the [RLE](https://conwaylife.com/wiki/Run_Length_Encoded) format.
///
/// Lines before the `x = .., y = ..` header are skipped, as are `#` comment
/// lines anywhere. The `rule` field of the header is accepted but ignored.
/// Live cells that fall outside the declared dimensions are dropped, and so
/// are unknown characters in the body.
///
/// # Errors
///
/// Returns an error if the header is missing or invalid, if the declared
/// area exceeds the configured default maximum grid area (see
/// [`set_default_max_size`](crate::set_default_max_size)), or if the data
/// ends in the middle of a run. A line starting with `x =` is always taken
/// for the header, so a non-numeric size there is an error rather than a
/// skipped line.
pub fn decode_rle(data: &[u8]) -> Result<Pattern> {
    let mut state = State::Header;
    let mut pattern = Pattern::blank(0, 0);
    let (mut row, mut col) = (0usize, 0usize);
    let mut count: Option<usize> = None;

    let lines = data
        .split(|&b| b == b'\n')
        .map(|x| x.strip_suffix(b"\r").unwrap_or(x));

    for line in lines {
        if state == State::Done {
            break;
        }
        let line = line.trim_ascii();
        if line.first() == Some(&b'#') {
            continue;
        }
        if state == State::Header {
            if let Some((rows, cols)) = parse_header(line)? {
                let config = get_config();
                let max_cells = config
                    .default_max_rows
                    .saturating_mul(config.default_max_cols);
                let cells = rows
                    .checked_mul(cols)
                    .filter(|&n| n <= max_cells)
                    .ok_or_else(|| {
                        anyhow!(
                            "Pattern {}x{} exceeds the maximum area of {} cells",
                            cols,
                            rows,
                            max_cells
                        )
                    })?;
                tracing::trace!(rows, cols, cells, "parsed RLE header");
                pattern = Pattern::blank(rows, cols);
                state = State::Body;
            }
            continue;
        }

        for &b in line {
            match b {
                b'0'..=b'9' => {
                    let digit = (b - b'0') as usize;
                    let n = count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit))
                        .ok_or_else(|| anyhow!("Run count is too large"))?;
                    count = Some(n);
                }
                b'b' => {
                    col = col.saturating_add(count.take().unwrap_or(1));
                }
                b'o' => {
                    let n = count.take().unwrap_or(1);
                    let end = col.saturating_add(n);
                    if row < pattern.rows() {
                        for c in col..end.min(pattern.cols()) {
                            pattern.set(row, c, true);
                        }
                    }
                    if row >= pattern.rows() || end > pattern.cols() {
                        tracing::trace!(row, col, n, "dropping live cells outside the pattern");
                    }
                    col = end;
                }
                b'$' => {
                    row = row.saturating_add(count.take().unwrap_or(1));
                    col = 0;
                }
                b'!' => {
                    state = State::Done;
                    break;
                }
                b' ' | b'\t' => {}
                _ => tracing::trace!(row, col, byte = b, "skipping unknown RLE character"),
            }
        }
    }

    match state {
        State::Header => Err(anyhow!("Missing RLE header")),
        State::Body if count.is_some() => Err(anyhow!("RLE data ends in the middle of a run")),
        _ => Ok(pattern),
    }
}

/// Returns `Some((rows, cols))` if `line` is an `x = .., y = ..` header,
/// `None` if it is some other line.
///
/// Any line whose first field is `x = ..` counts as a header attempt; a
/// missing `y` or a size that is not a number fails it.
fn parse_header(line: &[u8]) -> Result<Option<(usize, usize)>> {
    let mut parts = line.split(|&b| b == b',').map(|x| x.trim_ascii());

    let split_pair = |part: &[u8]| -> Option<(Vec<u8>, Vec<u8>)> {
        let mut items = part.splitn(2, |&b| b == b'=');
        let key = items.next()?.trim_ascii().to_vec();
        let value = items.next()?.trim_ascii().to_vec();
        Some((key, value))
    };

    let Some((key, width)) = parts.next().and_then(split_pair) else {
        return Ok(None);
    };
    if key != b"x" {
        return Ok(None);
    }
    let (key, height) = parts
        .next()
        .and_then(split_pair)
        .ok_or_else(|| anyhow!("Invalid header: missing \"y\""))?;
    if key != b"y" {
        return Err(anyhow!(
            "Invalid header: expected y, got {}",
            String::from_utf8_lossy(&key)
        ));
    }

    let cols = std::str::from_utf8(&width)?
        .parse::<usize>()
        .map_err(|e| anyhow!("Invalid header: bad width: {}", e))?;
    let rows = std::str::from_utf8(&height)?
        .parse::<usize>()
        .map_err(|e| anyhow!("Invalid header: bad height: {}", e))?;
    Ok(Some((rows, cols)))
}

/// Serializes a pattern into the RLE format.
///
/// Every row is terminated by `$` (trailing dead cells are omitted) and the
/// whole pattern by `!`.
pub fn encode_rle(pattern: &Pattern) -> String {
    let mut result = String::new();
    // writing into a String never fails
    let _ = writeln!(
        result,
        "x = {}, y = {}, rule = B3/S23",
        pattern.cols(),
        pattern.rows()
    );

    let mut line_length = 0;
    let mut push_token = |result: &mut String, token: &str| {
        if line_length + token.len() > LINE_WIDTH {
            result.push('\n');
            line_length = 0;
        }
        result.push_str(token);
        line_length += token.len();
    };

    let mut runs = Vec::new();
    let mut token = String::new();
    for row in 0..pattern.rows() {
        runs.clear();
        for col in 0..pattern.cols() {
            let state = pattern.get(row, col);
            match runs.last_mut() {
                Some((n, last)) if *last == state => *n += 1,
                _ => runs.push((1usize, state)),
            }
        }
        if matches!(runs.last(), Some((_, false))) {
            runs.pop();
        }

        for &(n, state) in &runs {
            token.clear();
            if n > 1 {
                let _ = write!(token, "{}", n);
            }
            token.push(if state { 'o' } else { 'b' });
            push_token(&mut result, &token);
        }
        push_token(&mut result, "$");
    }
    push_token(&mut result, "!");
    result
}
