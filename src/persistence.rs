//! Map File Persistence
//!
//! Plain-text map format: the first line holds the number of squares, then
//! one line per square in paint order:
//!
//! ```text
//! 2
//! 0.0 0.0 50.0 50.0 230 41 55 255
//! 50.0 -100.0 50.0 50.0 0 121 241 255
//! ```
//!
//! Fields are `x y width height r g b a`. Floats are written in Rust's
//! shortest round-trip form so a save followed by a load reproduces the
//! exact values; files using fixed six-decimal floats read the same way.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use macroquad::math::Rect;

use crate::core::{Rgba, Square};
use crate::error::{MapError, ParseErrorKind, Result};

const FIELDS_PER_SQUARE: usize = 8;

pub fn map_path(dir: impl AsRef<Path>, file: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(file)
}

/// Write `squares` in map format
pub fn write_squares<W: Write>(writer: &mut W, squares: &[Square]) -> io::Result<()> {
    writeln!(writer, "{}", squares.len())?;
    for sq in squares {
        writeln!(
            writer,
            "{:?} {:?} {:?} {:?} {} {} {} {}",
            sq.rect.x,
            sq.rect.y,
            sq.rect.w,
            sq.rect.h,
            sq.color.r,
            sq.color.g,
            sq.color.b,
            sq.color.a
        )?;
    }
    Ok(())
}

/// Parse map text, keeping at most `capacity` squares
///
/// A declared count above `capacity` is clamped and the remaining lines are
/// ignored. Blank lines are skipped.
pub fn parse_squares(text: &str, capacity: usize) -> Result<Vec<Square>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(MapError::Parse {
        line: 1,
        kind: ParseErrorKind::MissingCount,
    })?;
    let declared: usize = count_text.parse().map_err(|_| MapError::Parse {
        line: count_line,
        kind: ParseErrorKind::InvalidCount(count_text.to_string()),
    })?;

    let expected = if declared > capacity {
        warn!(
            "Map declares {} squares but capacity is {}; keeping the first {}",
            declared, capacity, capacity
        );
        capacity
    } else {
        declared
    };

    let mut squares = Vec::with_capacity(expected.min(1024));
    let mut last_line = count_line;
    while squares.len() < expected {
        let Some((line_no, line)) = lines.next() else {
            return Err(MapError::Parse {
                line: last_line + 1,
                kind: ParseErrorKind::UnexpectedEof {
                    expected,
                    found: squares.len(),
                },
            });
        };
        last_line = line_no;
        let square = parse_square(line).map_err(|kind| MapError::Parse { line: line_no, kind })?;
        squares.push(square);
    }

    Ok(squares)
}

fn parse_square(line: &str) -> std::result::Result<Square, ParseErrorKind> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_SQUARE {
        return Err(ParseErrorKind::FieldCount(fields.len()));
    }

    let x = parse_float(fields[0])?;
    let y = parse_float(fields[1])?;
    let w = parse_size(fields[2])?;
    let h = parse_size(fields[3])?;

    let color = Rgba::rgba(
        parse_channel(fields[4])?,
        parse_channel(fields[5])?,
        parse_channel(fields[6])?,
        parse_channel(fields[7])?,
    );

    Ok(Square::new(Rect::new(x, y, w, h), color))
}

fn parse_float(field: &str) -> std::result::Result<f32, ParseErrorKind> {
    let value: f32 = field
        .parse()
        .map_err(|_| ParseErrorKind::InvalidFloat(field.to_string()))?;
    if !value.is_finite() {
        return Err(ParseErrorKind::NonFiniteFloat(field.to_string()));
    }
    Ok(value)
}

fn parse_size(field: &str) -> std::result::Result<f32, ParseErrorKind> {
    let value = parse_float(field)?;
    if value <= 0.0 {
        return Err(ParseErrorKind::NonPositiveSize(field.to_string()));
    }
    Ok(value)
}

fn parse_channel(field: &str) -> std::result::Result<u8, ParseErrorKind> {
    field
        .parse::<u8>()
        .map_err(|_| ParseErrorKind::InvalidChannel(field.to_string()))
}

/// Save squares to `path`, creating the parent directory if needed
pub fn save_map(path: &Path, squares: &[Square]) -> Result<()> {
    let io_err = |source| MapError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = fs::File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_squares(&mut writer, squares).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    info!("Saved {} squares to {}", squares.len(), path.display());
    Ok(())
}

/// Load at most `capacity` squares from `path`
pub fn load_map(path: &Path, capacity: usize) -> Result<Vec<Square>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MapError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(MapError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let squares = parse_squares(&text, capacity)?;
    debug!("Parsed {} squares from {}", squares.len(), path.display());
    Ok(squares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{BLUE, RED};

    fn square(x: f32, y: f32, color: Rgba) -> Square {
        Square::new(Rect::new(x, y, 50.0, 50.0), color)
    }

    fn parse_kind(text: &str) -> (usize, ParseErrorKind) {
        match parse_squares(text, 100) {
            Err(MapError::Parse { line, kind }) => (line, kind),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn writes_count_then_one_line_per_square() {
        let mut out = Vec::new();
        write_squares(&mut out, &[square(0.0, 0.0, RED), square(50.0, -100.0, BLUE)]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2\n0.0 0.0 50.0 50.0 230 41 55 255\n50.0 -100.0 50.0 50.0 0 121 241 255\n"
        );
    }

    #[test]
    fn empty_list_writes_zero() {
        let mut out = Vec::new();
        write_squares(&mut out, &[]).unwrap();
        assert_eq!(out, b"0\n");
        assert!(parse_squares("0\n", 10).unwrap().is_empty());
    }

    #[test]
    fn reads_six_decimal_floats() {
        let text = "1\n100.000000 -50.000000 50.000000 50.000000 0 228 48 255\n";
        let squares = parse_squares(text, 10).unwrap();
        assert_eq!(squares, vec![Square::new(Rect::new(100.0, -50.0, 50.0, 50.0), Rgba::rgb(0, 228, 48))]);
    }

    #[test]
    fn count_is_clamped_to_capacity() {
        let text = "3\n0 0 50 50 1 2 3 4\n50 0 50 50 1 2 3 4\n100 0 50 50 1 2 3 4\n";
        let squares = parse_squares(text, 2).unwrap();
        assert_eq!(squares.len(), 2);
        assert_eq!(squares[1].rect.x, 50.0);
    }

    #[test]
    fn clamped_count_does_not_require_extra_lines() {
        let squares = parse_squares("1000000\n0 0 50 50 1 2 3 4\n", 1).unwrap();
        assert_eq!(squares.len(), 1);
    }

    #[test]
    fn blank_lines_and_trailing_content_are_ignored() {
        let text = "\n1\n\n  0 0 50 50 1 2 3 4  \ngarbage after the last square\n";
        assert_eq!(parse_squares(text, 10).unwrap().len(), 1);
    }

    #[test]
    fn missing_and_invalid_counts() {
        assert_eq!(parse_kind(""), (1, ParseErrorKind::MissingCount));
        assert_eq!(parse_kind("-3\n"), (1, ParseErrorKind::InvalidCount("-3".into())));
        assert_eq!(parse_kind("two\n"), (1, ParseErrorKind::InvalidCount("two".into())));
    }

    #[test]
    fn short_file_reports_eof() {
        let (line, kind) = parse_kind("2\n0 0 50 50 1 2 3 4\n");
        assert_eq!(line, 3);
        assert_eq!(kind, ParseErrorKind::UnexpectedEof { expected: 2, found: 1 });
    }

    #[test]
    fn field_validation() {
        assert_eq!(parse_kind("1\n0 0 50 50 1 2 3\n"), (2, ParseErrorKind::FieldCount(7)));
        assert_eq!(
            parse_kind("1\n0 zero 50 50 1 2 3 4\n"),
            (2, ParseErrorKind::InvalidFloat("zero".into()))
        );
        assert_eq!(
            parse_kind("1\nNaN 0 50 50 1 2 3 4\n"),
            (2, ParseErrorKind::NonFiniteFloat("NaN".into()))
        );
        assert_eq!(
            parse_kind("1\n0 0 0 50 1 2 3 4\n"),
            (2, ParseErrorKind::NonPositiveSize("0".into()))
        );
        assert_eq!(
            parse_kind("1\n0 0 50 50 1 256 3 4\n"),
            (2, ParseErrorKind::InvalidChannel("256".into()))
        );
        assert_eq!(
            parse_kind("1\n0 0 50 50 -1 2 3 4\n"),
            (2, ParseErrorKind::InvalidChannel("-1".into()))
        );
    }

    #[test]
    fn map_path_joins_dir_and_file() {
        assert_eq!(map_path("maps", "map.txt"), PathBuf::from("maps").join("map.txt"));
    }
}
