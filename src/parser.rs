//! Parses the `.bff` puzzle format into a [`Puzzle`].
//!
//! Line-oriented, `#`-commented, with a `GRID START`/`GRID STOP` block of
//! single-character rows, `A`/`B`/`C` budget lines, `L` emitter lines, and
//! `P` target-point lines. The padding scheme wraps every source row with a
//! blank row above, below, and between, and inserts a `NONE` cell after every
//! character: a source cell at row `r`, column `c` lands at lattice position
//! `(2c+1, 2r+1)`.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::block::Block;
use crate::error::ParseError;
use crate::lattice::BlockLattice;
use crate::laser::Laser;
use crate::puzzle::{Budget, Puzzle};

/// Parses a puzzle from the contents of a `.bff` file.
pub fn parse_file(path: &Path) -> Result<Puzzle, ParseError> {
    let text = fs::read_to_string(path).map_err(|e| ParseError::Io(e.to_string()))?;
    parse_str(&text)
}

/// Parses a puzzle from `.bff` text.
pub fn parse_str(input: &str) -> Result<Puzzle, ParseError> {
    let mut source_rows: Vec<Vec<Block>> = Vec::new();
    let mut in_grid = false;
    let mut grid_closed = false;

    let mut budget = Budget::default();
    let mut emitters = Vec::new();
    let mut targets = FxHashSet::default();

    for (line_no, raw_line) in input.lines().enumerate() {
        let line_no = line_no + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "GRID START" {
            in_grid = true;
            continue;
        }
        if line == "GRID STOP" {
            in_grid = false;
            grid_closed = true;
            continue;
        }

        if in_grid {
            source_rows.push(parse_grid_row(line_no, line, &source_rows)?);
        } else if line.starts_with('A') || line.starts_with('B') || line.starts_with('C') {
            apply_budget_line(line_no, line, &mut budget)?;
        } else if line.starts_with('L') {
            emitters.push(parse_laser_line(line_no, line)?);
        } else if line.starts_with('P') {
            targets.insert(parse_point_line(line_no, line)?);
        }
    }

    if source_rows.is_empty() {
        return Err(ParseError::MissingGrid);
    }
    if in_grid && !grid_closed {
        return Err(ParseError::UnterminatedGrid);
    }

    let lattice = pad_rows(source_rows);
    Ok(Puzzle::new(lattice, emitters, targets, budget))
}

fn parse_grid_row(
    line_no: usize,
    line: &str,
    prior_rows: &[Vec<Block>],
) -> Result<Vec<Block>, ParseError> {
    let mut row = vec![Block::NONE];
    for ch in line.chars() {
        let block = match ch {
            'x' => Block::NONE,
            'o' => Block::EMPTY,
            'A' => Block::reflect(true),
            'B' => Block::opaque(true),
            'C' => Block::refract(true),
            other => return Err(ParseError::UnknownGridChar { line: line_no, ch: other }),
        };
        row.push(block);
        row.push(Block::NONE);
    }

    if let Some(expected_row) = prior_rows.first() {
        if row.len() != expected_row.len() {
            return Err(ParseError::RaggedGrid {
                line: line_no,
                expected: expected_row.len(),
                found: row.len(),
            });
        }
    }

    Ok(row)
}

/// Wraps every source row with an all-`NONE` row above, below, and between
/// each one: a source cell at row `r`, column `c` lands at lattice position
/// `(2c+1, 2r+1)`.
fn pad_rows(source_rows: Vec<Vec<Block>>) -> BlockLattice {
    let width = source_rows[0].len();
    let blank = vec![Block::NONE; width];

    let mut padded = Vec::with_capacity(source_rows.len() * 2 + 1);
    padded.push(blank.clone());
    for row in source_rows {
        padded.push(row);
        padded.push(blank.clone());
    }

    BlockLattice::from_rows(padded)
}

fn apply_budget_line(line_no: usize, line: &str, budget: &mut Budget) -> Result<(), ParseError> {
    let mut parts = line.split_whitespace();
    let letter_str = parts.next().unwrap_or("");
    let count_str = parts.next();
    let (Some(letter), Some(count_str), None) = (
        letter_str.chars().next().filter(|_| letter_str.len() == 1),
        count_str,
        parts.next(),
    ) else {
        return Err(ParseError::BadBudgetLine {
            line: line_no,
            letter: letter_str.chars().next().unwrap_or('?'),
            text: line.to_string(),
        });
    };

    let count: u32 = count_str.parse().map_err(|_| ParseError::BadInteger {
        line: line_no,
        text: count_str.to_string(),
    })?;

    match letter {
        'A' => budget.reflect = count,
        'B' => budget.opaque = count,
        'C' => budget.refract = count,
        _ => {
            return Err(ParseError::BadBudgetLine {
                line: line_no,
                letter,
                text: line.to_string(),
            })
        }
    }
    Ok(())
}

fn parse_laser_line(line_no: usize, line: &str) -> Result<Laser, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_, x, y, vx, vy] = fields[..] else {
        return Err(ParseError::BadLaserLine {
            line: line_no,
            text: line.to_string(),
        });
    };
    let parse_int = |text: &str| -> Result<i32, ParseError> {
        text.parse().map_err(|_| ParseError::BadInteger {
            line: line_no,
            text: text.to_string(),
        })
    };
    Ok(Laser::new(
        parse_int(x)?,
        parse_int(y)?,
        parse_int(vx)?,
        parse_int(vy)?,
    ))
}

fn parse_point_line(line_no: usize, line: &str) -> Result<(i32, i32), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_, x, y] = fields[..] else {
        return Err(ParseError::BadPointLine {
            line: line_no,
            text: line.to_string(),
        });
    };
    let parse_int = |text: &str| -> Result<i32, ParseError> {
        text.parse().map_err(|_| ParseError::BadInteger {
            line: line_no,
            text: text.to_string(),
        })
    };
    Ok((parse_int(x)?, parse_int(y)?))
}
