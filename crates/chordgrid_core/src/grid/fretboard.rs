//! Rectangular fretboard oracle.
//!
//! Rows are frets (`0` is the open row above the nut), columns are strings.
//! Grid lines are 1-based so a cell at fret `f`, string `s` occupies
//! `f+1 / s+1 / f+2 / s+1+span`.

use crate::grid::{Direction, GridError, GridOracle, GridResult};
use crate::model::config::{ConfigError, DiagramConfig};
use crate::model::grid::{GridArea, GridPlacement, GridPos};

/// Fretboard geometry built from diagram dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretboardGrid {
    strings_count: u32,
    frets_count: u32,
}

impl FretboardGrid {
    /// Creates a grid; both dimensions must be non-zero.
    pub fn new(strings_count: u32, frets_count: u32) -> Result<Self, ConfigError> {
        if strings_count == 0 {
            return Err(ConfigError::NoStrings);
        }
        if frets_count == 0 {
            return Err(ConfigError::NoFrets);
        }
        Ok(Self {
            strings_count,
            frets_count,
        })
    }

    /// Builds a grid from a validated diagram configuration.
    pub fn from_config(config: &DiagramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.strings_count, config.frets_count)
    }

    pub fn frets_count(&self) -> u32 {
        self.frets_count
    }

    fn check_cell(&self, fret: u32, string: u32) -> GridResult<()> {
        if string >= self.strings_count {
            return Err(GridError::StringOutOfRange {
                string,
                strings_count: self.strings_count,
            });
        }
        if fret > self.frets_count {
            return Err(GridError::FretOutOfRange {
                fret,
                frets_count: self.frets_count,
            });
        }
        Ok(())
    }
}

impl GridOracle for FretboardGrid {
    fn strings_count(&self) -> u32 {
        self.strings_count
    }

    fn to_position(&self, fret: u32, string: u32, span: Option<u32>) -> GridResult<GridPlacement> {
        self.check_cell(fret, string)?;
        let span = span.unwrap_or(1);
        if span == 0 || span > self.max_span_from_string(string) {
            return Err(GridError::InvalidSpan { string, span });
        }

        Ok(GridPlacement {
            pos: GridPos::new(fret, string),
            area: GridArea {
                row_start: fret + 1,
                column_start: string + 1,
                row_end: fret + 2,
                column_end: string + 1 + span,
            },
        })
    }

    fn step(&self, pos: GridPos, direction: Direction, count: u32) -> GridResult<GridPos> {
        self.check_cell(pos.fret, pos.string)?;
        let off_board = GridError::StepOffBoard {
            from: pos,
            direction,
            count,
        };
        let string = match direction {
            Direction::Left => pos.string.checked_sub(count),
            Direction::Right => pos
                .string
                .checked_add(count)
                .filter(|string| *string < self.strings_count),
        }
        .ok_or(off_board)?;

        Ok(GridPos::new(pos.fret, string))
    }

    fn max_span_from_string(&self, string: u32) -> u32 {
        self.strings_count.saturating_sub(string)
    }
}

#[cfg(test)]
mod tests {
    use super::FretboardGrid;
    use crate::grid::{Direction, GridError, GridOracle};
    use crate::model::config::ConfigError;
    use crate::model::grid::GridPos;

    #[test]
    fn new_rejects_empty_dimensions() {
        assert_eq!(FretboardGrid::new(0, 5), Err(ConfigError::NoStrings));
        assert_eq!(FretboardGrid::new(6, 0), Err(ConfigError::NoFrets));
    }

    #[test]
    fn to_position_builds_one_based_area() {
        let grid = FretboardGrid::new(6, 5).expect("valid grid");
        let placement = grid.to_position(1, 2, Some(3)).expect("in range");

        assert_eq!(placement.pos, GridPos::new(1, 2));
        assert_eq!(placement.area.to_string(), "2 / 3 / 3 / 6");
    }

    #[test]
    fn step_reports_walks_past_either_edge() {
        let grid = FretboardGrid::new(6, 5).expect("valid grid");

        assert_eq!(
            grid.step(GridPos::new(1, 0), Direction::Left, 1),
            Err(GridError::StepOffBoard {
                from: GridPos::new(1, 0),
                direction: Direction::Left,
                count: 1,
            })
        );
        assert!(grid.step(GridPos::new(1, 4), Direction::Right, 2).is_err());
        assert_eq!(
            grid.step(GridPos::new(1, 4), Direction::Right, 1),
            Ok(GridPos::new(1, 5))
        );
    }
}
