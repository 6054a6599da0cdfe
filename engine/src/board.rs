use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{Position, Stone};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub stone: Option<Stone>,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration(
                "board size must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.size && (row as usize) < self.size
    }

    pub fn cell_at(&self, position: Position) -> Result<&Cell, GameError> {
        if position.col >= self.size || position.row >= self.size {
            return Err(GameError::OutOfBounds {
                col: position.col,
                row: position.row,
            });
        }
        Ok(&self.cells[position.row][position.col])
    }

    pub fn stone_at(&self, position: Position) -> Result<Option<Stone>, GameError> {
        self.cell_at(position).map(|cell| cell.stone)
    }

    pub(crate) fn cell_at_offset(&self, col: i32, row: i32) -> Option<&Cell> {
        if !self.contains(col, row) {
            return None;
        }
        Some(&self.cells[row as usize][col as usize])
    }

    pub fn place(&mut self, position: Position, stone: Stone) -> Result<(), GameError> {
        if position.col >= self.size || position.row >= self.size {
            return Err(GameError::OutOfBounds {
                col: position.col,
                row: position.row,
            });
        }

        let cell = &mut self.cells[position.row][position.col];
        if cell.stone.is_some() {
            return Err(GameError::InvalidMove(format!(
                "cell ({}, {}) is already occupied",
                position.col, position.row
            )));
        }

        cell.stone = Some(stone);
        Ok(())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                if cell.stone.is_none() {
                    Some(Position::new(col, row))
                } else {
                    None
                }
            })
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.stone.is_some()))
    }

    pub fn stone_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.stone.is_some())
            .count()
    }

    pub fn highlight(&mut self, position: Position) -> Result<(), GameError> {
        if position.col >= self.size || position.row >= self.size {
            return Err(GameError::OutOfBounds {
                col: position.col,
                row: position.row,
            });
        }
        self.cells[position.row][position.col].highlighted = true;
        Ok(())
    }

    pub fn clear_highlights(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.highlighted = false;
            }
        }
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}
