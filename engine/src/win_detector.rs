use crate::board::Board;
use crate::types::{Position, RunInfo, Stone, WIN_LENGTH, WinningLine};

pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // horizontal
    (0, 1),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

// Walks away from the origin collecting matching stones. Returns whether the
// cell that stopped the walk is empty; the board edge counts as closed.
fn walk(
    board: &Board,
    origin: Position,
    stone: Stone,
    dcol: i32,
    drow: i32,
    cells: &mut Vec<Position>,
) -> bool {
    let mut col = origin.col as i32 + dcol;
    let mut row = origin.row as i32 + drow;
    loop {
        match board.cell_at_offset(col, row) {
            Some(cell) if cell.stone == Some(stone) => {
                cells.push(Position::new(col as usize, row as usize));
                col += dcol;
                row += drow;
            }
            Some(cell) => return cell.stone.is_none(),
            None => return false,
        }
    }
}

// The origin always counts as 1, whether it already holds `stone` (win
// checks on the cell just played) or is an empty cell being scored as a
// hypothetical placement.
pub fn count_run(
    board: &Board,
    origin: Position,
    stone: Stone,
    direction: (i32, i32),
) -> RunInfo {
    let (dcol, drow) = direction;

    let mut backward = Vec::new();
    let open_start = walk(board, origin, stone, -dcol, -drow, &mut backward);
    backward.reverse();

    let mut cells = backward;
    cells.push(origin);

    let mut forward = Vec::new();
    let open_end = walk(board, origin, stone, dcol, drow, &mut forward);
    cells.extend(forward);

    RunInfo {
        count: cells.len(),
        open_start,
        open_end,
        cells,
    }
}

pub fn check_win_at(board: &Board, origin: Position, stone: Stone) -> Option<WinningLine> {
    for direction in DIRECTIONS {
        let run = count_run(board, origin, stone, direction);
        if run.count >= WIN_LENGTH {
            return Some(WinningLine {
                stone,
                cells: run.cells,
            });
        }
    }
    None
}
