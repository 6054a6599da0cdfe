use crate::board::Board;
use crate::types::{Position, Stone};
use crate::win_detector::{DIRECTIONS, count_run};

// Center-distance bias, fixed to the 15x15 board.
const CENTER: i32 = 7;
const CENTER_BIAS_BASE: i32 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub weight: i32,
}

// Fixed score table for one directional run. The bot's own runs score higher
// than equally long opponent runs, so the heuristic attacks before it blocks.
pub fn score_run(count: usize, open_start: bool, open_end: bool, bot_perspective: bool) -> i32 {
    let open_ends = usize::from(open_start) + usize::from(open_end);
    match count {
        0 => 0,
        1 => match open_ends {
            2 => {
                if bot_perspective {
                    15
                } else {
                    10
                }
            }
            _ => 0,
        },
        2 => match open_ends {
            2 => {
                if bot_perspective {
                    100
                } else {
                    50
                }
            }
            1 => {
                if bot_perspective {
                    10
                } else {
                    5
                }
            }
            _ => 0,
        },
        3 => match open_ends {
            2 => {
                if bot_perspective {
                    500
                } else {
                    200
                }
            }
            1 => {
                if bot_perspective {
                    30
                } else {
                    20
                }
            }
            _ => 0,
        },
        4 => match open_ends {
            2 => {
                if bot_perspective {
                    5000
                } else {
                    2000
                }
            }
            1 => {
                if bot_perspective {
                    400
                } else {
                    100
                }
            }
            _ => 0,
        },
        5 => {
            if bot_perspective {
                100_000
            } else {
                10_000
            }
        }
        _ => {
            if bot_perspective {
                500_000
            } else {
                250_000
            }
        }
    }
}

// Aggregate weight of placing the bot's stone at `position`: the center bias
// plus the score of the hypothetical run through the cell on every axis, for
// both colors.
pub fn move_weight(board: &Board, position: Position, bot_color: Stone) -> i32 {
    let player_color = bot_color.opponent();
    let col = position.col as i32;
    let row = position.row as i32;

    let mut weight = CENTER_BIAS_BASE - ((col - CENTER).abs() + (row - CENTER).abs());
    for direction in DIRECTIONS {
        let own = count_run(board, position, bot_color, direction);
        weight += score_run(own.count, own.open_start, own.open_end, true);

        let theirs = count_run(board, position, player_color, direction);
        weight += score_run(theirs.count, theirs.open_start, theirs.open_end, false);
    }
    weight
}

// Scans every empty cell and keeps the strictly best weight; ties resolve to
// the first candidate in the board's row-major enumeration order.
pub fn calculate_bot_move(board: &Board, bot_color: Stone) -> Option<BotMove> {
    let mut best: Option<BotMove> = None;
    for position in board.empty_cells() {
        let weight = move_weight(board, position, bot_color);
        let better = match best {
            None => true,
            Some(current) => weight > current.weight,
        };
        if better {
            best = Some(BotMove { position, weight });
        }
    }
    best
}
