use crate::board::Board;
use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::settings::GobangSessionSettings;
use crate::types::{
    BOARD_SIZE, FirstPlayerMode, GameStatus, OpponentMode, Position, Stone, WinningLine,
};
use crate::win_detector::check_win_at;

#[derive(Debug)]
pub struct GobangGameState {
    pub board: Board,
    pub status: GameStatus,
    pub opponent_mode: OpponentMode,
    pub player_color: Stone,
    pub bot_color: Stone,
    pub current_color: Stone,
    pub last_move_black: Option<Position>,
    pub last_move_white: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

impl GobangGameState {
    pub fn new(
        settings: &GobangSessionSettings,
        rng: &mut SessionRng,
    ) -> Result<Self, GameError> {
        let board = Board::new(BOARD_SIZE)?;

        // Black always moves first; the first-player choice decides who gets it.
        let player_first = match settings.first_player {
            FirstPlayerMode::Player => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };
        let player_color = if player_first {
            Stone::Black
        } else {
            Stone::White
        };

        Ok(Self {
            board,
            status: GameStatus::Ready,
            opponent_mode: settings.opponent_mode,
            player_color,
            bot_color: player_color.opponent(),
            current_color: Stone::Black,
            last_move_black: None,
            last_move_white: None,
            winning_line: None,
        })
    }

    pub fn start(&mut self) {
        self.status = GameStatus::InProgress;
    }

    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::BlackWon => Some(Stone::Black),
            GameStatus::WhiteWon => Some(Stone::White),
            _ => None,
        }
    }

    pub fn place_stone(&mut self, stone: Stone, position: Position) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::InvalidMove(
                "game is not in progress".to_string(),
            ));
        }
        if stone != self.current_color {
            return Err(GameError::InvalidMove(format!(
                "it is not {:?}'s turn",
                stone
            )));
        }

        self.board.place(position, stone)?;
        match stone {
            Stone::Black => self.last_move_black = Some(position),
            Stone::White => self.last_move_white = Some(position),
        }

        if let Some(line) = check_win_at(&self.board, position, stone) {
            self.board.clear_highlights();
            for cell in &line.cells {
                self.board.highlight(*cell)?;
            }
            self.status = match stone {
                Stone::Black => GameStatus::BlackWon,
                Stone::White => GameStatus::WhiteWon,
            };
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_color = stone.opponent();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(opponent_mode: OpponentMode, first_player: FirstPlayerMode) -> GobangSessionSettings {
        GobangSessionSettings {
            first_player,
            opponent_mode,
        }
    }

    fn started_state(opponent_mode: OpponentMode) -> GobangGameState {
        let mut rng = SessionRng::new(42);
        let mut state =
            GobangGameState::new(&settings(opponent_mode, FirstPlayerMode::Player), &mut rng)
                .unwrap();
        state.start();
        state
    }

    #[test]
    fn test_new_state_is_ready() {
        let mut rng = SessionRng::new(42);

        let state =
            GobangGameState::new(&settings(OpponentMode::Bot, FirstPlayerMode::Player), &mut rng)
                .unwrap();

        assert_eq!(state.status, GameStatus::Ready);
        assert_eq!(state.player_color, Stone::Black);
        assert_eq!(state.bot_color, Stone::White);
        assert_eq!(state.current_color, Stone::Black);
    }

    #[test]
    fn test_bot_first_gets_black() {
        let mut rng = SessionRng::new(42);

        let state =
            GobangGameState::new(&settings(OpponentMode::Bot, FirstPlayerMode::Bot), &mut rng)
                .unwrap();

        assert_eq!(state.player_color, Stone::White);
        assert_eq!(state.bot_color, Stone::Black);
    }

    #[test]
    fn test_place_before_start_is_rejected() {
        let mut rng = SessionRng::new(42);
        let mut state =
            GobangGameState::new(&settings(OpponentMode::Bot, FirstPlayerMode::Player), &mut rng)
                .unwrap();

        let result = state.place_stone(Stone::Black, Position::new(7, 7));

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(state.board.stone_count(), 0);
    }

    #[test]
    fn test_place_out_of_turn_is_rejected() {
        let mut state = started_state(OpponentMode::Human);

        let result = state.place_stone(Stone::White, Position::new(7, 7));

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(state.board.stone_count(), 0);
        assert_eq!(state.current_color, Stone::Black);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = started_state(OpponentMode::Human);

        state.place_stone(Stone::Black, Position::new(0, 0)).unwrap();
        assert_eq!(state.current_color, Stone::White);

        state.place_stone(Stone::White, Position::new(1, 0)).unwrap();
        assert_eq!(state.current_color, Stone::Black);

        assert_eq!(state.last_move_black, Some(Position::new(0, 0)));
        assert_eq!(state.last_move_white, Some(Position::new(1, 0)));
    }

    #[test]
    fn test_rejected_move_leaves_state_untouched() {
        let mut state = started_state(OpponentMode::Human);
        state.place_stone(Stone::Black, Position::new(3, 3)).unwrap();
        let board_before = state.board.clone();

        let result = state.place_stone(Stone::White, Position::new(3, 3));

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(state.board, board_before);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_color, Stone::White);
    }

    #[test]
    fn test_fifth_stone_wins_and_marks_the_line() {
        let mut state = started_state(OpponentMode::Human);
        let black_moves = [(0, 0), (0, 1), (0, 2), (0, 3)];
        let white_moves = [(10, 0), (11, 0), (12, 0), (13, 0)];
        for i in 0..4 {
            let (col, row) = black_moves[i];
            state.place_stone(Stone::Black, Position::new(col, row)).unwrap();
            let (col, row) = white_moves[i];
            state.place_stone(Stone::White, Position::new(col, row)).unwrap();
        }

        state.place_stone(Stone::Black, Position::new(0, 4)).unwrap();

        assert_eq!(state.status, GameStatus::BlackWon);
        assert_eq!(state.winner(), Some(Stone::Black));

        let line = state.winning_line.clone().unwrap();
        let expected: Vec<Position> = (0..5).map(|row| Position::new(0, row)).collect();
        assert_eq!(line.cells, expected);

        for position in &expected {
            assert!(state.board.cell_at(*position).unwrap().highlighted);
        }
        assert!(!state.board.cell_at(Position::new(10, 0)).unwrap().highlighted);
    }

    #[test]
    fn test_no_moves_after_the_game_ends() {
        let mut state = started_state(OpponentMode::Human);
        let black_moves = [(0, 0), (0, 1), (0, 2), (0, 3)];
        let white_moves = [(10, 0), (11, 0), (12, 0), (13, 0)];
        for i in 0..4 {
            let (col, row) = black_moves[i];
            state.place_stone(Stone::Black, Position::new(col, row)).unwrap();
            let (col, row) = white_moves[i];
            state.place_stone(Stone::White, Position::new(col, row)).unwrap();
        }
        state.place_stone(Stone::Black, Position::new(0, 4)).unwrap();

        let result = state.place_stone(Stone::White, Position::new(7, 7));

        assert!(matches!(result, Err(GameError::InvalidMove(_))));
        assert_eq!(state.status, GameStatus::BlackWon);
    }

    // Tiles the board with two-cell runs only, so filling it produces a draw.
    fn pattern_stone(col: usize, row: usize) -> Stone {
        if (col + row / 2) % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    #[test]
    fn test_full_board_without_a_winner_is_a_draw() {
        let mut state = started_state(OpponentMode::Human);
        for row in 0..15 {
            for col in 0..15 {
                if (col, row) == (14, 14) {
                    continue;
                }
                state
                    .board
                    .place(Position::new(col, row), pattern_stone(col, row))
                    .unwrap();
            }
        }
        let last_stone = pattern_stone(14, 14);
        state.current_color = last_stone;

        state.place_stone(last_stone, Position::new(14, 14)).unwrap();

        assert_eq!(state.status, GameStatus::Draw);
        assert!(state.winning_line.is_none());
    }
}
