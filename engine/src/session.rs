use serde::{Deserialize, Serialize};

use crate::board::Cell;
use crate::bot_controller::calculate_bot_move;
use crate::error::GameError;
use crate::game_state::GobangGameState;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::GobangSessionSettings;
use crate::types::{
    GameOutcome, GameStatus, OpponentMode, Position, Stone, WinningLine,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub opponent_mode: OpponentMode,
    pub player_color: Stone,
    pub bot_color: Stone,
    pub current_color: Stone,
    pub board: Vec<Vec<Cell>>,
    pub last_move_black: Option<Position>,
    pub last_move_white: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

pub type StateObserver = Box<dyn FnMut(&GameSnapshot) + Send>;

pub struct GobangSession {
    pub session_id: String,
    pub game_state: GobangGameState,
    settings: GobangSessionSettings,
    rng: SessionRng,
    observer: Option<StateObserver>,
}

impl GobangSession {
    pub fn create(
        session_id: impl Into<String>,
        settings: GobangSessionSettings,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut rng = SessionRng::new(seed);
        let game_state = GobangGameState::new(&settings, &mut rng)?;
        Ok(Self {
            session_id: session_id.into(),
            game_state,
            settings,
            rng,
            observer: None,
        })
    }

    pub fn settings(&self) -> &GobangSessionSettings {
        &self.settings
    }

    pub fn reset(&mut self) -> Result<(), GameError> {
        self.game_state = GobangGameState::new(&self.settings, &mut self.rng)?;
        self.game_state.start();
        log!(
            "[session:{}] game started, player is {:?}",
            self.session_id,
            self.game_state.player_color
        );
        self.notify();

        // The bot opens when it holds Black.
        if self.game_state.opponent_mode == OpponentMode::Bot
            && self.game_state.bot_color == Stone::Black
        {
            self.play_bot_turn()?;
        }
        Ok(())
    }

    pub fn reset_with(&mut self, settings: GobangSessionSettings) -> Result<(), GameError> {
        self.settings = settings;
        self.reset()
    }

    pub fn submit_move(&mut self, col: usize, row: usize) -> Result<(), GameError> {
        let position = Position::new(col, row);
        let stone = match self.game_state.opponent_mode {
            OpponentMode::Bot => self.game_state.player_color,
            OpponentMode::Human => self.game_state.current_color,
        };

        if let Err(e) = self.game_state.place_stone(stone, position) {
            log!(
                "[session:{}] rejected move by {:?} at ({}, {}): {}",
                self.session_id,
                stone,
                col,
                row,
                e
            );
            return Err(e);
        }
        self.notify();

        if self.game_state.opponent_mode == OpponentMode::Bot
            && self.game_state.status == GameStatus::InProgress
        {
            self.play_bot_turn()?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.game_state.status,
            opponent_mode: self.game_state.opponent_mode,
            player_color: self.game_state.player_color,
            bot_color: self.game_state.bot_color,
            current_color: self.game_state.current_color,
            board: self.game_state.board.cells().to_vec(),
            last_move_black: self.game_state.last_move_black,
            last_move_white: self.game_state.last_move_white,
            winning_line: self.game_state.winning_line.clone(),
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.game_state.status {
            GameStatus::Draw => Some(GameOutcome::Draw),
            GameStatus::BlackWon | GameStatus::WhiteWon => {
                if self.game_state.winner() == Some(self.game_state.player_color) {
                    Some(GameOutcome::Won)
                } else {
                    Some(GameOutcome::Lost)
                }
            }
            _ => None,
        }
    }

    pub fn set_observer(&mut self, observer: StateObserver) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn play_bot_turn(&mut self) -> Result<(), GameError> {
        let bot_color = self.game_state.bot_color;
        // A full board has already been declared a draw before this point.
        let Some(bot_move) = calculate_bot_move(&self.game_state.board, bot_color) else {
            return Ok(());
        };

        self.game_state.place_stone(bot_color, bot_move.position)?;
        if self.game_state.winning_line.is_none() {
            self.game_state.board.clear_highlights();
            self.game_state.board.highlight(bot_move.position)?;
        }
        log!(
            "[session:{}] bot played {:?} at ({}, {}) with weight {}",
            self.session_id,
            bot_color,
            bot_move.position.col,
            bot_move.position.row,
            bot_move.weight
        );
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.observer.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.as_mut() {
            observer(&snapshot);
        }
    }
}
