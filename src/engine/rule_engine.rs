//! The checkers rule engine.
//!
//! `RuleEngine` owns the whole game: board, token and king counts, turn and
//! selection state, status and configuration. Callers drive it with discrete
//! actions (`select`, `apply_move`, `deselect`, `reset`); every action either
//! completes or is rejected with the state left exactly as it was.

use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::engine::config::{ContinuationPolicy, EngineConfig};
use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::TOKENS_PER_SIDE;
use crate::game_state::checkers_types::*;
use crate::game_state::turn_state::TurnState;
use crate::move_generation::move_enumeration::{captures_from, enumerate_moves};
use crate::move_generation::move_validation::check_move;
use crate::move_generation::termination::evaluate_termination;
use crate::utils::board_parser::parse_layout;

/// Everything one applied move did to the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Captured squares in the order they were jumped.
    pub captured: Vec<Square>,
    pub promoted: bool,
    pub turn_advanced: bool,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone)]
pub struct RuleEngine {
    board: Board,
    tokens: [u8; 2],
    kings: [u8; 2],
    turn: TurnState,
    status: GameStatus,
    config: EngineConfig,
    rng: StdRng,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Standard game: starting layout, Red to move, manual continuation.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut rng = config.starting_side.rng();
        let side = config.starting_side.pick(&mut rng);
        Self {
            board: Board::starting(),
            tokens: [TOKENS_PER_SIDE; 2],
            kings: [0; 2],
            turn: TurnState::new(side),
            status: GameStatus::Ongoing,
            config,
            rng,
        }
    }

    /// Engine set up on an arbitrary position in text layout form.
    ///
    /// Token and king counts are taken from the board, and the status is
    /// evaluated immediately so an already finished position is reported as
    /// such.
    pub fn from_layout(
        layout: &str,
        side_to_move: Side,
        config: EngineConfig,
    ) -> CheckersResult<Self> {
        let board = parse_layout(layout)?;
        let mut engine = Self::with_config(config);
        engine.tokens = Side::ALL.map(|side| board.count_pieces(side));
        engine.kings = Side::ALL.map(|side| board.count_kings(side));
        engine.board = board;
        engine.turn = TurnState::new(side_to_move);
        engine.status = engine.check_termination();
        Ok(engine)
    }

    /// Discard the current game and start over from the canonical position.
    pub fn reset(&mut self) {
        let side = self.config.starting_side.pick(&mut self.rng);
        self.board = Board::starting();
        self.tokens = [TOKENS_PER_SIDE; 2];
        self.kings = [0; 2];
        self.turn = TurnState::new(side);
        self.status = GameStatus::Ongoing;
        info!(starting_side = %side, "game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[inline]
    pub fn current_side(&self) -> Side {
        self.turn.current_side
    }

    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.turn.selection
    }

    #[inline]
    pub fn forced_continuation(&self) -> bool {
        self.turn.forced_continuation
    }

    #[inline]
    pub fn tokens_remaining(&self, side: Side) -> u8 {
        self.tokens[side.index()]
    }

    #[inline]
    pub fn king_count(&self, side: Side) -> u8 {
        self.kings[side.index()]
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pick up a piece of the side to move.
    ///
    /// Re-selecting the selected square succeeds without changing anything.
    /// While a capture chain is open only the chain piece can be selected.
    pub fn select(&mut self, square: Square) -> CheckersResult<()> {
        self.check_select(square).inspect_err(|err| {
            debug!(%square, %err, "selection rejected");
        })?;
        self.turn.selection = Some(square);
        Ok(())
    }

    fn check_select(&self, square: Square) -> CheckersResult<()> {
        self.ensure_ongoing()?;
        if let Some(locked) = self.turn.continuation_square() {
            if locked != square {
                return Err(CheckersError::ContinuationRequired(locked));
            }
        }
        if !square.is_on_board() {
            return Err(CheckersError::OffBoard(square));
        }
        let piece = self
            .board
            .piece_at(square)
            .ok_or(CheckersError::EmptySquare(square))?;
        if piece.owner != self.turn.current_side {
            return Err(CheckersError::NotYourPiece(square));
        }
        Ok(())
    }

    /// Drop the selection.
    ///
    /// During an open capture chain this also ends the chain and passes the
    /// turn; the game may end as a result, in which case the outcome is
    /// returned.
    pub fn deselect(&mut self) -> Option<Outcome> {
        if self.turn.selection.is_none() {
            return None;
        }
        if !self.turn.forced_continuation {
            self.turn.selection = None;
            return None;
        }

        trace!(side = %self.turn.current_side, "capture chain stopped");
        self.turn.advance();
        self.conclude_action()
    }

    /// Legality of moving the side to move from `from` to `to`.
    pub fn validate_move(&self, from: Square, to: Square) -> MoveResult {
        match self.check_move(from, to) {
            Ok(captured) => MoveResult::legal(captured),
            Err(err) => {
                debug!(%from, %to, %err, "move rejected");
                MoveResult::ILLEGAL
            }
        }
    }

    /// Like `validate_move`, but with the reason for a rejection.
    pub fn check_move(&self, from: Square, to: Square) -> CheckersResult<Option<Square>> {
        self.ensure_ongoing()?;
        check_move(&self.board, &self.turn, self.turn.current_side, from, to)
    }

    /// Apply a validated move and return the outcome if it ended the game.
    ///
    /// `captured` must be what `validate_move(from, to)` reports; the move is
    /// re-checked and rejected without side effects otherwise.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        captured: Option<Square>,
    ) -> CheckersResult<Option<Outcome>> {
        self.apply_move_detailed(from, to, captured)
            .map(|report| report.outcome)
    }

    /// `apply_move` returning the full `MoveReport`.
    pub fn apply_move_detailed(
        &mut self,
        from: Square,
        to: Square,
        captured: Option<Square>,
    ) -> CheckersResult<MoveReport> {
        let expected = self.check_move(from, to).inspect_err(|err| {
            debug!(%from, %to, %err, "move rejected");
        })?;
        if expected != captured {
            return Err(CheckersError::CaptureMismatch {
                expected,
                supplied: captured,
            });
        }

        let mover = self.turn.current_side;
        let mut report = MoveReport::default();
        self.execute(Move { from, to, captured }, &mut report)?;

        if captured.is_none() {
            self.turn.advance();
            report.turn_advanced = true;
        } else {
            self.turn.selection = Some(to);
            match self.config.continuation {
                ContinuationPolicy::Manual => {
                    if captures_from(&self.board, mover, to).is_empty() {
                        self.turn.advance();
                        report.turn_advanced = true;
                    } else {
                        self.turn.forced_continuation = true;
                    }
                }
                ContinuationPolicy::AutoChain => {
                    let mut at = to;
                    while let Some(next) = captures_from(&self.board, mover, at).first().copied() {
                        self.execute(next, &mut report)?;
                        at = next.to;
                    }
                    self.turn.advance();
                    report.turn_advanced = true;
                }
            }
        }

        report.outcome = self.conclude_action();
        Ok(report)
    }

    /// Every legal move of `side` in the current position.
    pub fn enumerate_moves(&self, side: Side) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        enumerate_moves(&self.board, &self.turn, side)
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.enumerate_moves(self.turn.current_side)
    }

    pub fn check_termination(&self) -> GameStatus {
        evaluate_termination(&self.board, &self.turn, self.tokens)
    }

    fn ensure_ongoing(&self) -> CheckersResult<()> {
        match self.status.outcome() {
            Some(outcome) => Err(CheckersError::GameOver(outcome)),
            None => Ok(()),
        }
    }

    /// Relocate, promote and capture for one step or jump.
    fn execute(&mut self, mv: Move, report: &mut MoveReport) -> CheckersResult<()> {
        let piece = self
            .board
            .take(mv.from)
            .ok_or(CheckersError::EmptySquare(mv.from))?;
        self.board.place(mv.to, piece)?;
        trace!(from = %mv.from, to = %mv.to, side = %piece.owner, "piece moved");

        if !piece.is_king() && mv.to.row == piece.owner.promotion_row() && self.board.crown(mv.to) {
            self.kings[piece.owner.index()] += 1;
            report.promoted = true;
            trace!(square = %mv.to, side = %piece.owner, "man crowned");
        }

        if let Some(jumped) = mv.captured {
            if let Some(victim) = self.board.take(jumped) {
                let idx = victim.owner.index();
                self.tokens[idx] = self.tokens[idx].saturating_sub(1);
                if victim.is_king() {
                    self.kings[idx] = self.kings[idx].saturating_sub(1);
                }
                report.captured.push(jumped);
                trace!(square = %jumped, side = %victim.owner, "piece captured");
            }
        }
        Ok(())
    }

    /// Re-evaluate the status after a completed action.
    fn conclude_action(&mut self) -> Option<Outcome> {
        self.status = self.check_termination();
        let outcome = self.status.outcome();
        if let Some(outcome) = outcome {
            self.turn.selection = None;
            self.turn.forced_continuation = false;
            info!(%outcome, "game over");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::StartingSide;

    fn engine_on(layout: &str, side: Side) -> RuleEngine {
        RuleEngine::from_layout(layout, side, EngineConfig::default()).expect("layout should parse")
    }

    fn snapshot(engine: &RuleEngine) -> (Board, TurnState, GameStatus, [u8; 2], [u8; 2]) {
        (
            engine.board().clone(),
            engine.turn_state(),
            engine.status(),
            [engine.tokens_remaining(Side::Red), engine.tokens_remaining(Side::Blue)],
            [engine.king_count(Side::Red), engine.king_count(Side::Blue)],
        )
    }

    const CHAIN_LAYOUT: &str = "
        -r------
        --------
        ---r----
        --b-----
        --------
        --b-----
        --------
        ------b-";

    #[test]
    fn opening_step_passes_the_turn() {
        let mut engine = RuleEngine::new();
        assert_eq!(engine.current_side(), Side::Red);
        assert_eq!(
            engine.validate_move((2, 1).into(), (3, 0).into()),
            MoveResult::legal(None)
        );

        engine.select((2, 1).into()).expect("own piece");
        let outcome = engine
            .apply_move((2, 1).into(), (3, 0).into(), None)
            .expect("legal move");

        assert_eq!(outcome, None);
        assert_eq!(engine.current_side(), Side::Blue);
        assert_eq!(engine.selection(), None);
        assert!(!engine.forced_continuation());
        assert_eq!(engine.board().piece_at((3, 0).into()), Some(Piece::man(Side::Red)));
        assert!(engine.board().is_vacant((2, 1).into()));
    }

    #[test]
    fn capture_with_follow_up_opens_a_chain() {
        let mut engine = engine_on(CHAIN_LAYOUT, Side::Red);
        let result = engine.validate_move((2, 3).into(), (4, 1).into());
        assert_eq!(result, MoveResult::legal(Some((3, 2).into())));

        let outcome = engine
            .apply_move((2, 3).into(), (4, 1).into(), result.captured)
            .expect("legal capture");

        assert_eq!(outcome, None);
        assert_eq!(engine.tokens_remaining(Side::Blue), 2);
        assert!(engine.board().is_vacant((3, 2).into()));
        assert!(engine.forced_continuation());
        assert_eq!(engine.selection(), Some((4, 1).into()));
        assert_eq!(engine.current_side(), Side::Red);

        // Only the chain piece may move, and only by capturing.
        assert_eq!(
            engine.legal_moves(),
            vec![Move {
                from: (4, 1).into(),
                to: (6, 3).into(),
                captured: Some((5, 2).into()),
            }]
        );
        assert!(!engine.validate_move((0, 1).into(), (1, 0).into()).legal);
        assert!(!engine.validate_move((4, 1).into(), (5, 0).into()).legal);
        assert_eq!(
            engine.select((0, 1).into()),
            Err(CheckersError::ContinuationRequired((4, 1).into()))
        );
        assert_eq!(engine.select((4, 1).into()), Ok(()));

        let report = engine
            .apply_move_detailed((4, 1).into(), (6, 3).into(), Some((5, 2).into()))
            .expect("second jump");
        assert_eq!(report.captured, vec![Square::new(5, 2)]);
        assert!(report.turn_advanced);
        assert_eq!(engine.current_side(), Side::Blue);
        assert_eq!(engine.tokens_remaining(Side::Blue), 1);
        assert_eq!(engine.status(), GameStatus::Ongoing);
    }

    #[test]
    fn deselect_ends_an_open_chain() {
        let mut engine = engine_on(CHAIN_LAYOUT, Side::Red);
        engine
            .apply_move((2, 3).into(), (4, 1).into(), Some((3, 2).into()))
            .expect("legal capture");
        assert!(engine.forced_continuation());

        assert_eq!(engine.deselect(), None);
        assert_eq!(engine.current_side(), Side::Blue);
        assert_eq!(engine.selection(), None);
        assert!(!engine.forced_continuation());
        assert_eq!(engine.tokens_remaining(Side::Blue), 2);
    }

    #[test]
    fn capture_without_follow_up_passes_the_turn() {
        let mut engine = engine_on(
            "--------
             --------
             ---r----
             --b-----
             --------
             --------
             --------
             ------b-",
            Side::Red,
        );
        let report = engine
            .apply_move_detailed((2, 3).into(), (4, 1).into(), Some((3, 2).into()))
            .expect("legal capture");
        assert!(report.turn_advanced);
        assert!(!engine.forced_continuation());
        assert_eq!(engine.current_side(), Side::Blue);
        // One token each after the capture.
        assert_eq!(report.outcome, Some(Outcome::Draw));
        assert_eq!(engine.status(), GameStatus::Draw);
    }

    #[test]
    fn auto_chain_takes_every_jump_in_one_call() {
        let config = EngineConfig::default().with_continuation(ContinuationPolicy::AutoChain);
        let mut engine =
            RuleEngine::from_layout(CHAIN_LAYOUT, Side::Red, config).expect("layout should parse");

        let report = engine
            .apply_move_detailed((2, 3).into(), (4, 1).into(), Some((3, 2).into()))
            .expect("legal capture");

        assert_eq!(report.captured, vec![Square::new(3, 2), Square::new(5, 2)]);
        assert!(report.turn_advanced);
        assert_eq!(engine.board().piece_at((6, 3).into()), Some(Piece::man(Side::Red)));
        assert_eq!(engine.current_side(), Side::Blue);
        assert!(!engine.forced_continuation());
        assert_eq!(engine.tokens_remaining(Side::Blue), 1);
    }

    #[test]
    fn reaching_the_back_rank_crowns_a_man() {
        let mut engine = engine_on(
            "-r------
             --------
             --------
             ----b---
             --------
             --------
             -r------
             --------",
            Side::Red,
        );
        let report = engine
            .apply_move_detailed((6, 1).into(), (7, 2).into(), None)
            .expect("legal move");
        assert!(report.promoted);
        assert_eq!(engine.board().piece_at((7, 2).into()), Some(Piece::king(Side::Red)));
        assert_eq!(engine.king_count(Side::Red), 1);
        assert_eq!(engine.king_count(Side::Blue), 0);
    }

    #[test]
    fn blue_man_is_crowned_on_row_zero() {
        let mut engine = engine_on(
            "--------
             b-------
             --------
             --------
             --------
             ----r---
             -------r
             --------",
            Side::Blue,
        );
        let report = engine
            .apply_move_detailed((1, 0).into(), (0, 1).into(), None)
            .expect("legal move");
        assert!(report.promoted);
        assert!(report.turn_advanced);
        assert_eq!(engine.board().piece_at((0, 1).into()), Some(Piece::king(Side::Blue)));
        assert_eq!(engine.king_count(Side::Blue), 1);
        assert_eq!(engine.king_count(Side::Red), 0);
        assert_eq!(engine.status(), GameStatus::Ongoing);
    }

    #[test]
    fn lone_side_with_moves_left_still_wins_on_tokens() {
        let engine = engine_on(
            "--------
             --------
             --------
             ---r----
             --------
             --------
             --------
             --------",
            Side::Red,
        );
        assert_eq!(engine.tokens_remaining(Side::Blue), 0);
        assert_eq!(engine.status(), GameStatus::Won(Side::Red));
    }

    #[test]
    fn crowned_king_can_keep_capturing_backwards() {
        let mut engine = engine_on(
            "-------r
             --------
             -b------
             --------
             --------
             --r-----
             ---b-b--
             --------",
            Side::Red,
        );
        let report = engine
            .apply_move_detailed((5, 2).into(), (7, 4).into(), Some((6, 3).into()))
            .expect("capture onto the back rank");
        assert!(report.promoted);
        assert!(!report.turn_advanced);
        assert_eq!(engine.king_count(Side::Red), 1);
        assert!(engine.forced_continuation());
        assert_eq!(engine.selection(), Some((7, 4).into()));

        let report = engine
            .apply_move_detailed((7, 4).into(), (5, 6).into(), Some((6, 5).into()))
            .expect("backward jump by the new king");
        assert!(!report.promoted);
        assert!(report.turn_advanced);
        assert_eq!(engine.king_count(Side::Red), 1);
        assert_eq!(engine.tokens_remaining(Side::Blue), 1);
        assert_eq!(engine.status(), GameStatus::Ongoing);
    }

    #[test]
    fn last_token_captured_wins_and_locks_the_game() {
        let mut engine = engine_on(
            "-r------
             --------
             ---r----
             --b-----
             --------
             --------
             --------
             --------",
            Side::Red,
        );
        let outcome = engine
            .apply_move((2, 3).into(), (4, 1).into(), Some((3, 2).into()))
            .expect("legal capture");
        assert_eq!(outcome, Some(Outcome::Won(Side::Red)));
        assert_eq!(engine.tokens_remaining(Side::Blue), 0);
        assert_eq!(engine.check_termination(), GameStatus::Won(Side::Red));

        let game_over = CheckersError::GameOver(Outcome::Won(Side::Red));
        assert_eq!(engine.select((4, 1).into()), Err(game_over.clone()));
        assert_eq!(engine.apply_move((4, 1).into(), (5, 0).into(), None), Err(game_over));
        assert!(engine.legal_moves().is_empty());

        engine.reset();
        assert_eq!(engine.status(), GameStatus::Ongoing);
        assert_eq!(engine.board(), &Board::starting());
        assert_eq!(engine.tokens_remaining(Side::Blue), TOKENS_PER_SIDE);
        assert_eq!(engine.current_side(), Side::Red);
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let mut engine = RuleEngine::new();
        let before = snapshot(&engine);

        assert_eq!(engine.select((3, 0).into()), Err(CheckersError::EmptySquare((3, 0).into())));
        assert_eq!(engine.select((5, 0).into()), Err(CheckersError::NotYourPiece((5, 0).into())));
        assert_eq!(engine.select((8, 1).into()), Err(CheckersError::OffBoard((8, 1).into())));
        assert!(engine.apply_move((2, 1).into(), (4, 3).into(), None).is_err());
        assert_eq!(
            engine.apply_move((2, 1).into(), (3, 0).into(), Some((2, 1).into())),
            Err(CheckersError::CaptureMismatch {
                expected: None,
                supplied: Some((2, 1).into()),
            })
        );
        assert!(!engine.validate_move((2, 1).into(), (3, -1).into()).legal);
        assert!(!engine.validate_move((-4, 1).into(), (3, 0).into()).legal);

        assert_eq!(snapshot(&engine), before);
    }

    #[test]
    fn repeated_select_and_idle_deselect_are_no_ops() {
        let mut engine = RuleEngine::new();
        assert_eq!(engine.deselect(), None);
        let idle = snapshot(&engine);

        engine.select((2, 1).into()).expect("own piece");
        let selected = snapshot(&engine);
        engine.select((2, 1).into()).expect("same piece again");
        assert_eq!(snapshot(&engine), selected);

        assert_eq!(engine.deselect(), None);
        assert_eq!(snapshot(&engine), idle);
    }

    #[test]
    fn from_layout_reports_finished_positions() {
        let engine = engine_on(
            "--------
             --------
             --R-----
             --------
             --------
             -----b--
             --------
             --------",
            Side::Blue,
        );
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.king_count(Side::Red), 1);
        assert_eq!(engine.tokens_remaining(Side::Blue), 1);
    }

    #[test]
    fn seeded_random_start_repeats_across_engines() {
        let config = EngineConfig::default()
            .with_starting_side(StartingSide::Random { seed: Some(11) });
        let mut a = RuleEngine::with_config(config);
        let mut b = RuleEngine::with_config(config);
        assert_eq!(a.config(), &config);
        for _ in 0..8 {
            assert_eq!(a.current_side(), b.current_side());
            a.reset();
            b.reset();
        }
    }
}
