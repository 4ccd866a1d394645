//! The live game.
//!
//! [`GameSession`] owns the one mutable [`GameState`] and is the only place
//! that changes it. Every completed ply goes through the same path: apply the
//! move, record captures, write the move log entry, hand the turn over,
//! classify the new position and push a history snapshot. Search and legality
//! checks only ever see copies of the position.
//!
//! A pawn reaching the last rank suspends the ply. The session then refuses
//! everything but [`GameSession::complete_promotion`] (or undo) until the
//! front-end supplies the piece.

mod history;
mod notation;
mod state;

use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::agent::ai::{search, SearchOutcome};
use crate::agent::{AiPlayer, AiReply, PendingAiMove};
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::game_repr::square::{from_algebraic, to_algebraic};
use crate::game_repr::{Applied, Color, Move, Piece, Position, Square, Type};

pub use history::History;
pub use notation::{describe, pair_moves, CheckMark, MovePair, MoveRecord};
pub use state::{CapturedPieces, GameState, GameStatus};

/// Result of [`GameSession::perform_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The ply is finished and logged
    Completed(MoveRecord),
    /// A pawn stands on this cell waiting for its promotion piece
    AwaitingPromotion(Square),
}

/// A move halted on the last rank.
#[derive(Debug, Clone, Copy)]
struct PendingPromotion {
    applied: Applied,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    history: History,
    pending_promotion: Option<PendingPromotion>,
    config: GameConfig,
    /// Engine seat built from the configured difficulty
    ai: AiPlayer,
    /// Bumped on every change to the live state; detached searches carry the
    /// value they started from.
    generation: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new();
        Self {
            history: History::new(state.clone()),
            state,
            pending_promotion: None,
            ai: AiPlayer::from(config.difficulty),
            config,
            generation: 0,
        }
    }

    /// Back to the standard starting position, history reduced to the
    /// single initial snapshot.
    pub fn new_game(&mut self) {
        self.state = GameState::new();
        self.history.reset(self.state.clone());
        self.pending_promotion = None;
        self.generation += 1;
        info!("new game ({:?}, {})", self.config.mode, self.config.difficulty);
    }

    /// Start over with a different configuration.
    pub fn new_game_with(&mut self, config: GameConfig) {
        self.config = config;
        self.ai = AiPlayer::from(config.difficulty);
        self.new_game();
    }

    /*
     * READ-ONLY VIEWS
     */

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ai_player(&self) -> &AiPlayer {
        &self.ai
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn position(&self) -> &Position {
        &self.state.position
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.state.position.piece_at(sq)
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player
    }

    pub fn move_number(&self) -> u32 {
        self.state.move_number
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.position.en_passant
    }

    /// Pieces captured by `capturer`, in capture order.
    pub fn captured(&self, capturer: Color) -> &[Piece] {
        self.state.captured.by(capturer)
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.state.move_log
    }

    pub fn move_pairs(&self) -> Vec<MovePair<'_>> {
        pair_moves(&self.state.move_log)
    }

    /// Cell of the pawn waiting for its promotion piece.
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion.map(|p| p.applied.mv.to)
    }

    pub fn can_undo(&self) -> bool {
        self.pending_promotion.is_some() || self.history.can_undo()
    }

    /// Whether the engine should make the next move.
    pub fn ai_to_move(&self) -> bool {
        !self.is_game_over()
            && self.pending_promotion.is_none()
            && self.config.ai_to_move(self.state.current_player)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.position.is_in_check(color)
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.state.position.has_legal_moves(color)
    }

    /// Parse an algebraic cell name such as "e4".
    pub fn square(name: &str) -> GameResult<Square> {
        from_algebraic(name).ok_or_else(|| GameError::InvalidSquare {
            name: name.to_string(),
        })
    }

    /*
     * MOVES
     */

    /// Destinations for the piece on `from` when it belongs to the side to
    /// move. Empty for empty cells, opponent pieces, off-board indices, a
    /// finished game or a pending promotion.
    pub fn legal_moves(&self, from: Square) -> SmallVec<[Square; 32]> {
        if from >= 64 || self.pending_promotion.is_some() || self.is_game_over() {
            return SmallVec::new();
        }
        self.state
            .position
            .legal_destinations(from, self.state.current_player)
    }

    /// Play `from` -> `to` for the side to move.
    ///
    /// A pawn reaching the last rank leaves the ply suspended
    /// ([`MoveOutcome::AwaitingPromotion`]) until
    /// [`complete_promotion`](Self::complete_promotion) is called. On error
    /// nothing changes.
    pub fn perform_move(&mut self, from: Square, to: Square) -> GameResult<MoveOutcome> {
        let mv = self.validate(from, to)?;

        let Some(applied) = self.state.position.apply(mv, None) else {
            return Err(GameError::IllegalMove { from, to });
        };
        self.generation += 1;

        if applied.promotion_pending {
            debug!("{} {} waits for a promotion piece", self.state.current_player, mv);
            self.pending_promotion = Some(PendingPromotion { applied });
            return Ok(MoveOutcome::AwaitingPromotion(mv.to));
        }

        Ok(MoveOutcome::Completed(self.finish_ply(applied, None)))
    }

    /// Same as [`perform_move`](Self::perform_move) with algebraic names.
    pub fn perform_move_named(&mut self, from: &str, to: &str) -> GameResult<MoveOutcome> {
        let from = Self::square(from)?;
        let to = Self::square(to)?;
        self.perform_move(from, to)
    }

    /// Replace the waiting pawn with `piece_type` and finish the ply.
    pub fn complete_promotion(&mut self, piece_type: Type) -> GameResult<MoveRecord> {
        let Some(pending) = self.pending_promotion else {
            warn!("promotion to {:?} without a pending promotion", piece_type);
            return Err(GameError::NoPromotionPending);
        };
        if !Type::PROMOTIONS.contains(&piece_type) {
            warn!("refused promotion to {:?}", piece_type);
            return Err(GameError::InvalidPromotionPiece(piece_type));
        }

        let color = pending.applied.moved.color;
        self.state
            .position
            .board
            .set(pending.applied.mv.to, Some(Piece::new(color, piece_type)));
        self.pending_promotion = None;
        self.generation += 1;

        Ok(self.finish_ply(pending.applied, Some(piece_type)))
    }

    fn validate(&self, from: Square, to: Square) -> GameResult<Move> {
        if self.pending_promotion.is_some() {
            warn!("move refused: promotion pending");
            return Err(GameError::PromotionPending);
        }
        if self.is_game_over() {
            warn!("move refused: game over");
            return Err(GameError::GameOver);
        }
        for sq in [from, to] {
            if sq >= 64 {
                return Err(GameError::InvalidSquare {
                    name: sq.to_string(),
                });
            }
        }

        self.state
            .position
            .find_legal_move(from, to, self.state.current_player)
            .ok_or_else(|| {
                warn!("illegal move refused: {} to {}", to_algebraic(from), to_algebraic(to));
                GameError::IllegalMove { from, to }
            })
    }

    /// Bookkeeping shared by every completed ply.
    fn finish_ply(&mut self, applied: Applied, promoted_to: Option<Type>) -> MoveRecord {
        let mover = self.state.current_player;
        let opponent = mover.opposite();

        if let Some(captured) = applied.captured {
            self.state.captured.push(mover, captured);
        }

        let status = GameStatus::classify(&self.state.position, opponent);
        let mark = match status {
            GameStatus::Check => CheckMark::Check,
            GameStatus::Checkmate { .. } => CheckMark::Checkmate,
            GameStatus::Ongoing | GameStatus::Stalemate => CheckMark::None,
        };

        let record = MoveRecord {
            number: self.state.move_number,
            color: mover,
            from: applied.mv.from,
            to: applied.mv.to,
            piece: applied.moved,
            captured: applied.captured,
            kind: applied.mv.kind,
            promoted_to,
            description: describe(
                applied.moved,
                applied.mv.from,
                applied.mv.to,
                applied.mv.kind,
                applied.captured,
                promoted_to,
                mark,
            ),
        };
        debug!("{}. {}: {}", record.number, mover, record.description);

        self.state.move_log.push(record.clone());
        if mover == Color::Black {
            self.state.move_number += 1;
        }
        self.state.current_player = opponent;
        self.state.status = status;

        if status.is_over() {
            info!("game over: {}", status.message(opponent));
        }

        self.history.push(self.state.clone());
        record
    }

    /*
     * ENGINE
     */

    /// Search the live position for `color` without touching it.
    pub fn request_ai_move(&self, depth: u8, color: Color) -> SearchOutcome {
        search(&self.state.position, depth, color)
    }

    /// Detach a search for the side to move at the engine seat's depth.
    pub fn prepare_ai_move(&self) -> GameResult<PendingAiMove> {
        if self.pending_promotion.is_some() {
            return Err(GameError::PromotionPending);
        }
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(self
            .ai
            .prepare(self.state.position, self.state.current_player, self.generation))
    }

    /// Play the move from a finished detached search. Promotions become
    /// queens, as inside the search.
    ///
    /// Fails with [`GameError::StaleSearch`] when the game moved on since
    /// [`prepare_ai_move`](Self::prepare_ai_move), and with
    /// [`GameError::NoMoveAvailable`] when the searching side had no move.
    pub fn commit_ai_move(&mut self, reply: AiReply) -> GameResult<MoveRecord> {
        if reply.generation != self.generation || reply.color != self.state.current_player {
            warn!(
                "dropping stale search result (generation {} vs {})",
                reply.generation, self.generation
            );
            return Err(GameError::StaleSearch);
        }

        let Some(mv) = reply.outcome.best_move else {
            info!("{} has no move to play", reply.color);
            return Err(GameError::NoMoveAvailable);
        };

        match self.perform_move(mv.from, mv.to)? {
            MoveOutcome::Completed(record) => Ok(record),
            MoveOutcome::AwaitingPromotion(_) => self.complete_promotion(Type::Queen),
        }
    }

    /// Prepare, run and commit in one blocking call.
    pub fn play_ai_move(&mut self) -> GameResult<MoveRecord> {
        let pending = self.prepare_ai_move()?;
        let reply = pending.run();
        self.commit_ai_move(reply)
    }

    /*
     * UNDO
     */

    /// Step back one ply. A suspended promotion is cancelled instead, which
    /// returns the pawn to where it came from.
    pub fn undo(&mut self) -> GameResult<()> {
        if self.pending_promotion.take().is_some() {
            self.state = self.history.current().clone();
            self.generation += 1;
            info!("promotion cancelled, {} to move", self.state.current_player);
            return Ok(());
        }

        let Some(previous) = self.history.pop() else {
            warn!("nothing to undo");
            return Err(GameError::NothingToUndo);
        };
        self.state = previous.clone();
        self.generation += 1;
        info!(
            "move undone, {} to move (move {})",
            self.state.current_player, self.state.move_number
        );
        Ok(())
    }
}
