//! The game controller: hold/release moves, stock flips, undo, scoring and
//! win detection over one [`GameState`].
//!
//! Every transition that the player can take back pushes a copy of the state
//! onto the undo history before it mutates anything. Options, the clock and
//! the undo counter live beside the state, so an undo never rewinds them.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::cards_types::Card;
use super::clock::{Clock, SystemClock};
use super::history::UndoHistory;
use super::pile::{Pile, PileKind};
use super::rules::{DrawMode, PileId, TABLEAU_COUNT};
use super::scoring::ScoringMode;
use super::seed_derivation::{derive_time_seed, seed_label};
use super::state::GameState;
use super::tableau::Tableau;
use crate::config::GameOptions;

/// Result of dropping the holding pile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ReleaseOutcome {
    /// The cards landed on the target pile.
    Placed,
    /// The drop was illegal (or nothing was held); the cards went back where they came from.
    Returned,
}

#[derive(Debug)]
pub struct Solitaire {
    state: GameState,
    history: UndoHistory,
    options: GameOptions,
    clock: Arc<dyn Clock>,
    seed: u64,
    undo_count: u32,
}

impl Solitaire {
    /// Deal a new game on the system clock.
    pub fn new(options: GameOptions) -> Self {
        Self::with_clock(options, Arc::new(SystemClock))
    }

    pub fn with_clock(options: GameOptions, clock: Arc<dyn Clock>) -> Self {
        let seed = options
            .seed
            .unwrap_or_else(|| derive_time_seed(clock.as_ref()));
        let state = GameState::deal(seed, options.initial_score);

        info!(
            seed,
            label = %seed_label(seed),
            scoring = ?options.scoring,
            draw = ?options.draw,
            initial_score = options.initial_score,
            "Dealt new game"
        );

        Self::from_state(state, options, clock, seed)
    }

    pub(crate) fn from_state(
        state: GameState,
        options: GameOptions,
        clock: Arc<dyn Clock>,
        seed: u64,
    ) -> Self {
        Self {
            state,
            history: UndoHistory::new(options.undo_limit),
            options,
            clock,
            seed,
            undo_count: 0,
        }
    }

    /// Settle this game and deal the next one under `options`.
    ///
    /// The new deal's starting score comes from
    /// [`GameOptions::initial_score_after`], so a cumulative Vegas bankroll
    /// carries over less the stake.
    pub fn next_game(&mut self, mut options: GameOptions) -> Solitaire {
        let previous = self.score();
        options.initial_score = options.initial_score_after(previous);
        Self::with_clock(options, Arc::clone(&self.clock))
    }

    /// Restart on `seed` with the current options.
    ///
    /// With cumulative Vegas scoring the bankroll carries over unchanged; no
    /// fresh stake is charged for a replay.
    pub fn replay_seed(&mut self, seed: u64) -> Solitaire {
        let previous = self.score();
        let mut options = self.options.clone().with_seed(seed);
        options.initial_score = if options.cumulative && options.scoring == ScoringMode::Vegas {
            previous
        } else {
            options.initial_score_after(previous)
        };
        Self::with_clock(options, Arc::clone(&self.clock))
    }

    // ---- transitions ----

    /// Pick up cards from `column` into the holding pile.
    ///
    /// From the waste (or the stock sentinel) and from a foundation only the
    /// top card is lifted; from a tableau column the top `count` face-up cards
    /// are. Returns how many cards are now held.
    pub fn hold(&mut self, column: PileId, count: usize) -> usize {
        if !self.state.holding.is_empty() {
            warn!(
                ?column,
                held = self.state.holding.height(),
                "hold while already holding; ignored"
            );
            return 0;
        }

        let origin = match column {
            PileId::Stock => PileId::Waste,
            other => other,
        };
        if Self::pile_mut(&mut self.state, origin).is_none() {
            warn!(?origin, "hold from a pile that does not exist");
            return 0;
        }

        self.pre_move();
        self.state.hold_origin = Some(origin);

        let take = match origin {
            PileId::Tableau(_) => count,
            PileId::Foundation(_) | PileId::Waste | PileId::Stock => 1,
        };
        let state = &mut self.state;
        let lifted = Self::pile_mut(state, origin)
            .map(|source| Pile::split_from(PileKind::Tableau, source, take));
        if let Some(lifted) = lifted {
            state.holding = lifted;
        }

        debug!(?origin, requested = count, held = state.holding.height(), "hold");
        state.holding.height()
    }

    /// The pile a card is lifted from or returned to; a tableau means its face-up cards.
    fn pile_mut(state: &mut GameState, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Waste | PileId::Stock => Some(&mut state.waste),
            PileId::Foundation(i) => state.foundations.get_mut(i),
            PileId::Tableau(i) => state.tableaus.get_mut(i).map(Tableau::visible_mut),
        }
    }

    /// Drop the holding pile on `target`, or return it to its origin.
    ///
    /// `None` stands for a drop over no pile and is always illegal.
    pub fn release(&mut self, target: Option<PileId>) -> ReleaseOutcome {
        if self.state.holding.is_empty() {
            return ReleaseOutcome::Returned;
        }
        let Some(origin) = self.state.hold_origin else {
            warn!(held = self.state.holding.height(), "holding cards without an origin");
            return ReleaseOutcome::Returned;
        };

        let mode = self.options.scoring;
        let placed = match target {
            Some(PileId::Foundation(i)) => self.drop_on_foundation(i, origin, mode),
            Some(PileId::Tableau(i)) => self.drop_on_tableau(i, origin, mode),
            Some(PileId::Waste | PileId::Stock) | None => false,
        };

        let state = &mut self.state;
        if placed {
            // Uncover the previous draw once the waste runs out.
            if origin == PileId::Waste && state.waste.is_empty() {
                if let Some(card) = state.discard.remove_top() {
                    state.waste.force_add(card);
                }
            }
        } else {
            Self::return_to_origin(state, origin);
        }
        state.holding.clear();

        debug!(?origin, ?target, placed, score = state.board.score(), "release");
        self.check_for_win();

        if placed {
            ReleaseOutcome::Placed
        } else {
            ReleaseOutcome::Returned
        }
    }

    fn drop_on_foundation(&mut self, index: usize, origin: PileId, mode: ScoringMode) -> bool {
        let state = &mut self.state;
        let Some(foundation) = state.foundations.get_mut(index) else {
            return false;
        };
        if !foundation.add_all(&mut state.holding) {
            return false;
        }
        if !origin.is_foundation() {
            state.board.change(mode, mode.to_foundation());
        }
        true
    }

    fn drop_on_tableau(&mut self, index: usize, origin: PileId, mode: ScoringMode) -> bool {
        let state = &mut self.state;
        let Some(tableau) = state.tableaus.get_mut(index) else {
            return false;
        };
        let king_on_covered_gap = state.holding.bottom().is_some_and(|c| c.is_king())
            && tableau.visible().is_empty()
            && !tableau.hidden().is_empty();
        if king_on_covered_gap || !tableau.visible_mut().add_all(&mut state.holding) {
            return false;
        }
        match origin {
            PileId::Waste | PileId::Stock => state.board.change(mode, mode.waste_to_tableau()),
            PileId::Foundation(_) => state.board.change(mode, mode.foundation_to_tableau()),
            PileId::Tableau(_) => {}
        }
        true
    }

    fn return_to_origin(state: &mut GameState, origin: PileId) {
        let mut held = std::mem::replace(&mut state.holding, Pile::new(PileKind::Tableau));
        match Self::pile_mut(state, origin) {
            Some(pile) => pile.force_add_all(&mut held),
            None => warn!(?origin, "origin pile missing; held cards dropped"),
        }
    }

    /// Turn over the next draw from the stock, recycling it when it is empty.
    pub fn flip_hand(&mut self) -> bool {
        self.flip_hand_with(self.options.draw.count())
    }

    /// Like [`flip_hand`](Self::flip_hand) with an explicit draw count.
    ///
    /// The move is recorded (clock started, undo snapshot taken) before the
    /// stock is checked, so a click on a closed Vegas stock still counts as a
    /// move; it returns false and leaves the piles alone. An empty stock is
    /// always recycled, even when the discard pile is empty too.
    pub fn flip_hand_with(&mut self, count: usize) -> bool {
        self.pre_move();
        if !self.can_flip_hand() {
            debug!(resets = self.state.resets, "stock is closed");
            return false;
        }

        let state = &mut self.state;
        while let Some(card) = state.waste.remove_bottom() {
            state.discard.force_add(card);
        }

        if state.stock.is_empty() {
            self.recycle();
            return true;
        }

        for _ in 0..count {
            let Some(card) = state.stock.remove_bottom() else {
                break;
            };
            state.waste.force_add(card);
        }
        debug!(
            count,
            stock = state.stock.height(),
            waste = state.waste.height(),
            "flip hand"
        );
        true
    }

    fn recycle(&mut self) {
        let mode = self.options.scoring;
        let draw = self.options.draw;
        let state = &mut self.state;

        state.stock = std::mem::replace(&mut state.discard, Pile::new(PileKind::Deal));
        state.waste.clear();
        state.resets += 1;
        state.board.change(mode, mode.recycle_penalty(draw, state.resets));

        info!(
            resets = state.resets,
            stock = state.stock.height(),
            score = state.board.score(),
            "Recycled stock"
        );
    }

    /// Whether the stock can still be clicked.
    ///
    /// Vegas closes an empty stock once it has been recycled as often as the
    /// draw mode allows.
    pub fn can_flip_hand(&self) -> bool {
        !(self.state.stock.is_empty()
            && self.options.scoring == ScoringMode::Vegas
            && self.state.resets >= self.options.draw.recycle_cap())
    }

    /// Turn up the top face-down card of a column whose face-up cards are gone.
    ///
    /// Every call on a real column is a move: it is recorded for undo and
    /// earns the Standard flip bonus. Only the flip itself depends on the
    /// column needing one. Returns whether a card was turned over.
    pub fn flip_column(&mut self, column: usize) -> bool {
        debug_assert!(column < TABLEAU_COUNT, "tableau column {column} out of range");
        if column >= TABLEAU_COUNT {
            warn!(column, "flip of a column that does not exist");
            return false;
        }

        self.pre_move();

        let mode = self.options.scoring;
        let state = &mut self.state;
        let flipped = state.tableaus[column].flip_over_card();
        state.board.change(mode, mode.turn_over_tableau_card());
        debug!(column, flipped, score = state.board.score(), "flip column");
        flipped
    }

    /// Restore the state from before the most recent move.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.state = previous;
        self.undo_count += 1;
        debug!(undos = self.undo_count, remaining = self.history.len(), "undo");
        true
    }

    /// Freeze the clock and award the time bonus the first time all four
    /// foundations are complete.
    pub fn check_for_win(&mut self) {
        if self.state.won_at_secs.is_some() || !self.state.all_foundations_complete() {
            return;
        }
        let secs = self.elapsed_secs();
        self.state.won_at_secs = Some(secs);

        let bonus = self.options.scoring.win_bonus(secs, self.undo_count);
        self.state.board.add_bonus(bonus);

        info!(
            seed = self.seed,
            secs,
            bonus,
            undos = self.undo_count,
            score = self.state.board.score(),
            "Game won"
        );
    }

    // ---- scoring and timing ----

    /// Current score with every due time penalty charged.
    pub fn score(&mut self) -> i32 {
        self.settle_time_penalties();
        self.state.board.score()
    }

    /// Charge the 10-second penalties that have come due; returns how many.
    pub fn settle_time_penalties(&mut self) -> u32 {
        let secs = self.time_secs();
        self.state
            .board
            .settle_time_penalties(self.options.scoring, self.options.timed, secs)
    }

    pub fn penalty_anchor(&self) -> u32 {
        self.state.board.penalty_anchor()
    }

    /// Seconds played: frozen once won, 0 before the first move.
    pub fn time_secs(&self) -> u32 {
        self.state
            .won_at_secs
            .unwrap_or_else(|| self.elapsed_secs())
    }

    fn elapsed_secs(&self) -> u32 {
        match self.state.first_move_at {
            Some(start) => {
                let millis = (self.clock.now_millis() - start).max(0);
                u32::try_from(millis / 1000).unwrap_or(u32::MAX)
            }
            None => 0,
        }
    }

    fn pre_move(&mut self) {
        self.history.push(self.state.clone());
        if self.state.first_move_at.is_none() {
            self.state.first_move_at = Some(self.clock.now_millis());
        }
    }

    // ---- options ----

    pub fn set_timed(&mut self, timed: bool) {
        self.options.timed = timed;
    }

    pub fn set_cumulative(&mut self, cumulative: bool) {
        self.options.cumulative = cumulative;
    }

    // ---- queries ----

    pub fn tableau(&self, index: usize) -> Option<&Tableau> {
        self.state.tableaus.get(index)
    }

    pub fn foundation(&self, index: usize) -> Option<&Pile> {
        self.state.foundations.get(index)
    }

    pub fn stock(&self) -> &Pile {
        &self.state.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.state.waste
    }

    pub fn discard(&self) -> &Pile {
        &self.state.discard
    }

    pub fn holding(&self) -> &Pile {
        &self.state.holding
    }

    /// Top card of the waste, the one a click on the hand picks up.
    pub fn waste_top(&self) -> Option<Card> {
        self.state.waste.top()
    }

    pub fn is_won(&self) -> bool {
        self.state.won_at_secs.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.options.scoring
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.options.draw
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn resets(&self) -> u32 {
        self.state.resets
    }

    pub fn undo_count(&self) -> u32 {
        self.undo_count
    }

    pub fn hold_origin(&self) -> Option<PileId> {
        self.state.hold_origin
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Total cards on the table; 52 at every step of a well-formed game.
    pub fn card_count(&self) -> usize {
        self.state.card_count()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}
