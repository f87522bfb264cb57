//! The state transition function.
//!
//! `try_apply_move` works on a scratch clone of the input. On success the
//! move counter is bumped and the win flag recomputed; on failure the
//! scratch copy is dropped and the caller's state is untouched.

use crate::core::{GameState, Move, MoveDescriptor, TABLEAU_COLUMNS};

use super::outcome::{MoveOutcome, Rejection};
use super::placement::{can_move_to_foundation, can_stack_on_tableau, is_valid_run};
use super::win::is_won;

/// Try a move, reporting why it was refused.
#[must_use]
pub fn try_apply_move(state: &GameState, mv: &Move) -> MoveOutcome {
    let mut next = state.clone();
    match transition(&mut next, mv) {
        Ok(()) => {
            next.move_count += 1;
            next.won = is_won(&next);
            MoveOutcome::Applied(next)
        }
        Err(rejection) => MoveOutcome::Rejected(rejection),
    }
}

/// Apply a move; an illegal move returns the state unchanged.
#[must_use]
pub fn apply_move(state: &GameState, mv: &Move) -> GameState {
    try_apply_move(state, mv).into_state_or(state)
}

/// Resolve and try a loose descriptor.
#[must_use]
pub fn try_apply_descriptor(state: &GameState, desc: &MoveDescriptor) -> MoveOutcome {
    match desc.to_move() {
        Some(mv) => try_apply_move(state, &mv),
        None => MoveOutcome::Rejected(Rejection::Malformed),
    }
}

/// Resolve and apply a loose descriptor; malformed or illegal moves return
/// the state unchanged.
#[must_use]
pub fn apply_descriptor(state: &GameState, desc: &MoveDescriptor) -> GameState {
    try_apply_descriptor(state, desc).into_state_or(state)
}

fn column(index: usize) -> Result<usize, Rejection> {
    if index < TABLEAU_COLUMNS {
        Ok(index)
    } else {
        Err(Rejection::NoSuchColumn(index))
    }
}

/// Mutate `s` in place. `s` is a scratch copy; on `Err` it is discarded.
fn transition(s: &mut GameState, mv: &Move) -> Result<(), Rejection> {
    match *mv {
        Move::FlipStock => {
            let draw = s.draw.cards();
            let sw = &mut s.stock_waste;
            for _ in 0..draw {
                match sw.stock.pop() {
                    Some(card) => sw.waste.push(card.turned_up()),
                    None => break,
                }
            }
        }

        Move::RecycleStock => {
            let sw = &mut s.stock_waste;
            if !sw.stock.is_empty() {
                return Err(Rejection::StockNotEmpty);
            }
            while let Some(card) = sw.waste.pop() {
                sw.stock.push(card.turned_down());
            }
        }

        Move::TableauToTableau { from, count, to } => {
            let (from, to) = (column(from)?, column(to)?);
            if from == to {
                return Err(Rejection::SameColumn);
            }
            if count == 0 {
                return Err(Rejection::EmptyRun);
            }
            let available = s.tableau[from].len();
            if available == 0 {
                return Err(Rejection::EmptyColumn(from));
            }
            let run = s.tableau[from]
                .take_top(count)
                .ok_or(Rejection::NotEnoughCards { column: from, requested: count, available })?;
            if !run.iter().all(|c| c.face_up) {
                return Err(Rejection::FaceDown);
            }
            if !is_valid_run(&run) {
                return Err(Rejection::BrokenRun);
            }
            let bottom = run.get(0).copied().ok_or(Rejection::EmptyRun)?;
            if !can_stack_on_tableau(&bottom, s.tableau[to].top()) {
                return Err(Rejection::IllegalPlacement { card: bottom, column: to });
            }
            s.tableau[to].append(run);
            s.tableau[from].reveal_top();
        }

        Move::TableauToFoundation { from } => {
            let from = column(from)?;
            let card = *s.tableau[from].top().ok_or(Rejection::EmptyColumn(from))?;
            if !card.face_up {
                return Err(Rejection::FaceDown);
            }
            if !can_move_to_foundation(&card, s.foundations.pile(card.suit)) {
                return Err(Rejection::NotNextForFoundation(card));
            }
            s.tableau[from].pop();
            s.foundations.pile_mut(card.suit).push(card);
            s.tableau[from].reveal_top();
        }

        Move::WasteToTableau { to } => {
            let to = column(to)?;
            let card = *s.stock_waste.waste.top().ok_or(Rejection::EmptyWaste)?;
            if !can_stack_on_tableau(&card, s.tableau[to].top()) {
                return Err(Rejection::IllegalPlacement { card, column: to });
            }
            s.stock_waste.waste.pop();
            s.tableau[to].push(card);
        }

        Move::WasteToFoundation => {
            let card = *s.stock_waste.waste.top().ok_or(Rejection::EmptyWaste)?;
            if !can_move_to_foundation(&card, s.foundations.pile(card.suit)) {
                return Err(Rejection::NotNextForFoundation(card));
            }
            s.stock_waste.waste.pop();
            s.foundations.pile_mut(card.suit).push(card);
        }
    }
    Ok(())
}
