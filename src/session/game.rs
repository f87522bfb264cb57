//! Single-game session: one owned "current game" slot.
//!
//! Mutation goes through `&mut self`, so the borrow checker serializes
//! read-modify-write of the slot. Share it across threads behind a mutex, or
//! use `SessionStore`.

use crate::core::{DrawMode, GameConfig, GameRng, GameState};
use crate::deal::deal_with_rng;

use super::command::{Command, Report};

/// Owns the current game and the RNG that deals new ones.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    current: Option<GameState>,
}

impl GameSession {
    /// Create a session with no game dealt yet.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::debug!("session rng seed {}", rng.seed());
        Self {
            config,
            rng,
            current: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current game, if one has been dealt.
    #[must_use]
    pub fn current(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    /// Deal a new game, abandoning the current one.
    pub fn new_game(&mut self, draw: DrawMode) -> &GameState {
        let state = deal_with_rng(draw, &mut self.rng.fork());
        log::info!("dealt game {} ({})", state.id(), draw);
        self.current.insert(state)
    }

    /// Execute a command against the current game.
    ///
    /// Play commands sent before any deal first deal a game with the
    /// configured draw mode.
    pub fn execute(&mut self, command: &Command) -> Report {
        if let Command::NewGame { draw } = command {
            let draw = self.config.resolve_draw(*draw);
            let state = self.new_game(draw).clone();
            return Report::dealt(state);
        }

        let before = match self.current.take() {
            Some(state) => state,
            None => self.new_game(self.config.draw).clone(),
        };
        let report = match command.play(&before) {
            Some(outcome) => Report::played(&before, outcome),
            None => Report::dealt(before.clone()),
        };
        log_report(&before, command, &report);

        self.current = Some(report.state.clone());
        report
    }
}

pub(crate) fn log_report(before: &GameState, command: &Command, report: &Report) {
    let id = report.state.id();
    match &report.rejection {
        Some(reason) => log::debug!("game {}: rejected {:?}: {}", id, command, reason),
        None => log::debug!("game {}: {:?} -> move {}", id, command, report.summary.move_count),
    }
    if report.summary.won && !before.won() {
        log::info!("game {} won in {} moves", id, report.summary.move_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveDescriptor, MoveKind};

    #[test]
    fn test_play_before_deal_deals_first() {
        let mut session = GameSession::new(GameConfig::default().with_seed(1));
        assert!(session.current().is_none());

        let report = session.execute(&Command::FlipStock);

        assert!(report.accepted);
        assert_eq!(report.summary.move_count, 1);
        assert_eq!(report.state.draw(), DrawMode::One);
        assert_eq!(session.current(), Some(&report.state));
    }

    #[test]
    fn test_new_game_replaces_current() {
        let mut session = GameSession::new(GameConfig::default().with_seed(2));

        let first = session.execute(&Command::NewGame { draw: Some(3) });
        let second = session.execute(&Command::NewGame { draw: None });

        assert_eq!(first.state.draw(), DrawMode::Three);
        assert_eq!(second.state.draw(), DrawMode::One);
        assert_ne!(first.state.id(), second.state.id());
        assert_eq!(session.current().map(|s| s.id()), Some(second.state.id()));
    }

    #[test]
    fn test_new_game_without_draw_uses_config() {
        let config = GameConfig::default().with_draw(DrawMode::Three).with_seed(5);
        let mut session = GameSession::new(config);

        let report = session.execute(&Command::NewGame { draw: None });
        assert_eq!(report.state.draw(), DrawMode::Three);

        let report = session.execute(&Command::NewGame { draw: Some(1) });
        assert_eq!(report.state.draw(), DrawMode::One);
    }

    #[test]
    fn test_rejected_move_keeps_slot() {
        let mut session = GameSession::new(GameConfig::default().with_seed(3));
        let dealt = session.execute(&Command::NewGame { draw: None });

        let report = session.execute(&Command::ApplyMove {
            mv: MoveDescriptor::new(MoveKind::WasteToFoundation),
        });

        assert!(!report.accepted);
        assert_eq!(session.current(), Some(&dealt.state));
    }

    #[test]
    fn test_seeded_sessions_deal_identically() {
        let config = GameConfig::default().with_seed(99);
        let mut a = GameSession::new(config.clone());
        let mut b = GameSession::new(config);

        for _ in 0..3 {
            let ra = a.execute(&Command::NewGame { draw: None });
            let rb = b.execute(&Command::NewGame { draw: None });
            assert_eq!(ra.state, rb.state);
        }
    }
}
