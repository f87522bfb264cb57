//! Keyed multi-game store, safe to share across threads.
//!
//! Each command runs its whole read-apply-write under one lock, so
//! concurrent commands against the same game are serialized and none are
//! lost.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;

use crate::core::{DrawMode, GameConfig, GameId, GameRng, GameState};
use crate::deal::deal_with_rng;

use super::command::{Command, Report};
use super::game::log_report;

/// Store lookup failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    UnknownGame(GameId),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnknownGame(id) => write!(f, "no game with id {}", id),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug)]
struct Inner {
    rng: GameRng,
    games: FxHashMap<GameId, GameState>,
}

impl Inner {
    fn deal(&mut self, draw: DrawMode) -> GameState {
        let state = deal_with_rng(draw, &mut self.rng.fork());
        log::info!("dealt game {} ({})", state.id(), draw);
        self.games.insert(state.id(), state.clone());
        state
    }
}

/// Games keyed by id.
#[derive(Debug)]
pub struct SessionStore {
    config: GameConfig,
    inner: Mutex<Inner>,
}

impl SessionStore {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::debug!("session rng seed {}", rng.seed());
        Self {
            config,
            inner: Mutex::new(Inner {
                rng,
                games: FxHashMap::default(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // A panic mid-command never leaves a half-written state in the map,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deal and store a new game.
    pub fn new_game(&self, draw: Option<u8>) -> Report {
        Report::dealt(self.lock().deal(self.config.resolve_draw(draw)))
    }

    /// Execute a command against game `id`.
    ///
    /// `NewGame` deals a fresh game under a new id and drops `id`, if stored.
    pub fn execute(&self, id: GameId, command: &Command) -> Result<Report, SessionError> {
        let mut inner = self.lock();

        if let Command::NewGame { draw } = command {
            inner.games.remove(&id);
            return Ok(Report::dealt(inner.deal(self.config.resolve_draw(*draw))));
        }

        let before = inner
            .games
            .get(&id)
            .ok_or(SessionError::UnknownGame(id))?;
        let report = match command.play(before) {
            Some(outcome) => Report::played(before, outcome),
            None => Report::dealt(before.clone()),
        };
        log_report(before, command, &report);

        inner.games.insert(id, report.state.clone());
        Ok(report)
    }

    /// Copy of game `id`.
    pub fn snapshot(&self, id: GameId) -> Result<GameState, SessionError> {
        self.lock()
            .games
            .get(&id)
            .cloned()
            .ok_or(SessionError::UnknownGame(id))
    }

    /// Drop game `id`. Returns whether it existed.
    pub fn end_game(&self, id: GameId) -> bool {
        self.lock().games.remove(&id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn seeded() -> SessionStore {
        SessionStore::new(GameConfig::default().with_seed(7))
    }

    #[test]
    fn test_new_game_is_stored() {
        let store = seeded();
        let report = store.new_game(Some(3));

        assert_eq!(store.len(), 1);
        assert_eq!(report.state.draw(), DrawMode::Three);
        assert_eq!(store.snapshot(report.state.id()), Ok(report.state));
    }

    #[test]
    fn test_default_draw_from_config() {
        let store = SessionStore::new(GameConfig::default().with_draw(DrawMode::Three).with_seed(1));
        assert_eq!(store.new_game(None).state.draw(), DrawMode::Three);
    }

    #[test]
    fn test_new_game_command_uses_config_draw() {
        let store = SessionStore::new(GameConfig::default().with_draw(DrawMode::Three).with_seed(1));
        let old = store.new_game(None).state.id();

        let report = store.execute(old, &Command::NewGame { draw: None }).unwrap();

        assert_eq!(report.state.draw(), DrawMode::Three);
    }

    #[test]
    fn test_unknown_game() {
        let store = seeded();
        let id = GameId(12345);

        assert_eq!(store.execute(id, &Command::FlipStock), Err(SessionError::UnknownGame(id)));
        assert_eq!(store.snapshot(id), Err(SessionError::UnknownGame(id)));
        assert!(!store.end_game(id));
    }

    #[test]
    fn test_games_are_independent() {
        let store = seeded();
        let a = store.new_game(None).state.id();
        let b = store.new_game(None).state.id();

        store.execute(a, &Command::FlipStock).unwrap();
        store.execute(a, &Command::FlipStock).unwrap();

        assert_eq!(store.snapshot(a).unwrap().move_count(), 2);
        assert_eq!(store.snapshot(b).unwrap().move_count(), 0);
    }

    #[test]
    fn test_new_game_command_replaces_id() {
        let store = seeded();
        let old = store.new_game(None).state.id();

        let report = store.execute(old, &Command::NewGame { draw: None }).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.snapshot(old).is_err());
        assert!(store.snapshot(report.state.id()).is_ok());
    }

    #[test]
    fn test_end_game() {
        let store = seeded();
        let id = store.new_game(None).state.id();

        assert!(store.end_game(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_commands_are_serialized() {
        let store = Arc::new(seeded());
        let id = store.new_game(None).state.id();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.execute(id, &Command::FlipStock).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Flip and recycle both count, so no command may be lost
        assert_eq!(store.snapshot(id).unwrap().move_count(), 400);
    }
}
