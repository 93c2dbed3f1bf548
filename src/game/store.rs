use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::{
    validation::{validate_new_player, ValidationError},
    Game, GameError, RoundEntry,
};
use crate::scoring::{compute_round, OkeyColor, PlayerStanding, Round};
use crate::settings::{GameSettings, SettingsStore};
use crate::storage::{keys, KeyValueStore, PersistTicket, PersistenceWriter};

/// Authoritative in-memory game, written through to persistence on every change.
///
/// Each mutation serializes the game while still holding the write lock and
/// returns the ticket for that write.
pub struct GameStore {
    game: RwLock<Game>,
    writer: PersistenceWriter,
    settings_store: SettingsStore,
}

impl GameStore {
    /// Starts from an empty game without reading persistence
    pub fn new(writer: PersistenceWriter) -> Self {
        Self::with_game(Game::default(), writer)
    }

    pub fn with_game(game: Game, writer: PersistenceWriter) -> Self {
        Self {
            game: RwLock::new(game),
            settings_store: SettingsStore::new(writer.clone()),
            writer,
        }
    }

    /// Restores the saved game, then overlays the separately saved settings.
    ///
    /// Unreadable entries are logged and replaced by defaults.
    #[instrument(skip(store, writer))]
    pub async fn load(store: &dyn KeyValueStore, writer: PersistenceWriter) -> Self {
        let mut game = match store.get(keys::GAME).await {
            Ok(Some(raw)) => serde_json::from_str::<Game>(&raw).unwrap_or_else(|err| {
                warn!(?err, "Ignoring corrupt saved game");
                Game::default()
            }),
            Ok(None) => Game::default(),
            Err(err) => {
                warn!(?err, "Failed to read saved game");
                Game::default()
            }
        };

        let settings = SettingsStore::load(store)
            .await
            .unwrap_or_else(|| game.settings().sanitized());
        game.apply_settings(settings);

        info!(
            players = game.player_names.len(),
            rounds = game.rounds.len(),
            total_rounds = game.total_rounds,
            "Game state loaded"
        );

        Self::with_game(game, writer)
    }

    pub async fn snapshot(&self) -> Game {
        self.game.read().await.clone()
    }

    pub async fn settings(&self) -> GameSettings {
        self.game.read().await.settings()
    }

    pub async fn multiplier_for(&self, color: OkeyColor) -> u32 {
        self.game.read().await.multiplier_for(color)
    }

    pub async fn standings(&self) -> Vec<PlayerStanding> {
        self.game.read().await.standings()
    }

    #[instrument(skip(self))]
    pub async fn set_player_names(&self, names: Vec<String>) -> PersistTicket {
        let mut game = self.game.write().await;
        game.player_names = names;
        debug!(players = game.player_names.len(), "Roster replaced");
        self.persist(&game)
    }

    #[instrument(skip(self))]
    pub async fn set_total_rounds(&self, total_rounds: u32) -> PersistTicket {
        let mut game = self.game.write().await;
        game.total_rounds = total_rounds;
        self.persist(&game)
    }

    /// Appends a finished round. The round target is not checked here.
    #[instrument(skip(self, round), fields(color = %round.color))]
    pub async fn add_round(&self, round: Round) -> PersistTicket {
        let mut game = self.game.write().await;
        game.add_round(round);
        debug!(current_round = game.current_round, "Round added");
        self.persist(&game)
    }

    /// Scores `entry` with the configured multiplier for its color and appends it.
    ///
    /// Refuses when the roster is empty or the round target is already met.
    #[instrument(skip(self, entry), fields(color = %entry.color))]
    pub async fn record_round(&self, entry: RoundEntry) -> Result<(Round, PersistTicket), GameError> {
        let mut game = self.game.write().await;

        if game.player_names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if game.is_complete() {
            return Err(GameError::RoundLimitReached(game.total_rounds));
        }

        let round = compute_round(
            entry.color,
            game.multiplier_for(entry.color),
            &game.player_names,
            &entry.points,
            entry.win_type,
            entry.winner.as_deref(),
        )?;

        game.add_round(round.clone());
        info!(
            current_round = game.current_round,
            winner = ?round.winner,
            "Round recorded"
        );

        Ok((round, self.persist(&game)))
    }

    /// Clears roster and rounds. Settings are kept.
    #[instrument(skip(self))]
    pub async fn reset_game(&self) -> PersistTicket {
        let mut game = self.game.write().await;
        game.reset();
        info!("Game reset");
        self.persist(&game)
    }

    #[instrument(skip(self))]
    pub async fn reset_rounds_only(&self) -> PersistTicket {
        let mut game = self.game.write().await;
        game.reset_rounds();
        info!("Rounds reset");
        self.persist(&game)
    }

    #[instrument(skip(self))]
    pub async fn add_player(&self, name: String) -> PersistTicket {
        let mut game = self.game.write().await;
        game.player_names.push(name);
        self.persist(&game)
    }

    /// Checks `name` against the current roster and appends it under the same lock
    #[instrument(skip(self))]
    pub async fn add_validated_player(&self, name: &str) -> Result<PersistTicket, ValidationError> {
        let mut game = self.game.write().await;
        let name = validate_new_player(&game.player_names, name)?;
        game.player_names.push(name);
        Ok(self.persist(&game))
    }

    #[instrument(skip(self))]
    pub async fn remove_player(&self, index: usize) -> Result<(String, PersistTicket), GameError> {
        let mut game = self.game.write().await;
        let removed = game
            .remove_player(index)
            .ok_or(GameError::PlayerIndexOutOfRange(index))?;
        debug!(player = %removed, "Player removed");
        Ok((removed, self.persist(&game)))
    }

    #[instrument(skip(self))]
    pub async fn update_settings(&self, settings: GameSettings) -> PersistTicket {
        let mut game = self.game.write().await;
        game.apply_settings(settings);
        self.persist(&game).join(self.settings_store.persist(&settings))
    }

    /// Restores default settings and forgets the saved ones
    #[instrument(skip(self))]
    pub async fn reset_settings(&self) -> PersistTicket {
        let mut game = self.game.write().await;
        game.apply_settings(GameSettings::default());
        info!("Settings restored to defaults");
        self.persist(&game).join(self.settings_store.clear())
    }

    fn persist(&self, game: &Game) -> PersistTicket {
        self.writer.set_json(keys::GAME, game)
    }
}
