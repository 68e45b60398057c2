//! Game engine module - ties board, pieces, timers, scoring and persistence together
//!
//! The engine is single-threaded and event-driven. Input commands and timer
//! deliveries mutate the board and counters synchronously and append
//! [`GameEvent`]s that the host drains with [`GameEngine::drain_events`].
//!
//! Three timers are kept armed through the injected [`Scheduler`]:
//! - **Fall**: gravity tick at the current fall interval
//! - **SpeedUp**: shrinks the fall interval every speed-up period
//! - **FeverExpiry**: ends fever mode, armed only while fever is active
//!
//! `new_game` cancels and replaces all of them; `game_over` cancels fall and
//! speed-up but lets a running fever expire on its own.

use tracing::{debug, info, trace, warn};

use crate::config::EngineConfig;
use crate::core::{
    color_for, is_tetris, level_for_lines, line_clear_score, next_fall_interval, shape_for,
    ActivePiece, Board, PieceSource, RandomPieces, ShapeMatrix, SimpleRng,
};
use crate::events::GameEvent;
use crate::scheduler::{Scheduler, TimerHandle, VirtualScheduler};
use crate::snapshot::{board_grid, ActiveSnapshot, GameSnapshot};
use crate::state::{GameStats, Phase};
use crate::store::{MemoryStore, SavedState, StateStore};
use crate::types::{Command, PieceKind, Position, TimerKind};

/// Handles of the timers the engine currently owns
#[derive(Debug, Clone, Copy, Default)]
struct ArmedTimers {
    fall: Option<TimerHandle>,
    speed_up: Option<TimerHandle>,
    fever: Option<TimerHandle>,
}

impl ArmedTimers {
    fn slot_mut(&mut self, timer: TimerKind) -> &mut Option<TimerHandle> {
        match timer {
            TimerKind::Fall => &mut self.fall,
            TimerKind::SpeedUp => &mut self.speed_up,
            TimerKind::FeverExpiry => &mut self.fever,
        }
    }
}

/// The arcade game engine
#[derive(Debug)]
pub struct GameEngine<S, P, St> {
    config: EngineConfig,
    scheduler: S,
    pieces: P,
    store: St,
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    phase: Phase,
    stats: GameStats,
    timers: ArmedTimers,
    events: Vec<GameEvent>,
}

impl GameEngine<VirtualScheduler, RandomPieces<SimpleRng>, MemoryStore> {
    /// Engine on a virtual clock with seeded random pieces and in-memory persistence
    pub fn headless(seed: u32) -> Self {
        Self::new(
            EngineConfig::default(),
            VirtualScheduler::new(),
            RandomPieces::seeded(seed),
            MemoryStore::new(),
        )
    }
}

impl<S: Scheduler, P: PieceSource, St: StateStore> GameEngine<S, P, St> {
    /// Create an idle engine
    ///
    /// The high score is read from `store` (falling back to 0 on any error) and
    /// the first preview piece is drawn immediately. `config` is clamped with
    /// [`EngineConfig::sanitized`].
    pub fn new(config: EngineConfig, scheduler: S, mut pieces: P, mut store: St) -> Self {
        let checked = config.sanitized();
        if checked != config {
            warn!(?config, "engine config out of range, clamped");
        }
        let config = checked;
        let high_score = load_high_score(&mut store);
        let next = pieces.next_kind();
        let stats = GameStats::new(&config, high_score);

        Self {
            config,
            scheduler,
            pieces,
            store,
            board: Board::new(),
            active: None,
            next,
            phase: Phase::Idle,
            stats,
            timers: ArmedTimers::default(),
            events: Vec::new(),
        }
    }

    /// Configuration in effect (after clamping)
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a game is running (commands and ticks are processed)
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn high_score(&self) -> u32 {
        self.stats.high_score
    }

    pub fn combo(&self) -> u32 {
        self.stats.combo
    }

    pub fn lines_cleared(&self) -> u32 {
        self.stats.lines_cleared
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.stats.fall_interval_ms
    }

    pub fn speed_level(&self) -> u32 {
        self.stats.speed_level
    }

    pub fn fever_active(&self) -> bool {
        self.stats.fever_active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions
    ///
    /// The active piece is not re-validated against the edited board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn next_shape(&self) -> ShapeMatrix {
        shape_for(self.next)
    }

    /// Where the active piece would land on a hard drop
    pub fn ghost_origin(&self) -> Option<Position> {
        self.active.map(|piece| piece.landing_origin(&self.board))
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: board_grid(&self.board),
            active: self
                .active
                .as_ref()
                .map(|piece| ActiveSnapshot::capture(piece, &self.board)),
            next_kind: self.next,
            next_shape: self.next_shape(),
            stats: self.stats,
            phase: self.phase,
        }
    }

    /// The record written to the store
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            high_score: self.stats.high_score,
            score: self.stats.score,
            level: self.stats.level,
            speed: self.stats.fall_interval_ms,
            combo: self.stats.combo,
            lines_cleared: self.stats.lines_cleared,
            board: self
                .board
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.map(|kind| color_for(kind).name()))
                        .collect()
                })
                .collect(),
        }
    }

    /// Start (or restart) a game
    ///
    /// Cancels every pending timer, empties the board, resets the counters
    /// (the high score and speed meter carry over), spawns the first piece and
    /// arms the fall and speed-up timers.
    pub fn new_game(&mut self) {
        self.cancel_all_timers();
        self.board.reset();
        self.active = None;
        self.stats.reset_for_new_game(&self.config);
        self.phase = Phase::Running;

        info!(high_score = self.stats.high_score, "new game");
        self.emit(GameEvent::GameStarted);

        self.spawn_piece();
        if self.is_active() {
            self.arm(TimerKind::Fall, self.stats.fall_interval_ms);
            self.arm(TimerKind::SpeedUp, self.config.speed_up_period_ms);
        }
    }

    /// Promote the preview piece to the board and draw a new preview
    ///
    /// Ends the game if the new piece collides where it spawns.
    pub fn spawn_piece(&mut self) {
        if !self.is_active() {
            return;
        }

        let upcoming = self.pieces.next_kind();
        let kind = std::mem::replace(&mut self.next, upcoming);
        let piece = ActivePiece::spawn(kind);
        self.active = Some(piece);

        trace!(?kind, next = ?self.next, "spawn");
        self.emit(GameEvent::PieceSpawned {
            kind,
            origin: piece.origin(),
            next: self.next,
        });

        if piece.collides(&self.board) {
            debug!(?kind, "spawn blocked, board topped out");
            self.game_over();
        }
    }

    /// Gravity step: no-op unless running, otherwise [`move_down`](Self::move_down)
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.move_down()
    }

    /// Move the piece one row down, locking it if it cannot fall
    ///
    /// Returns true if the piece fell, false if it locked (or nothing ran).
    pub fn move_down(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        if piece.try_shift(&self.board, 1, 0) {
            self.active = Some(piece);
            return true;
        }

        self.lock_and_continue(piece);
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.shift_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift_horizontal(1)
    }

    /// Rotate clockwise; rejected on collision with no kick attempts
    pub fn rotate(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let accepted = piece.try_rotate_cw(&self.board);
        if accepted {
            self.active = Some(piece);
        }
        self.emit(GameEvent::PieceMoved {
            kind: piece.kind(),
            accepted,
        });
        accepted
    }

    /// Drop to the lowest free row, lock, clear lines and spawn the next piece
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let landing = piece.landing_origin(&self.board);
        piece.set_origin(landing);
        self.active = Some(piece);
        self.emit(GameEvent::PieceMoved {
            kind: piece.kind(),
            accepted: true,
        });

        self.lock_and_continue(piece);
        true
    }

    /// Apply a player command; ignored unless a game is running
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => self.move_down(),
            Command::RotateCw => self.rotate(),
            Command::HardDrop => self.hard_drop(),
        }
    }

    /// Deliver a fired timer
    ///
    /// Handles that are no longer armed (cancelled or replaced) are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle, timer: TimerKind) {
        let slot = self.timers.slot_mut(timer);
        if *slot != Some(handle) {
            trace!(?timer, id = handle.id(), "stale timer ignored");
            return;
        }
        *slot = None;

        match timer {
            TimerKind::Fall => {
                self.tick();
                if self.is_active() && self.timers.fall.is_none() {
                    self.arm(TimerKind::Fall, self.stats.fall_interval_ms);
                }
            }
            TimerKind::SpeedUp => {
                self.increase_speed();
                if self.is_active() {
                    self.arm(TimerKind::SpeedUp, self.config.speed_up_period_ms);
                }
            }
            TimerKind::FeverExpiry => self.deactivate_fever(),
        }
    }

    /// Shrink the fall interval and restart the fall timer
    ///
    /// Returns false once the interval is at its floor (nothing changes).
    pub fn increase_speed(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(interval) = next_fall_interval(
            self.stats.fall_interval_ms,
            self.config.speed_up_percent,
            self.config.min_fall_ms,
        ) else {
            return false;
        };

        self.stats.fall_interval_ms = interval;
        self.stats.speed_level = (self.stats.speed_level + 1).min(self.config.speed_level_max);
        self.arm(TimerKind::Fall, interval);

        debug!(
            fall_interval_ms = interval,
            speed_level = self.stats.speed_level,
            "speed up"
        );
        self.emit(GameEvent::SpeedIncreased {
            fall_interval_ms: interval,
            speed_level: self.stats.speed_level,
        });
        true
    }

    /// Turn fever mode on (or extend it) for the configured duration
    pub fn activate_fever(&mut self) {
        self.stats.fever_active = true;
        self.arm(TimerKind::FeverExpiry, self.config.fever_duration_ms);
        info!("fever mode");
        self.emit(GameEvent::FeverStarted);
    }

    /// Turn fever mode off; does nothing if it is already off
    pub fn deactivate_fever(&mut self) {
        self.disarm(TimerKind::FeverExpiry);
        if !self.stats.fever_active {
            return;
        }
        self.stats.fever_active = false;
        debug!("fever mode ended");
        self.emit(GameEvent::FeverEnded);
    }

    /// End the running game
    ///
    /// Stops the fall and speed-up timers, updates the high score and saves.
    pub fn game_over(&mut self) {
        if !self.is_active() {
            return;
        }
        self.phase = Phase::GameOver;
        self.disarm(TimerKind::Fall);
        self.disarm(TimerKind::SpeedUp);

        let new_high_score = self.stats.score > self.stats.high_score;
        if new_high_score {
            self.stats.high_score = self.stats.score;
        }

        info!(
            score = self.stats.score,
            lines = self.stats.lines_cleared,
            new_high_score,
            "game over"
        );
        self.emit(GameEvent::GameOver {
            final_score: self.stats.score,
            new_high_score,
        });
        self.persist();
    }

    fn shift_horizontal(&mut self, dcol: i8) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let accepted = piece.try_shift(&self.board, 0, dcol);
        if accepted {
            self.active = Some(piece);
        }
        self.emit(GameEvent::PieceMoved {
            kind: piece.kind(),
            accepted,
        });
        accepted
    }

    fn lock_and_continue(&mut self, piece: ActivePiece) {
        piece.lock_into(&mut self.board);
        self.active = None;
        trace!(kind = ?piece.kind(), origin = ?piece.origin(), "lock");
        self.emit(GameEvent::PieceLocked { kind: piece.kind() });

        self.clear_lines();
        self.spawn_piece();
    }

    fn clear_lines(&mut self) {
        let rows = self.board.full_rows();
        if rows.is_empty() {
            self.stats.combo = 0;
            return;
        }

        self.board.clear(&rows);

        let count = rows.len();
        self.stats.lines_cleared += count as u32;
        self.stats.combo += 1;
        let score_delta = line_clear_score(count, self.stats.combo);
        self.stats.score = self.stats.score.saturating_add(score_delta);
        self.stats.level = level_for_lines(self.stats.lines_cleared);
        let was_tetris = is_tetris(count);

        debug!(
            rows = count,
            combo = self.stats.combo,
            score_delta,
            "lines cleared"
        );
        self.emit(GameEvent::LinesCleared {
            rows,
            score_delta,
            combo_after: self.stats.combo,
            was_tetris,
            flash_ms: self.config.clear_flash_ms,
        });
        self.emit(GameEvent::ScoreChanged {
            score: self.stats.score,
            level: self.stats.level,
        });

        if was_tetris {
            self.activate_fever();
        }
        self.persist();
    }

    /// (Re)arm a timer, cancelling the previous one of the same kind
    fn arm(&mut self, timer: TimerKind, delay_ms: u32) {
        self.disarm(timer);
        let handle = self.scheduler.schedule(delay_ms, timer);
        *self.timers.slot_mut(timer) = Some(handle);
    }

    fn disarm(&mut self, timer: TimerKind) {
        if let Some(handle) = self.timers.slot_mut(timer).take() {
            self.scheduler.cancel(handle);
        }
    }

    fn cancel_all_timers(&mut self) {
        self.disarm(TimerKind::Fall);
        self.disarm(TimerKind::SpeedUp);
        self.disarm(TimerKind::FeverExpiry);
    }

    fn persist(&mut self) {
        let record = self.saved_state();
        if let Err(err) = self.store.save(&record) {
            warn!("failed to save state: {:#}", err);
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl<P: PieceSource, St: StateStore> GameEngine<VirtualScheduler, P, St> {
    /// Move the virtual clock forward, delivering every timer that falls due
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now_ms() + ms;
        while let Some((handle, timer)) = self.scheduler.pop_due(until) {
            self.on_timer(handle, timer);
        }
        self.scheduler.advance_to(until);
    }
}

fn load_high_score<St: StateStore>(store: &mut St) -> u32 {
    match store.load() {
        Ok(Some(state)) => state.high_score,
        Ok(None) => 0,
        Err(err) => {
            warn!("failed to load state, starting from defaults: {:#}", err);
            0
        }
    }
}
