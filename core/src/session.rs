use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Clicks repeated at the same coordinate inside this window are duplicates.
pub const CLICK_DEBOUNCE: Duration = Duration::from_millis(200);

/// Player-visible counters and mode flags, handed to the renderer as a value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub moves_left: u32,
    pub is_game_over: bool,
    pub is_processing: bool,
    pub bomb_mode: bool,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            moves_left: config.max_moves,
            is_game_over: false,
            is_processing: false,
            bomb_mode: false,
        }
    }
}

/// Remaining booster charges; non-increasing except on restart.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoosterState {
    pub shuffle_count: u8,
    pub bomb_count: u8,
}

impl BoosterState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            shuffle_count: config.shuffle_count,
            bomb_count: config.bomb_count,
        }
    }
}

/// One playthrough: the board, its counters, and the click pipeline.
///
/// Collaborators arrive by constructor injection: the [`TileGenerator`] for
/// randomness, the [`Renderer`] for visuals, the [`Clock`] for the cascade's
/// timed suspensions. The session owns the board exclusively for its lifetime
/// and rebuilds it wholesale on restart.
///
/// There is exactly one logical thread of control. `handle_click` takes
/// `&mut self`, so two cascades can never overlap; the `is_processing` flag is
/// still kept as the observable gate (and as the contract for hosts that queue
/// input events), and contending clicks are dropped rather than queued.
#[derive(Debug)]
pub struct GameSession<G, R, C> {
    config: GameConfig,
    board: Board,
    state: GameState,
    boosters: BoosterState,
    cascade: CascadeEngine,
    generator: G,
    renderer: R,
    clock: C,
    last_click: Option<(Instant, Coord2)>,
    destroyed: bool,
}

impl<G, R, C> GameSession<G, R, C>
where
    G: TileGenerator,
    R: Renderer,
    C: Clock,
{
    /// Fails fast on a degenerate config; this is the only fallible step of
    /// session construction.
    pub fn new(config: GameConfig, generator: G, renderer: R, clock: C) -> Result<Self> {
        if config.board_width == 0 || config.board_height == 0 {
            return Err(GameError::InvalidConfig);
        }

        Ok(Self {
            board: Board::new(&config),
            state: GameState::new(&config),
            boosters: BoosterState::new(&config),
            cascade: CascadeEngine::new(),
            generator,
            renderer,
            clock,
            last_click: None,
            destroyed: false,
            config,
        })
    }

    /// Populates the board through the spawn policy and reports the initial
    /// state to the renderer.
    pub fn initialize(&mut self) {
        self.populate_board();
        self.notify_state();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn boosters(&self) -> BoosterState {
        self.boosters
    }

    pub fn phase(&self) -> CascadePhase {
        self.cascade.phase()
    }

    /// Resolves one board-coordinate click.
    ///
    /// Precedence: armed bomb booster first, then bomb tile, then the regular
    /// horizontal match. Only a regular match costs a move; detonations are
    /// bonus actions. The returned future suspends inside the cascade delays;
    /// dropping it mid-flight aborts the cascade and leaves the board in an
    /// unspecified partial state (see [`GameSession::destroy`]).
    pub async fn handle_click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        if self.destroyed || self.state.is_processing || self.state.is_game_over {
            log::debug!("Click at {coords:?} ignored, session not accepting input");
            return Ok(ClickOutcome::Ignored);
        }

        let coords = self.board.validate_coords(coords)?;

        if self.is_duplicate_click(coords) {
            log::debug!("Duplicate click at {coords:?} dropped");
            return Ok(ClickOutcome::Ignored);
        }
        self.last_click = Some((Instant::now(), coords));

        if self.state.bomb_mode {
            // The armed booster consumes this click no matter what it hits,
            // bomb tiles included.
            self.state.bomb_mode = false;
            let targets = cross_coords(&self.board, coords);
            return Ok(self.detonate(targets, CROSS_BLAST_SCORE).await);
        }

        let Some(kind) = self.board.get(coords) else {
            return Ok(ClickOutcome::NoMatch);
        };

        if kind.is_bomb() {
            let targets = row_coords(&self.board, coords.1);
            return Ok(self.detonate(targets, ROW_BLAST_SCORE).await);
        }

        let group = horizontal_group(&self.board, coords, kind);
        if group.len() < 2 {
            log::debug!("No burnable group at {coords:?}");
            return Ok(ClickOutcome::NoMatch);
        }

        let tiles = group.len() as u8;
        let points = group_score(group.len());
        self.state.score += points;
        self.state.moves_left = self.state.moves_left.saturating_sub(1);
        self.run_cascade(&group, RemovalCue::Burn).await;
        self.finish_action();
        Ok(ClickOutcome::Matched { tiles, points })
    }

    /// Removes all placed tiles, permutes their kinds, and reassigns them in
    /// row-major order. The kind multiset is invariant; only the assignment
    /// changes. No-op without a charge, mid-cascade, or after game over.
    pub fn use_shuffle_booster(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if self.boosters.shuffle_count == 0 {
            log::debug!("No shuffle boosters left");
            return;
        }

        self.boosters.shuffle_count -= 1;
        self.shuffle_board();
        self.notify_state();
    }

    /// Spends a charge and arms bomb mode; the next click detonates a cross
    /// at its coordinate. Arming itself costs no move. No-op without a
    /// charge, mid-cascade, or after game over.
    pub fn use_bomb_booster(&mut self) {
        if !self.accepts_input() {
            return;
        }
        if self.boosters.bomb_count == 0 {
            log::debug!("No bomb boosters left");
            return;
        }

        self.boosters.bomb_count -= 1;
        self.state.bomb_mode = true;
        self.notify_state();
    }

    /// Resets counters and boosters and regenerates the board. Nothing
    /// survives into the new playthrough.
    pub fn restart(&mut self) {
        if self.destroyed {
            return;
        }

        self.state = GameState::new(&self.config);
        self.boosters = BoosterState::new(&self.config);
        self.cascade = CascadeEngine::new();
        self.last_click = None;
        self.populate_board();
        self.notify_state();
    }

    /// Renders the session inert: every later operation is a no-op.
    ///
    /// Aborting an in-flight cascade is the host's act of dropping the
    /// `handle_click` future before it completes; after such an abort the
    /// board may be mid-settle and no consistency is guaranteed. Known
    /// limitation, carried over rather than hardened.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.state.is_processing = false;
    }

    fn accepts_input(&self) -> bool {
        if self.destroyed || self.state.is_processing || self.state.is_game_over {
            log::debug!("Booster ignored, session not accepting input");
            return false;
        }
        true
    }

    fn is_duplicate_click(&self, coords: Coord2) -> bool {
        match self.last_click {
            Some((when, last)) => last == coords && when.elapsed() < CLICK_DEBOUNCE,
            None => false,
        }
    }

    async fn detonate(&mut self, targets: TileSet, points: u32) -> ClickOutcome {
        if targets.is_empty() {
            log::debug!("Detonation hit no tiles");
            self.notify_state();
            return ClickOutcome::NoMatch;
        }

        let tiles = targets.len() as u8;
        self.state.score += points;
        self.run_cascade(&targets, RemovalCue::Explosion).await;
        self.finish_action();
        ClickOutcome::Detonated { tiles, points }
    }

    async fn run_cascade(&mut self, removal: &[Coord2], cue: RemovalCue) {
        self.state.is_processing = true;
        self.notify_state();

        self.cascade
            .run(
                &mut self.board,
                removal,
                cue,
                &mut self.generator,
                &mut self.renderer,
                &self.clock,
            )
            .await;

        self.state.is_processing = false;
        debug_assert!(self.board.is_full());
    }

    fn finish_action(&mut self) {
        match evaluate(self.state.score, self.state.moves_left, &self.config) {
            Outcome::Ongoing => {}
            Outcome::Won => self.end_game(true),
            Outcome::Lost => self.end_game(false),
        }
        self.notify_state();
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_game_over {
            return;
        }
        self.state.is_game_over = true;
        self.renderer.game_ended(won, self.state.score);
    }

    fn populate_board(&mut self) {
        for at in self.board.coords() {
            if self.board.remove(at).is_some() {
                self.renderer.tile_removed(at);
            }
        }
        for at in self.board.coords() {
            let kind = self.generator.spawn(&self.board);
            self.board.set(at, kind);
            self.renderer.tile_created(at, kind);
        }
    }

    fn shuffle_board(&mut self) {
        let mut kinds: Vec<TileKind> = self.board.iter_tiles().map(|tile| tile.kind).collect();
        let placed: Vec<Coord2> = self.board.coords().take(kinds.len()).collect();

        for at in self.board.coords() {
            if self.board.remove(at).is_some() {
                self.renderer.tile_removed(at);
            }
        }

        self.generator.shuffle(&mut kinds);

        for (at, kind) in placed.into_iter().zip(kinds) {
            self.board.set(at, kind);
            self.renderer.tile_created(at, kind);
        }
    }

    fn notify_state(&mut self) {
        self.renderer.state_changed(&self.state, &self.boosters);
    }
}
