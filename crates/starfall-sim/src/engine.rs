//! Game session engine — the core of the game.
//!
//! `GameSession` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing: two sessions built from the same config and fed the same
//! commands produce identical snapshots.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starfall_ai::boss::AttackShot;
use starfall_core::commands::PlayerCommand;
use starfall_core::components::{AchievementBook, BossState, EnemyState, PlayerShip, Spatial};
use starfall_core::config::SimConfig;
use starfall_core::constants::*;
use starfall_core::enums::{EnemyKind, GamePhase};
use starfall_core::events::GameEvent;
use starfall_core::state::GameStateSnapshot;
use starfall_core::types::{Position, SimTime, Viewport};

use crate::achievements::AchievementTracker;
use crate::effects::EffectsRegistry;
use crate::progression::Progression;
use crate::stars::StarField;
use crate::systems;
use crate::systems::enemy_ai::LaserBeam;
use crate::world_setup;

/// Game-over overlay opacity step per tick (caps below full black so
/// the field stays visible behind the text).
const GAME_OVER_FADE_STEP: f32 = 4.0;
const GAME_OVER_MAX_ALPHA: f32 = 200.0;

/// The game session. Owns the ECS world and all sim state.
pub struct GameSession {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: SimConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    shot_buffer: Vec<AttackShot>,
    laser_beams: Vec<LaserBeam>,
    boss_clamps: Vec<(Entity, f32)>,
    events: Vec<GameEvent>,
    progression: Progression,
    effects: EffectsRegistry,
    stars: StarField,
    achievements: AchievementTracker,
    pending_special: bool,
    next_formation_group: u32,
    book_dirty: bool,
}

impl GameSession {
    /// Create a new session with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let stars = StarField::new(&mut rng, config.viewport);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            shot_buffer: Vec::new(),
            laser_beams: Vec::new(),
            boss_clamps: Vec::new(),
            events: Vec::new(),
            progression: Progression::new(0),
            effects: EffectsRegistry::default(),
            stars,
            achievements: AchievementTracker::default(),
            pending_special: false,
            next_formation_group: 0,
            book_dirty: false,
            config,
        }
    }

    /// Restore persisted records loaded by the host before the first
    /// tick. `max_level` drives ship unlock gating across launches.
    pub fn restore_records(&mut self, book: AchievementBook, high_score: u64, max_level: u32) {
        self.achievements = AchievementTracker::new(book);
        self.achievements.stats.high_score = high_score;
        self.achievements.stats.max_level = max_level;
        self.progression.high_score = high_score;
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Playing => self.run_playing(),
            GamePhase::BossIntro => self.run_boss_intro(),
            GamePhase::GameOver
            | GamePhase::LeaderboardSubmit
            | GamePhase::LeaderboardView => self.run_game_over(),
            GamePhase::Start => {
                let viewport = self.config.viewport;
                self.stars.reset_speed();
                self.stars.update(&mut self.rng, viewport);
                self.effects.update();
            }
        }

        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            &self.progression,
            &self.effects,
            &self.stars,
            &self.achievements,
            events,
            self.overlay_alpha(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The achievement book, for persistence.
    pub fn achievement_book(&self) -> &AchievementBook {
        &self.achievements.book
    }

    /// Best score across sessions, for persistence.
    pub fn high_score(&self) -> u64 {
        self.progression.high_score
    }

    /// True once the achievement book has changed since the last call.
    /// The host saves when this fires.
    pub fn take_book_dirty(&mut self) -> bool {
        std::mem::take(&mut self.book_dirty)
    }

    #[cfg(test)]
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    #[cfg(test)]
    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    #[cfg(test)]
    pub fn achievements_mut(&mut self) -> &mut AchievementTracker {
        &mut self.achievements
    }

    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, kind: EnemyKind) -> Entity {
        world_setup::spawn_enemy(&mut self.world, &mut self.rng, kind, self.config.viewport)
    }

    #[cfg(test)]
    pub fn spawn_test_boss(&mut self, level: u32) -> Entity {
        self.progression.boss_active = true;
        world_setup::spawn_boss(&mut self.world, level, &self.config.boss, self.config.viewport)
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn progression_mut(&mut self) -> &mut Progression {
        &mut self.progression
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::Start {
                    self.start_session();
                }
            }
            PlayerCommand::Restart => {
                // Accepted once the reveal delay passes, so a stray
                // fire press at death does not instantly restart.
                let done_revealing = self.progression.game_over_timer > GAME_OVER_RESTART_TICKS;
                if self.phase == GamePhase::GameOver && done_revealing {
                    self.start_session();
                }
            }
            PlayerCommand::SelectShip { class } => {
                if self.phase != GamePhase::Start {
                    return;
                }
                let best_level = self.achievements.stats.max_level.max(1);
                if class.unlock_level() <= best_level {
                    self.config.ship_class = class;
                } else {
                    log::info!(
                        "ship {:?} still locked (unlocks at level {})",
                        class,
                        class.unlock_level()
                    );
                }
            }
            PlayerCommand::SetMoveAxes { x, y } => {
                for (_entity, ship) in self.world.query_mut::<&mut PlayerShip>() {
                    ship.move_axes = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
                }
            }
            PlayerCommand::Fire => match self.phase {
                GamePhase::Playing => {
                    for (_entity, ship) in self.world.query_mut::<&mut PlayerShip>() {
                        ship.fire_requested = true;
                    }
                }
                GamePhase::BossIntro => self.finish_boss_intro(),
                _ => {}
            },
            PlayerCommand::SetFiring { on } => {
                for (_entity, ship) in self.world.query_mut::<&mut PlayerShip>() {
                    ship.fire_held = on;
                }
            }
            PlayerCommand::ActivateSpecial => {
                if self.phase == GamePhase::Playing {
                    self.pending_special = true;
                }
            }
            PlayerCommand::SetViewport { width, height } => {
                self.resize_viewport(width, height);
            }
            PlayerCommand::SkipSubmission | PlayerCommand::ScoreSubmitted { .. } => {
                if self.phase == GamePhase::LeaderboardSubmit {
                    self.phase = GamePhase::GameOver;
                }
            }
            PlayerCommand::ShowLeaderboard => {
                if matches!(
                    self.phase,
                    GamePhase::GameOver | GamePhase::LeaderboardSubmit
                ) {
                    self.phase = GamePhase::LeaderboardView;
                }
            }
            PlayerCommand::LeaderboardLoaded { ok } => {
                if !ok {
                    log::warn!("leaderboard fetch failed; showing offline record");
                }
            }
            PlayerCommand::CloseLeaderboard => {
                if self.phase == GamePhase::LeaderboardView {
                    self.phase = GamePhase::GameOver;
                }
            }
        }
    }

    /// Reset all per-session state and enter Playing.
    fn start_session(&mut self) {
        self.world.clear();
        let high_score = self.progression.high_score;
        self.progression = Progression::new(high_score);
        self.effects.clear();
        self.shot_buffer.clear();
        self.laser_beams.clear();
        self.boss_clamps.clear();
        self.despawn_buffer.clear();
        self.pending_special = false;
        self.next_formation_group = 0;
        self.achievements.start_session();
        self.stars.reset_speed();
        self.stars.recolor(1);

        let player =
            world_setup::spawn_player(&mut self.world, self.config.ship_class, self.config.viewport);
        // Brief spawn protection.
        if let Ok(mut ship) = self.world.get::<&mut PlayerShip>(player) {
            ship.invulnerable = true;
            ship.invuln_timer = PLAYER_INVULN_TICKS;
        }

        self.phase = GamePhase::Playing;
        log::info!(
            "session started: class {:?}, seed {}",
            self.config.ship_class,
            self.config.seed
        );
    }

    fn run_playing(&mut self) {
        let viewport = self.config.viewport;

        // A live session must have a player; anything else is a bug,
        // recovered by dropping back to the start screen.
        let has_player = self
            .world
            .query_mut::<&PlayerShip>()
            .into_iter()
            .next()
            .is_some();
        if !has_player {
            log::error!("playing phase with no player entity, resetting");
            self.world.clear();
            self.phase = GamePhase::Start;
            return;
        }

        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.progression,
            viewport,
            &mut self.next_formation_group,
        );

        let special = std::mem::take(&mut self.pending_special);
        let frame = systems::player::run(&mut self.world, viewport, special);
        if frame.special_used {
            self.achievements.on_special_used();
        }

        systems::enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.time.tick,
            frame.position,
            viewport,
            &mut self.shot_buffer,
            &mut self.laser_beams,
            &mut self.boss_clamps,
        );
        self.merge_attack_shots();

        systems::movement::run(&mut self.world, viewport, frame.time_slow, &self.boss_clamps);

        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &mut self.progression,
            &mut self.achievements,
            &mut self.effects,
            &mut self.events,
            &mut self.despawn_buffer,
            &self.laser_beams,
            viewport,
        );
        self.laser_beams.clear();
        self.boss_clamps.clear();

        if outcome.player_died {
            self.enter_game_over();
        } else {
            self.update_progression();
        }

        self.effects.update();
        self.stars.reset_speed();
        self.stars.recolor(self.progression.level);
        self.stars.update(&mut self.rng, viewport);

        systems::cleanup::run(
            &mut self.world,
            &mut self.achievements,
            viewport,
            &mut self.despawn_buffer,
        );

        self.progression.survival_ticks += 1;
        self.achievements
            .set_progress(self.progression.score, self.progression.level);
        self.achievements
            .set_survival_secs(self.progression.survival_ticks / TICK_RATE as u64);
        if self.achievements.evaluate(&mut self.events) {
            self.book_dirty = true;
        }
    }

    /// Spawn everything the behavior pass buffered this tick.
    fn merge_attack_shots(&mut self) {
        let viewport = self.config.viewport;
        for shot in std::mem::take(&mut self.shot_buffer) {
            match shot {
                AttackShot::Bullet { position, velocity } => {
                    world_setup::spawn_enemy_bullet(&mut self.world, position, velocity, viewport);
                }
                AttackShot::Minion { position } => {
                    let entity = world_setup::spawn_enemy(
                        &mut self.world,
                        &mut self.rng,
                        EnemyKind::Basic,
                        viewport,
                    );
                    if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
                        pos.0 = position;
                    }
                }
            }
        }
    }

    /// Level-up check, boss scheduling, and the victory explosion queue.
    fn update_progression(&mut self) {
        let viewport = self.config.viewport;
        let s = viewport.scale();

        // Score-driven level up, deferred while a boss fight runs.
        if !self.progression.boss_active
            && self.progression.score >= self.progression.level_threshold()
        {
            self.progression.level += 1;
            self.progression.boss_defeated = false;
            self.events.push(GameEvent::LevelUp {
                level: self.progression.level,
            });
            self.effects.spawn_banner(
                Vec2::new(viewport.width / 2.0, viewport.height / 3.0),
                format!("LEVEL {}", self.progression.level),
                20.0 * s,
            );
        }

        // Schedule a boss fight when a configured level is reached.
        let level = self.progression.level;
        if self.config.boss.is_boss_level(level)
            && !self.progression.boss_defeated
            && !self.progression.boss_active
            && self.progression.boss_warning_timer.is_none()
        {
            self.progression.boss_warning_timer = Some(BOSS_WARNING_TICKS);
            self.events.push(GameEvent::BossWarning);
            self.effects.spawn_banner(
                Vec2::new(viewport.width / 2.0, viewport.height / 3.0),
                "WARNING",
                22.0 * s,
            );
        }
        if let Some(timer) = self.progression.boss_warning_timer.as_mut() {
            *timer = timer.saturating_sub(1);
            if *timer == 0 {
                self.progression.boss_warning_timer = None;
                self.progression.pending_boss_level = Some(level);
                self.progression.intro_timer = 0;
                self.progression.intro_alpha = 0.0;
                self.phase = GamePhase::BossIntro;
            }
        }

        // boss_active without a boss entity means the fight state
        // desynced; recover by ending it.
        if self.progression.boss_active {
            let alive = self
                .world
                .query_mut::<&BossState>()
                .into_iter()
                .next()
                .is_some();
            if !alive {
                log::warn!("boss flag set with no boss entity, clearing");
                self.progression.boss_active = false;
            }
        }

        // Staggered victory explosions from a defeated boss.
        let mut due: Vec<Vec2> = Vec::new();
        self.progression.victory_queue.retain_mut(|(ticks, pos)| {
            if *ticks == 0 {
                due.push(*pos);
                false
            } else {
                *ticks -= 1;
                true
            }
        });
        for position in due {
            self.effects.spawn_explosion(&mut self.rng, position, 18.0 * s);
        }
    }

    fn run_boss_intro(&mut self) {
        let viewport = self.config.viewport;
        self.stars.slow();
        self.stars.update(&mut self.rng, viewport);
        self.effects.update();

        self.progression.intro_timer += 1;
        if self.progression.intro_timer <= BOSS_INTRO_HOLD_TICKS {
            self.progression.intro_alpha =
                (self.progression.intro_alpha + BOSS_INTRO_FADE_IN_STEP).min(255.0);
        } else {
            self.progression.intro_alpha -= BOSS_INTRO_FADE_OUT_STEP;
            if self.progression.intro_alpha <= 0.0 {
                self.finish_boss_intro();
            }
        }
    }

    /// Clear the arena and spawn the boss; also the skip path.
    fn finish_boss_intro(&mut self) {
        let hostiles: Vec<Entity> = self
            .world
            .query_mut::<&EnemyState>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in hostiles {
            let _ = self.world.despawn(entity);
        }

        let level = self
            .progression
            .pending_boss_level
            .take()
            .unwrap_or(self.progression.level);
        world_setup::spawn_boss(&mut self.world, level, &self.config.boss, self.config.viewport);
        self.progression.boss_active = true;
        self.progression.intro_timer = 0;
        self.progression.intro_alpha = 0.0;
        self.phase = GamePhase::Playing;
        log::info!("boss fight started at level {level}");
    }

    fn enter_game_over(&mut self) {
        self.progression.high_score = self.progression.high_score.max(self.progression.score);
        self.progression.boss_warning_timer = None;
        self.progression.pending_boss_level = None;
        self.progression.game_over_timer = 0;
        self.progression.game_over_alpha = 0.0;
        self.progression.submit_prompted = false;
        self.phase = GamePhase::GameOver;

        let players: Vec<Entity> = self
            .world
            .query_mut::<&PlayerShip>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in players {
            let _ = self.world.despawn(entity);
        }
        log::info!(
            "game over: score {}, level {}",
            self.progression.score,
            self.progression.level
        );
    }

    /// Game over and both leaderboard phases share the slowed backdrop.
    fn run_game_over(&mut self) {
        let viewport = self.config.viewport;
        self.stars.slow();
        self.stars.update(&mut self.rng, viewport);
        self.effects.update();

        if self.phase != GamePhase::GameOver {
            return;
        }
        self.progression.game_over_timer += 1;
        self.progression.game_over_alpha =
            (self.progression.game_over_alpha + GAME_OVER_FADE_STEP).min(GAME_OVER_MAX_ALPHA);

        if self.progression.game_over_timer >= GAME_OVER_SUBMIT_TICKS
            && !self.progression.submit_prompted
        {
            self.progression.submit_prompted = true;
            self.events.push(GameEvent::SubmitPrompt {
                score: self.progression.score,
                level: self.progression.level,
            });
            self.phase = GamePhase::LeaderboardSubmit;
        }
    }

    /// Re-derive everything sized off the viewport after a resize.
    fn resize_viewport(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            log::warn!("ignoring degenerate viewport {width}x{height}");
            return;
        }
        let old = self.config.viewport;
        let new = Viewport { width, height };
        self.config.viewport = new;

        // Reproject positions so everything keeps its relative place.
        let sx = new.width / old.width;
        let sy = new.height / old.height;
        for (_entity, pos) in self.world.query_mut::<&mut Position>() {
            pos.0.x *= sx;
            pos.0.y *= sy;
        }
        let ratio = new.scale() / old.scale();
        for (_entity, spatial) in self.world.query_mut::<&mut Spatial>() {
            spatial.size *= ratio;
            spatial.collision_radius *= ratio;
        }
        self.stars = StarField::new(&mut self.rng, new);
        self.stars.recolor(self.progression.level);
    }

    fn overlay_alpha(&self) -> f32 {
        match self.phase {
            GamePhase::BossIntro => self.progression.intro_alpha,
            GamePhase::GameOver | GamePhase::LeaderboardSubmit | GamePhase::LeaderboardView => {
                self.progression.game_over_alpha
            }
            _ => 0.0,
        }
    }
}
