// Game struct: the screen state machine and the per-frame pipeline
//
// One call to `Game::frame` consumes an input snapshot and a time step,
// advances whichever screen is active, and returns the frame's events and
// audio cues. Nothing outside this struct mutates game state.

use crate::assets::{AssetTable, SoundId};
use crate::config::GameConfig;
use crate::events::{AudioCue, FrameEvent};
use crate::geometry::Size;
use crate::input::{GameAction, InputSnapshot};
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::collisions::Resolver;
use super::menu::{MainMenu, MenuButton};
use super::session::SessionState;
use super::spawner;
use super::types::{FrameOutput, GameState};
use super::update;
use super::world::World;

pub struct Game {
    pub(super) config: GameConfig,
    pub(super) assets: AssetTable,
    rng: StdRng,
    pub(super) world: World,
    pub(super) session: SessionState,
    pub(super) state: GameState,
    pub(super) menu: MainMenu,
    /// Cues raised outside `frame` (construction), flushed with the next frame
    pending: Vec<AudioCue>,
}

impl Game {
    /// Builds a game on the title screen with the first wave already placed.
    pub fn new(config: GameConfig, assets: AssetTable, field: Size, rng: StdRng) -> Self {
        let world = World::new(field, &assets);
        let session = SessionState::new(&config);
        let menu = MainMenu::new(field, &assets);

        let mut game = Game {
            config,
            assets,
            rng,
            world,
            session,
            state: GameState::MainMenu,
            menu,
            pending: vec![AudioCue::Loop(SoundId::TitleMusic)],
        };
        game.spawn_initial_wave();
        info!("Game created on a {}x{} field", field.width, field.height);
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Runs one frame. `dt` is clamped to the configured maximum so a
    /// stalled window does not teleport everything on the next frame.
    pub fn frame(&mut self, input: &InputSnapshot, dt: f32) -> FrameOutput {
        let mut out = FrameOutput {
            cues: std::mem::take(&mut self.pending),
            ..FrameOutput::default()
        };

        if input.has(GameAction::Quit) {
            info!("Quit requested");
            self.set_state(GameState::Exited);
        }

        let dt = dt.clamp(0.0, self.config.session.max_frame_dt);

        match self.state {
            GameState::MainMenu => self.menu_frame(input, &mut out),
            GameState::Rules => {
                if input.has(GameAction::Confirm) {
                    out.cue(AudioCue::Loop(SoundId::GameMusic));
                    self.set_state(GameState::Playing);
                }
            }
            GameState::Credits => {
                if input.has(GameAction::Confirm) {
                    out.cue(AudioCue::Stop(SoundId::CreditsMusic));
                    out.cue(AudioCue::Loop(SoundId::TitleMusic));
                    self.set_state(GameState::MainMenu);
                }
            }
            GameState::Playing => self.playing_frame(input, dt, &mut out),
            GameState::Paused => {
                if input.has(GameAction::TogglePause) {
                    self.set_state(GameState::Playing);
                } else if input.has(GameAction::Confirm) {
                    stop_session_audio(&mut out);
                    self.return_to_menu(&mut out);
                }
            }
            GameState::GameOver { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 || input.has(GameAction::Confirm) {
                    self.return_to_menu(&mut out);
                } else {
                    self.state = GameState::GameOver { remaining };
                }
            }
            GameState::Exited => {}
        }

        out.quit = self.state == GameState::Exited;
        out
    }

    /// Puts everything back to the start of a session.
    ///
    /// Score, health, counters and timers are reinitialized, the player is
    /// re-centered, every collection is cleared and the first wave respawns.
    pub fn reset(&mut self) {
        self.world.reset();
        self.session.reset(&self.config);
        self.spawn_initial_wave();
        info!("Session reset");
    }

    fn set_state(&mut self, state: GameState) {
        if self.state != state {
            debug!("State {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn spawn_initial_wave(&mut self) {
        spawner::spawn_initial_enemies(
            &mut self.world,
            self.config.enemies.initial_count,
            &self.config,
            &self.assets,
            &mut self.rng,
        );
    }

    fn return_to_menu(&mut self, out: &mut FrameOutput) {
        self.reset();
        out.cue(AudioCue::Loop(SoundId::TitleMusic));
        self.set_state(GameState::MainMenu);
    }

    fn menu_frame(&mut self, input: &InputSnapshot, out: &mut FrameOutput) {
        let Some(button) = input.clicks().find_map(|at| self.menu.button_at(at)) else {
            return;
        };

        match button {
            MenuButton::Start => {
                out.cue(AudioCue::Stop(SoundId::TitleMusic));
                self.set_state(GameState::Rules);
            }
            MenuButton::Credits => {
                out.cue(AudioCue::Stop(SoundId::TitleMusic));
                out.cue(AudioCue::Loop(SoundId::CreditsMusic));
                self.set_state(GameState::Credits);
            }
            MenuButton::Exit => {
                info!("Exit chosen from the menu");
                self.set_state(GameState::Exited);
            }
        }
    }

    fn playing_frame(&mut self, input: &InputSnapshot, dt: f32, out: &mut FrameOutput) {
        if input.has(GameAction::TogglePause) {
            if self.world.player.thrusting {
                self.world.player.thrusting = false;
                out.cue(AudioCue::Stop(SoundId::Thrust));
            }
            self.set_state(GameState::Paused);
            return;
        }

        if input.has(GameAction::Shockwave)
            && spawner::trigger_shockwave(&mut self.world, &mut self.session, &self.config, &self.assets)
        {
            out.cue(AudioCue::Play(SoundId::Shockwave));
            out.event(FrameEvent::ShockwaveTriggered(self.world.player.position));
        }

        self.simulate(input, dt, out);
    }

    /// One simulation step of a running session.
    fn simulate(&mut self, input: &InputSnapshot, dt: f32, out: &mut FrameOutput) {
        self.update_battle_music(out);

        if self.session.health.is_depleted() {
            self.game_over(out);
            return;
        }

        if input.thrust_held != self.world.player.thrusting {
            out.cue(if input.thrust_held {
                AudioCue::Loop(SoundId::Thrust)
            } else {
                AudioCue::Stop(SoundId::Thrust)
            });
        }

        update::advance(&mut self.world, input.pointer, input.thrust_held, dt, &self.config);

        let mut resolver = Resolver {
            config: &self.config,
            assets: &self.assets,
            rng: &mut self.rng,
        };
        resolver.resolve(&mut self.world, &mut self.session, out);

        self.world.update_effects(dt);

        let bosses = spawner::spawn_reinforcements(
            &mut self.world,
            &mut self.session,
            &self.config,
            &self.assets,
            &mut self.rng,
        );
        if bosses > 0 {
            out.event(FrameEvent::ReinforcementsArrived { bosses });
        }

        spawner::tick_enemy_spawn(
            &mut self.world,
            &mut self.session,
            dt,
            &self.config,
            &self.assets,
            &mut self.rng,
        );

        if spawner::fire_player(
            &mut self.world,
            &mut self.session,
            input.fire_held,
            input.pointer,
            dt,
            &self.config,
            &self.assets,
        ) {
            out.cue(AudioCue::Play(SoundId::Laser));
            out.event(FrameEvent::ShotFired);
        }

        spawner::fire_bosses(&mut self.world, dt, &self.config, &self.assets);
        update::advance_ufo_bullets(&mut self.world, dt);
    }

    /// Swaps the game music for the battle theme while any boss is alive.
    fn update_battle_music(&mut self, out: &mut FrameOutput) {
        let bosses_alive = !self.world.bosses.is_empty();

        if bosses_alive && !self.session.ufo_music {
            out.cue(AudioCue::Pause(SoundId::GameMusic));
            out.cue(AudioCue::Loop(SoundId::UfoBattleMusic));
            self.session.ufo_music = true;
        } else if !bosses_alive && self.session.ufo_music {
            out.cue(AudioCue::Stop(SoundId::UfoBattleMusic));
            out.cue(AudioCue::Resume(SoundId::GameMusic));
            self.session.ufo_music = false;
        }
    }

    fn game_over(&mut self, out: &mut FrameOutput) {
        self.world.clear_combat();
        stop_session_audio(out);

        let score = self.session.score();
        out.event(FrameEvent::GameOver { score });
        info!("Game over with score {}", score);

        self.set_state(GameState::GameOver {
            remaining: self.config.session.game_over_seconds,
        });
    }
}

/// Silences everything a running session may have started.
fn stop_session_audio(out: &mut FrameOutput) {
    out.cue(AudioCue::Stop(SoundId::GameMusic));
    out.cue(AudioCue::Stop(SoundId::UfoBattleMusic));
    out.cue(AudioCue::Stop(SoundId::Thrust));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{Enemy, EnemyKind};
    use crate::geometry::Vec2;
    use crate::projectile::Projectile;
    use crate::ufo::UfoBoss;
    use rand::SeedableRng;

    const FIELD: Size = Size::new(1000.0, 1000.0);
    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(
            GameConfig::default(),
            AssetTable::uniform(Size::new(40.0, 40.0)),
            FIELD,
            StdRng::seed_from_u64(3),
        )
    }

    fn press(action: GameAction) -> InputSnapshot {
        InputSnapshot {
            pointer: Vec2::new(500.0, 0.0),
            actions: vec![action],
            ..InputSnapshot::default()
        }
    }

    fn idle() -> InputSnapshot {
        InputSnapshot {
            pointer: Vec2::new(500.0, 0.0),
            ..InputSnapshot::default()
        }
    }

    fn playing_game() -> Game {
        let mut game = game();
        game.frame(&press(GameAction::Click(Vec2::new(500.0, 650.0))), DT);
        game.frame(&press(GameAction::Confirm), DT);
        assert_eq!(game.state(), GameState::Playing);
        game
    }

    #[test]
    fn test_new_game_starts_on_menu_with_title_music() {
        let mut game = game();
        assert_eq!(game.state(), GameState::MainMenu);
        assert_eq!(game.world().enemies.len(), 10);

        let out = game.frame(&idle(), DT);
        assert_eq!(out.cues, vec![AudioCue::Loop(SoundId::TitleMusic)]);
        let out = game.frame(&idle(), DT);
        assert!(out.cues.is_empty());
    }

    #[test]
    fn test_menu_start_rules_then_play() {
        let mut game = game();
        game.frame(&idle(), DT);

        let out = game.frame(&press(GameAction::Click(Vec2::new(500.0, 650.0))), DT);
        assert_eq!(game.state(), GameState::Rules);
        assert!(out.cues.contains(&AudioCue::Stop(SoundId::TitleMusic)));

        let out = game.frame(&press(GameAction::Confirm), DT);
        assert_eq!(game.state(), GameState::Playing);
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::GameMusic)));
    }

    #[test]
    fn test_menu_credits_and_back() {
        let mut game = game();
        let out = game.frame(&press(GameAction::Click(Vec2::new(800.0, 800.0))), DT);
        assert_eq!(game.state(), GameState::Credits);
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::CreditsMusic)));

        let out = game.frame(&press(GameAction::Confirm), DT);
        assert_eq!(game.state(), GameState::MainMenu);
        assert!(out.cues.contains(&AudioCue::Stop(SoundId::CreditsMusic)));
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::TitleMusic)));
    }

    #[test]
    fn test_menu_exit_and_click_miss() {
        let mut game = game();
        game.frame(&press(GameAction::Click(Vec2::new(5.0, 5.0))), DT);
        assert_eq!(game.state(), GameState::MainMenu);

        let out = game.frame(&press(GameAction::Click(Vec2::new(500.0, 850.0))), DT);
        assert_eq!(game.state(), GameState::Exited);
        assert!(out.quit);
    }

    #[test]
    fn test_quit_from_any_state() {
        let mut game = playing_game();
        let out = game.frame(&press(GameAction::Quit), DT);
        assert!(out.quit);
        assert_eq!(game.state(), GameState::Exited);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut game = playing_game();
        game.frame(&press(GameAction::TogglePause), DT);
        assert_eq!(game.state(), GameState::Paused);

        let before: Vec<Vec2> = game.world().enemies.iter().map(|e| e.position).collect();
        for _ in 0..10 {
            game.frame(&idle(), DT);
        }
        let after: Vec<Vec2> = game.world().enemies.iter().map(|e| e.position).collect();
        assert_eq!(before, after);

        game.frame(&press(GameAction::TogglePause), DT);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_pause_then_confirm_resets_to_menu() {
        let mut game = playing_game();
        game.session.award(500);
        game.frame(&press(GameAction::TogglePause), DT);

        let out = game.frame(&press(GameAction::Confirm), DT);
        assert_eq!(game.state(), GameState::MainMenu);
        assert_eq!(game.score(), 0);
        assert!(out.cues.contains(&AudioCue::Stop(SoundId::GameMusic)));
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::TitleMusic)));
    }

    #[test]
    fn test_depleted_health_ends_the_game() {
        let mut game = playing_game();
        let at = Vec2::new(100.0, 100.0);
        game.world.projectiles.push(Projectile::new(at, 0.0, 600.0, Size::new(4.0, 4.0)));
        game.world.spawn_explosion(at, game.config.effects.explosion, &game.assets);
        game.session.health.take_damage(100);

        let out = game.frame(&idle(), DT);

        assert!(matches!(game.state(), GameState::GameOver { .. }));
        assert!(game.world().enemies.is_empty());
        assert!(game.world().projectiles.is_empty());
        assert!(game.world().explosions.is_empty());
        assert!(game.world().shockwaves.is_empty());
        assert!(out.events.contains(&FrameEvent::GameOver { score: 0 }));
    }

    #[test]
    fn test_game_over_times_out_to_menu() {
        let mut game = playing_game();
        game.session.award(120);
        game.session.health.take_damage(100);
        game.frame(&idle(), DT);

        // 5 seconds at the clamped 0.1 s step
        for _ in 0..45 {
            game.frame(&idle(), 1.0);
            assert!(matches!(game.state(), GameState::GameOver { .. }));
        }
        for _ in 0..10 {
            game.frame(&idle(), 1.0);
        }
        assert_eq!(game.state(), GameState::MainMenu);
        assert_eq!(game.score(), 0);
        assert_eq!(game.session().health.current(), 10);
        assert_eq!(game.world().enemies.len(), 10);
    }

    #[test]
    fn test_game_over_skipped_with_confirm() {
        let mut game = playing_game();
        game.session.health.take_damage(100);
        game.frame(&idle(), DT);
        game.frame(&press(GameAction::Confirm), DT);
        assert_eq!(game.state(), GameState::MainMenu);
    }

    #[test]
    fn test_shockwave_spends_charge() {
        let mut game = playing_game();
        let out = game.frame(&press(GameAction::Shockwave), DT);
        assert_eq!(game.session().shockwave_charges, 0);
        assert!(out.cues.contains(&AudioCue::Play(SoundId::Shockwave)));

        let out = game.frame(&press(GameAction::Shockwave), DT);
        assert!(!out.cues.contains(&AudioCue::Play(SoundId::Shockwave)));
    }

    #[test]
    fn test_fire_emits_laser() {
        let mut game = playing_game();
        let input = InputSnapshot {
            fire_held: true,
            ..idle()
        };
        let out = game.frame(&input, DT);
        assert!(out.cues.contains(&AudioCue::Play(SoundId::Laser)));
        assert!(out.events.contains(&FrameEvent::ShotFired));
        assert_eq!(game.world().projectiles.len(), 1);
    }

    #[test]
    fn test_thrust_sound_follows_thrust_edges() {
        let mut game = playing_game();
        let thrust = InputSnapshot {
            thrust_held: true,
            ..idle()
        };
        let out = game.frame(&thrust, DT);
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::Thrust)));
        let out = game.frame(&thrust, DT);
        assert!(!out.cues.contains(&AudioCue::Loop(SoundId::Thrust)));
        let out = game.frame(&idle(), DT);
        assert!(out.cues.contains(&AudioCue::Stop(SoundId::Thrust)));
    }

    #[test]
    fn test_battle_music_follows_bosses() {
        let mut game = playing_game();
        game.world.enemies.clear();
        game.world.bosses.push(UfoBoss::new(Vec2::new(50.0, 50.0), 0.0, Size::new(40.0, 40.0)));

        let out = game.frame(&idle(), DT);
        assert!(out.cues.contains(&AudioCue::Pause(SoundId::GameMusic)));
        assert!(out.cues.contains(&AudioCue::Loop(SoundId::UfoBattleMusic)));

        game.world.bosses.clear();
        let out = game.frame(&idle(), DT);
        assert!(out.cues.contains(&AudioCue::Stop(SoundId::UfoBattleMusic)));
        assert!(out.cues.contains(&AudioCue::Resume(SoundId::GameMusic)));
    }

    #[test]
    fn test_direct_kill_brings_reinforcements() {
        let mut game = playing_game();
        game.config.pickups.powerup_chance = 1.0;
        game.world.enemies.clear();
        let at = Vec2::new(100.0, 100.0);
        game.world.enemies.push(Enemy::new(
            EnemyKind::Direct,
            at,
            Vec2::new(1.0, 0.0),
            0.0,
            Size::new(40.0, 40.0),
        ));
        game.world.projectiles.push(Projectile::new(at, 0.0, 0.0, Size::new(4.0, 4.0)));

        let out = game.frame(&idle(), DT);

        assert_eq!(game.score(), 80);
        assert_eq!(game.world().bosses.len(), 2);
        assert_eq!(game.world().medkits.len(), 1);
        assert!(!game.session().medspawn);
        assert!(out.events.contains(&FrameEvent::ReinforcementsArrived { bosses: 2 }));
    }
}
