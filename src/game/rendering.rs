// Drawing: describes the current screen to a RenderSink
//
// Rendering borrows the game immutably, so it cannot disturb the
// simulation. Within a screen, later calls draw on top of earlier ones.

use crate::assets::SpriteId;
use crate::geometry::Vec2;
use crate::health::HeartIcon;
use crate::render::{DrawCommand, RenderSink, TextAnchor};

use super::orchestrator::Game;
use super::types::GameState;

const HUD_MARGIN: f32 = 20.0;
const HUD_SCALE: u32 = 2;
const HEART_SPACING: f32 = 30.0;
const HEART_TOP: f32 = 10.0;

impl Game {
    pub fn render(&self, sink: &mut impl RenderSink) {
        match self.state {
            GameState::MainMenu => self.menu.render(sink),
            GameState::Rules => sink.draw_backdrop(SpriteId::Rules),
            GameState::Credits => sink.draw_backdrop(SpriteId::Credits),
            GameState::Playing => self.render_field(sink),
            GameState::Paused => {
                self.render_field(sink);
                sink.draw_text("GAME PAUSED", TextAnchor::Center { offset_y: -40.0 }, 4);
                sink.draw_text("PRESS SPACE TO EXIT", TextAnchor::Center { offset_y: 20.0 }, 2);
            }
            GameState::GameOver { .. } => {
                sink.draw_text("GAME OVER", TextAnchor::Center { offset_y: -40.0 }, 5);
                sink.draw_text(
                    &format!("SCORE: {}", self.session.score()),
                    TextAnchor::Center { offset_y: 30.0 },
                    3,
                );
            }
            GameState::Exited => {}
        }
    }

    fn render_field(&self, sink: &mut impl RenderSink) {
        let world = &self.world;

        let player = &world.player;
        sink.draw_sprite(&DrawCommand::new(player.sprite(), player.position).rotated(player.heading));

        self.render_counters(sink);

        for bullet in &world.ufo_bullets {
            sink.draw_sprite(&DrawCommand::new(bullet.sprite(), bullet.position).rotated(bullet.heading));
        }
        for shot in &world.projectiles {
            sink.draw_sprite(&DrawCommand::new(shot.sprite(), shot.position).rotated(shot.heading));
        }
        for boss in &world.bosses {
            sink.draw_sprite(&DrawCommand::new(boss.sprite(), boss.position));
        }
        for enemy in &world.enemies {
            sink.draw_sprite(&DrawCommand::new(enemy.kind.sprite(), enemy.position));
        }
        for powerup in &world.powerups {
            sink.draw_sprite(&DrawCommand::new(powerup.sprite(), powerup.position));
        }
        for wave in &world.shockwaves {
            sink.draw_sprite(
                &DrawCommand::new(wave.kind().sprite(), wave.position())
                    .with_source(wave.source_rect()),
            );
        }
        for medkit in &world.medkits {
            sink.draw_sprite(&DrawCommand::new(medkit.sprite(), medkit.position));
        }
        for explosion in &world.explosions {
            sink.draw_sprite(
                &DrawCommand::new(explosion.kind().sprite(), explosion.position())
                    .with_source(explosion.source_rect()),
            );
        }

        self.render_hearts(sink);
    }

    fn render_counters(&self, sink: &mut impl RenderSink) {
        let lines = [
            format!("SCORE: {}", self.session.score()),
            format!("SHOCKWAVE COUNT: {}", self.session.shockwave_charges),
            format!("MEDKIT USED: {}", self.session.medkits_used),
        ];
        for (i, line) in lines.iter().enumerate() {
            let anchor = TextAnchor::TopRight {
                margin: HUD_MARGIN,
                y: HUD_MARGIN + 30.0 * i as f32,
            };
            sink.draw_text(line, anchor, HUD_SCALE);
        }
    }

    /// Heart row in the top-left corner, one icon per remaining heart.
    fn render_hearts(&self, sink: &mut impl RenderSink) {
        for (i, icon) in self.session.health.heart_icons().into_iter().enumerate() {
            let sprite = match icon {
                HeartIcon::Full => SpriteId::FullHeart,
                HeartIcon::Half => SpriteId::HalfHeart,
            };
            let size = self.assets.size(sprite);
            let left = 10.0 + i as f32 * (size.width + HEART_SPACING);
            let center = Vec2::new(left + size.width / 2.0, HEART_TOP + size.height / 2.0);
            sink.draw_sprite(&DrawCommand::new(sprite, center));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assets::{AssetTable, SpriteId};
    use crate::config::GameConfig;
    use crate::game::{Game, GameState};
    use crate::geometry::{Size, Vec2};
    use crate::input::{GameAction, InputSnapshot};
    use crate::render::RecordingSink;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> Game {
        Game::new(
            GameConfig::default(),
            AssetTable::uniform(Size::new(40.0, 40.0)),
            Size::new(1000.0, 1000.0),
            StdRng::seed_from_u64(9),
        )
    }

    fn press(action: GameAction) -> InputSnapshot {
        InputSnapshot {
            actions: vec![action],
            ..InputSnapshot::default()
        }
    }

    fn start(game: &mut Game) {
        game.frame(&press(GameAction::Click(Vec2::new(500.0, 650.0))), 0.016);
        game.frame(&press(GameAction::Confirm), 0.016);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_menu_renders_background_and_buttons() {
        let mut sink = RecordingSink::default();
        game().render(&mut sink);
        assert_eq!(sink.backdrops, vec![SpriteId::MainBackground]);
        assert_eq!(sink.count(SpriteId::StartButton), 1);
        assert_eq!(sink.count(SpriteId::CreditsButton), 1);
    }

    #[test]
    fn test_playing_renders_field_and_hud() {
        let mut game = game();
        start(&mut game);

        let mut sink = RecordingSink::default();
        game.render(&mut sink);

        assert_eq!(sink.sprites[0].sprite, SpriteId::Ship);
        assert_eq!(sink.count(SpriteId::Asteroid), 10);
        assert_eq!(sink.count(SpriteId::FullHeart), 5);
        assert_eq!(sink.count(SpriteId::HalfHeart), 0);
        assert!(sink.has_text("SCORE: 0"));
        assert!(sink.has_text("SHOCKWAVE COUNT: 1"));
        assert!(sink.has_text("MEDKIT USED: 0"));
    }

    #[test]
    fn test_hearts_follow_health() {
        let mut game = game();
        start(&mut game);
        game.session.health.take_damage(3);

        let mut sink = RecordingSink::default();
        game.render(&mut sink);

        assert_eq!(sink.count(SpriteId::FullHeart), 3);
        assert_eq!(sink.count(SpriteId::HalfHeart), 1);
        let first = sink
            .sprites
            .iter()
            .find(|c| c.sprite == SpriteId::FullHeart)
            .map(|c| c.center);
        assert_eq!(first, Some(Vec2::new(30.0, 30.0)));
    }

    #[test]
    fn test_pause_overlay() {
        let mut game = game();
        start(&mut game);
        game.frame(&press(GameAction::TogglePause), 0.016);

        let mut sink = RecordingSink::default();
        game.render(&mut sink);
        assert!(sink.has_text("GAME PAUSED"));
        assert!(sink.has_text("PRESS SPACE TO EXIT"));
        assert_eq!(sink.count(SpriteId::Asteroid), 10);
    }

    #[test]
    fn test_game_over_shows_score() {
        let mut game = game();
        start(&mut game);
        game.session.award(340);
        game.session.health.take_damage(100);
        game.frame(&InputSnapshot::default(), 0.016);

        let mut sink = RecordingSink::default();
        game.render(&mut sink);
        assert!(sink.has_text("GAME OVER"));
        assert!(sink.has_text("SCORE: 340"));
        assert!(sink.sprites.is_empty());
    }
}
