//! Main menu buttons
//!
//! The title screen has three clickable sprite buttons laid out relative to
//! the field size, so the menu works at any window resolution.

use crate::assets::{AssetTable, SpriteId};
use crate::geometry::{Rect, Size, Vec2};
use crate::render::{DrawCommand, RenderSink};

/// A clickable button on the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Exit,
    Credits,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Exit, MenuButton::Credits];

    pub fn sprite(self) -> SpriteId {
        match self {
            MenuButton::Start => SpriteId::StartButton,
            MenuButton::Exit => SpriteId::ExitButton,
            MenuButton::Credits => SpriteId::CreditsButton,
        }
    }

    /// Button center as a fraction of the field size.
    fn anchor(self) -> (f32, f32) {
        match self {
            MenuButton::Start => (0.5, 0.65),
            MenuButton::Exit => (0.5, 0.85),
            MenuButton::Credits => (0.8, 0.8),
        }
    }
}

/// Resolved screen placement of every button.
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenu {
    buttons: Vec<(MenuButton, Rect)>,
}

impl MainMenu {
    pub fn new(field: Size, assets: &AssetTable) -> Self {
        let buttons = MenuButton::ALL
            .iter()
            .map(|&button| {
                let (fx, fy) = button.anchor();
                let center = Vec2::new(field.width * fx, field.height * fy);
                (button, Rect::centered(center, assets.size(button.sprite())))
            })
            .collect();

        MainMenu { buttons }
    }

    /// The button under `point`, if any.
    pub fn button_at(&self, point: Vec2) -> Option<MenuButton> {
        self.buttons
            .iter()
            .find(|(_, bounds)| bounds.contains(point))
            .map(|(button, _)| *button)
    }

    pub fn bounds(&self, button: MenuButton) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, bounds)| *bounds)
    }

    /// Background plus the three buttons.
    pub fn render(&self, sink: &mut impl RenderSink) {
        sink.draw_backdrop(SpriteId::MainBackground);
        for (button, bounds) in &self.buttons {
            sink.draw_sprite(&DrawCommand::new(button.sprite(), bounds.center()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSink;

    fn menu() -> MainMenu {
        MainMenu::new(
            Size::new(1000.0, 1000.0),
            &AssetTable::uniform(Size::new(100.0, 40.0)),
        )
    }

    #[test]
    fn test_buttons_scale_with_field() {
        let menu = menu();
        let start = menu.bounds(MenuButton::Start).unwrap();
        assert_eq!(start.center(), Vec2::new(500.0, 650.0));
        let credits = menu.bounds(MenuButton::Credits).unwrap();
        assert_eq!(credits.center(), Vec2::new(800.0, 800.0));
    }

    #[test]
    fn test_button_hit_testing() {
        let menu = menu();
        assert_eq!(menu.button_at(Vec2::new(510.0, 660.0)), Some(MenuButton::Start));
        assert_eq!(menu.button_at(Vec2::new(500.0, 850.0)), Some(MenuButton::Exit));
        assert_eq!(menu.button_at(Vec2::new(790.0, 790.0)), Some(MenuButton::Credits));
        assert_eq!(menu.button_at(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_render_draws_backdrop_and_buttons() {
        let mut sink = RecordingSink::default();
        menu().render(&mut sink);
        assert_eq!(sink.backdrops, vec![SpriteId::MainBackground]);
        assert_eq!(sink.sprites.len(), 3);
    }
}
