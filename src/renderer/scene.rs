//! Screen layouts for menu, playing and game over

use glam::Vec2;

use super::{Color, Renderer, Sprite};
use crate::assets::sprite_size;
use crate::consts::*;
use crate::fsm::GamePhase;
use crate::session::Session;
use crate::sim::{Rect, World};
use crate::ui::{self, Button};

const TITLE_SIZE: f32 = 60.0;
const UI_SIZE: f32 = 40.0;
const SMALL_SIZE: f32 = 30.0;
const TINY_SIZE: f32 = 20.0;

fn centered_text(r: &mut impl Renderer, text: &str, y: f32, size: f32, color: Color) {
    r.draw_text(text, Vec2::new(SCREEN_WIDTH / 2.0, y), size, color);
}

fn screen_rect() -> Rect {
    Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

fn sprite_rect(sprite: Sprite, x: f32, y: f32) -> Rect {
    let size = sprite_size(sprite);
    Rect::new(x, y, size.x, size.y)
}

/// Draw one complete frame for the session's current screen
pub fn draw(session: &Session, r: &mut impl Renderer) {
    match session.phase() {
        GamePhase::Menu => draw_menu(session, r),
        GamePhase::Playing => draw_playing(session, r),
        GamePhase::GameOver => draw_game_over(session, r),
    }
    draw_buttons(session, r);
    r.present();
}

fn draw_menu(session: &Session, r: &mut impl Renderer) {
    r.draw_sprite(Sprite::BackgroundDay, screen_rect(), 0.0, false);
    centered_text(r, "FLAPPY BIM", 80.0, TITLE_SIZE, Color::WHITE);
    centered_text(
        r,
        &format!("Mode: {}", session.difficulty().as_str()),
        130.0,
        SMALL_SIZE,
        Color::WHITE,
    );
    centered_text(r, "By Hien Anh & Nam Khanh", 160.0, TINY_SIZE, Color::WHITE);
    r.draw_sprite(
        Sprite::Bird,
        sprite_rect(Sprite::Bird, SCREEN_WIDTH / 2.0 - BIRD_SIZE / 2.0, 200.0),
        0.0,
        false,
    );
}

/// Pipes, tokens and the bird
fn draw_world(world: &World, r: &mut impl Renderer) {
    r.draw_sprite(Sprite::backdrop(world.backdrop), screen_rect(), 0.0, false);

    for pair in &world.pipes {
        let x = pair.x - PIPE_IMAGE_OFFSET_X;
        r.draw_sprite(
            Sprite::Column,
            sprite_rect(Sprite::Column, x, pair.lower().top()),
            0.0,
            false,
        );
        r.draw_sprite(
            Sprite::Column,
            sprite_rect(Sprite::Column, x, pair.upper().bottom() - SCREEN_HEIGHT),
            0.0,
            true,
        );
    }

    for token in world.tokens.iter().filter(|t| t.active) {
        r.fill_rect(token.rect(), Color::TOKEN);
    }

    r.draw_sprite(Sprite::Bird, world.bird.rect(), world.bird.tilt_degrees(), false);
}

fn draw_playing(session: &Session, r: &mut impl Renderer) {
    let world = session.world();
    draw_world(world, r);

    centered_text(r, &world.pipe_score.to_string(), 50.0, TITLE_SIZE, Color::WHITE);
    if session.autopilot() {
        centered_text(r, "AUTO AI", 85.0, TINY_SIZE, Color::AUTO_LABEL);
    }
    if world.token_score > 0 {
        r.draw_text(
            &format!("Tokens: {}", world.token_score),
            Vec2::new(SCREEN_WIDTH - 60.0, 20.0),
            TINY_SIZE,
            Color::TOKEN,
        );
    }
}

fn draw_game_over(session: &Session, r: &mut impl Renderer) {
    let world = session.world();
    draw_world(world, r);

    r.fill_rect(screen_rect(), Color::BLACK.with_alpha(160));
    centered_text(r, "GAME OVER", 150.0, TITLE_SIZE, Color::WHITE);
    centered_text(r, &format!("Score: {}", world.pipe_score), 220.0, UI_SIZE, Color::WHITE);
    let high = session.high_score();
    let best = match high.best_difficulty() {
        Some(d) => format!("Best: {} ({})", high.best(), d.as_str()),
        None => format!("Best: {}", high.best()),
    };
    centered_text(r, &best, 260.0, SMALL_SIZE, Color::WHITE);
}

fn button_color(button: &Button, pointer: Option<Vec2>) -> Color {
    if button.is_hovered(pointer) {
        Color::BUTTON_HOVER
    } else if button.highlighted {
        Color::BUTTON_ACTIVE
    } else {
        Color::BUTTON
    }
}

fn draw_buttons(session: &Session, r: &mut impl Renderer) {
    for button in ui::buttons(session.phase(), session.autopilot()) {
        r.fill_rect(button.rect, button_color(&button, session.pointer()));
        r.stroke_rect(button.rect, Color::WHITE, 2.0);
        r.draw_text(button.label, button.rect.center(), SMALL_SIZE, Color::WHITE);
    }
}
