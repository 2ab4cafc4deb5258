//! Scene drawing
//!
//! Back to front: sky, background, pipes, ground, bird, banners, score.

use glam::Vec2;

use super::sprites::{
    BACKGROUND, BIRD_FRAMES, FOREGROUND, GAME_OVER, GET_READY, PIPE_BOTTOM, PIPE_TOP,
};
use super::{Surface, TextStyle};
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const SCORE_PLAYING: TextStyle = TextStyle {
    font: "35px Teko",
    fill: "#FFF",
    stroke: "#000",
    line_width: 2.0,
    align: "center",
};

const SCORE_GAME_OVER: TextStyle = TextStyle {
    font: "25px Teko",
    align: "start",
    ..SCORE_PLAYING
};

const FPS_STYLE: TextStyle = TextStyle {
    font: "14px monospace",
    fill: "#FFF",
    stroke: "#000",
    line_width: 1.0,
    align: "start",
};

/// Score position while playing, centered horizontally
const SCORE_POS: Vec2 = Vec2::new(CANVAS_WIDTH / 2.0, 50.0);
/// Score and best positions on the game over banner
const FINAL_SCORE_POS: Vec2 = Vec2::new(225.0, 186.0);
const BEST_SCORE_POS: Vec2 = Vec2::new(225.0, 228.0);

const GET_READY_POS: Vec2 = Vec2::new(CANVAS_WIDTH / 2.0 - 173.0 / 2.0, 80.0);
const GAME_OVER_POS: Vec2 = Vec2::new(CANVAS_WIDTH / 2.0 - 225.0 / 2.0, 90.0);

/// Draw one frame of the game
pub fn draw(surface: &mut impl Surface, state: &GameState) {
    surface.fill_rect(SKY_COLOR, Vec2::ZERO, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));

    // Static background, tiled twice to cover the width
    let bg_y = CANVAS_HEIGHT - BG_HEIGHT;
    surface.draw_sprite(BACKGROUND, Vec2::new(0.0, bg_y));
    surface.draw_sprite(BACKGROUND, Vec2::new(BG_WIDTH, bg_y));

    for pipe in &state.pipes {
        surface.draw_sprite(PIPE_TOP, Vec2::new(pipe.x, pipe.y));
        surface.draw_sprite(PIPE_BOTTOM, Vec2::new(pipe.x, pipe.bottom_y()));
    }

    let fg_x = state.foreground.x;
    surface.draw_sprite(FOREGROUND, Vec2::new(fg_x, GROUND_Y));
    surface.draw_sprite(FOREGROUND, Vec2::new(fg_x + FG_WIDTH, GROUND_Y));

    let bird = &state.bird;
    surface.draw_sprite_rotated(BIRD_FRAMES[bird.frame], bird.pos, bird.rotation);

    match state.phase {
        GamePhase::GetReady => {
            surface.draw_sprite(GET_READY, GET_READY_POS);
        }
        GamePhase::Playing => {
            surface.draw_text(&state.score.value.to_string(), SCORE_POS, SCORE_PLAYING);
        }
        GamePhase::GameOver => {
            surface.draw_sprite(GAME_OVER, GAME_OVER_POS);
            surface.draw_text(
                &state.score.value.to_string(),
                FINAL_SCORE_POS,
                SCORE_GAME_OVER,
            );
            surface.draw_text(
                &state.score.best.to_string(),
                BEST_SCORE_POS,
                SCORE_GAME_OVER,
            );
        }
    }
}

/// FPS counter in the top-left corner
pub fn draw_fps(surface: &mut impl Surface, fps: u32) {
    surface.draw_text(&format!("{} fps", fps), Vec2::new(6.0, 18.0), FPS_STYLE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SpriteRect;
    use crate::sim::{Pipe, TickInput, tick};

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Fill(String),
        Sprite(SpriteRect, Vec2),
        Rotated(SpriteRect, Vec2, f32),
        Text(String, Vec2, &'static str, &'static str),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<DrawCall>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, color: &str, _pos: Vec2, _size: Vec2) {
            self.calls.push(DrawCall::Fill(color.to_string()));
        }

        fn draw_sprite(&mut self, sprite: SpriteRect, pos: Vec2) {
            self.calls.push(DrawCall::Sprite(sprite, pos));
        }

        fn draw_sprite_rotated(&mut self, sprite: SpriteRect, center: Vec2, angle: f32) {
            self.calls.push(DrawCall::Rotated(sprite, center, angle));
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
            self.calls
                .push(DrawCall::Text(text.to_string(), pos, style.font, style.align));
        }
    }

    fn record(state: &GameState) -> Vec<DrawCall> {
        let mut recorder = Recorder::default();
        draw(&mut recorder, state);
        recorder.calls
    }

    #[test]
    fn test_get_ready_scene() {
        let state = GameState::new(1, 0);
        let calls = record(&state);

        assert_eq!(
            calls,
            vec![
                DrawCall::Fill(SKY_COLOR.to_string()),
                DrawCall::Sprite(BACKGROUND, Vec2::new(0.0, 254.0)),
                DrawCall::Sprite(BACKGROUND, Vec2::new(275.0, 254.0)),
                DrawCall::Sprite(FOREGROUND, Vec2::new(0.0, 368.0)),
                DrawCall::Sprite(FOREGROUND, Vec2::new(224.0, 368.0)),
                DrawCall::Rotated(BIRD_FRAMES[0], Vec2::new(50.0, 150.0), 0.0),
                DrawCall::Sprite(GET_READY, Vec2::new(73.5, 80.0)),
            ]
        );
    }

    #[test]
    fn test_playing_scene_order() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.pipes.push_back(Pipe { x: 100.0, y: -200.0 });
        state.score.value = 3;
        state.foreground.x = -10.0;

        let calls = record(&state);
        assert_eq!(calls.len(), 9);
        assert_eq!(calls[3], DrawCall::Sprite(PIPE_TOP, Vec2::new(100.0, -200.0)));
        assert_eq!(calls[4], DrawCall::Sprite(PIPE_BOTTOM, Vec2::new(100.0, 285.0)));
        assert_eq!(calls[5], DrawCall::Sprite(FOREGROUND, Vec2::new(-10.0, 368.0)));
        assert_eq!(calls[6], DrawCall::Sprite(FOREGROUND, Vec2::new(214.0, 368.0)));
        assert!(matches!(calls[7], DrawCall::Rotated(..)));
        assert_eq!(
            calls[8],
            DrawCall::Text(
                "3".to_string(),
                Vec2::new(160.0, 50.0),
                "35px Teko",
                "center"
            )
        );
    }

    #[test]
    fn test_game_over_scene_shows_best() {
        let mut state = GameState::new(1, 9);
        state.phase = GamePhase::GameOver;
        state.score.value = 4;

        let calls = record(&state);
        let tail = &calls[calls.len() - 3..];
        assert_eq!(tail[0], DrawCall::Sprite(GAME_OVER, Vec2::new(47.5, 90.0)));
        assert_eq!(
            tail[1],
            DrawCall::Text(
                "4".to_string(),
                Vec2::new(225.0, 186.0),
                "25px Teko",
                "start"
            )
        );
        assert_eq!(
            tail[2],
            DrawCall::Text(
                "9".to_string(),
                Vec2::new(225.0, 228.0),
                "25px Teko",
                "start"
            )
        );
        assert!(!calls.iter().any(|c| *c == DrawCall::Sprite(GET_READY, GET_READY_POS)));
    }

    #[test]
    fn test_bird_drawn_with_pose() {
        let mut state = GameState::new(1, 0);
        let tap = TickInput {
            tap: true,
            ..Default::default()
        };
        tick(&mut state, &tap);
        tick(&mut state, &tap);

        let calls = record(&state);
        let bird = calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Rotated(sprite, center, angle) => Some((*sprite, *center, *angle)),
                _ => None,
            })
            .expect("bird is always drawn");
        assert_eq!(bird.0, BIRD_FRAMES[state.bird.frame]);
        assert_eq!(bird.1, state.bird.pos);
        assert_eq!(bird.2, ROTATION_RISING);
    }

    #[test]
    fn test_fps_overlay() {
        let mut recorder = Recorder::default();
        draw_fps(&mut recorder, 60);
        assert_eq!(
            recorder.calls,
            vec![DrawCall::Text(
                "60 fps".to_string(),
                Vec2::new(6.0, 18.0),
                "14px monospace",
                "start"
            )]
        );
    }
}
