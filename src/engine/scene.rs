use serde::Serialize;

use super::constants::SCREEN_WIDTH;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Point,
    stage_width: i16,
}

impl Scene {
    pub fn new(stage_width: i16) -> Scene {
        Scene {
            camera: Point::default(),
            stage_width,
        }
    }

    pub fn stage_width(&self) -> i16 {
        self.stage_width
    }

    /// Rightmost camera x that still keeps the screen inside the stage.
    /// Negative for stages narrower than the screen.
    pub fn max_camera_x(&self) -> i32 {
        self.stage_width as i32 - SCREEN_WIDTH as i32
    }
}

#[derive(Debug, Default, Clone)]
pub struct Cursor {
    pub sequence_id: i16,
}
