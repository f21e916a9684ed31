pub mod config;
pub mod constants;
pub mod frames;
pub mod ini;
pub mod scene;
pub mod special_opcodes;

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;

use crate::errors::Errors;

use config::Config;
use frames::FrameWaiter;
use ini::{Actor, IniRecord, IniResource};
use scene::{Cursor, Point, Scene};

/// Engine state touched by special opcodes.
pub struct Engine {
    flags: u32,
    pub cursor: Cursor,
    pub scene: Scene,
    pub ini: IniResource,
    actors: Vec<Actor>,

    frames: Arc<Mutex<dyn FrameWaiter>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub flags: u32,
    pub cursor_sequence_id: i16,
    pub camera: Point,
    pub flicker: Option<u16>,
    pub flagged_records: Vec<IniRecord>,
    pub actors: Vec<Actor>,
}

impl Engine {
    pub fn new(config: &Config, frames: Arc<Mutex<dyn FrameWaiter>>) -> Engine {
        let mut scene = Scene::new(config.stage_width);
        scene.camera.x = config.camera_x;

        let ini = IniResource::new(config.ini_record_count);
        debug!("{} INI records, stage width {}", ini.len(), scene.stage_width());

        Engine {
            flags: 0,
            cursor: Cursor::default(),
            scene,
            ini,
            actors: vec![Actor::default(); config.actor_count],
            frames,
        }
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn set_flags(&mut self, mask: u32) {
        self.flags |= mask;
    }

    pub fn clear_flags(&mut self, mask: u32) {
        self.flags &= !mask;
    }

    #[cfg(test)]
    pub fn is_flag_set(&self, mask: u32) -> bool {
        self.flags & mask != 0
    }

    pub fn get_ini(&self, id: u16) -> Result<&IniRecord, Errors> {
        self.ini.get(id)
    }

    pub fn get_ini_mut(&mut self, id: u16) -> Result<&mut IniRecord, Errors> {
        self.ini.get_mut(id)
    }

    /// Actor attached to the given INI record.
    pub fn actor_of_mut(&mut self, ini: u16) -> Result<&mut Actor, Errors> {
        let id = self.ini.get(ini)?.actor.ok_or(Errors::ActorMissing { ini })?;
        self.actors.get_mut(id).ok_or(Errors::ActorMissing { ini })
    }

    pub fn wait_for_frames(&mut self, count: u16) {
        let mut frames = match self.frames.lock() {
            Ok(frames) => frames,
            Err(poisoned) => poisoned.into_inner(),
        };
        frames.wait_for_frames(count, &self.scene);
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            flags: self.flags(),
            cursor_sequence_id: self.cursor.sequence_id,
            camera: self.scene.camera,
            flicker: self.ini.flicker_id(),
            flagged_records: self.ini.records()
                .iter()
                .filter(|record| record.flags != 0 || record.field_12 != 0)
                .cloned()
                .collect(),
            actors: self.actors.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::constants::*;
    use super::frames::MockFrameWaiter;
    use test_case::test_case;

    fn new() -> (Engine, Arc<Mutex<MockFrameWaiter>>) {
        let frames = Arc::new(Mutex::new(MockFrameWaiter::new()));
        (Engine::new(&Config::default(), frames.clone()), frames)
    }

    #[test_case(ENGINE_FLAG_8)]
    #[test_case(ENGINE_FLAG_10)]
    #[test_case(ENGINE_FLAG_4000000)]
    fn set_and_clear_flags(mask: u32) {
        let (mut engine, _) = new();
        engine.set_flags(ENGINE_FLAG_8 | ENGINE_FLAG_10 | ENGINE_FLAG_4000000);
        let all = engine.flags();

        engine.clear_flags(mask);

        assert!(!engine.is_flag_set(mask));
        assert_eq!(engine.flags(), all & !mask);

        engine.set_flags(mask);

        assert_eq!(engine.flags(), all);
    }

    #[test]
    fn actor_of_record_without_actor() {
        let (mut engine, _) = new();

        assert!(matches!(engine.actor_of_mut(COMPANION_INI_ID), Err(Errors::ActorMissing { ini: 1 })));
    }

    #[test]
    fn actor_of_flicker() {
        let (mut engine, _) = new();

        engine.actor_of_mut(FLICKER_INI_ID).unwrap().priority_layer = 3;

        assert_eq!(engine.snapshot().actors[0].priority_layer, 3);
    }

    #[test]
    fn wait_for_frames_sees_scene() {
        let (mut engine, frames) = new();
        engine.scene.camera.x = 42;

        {
            let mut frames = frames.lock().unwrap();
            frames.expect_wait_for_frames()
                .times(1)
                .returning(|count, scene| {
                    assert_eq!(count, 2);
                    assert_eq!(scene.camera.x, 42);
                });
        }

        engine.wait_for_frames(2);
    }

    #[test]
    fn snapshot_lists_touched_records() {
        let (mut engine, _) = new();
        engine.get_ini_mut(5).unwrap().flags = INI_FLAG_20;
        engine.cursor.sequence_id = 7;

        let snapshot = engine.snapshot();

        assert_eq!(snapshot.cursor_sequence_id, 7);
        assert_eq!(snapshot.flicker, Some(FLICKER_INI_ID));
        assert_eq!(snapshot.flagged_records.len(), 1);
        assert_eq!(snapshot.flagged_records[0].id, 5);
    }
}
