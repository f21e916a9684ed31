use log::{debug, trace};
use strum_macros::Display;

use crate::errors::Errors;

use super::constants::*;
use super::Engine;

pub type SpecialOpcodeFn = fn(&mut Engine) -> Result<(), Errors>;

#[derive(Clone, Copy)]
pub struct SpecialOpcode {
    pub name: &'static str,
    pub func: SpecialOpcodeFn,
}

#[derive(Display, Debug, Clone, Copy, PartialEq)]
pub enum PanDirection {
    Right,
    Left,
}

/// Hard-coded engine routines that scripts call by index.
pub struct SpecialOpcodes {
    opcodes: [Option<SpecialOpcode>; NUM_SPECIAL_OPCODES],
}

macro_rules! opcode {
    ($table:expr, $op:expr, $func:ident) => {
        $table[$op] = Some(SpecialOpcode {
            name: stringify!($func),
            func: $func,
        });
    };
}

impl SpecialOpcodes {
    pub fn new() -> SpecialOpcodes {
        let mut opcodes: [Option<SpecialOpcode>; NUM_SPECIAL_OPCODES] = [None; NUM_SPECIAL_OPCODES];

        opcode!(opcodes, 0x03, spc_clear_engine_flag_10);
        opcode!(opcodes, 0x04, spc_set_engine_flag_10);

        opcode!(opcodes, 0x09, spc_hide_flicker);
        opcode!(opcodes, 0x0a, spc_show_flicker);

        opcode!(opcodes, 0x0c, spc_fade_placeholder);

        opcode!(opcodes, 0x14, spc_clear_engine_flag_8);
        opcode!(opcodes, 0x15, spc_set_engine_flag_8);

        opcode!(opcodes, 0x4e, spc_pan_camera_right);
        opcode!(opcodes, 0x4f, spc_pan_camera_left);

        opcode!(opcodes, 0x54, spc_set_engine_flag_4000000);
        opcode!(opcodes, 0x55, spc_reset_cursor_sequence);

        opcode!(opcodes, 0x5e, spc_pan_right_restore_flicker);
        opcode!(opcodes, 0x5f, spc_reset_pan_and_pan_left);

        opcode!(opcodes, 0x7b, spc_set_camera_x_to_zero);

        SpecialOpcodes { opcodes }
    }

    fn lookup(&self, op: i16) -> Result<SpecialOpcode, Errors> {
        if op < 0 || op as usize >= NUM_SPECIAL_OPCODES {
            return Err(Errors::OpcodeOutOfRange { op, max: NUM_SPECIAL_OPCODES - 1 });
        }

        self.opcodes[op as usize].ok_or(Errors::UnimplementedOpcode { op })
    }

    pub fn run(&self, op: i16, engine: &mut Engine) -> Result<(), Errors> {
        let opcode = self.lookup(op)?;
        debug!("run({}) {}", op, opcode.name);
        (opcode.func)(engine)
    }

    pub fn name(&self, op: i16) -> Option<&'static str> {
        self.lookup(op).ok().map(|opcode| opcode.name)
    }

    pub fn is_implemented(&self, op: i16) -> bool {
        self.lookup(op).is_ok()
    }

    pub fn implemented(&self) -> impl Iterator<Item = (i16, &'static str)> + '_ {
        self.opcodes
            .iter()
            .enumerate()
            .filter_map(|(op, opcode)| opcode.map(|opcode| (op as i16, opcode.name)))
    }
}

impl Default for SpecialOpcodes {
    fn default() -> SpecialOpcodes {
        SpecialOpcodes::new()
    }
}

fn spc_clear_engine_flag_10(engine: &mut Engine) -> Result<(), Errors> {
    engine.clear_flags(ENGINE_FLAG_10);
    Ok(())
}

fn spc_set_engine_flag_10(engine: &mut Engine) -> Result<(), Errors> {
    engine.set_flags(ENGINE_FLAG_10);
    Ok(())
}

/// Flicker record id, once its actor and the companion record are known to exist.
fn checked_flicker(engine: &mut Engine) -> Result<u16, Errors> {
    let flicker_id = engine.ini.flicker_record_mut()?.id;
    engine.actor_of_mut(flicker_id)?;
    engine.get_ini(COMPANION_INI_ID)?;
    Ok(flicker_id)
}

fn spc_hide_flicker(engine: &mut Engine) -> Result<(), Errors> {
    let flicker_id = checked_flicker(engine)?;

    engine.get_ini_mut(flicker_id)?.flags |= INI_FLAG_20;

    let actor = engine.actor_of_mut(flicker_id)?;
    actor.flags |= ACTOR_FLAG_100;
    actor.priority_layer = 0;

    engine.get_ini_mut(COMPANION_INI_ID)?.flags |= INI_FLAG_20;
    Ok(())
}

fn spc_show_flicker(engine: &mut Engine) -> Result<(), Errors> {
    let flicker_id = checked_flicker(engine)?;

    engine.get_ini_mut(flicker_id)?.flags &= !INI_FLAG_20;
    engine.actor_of_mut(flicker_id)?.flags &= !ACTOR_FLAG_100;
    engine.get_ini_mut(COMPANION_INI_ID)?.flags &= !INI_FLAG_20;
    Ok(())
}

fn spc_fade_placeholder(_engine: &mut Engine) -> Result<(), Errors> {
    trace!("fade is not modeled");
    Ok(())
}

fn spc_clear_engine_flag_8(engine: &mut Engine) -> Result<(), Errors> {
    engine.clear_flags(ENGINE_FLAG_8);
    Ok(())
}

fn spc_set_engine_flag_8(engine: &mut Engine) -> Result<(), Errors> {
    engine.set_flags(ENGINE_FLAG_8);
    Ok(())
}

fn spc_pan_camera_right(engine: &mut Engine) -> Result<(), Errors> {
    pan_camera(engine, PanDirection::Right)
}

fn spc_pan_camera_left(engine: &mut Engine) -> Result<(), Errors> {
    pan_camera(engine, PanDirection::Left)
}

fn spc_set_engine_flag_4000000(engine: &mut Engine) -> Result<(), Errors> {
    engine.set_flags(ENGINE_FLAG_4000000);
    Ok(())
}

fn spc_reset_cursor_sequence(engine: &mut Engine) -> Result<(), Errors> {
    engine.cursor.sequence_id = 0;
    Ok(())
}

fn spc_pan_right_restore_flicker(engine: &mut Engine) -> Result<(), Errors> {
    pan_camera(engine, PanDirection::Right)?;
    engine.get_ini(FLICKER_INI_ID)?;
    engine.ini.set_flicker_record(Some(FLICKER_INI_ID));
    Ok(())
}

fn spc_reset_pan_and_pan_left(engine: &mut Engine) -> Result<(), Errors> {
    engine.get_ini_mut(CAMERA_STORE_INI_ID)?.field_12 = 0;
    pan_camera(engine, PanDirection::Left)
}

fn spc_set_camera_x_to_zero(engine: &mut Engine) -> Result<(), Errors> {
    engine.scene.camera.x = 0;
    Ok(())
}

/// Scrolls the camera one step per frame to the right edge of the stage
/// (4px steps) or back to the left edge (3px steps). Positions are 16 bit
/// and wrap.
pub fn pan_camera(engine: &mut Engine, direction: PanDirection) -> Result<(), Errors> {
    debug!("pan camera {} from x {}", direction, engine.scene.camera.x);

    match direction {
        PanDirection::Right => {
            let mut x = engine.scene.camera.x;
            engine.get_ini_mut(CAMERA_STORE_INI_ID)?.field_12 = x;
            engine.ini.set_flicker_record(None);

            let limit = engine.scene.max_camera_x();
            while x as i32 <= limit {
                engine.scene.camera.x = x;
                engine.wait_for_frames(1);
                x = x.wrapping_add(4);
            }

            engine.scene.camera.x = limit as i16;
        }
        PanDirection::Left => {
            engine.get_ini(FLICKER_INI_ID)?;

            let mut x = engine.scene.camera.x;
            while x >= 0 {
                engine.scene.camera.x = x;
                engine.wait_for_frames(1);
                x = x.wrapping_sub(3);
            }

            engine.scene.camera.x = 0;
            engine.ini.set_flicker_record(Some(FLICKER_INI_ID));
        }
    }

    Ok(())
}
