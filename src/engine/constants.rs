pub const SCREEN_WIDTH: i16 = 320;

pub const DEFAULT_HZ: u32 = 60;

pub const NUM_SPECIAL_OPCODES: usize = 0x8c;

// engine flags
pub const ENGINE_FLAG_8: u32 = 0x8;
pub const ENGINE_FLAG_10: u32 = 0x10;
pub const ENGINE_FLAG_4000000: u32 = 0x4000000;

// INI record flags
pub const INI_FLAG_20: u16 = 0x20;

// actor flags
pub const ACTOR_FLAG_100: u16 = 0x100;

pub const FLICKER_INI_ID: u16 = 0;
pub const COMPANION_INI_ID: u16 = 1;
pub const CAMERA_STORE_INI_ID: u16 = 0x2ab;
