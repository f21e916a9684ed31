use serde::{Deserialize, Serialize};

use std::fs;

use log::{LevelFilter, warn};

use crate::errors::Errors;

use super::constants::{CAMERA_STORE_INI_ID, DEFAULT_HZ, SCREEN_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFile {
    pub filename: String,
    pub md5: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hz: u32,
    pub stage_width: i16,
    pub camera_x: i16,
    pub ini_record_count: usize,
    pub actor_count: usize,
    pub script: Vec<i16>,
    pub game_files: Vec<GameFile>,
    pub log_level: LevelFilter,
}

impl Config {
    pub const PATH: &'static str = "config.yml";

    pub fn load() -> Result<Config, Errors> {
        Config::load_from(Config::PATH)
    }

    pub fn load_from(path: &str) -> Result<Config, Errors> {
        match fs::read_to_string(path) {
            Ok(yaml) => Config::parse(path, &yaml),
            Err(..) => {
                let config = Config::default();

                match serde_yaml::to_string(&config) {
                    Ok(yaml) => {
                        if let Err(err) = fs::write(path, yaml) {
                            warn!("Failed to write default config to {}: {}", path, err);
                        }
                    }
                    Err(err) => warn!("Failed to serialize default config: {}", err),
                }

                Ok(config)
            }
        }
    }

    pub fn parse(path: &str, yaml: &str) -> Result<Config, Errors> {
        serde_yaml::from_str::<Config>(yaml).map_err(|error| Errors::ConfigLoadFailed {
            path: path.to_string(),
            error,
        })
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            hz: DEFAULT_HZ,
            stage_width: SCREEN_WIDTH * 2,
            camera_x: 0,
            ini_record_count: CAMERA_STORE_INI_ID as usize + 1,
            actor_count: 1,
            script: vec![0x4e, 0x4f],
            game_files: Vec::new(),
            log_level: LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config = Config::parse("test.yml", "hz: 0\nscript: [3, 85]\n").unwrap();

        assert_eq!(config.hz, 0);
        assert_eq!(config.script, vec![3, 0x55]);
        assert_eq!(config.stage_width, SCREEN_WIDTH * 2);
        assert_eq!(config.ini_record_count, CAMERA_STORE_INI_ID as usize + 1);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn game_files_are_parsed() {
        let yaml = "game_files:\n  - filename: cc1.gda\n    md5: abc\n";
        let config = Config::parse("test.yml", yaml).unwrap();

        assert_eq!(config.game_files, vec![GameFile {
            filename: String::from("cc1.gda"),
            md5: String::from("abc"),
        }]);
    }

    #[test]
    fn missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        let path = path.to_str().unwrap();

        let config = Config::load_from(path).unwrap();

        assert!(std::path::Path::new(path).exists());

        let written = Config::load_from(path).unwrap();
        let default = Config::default();
        assert_eq!(config.script, default.script);
        assert_eq!(written.hz, default.hz);
        assert_eq!(written.stage_width, default.stage_width);
        assert_eq!(written.camera_x, default.camera_x);
        assert_eq!(written.ini_record_count, default.ini_record_count);
        assert_eq!(written.actor_count, default.actor_count);
        assert_eq!(written.script, default.script);
        assert_eq!(written.game_files, default.game_files);
        assert_eq!(written.log_level, default.log_level);
    }

    #[test]
    fn invalid_yaml_is_reported() {
        match Config::parse("broken.yml", "hz: [") {
            Err(Errors::ConfigLoadFailed { path, .. }) => assert_eq!(path, "broken.yml"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
