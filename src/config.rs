// src/config.rs
//! Runtime configuration, read from a JSON file. Every field is optional.

use crate::geometry::SkylineConfig;
use crate::maps::RoomConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("room sizes must satisfy 0 < min <= max < i32::MAX, got {min}..={max}")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("room area {width}x{height} can't hold rooms of size {max_room_size}")]
    RoomAreaTooSmall {
        width: i32,
        height: i32,
        max_room_size: i32,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub skyline: SkylineConfig,
    pub rooms: RoomConfig,
    /// Seed for the random source; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the room settings so sampling stays inside the area and the
    /// `i32` range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rooms = &self.rooms;
        let (min, max) = (rooms.min_room_size, rooms.max_room_size);
        if min <= 0 || min > max || max == i32::MAX {
            return Err(ConfigError::InvalidRoomSize { min, max });
        }
        if rooms.area_width < max || rooms.area_height < max {
            return Err(ConfigError::RoomAreaTooSmall {
                width: rooms.area_width,
                height: rooms.area_height,
                max_room_size: max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.skyline.parallel_threshold, SkylineConfig::default().parallel_threshold);
        assert_eq!(config.rooms.max_room_size, RoomConfig::default().max_room_size);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_config() {
        let config =
            Config::from_json(r#"{ "seed": 9, "skyline": { "parallel_threshold": 16 } }"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.skyline.parallel_threshold, 16);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_huge_room_size_is_rejected() {
        let err = Config::from_json(r#"{ "rooms": { "max_room_size": 2147483647 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidRoomSize {
                min: 3,
                max: i32::MAX
            }
        ));
    }

    #[test]
    fn test_bad_room_sizes_are_rejected() {
        for rooms in [
            r#"{ "min_room_size": 0 }"#,
            r#"{ "min_room_size": 10, "max_room_size": 4 }"#,
        ] {
            let text = format!(r#"{{ "rooms": {} }}"#, rooms);
            assert!(matches!(
                Config::from_json(&text),
                Err(ConfigError::InvalidRoomSize { .. })
            ));
        }
    }

    #[test]
    fn test_area_smaller_than_room_is_rejected() {
        let err = Config::from_json(r#"{ "rooms": { "area_width": 5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::RoomAreaTooSmall {
                width: 5,
                height: 64,
                max_room_size: 9
            }
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(Config::from_json("{ seed"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Config::load("/definitely/not/here.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
