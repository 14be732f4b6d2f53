#![warn(non_snake_case)]
//! # mapgen
//!
//! Command line front end for the map generator's geometry core.
//!
//! ```text
//! mapgen skyline <segments.json> [config.json]
//! mapgen intersect <boxes.json>
//! mapgen rooms <count> [config.json]
//! ```
//!
//! Results are printed to stdout as JSON. Set `RUST_LOG=debug` for logs.
//!
//! ## License
//! Licensed under the MIT License.
//!
//! ## Authors
//! Ericson Willians <ericsonwillians@protonmail.com>

use log::{error, info};
use map_generators::config::Config;
use map_generators::geometry::{intersect, AxisAlignedBoundingBox, Segment, SkylineMerger};
use map_generators::maps::{find_overlaps, sample_rooms, SaneRandomGenerator};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::process;

const USAGE: &str = "usage: mapgen skyline <segments.json> [config.json] \
                     | intersect <boxes.json> | rooms <count> [config.json]";

/// Input of `mapgen intersect`. A missing or `null` box is passed through
/// as absent.
#[derive(Debug, Deserialize)]
struct BoxPair {
    a: Option<AxisAlignedBoundingBox>,
    b: Option<AxisAlignedBoundingBox>,
}

/// Loads the optional trailing config argument.
fn load_config(path: Option<&String>) -> Result<Config, Box<dyn Error>> {
    Ok(match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    })
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    match args {
        [cmd, path, rest @ ..] if cmd == "skyline" && rest.len() <= 1 => {
            let config = load_config(rest.first())?;
            let segments: Vec<Segment> = serde_json::from_str(&fs::read_to_string(path)?)?;
            let skyline = SkylineMerger::new(config.skyline).merge(&segments)?;
            println!("{}", serde_json::to_string_pretty(&skyline)?);
        }
        [cmd, path] if cmd == "intersect" => {
            let pair: BoxPair = serde_json::from_str(&fs::read_to_string(path)?)?;
            let corners = intersect(pair.a.as_ref(), pair.b.as_ref())?;
            println!("{}", serde_json::to_string_pretty(&corners)?);
        }
        [cmd, count, rest @ ..] if cmd == "rooms" && rest.len() <= 1 => {
            let count: usize = count.parse()?;
            let config = load_config(rest.first())?;
            let mut random = match config.seed {
                Some(seed) => SaneRandomGenerator::from_seed(seed),
                None => SaneRandomGenerator::from_entropy(),
            };
            let rooms = sample_rooms(&mut random, &config.rooms, count);
            let overlaps = find_overlaps(&rooms)?;
            info!("sampled {} rooms, {} overlap", rooms.len(), overlaps.len());
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "rooms": rooms,
                    "overlaps": overlaps,
                }))?
            );
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}

fn main() {
    // Initialize logging.
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mapgen-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skyline_reads_config_argument() {
        let segments = write_temp(
            "segments.json",
            r#"[{"left":4,"right":6,"height":5},{"left":0,"right":10,"height":3}]"#,
        );
        let config = write_temp(
            "skyline-config.json",
            r#"{ "skyline": { "parallel_threshold": 2 } }"#,
        );

        let loaded = load_config(Some(&config.display().to_string())).unwrap();
        assert_eq!(loaded.skyline.parallel_threshold, 2);

        let seg_arg = segments.display().to_string();
        let cfg_arg = config.display().to_string();
        assert!(run(&args(&["skyline", &seg_arg, &cfg_arg])).is_ok());
        assert!(run(&args(&["skyline", &seg_arg])).is_ok());
    }

    #[test]
    fn test_skyline_rejects_invalid_config() {
        let segments = write_temp("segments-2.json", "[]");
        let config = write_temp("bad-config.json", r#"{ "rooms": { "min_room_size": 0 } }"#);
        let seg_arg = segments.display().to_string();
        let cfg_arg = config.display().to_string();
        assert!(run(&args(&["skyline", &seg_arg, &cfg_arg])).is_err());
    }

    #[test]
    fn test_unknown_arguments_print_usage() {
        let err = run(&args(&["skyline", "a", "b", "c"])).unwrap_err();
        assert_eq!(err.to_string(), USAGE);
        assert!(run(&[]).is_err());
    }
}
