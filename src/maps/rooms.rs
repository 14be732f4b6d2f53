// src/maps/rooms.rs
//! Random room footprints and the overlap checks placement is built on.

use crate::geometry::{AxisAlignedBoundingBox, GeometryError, Point};
use crate::maps::RandomRange;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub area_width: i32,
    pub area_height: i32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        RoomConfig {
            min_room_size: 3,
            max_room_size: 9,
            area_width: 64,
            area_height: 64,
        }
    }
}

/// Two rooms whose footprints share at least one point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomOverlap {
    pub first: usize,
    pub second: usize,
    pub corners: [Point; 2],
}

/// Draws `count` room footprints inside the configured area.
///
/// Sizes come from `[min_room_size, max_room_size]` and every room fits in
/// the area when the area is big enough to hold it. Out-of-range settings
/// saturate instead of overflowing; `Config` rejects them up front.
pub fn sample_rooms<R: RandomRange>(
    random: &mut R,
    config: &RoomConfig,
    count: usize,
) -> Vec<AxisAlignedBoundingBox> {
    (0..count)
        .map(|_| {
            let size_end = config.max_room_size.saturating_add(1);
            let w = random.int(config.min_room_size, size_end);
            let h = random.int(config.min_room_size, size_end);
            let x = random.int(0, config.area_width.saturating_sub(w));
            let y = random.int(0, config.area_height.saturating_sub(h));
            AxisAlignedBoundingBox::new(Point::new(x, y), w, h)
        })
        .collect()
}

/// Every overlapping pair of rooms, ordered by index.
pub fn find_overlaps(
    rooms: &[AxisAlignedBoundingBox],
) -> Result<Vec<RoomOverlap>, GeometryError> {
    let nested: Vec<Vec<RoomOverlap>> = (0..rooms.len())
        .into_par_iter()
        .map(|i| -> Result<Vec<RoomOverlap>, GeometryError> {
            let mut found = Vec::new();
            for j in i + 1..rooms.len() {
                if let Some(corners) = rooms[i].intersection(&rooms[j])? {
                    found.push(RoomOverlap {
                        first: i,
                        second: j,
                        corners,
                    });
                }
            }
            Ok(found)
        })
        .collect::<Result<_, _>>()?;

    let overlaps: Vec<RoomOverlap> = nested.into_iter().flatten().collect();
    debug!("{} rooms, {} overlapping pairs", rooms.len(), overlaps.len());
    Ok(overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::SaneRandomGenerator;

    #[test]
    fn test_sampled_rooms_fit_area() {
        let config = RoomConfig::default();
        let mut random = SaneRandomGenerator::from_seed(1);
        let rooms = sample_rooms(&mut random, &config, 200);
        assert_eq!(rooms.len(), 200);
        for room in &rooms {
            assert!(room.size_is_valid());
            assert!(room.width >= config.min_room_size && room.width <= config.max_room_size);
            let br = room.bottom_right().unwrap();
            assert!(room.top_left.x >= 0 && room.top_left.y >= 0);
            assert!(br.x <= config.area_width && br.y <= config.area_height);
        }
    }

    #[test]
    fn test_extreme_config_does_not_overflow() {
        let config = RoomConfig {
            min_room_size: 1,
            max_room_size: i32::MAX,
            area_width: 10,
            area_height: i32::MIN,
        };
        let mut random = SaneRandomGenerator::from_seed(1);
        let rooms = sample_rooms(&mut random, &config, 8);
        assert_eq!(rooms.len(), 8);
        for room in &rooms {
            assert!(room.width >= 1 && room.height >= 1);
            assert_eq!(room.top_left.y, 0);
        }
    }

    #[test]
    fn test_find_overlaps() {
        let rooms = [
            AxisAlignedBoundingBox::new(Point::new(0, 0), 4, 4),
            AxisAlignedBoundingBox::new(Point::new(2, 2), 4, 4),
            AxisAlignedBoundingBox::new(Point::new(20, 20), 2, 2),
        ];
        let overlaps = find_overlaps(&rooms).unwrap();
        assert_eq!(
            overlaps,
            vec![RoomOverlap {
                first: 0,
                second: 1,
                corners: [Point::new(2, 2), Point::new(4, 4)],
            }]
        );
    }

    #[test]
    fn test_find_overlaps_rejects_invalid_room() {
        let rooms = [
            AxisAlignedBoundingBox::new(Point::new(0, 0), 4, 4),
            AxisAlignedBoundingBox::new(Point::new(2, 2), -1, 4),
        ];
        assert!(find_overlaps(&rooms).is_err());
    }
}
