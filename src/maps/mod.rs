// src/maps/mod.rs
pub mod random;
pub mod rooms;

pub use random::{RandomRange, SaneRandomGenerator};
pub use rooms::{find_overlaps, sample_rooms, RoomConfig, RoomOverlap};
