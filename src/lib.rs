// src/lib.rs

pub mod config;
pub mod geometry;
pub mod maps;
