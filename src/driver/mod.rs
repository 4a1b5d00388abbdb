// src/driver/mod.rs
pub mod display;
pub mod storage;
pub mod time_source;
