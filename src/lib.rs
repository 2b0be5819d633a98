pub mod config;
pub mod geocode;
pub mod map;
pub mod net;
pub mod nickname;
pub mod types;
