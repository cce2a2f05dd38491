pub mod constants;
pub mod cycler;
pub mod dial;
pub mod entrance;
pub mod rotation;
pub mod trigger;

pub use constants::*;
pub use cycler::PlaybackId;
pub use dial::{DialConfig, DialEffect, DialEvent, DialState};
