// Page binding and presentation constants used by the web frontend.

// DOM
pub const DIAL_ELEMENT_ID: &str = "dial";

// Presentation transform composed around the rotation
pub const DIAL_TRANSLATE_Y_PCT: f32 = -70.0;
pub const DIAL_SCALE: f32 = 2.0;

// Sound bank, cycled in order on every step crossing
pub const SOUND_BANK: [&str; 5] = [
    "/fx/1-amp.wav",
    "/fx/2-amp.wav",
    "/fx/3-amp.wav",
    "/fx/4-amp.wav",
    "/fx/5-amp.wav",
];

// Output level of the shared player
pub const MASTER_GAIN: f32 = 0.8;
