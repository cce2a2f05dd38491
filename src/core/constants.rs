/// Dial interaction tuning constants.
///
/// These are the only knobs of the rotation and trigger logic; they are fixed
/// at build time and collected into `DialConfig::default()`.
// Pixels of horizontal drag per degree of rotation (larger = slower dial)
pub const SENSITIVITY_DIVISOR: f64 = 15.0;

// Angular quantum; crossing a multiple of it plays the next sound
pub const STEP_THRESHOLD_DEG: f64 = 10.0;

// Entrance spring (mount animation from START to 0 degrees)
pub const ENTRANCE_START_DEG: f64 = -60.0;
pub const ENTRANCE_STIFFNESS: f64 = 50.0;
pub const ENTRANCE_MASS: f64 = 1.0;
pub const ENTRANCE_BOUNCE: f64 = 0.4; // damping ratio is 1 - bounce
pub const ENTRANCE_DURATION_SEC: f64 = 2.0; // hard settle after this long

// Largest frame delta fed to the entrance (tab switches produce huge gaps)
pub const FRAME_DT_MAX_SEC: f64 = 0.1;
