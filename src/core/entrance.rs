use crate::core::constants::{
    ENTRANCE_BOUNCE, ENTRANCE_DURATION_SEC, ENTRANCE_MASS, ENTRANCE_START_DEG, ENTRANCE_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceConfig {
    pub start_deg: f64,
    pub stiffness: f64,
    pub mass: f64,
    /// 0 = critically damped, 1 = undamped
    pub bounce: f64,
    pub duration_sec: f64,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            start_deg: ENTRANCE_START_DEG,
            stiffness: ENTRANCE_STIFFNESS,
            mass: ENTRANCE_MASS,
            bounce: ENTRANCE_BOUNCE,
            duration_sec: ENTRANCE_DURATION_SEC,
        }
    }
}

/// Mount animation: a spring released at rest from `start_deg` toward 0.
///
/// Evaluated in closed form so the curve does not depend on frame pacing.
/// After `duration_sec` the angle snaps to exactly 0 and the spring is done.
#[derive(Clone, Debug)]
pub struct EntranceSpring {
    cfg: EntranceConfig,
    elapsed_sec: f64,
    done: bool,
}

impl EntranceSpring {
    pub fn new(cfg: EntranceConfig) -> Self {
        Self {
            cfg,
            elapsed_sec: 0.0,
            done: false,
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        if self.done {
            0.0
        } else {
            spring_offset(&self.cfg, self.elapsed_sec)
        }
    }

    /// Move the clock forward and return the new angle.
    pub fn advance(&mut self, dt_sec: f64) -> f64 {
        if self.done {
            return 0.0;
        }
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed_sec += dt_sec;
        }
        if self.elapsed_sec >= self.cfg.duration_sec {
            self.done = true;
        }
        self.angle_deg()
    }
}

/// Displacement from the target at time `t` for a spring released at rest.
pub fn spring_offset(cfg: &EntranceConfig, t: f64) -> f64 {
    let x0 = cfg.start_deg;
    let omega = (cfg.stiffness / cfg.mass).sqrt();
    let zeta = (1.0 - cfg.bounce).clamp(0.0, 1.0);
    if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        let b = zeta * omega * x0 / omega_d;
        envelope * (x0 * (omega_d * t).cos() + b * (omega_d * t).sin())
    } else {
        // critically damped
        (-omega * t).exp() * (x0 + omega * x0 * t)
    }
}
