use crate::core::constants::{SENSITIVITY_DIVISOR, STEP_THRESHOLD_DEG};
use crate::core::cycler::{PlaybackId, SoundCycler};
use crate::core::entrance::{EntranceConfig, EntranceSpring};
use crate::core::rotation::RotationController;
use crate::core::trigger::StepTrigger;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct DialConfig {
    pub sensitivity_divisor: f64,
    pub step_threshold_deg: f64,
    pub bank_len: usize,
    pub entrance: EntranceConfig,
}

impl DialConfig {
    pub fn with_bank_len(bank_len: usize) -> Self {
        Self {
            sensitivity_divisor: SENSITIVITY_DIVISOR,
            step_threshold_deg: STEP_THRESHOLD_DEG,
            bank_len,
            entrance: EntranceConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity_divisor.is_finite() && self.sensitivity_divisor > 0.0) {
            return Err(ConfigError::Sensitivity(self.sensitivity_divisor));
        }
        if !(self.step_threshold_deg.is_finite() && self.step_threshold_deg > 0.0) {
            return Err(ConfigError::Threshold(self.step_threshold_deg));
        }
        if self.bank_len == 0 {
            return Err(ConfigError::EmptyBank);
        }
        let e = &self.entrance;
        let entrance_ok = e.start_deg.is_finite()
            && e.stiffness.is_finite()
            && e.stiffness > 0.0
            && e.mass.is_finite()
            && e.mass > 0.0
            && (0.0..=1.0).contains(&e.bounce)
            && e.duration_sec.is_finite()
            && e.duration_sec >= 0.0;
        if !entrance_ok {
            return Err(ConfigError::Entrance(*e));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sensitivity divisor must be a positive finite number, got {0}")]
    Sensitivity(f64),
    #[error("step threshold must be a positive finite number of degrees, got {0}")]
    Threshold(f64),
    #[error("sound bank is empty")]
    EmptyBank,
    #[error("invalid entrance animation parameters: {0:?}")]
    Entrance(EntranceConfig),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialEvent {
    /// Component attached to the page; starts the entrance animation once.
    Mount,
    /// Animation frame tick.
    Frame { dt_sec: f64 },
    PanStart,
    /// Horizontal pixels moved since the previous sample.
    PanMove { delta_x: f64 },
    PanEnd,
    ClipEnded { id: PlaybackId },
    PlaybackFailed { id: PlaybackId },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DialEffect {
    /// Write the angle to the dial transform immediately.
    ApplyRotation { degrees: f64 },
    /// Stop clip `id` and rewind it to the start.
    StopClip { id: PlaybackId },
    /// Start bank entry `index` from the beginning as clip `id`.
    PlayClip { id: PlaybackId, index: usize },
}

pub type Effects = SmallVec<[DialEffect; 4]>;

/// Dial state machine.
///
/// All UI state (angle, last step, sound cursor, playback flag, entrance
/// animation) lives here and changes only through `update`. The returned
/// effects are executed by the host afterwards.
#[derive(Clone, Debug)]
pub struct DialState {
    rotation: RotationController,
    trigger: StepTrigger,
    cycler: SoundCycler,
    entrance_cfg: EntranceConfig,
    entrance: Option<EntranceSpring>,
    mounted: bool,
}

impl DialState {
    pub fn new(cfg: &DialConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            rotation: RotationController::new(cfg.sensitivity_divisor),
            trigger: StepTrigger::new(cfg.step_threshold_deg),
            cycler: SoundCycler::new(cfg.bank_len),
            entrance_cfg: cfg.entrance,
            entrance: None,
            mounted: false,
        })
    }

    /// Angle currently shown: the entrance curve while it runs, else the pan angle.
    pub fn angle_deg(&self) -> f64 {
        match &self.entrance {
            Some(spring) => spring.angle_deg(),
            None => self.rotation.angle_deg(),
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.entrance.is_some()
    }

    #[cfg(test)]
    pub fn current_sound_index(&self) -> usize {
        self.cycler.current_index()
    }

    #[cfg(test)]
    pub fn playback(&self) -> crate::core::cycler::Playback {
        self.cycler.playback()
    }

    #[inline]
    pub fn last_step(&self) -> u64 {
        self.trigger.last_step()
    }

    pub fn update(&mut self, event: DialEvent) -> Effects {
        let mut fx = Effects::new();
        match event {
            DialEvent::Mount => {
                if !self.mounted {
                    self.mounted = true;
                    let spring = EntranceSpring::new(self.entrance_cfg);
                    fx.push(DialEffect::ApplyRotation {
                        degrees: spring.angle_deg(),
                    });
                    self.entrance = Some(spring);
                }
            }
            DialEvent::Frame { dt_sec } => {
                if let Some(spring) = self.entrance.as_mut() {
                    let degrees = spring.advance(dt_sec);
                    if spring.is_done() {
                        self.entrance = None;
                    }
                    fx.push(DialEffect::ApplyRotation { degrees });
                }
            }
            DialEvent::PanStart => {
                let from = match self.entrance.take() {
                    Some(spring) => {
                        // drag takes over from wherever the entrance currently is
                        let at = spring.angle_deg();
                        self.trigger.rebaseline(at);
                        log::debug!("[dial] entrance cancelled at {:.2}deg", at);
                        at
                    }
                    None => self.rotation.angle_deg(),
                };
                self.rotation.begin(from);
            }
            DialEvent::PanMove { delta_x } => {
                if let Some(degrees) = self.rotation.apply_delta(delta_x) {
                    fx.push(DialEffect::ApplyRotation { degrees });
                    if self.trigger.observe(degrees) {
                        let adv = self.cycler.advance_and_play();
                        log::debug!(
                            "[dial] step {} -> sound {} ({})",
                            self.trigger.last_step(),
                            adv.index,
                            adv.play
                        );
                        if let Some(id) = adv.stop {
                            fx.push(DialEffect::StopClip { id });
                        }
                        fx.push(DialEffect::PlayClip {
                            id: adv.play,
                            index: adv.index,
                        });
                    }
                }
            }
            DialEvent::PanEnd => self.rotation.end(),
            DialEvent::ClipEnded { id } => {
                self.cycler.clip_ended(id);
            }
            DialEvent::PlaybackFailed { id } => {
                if self.cycler.playback_failed(id) {
                    log::warn!("[dial] clip {} dropped", id);
                }
            }
        }
        fx
    }
}
