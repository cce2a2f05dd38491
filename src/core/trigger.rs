/// Step index of an angle: how many whole thresholds lie between it and zero.
///
/// Taking the magnitude first keeps both sides of zero in step 0, so small
/// wobbles around the rest position stay silent.
#[inline]
pub fn step_index(angle_deg: f64, threshold_deg: f64) -> u64 {
    // `as` saturates, so huge angles pin to u64::MAX instead of wrapping
    (angle_deg.abs() / threshold_deg).floor() as u64
}

/// Fires once whenever the step index of the observed angle changes.
#[derive(Clone, Debug)]
pub struct StepTrigger {
    threshold_deg: f64,
    last_step: u64,
}

impl StepTrigger {
    pub fn new(threshold_deg: f64) -> Self {
        Self {
            threshold_deg,
            last_step: 0,
        }
    }

    #[inline]
    pub fn last_step(&self) -> u64 {
        self.last_step
    }

    /// Returns true when `angle_deg` lies in a different step than the last one seen.
    pub fn observe(&mut self, angle_deg: f64) -> bool {
        let step = step_index(angle_deg, self.threshold_deg);
        if step == self.last_step {
            return false;
        }
        self.last_step = step;
        true
    }

    /// Adopt `angle_deg` as the reference without firing.
    pub fn rebaseline(&mut self, angle_deg: f64) {
        self.last_step = step_index(angle_deg, self.threshold_deg);
    }
}
