/// Accumulates horizontal pan deltas into an unbounded rotation angle.
#[derive(Clone, Debug)]
pub struct RotationController {
    angle_deg: f64,
    sensitivity_divisor: f64,
    dragging: bool,
}

impl RotationController {
    pub fn new(sensitivity_divisor: f64) -> Self {
        Self {
            angle_deg: 0.0,
            sensitivity_divisor,
            dragging: false,
        }
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Begin a pan. Subsequent deltas move the dial from `from_deg`.
    pub fn begin(&mut self, from_deg: f64) {
        self.angle_deg = from_deg;
        self.dragging = true;
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }

    /// Apply one drag sample. Returns the new angle when it changed.
    ///
    /// Dragging right turns the dial counter-clockwise, hence the sign flip.
    /// Samples outside a pan and non-finite samples are dropped.
    pub fn apply_delta(&mut self, delta_x: f64) -> Option<f64> {
        if !self.dragging || !delta_x.is_finite() {
            return None;
        }
        self.angle_deg -= delta_x / self.sensitivity_divisor;
        Some(self.angle_deg)
    }
}
