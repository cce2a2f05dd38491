use web_sys as web;

/// Tracks one active pointer and turns absolute `clientX` samples into deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct PanTracker {
    pointer_id: Option<i32>,
    last_x: f64,
}

impl PanTracker {
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    /// Start tracking `pointer_id`. Returns false if another pointer already owns the pan.
    pub fn begin(&mut self, pointer_id: i32, x: f64) -> bool {
        if self.pointer_id.is_some() {
            return false;
        }
        self.pointer_id = Some(pointer_id);
        self.last_x = x;
        true
    }

    /// Horizontal movement since the previous sample of the tracked pointer.
    pub fn sample(&mut self, pointer_id: i32, x: f64) -> Option<f64> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        (dx != 0.0).then_some(dx)
    }

    /// Stop tracking. Returns true if `pointer_id` was the tracked pointer.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id == Some(pointer_id) {
            self.pointer_id = None;
            true
        } else {
            false
        }
    }
}

#[inline]
pub fn pointer_client_x(ev: &web::PointerEvent) -> f64 {
    ev.client_x() as f64
}
