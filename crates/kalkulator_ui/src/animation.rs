//! Animation system with exponential easing.
//!
//! The preloader bar eases toward its progress over 150ms instead of
//! jumping frame to frame.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Exponential ease-out (fast start, settles on target).
    #[default]
    ExponentialOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::ExponentialOut => {
                // 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.15; // 150ms, the bar's width transition

    /// Creates a new animation at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_out_front_loads() {
        let value = Easing::ExponentialOut.apply(0.3);
        assert!(value > 0.8, "exponential out should be mostly done: {value}");
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(0.0, Easing::ExponentialOut);
        anim.set_target(100.0);

        for _ in 0..20 {
            anim.update(0.016); // ~60fps
        }

        assert!((anim.value() - 100.0).abs() < 0.01);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current() {
        let mut anim = Animation::new(0.0, Easing::ExponentialOut);
        anim.set_target(10.0);
        anim.update(0.075);
        // 1 - 2^-5 of the way there.
        assert!((anim.value() - 9.6875).abs() < 0.01);

        anim.set_target(20.0);
        assert!(!anim.is_complete());
        anim.update(0.075);
        assert!((anim.value() - 19.6777).abs() < 0.01);
    }

    #[test]
    fn test_instant_snaps() {
        let mut anim = Animation::new(0.0, Easing::Instant);
        anim.set_target(1.0);
        anim.update(0.001);
        assert!((anim.value() - 1.0).abs() < f32::EPSILON);
    }
}
