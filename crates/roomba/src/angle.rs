//! Randomness for picking rotation targets.
//!
//! The rotate maneuver needs a fresh random heading change each time it is
//! entered. Hosts share one [`AngleSource`] between every maneuver, and tests
//! swap in [`FixedAngles`] to make runs reproducible.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of rotation targets.
///
/// Every sample must lie in (−π, π] and be non-zero, so its magnitude is in
/// (0, π].
pub trait AngleSource: fmt::Debug + Send + Sync {
    fn sample_angle(&self) -> f64;
}

/// Uniform angles from a `rand` generator.
#[derive(Debug)]
pub struct RandomAngles {
    rng: Mutex<StdRng>,
}

impl RandomAngles {
    /// Unseeded generator; runs are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAngles {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl AngleSource for RandomAngles {
    fn sample_angle(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        loop {
            // Negating [−π, π) yields (−π, π].
            let angle = -rng.gen_range(-PI..PI);
            if angle != 0.0 {
                return angle;
            }
        }
    }
}

/// Replays a fixed list of angles, cycling when exhausted.
#[derive(Debug)]
pub struct FixedAngles {
    angles: Vec<f64>,
    next: AtomicUsize,
}

impl FixedAngles {
    /// # Panics
    ///
    /// Panics if `angles` is empty or holds a value outside (−π, π] or zero.
    pub fn new(angles: Vec<f64>) -> Self {
        assert!(!angles.is_empty(), "FixedAngles needs at least one angle");
        for &angle in &angles {
            assert!(
                angle > -PI && angle <= PI && angle != 0.0,
                "angle {angle} is outside (-pi, pi] or zero"
            );
        }
        Self {
            angles,
            next: AtomicUsize::new(0),
        }
    }
}

impl AngleSource for FixedAngles {
    fn sample_angle(&self) -> f64 {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        self.angles[index % self.angles.len()]
    }
}
