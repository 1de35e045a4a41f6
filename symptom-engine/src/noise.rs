//! Randomness used to perturb prediction probabilities

use std::sync::Arc;

use rand::Rng;

/// Peak-to-peak width of the perturbation added to each probability.
pub const NOISE_AMPLITUDE: f64 = 0.1;

/// Source of uniform draws in [0, 1).
///
/// Implementations must be safe to share between concurrent callers.
#[cfg_attr(test, mockall::automock)]
pub trait NoiseSource: Send + Sync {
    fn draw(&self) -> f64;
}

/// Map a uniform draw onto a symmetric offset in [-0.05, 0.05).
pub fn perturbation(draw: f64) -> f64 {
    (draw - 0.5) * NOISE_AMPLITUDE
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngNoise;

impl NoiseSource for ThreadRngNoise {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic source that always returns the same draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise(pub f64);

impl FixedNoise {
    /// A draw of 0.5, which adds no perturbation.
    pub const fn neutral() -> Self {
        Self(0.5)
    }
}

impl NoiseSource for FixedNoise {
    fn draw(&self) -> f64 {
        self.0
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &N {
    fn draw(&self) -> f64 {
        (**self).draw()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn draw(&self) -> f64 {
        (**self).draw()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Arc<N> {
    fn draw(&self) -> f64 {
        (**self).draw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perturbation_range() {
        assert!((perturbation(0.0) + 0.05).abs() < 1e-12);
        assert_eq!(perturbation(0.5), 0.0);
        assert!(perturbation(0.999_999) < 0.05);
    }

    #[test]
    fn test_thread_rng_draws_are_uniform_unit_interval() {
        let noise = ThreadRngNoise;
        for _ in 0..1_000 {
            let draw = noise.draw();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_fixed_noise_through_smart_pointers() {
        let boxed: Box<dyn NoiseSource> = Box::new(FixedNoise(0.25));
        let shared: Arc<dyn NoiseSource> = Arc::new(FixedNoise(0.75));

        assert_eq!(boxed.draw(), 0.25);
        assert_eq!(shared.draw(), 0.75);
        assert_eq!((&FixedNoise::neutral()).draw(), 0.5);
    }

    #[test]
    fn test_mock_noise_source() {
        let mut mock = MockNoiseSource::new();
        mock.expect_draw().times(2).return_const(0.1);

        assert_eq!(mock.draw(), 0.1);
        assert_eq!(mock.draw(), 0.1);
    }
}
