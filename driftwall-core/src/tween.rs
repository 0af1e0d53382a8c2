//! Frame-clocked tweens keyed by animated property
//!
//! A [`Tween`] interpolates one scalar from a start to an end value over a
//! fixed duration. [`TweenSet`] holds at most one tween per key: starting a
//! new tween for a key replaces the in-flight one, so overlapping hover
//! transitions never stack.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Quadratic ease-in.
    EaseIn,
    /// Quadratic ease-out.
    #[default]
    EaseOut,
    /// Quadratic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// A single scalar interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Start a tween at `from`, heading to `to`.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.value()
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Value the tween settles on.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Whether the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// At most one [`Tween`] per key.
#[derive(Debug, Clone)]
pub struct TweenSet<K> {
    tweens: HashMap<K, Tween>,
}

impl<K> Default for TweenSet<K> {
    fn default() -> Self {
        Self {
            tweens: HashMap::new(),
        }
    }
}

impl<K> TweenSet<K>
where
    K: Copy + Eq + Hash,
{
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating `key` from `current` to `to`, replacing any tween
    /// already running for that key.
    pub fn animate(
        &mut self,
        key: K,
        current: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    ) {
        self.tweens
            .insert(key, Tween::new(current, to, duration, easing));
    }

    /// In-flight tween for `key`, if any.
    pub fn get(&self, key: &K) -> Option<&Tween> {
        self.tweens.get(key)
    }

    /// Whether any tween is still running.
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Advance every tween by `dt`, handing each key's new value to `apply`.
    ///
    /// Finished tweens report their final value once and are then dropped.
    pub fn advance(&mut self, dt: Duration, mut apply: impl FnMut(K, f32)) {
        self.tweens.retain(|key, tween| {
            apply(*key, tween.advance(dt));
            !tween.is_finished()
        });
    }
}
