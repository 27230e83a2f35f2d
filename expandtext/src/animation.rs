use std::time::Instant;

use crate::transitions::TransitionConfig;

/// The two values a run drives, sampled from one clock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub height: f32,
    /// Icon rotation in degrees.
    pub rotation: f32,
}

impl Frame {
    pub const fn new(height: f32, rotation: f32) -> Self {
        Self { height, rotation }
    }
}

/// A single expand or collapse transition.
///
/// Height and rotation share the same eased ratio, so the icon can never
/// drift from the box it belongs to.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    from: Frame,
    to: Frame,
    start: Instant,
    config: TransitionConfig,
    /// Last elapsed ratio the run was advanced to.
    ratio: f32,
}

impl AnimationRun {
    pub fn new(from: Frame, to: Frame, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start,
            config,
            ratio: 0.0,
        }
    }

    pub fn from(&self) -> Frame {
        self.from
    }

    pub fn to(&self) -> Frame {
        self.to
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn elapsed_ratio(&self) -> f32 {
        self.ratio
    }

    /// Elapsed ratio this run would have at `now`.
    pub fn ratio_at(&self, now: Instant) -> f32 {
        self.config.ratio(now.saturating_duration_since(self.start))
    }

    pub fn is_complete(&self) -> bool {
        self.ratio >= 1.0
    }

    /// Frame at elapsed ratio `ratio`. The end frame is returned exactly once
    /// the ratio reaches 1.
    pub fn sample(&self, ratio: f32) -> Frame {
        let ratio = ratio.clamp(0.0, 1.0);
        if ratio >= 1.0 {
            return self.to;
        }

        let eased = self.config.easing.apply(ratio);
        Frame {
            height: lerp(self.from.height, self.to.height, eased),
            rotation: lerp(self.from.rotation, self.to.rotation, eased),
        }
    }

    /// Frame at the last advanced ratio.
    pub fn current(&self) -> Frame {
        self.sample(self.ratio)
    }

    /// Move the run to `ratio` and return the frame to apply.
    pub fn advance_to(&mut self, ratio: f32) -> Frame {
        self.ratio = if ratio.is_nan() {
            self.ratio
        } else {
            ratio.clamp(0.0, 1.0)
        };
        self.current()
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
