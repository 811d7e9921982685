//! Entrance animation presets.
//!
//! Presets are plain data. They are turned into CSS classes by [`motion_css`]
//! and applied by the [`Reveal`](crate::components::Reveal) /
//! [`Motion`](crate::components::Motion) components, so the browser does the
//! tweening and Rust only decides *when* a group flips to its shown state.

use std::fmt::Write as _;

/// Cubic bezier control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing(pub [f64; 4]);

impl Easing {
    /// Fast start, long soft landing.
    pub const EASE_OUT: Easing = Easing([0.22, 1.0, 0.36, 1.0]);

    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds
    pub duration: f64,
    pub ease: Easing,
}

pub const ENTRANCE: Transition = Transition {
    duration: 0.8,
    ease: Easing::EASE_OUT,
};

/// Visual state of an element at one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Vertical offset in px, positive is down.
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn transform(&self) -> String {
        format!("translate3d(0, {}px, 0) scale({})", self.y, self.scale)
    }

    fn declarations(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

/// A named hidden -> shown transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub name: &'static str,
    pub hidden: Pose,
    pub show: Pose,
    pub transition: Transition,
}

impl MotionPreset {
    /// Class carrying the hidden pose and the transition.
    pub fn class(&self) -> String {
        format!("motion-{}", self.name)
    }
}

pub const FADE_UP: MotionPreset = MotionPreset {
    name: "fade-up",
    hidden: Pose {
        opacity: 0.0,
        y: 24.0,
        scale: 1.0,
    },
    show: Pose::REST,
    transition: ENTRANCE,
};

pub const SCALE_IN: MotionPreset = MotionPreset {
    name: "scale-in",
    hidden: Pose {
        opacity: 0.0,
        y: 0.0,
        scale: 0.95,
    },
    show: Pose::REST,
    transition: ENTRANCE,
};

pub const PRESETS: [MotionPreset; 2] = [FADE_UP, SCALE_IN];

/// Delays children of a group so they reveal one after another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Seconds before the first child starts.
    pub delay_children: f64,
    /// Seconds between consecutive children.
    pub stagger_children: f64,
}

pub const STAGGER_PARENT: Stagger = Stagger {
    delay_children: 0.2,
    stagger_children: 0.08,
};

impl Stagger {
    /// Start delay of the child at `order` (0-based), in seconds.
    pub fn delay_for(&self, order: usize) -> f64 {
        self.delay_children + order as f64 * self.stagger_children
    }
}

/// Inline style for a child, `transition-delay` only.
pub fn delay_style(stagger: Option<Stagger>, order: usize) -> String {
    let delay = stagger.map(|s| s.delay_for(order)).unwrap_or(0.0);
    format!("transition-delay: {delay:.2}s")
}

/// How much of a group must be on screen before it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible fraction, 0.0 to 1.0.
    pub amount: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { amount: 0.2 }
    }
}

/// When a [`Reveal`](crate::components::Reveal) group flips to shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Right after mount.
    Load,
    /// The first time the group scrolls into view.
    InView(Viewport),
}

impl Default for Trigger {
    fn default() -> Self {
        Trigger::InView(Viewport::default())
    }
}

/// Browsers report ratios like 0.1999 when crossing a 0.2 threshold.
const RATIO_SLACK: f64 = 1e-3;

/// "Has this group's entrance already played?"
///
/// Starts unset and sets exactly once, on the first observation where the
/// group is intersecting by at least `amount`. Later exits and re-entries are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    amount: f64,
    fired: bool,
}

impl RevealLatch {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            amount: viewport.amount.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Feed one intersection observation. Returns true only on the call that
    /// fires the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.fired || !intersecting || ratio + RATIO_SLACK < self.amount {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// CSS for every preset.
///
/// Hidden pose and transition live on the preset class; the shown pose
/// applies once the element, or its `.reveal` group, carries `.revealed`.
pub fn motion_css() -> String {
    let mut css = String::new();
    for preset in PRESETS {
        let class = preset.class();
        let t = preset.transition;
        let ease = t.ease.css();
        let _ = writeln!(
            css,
            ".{class} {{ {} transition: opacity {d}s {ease}, transform {d}s {ease}; will-change: opacity, transform; }}",
            preset.hidden.declarations(),
            d = t.duration,
        );
        let _ = writeln!(
            css,
            ".revealed .{class}, .{class}.revealed {{ {} }}",
            preset.show.declarations()
        );
    }
    css
}
