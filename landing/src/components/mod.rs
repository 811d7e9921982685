//! Reusable building blocks shared by the sections.
//!
//! ```text
//! Reveal            entrance group (owns the once-only latch)
//! └── Motion        one staggered child
//! NeonBadge         eyebrow pill
//! Icon              inline SVG glyph
//! Marquee           doubled, looping brand strip
//! SceneEmbed        3D scene over a static backdrop
//! ```

mod badge;
mod icons;
mod marquee;
mod reveal;
mod scene;

pub use badge::NeonBadge;
pub use icons::{Glyph, Icon};
pub use marquee::Marquee;
pub use reveal::{Motion, Reveal};
pub use scene::{SceneEmbed, SceneEvent, SceneState};
