//! Hard-coded page copy.
//!
//! Everything here is `'static` and fixed at compile time; sections only ever
//! iterate over these tables.

use crate::components::Glyph;

/// Brands shown in the hero marquee. Order matters: the marquee plays the list
/// twice back-to-back, so the last entry must flow into the first.
pub static BRANDS: [&str; 8] = [
    "Aperture",
    "Nebula",
    "Covalent",
    "Hyperflex",
    "Monolith",
    "Orbit",
    "Nimbus",
    "Vertex",
];

/// Colour token used for icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Cyan,
    Lime,
}

impl Tone {
    pub const fn class(self) -> &'static str {
        match self {
            Tone::Accent => "tone-accent",
            Tone::Cyan => "tone-cyan",
            Tone::Lime => "tone-lime",
        }
    }
}

/// Hover glow of a case-study card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentGradient {
    AccentToCyan,
    CyanToLime,
    LimeToAccent,
}

impl AccentGradient {
    pub const fn class(self) -> &'static str {
        match self {
            AccentGradient::AccentToCyan => "glow-accent-cyan",
            AccentGradient::CyanToLime => "glow-cyan-lime",
            AccentGradient::LimeToAccent => "glow-lime-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub glyph: Glyph,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 3] = [
    Service {
        glyph: Glyph::Flame,
        tone: Tone::Accent,
        title: "Brand Systems",
        description: "Naming, identity, voice, and complete brand libraries built for omnichannel.",
    },
    Service {
        glyph: Glyph::Globe,
        tone: Tone::Cyan,
        title: "Campaign Architecture",
        description: "End-to-end concepts for product launches and momentum moments.",
    },
    Service {
        glyph: Glyph::Radar,
        tone: Tone::Lime,
        title: "Performance Creative",
        description: "High-frequency content engines optimized through experimentation.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub tag: &'static str,
    pub title: &'static str,
    pub accent: AccentGradient,
}

pub static CASES: [CaseStudy; 3] = [
    CaseStudy {
        tag: "Fintech",
        title: "Covalent: A category carve\u{2011}out with 4.2x CTR",
        accent: AccentGradient::AccentToCyan,
    },
    CaseStudy {
        tag: "AI",
        title: "Nebula: Story-first launch that hit 120k signups",
        accent: AccentGradient::CyanToLime,
    },
    CaseStudy {
        tag: "Consumer",
        title: "Aperture: Identity and campaign that owned the feed",
        accent: AccentGradient::LimeToAccent,
    },
];

/// Icon + short label under the hero call-to-actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustMark {
    pub glyph: Glyph,
    pub tone: Tone,
    pub label: &'static str,
}

pub static TRUST_MARKS: [TrustMark; 3] = [
    TrustMark {
        glyph: Glyph::Rocket,
        tone: Tone::Cyan,
        label: "Launch-ready in weeks",
    },
    TrustMark {
        glyph: Glyph::Gem,
        tone: Tone::Accent,
        label: "Taste-first design",
    },
    TrustMark {
        glyph: Glyph::Radar,
        tone: Tone::Lime,
        label: "Performance driven",
    },
];

/// In-page navigation targets. The ids are the sections' `id` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Work,
    Services,
    About,
    Contact,
}

impl Anchor {
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Work => "work",
            Anchor::Services => "services",
            Anchor::About => "about",
            Anchor::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Work => "#work",
            Anchor::Services => "#services",
            Anchor::About => "#about",
            Anchor::Contact => "#contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Anchor::Work => "Work",
            Anchor::Services => "Services",
            Anchor::About => "About",
            Anchor::Contact => "Contact",
        }
    }
}

/// Links in the nav bar, left to right.
pub const NAV_LINKS: [Anchor; 4] = [
    Anchor::Work,
    Anchor::Services,
    Anchor::About,
    Anchor::Contact,
];

/// One entry of the marquee strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueeItem {
    /// Unique across both passes (`a-3`, `b-3`, ...).
    pub key: String,
    pub label: &'static str,
}

/// The brand list followed by itself.
///
/// The strip scrolls by exactly half its width, at which point the second pass
/// sits where the first one started and the animation can restart unseen.
pub fn marquee_track(brands: &[&'static str]) -> Vec<MarqueeItem> {
    ["a", "b"]
        .into_iter()
        .flat_map(|pass| {
            brands.iter().enumerate().map(move |(i, &label)| MarqueeItem {
                key: format!("{pass}-{i}"),
                label,
            })
        })
        .collect()
}
