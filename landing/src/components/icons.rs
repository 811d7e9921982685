//! Inline SVG icons.
//!
//! Outline glyphs on a 24x24 grid in the Lucide style, drawn with
//! `currentColor` strokes so they pick up the surrounding text colour.

use leptos::prelude::*;

/// Every glyph the page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    ArrowRight,
    Flame,
    Gem,
    Globe,
    Menu,
    Play,
    Radar,
    Rocket,
    Sparkles,
}

impl Glyph {
    /// SVG path data, one entry per `<path>`.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Glyph::Flame => &[
                "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z",
            ],
            Glyph::Gem => &["M6 3h12l4 6-10 13L2 9Z", "M11 3 8 9l4 13 4-13-3-6", "M2 9h20"],
            Glyph::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Glyph::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Glyph::Play => &["M6 3 20 12 6 21Z"],
            Glyph::Radar => &[
                "M19.07 4.93A10 10 0 0 0 6.99 3.34",
                "M4 6h.01",
                "M2.29 9.62A10 10 0 1 0 21.31 8.35",
                "M16.24 7.76A6 6 0 1 0 8.23 16.67",
                "M12 18h.01",
                "M17.99 11.66A6 6 0 0 1 15.77 16.67",
                "M14 12a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
                "m13.41 10.59 5.66-5.66",
            ],
            Glyph::Rocket => &[
                "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
                "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
            ],
            Glyph::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
        }
    }
}

/// Renders a glyph as inline SVG.
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::ArrowRight size=16 /> }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    /// Width and height in pixels
    #[prop(default = 20)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=format!("icon {class}")
        >
            {glyph.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Glyph; 9] = [
        Glyph::ArrowRight,
        Glyph::Flame,
        Glyph::Gem,
        Glyph::Globe,
        Glyph::Menu,
        Glyph::Play,
        Glyph::Radar,
        Glyph::Rocket,
        Glyph::Sparkles,
    ];

    #[test]
    fn every_glyph_has_path_data() {
        for glyph in ALL {
            let paths = glyph.paths();
            assert!(!paths.is_empty(), "{glyph:?} has no paths");
            for d in paths {
                assert!(
                    d.starts_with('M') || d.starts_with('m'),
                    "{glyph:?} path must start with a move: {d}"
                );
            }
        }
    }
}
