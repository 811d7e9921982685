use super::{Glyph, Icon};
use leptos::prelude::*;

/// Pill-shaped eyebrow label with a sparkle, used above headings.
#[component]
pub fn NeonBadge(children: Children) -> impl IntoView {
    view! {
        <span class="neon-badge">
            <Icon glyph=Glyph::Sparkles size=14 />
            {children()}
        </span>
    }
}
