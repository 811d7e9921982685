use crate::components::{Glyph, Icon};
use crate::config::PageConfig;
use crate::content::{Anchor, NAV_LINKS};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let studio = use_context::<PageConfig>().unwrap_or_default().studio;

    view! {
        <nav class="nav" data-section="nav">
            <div class="nav-inner">
                <div class="nav-bar">
                    <a href="#" class="nav-brand">
                        <div class="nav-logo"></div>
                        <div class="nav-wordmark">
                            <p class="nav-title">{studio.name}</p>
                            <p class="nav-tagline">{studio.tagline}</p>
                        </div>
                    </a>
                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|anchor| {
                                view! {
                                    <a href=anchor.href() class="nav-link">{anchor.label()}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="nav-actions">
                        <a href=Anchor::Contact.href() class="btn btn-primary btn-small nav-cta">
                            "Start a project"
                            <Icon glyph=Glyph::ArrowRight size=16 />
                        </a>
                        // Visual only, opens nothing
                        <button type="button" class="nav-menu-toggle" aria-label="Menu">
                            <Icon glyph=Glyph::Menu size=18 />
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
