use crate::content::{MarqueeItem, marquee_track};
use leptos::prelude::*;

/// Endless horizontal strip of names.
///
/// The track holds the list twice and the stylesheet slides it left by half
/// its width on a loop, so the restart lands on an identical frame.
#[component]
pub fn Marquee(items: &'static [&'static str]) -> impl IntoView {
    let track = marquee_track(items);
    view! {
        <div class="marquee" aria-label="Brands we have worked with">
            <div class="marquee-viewport">
                <div class="marquee-track">
                    <For
                        each=move || track.clone()
                        key=|item: &MarqueeItem| item.key.clone()
                        children=|item: MarqueeItem| {
                            view! {
                                <span class="marquee-item" data-brand=item.label>
                                    <span class="marquee-dot"></span>
                                    <span class="marquee-label">{item.label}</span>
                                </span>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
