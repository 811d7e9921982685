use crate::components::{Glyph, Icon, NeonBadge, Reveal};
use crate::content::Anchor;
use crate::motion::{SCALE_IN, Trigger, Viewport};
use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id=Anchor::Contact.id() class="cta" data-section="cta">
            <div class="container container-narrow">
                <Reveal
                    trigger=Trigger::InView(Viewport { amount: 0.4 })
                    preset=SCALE_IN
                    class="cta-panel"
                    label="cta"
                >
                    <div class="cta-glow" aria-hidden="true"></div>
                    <div class="cta-body">
                        <NeonBadge>"We take on 2 new partners monthly"</NeonBadge>
                        <h3 class="cta-title">"Let’s build something that moves culture."</h3>
                        <p class="section-description">
                            "Share your goals. We’ll return with a tailored plan—timeline, budgets, and impact model."
                        </p>
                        // Placeholder targets
                        <div class="cta-actions">
                            <a href="#" class="btn btn-primary">
                                "Start the conversation"
                                <Icon glyph=Glyph::ArrowRight size=16 />
                            </a>
                            <a href="#" class="btn btn-secondary">"Download capabilities"</a>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
