use crate::components::{Glyph, Icon, Motion, Reveal};
use crate::content::{Anchor, SERVICES, Service};
use crate::motion::{FADE_UP, SCALE_IN, STAGGER_PARENT, Trigger, Viewport};
use leptos::prelude::*;

/// Heading and subheading take the first two stagger slots.
const FIRST_CARD_ORDER: usize = 2;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Anchor::Services.id() class="services" data-section="services">
            <div class="services-glow" aria-hidden="true"></div>
            <div class="container">
                <Reveal
                    trigger=Trigger::InView(Viewport { amount: 0.2 })
                    stagger=STAGGER_PARENT
                    label="services"
                >
                    <Motion preset=FADE_UP order=0>
                        <h2 class="section-title">"What we do"</h2>
                    </Motion>
                    <Motion preset=FADE_UP order=1>
                        <p class="section-description">
                            "Strategic creativity that compounds. We fuse editorial craft with growth mechanics."
                        </p>
                    </Motion>
                    <div class="card-grid">
                        <For
                            each=|| SERVICES.iter().enumerate()
                            key=|entry: &(usize, &'static Service)| entry.1.title
                            children=|(i, service): (usize, &'static Service)| {
                                view! { <ServiceCard service=service order=FIRST_CARD_ORDER + i /> }
                            }
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service, order: usize) -> impl IntoView {
    view! {
        <Motion preset=SCALE_IN order=order class="card service-card">
            <article data-card="service">
                <div class="card-hover-glow" aria-hidden="true"></div>
                <div class="card-body">
                    <div class="service-chip">
                        <Icon glyph=service.glyph size=20 class=service.tone.class() />
                        <span class="service-title">{service.title}</span>
                    </div>
                    <p class="service-description">{service.description}</p>
                    <button type="button" class="btn btn-secondary btn-small">
                        "Explore"
                        <Icon glyph=Glyph::ArrowRight size=14 />
                    </button>
                </div>
                <div class="card-orb" aria-hidden="true"></div>
            </article>
        </Motion>
    }
}
