use crate::components::{Glyph, Icon, Marquee, Motion, NeonBadge, Reveal, SceneEmbed};
use crate::content::{Anchor, BRANDS, TRUST_MARKS};
use crate::motion::{FADE_UP, STAGGER_PARENT, Trigger};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="hero" data-section="hero">
            <SceneEmbed />

            // Atmosphere; never catches the pointer
            <div class="hero-glow" aria-hidden="true"></div>
            <div class="hero-noise" aria-hidden="true"></div>

            <div class="hero-content">
                <div class="container">
                    <Reveal trigger=Trigger::Load stagger=STAGGER_PARENT class="hero-copy" label="hero">
                        <Motion preset=FADE_UP order=0 class="hero-badge">
                            <NeonBadge>"Futurist brand, content & growth engine"</NeonBadge>
                        </Motion>
                        <Motion preset=FADE_UP order=1>
                            <h1 class="hero-title">
                                "We architect iconic brands for a hyper-digital world."
                            </h1>
                        </Motion>
                        <Motion preset=FADE_UP order=2>
                            <p class="hero-description">
                                "Strategy, design, and campaigns tuned to culture. "
                                "We blend editorial taste with scientific rigor to scale attention across platforms."
                            </p>
                        </Motion>
                        <Motion preset=FADE_UP order=3 class="hero-actions">
                            <a href=Anchor::Contact.href() class="btn btn-primary">
                                "Book a discovery call"
                                <Icon glyph=Glyph::ArrowRight size=16 />
                            </a>
                            <a href=Anchor::Work.href() class="btn btn-secondary">
                                "See our work"
                                <Icon glyph=Glyph::Play size=16 />
                            </a>
                        </Motion>
                        <Motion preset=FADE_UP order=4 class="hero-trust">
                            {TRUST_MARKS
                                .iter()
                                .map(|mark| {
                                    view! {
                                        <div class="trust-mark">
                                            <Icon glyph=mark.glyph size=14 class=mark.tone.class() />
                                            {mark.label}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </Motion>
                    </Reveal>
                </div>

                <Marquee items=&BRANDS />
            </div>
        </section>
    }
}
