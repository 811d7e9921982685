use crate::components::{Motion, Reveal};
use crate::content::{Anchor, CASES, CaseStudy};
use crate::motion::{FADE_UP, SCALE_IN, STAGGER_PARENT, Trigger, Viewport};
use leptos::prelude::*;

#[component]
pub fn Cases() -> impl IntoView {
    view! {
        <section id=Anchor::Work.id() class="cases" data-section="cases">
            <div class="container">
                <Reveal
                    trigger=Trigger::InView(Viewport { amount: 0.2 })
                    stagger=STAGGER_PARENT
                    label="cases"
                >
                    <Motion preset=FADE_UP order=0>
                        <h2 class="section-title">"Selected work"</h2>
                    </Motion>
                    <div class="card-grid">
                        <For
                            each=|| CASES.iter().enumerate()
                            key=|entry: &(usize, &'static CaseStudy)| entry.1.title
                            children=|(i, case): (usize, &'static CaseStudy)| {
                                view! { <CaseCard case=case order=1 + i /> }
                            }
                        />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CaseCard(case: &'static CaseStudy, order: usize) -> impl IntoView {
    view! {
        <Motion preset=SCALE_IN order=order class="card case-card">
            <article data-card="case">
                <div class=format!("case-glow {}", case.accent.class()) aria-hidden="true"></div>
                <div class="card-body">
                    <span class="case-tag">{case.tag}</span>
                    <h3 class="case-title">{case.title}</h3>
                    <div class="case-visual" aria-hidden="true"></div>
                </div>
            </article>
        </Motion>
    }
}
