//! Entrance animation wrappers.
//!
//! `Reveal` owns the "has fired" state of a group and flips it once;
//! `Motion` marks a child with a preset and its place in the stagger.

use crate::config::PageConfig;
use crate::error::{LandingError, Result};
use crate::motion::{MotionPreset, RevealLatch, Stagger, Trigger, Viewport, delay_style};
use leptos::html;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Stagger of the innermost `Reveal`, read by `Motion` children.
#[derive(Debug, Clone, Copy)]
struct GroupStagger(Option<Stagger>);

/// A group whose children animate in together.
///
/// Renders hidden, then gains the `revealed` class exactly once: right after
/// mount for [`Trigger::Load`], on first qualifying intersection for
/// [`Trigger::InView`]. With motion disabled in the config it renders revealed.
#[component]
pub fn Reveal(
    /// When the group fires
    #[prop(optional)]
    trigger: Trigger,
    /// Per-child delays for nested `Motion` elements
    #[prop(optional)]
    stagger: Option<Stagger>,
    /// Animate the container itself with this preset
    #[prop(optional)]
    preset: Option<MotionPreset>,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Name used in logs
    #[prop(default = "group")]
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let motion_enabled = use_context::<PageConfig>()
        .map(|config| config.motion.enabled)
        .unwrap_or(true);
    let (revealed, set_revealed) = signal(!motion_enabled);
    let node_ref = NodeRef::<html::Div>::new();

    let base_class = match preset {
        Some(preset) => format!("reveal {} {class}", preset.class()),
        None => format!("reveal {class}"),
    };
    let group_class = move || {
        if revealed.get() {
            format!("{base_class} revealed")
        } else {
            base_class.clone()
        }
    };

    let reveal = move || {
        tracing::debug!(group = label, "entrance revealed");
        set_revealed.set(true);
    };

    match trigger {
        Trigger::Load => {
            Effect::new(move || {
                if revealed.get_untracked() {
                    return;
                }
                // next frame, so the hidden pose is painted first
                set_timeout(reveal, Duration::from_millis(16));
            });
        }
        Trigger::InView(viewport) => {
            Effect::new(move || {
                let Some(element) = node_ref.get() else {
                    return;
                };
                if revealed.get_untracked() {
                    return;
                }
                if let Err(err) = observe_once(&element, viewport, reveal) {
                    tracing::warn!(group = label, error = %err, "viewport observer unavailable, revealing now");
                    reveal();
                }
            });
        }
    }

    provide_context(GroupStagger(stagger));

    view! {
        <div node_ref=node_ref class=group_class>
            {children()}
        </div>
    }
}

/// One animated child of a `Reveal` group.
#[component]
pub fn Motion(
    preset: MotionPreset,
    /// Position in the enclosing group's stagger
    #[prop(default = 0)]
    order: usize,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let stagger = use_context::<GroupStagger>().and_then(|group| group.0);
    view! {
        <div class=format!("{} {class}", preset.class()) style=delay_style(stagger, order)>
            {children()}
        </div>
    }
}

/// Calls `on_enter` the first time `target` is visible by at least
/// `viewport.amount`, then stops observing.
fn observe_once(
    target: &web_sys::Element,
    viewport: Viewport,
    on_enter: impl FnOnce() + 'static,
) -> Result<()> {
    let mut latch = RevealLatch::new(viewport);
    let mut on_enter = Some(on_enter);

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    if let Some(fire) = on_enter.take() {
                        fire();
                    }
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(viewport.amount));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| LandingError::js("IntersectionObserver::new", e))?;
    observer.observe(target);

    // The observer holds the only JS reference; keep the Rust side alive with it.
    callback.forget();
    Ok(())
}
