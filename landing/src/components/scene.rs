//! Hero background: hosted 3D scene over a static backdrop.
//!
//! The backdrop is always painted. The `<spline-viewer>` element is created
//! after mount and only becomes visible once it reports `load-complete`, so a
//! slow, broken or blocked scene never blanks the hero.

use crate::config::{PageConfig, SceneConfig};
use crate::error::{LandingError, Result};
use leptos::html;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Custom element registered by the viewer script.
const VIEWER_TAG: &str = "spline-viewer";
/// Marks the injected viewer `<script>` so it is added once per document.
const VIEWER_SCRIPT_MARKER: &str = "data-scene-viewer";

/// Load state of the embedded scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    /// Viewer created (or about to be), nothing heard yet.
    Pending,
    Ready,
    Failed,
    /// Turned off in config; only the backdrop renders.
    Disabled,
}

/// Something the viewer (or the watchdog) reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Loaded,
    Errored,
    TimedOut,
}

impl SceneState {
    pub fn initial(scene: &SceneConfig) -> Self {
        if scene.is_active() {
            SceneState::Pending
        } else {
            SceneState::Disabled
        }
    }

    /// Only `Pending` moves; everything else is terminal, so a viewer that
    /// loads after the watchdog fired stays hidden.
    pub fn apply(self, event: SceneEvent) -> Self {
        match (self, event) {
            (SceneState::Pending, SceneEvent::Loaded) => SceneState::Ready,
            (SceneState::Pending, SceneEvent::Errored | SceneEvent::TimedOut) => {
                SceneState::Failed
            }
            (state, _) => state,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SceneState::Pending => "pending",
            SceneState::Ready => "ready",
            SceneState::Failed => "failed",
            SceneState::Disabled => "disabled",
        }
    }
}

/// Full-bleed scene layer for the hero.
#[component]
pub fn SceneEmbed() -> impl IntoView {
    let scene = use_context::<PageConfig>().unwrap_or_default().scene;
    let (state, set_state) = signal(SceneState::initial(&scene));
    let host_ref = NodeRef::<html::Div>::new();

    let report = move |event: SceneEvent| {
        let before = state.get_untracked();
        let after = before.apply(event);
        if before == after {
            return;
        }
        match after {
            SceneState::Ready => tracing::info!("3D scene ready"),
            SceneState::Failed => {
                tracing::warn!(?event, "3D scene unavailable, keeping static backdrop")
            }
            _ => {}
        }
        set_state.set(after);
    };

    Effect::new(move || {
        let Some(host) = host_ref.get() else {
            return;
        };
        if state.get_untracked() != SceneState::Pending || host.child_element_count() > 0 {
            return;
        }
        match mount_viewer(&host, &scene, report) {
            Ok(()) => {
                set_timeout(
                    move || report(SceneEvent::TimedOut),
                    Duration::from_millis(scene.load_timeout_ms),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not mount scene viewer");
                report(SceneEvent::Errored);
            }
        }
    });

    view! {
        <div class="hero-scene" data-scene-state=move || state.get().as_str()>
            <div class="scene-fallback" aria-hidden="true"></div>
            <div class="scene-host" node_ref=host_ref></div>
        </div>
    }
}

/// Creates the viewer element inside `host` and wires its events to `report`.
fn mount_viewer(
    host: &web_sys::HtmlDivElement,
    scene: &SceneConfig,
    report: impl Fn(SceneEvent) + Copy + 'static,
) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(LandingError::BrowserUnavailable("document"))?;

    ensure_viewer_script(&document, &scene.viewer_script, report)?;

    let viewer = document
        .create_element(VIEWER_TAG)
        .map_err(|e| LandingError::js("create spline-viewer", e))?;
    viewer
        .set_attribute("url", &scene.url)
        .map_err(|e| LandingError::js("set scene url", e))?;
    viewer
        .set_attribute("loading-anim-type", "none")
        .map_err(|e| LandingError::js("set loading mode", e))?;

    listen(&viewer, "load-complete", move || report(SceneEvent::Loaded))?;
    listen(&viewer, "error", move || report(SceneEvent::Errored))?;

    host.append_child(&viewer)
        .map_err(|e| LandingError::js("append spline-viewer", e))?;
    Ok(())
}

/// Injects the module script that defines `<spline-viewer>`, unless a
/// previous mount already did.
fn ensure_viewer_script(
    document: &web_sys::Document,
    src: &str,
    report: impl Fn(SceneEvent) + Copy + 'static,
) -> Result<()> {
    let selector = format!("script[{VIEWER_SCRIPT_MARKER}]");
    let existing = document
        .query_selector(&selector)
        .map_err(|e| LandingError::js("query viewer script", e))?;
    if existing.is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")
        .map_err(|e| LandingError::js("create viewer script", e))?;
    for (name, value) in [("type", "module"), ("src", src), (VIEWER_SCRIPT_MARKER, "")] {
        script
            .set_attribute(name, value)
            .map_err(|e| LandingError::js("set viewer script attribute", e))?;
    }
    listen(&script, "error", move || report(SceneEvent::Errored))?;

    let head = document
        .head()
        .ok_or(LandingError::BrowserUnavailable("document.head"))?;
    head.append_child(&script)
        .map_err(|e| LandingError::js("append viewer script", e))?;
    Ok(())
}

fn listen(target: &web_sys::Element, event: &str, handler: impl Fn() + 'static) -> Result<()> {
    let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| handler());
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|e| LandingError::js("add scene listener", e))?;
    // Lives as long as the element; the page never unmounts the hero.
    callback.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_resolves_on_first_outcome() {
        assert_eq!(
            SceneState::Pending.apply(SceneEvent::Loaded),
            SceneState::Ready
        );
        assert_eq!(
            SceneState::Pending.apply(SceneEvent::Errored),
            SceneState::Failed
        );
        assert_eq!(
            SceneState::Pending.apply(SceneEvent::TimedOut),
            SceneState::Failed
        );
    }

    #[test]
    fn late_watchdog_does_not_hide_a_ready_scene() {
        let state = SceneState::Pending
            .apply(SceneEvent::Loaded)
            .apply(SceneEvent::TimedOut);
        assert_eq!(state, SceneState::Ready);
    }

    #[test]
    fn load_after_timeout_is_discarded() {
        let state = SceneState::Pending
            .apply(SceneEvent::TimedOut)
            .apply(SceneEvent::Loaded);
        assert_eq!(state, SceneState::Failed);
    }

    #[test]
    fn disabled_ignores_everything() {
        for event in [SceneEvent::Loaded, SceneEvent::Errored, SceneEvent::TimedOut] {
            assert_eq!(SceneState::Disabled.apply(event), SceneState::Disabled);
        }
    }

    #[test]
    fn initial_state_follows_config() {
        let mut scene = SceneConfig::default();
        assert_eq!(SceneState::initial(&scene), SceneState::Pending);

        scene.enabled = false;
        assert_eq!(SceneState::initial(&scene), SceneState::Disabled);

        scene.enabled = true;
        scene.url.clear();
        assert_eq!(SceneState::initial(&scene), SceneState::Disabled);
    }
}
