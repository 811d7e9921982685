//! Runs in a real browser: `wasm-pack test --headless --firefox landing --features csr`.
#![cfg(target_arch = "wasm32")]

use astra_landing::components::Reveal;
use astra_landing::config::PageConfig;
use astra_landing::motion::{Trigger, Viewport};
use astra_landing::sections::Hero;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh element appended to `<body>` to mount into.
fn host(style: &str) -> web_sys::HtmlElement {
    let host: web_sys::HtmlElement = document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    host.set_attribute("style", style).unwrap();
    document().body().unwrap().append_child(&host).unwrap();
    host
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn class_of(root: &web_sys::Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{selector} not mounted"))
        .get_attribute("class")
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn in_view_group_reveals_once_and_stays() {
    // starts well below the fold
    let host = host("margin-top: 300vh; height: 200px;");
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        view! {
            <Reveal trigger=Trigger::InView(Viewport { amount: 0.2 }) class="watched-group">
                <p style="height: 200px;">"content"</p>
            </Reveal>
        }
    });

    sleep(100).await;
    assert!(!class_of(&host, ".reveal").contains("revealed"));

    host.scroll_into_view();
    sleep(200).await;
    assert!(class_of(&host, ".reveal").ends_with(" revealed"));

    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    sleep(100).await;
    host.scroll_into_view();
    sleep(100).await;

    let class = class_of(&host, ".reveal");
    assert_eq!(class.matches("revealed").count(), 1, "{class}");
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
async fn stalled_scene_fails_but_hero_copy_stays() {
    let mut config = PageConfig::default();
    config.scene.url = "http://127.0.0.1:9/missing.splinecode".into();
    config.scene.viewer_script = "http://127.0.0.1:9/missing-viewer.js".into();
    config.scene.load_timeout_ms = 1;

    let host = host("");
    let _mounted = leptos::mount::mount_to(host.clone(), move || {
        provide_context(config);
        view! { <Hero /> }
    });

    sleep(300).await;

    let scene = host.query_selector(".hero-scene").unwrap().unwrap();
    assert_eq!(
        scene.get_attribute("data-scene-state").as_deref(),
        Some("failed")
    );
    assert!(host.query_selector(".scene-fallback").unwrap().is_some());

    let title = host.query_selector(".hero-title").unwrap().unwrap();
    assert!(title.text_content().unwrap_or_default().contains("iconic brands"));
    assert!(class_of(&host, ".hero-copy").ends_with(" revealed"));
}
