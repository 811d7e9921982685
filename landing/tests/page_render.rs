use astra_landing::clock::current_year;
use astra_landing::config::PageConfig;
use astra_landing::content::{BRANDS, CASES, NAV_LINKS, SERVICES};
use astra_landing::render_document;
use pretty_assertions::assert_eq;

fn page(config: &PageConfig) -> String {
    render_document(config, None)
}

fn default_page() -> String {
    page(&PageConfig::embedded())
}

/// The opening tag of the first element carrying `class`, attributes in any order.
fn opening_tag<'a>(html: &'a str, class: &str) -> &'a str {
    let at = position(html, &format!("class=\"{class}\""));
    let start = html[..at].rfind('<').unwrap_or(0);
    let end = at + html[at..].find('>').expect("unterminated tag");
    &html[start..=end]
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let prefix = format!(" {name}=\"");
    let value = &tag[tag.find(&prefix)? + prefix.len()..];
    Some(&value[..value.find('"')?])
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` missing from rendered page"))
}

#[test]
fn sections_render_once_in_page_order() {
    let html = default_page();
    let order = ["nav", "hero", "services", "cases", "cta", "footer"];

    let positions: Vec<usize> = order
        .iter()
        .map(|name| {
            let marker = format!("data-section=\"{name}\"");
            assert_eq!(html.matches(&marker).count(), 1, "{marker}");
            position(&html, &marker)
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn every_service_gets_a_card() {
    let html = default_page();
    assert_eq!(html.matches("data-card=\"service\"").count(), SERVICES.len());

    let mut last = 0;
    for service in &SERVICES {
        let at = position(&html, service.title);
        assert!(at > last, "{} out of order", service.title);
        assert!(html.contains(service.description));
        last = at;
    }
}

#[test]
fn every_case_gets_a_card() {
    let html = default_page();
    assert_eq!(html.matches("data-card=\"case\"").count(), CASES.len());

    for case in &CASES {
        assert!(html.contains(case.tag), "{}", case.tag);
        assert!(html.contains(case.title), "{}", case.title);
        assert!(html.contains(case.accent.class()));
    }
}

#[test]
fn marquee_lists_each_brand_twice_in_order() {
    let html = default_page();

    let mut track = Vec::new();
    let mut rest = html.as_str();
    while let Some(start) = rest.find("data-brand=\"") {
        let value = &rest[start + "data-brand=\"".len()..];
        let end = value.find('"').unwrap_or(value.len());
        track.push(&value[..end]);
        rest = &value[end..];
    }

    let expected: Vec<&str> = BRANDS.iter().chain(BRANDS.iter()).copied().collect();
    assert_eq!(track, expected);
}

#[test]
fn footer_shows_the_current_year() {
    let html = default_page();
    let year = current_year();
    assert!(html.contains(&format!("data-year=\"{year}\"")));
    assert!(html.contains(&format!("© {year} All rights reserved.")));
}

#[test]
fn footer_year_can_be_pinned() {
    let html = render_document(&PageConfig::embedded(), Some(2031));
    assert!(html.contains("data-year=\"2031\""));
    assert!(html.contains("© 2031 All rights reserved."));
}

#[test]
fn nav_links_point_at_rendered_sections() {
    let html = default_page();
    for anchor in NAV_LINKS {
        assert!(
            html.contains(&format!("href=\"{}\"", anchor.href())),
            "nav link {}",
            anchor.label()
        );
        assert_eq!(
            html.matches(&format!("id=\"{}\"", anchor.id())).count(),
            1,
            "target of {}",
            anchor.label()
        );
    }
}

#[test]
fn entrance_groups_start_hidden() {
    let html = default_page();
    // hero, services, cases and cta are each one group
    assert_eq!(html.matches(" revealed\"").count(), 0);
    assert!(html.contains("motion-fade-up"));
    assert!(html.contains("motion-scale-in"));
    assert!(html.contains("transition-delay: 0.20s"));
}

#[test]
fn disabled_motion_renders_groups_revealed() {
    let mut config = PageConfig::embedded();
    config.motion.enabled = false;

    let html = page(&config);
    assert_eq!(html.matches(" revealed\"").count(), 4);
}

#[test]
fn scene_waits_for_the_browser() {
    let html = default_page();
    let scene = opening_tag(&html, "hero-scene");
    assert_eq!(attribute(scene, "data-scene-state"), Some("pending"));
    assert!(html.contains("scene-fallback"));
}

#[test]
fn disabled_scene_keeps_only_the_backdrop() {
    let mut config = PageConfig::embedded();
    config.scene.enabled = false;

    let html = page(&config);
    let scene = opening_tag(&html, "hero-scene");
    assert_eq!(attribute(scene, "data-scene-state"), Some("disabled"));
    assert!(html.contains("hero-title"));
    assert!(html.contains("scene-fallback"));
}

#[test]
fn stylesheet_is_inlined_once() {
    let html = default_page();
    assert_eq!(html.matches("@keyframes marquee").count(), 1);
    assert!(html.contains("cubic-bezier(0.22, 1, 0.36, 1)"));
}
