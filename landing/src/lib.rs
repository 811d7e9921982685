//! # astra-landing
//!
//! The Astra Studio landing page as a Leptos 0.8 application.
//!
//! The same component tree is used two ways:
//!
//! - **Browser** (`csr` feature): `src/main.rs` mounts [`App`] into `<body>`;
//!   entrance animations, the viewport observers and the 3D scene come alive.
//! - **Static** (`ssr` feature): `astra-prerender` writes
//!   [`render_document`] to a file, a no-JS snapshot of the same page.
//!
//! ## Layout
//!
//! ```text
//! App
//! ├── Nav
//! ├── main
//! │   ├── Hero       (id="about")
//! │   ├── Services   (id="services")
//! │   ├── Cases      (id="work")
//! │   └── Cta        (id="contact")
//! └── Footer
//! ```
//!
//! ## Modules
//!
//! - [`content`] - copy and lists rendered by the sections
//! - [`motion`] - animation presets and the once-only reveal latch
//! - [`components`] - badge, icons, reveal wrappers, marquee, scene embed
//! - [`sections`] - the six page regions
//! - [`config`] - `astra.toml` page configuration
//! - [`styles`] - stylesheet

pub mod clock;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod sections;
pub mod styles;
pub mod telemetry;

use config::PageConfig;
use clock::current_year;
use leptos::prelude::*;
use sections::{Cases, Cta, Footer, Hero, Nav, Services};
use styles::PageStyles;

pub use error::{LandingError, Result};

/// The whole page.
///
/// `config` is shared with every section through context. `year` pins the
/// footer's copyright year; by default it is read from the clock.
#[component]
pub fn App(config: PageConfig, #[prop(optional)] year: Option<i32>) -> impl IntoView {
    provide_context(config);
    let year = year.unwrap_or_else(current_year);

    view! {
        <PageStyles />
        <div class="page">
            <Nav />
            <main>
                <Hero />
                <Services />
                <Cases />
                <Cta />
            </main>
            <Footer year=year />
        </div>
    }
}

/// Render the complete page as an HTML document. Needs the `ssr` feature.
///
/// The result is a static snapshot: no hydration script, motion shown
/// immediately when scripts are disabled.
///
/// ```rust
/// use astra_landing::{config::PageConfig, render_document};
///
/// let html = render_document(&PageConfig::default(), None);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_document(config: &PageConfig, year: Option<i32>) -> String {
    use leptos::tachys::view::RenderHtml;
    use styles::{FONTS_HREF, NOSCRIPT_CSS};

    let config = config.clone();
    let year = year.unwrap_or_else(current_year);
    let title = format!("{} | {}", config.studio.footer_name, config.studio.tagline);

    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <html lang="en">
                <head>
                    <meta charset="UTF-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="" />
                    <link rel="stylesheet" href=FONTS_HREF />
                    <noscript>
                        <style>{NOSCRIPT_CSS}</style>
                    </noscript>
                </head>
                <body>
                    <App config=config year=year />
                </body>
            </html>
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_a_complete_document() {
        let html = render_document(&PageConfig::default(), Some(2026));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Astra Studio | Marketing Studio"));
        assert!(html.contains("<style>"));
    }

    #[test]
    fn studio_name_comes_from_config() {
        let mut config = PageConfig::default();
        config.studio.name = "NOVA".into();
        config.studio.footer_name = "Nova Works".into();

        let html = render_document(&config, Some(2026));
        assert!(html.contains("NOVA"));
        assert!(html.contains("Nova Works"));
    }
}
