use crate::clock::{copyright_line, current_year};
use crate::config::PageConfig;
use leptos::prelude::*;

/// Wordmark and copyright. The year is read from the clock when the footer
/// renders unless one is passed in.
#[component]
pub fn Footer(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let studio = use_context::<PageConfig>().unwrap_or_default().studio;
    let year = year.unwrap_or_else(current_year);

    view! {
        <footer class="footer" data-section="footer">
            <div class="container footer-inner">
                <p class="footer-wordmark">{studio.footer_name}</p>
                <p class="footer-copyright" data-year=year.to_string()>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    #[test]
    fn year_defaults_to_the_clock() {
        let html = render(|| view! { <Footer /> }.into_any());
        assert!(html.contains(&format!("data-year=\"{}\"", current_year())));
    }

    #[test]
    fn pinned_year_is_rendered() {
        let html = render(|| view! { <Footer year=2031 /> }.into_any());
        assert!(html.contains("data-year=\"2031\""));
        assert!(html.contains("© 2031 All rights reserved."));
    }
}
