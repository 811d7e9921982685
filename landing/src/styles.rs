//! Page stylesheet.
//!
//! Hand-written CSS for layout, colour and hover states. Entrance animation
//! rules are generated from the motion presets and appended by [`PageStyles`].
//!
//! Colour tokens live on `:root`: `--ink` (page), `--panel` (cards),
//! `--accent`, `--cyan`, `--lime`.

use crate::motion::motion_css;
use leptos::prelude::*;

/// Font stylesheet, linked from the document head.
pub const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Space+Grotesk:wght@500;700&family=Unbounded:wght@500&display=swap";

/// Layout, colour and decoration.
pub const PAGE_CSS: &str = r#"
:root {
    --ink: #07070b;
    --panel: #0e0e15;
    --accent: #ff0080;
    --cyan: #00ffff;
    --lime: #b6ff3b;
    --text: #ffffff;
    --text-muted: rgba(255, 255, 255, 0.7);
    --text-dim: rgba(255, 255, 255, 0.6);
    --line: rgba(255, 255, 255, 0.1);
    --font-display: 'Unbounded', 'Space Grotesk', system-ui, sans-serif;
    --font-alt: 'Space Grotesk', system-ui, sans-serif;
    --font-body: 'Inter', system-ui, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--ink);
    color: var(--text);
    font-family: var(--font-body);
    -webkit-font-smoothing: antialiased;
}

::selection { background: rgba(255, 0, 128, 0.4); color: #fff; }

a { color: inherit; text-decoration: none; }
p, h1, h2, h3 { margin: 0; }

section[id] { scroll-margin-top: 96px; }

.container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.container-narrow { max-width: 64rem; }

.icon { flex-shrink: 0; }
.tone-accent { color: var(--accent); }
.tone-cyan { color: var(--cyan); }
.tone-lime { color: var(--lime); }

/* ---------- buttons ---------- */

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 0.75rem;
    padding: 0.75rem 1.25rem;
    font-size: 0.875rem;
    font-weight: 600;
    font-family: inherit;
    cursor: pointer;
    transition: transform 0.2s ease, background-color 0.2s ease;
}
.btn-small { padding: 0.5rem 1rem; font-size: 0.75rem; }
.btn-primary {
    border: 0;
    background: var(--accent);
    color: #000;
    box-shadow: 0 10px 40px rgba(255, 0, 128, 0.38);
}
.btn-primary:hover { transform: translateY(-2px); }
.btn-secondary {
    border: 1px solid rgba(255, 255, 255, 0.15);
    background: rgba(255, 255, 255, 0.05);
    color: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
}
.btn-secondary:hover { background: rgba(255, 255, 255, 0.1); }

/* ---------- badge ---------- */

.neon-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 999px;
    border: 1px solid rgba(255, 0, 128, 0.3);
    background: var(--ink);
    padding: 0.25rem 0.75rem;
    font-size: 12px;
    letter-spacing: 0.025em;
    color: var(--accent);
    box-shadow: 0 0 30px rgba(255, 0, 128, 0.12);
    backdrop-filter: blur(4px);
}

/* ---------- nav ---------- */

.nav { position: fixed; top: 0; left: 0; right: 0; z-index: 40; }
.nav-inner { max-width: 80rem; margin: 0 auto; padding: 1.25rem 1.5rem; }
.nav-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    border-radius: 1rem;
    border: 1px solid var(--line);
    background: rgba(7, 7, 11, 0.6);
    padding: 0.75rem 1.25rem;
    backdrop-filter: blur(24px);
}
.nav-brand { display: flex; align-items: center; gap: 0.75rem; }
.nav-logo {
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    background: linear-gradient(135deg, var(--accent), var(--cyan));
    box-shadow: 0 0 40px rgba(0, 255, 255, 0.25);
}
.nav-title { font-family: var(--font-display); font-size: 15px; letter-spacing: 0.2em; }
.nav-tagline {
    margin-top: -2px;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.35em;
    color: var(--text-dim);
}
.nav-links { display: flex; align-items: center; gap: 2rem; font-size: 0.875rem; }
.nav-link { color: rgba(255, 255, 255, 0.8); transition: color 0.2s ease; }
.nav-link:hover { color: #fff; }
.nav-actions { display: flex; align-items: center; gap: 0.75rem; }
.nav-menu-toggle {
    display: none;
    border-radius: 0.75rem;
    border: 1px solid var(--line);
    background: transparent;
    padding: 0.5rem;
    color: rgba(255, 255, 255, 0.8);
}

/* ---------- hero ---------- */

.hero { position: relative; min-height: 92vh; overflow: hidden; padding-top: 7rem; }
.hero-scene { position: absolute; inset: 0; }
.scene-fallback {
    position: absolute;
    inset: 0;
    background:
        radial-gradient(520px 420px at 72% 38%, rgba(255, 0, 128, 0.22), transparent 70%),
        radial-gradient(480px 380px at 60% 60%, rgba(0, 255, 255, 0.18), transparent 70%),
        linear-gradient(180deg, #0b0b14 0%, var(--ink) 100%);
}
.scene-host { position: absolute; inset: 0; opacity: 0; transition: opacity 0.8s ease; }
.scene-host > * { width: 100%; height: 100%; display: block; }
.hero-scene[data-scene-state="ready"] .scene-host { opacity: 1; }
.hero-scene[data-scene-state="failed"] .scene-host,
.hero-scene[data-scene-state="disabled"] .scene-host { display: none; }
.hero-glow, .hero-noise { position: absolute; inset: 0; pointer-events: none; }
.hero-glow {
    background:
        radial-gradient(600px 300px at 70% 20%, rgba(255, 0, 128, 0.18), transparent),
        radial-gradient(600px 300px at 30% 70%, rgba(0, 255, 255, 0.16), transparent);
}
.hero-noise { opacity: 0.08; background-image: url('https://grainy-gradients.vercel.app/noise.svg'); }
.hero-content { position: relative; z-index: 10; pointer-events: none; }
.hero-content a, .hero-content button { pointer-events: auto; }
.hero-copy { max-width: 48rem; padding-top: 2.5rem; }
.hero-badge { margin-bottom: 1.25rem; }
.hero-title { font-family: var(--font-display); font-size: clamp(3rem, 6vw, 3.75rem); line-height: 1.05; font-weight: 500; }
.hero-description { margin-top: 1.25rem; max-width: 36rem; font-size: 1.125rem; color: var(--text-muted); }
.hero-actions { margin-top: 2rem; display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
.hero-trust { margin-top: 2.5rem; display: flex; flex-wrap: wrap; align-items: center; gap: 1.5rem; font-size: 0.75rem; color: var(--text-dim); }
.trust-mark { display: flex; align-items: center; gap: 0.5rem; }

/* ---------- marquee ---------- */

.marquee {
    margin-top: 6rem;
    border-top: 1px solid var(--line);
    border-bottom: 1px solid var(--line);
    background: linear-gradient(to right, rgba(255, 255, 255, 0.04), transparent);
    padding: 1.5rem 0;
}
.marquee-viewport { overflow: hidden; }
.marquee-track {
    display: inline-flex;
    white-space: nowrap;
    animation: marquee 28s linear infinite;
}
.marquee-item { margin: 0 2rem; display: inline-flex; align-items: center; gap: 0.75rem; color: var(--text-dim); }
.marquee-dot { width: 4px; height: 4px; border-radius: 999px; background: rgba(255, 255, 255, 0.4); }
.marquee-label { font-family: var(--font-alt); letter-spacing: 0.35em; text-transform: uppercase; }

@keyframes marquee {
    from { transform: translateX(0); }
    to { transform: translateX(-50%); }
}

/* ---------- sections ---------- */

.services, .cases { position: relative; padding: 7rem 0; }
.services-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background:
        radial-gradient(400px 200px at 20% 20%, rgba(0, 255, 255, 0.08), transparent),
        radial-gradient(600px 240px at 80% 60%, rgba(255, 0, 128, 0.08), transparent);
}
.section-title { font-family: var(--font-display); font-size: 1.875rem; font-weight: 500; }
.section-description { margin-top: 0.5rem; max-width: 42rem; color: var(--text-muted); }

.card-grid { margin-top: 2.5rem; display: grid; gap: 1.5rem; grid-template-columns: repeat(3, minmax(0, 1fr)); }
.card {
    position: relative;
    overflow: hidden;
    border-radius: 1rem;
    border: 1px solid var(--line);
    background: var(--panel);
}
.card > article { height: 100%; padding: 1.25rem; }
.card-body { position: relative; z-index: 10; }

.service-card { box-shadow: 0 30px 120px rgba(0, 0, 0, 0.5); }
.card-hover-glow {
    position: absolute;
    inset: 0;
    opacity: 0;
    transition: opacity 0.3s ease;
    background:
        radial-gradient(200px 120px at 0% 0%, rgba(255, 0, 128, 0.12), transparent),
        radial-gradient(200px 120px at 100% 100%, rgba(0, 255, 255, 0.12), transparent);
}
.card:hover .card-hover-glow { opacity: 1; }
.service-chip {
    margin-bottom: 1rem;
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 0.5rem;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.05);
    padding: 0.25rem 0.75rem;
    font-size: 12px;
    color: rgba(255, 255, 255, 0.8);
}
.service-title { font-weight: 500; letter-spacing: 0.025em; }
.service-description { color: var(--text-muted); }
.service-card .btn { margin-top: 1.5rem; }
.card-orb {
    position: absolute;
    right: -2.5rem;
    top: -2.5rem;
    width: 5rem;
    height: 5rem;
    border-radius: 999px;
    background: var(--accent);
    opacity: 0.1;
    filter: blur(40px);
}

.case-glow { position: absolute; inset: -4px; opacity: 0; filter: blur(40px); transition: opacity 0.3s ease; }
.card:hover .case-glow { opacity: 1; }
.glow-accent-cyan { background: linear-gradient(135deg, var(--accent), var(--cyan)); }
.glow-cyan-lime { background: linear-gradient(135deg, var(--cyan), var(--lime)); }
.glow-lime-accent { background: linear-gradient(135deg, var(--lime), var(--accent)); }
.case-tag {
    border-radius: 999px;
    border: 1px solid var(--line);
    background: rgba(255, 255, 255, 0.05);
    padding: 0.25rem 0.75rem;
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--text-muted);
}
.case-title { margin-top: 1rem; font-size: 1.125rem; font-weight: 400; color: rgba(255, 255, 255, 0.9); }
.case-visual {
    margin-top: 1rem;
    height: 10rem;
    border-radius: 0.75rem;
    background: linear-gradient(135deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0));
    box-shadow: inset 0 0 0 1px var(--line);
}

/* ---------- cta ---------- */

.cta { position: relative; padding: 6rem 0; }
.cta-panel {
    position: relative;
    overflow: hidden;
    border-radius: 1.5rem;
    border: 1px solid var(--line);
    background: linear-gradient(180deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.02));
    padding: 3rem;
}
.cta-glow {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background:
        radial-gradient(600px 200px at 80% 0%, rgba(0, 255, 255, 0.18), transparent),
        radial-gradient(400px 180px at 10% 100%, rgba(255, 0, 128, 0.2), transparent);
}
.cta-body { position: relative; z-index: 10; }
.cta-title { margin-top: 1rem; font-family: var(--font-display); font-size: 1.875rem; font-weight: 500; }
.cta-actions { margin-top: 1.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }

/* ---------- footer ---------- */

.footer { border-top: 1px solid var(--line); padding: 2.5rem 0; }
.footer-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
    color: var(--text-dim);
}
.footer-wordmark { font-family: var(--font-alt); letter-spacing: 0.3em; text-transform: uppercase; }
.footer-copyright { font-size: 0.875rem; }

/* ---------- narrow viewports ---------- */

@media (max-width: 767px) {
    .nav-links, .nav-cta { display: none; }
    .nav-menu-toggle { display: inline-flex; }
    .card-grid { grid-template-columns: minmax(0, 1fr); }
    .cta-panel { padding: 2rem; }
    .footer-inner { flex-direction: column; }
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .marquee-track { animation: none; }
    .reveal, .reveal * { transition: none !important; }
}
"#;

/// Shown when scripts are off, so entrance groups do not stay hidden.
pub const NOSCRIPT_CSS: &str =
    "[class*=\"motion-\"] { opacity: 1 !important; transform: none !important; }";

/// `<style>` element carrying [`PAGE_CSS`] plus the generated motion rules.
#[component]
pub fn PageStyles() -> impl IntoView {
    let css = format!("{PAGE_CSS}\n{}", motion_css());
    view! { <style>{css}</style> }
}
