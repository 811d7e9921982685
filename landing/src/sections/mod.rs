// Landing page sections, top to bottom
// Developed by the Astra Studio web team (c)2026

mod cases;
mod cta;
mod footer;
mod hero;
mod nav;
mod services;

pub use cases::Cases;
pub use cta::Cta;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use services::Services;
