//! UI Components
//!
//! Page sections and the primitives they share.

mod ui;
mod icons;
mod reveal_section;
mod particle_background;
mod navbar;
mod hero;
mod about;
mod skills;
mod projects;
mod uses;
mod testimonials;
mod contact_section;
mod footer;

pub use particle_background::ParticleBackground;
pub use navbar::Navbar;
pub use hero::Hero;
pub use about::About;
pub use skills::Skills;
pub use projects::Projects;
pub use uses::Uses;
pub use testimonials::Testimonials;
pub use contact_section::Contact;
pub use footer::Footer;
