//! Section renderers for the storefront homepage.

mod bundles;
mod countdown;
mod hero;
mod link_cards;
mod newsletter;
mod promotions;
mod testimonials;

pub use bundles::*;
pub use countdown::*;
pub use hero::*;
pub use link_cards::*;
pub use newsletter::*;
pub use promotions::*;
pub use testimonials::*;
