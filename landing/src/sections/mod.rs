// Landing page sections, top to bottom

mod accelerate;
mod decor;
mod details;
mod features;
mod footer;
mod hero;
mod highlights;
mod how_it_works;
mod innovate;
mod nav;
mod pioneer;
mod product_lines;
mod subscription;

pub use accelerate::{Accelerate, NoCodeSplash};
pub use decor::{DotBackground, RightArrow, StatBlock};
pub use details::Details;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use highlights::Highlights;
pub use how_it_works::HowItWorks;
pub use innovate::{CodeViewer, Innovate};
pub use nav::SiteNav;
pub use pioneer::Pioneer;
pub use product_lines::ProductLines;
pub use subscription::Subscription;
