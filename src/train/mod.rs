mod config;
mod footprint;
mod layout;

pub use config::CartConfig;
pub use footprint::{cart_center, footprint, nose_cone, CartFootprint, NoseCone};
pub use layout::CouplerLayout;
