pub mod app;
pub mod donation_gallery;
pub mod fallback_image;
pub mod hero;
pub mod info_section;
pub mod location_panel;
pub mod map_section;

pub use app::{App, AppProps};
