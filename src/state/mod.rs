pub mod carousel;
pub mod map_ui;
pub mod overlay;

pub use carousel::{Carousel, CarouselAction, timer_timeout};
pub use map_ui::{MapAction, MapUiState};
pub use overlay::OverlayToggle;
