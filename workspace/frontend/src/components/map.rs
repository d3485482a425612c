pub mod leaflet;
pub mod popup;
pub mod sidebar;
pub mod view;

pub use view::MapView;
