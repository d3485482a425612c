pub mod filters;
pub mod model_card;
pub mod view;

pub use view::AdminPanel;
