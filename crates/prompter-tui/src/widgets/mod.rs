pub mod description;
pub mod input_bar;
pub mod status_bar;

pub use description::DescriptionWidget;
pub use input_bar::InputBarWidget;
pub use status_bar::StatusBarWidget;
