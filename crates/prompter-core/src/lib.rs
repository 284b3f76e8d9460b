pub mod anim;
pub mod config;
pub mod error;
pub mod presenter;

pub use config::{AppConfig, EasingType, PresenterConfig, UiConfig};
pub use error::{Error, Result};
pub use presenter::{
    FixedViewport, Phase, PresentationController, PresenterEvent, Viewport,
};
