pub mod config;
pub mod content;
pub mod error;
pub mod geometry;
pub mod interact;
pub mod motion;
pub mod particles;

pub use config::{AppConfig, KeymapConfig, MotionConfig};
pub use content::SiteContent;
pub use error::{Error, Result};
pub use geometry::Vec2;
pub use motion::Easing;
pub use particles::ParticleField;
