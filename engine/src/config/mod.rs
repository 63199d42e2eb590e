pub mod settings;

pub use settings::{OverlaySettings, Visibility};
