pub mod animation;
pub mod bloom;
pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod glyph;
pub mod gpu;
pub mod logo;
pub mod material;
pub mod overlay;
pub mod palette;
pub mod scene;
pub mod starfield;

pub use overlay::ShellStatus;
pub use scene::LogoScene;
