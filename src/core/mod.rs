pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod draw;
pub mod gallery;
pub mod layout;
pub mod noise;
pub mod soundwave;

pub use clock::*;
pub use color::*;
pub use config::*;
pub use draw::*;
pub use gallery::*;
pub use noise::*;
pub use soundwave::*;
