pub mod anchors;
pub mod blob;
pub mod clock;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod energy;
pub mod error;
pub mod motion;
pub mod resize;
pub mod shape;
pub mod skin;
pub mod surface;

pub use anchors::*;
pub use blob::*;
pub use clock::*;
pub use constants::*;
pub use driver::*;
pub use easing::*;
pub use energy::*;
pub use error::BlobError;
pub use motion::*;
pub use resize::*;
pub use shape::*;
pub use skin::*;
pub use surface::*;

pub use glam::DVec2;
