pub mod application;
pub mod logging;
pub mod math;
pub mod particles;
pub mod render;
pub mod timing;
