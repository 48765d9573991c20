pub mod camera;
pub mod dice;
pub mod geometry;
