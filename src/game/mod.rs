// Demo game built on the engine

pub mod console;
pub mod generator;
pub mod scene;
