pub mod noise;

pub use noise::RandomWalkNoise;
