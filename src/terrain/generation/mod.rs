pub mod noise;
pub mod params;
pub mod height;
pub mod color;

pub use noise::{hash_seed, SeedStream, Simplex2};
pub use params::{ParamsError, TerrainParams};
pub use height::{get_height, ColumnSample, HeightSource, TerrainHeightField};
pub use color::{base_color, color_for, COLOR_RAMP_HEIGHT};
