mod height_cache;

pub use height_cache::HeightCache;
