pub mod writer;

pub use writer::{render_cities, render_roads, FlatFileWriter, CITIES_FILE, ROADS_FILE};
