use anyhow::{Context, Result};
use rwroads_core::{CityNetwork, CityRegistry};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CITIES_FILE: &str = "cities.txt";
pub const ROADS_FILE: &str = "roads.txt";

const SEPARATOR_WIDTH: usize = 45;

/// Writes the cities and roads listings as aligned plain text.
///
/// Each write truncates and rewrites the whole file. Nothing is ever read
/// back.
#[derive(Debug, Clone)]
pub struct FlatFileWriter {
    cities_path: PathBuf,
    roads_path: PathBuf,
}

impl FlatFileWriter {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("creating data directory {:?}", data_dir))?;

        Ok(Self {
            cities_path: data_dir.join(CITIES_FILE),
            roads_path: data_dir.join(ROADS_FILE),
        })
    }

    pub fn cities_path(&self) -> &Path {
        &self.cities_path
    }

    pub fn roads_path(&self) -> &Path {
        &self.roads_path
    }

    pub fn write_cities(&self, registry: &CityRegistry) -> Result<()> {
        write_file(&self.cities_path, &render_cities(registry))?;
        debug!(path = ?self.cities_path, cities = registry.len(), "cities file written");
        Ok(())
    }

    pub fn write_roads(&self, network: &CityNetwork) -> Result<()> {
        write_file(&self.roads_path, &render_roads(network))?;
        debug!(path = ?self.roads_path, "roads file written");
        Ok(())
    }
}

/// `Index City_name` followed by one `"<id>     <name>"` line per city.
pub fn render_cities(registry: &CityRegistry) -> String {
    let mut out = String::from("Index City_name\n");
    for city in registry.iter() {
        let _ = writeln!(out, "{}     {}", city.id, city.name);
    }
    out
}

/// Fixed-width table of existing roads, numbered from 1.
pub fn render_roads(network: &CityNetwork) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<5}{:<25}{:<15}", "Nbr", "Road", "Budget(Billion RWF)");
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    for (nbr, road) in (1..).zip(network.roads()) {
        let _ = writeln!(out, "{:<5}{:<25}{:<15.2}", nbr, road.label(), road.budget);
    }
    out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("opening {:?}", path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| format!("writing {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cities_defaults() {
        let registry = CityRegistry::with_defaults();
        let text = render_cities(&registry);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Index City_name");
        assert_eq!(lines[1], "1     Kigali");
        assert_eq!(lines[7], "7     Rusizi");
    }

    #[test]
    fn test_render_roads_empty() {
        let network = CityNetwork::with_defaults();
        let text = render_roads(&network);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Nbr  Road                     Budget(Billion RWF)");
        assert_eq!(lines[1], "-".repeat(45));
    }

    #[test]
    fn test_render_roads_rows() {
        let mut network = CityNetwork::with_defaults();
        network.add_road("Rusizi", "Muhanga").unwrap();
        network.add_road("Kigali", "Huye").unwrap();
        network.set_budget("Kigali", "Huye", 12.5).unwrap();
        let text = render_roads(&network);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], format!("{:<45}", "1    Kigali-Huye              12.50"));
        assert_eq!(lines[3].trim_end(), "2    Muhanga-Rusizi           0.00");
    }

    #[test]
    fn test_write_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = FlatFileWriter::new(temp_dir.path().join("out")).unwrap();
        let mut network = CityNetwork::with_defaults();
        network.add_road("Kigali", "Huye").unwrap();
        writer.write_cities(network.registry()).unwrap();
        writer.write_roads(&network).unwrap();

        let cities = std::fs::read_to_string(writer.cities_path()).unwrap();
        assert_eq!(cities, render_cities(network.registry()));
        let roads = std::fs::read_to_string(writer.roads_path()).unwrap();
        assert_eq!(roads.lines().count(), 3);
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = FlatFileWriter::new(temp_dir.path()).unwrap();
        let mut network = CityNetwork::with_defaults();
        network.add_road("Kigali", "Huye").unwrap();
        writer.write_roads(&network).unwrap();
        network.add_city("Gasabo").unwrap();
        writer.write_roads(&network).unwrap();

        let roads = std::fs::read_to_string(writer.roads_path()).unwrap();
        assert_eq!(roads.lines().count(), 2);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = FlatFileWriter::new(temp_dir.path()).unwrap();
        std::fs::create_dir(writer.cities_path()).unwrap();
        let registry = CityRegistry::with_defaults();
        assert!(writer.write_cities(&registry).is_err());
    }
}
