//! # rwroads
//!
//! A console record keeper for Rwandan cities, the roads between them and
//! the budget attached to each road.
//!
//! ## Quick Start
//!
//! ### As a Program
//!
//! ```bash
//! cargo install rwroads
//! rwroads --data-dir ./records
//! ```
//!
//! The program starts with seven default cities, shows a numbered menu and
//! rewrites `cities.txt` and `roads.txt` in the data directory after every
//! change.
//!
//! ### As a Library
//!
//! ```rust
//! use rwroads::prelude::*;
//!
//! let mut network = CityNetwork::with_defaults();
//! let id = network.add_city(" nyanza ").unwrap();
//! assert_eq!(network.find_city(id).unwrap().name, "Nyanza");
//!
//! network.add_road("Nyanza", "Huye").unwrap();
//! network.set_budget("Nyanza", "Huye", 3.75).unwrap();
//! assert!(render_roads(&network).contains("Huye-Nyanza"));
//! ```
//!
//! ## Crate Structure
//!
//! - `rwroads-core` - allow-list, name validation, registry, adjacency matrices
//! - `rwroads-storage` - the flat text listings
//! - [`console`] - the interactive menu

pub mod console;

// Re-export core types
pub use rwroads_core::{
    AdjacencyStore, City, CityId, CityNetwork, CityRegistry, Road,
    Error, Result, ValidationError,
    normalize_and_validate, is_valid_district,
};

// Re-export storage
pub use rwroads_storage::{render_cities, render_roads, FlatFileWriter};

pub use console::{Console, MenuChoice};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AdjacencyStore, City, CityId, CityNetwork, CityRegistry, Road,
        Error, Result, ValidationError,
        normalize_and_validate, is_valid_district,
        render_cities, render_roads, FlatFileWriter,
        Console, MenuChoice,
    };
}
