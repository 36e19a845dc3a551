//! # rwroads Core
//!
//! Core library for the rwroads record keeper.
//!
//! This crate provides the data model and its rules:
//!
//! - [`districts`] - the fixed allow-list of Rwandan district names
//! - [`normalize_and_validate`] - trimming, casing and allow-list checks for city names
//! - [`CityRegistry`] - cities keyed by sequential ids
//! - [`AdjacencyStore`] - symmetric road and budget matrices
//! - [`CityNetwork`] - a registry and a store kept the same size
//!
//! ## Example
//!
//! ```rust
//! use rwroads_core::CityNetwork;
//!
//! let mut network = CityNetwork::with_defaults();
//! network.add_road("Kigali", "Huye").unwrap();
//! network.set_budget("Kigali", "Huye", 12.5).unwrap();
//!
//! let roads = network.roads();
//! assert_eq!(roads[0].label(), "Kigali-Huye");
//!
//! // Adding a city rebuilds the matrices empty
//! network.add_city("gasabo").unwrap();
//! assert!(network.roads().is_empty());
//! ```

pub mod adjacency;
pub mod districts;
pub mod error;
pub mod name;
pub mod network;
pub mod registry;

pub use adjacency::AdjacencyStore;
pub use districts::{is_valid_district, title_case, DEFAULT_CITIES, DISTRICTS};
pub use error::{Error, Result, ValidationError};
pub use name::{normalize_and_validate, MAX_NAME_LEN};
pub use network::{CityNetwork, Road};
pub use registry::{City, CityId, CityRegistry};
