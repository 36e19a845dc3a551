use crate::districts::DEFAULT_CITIES;
use crate::error::{Error, Result};
use crate::name::normalize_and_validate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

pub type CityId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

/// Cities keyed by id, iterated in ascending id order.
///
/// Alongside the map the registry keeps an id-to-position table so the
/// adjacency matrices can be indexed without rescanning the map. The table is
/// rebuilt whenever a city is added.
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: BTreeMap<CityId, City>,
    positions: HashMap<CityId, usize>,
    next_id: CityId,
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRegistry {
    pub fn new() -> Self {
        Self {
            cities: BTreeMap::new(),
            positions: HashMap::new(),
            next_id: 1,
        }
    }

    /// Registry holding the seven startup cities with ids 1 to 7.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.seed_defaults();
        registry
    }

    /// Replace the contents with the startup cities. Next id becomes 8.
    pub fn seed_defaults(&mut self) {
        self.cities.clear();
        for (id, name) in (1..).zip(DEFAULT_CITIES) {
            self.cities.insert(id, City { id, name: name.to_string() });
        }
        self.next_id = DEFAULT_CITIES.len() as CityId + 1;
        self.reindex();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Id the next added city will receive.
    #[inline]
    pub fn next_id(&self) -> CityId {
        self.next_id
    }

    /// Validate `raw` and register it under a fresh id.
    pub fn add(&mut self, raw: &str) -> Result<CityId> {
        let name = normalize_and_validate(raw, self.names())?;
        let id = self.next_id;
        self.cities.insert(id, City { id, name });
        self.next_id += 1;
        self.reindex();
        debug!(id, "city registered");
        Ok(id)
    }

    /// Validate `raw` against every other city and replace the name of `id`.
    ///
    /// The stored name is untouched unless validation succeeds.
    pub fn rename(&mut self, id: CityId, raw: &str) -> Result<String> {
        if !self.cities.contains_key(&id) {
            return Err(Error::CityNotFound(id));
        }
        let others = self
            .cities
            .values()
            .filter(|city| city.id != id)
            .map(|city| city.name.as_str());
        let name = normalize_and_validate(raw, others)?;

        if let Some(city) = self.cities.get_mut(&id) {
            city.name = name.clone();
        }
        Ok(name)
    }

    /// Exact, case-sensitive lookup. The query is not normalized.
    pub fn find_by_name(&self, name: &str) -> Option<CityId> {
        self.cities
            .values()
            .find(|city| city.name == name)
            .map(|city| city.id)
    }

    #[inline]
    pub fn find_by_id(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    /// 0-based rank of `id` in ascending-id order.
    #[inline]
    pub fn position_of(&self, id: CityId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.values().map(|city| city.name.as_str())
    }

    fn reindex(&mut self) {
        self.positions = self
            .cities
            .keys()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_seed_defaults() {
        let registry = CityRegistry::with_defaults();
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.next_id(), 8);
        assert_eq!(registry.find_by_id(1).unwrap().name, "Kigali");
        assert_eq!(registry.find_by_id(7).unwrap().name, "Rusizi");
        let ids: Vec<CityId> = registry.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut registry = CityRegistry::with_defaults();
        assert_eq!(registry.add("gasabo").unwrap(), 8);
        assert_eq!(registry.add(" Nyanza").unwrap(), 9);
        assert_eq!(registry.find_by_id(9).unwrap().name, "Nyanza");
        assert_eq!(registry.position_of(9), Some(8));
    }

    #[test]
    fn test_add_rejects_without_consuming_id() {
        let mut registry = CityRegistry::with_defaults();
        let err = registry.add("kigali").unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::DuplicateCity));
        assert_eq!(registry.next_id(), 8);
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_rename_duplicate_keeps_old_name() {
        let mut registry = CityRegistry::with_defaults();
        let err = registry.rename(2, "Musanze").unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::DuplicateCity));
        assert_eq!(registry.find_by_id(2).unwrap().name, "Huye");
    }

    #[test]
    fn test_rename_to_own_name() {
        let mut registry = CityRegistry::with_defaults();
        assert_eq!(registry.rename(2, "HUYE").unwrap(), "Huye");
        assert_eq!(registry.rename(2, "karongi").unwrap(), "Karongi");
        assert_eq!(registry.find_by_id(2).unwrap().name, "Karongi");
        assert_eq!(registry.find_by_name("Huye"), None);
    }

    #[test]
    fn test_rename_missing() {
        let mut registry = CityRegistry::with_defaults();
        assert_eq!(registry.rename(42, "Huye"), Err(Error::CityNotFound(42)));
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let registry = CityRegistry::with_defaults();
        assert_eq!(registry.find_by_name("Musanze"), Some(4));
        assert_eq!(registry.find_by_name("musanze"), None);
        assert_eq!(registry.find_by_name(" Musanze"), None);
    }

    #[test]
    fn test_positions_follow_id_order() {
        let registry = CityRegistry::with_defaults();
        for (position, city) in registry.iter().enumerate() {
            assert_eq!(registry.position_of(city.id), Some(position));
        }
        assert_eq!(registry.position_of(99), None);
    }
}
