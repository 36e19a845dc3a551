use crate::adjacency::AdjacencyStore;
use crate::error::{Error, Result};
use crate::registry::{City, CityId, CityRegistry};
use tracing::{debug, info};

/// An existing road between two cities, in matrix order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road<'a> {
    pub from: &'a City,
    pub to: &'a City,
    /// `0.0` when no budget has been recorded.
    pub budget: f64,
}

impl Road<'_> {
    /// `"<from>-<to>"`, as listed in the roads file.
    pub fn label(&self) -> String {
        format!("{}-{}", self.from.name, self.to.name)
    }
}

/// Cities together with the road and budget matrices over them.
///
/// Every change to the number of cities rebuilds the matrices empty, so
/// adding a city drops all roads and budgets recorded so far.
#[derive(Debug, Clone)]
pub struct CityNetwork {
    registry: CityRegistry,
    store: AdjacencyStore,
}

impl Default for CityNetwork {
    fn default() -> Self {
        Self::new(CityRegistry::new())
    }
}

impl CityNetwork {
    pub fn new(registry: CityRegistry) -> Self {
        let store = AdjacencyStore::new(registry.len());
        Self { registry, store }
    }

    /// The seven startup cities and no roads.
    pub fn with_defaults() -> Self {
        Self::new(CityRegistry::with_defaults())
    }

    #[inline]
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    #[inline]
    pub fn store(&self) -> &AdjacencyStore {
        &self.store
    }

    pub fn find_city(&self, id: CityId) -> Result<&City> {
        self.registry.find_by_id(id).ok_or(Error::CityNotFound(id))
    }

    pub fn add_city(&mut self, raw: &str) -> Result<CityId> {
        let id = self.registry.add(raw)?;
        if self.store.roads().next().is_some() {
            info!(id, "city added, discarding recorded roads and budgets");
        }
        self.store.resize_to(self.registry.len());
        Ok(id)
    }

    pub fn rename_city(&mut self, id: CityId, raw: &str) -> Result<String> {
        let name = self.registry.rename(id, raw)?;
        debug!(id, name = %name, "city renamed");
        Ok(name)
    }

    /// Connect two cities given by their exact stored names.
    pub fn add_road(&mut self, first: &str, second: &str) -> Result<(CityId, CityId)> {
        let a = self.lookup(first)?;
        let b = self.lookup(second)?;
        if a == b {
            return Err(Error::SelfLoop);
        }
        let (i, j) = (self.position(a)?, self.position(b)?);
        self.store.add_road(i, j)?;
        debug!(first, second, "road added");
        Ok((a, b))
    }

    /// Matrix positions of the road between two named cities.
    ///
    /// Fails with [`Error::NoRoad`] when the cities exist but are not
    /// connected, including when both names are the same city.
    pub fn road_between(&self, first: &str, second: &str) -> Result<(usize, usize)> {
        let i = self.position(self.lookup(first)?)?;
        let j = self.position(self.lookup(second)?)?;
        if !self.store.has_road(i, j) {
            return Err(Error::NoRoad);
        }
        Ok((i, j))
    }

    pub fn set_budget(&mut self, first: &str, second: &str, amount: f64) -> Result<()> {
        let (i, j) = self.road_between(first, second)?;
        self.store.set_budget(i, j, amount)?;
        debug!(first, second, amount, "budget recorded");
        Ok(())
    }

    /// Existing roads with `i < j` over matrix positions, row-major.
    pub fn roads(&self) -> Vec<Road<'_>> {
        let cities: Vec<&City> = self.registry.iter().collect();
        self.store
            .roads()
            .map(|(i, j, budget)| Road {
                from: cities[i],
                to: cities[j],
                budget,
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<CityId> {
        self.registry
            .find_by_name(name)
            .ok_or_else(|| Error::CityNameNotFound(name.to_string()))
    }

    fn position(&self, id: CityId) -> Result<usize> {
        self.registry.position_of(id).ok_or(Error::CityNotFound(id))
    }
}
