use crate::error::{Error, Result};

/// Two square matrices over city positions: road presence and road budget.
///
/// Both are symmetric with an empty diagonal. A budget of `0.0` means no
/// budget has been recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyStore {
    roads: Vec<Vec<bool>>,
    budgets: Vec<Vec<f64>>,
}

impl AdjacencyStore {
    pub fn new(dimension: usize) -> Self {
        let mut store = Self::default();
        store.resize_to(dimension);
        store
    }

    /// Replace both matrices with empty `n × n` ones. Existing roads and
    /// budgets are discarded.
    pub fn resize_to(&mut self, n: usize) {
        self.roads = vec![vec![false; n]; n];
        self.budgets = vec![vec![0.0; n]; n];
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.roads.len()
    }

    pub fn add_road(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        if i == j {
            return Err(Error::SelfLoop);
        }
        if self.roads[i][j] {
            return Err(Error::RoadExists);
        }
        self.roads[i][j] = true;
        self.roads[j][i] = true;
        Ok(())
    }

    pub fn set_budget(&mut self, i: usize, j: usize, amount: f64) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        if !self.roads[i][j] {
            return Err(Error::NoRoad);
        }
        if amount.is_nan() || amount <= 0.0 {
            return Err(Error::NonPositiveBudget(amount));
        }
        self.budgets[i][j] = amount;
        self.budgets[j][i] = amount;
        Ok(())
    }

    /// Out-of-range positions read as no road.
    pub fn has_road(&self, i: usize, j: usize) -> bool {
        self.roads
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(false)
    }

    pub fn budget(&self, i: usize, j: usize) -> f64 {
        self.budgets
            .get(i)
            .and_then(|row| row.get(j))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn road_rows(&self) -> &[Vec<bool>] {
        &self.roads
    }

    pub fn budget_rows(&self) -> &[Vec<f64>] {
        &self.budgets
    }

    /// Each road once as `(i, j, budget)` with `i < j`, in row-major order.
    pub fn roads(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.dimension();
        (0..n).flat_map(move |i| {
            (i + 1..n)
                .filter(move |&j| self.roads[i][j])
                .map(move |j| (i, j, self.budgets[i][j]))
        })
    }

    fn check(&self, position: usize) -> Result<()> {
        let dimension = self.dimension();
        if position >= dimension {
            return Err(Error::PositionOutOfRange { position, dimension });
        }
        Ok(())
    }
}
