/// Call prices tabulated over spot (columns) and volatility (rows).
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGrid {
    /// Spot prices along the horizontal axis, ascending
    pub spots: Vec<f64>,
    /// Volatilities along the vertical axis, ascending
    pub vols: Vec<f64>,
    /// `prices[vol_index][spot_index]`
    pub prices: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    pub fn get(&self, vol_index: usize, spot_index: usize) -> Option<f64> {
        self.prices.get(vol_index)?.get(spot_index).copied()
    }

    /// Smallest and largest finite price, if any cell is finite.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        self.prices
            .iter()
            .flatten()
            .copied()
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_range_skips_nan_cells() {
        let grid = PriceGrid {
            spots: vec![1.0, 2.0],
            vols: vec![0.0, 0.1],
            prices: vec![vec![f64::NAN, 3.0], vec![1.5, f64::INFINITY]],
        };
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.finite_range(), Some((1.5, 3.0)));
        assert_eq!(grid.get(1, 0), Some(1.5));
        assert_eq!(grid.get(2, 0), None);
    }
}
