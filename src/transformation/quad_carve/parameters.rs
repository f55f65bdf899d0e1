use crate::math::Real;

/// How a cell still too complex to classify is resolved once subdivision is no longer allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum DepthCutoff {
    /// The whole cell is emitted as a quad.
    Outside,
    /// Nothing is emitted for the cell.
    Discard,
    /// The whole cell is emitted as a quad if its center is outside of the boundary.
    #[default]
    Center,
}

/// Parameters of the quad-tree carver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CarveParameters {
    /// Maximum number of nested subdivisions of the initial rectangle.
    ///
    /// Default: 16
    pub max_depth: u32,
    /// Cells with a width or height smaller or equal to this value are never subdivided.
    ///
    /// Default: 0.0
    pub min_cell_extent: Real,
    /// Resolution of cells reaching `max_depth` or `min_cell_extent`.
    ///
    /// Default: [`DepthCutoff::Center`]
    pub cutoff: DepthCutoff,
}

impl Default for CarveParameters {
    fn default() -> Self {
        Self {
            max_depth: 16,
            min_cell_extent: 0.0,
            cutoff: DepthCutoff::Center,
        }
    }
}
