use crate::core::ChartSet;

/// Per-tick transform applied to each laid-out set right before it is drawn.
pub trait ChartAnimation {
    fn animate(&mut self, target: &ChartSet) -> ChartSet;
}

/// Identity strategy: draws the laid-out geometry as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl ChartAnimation for NoAnimation {
    fn animate(&mut self, target: &ChartSet) -> ChartSet {
        target.clone()
    }
}
