use serde::{Deserialize, Serialize};

/// Inclusive min/max over every registered value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn single(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Widens `range` by `values`; returns `None` only when both are empty.
    #[must_use]
    pub fn extend(range: Option<Self>, values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(range, |acc, value| match acc {
            Some(mut current) => {
                current.include(value);
                Some(current)
            }
            None => Some(Self::single(value)),
        })
    }

    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` inside the range in `[0, 1]`.
    ///
    /// A zero-span range maps every value to `0.0`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }

    /// `count` evenly stepped values from `min` to `max`, both inclusive.
    #[must_use]
    pub fn steps(self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            self.max
                        } else {
                            self.min + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }
}
