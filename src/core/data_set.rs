use serde::{Deserialize, Serialize};

/// Labeled numeric sample.
///
/// `screen_x`/`screen_y` stay at `0.0` until the owning renderer lays the
/// series out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub screen_x: f64,
    #[serde(default)]
    pub screen_y: f64,
}

impl Point {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            screen_x: 0.0,
            screen_y: 0.0,
        }
    }
}

/// Ordered data series. Insertion order drives X placement and draw order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSet {
    pub entries: Vec<Point>,
}

impl ChartSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: Point) {
        self.entries.push(point);
    }

    #[must_use]
    pub fn with_point(mut self, label: impl Into<String>, value: f64) -> Self {
        self.add(Point::new(label, value));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|point| point.value)
    }
}

impl FromIterator<Point> for ChartSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Positioned axis label.
///
/// `screen_x` is the horizontal center of the text and `screen_y` its bottom
/// edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabel {
    pub text: String,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl ChartLabel {
    #[must_use]
    pub fn new(text: impl Into<String>, screen_x: f64, screen_y: f64) -> Self {
        Self {
            text: text.into(),
            screen_x,
            screen_y,
        }
    }
}
