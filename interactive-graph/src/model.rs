use serde::{Deserialize, Serialize};

/// A point in graph coordinates. Serialized as a `[x, y]` pair.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self { Coord { x, y } }
    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() }
    pub fn add(self, o: Coord) -> Coord { Coord::new(self.x + o.x, self.y + o.y) }
    pub fn sub(self, o: Coord) -> Coord { Coord::new(self.x - o.x, self.y - o.y) }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self { Coord { x, y } }
}

impl From<Coord> for [f64; 2] {
    fn from(c: Coord) -> Self { [c.x, c.y] }
}

/// Closed interval `[min, max]` on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self { Interval { min, max } }
    pub fn extent(&self) -> f64 { self.max - self.min }
    pub fn midpoint(&self) -> f64 { (self.min + self.max) / 2.0 }
    pub fn is_valid(&self) -> bool { self.min.is_finite() && self.max.is_finite() && self.min < self.max }
}

impl From<[f64; 2]> for Interval {
    fn from([min, max]: [f64; 2]) -> Self { Interval { min, max } }
}

impl From<Interval> for [f64; 2] {
    fn from(i: Interval) -> Self { [i.min, i.max] }
}

/// Visible graph bounds, `[[xmin, xmax], [ymin, ymax]]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Interval; 2]", into = "[Interval; 2]")]
pub struct GraphRange {
    pub x: Interval,
    pub y: Interval,
}

impl GraphRange {
    pub const fn new(x: Interval, y: Interval) -> Self { GraphRange { x, y } }

    pub fn from_bounds(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        GraphRange::new(Interval::new(xmin, xmax), Interval::new(ymin, ymax))
    }

    /// Both axes finite with `min < max`.
    pub fn is_valid(&self) -> bool { self.x.is_valid() && self.y.is_valid() }

    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.x.min && c.x <= self.x.max && c.y >= self.y.min && c.y <= self.y.max
    }
}

impl Default for GraphRange {
    fn default() -> Self { GraphRange::from_bounds(-10.0, 10.0, -10.0, 10.0) }
}

impl From<[Interval; 2]> for GraphRange {
    fn from([x, y]: [Interval; 2]) -> Self { GraphRange { x, y } }
}

impl From<GraphRange> for [Interval; 2] {
    fn from(r: GraphRange) -> Self { [r.x, r.y] }
}

/// Per-axis snapping increment, `[x, y]` on the wire. Zero disables snapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct SnapStep {
    pub x: f64,
    pub y: f64,
}

impl SnapStep {
    pub const fn new(x: f64, y: f64) -> Self { SnapStep { x, y } }
    pub const fn none() -> Self { SnapStep { x: 0.0, y: 0.0 } }
}

impl Default for SnapStep {
    fn default() -> Self { SnapStep::new(1.0, 1.0) }
}

impl From<[f64; 2]> for SnapStep {
    fn from([x, y]: [f64; 2]) -> Self { SnapStep { x, y } }
}

impl From<SnapStep> for [f64; 2] {
    fn from(s: SnapStep) -> Self { [s.x, s.y] }
}

/// Identifies a graph variant. Kebab-case on the wire (`"linear-system"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphType {
    Point,
    Segment,
    Linear,
    LinearSystem,
    Ray,
    Polygon,
    Circle,
    Quadratic,
    Sinusoid,
    Angle,
}

impl GraphType {
    pub const ALL: [GraphType; 10] = [
        GraphType::Point,
        GraphType::Segment,
        GraphType::Linear,
        GraphType::LinearSystem,
        GraphType::Ray,
        GraphType::Polygon,
        GraphType::Circle,
        GraphType::Quadratic,
        GraphType::Sinusoid,
        GraphType::Angle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Point => "point",
            GraphType::Segment => "segment",
            GraphType::Linear => "linear",
            GraphType::LinearSystem => "linear-system",
            GraphType::Ray => "ray",
            GraphType::Polygon => "polygon",
            GraphType::Circle => "circle",
            GraphType::Quadratic => "quadratic",
            GraphType::Sinusoid => "sinusoid",
            GraphType::Angle => "angle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<GraphType> {
        GraphType::ALL.iter().copied().find(|t| t.as_str() == tag)
    }
}

/// How polygon vertices snap while dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapTo {
    #[default]
    Grid,
    Angles,
    Sides,
}

/// A point count that may be open-ended (`"unlimited"` on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Fixed(usize),
    Unlimited(UnlimitedTag),
}

impl Count {
    pub const UNLIMITED: Count = Count::Unlimited(UnlimitedTag::Unlimited);
    pub fn is_unlimited(&self) -> bool { matches!(self, Count::Unlimited(_)) }
    pub fn fixed(&self) -> Option<usize> {
        match self { Count::Fixed(n) => Some(*n), Count::Unlimited(_) => None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlimitedTag {
    Unlimited,
}
