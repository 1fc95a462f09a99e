/// A 2-D coordinate in logical pixels.
///
/// Equality is plain field comparison, which is what the change detector in
/// [`crate::render`] relies on. Converts losslessly to and from `[x, y]`
/// arrays and `(x, y)` tuples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Floor both axes.
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f32, f32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// The resolved start and end anchors of one connector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchors {
    pub start: Point,
    pub end: Point,
}

impl Anchors {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn floor(self) -> Self {
        Self {
            start: self.start.floor(),
            end: self.end.floor(),
        }
    }
}
