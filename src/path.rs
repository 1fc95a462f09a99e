//! Connector geometry.
//!
//! [`compute_path`] turns a pair of anchors into a [`CurveDescriptor`]: an
//! ordered list of path tokens plus the point where a label should sit.
//! One of three routing regimes is picked from the relative position of the
//! end anchor, see [`Regime`].

use crate::point::Point;
use std::fmt;

/// Curviness used when the caller does not provide one.
pub const DEFAULT_CURVINESS: f32 = 1.0;

/// Minimum horizontal distance fed to `ln` in the steep backward regime.
const MIN_STEEP_DX: f32 = 10.0;

/// Ratio `|dx / dy|` above which a backward connector counts as level.
const LEVEL_RATIO: f32 = 4.0;

/// Vertical bow added to near-horizontal backward connectors.
const BACKWARD_BOW: f32 = 110.0;

/// Path command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathCommand {
    MoveTo,
    CubicCurveTo,
    QuadraticCurveTo,
}

impl PathCommand {
    /// Number of points this command consumes.
    pub const fn point_count(self) -> usize {
        match self {
            Self::MoveTo => 1,
            Self::QuadraticCurveTo => 2,
            Self::CubicCurveTo => 3,
        }
    }

    /// SVG path letter (absolute coordinates).
    pub const fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::CubicCurveTo => 'C',
            Self::QuadraticCurveTo => 'Q',
        }
    }
}

/// One token of a path description: a command tag, or a coordinate that
/// belongs to the most recently emitted command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Command(PathCommand),
    Coord(f32),
}

impl PathSegment {
    pub fn floor(self) -> Self {
        match self {
            Self::Coord(v) => Self::Coord(v.floor()),
            cmd => cmd,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(cmd) => write!(f, "{}", cmd.letter()),
            Self::Coord(v) => write!(f, "{}", v),
        }
    }
}

/// Result of a geometry computation. Replaced wholesale on every recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveDescriptor {
    pub label_anchor: Point,
    pub segments: Vec<PathSegment>,
}

impl CurveDescriptor {
    /// Copy with every coordinate floored.
    ///
    /// The label anchor is left as computed.
    pub fn floored(&self) -> Self {
        Self {
            label_anchor: self.label_anchor,
            segments: self.segments.iter().map(|s| s.floor()).collect(),
        }
    }

    /// Path commands string for this curve, see [`to_path_commands`].
    pub fn path_commands(&self) -> String {
        to_path_commands(&self.segments)
    }
}

/// Routing regime for a pair of anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// End is to the right of start: a single S-shaped cubic.
    Forward,
    /// End is behind start and roughly level: a cubic bowing up or down.
    LevelBackward,
    /// End is behind start and far above or below: two quadratics.
    SteepBackward,
}

impl Regime {
    pub fn select(start: Point, end: Point) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        if dx > 0.0 {
            Self::Forward
        } else if dy == 0.0 || (dx / dy).abs() > LEVEL_RATIO {
            Self::LevelBackward
        } else {
            Self::SteepBackward
        }
    }
}

/// Compute the connector path between two anchors.
///
/// # Arguments
/// * `start` - Anchor the connector leaves from
/// * `end` - Anchor the connector arrives at (where the arrowhead goes)
/// * `curviness` - Multiplier for every control point offset (default: [`DEFAULT_CURVINESS`])
///
/// # Returns
/// A [`CurveDescriptor`] whose segments are `M p0 C c1 c2 p3` for the cubic
/// regimes and `M p0 Q c1 mid Q c2 p4` for the steep backward regime.
pub fn compute_path(start: Point, end: Point, curviness: f32) -> CurveDescriptor {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    match Regime::select(start, end) {
        Regime::Forward => {
            let offset_x = dy.abs() / 2.0 * curviness;

            let bezier = CubicBezier {
                p0: start.into(),
                p1: (start.x + offset_x, start.y),
                p2: (end.x - offset_x, end.y),
                p3: end.into(),
            };

            CurveDescriptor {
                label_anchor: Point::new(start.x + dx / 2.0, start.y + dy / 2.0),
                segments: bezier.segments(),
            }
        }
        Regime::LevelBackward => {
            // ln(0) only happens when both anchors coincide
            let offset_x = if dx == 0.0 {
                0.0
            } else {
                dx.abs().ln() * 50.0 * curviness
            };
            let direction = if dy == 0.0 { -1.0 } else { sign(dy) };
            let offset_y = (dy.abs() + BACKWARD_BOW) * direction * curviness;

            let bezier = CubicBezier {
                p0: start.into(),
                p1: (start.x + offset_x, start.y + offset_y),
                p2: (end.x - offset_x, start.y + offset_y),
                p3: end.into(),
            };

            CurveDescriptor {
                label_anchor: bezier.eval(0.5).into(),
                segments: bezier.segments(),
            }
        }
        Regime::SteepBackward => {
            let dx = dx.min(-MIN_STEEP_DX);
            let offset_x = dx.abs().ln() * 40.0 * curviness;

            let mid = Point::new(
                start.x - dx.abs() / 2.0,
                start.y + dy.abs() / 2.0 * sign(dy),
            );

            let segments = vec![
                PathSegment::Command(PathCommand::MoveTo),
                PathSegment::Coord(start.x),
                PathSegment::Coord(start.y),
                PathSegment::Command(PathCommand::QuadraticCurveTo),
                PathSegment::Coord(start.x + offset_x),
                PathSegment::Coord(start.y),
                PathSegment::Coord(mid.x),
                PathSegment::Coord(mid.y),
                PathSegment::Command(PathCommand::QuadraticCurveTo),
                PathSegment::Coord(end.x - offset_x),
                PathSegment::Coord(end.y),
                PathSegment::Coord(end.x),
                PathSegment::Coord(end.y),
            ];

            CurveDescriptor {
                label_anchor: mid,
                segments,
            }
        }
    }
}

/// Serialize path tokens as an SVG / Slint path commands string.
///
/// Tokens are joined by single spaces, e.g. `"M 0 0 C 0 0 100 0 100 0"`.
pub fn to_path_commands(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&segment.to_string());
    }
    out
}

/// Sign with zero mapped to zero (`f32::signum` maps it to one).
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Cubic bezier curve used for label placement and distance calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: (f32, f32), // Start point
    pub p1: (f32, f32), // Control point 1
    pub p2: (f32, f32), // Control point 2
    pub p3: (f32, f32), // End point
}

impl CubicBezier {
    /// Evaluate the bezier curve at parameter t (0.0 to 1.0)
    pub fn eval(&self, t: f32) -> (f32, f32) {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.p0.0
            + 3.0 * mt2 * t * self.p1.0
            + 3.0 * mt * t2 * self.p2.0
            + t3 * self.p3.0;
        let y = mt3 * self.p0.1
            + 3.0 * mt2 * t * self.p1.1
            + 3.0 * mt * t2 * self.p2.1
            + t3 * self.p3.1;

        (x, y)
    }

    fn segments(&self) -> Vec<PathSegment> {
        vec![
            PathSegment::Command(PathCommand::MoveTo),
            PathSegment::Coord(self.p0.0),
            PathSegment::Coord(self.p0.1),
            PathSegment::Command(PathCommand::CubicCurveTo),
            PathSegment::Coord(self.p1.0),
            PathSegment::Coord(self.p1.1),
            PathSegment::Coord(self.p2.0),
            PathSegment::Coord(self.p2.1),
            PathSegment::Coord(self.p3.0),
            PathSegment::Coord(self.p3.1),
        ]
    }
}

/// Quadratic bezier curve, one half of a steep backward connector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: (f32, f32),
    pub p1: (f32, f32),
    pub p2: (f32, f32),
}

impl QuadraticBezier {
    pub fn eval(&self, t: f32) -> (f32, f32) {
        let mt = 1.0 - t;
        let x = mt * mt * self.p0.0 + 2.0 * mt * t * self.p1.0 + t * t * self.p2.0;
        let y = mt * mt * self.p0.1 + 2.0 * mt * t * self.p1.1 + t * t * self.p2.1;
        (x, y)
    }
}
