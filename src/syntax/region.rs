//! Regions built from a shape name and keyword arguments.

use std::fmt;
use std::sync::LazyLock;

use tracing::debug;

use super::keywords::{ArgGrammar, ArgValue, ArgumentError, KeywordArgs, KeywordSchema};
use super::position::{Origin, Position, PositionStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Sphere,
    Cylinder,
}

const LENGTH: ArgGrammar = ArgGrammar::Float {
    min: 0.0,
    max: f64::MAX,
};

static BOX_SCHEMA: LazyLock<KeywordSchema> = LazyLock::new(|| {
    KeywordSchema::new()
        .required("from", ArgGrammar::Position)
        .required("to", ArgGrammar::Position)
});

static SPHERE_SCHEMA: LazyLock<KeywordSchema> = LazyLock::new(|| {
    KeywordSchema::new()
        .optional("center", ArgGrammar::Position, ArgValue::Position(Position::here()))
        .required("radius", LENGTH)
        .optional("hollow", ArgGrammar::Bool, ArgValue::Bool(false))
});

static CYLINDER_SCHEMA: LazyLock<KeywordSchema> = LazyLock::new(|| {
    KeywordSchema::new()
        .optional("center", ArgGrammar::Position, ArgValue::Position(Position::here()))
        .required("radius", LENGTH)
        .required("height", LENGTH)
        .optional("hollow", ArgGrammar::Bool, ArgValue::Bool(false))
});

impl Shape {
    pub const NAMES: &'static [&'static str] = &["box", "sphere", "cylinder"];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box => "box",
            Shape::Sphere => "sphere",
            Shape::Cylinder => "cylinder",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "box" => Some(Shape::Box),
            "sphere" => Some(Shape::Sphere),
            "cylinder" => Some(Shape::Cylinder),
            _ => None,
        }
    }

    pub fn schema(self) -> &'static KeywordSchema {
        match self {
            Shape::Box => &BOX_SCHEMA,
            Shape::Sphere => &SPHERE_SCHEMA,
            Shape::Cylinder => &CYLINDER_SCHEMA,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Every block between two corners, both included
    Box { from: Position, to: Position },
    Sphere {
        center: Position,
        radius: f64,
        hollow: bool,
    },
    /// Upright cylinder standing on `center`
    Cylinder {
        center: Position,
        radius: f64,
        height: f64,
        hollow: bool,
    },
}

impl Region {
    pub fn shape(&self) -> Shape {
        match self {
            Region::Box { .. } => Shape::Box,
            Region::Sphere { .. } => Shape::Sphere,
            Region::Cylinder { .. } => Shape::Cylinder,
        }
    }

    pub fn from_args(shape: Shape, args: &KeywordArgs<'_>) -> Result<Self, ArgumentError> {
        debug!(shape = shape.as_str(), "building region");
        Ok(match shape {
            Shape::Box => Region::Box {
                from: args.get_position("from")?,
                to: args.get_position("to")?,
            },
            Shape::Sphere => Region::Sphere {
                center: args.get_position("center")?,
                radius: args.get_f64("radius")?,
                hollow: args.get_bool("hollow")?,
            },
            Shape::Cylinder => Region::Cylinder {
                center: args.get_position("center")?,
                radius: args.get_f64("radius")?,
                height: args.get_f64("height")?,
                hollow: args.get_bool("hollow")?,
            },
        })
    }

    pub fn contains(&self, origin: &Origin, point: [f64; 3]) -> bool {
        match *self {
            Region::Box { from, to } => {
                let (min, max) = block_corners(from.block_pos(origin), to.block_pos(origin));
                let block = point.map(|v| v.floor() as i64);
                (0..3).all(|axis| min[axis] <= block[axis] && block[axis] <= max[axis])
            }
            Region::Sphere {
                center,
                radius,
                hollow,
            } => {
                let c = center.resolve(origin);
                let distance = (0..3)
                    .map(|axis| (point[axis] - c[axis]).powi(2))
                    .sum::<f64>()
                    .sqrt();
                distance <= radius && (!hollow || distance > radius - 1.0)
            }
            Region::Cylinder {
                center,
                radius,
                height,
                hollow,
            } => {
                let c = center.resolve(origin);
                let distance = ((point[0] - c[0]).powi(2) + (point[2] - c[2]).powi(2)).sqrt();
                let within_height = point[1] >= c[1] && point[1] <= c[1] + height;
                within_height && distance <= radius && (!hollow || distance > radius - 1.0)
            }
        }
    }

    /// Smallest axis-aligned box holding the region, as `(min, max)`.
    pub fn bounds(&self, origin: &Origin) -> ([f64; 3], [f64; 3]) {
        match *self {
            Region::Box { from, to } => {
                let (min, max) = block_corners(from.block_pos(origin), to.block_pos(origin));
                (min.map(|v| v as f64), max.map(|v| v as f64 + 1.0))
            }
            Region::Sphere { center, radius, .. } => {
                let c = center.resolve(origin);
                (c.map(|v| v - radius), c.map(|v| v + radius))
            }
            Region::Cylinder {
                center,
                radius,
                height,
                ..
            } => {
                let [x, y, z] = center.resolve(origin);
                ([x - radius, y, z - radius], [x + radius, y + height, z + radius])
            }
        }
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

fn block_corners(a: [i64; 3], b: [i64; 3]) -> ([i64; 3], [i64; 3]) {
    let mut min = a;
    let mut max = b;
    for axis in 0..3 {
        if min[axis] > max[axis] {
            std::mem::swap(&mut min[axis], &mut max[axis]);
        }
    }
    (min, max)
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = PositionStyle::Compact;
        match self {
            Region::Box { from, to } => write!(
                f,
                "box from={} to={}",
                from.display(compact),
                to.display(compact)
            ),
            Region::Sphere {
                center,
                radius,
                hollow,
            } => write!(
                f,
                "sphere center={} radius={radius} hollow={hollow}",
                center.display(compact)
            ),
            Region::Cylinder {
                center,
                radius,
                height,
                hollow,
            } => write!(
                f,
                "cylinder center={} radius={radius} height={height} hollow={hollow}",
                center.display(compact)
            ),
        }
    }
}
