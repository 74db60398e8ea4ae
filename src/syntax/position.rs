//! Positions written as three coordinates.
//!
//! World coordinates are absolute (`5`) or relative to the origin (`~5`).
//! Local coordinates (`^1`) are offsets left, up and forward from the
//! origin's facing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub relative: bool,
    pub value: f64,
}

impl Coordinate {
    pub fn absolute(value: f64) -> Self {
        Self {
            relative: false,
            value,
        }
    }

    pub fn relative(value: f64) -> Self {
        Self {
            relative: true,
            value,
        }
    }

    fn resolve(self, origin: f64) -> f64 {
        if self.relative {
            origin + self.value
        } else {
            self.value
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            f.write_str("~")?;
            if self.value == 0.0 {
                return Ok(());
            }
        }
        write!(f, "{}", self.value)
    }
}

/// How the three coordinates are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStyle {
    /// `~ ~1 ~`
    #[default]
    Spaced,
    /// `~,~1,~`, usable where whitespace ends a value
    Compact,
}

impl PositionStyle {
    pub(crate) fn separator(self) -> &'static str {
        match self {
            PositionStyle::Spaced => " ",
            PositionStyle::Compact => ",",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    World {
        x: Coordinate,
        y: Coordinate,
        z: Coordinate,
    },
    Local {
        left: f64,
        up: f64,
        forward: f64,
    },
}

/// Where relative and local coordinates are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    pub position: [f64; 3],
    /// Degrees, 0 facing +z, increasing clockwise seen from above
    pub yaw: f64,
    /// Degrees, positive looking down
    pub pitch: f64,
}

impl Origin {
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn facing(mut self, yaw: f64, pitch: f64) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Unit vectors for forward, up and left.
    fn axes(&self) -> ([f64; 3], [f64; 3], [f64; 3]) {
        let yaw = (self.yaw + 90.0).to_radians();
        let (yaw_sin, yaw_cos) = yaw.sin_cos();
        let (pitch_sin, pitch_cos) = (-self.pitch).to_radians().sin_cos();
        let (up_sin, up_cos) = (90.0 - self.pitch).to_radians().sin_cos();

        let forward = [yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos];
        let up = [yaw_cos * up_cos, up_sin, yaw_sin * up_cos];
        let left = [
            -(forward[1] * up[2] - forward[2] * up[1]),
            -(forward[2] * up[0] - forward[0] * up[2]),
            -(forward[0] * up[1] - forward[1] * up[0]),
        ];
        (forward, up, left)
    }
}

impl Position {
    /// `~ ~ ~`
    pub fn here() -> Self {
        let zero = Coordinate::relative(0.0);
        Position::World {
            x: zero,
            y: zero,
            z: zero,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Position::Local { .. })
    }

    pub fn resolve(&self, origin: &Origin) -> [f64; 3] {
        let [ox, oy, oz] = origin.position;
        match *self {
            Position::World { x, y, z } => [x.resolve(ox), y.resolve(oy), z.resolve(oz)],
            Position::Local { left, up, forward } => {
                let (f, u, l) = origin.axes();
                let mut resolved = origin.position;
                for (axis, value) in resolved.iter_mut().enumerate() {
                    *value += f[axis] * forward + u[axis] * up + l[axis] * left;
                }
                resolved
            }
        }
    }

    /// The block containing the resolved position.
    pub fn block_pos(&self, origin: &Origin) -> [i64; 3] {
        self.resolve(origin).map(|v| v.floor() as i64)
    }

    pub fn write(&self, f: &mut fmt::Formatter<'_>, style: PositionStyle) -> fmt::Result {
        let sep = style.separator();
        match self {
            Position::World { x, y, z } => write!(f, "{x}{sep}{y}{sep}{z}"),
            Position::Local { left, up, forward } => {
                for (i, value) in [left, up, forward].into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    f.write_str("^")?;
                    if *value != 0.0 {
                        write!(f, "{value}")?;
                    }
                }
                Ok(())
            }
        }
    }

    pub fn display(&self, style: PositionStyle) -> impl fmt::Display + '_ {
        Styled(self, style)
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

struct Styled<'a>(&'a Position, PositionStyle);

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, self.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, PositionStyle::Spaced)
    }
}
