use std::fmt;

/// A single drawing command in absolute coordinates.
///
/// Arcs are always quarter-turn elliptical arcs with zero x-axis rotation,
/// the small-arc flag, and a positive sweep — the only form the outline
/// builders emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    HLineTo { x: f64 },
    VLineTo { y: f64 },
    Arc { rx: f64, ry: f64, x: f64, y: f64 },
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo { x, y } => write!(f, "M {} {}", fmt_number(*x), fmt_number(*y)),
            Self::LineTo { x, y } => write!(f, "L {} {}", fmt_number(*x), fmt_number(*y)),
            Self::HLineTo { x } => write!(f, "H {}", fmt_number(*x)),
            Self::VLineTo { y } => write!(f, "V {}", fmt_number(*y)),
            Self::Arc { rx, ry, x, y } => write!(
                f,
                "A {} {} 0 0 1 {} {}",
                fmt_number(*rx),
                fmt_number(*ry),
                fmt_number(*x),
                fmt_number(*y)
            ),
            Self::Close => write!(f, "Z"),
        }
    }
}

/// An ordered sequence of drawing commands.
///
/// The geometry operations build and inspect commands as values; the
/// textual mini-language only exists at this serialization boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from a command list.
    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Appends a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// The commands in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// `true` when the path draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Formats a coordinate with fixed two-decimal precision.
///
/// Non-finite values render as `0` so malformed geometry stays parseable
/// downstream.
#[must_use]
pub fn fmt_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0".to_owned()
    }
}
