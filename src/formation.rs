use std::fmt;
use std::str::FromStr;

use meval::Expr;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::LineError;

pub const DEFAULT_SPACING: f64 = 1.0;

/// Name of the variable that carries the zero-based queue index in formation expressions.
pub const INDEX_VARIABLE: &str = "i";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            other => Err(LineError::InvalidArgument(format!(
                "unknown axis '{}', expected x, y or z",
                other
            ))),
        }
    }
}

fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

fn default_axis() -> Axis {
    Axis::X
}

/// Rule mapping a queue index to a world position.
///
/// `Straight` puts actor `i` at `i * spacing` along `axis`. `Expression` evaluates
/// one arithmetic expression per coordinate with `i` bound to the index, so
/// `x: "i * 1.5", y: "0", z: "sin(i)"` gives a wavy line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Formation {
    Straight {
        #[serde(default = "default_spacing")]
        spacing: f64,
        #[serde(default = "default_axis")]
        axis: Axis,
    },
    Expression { x: String, y: String, z: String },
}

impl Default for Formation {
    fn default() -> Self {
        Formation::Straight {
            spacing: DEFAULT_SPACING,
            axis: Axis::X,
        }
    }
}

impl Formation {
    pub fn straight(spacing: f64, axis: Axis) -> Self {
        Formation::Straight { spacing, axis }
    }

    pub fn expression(x: &str, y: &str, z: &str) -> Self {
        Formation::Expression {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
        }
    }

    /// Validate the formation and parse its expressions once.
    pub(crate) fn compile(&self) -> Result<Layout, LineError> {
        match self {
            Formation::Straight { spacing, axis } => {
                if !spacing.is_finite() || *spacing <= 0.0 {
                    return Err(LineError::InvalidArgument(format!(
                        "spacing must be a positive finite number, got {}",
                        spacing
                    )));
                }
                Ok(Layout::Straight {
                    spacing: *spacing,
                    axis: *axis,
                })
            }
            Formation::Expression { x, y, z } => Ok(Layout::Expression {
                x: parse_component(x, Axis::X)?,
                y: parse_component(y, Axis::Y)?,
                z: parse_component(z, Axis::Z)?,
            }),
        }
    }
}

fn parse_component(source: &str, axis: Axis) -> Result<Expr, LineError> {
    let expr: Expr = source
        .parse()
        .map_err(|e: meval::Error| LineError::InvalidFormation {
            axis,
            reason: e.to_string(),
        })?;

    // Binding up front catches references to anything other than the index.
    bind_component(&expr, axis).map(drop)?;

    Ok(expr)
}

fn bind_component(expr: &Expr, axis: Axis) -> Result<impl Fn(f64) -> f64, LineError> {
    expr.clone()
        .bind(INDEX_VARIABLE)
        .map_err(|e| LineError::InvalidFormation {
            axis,
            reason: e.to_string(),
        })
}

#[derive(Debug, Clone)]
pub(crate) enum Layout {
    Straight { spacing: f64, axis: Axis },
    Expression { x: Expr, y: Expr, z: Expr },
}

impl Layout {
    /// Positions for indices `0..count`. Fails on the first index the formation
    /// cannot place at a finite point.
    pub(crate) fn positions(&self, count: usize) -> Result<Vec<Vector3<f64>>, LineError> {
        match self {
            Layout::Straight { spacing, axis } => (0..count)
                .map(|index| -> Result<Vector3<f64>, LineError> {
                    let offset = checked(index as f64 * spacing, *axis, index)?;
                    Ok(axis.unit() * offset)
                })
                .collect(),
            Layout::Expression { x, y, z } => {
                let fx = bind_component(x, Axis::X)?;
                let fy = bind_component(y, Axis::Y)?;
                let fz = bind_component(z, Axis::Z)?;

                (0..count)
                    .map(|index| -> Result<Vector3<f64>, LineError> {
                        let i = index as f64;
                        Ok(Vector3::new(
                            checked(fx(i), Axis::X, index)?,
                            checked(fy(i), Axis::Y, index)?,
                            checked(fz(i), Axis::Z, index)?,
                        ))
                    })
                    .collect()
            }
        }
    }
}

fn checked(value: f64, axis: Axis, index: usize) -> Result<f64, LineError> {
    if !value.is_finite() {
        return Err(LineError::InvalidFormation {
            axis,
            reason: format!("evaluates to {} at index {}", value, index),
        });
    }
    Ok(value)
}
