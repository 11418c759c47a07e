use nalgebra::Vector3;

use crate::error::LineError;

// Actor standing in line
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    name: String,
    pub(crate) position: Vector3<f64>,
}

impl Actor {
    /// New actors stand at the origin until the line recomputes its layout.
    pub fn new(name: &str) -> Result<Self, LineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LineError::InvalidArgument(
                "actor name must not be empty".to_string(),
            ));
        }

        Ok(Actor {
            name: name.to_string(),
            position: Vector3::zeros(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> (f64, f64, f64) {
        vector3_to_tuple(self.position)
    }
}

pub fn vector3_to_tuple(vec: Vector3<f64>) -> (f64, f64, f64) {
    (vec.x, vec.y, vec.z)
}
