mod actors;
mod config;
mod error;
mod formation;
mod hover;
mod line;

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;

pub use actors::{Actor, Placement};
pub use config::{LineConfig, DEFAULT_ROSTER};
pub use error::{ConfigError, LineError};
pub use formation::{Axis, Formation, DEFAULT_SPACING, INDEX_VARIABLE};
pub use hover::{
    rank_message, Highlight, HoverHandler, HoverTracker, RankAnnouncer, HOVER_SCALE,
    OUTLINE_WIDTH, RESTING_SCALE,
};
pub use line::Line;

fn line_error_to_py(e: LineError) -> PyErr {
    match e {
        LineError::NotFound(name) => PyKeyError::new_err(format!("no actor named '{}'", name)),
        other => PyValueError::new_err(other.to_string()),
    }
}

#[pyclass]
struct ActorLineWrapper {
    line: Line,
    tracker: HoverTracker,
    announcer: RankAnnouncer,
}

impl ActorLineWrapper {
    fn wrap(line: Line) -> Self {
        ActorLineWrapper {
            line,
            tracker: HoverTracker::new(),
            announcer: RankAnnouncer::new(),
        }
    }
}

#[pymethods]
impl ActorLineWrapper {
    #[new]
    #[pyo3(signature = (spacing=DEFAULT_SPACING, axis="x"))]
    fn new(spacing: f64, axis: &str) -> PyResult<Self> {
        let axis: Axis = axis.parse().map_err(line_error_to_py)?;
        let line = Line::with_formation(Formation::straight(spacing, axis))
            .map_err(line_error_to_py)?;
        Ok(ActorLineWrapper::wrap(line))
    }

    #[classmethod]
    fn from_yaml_config(
        _cls: &Bound<'_, pyo3::types::PyType>,
        config_path: String,
    ) -> PyResult<Self> {
        let config = LineConfig::from_yaml_file(&config_path).map_err(|e| {
            PyIOError::new_err(format!("Failed to load config: {}", e))
        })?;
        let line = Line::from_config(&config).map_err(line_error_to_py)?;
        Ok(ActorLineWrapper::wrap(line))
    }

    fn add_new_actor(&mut self, name: &str) -> PyResult<(String, (f64, f64, f64))> {
        let actor = self.line.add_new_actor(name).map_err(line_error_to_py)?;
        Ok((actor.name().to_string(), actor.position()))
    }

    fn remove_actor(&mut self, name: &str) -> PyResult<String> {
        let actor = self.line.remove_actor(name).map_err(line_error_to_py)?;
        Ok(actor.name().to_string())
    }

    fn update_location_of_all_actors(&mut self) -> PyResult<()> {
        self.line
            .update_location_of_all_actors()
            .map_err(line_error_to_py)
    }

    fn position_of_actor(&self, name: &str) -> PyResult<usize> {
        self.line.position_of_named(name).map_err(line_error_to_py)
    }

    fn names(&self) -> Vec<String> {
        self.line.names().into_iter().map(String::from).collect()
    }

    fn get_actor_position(&self, name: &str) -> PyResult<(f64, f64, f64)> {
        self.line
            .actor(name)
            .map(|actor| actor.position())
            .ok_or_else(|| line_error_to_py(LineError::NotFound(name.trim().to_string())))
    }

    /// Positions in queue order as a numpy array of shape [n_actors, 3]
    fn get_positions(&self) -> PyResult<Py<PyArray2<f64>>> {
        let mut flat = Vec::with_capacity(self.line.len() * 3);
        for actor in self.line.actors() {
            let (x, y, z) = actor.position();
            flat.extend_from_slice(&[x, y, z]);
        }
        let positions = Array2::from_shape_vec((self.line.len(), 3), flat)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Python::with_gil(|py| Ok(positions.into_pyarray(py).unbind()))
    }

    fn describe_rank(&self, name: &str) -> PyResult<String> {
        let placement = self.line.placement(name).map_err(line_error_to_py)?;
        Ok(rank_message(&placement))
    }

    /// Returns the hovered actor's place in line as of now
    fn pointer_over(&mut self, name: &str) -> PyResult<String> {
        self.tracker
            .announce_over(&self.line, name, &mut self.announcer)
            .map_err(line_error_to_py)
    }

    fn pointer_out(&mut self) {
        self.tracker.pointer_out(&self.line, &mut self.announcer);
    }

    /// (mesh scale, outline width) the renderer should draw the actor with
    fn highlight(&self, name: &str) -> PyResult<(f64, f64)> {
        let highlight = self
            .tracker
            .highlight_in(&self.line, name)
            .map_err(line_error_to_py)?;
        Ok((highlight.scale, highlight.outline_width()))
    }

    fn hovered(&self) -> Option<String> {
        self.tracker.hovered().map(String::from)
    }

    fn __len__(&self) -> usize {
        self.line.len()
    }
}

// Python module definition
#[pymodule]
#[pyo3(name = "_lib")]
fn actor_line(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ActorLineWrapper>()?;
    Ok(())
}
