//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, MatchError};

/// Map an engine error onto a Python exception.
///
/// Bad ids and labels raise `ValueError`; wrong-phase calls raise
/// `RuntimeError`.
pub(crate) fn to_py_err(err: MatchError) -> PyErr {
    match err {
        MatchError::PreconditionViolation { .. } => PyRuntimeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Drop `label` onto `target`.
    #[staticmethod]
    fn place(label: String, target: String) -> Self {
        Self(Action::place(label, target))
    }

    /// Take the label off `target`.
    #[staticmethod]
    fn unplace(target: String) -> Self {
        Self(Action::unplace(target))
    }

    #[staticmethod]
    fn validate() -> Self {
        Self(Action::Validate)
    }

    #[staticmethod]
    fn reset() -> Self {
        Self(Action::Reset)
    }

    /// Operation name ("place", "unplace", "validate", "reset").
    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        match &self.0 {
            Action::Place { label, target } => format!("Action.place({label:?}, {:?})", target.as_str()),
            Action::Unplace { target } => format!("Action.unplace({:?})", target.as_str()),
            Action::Validate => "Action.validate()".to_string(),
            Action::Reset => "Action.reset()".to_string(),
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
