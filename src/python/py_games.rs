//! Session bindings for Python.

use std::collections::HashMap;

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tracing::warn;

use crate::core::{GameRng, MatchConfig, OverwritePolicy, Target, TargetSet};
use crate::engine::MatchEngine;
use crate::games::skeleton;
use crate::notify::{CompletionEvent, CompletionSink};

use super::py_core::{to_py_err, PyAction};

/// Forwards completion events to a Python callable as a dict.
struct PyCallbackSink {
    callback: Option<Py<PyAny>>,
}

impl CompletionSink for PyCallbackSink {
    fn notify(&mut self, event: &CompletionEvent) {
        let Some(callback) = &self.callback else {
            return;
        };

        Python::with_gil(|py| {
            let delivered = event_dict(py, event)
                .and_then(|dict| callback.call1(py, (dict,)).map(|_| ()));
            if let Err(e) = delivered {
                warn!(error = %e, activity_id = %event.activity_id, "completion callback failed");
            }
        });
    }
}

fn event_dict<'py>(py: Python<'py>, event: &CompletionEvent) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("type", &event.kind)?;
    dict.set_item("blockId", &event.activity_id)?;
    dict.set_item("completed", event.completed)?;
    dict.set_item("score", event.score)?;
    dict.set_item("maxScore", event.max_score)?;
    Ok(dict)
}

/// Python wrapper for a matching session.
///
/// Without `targets`, plays the built-in bone activity.
#[pyclass(name = "MatchSession")]
pub struct PyMatchSession {
    engine: MatchEngine<PyCallbackSink, GameRng>,
}

#[pymethods]
impl PyMatchSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - targets: list of (id, expected_label) pairs
    /// - activity_id: id reported on completion
    /// - seed: RNG seed for a reproducible pool order
    /// - on_complete: callable receiving the completion dict
    /// - return_overwritten: put displaced labels back in the pool
    /// - allow_abort: allow reset while playing
    #[new]
    #[pyo3(signature = (
        targets = None,
        activity_id = None,
        seed = None,
        on_complete = None,
        return_overwritten = false,
        allow_abort = false
    ))]
    fn new(
        targets: Option<Vec<(String, String)>>,
        activity_id: Option<String>,
        seed: Option<u64>,
        on_complete: Option<Py<PyAny>>,
        return_overwritten: bool,
        allow_abort: bool,
    ) -> PyResult<Self> {
        let (target_set, mut config) = match targets {
            Some(pairs) => {
                let set = TargetSet::new(
                    pairs
                        .into_iter()
                        .map(|(id, label)| Target::new(id, label))
                        .collect(),
                )
                .map_err(to_py_err)?;
                (set, MatchConfig::default())
            }
            None => (skeleton::targets().map_err(to_py_err)?, skeleton::config()),
        };

        if let Some(id) = activity_id {
            config.activity_id = id;
        }
        if return_overwritten {
            config.overwrite_policy = OverwritePolicy::ReturnToPool;
        }
        config.allow_abort = allow_abort;
        config.seed = seed;

        let sink = PyCallbackSink {
            callback: on_complete,
        };
        Ok(Self {
            engine: MatchEngine::new(target_set, config, sink),
        })
    }

    /// Drop a label onto a target. Returns the displaced label, if any.
    fn place(&mut self, label: &str, target: &str) -> PyResult<Option<String>> {
        self.engine.place(label, target).map_err(to_py_err)
    }

    /// Take the label off a target. Returns the label.
    fn unplace(&mut self, target: &str) -> PyResult<String> {
        self.engine.unplace(target).map_err(to_py_err)
    }

    /// Grade the session and return the score.
    fn validate(&mut self) -> PyResult<u8> {
        self.engine.validate().map_err(to_py_err)
    }

    fn reset(&mut self) -> PyResult<()> {
        self.engine.reset().map_err(to_py_err)
    }

    /// Apply an Action.
    fn apply(&mut self, action: &PyAction) -> PyResult<()> {
        self.engine.apply(&action.0).map(|_| ()).map_err(to_py_err)
    }

    /// Every action currently accepted.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.engine
            .legal_actions()
            .into_iter()
            .map(PyAction)
            .collect()
    }

    /// "playing" or "finished".
    #[getter]
    fn phase(&self) -> String {
        self.engine.phase().to_string()
    }

    #[getter]
    fn pool(&self) -> Vec<String> {
        self.engine.pool().iter().cloned().collect()
    }

    #[getter]
    fn placements(&self) -> HashMap<String, String> {
        self.engine
            .placements()
            .iter()
            .map(|(id, label)| (id.to_string(), label.clone()))
            .collect()
    }

    #[getter]
    fn results(&self) -> HashMap<String, bool> {
        self.engine
            .results()
            .iter()
            .map(|(id, ok)| (id.to_string(), *ok))
            .collect()
    }

    #[getter]
    fn score(&self) -> u8 {
        self.engine.score()
    }

    #[getter]
    fn score_message(&self) -> Option<&'static str> {
        self.engine.score_message()
    }

    /// Whether the validate control should be offered.
    #[getter]
    fn can_validate(&self) -> bool {
        self.engine.controls().validate
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchSession(activity={}, phase={}, placed={})",
            self.engine.config().activity_id,
            self.engine.phase(),
            self.engine.progress()
        )
    }
}
