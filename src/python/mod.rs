//! Python bindings for the hotspot-match engine.
//!
//! Lets a Python host drive a session and receive the completion event.
//!
//! # Quick Start
//!
//! ```python
//! import hotspot_match as hm
//!
//! events = []
//! session = hm.MatchSession(seed=42, on_complete=events.append)
//!
//! session.place("Fémur", "femur")
//! session.unplace("femur")
//!
//! # Validate and read the feedback
//! score = session.validate()
//! print(score, session.score_message, events[0]["blockId"])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// hotspot_match: a drag-and-drop label matching engine.
///
/// This module provides:
/// - MatchSession, one playable activity (the bone quiz by default)
/// - Action, the discrete presentation inputs
#[pymodule]
fn hotspot_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyMatchSession>()?;

    Ok(())
}
