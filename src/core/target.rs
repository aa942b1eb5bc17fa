//! Target fixtures: the hotspots a player labels.
//!
//! A `TargetSet` is fixed for the lifetime of an engine. It defines both the
//! labels available to the player (one per target) and the placements
//! required to complete the activity.

use std::borrow::Borrow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};

/// Target identifier (e.g. `"femur"`).
///
/// Borrows as `str`, so maps keyed by `TargetId` can be queried with `&str`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Create a new target ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point in illustration coordinates. Only presentation reads these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single matching point on the illustration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Unique key within a target set.
    pub id: TargetId,

    /// The correct answer for this target.
    pub expected_label: String,

    /// Where the drop zone is drawn.
    #[serde(default)]
    pub anchor: Point,

    /// Where the leader line from the drop zone ends.
    #[serde(default)]
    pub line_end: Point,
}

impl Target {
    /// Create a target with both points at the origin.
    pub fn new(id: impl Into<String>, expected_label: impl Into<String>) -> Self {
        Self {
            id: TargetId::new(id),
            expected_label: expected_label.into(),
            anchor: Point::default(),
            line_end: Point::default(),
        }
    }

    /// Set the drop-zone anchor (builder pattern).
    #[must_use]
    pub fn with_anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor = Point::new(x, y);
        self
    }

    /// Set the leader-line end point (builder pattern).
    #[must_use]
    pub fn with_line_end(mut self, x: f32, y: f32) -> Self {
        self.line_end = Point::new(x, y);
        self
    }
}

/// Validated, ordered collection of targets.
///
/// Order is the fixture order and is used wherever the engine reports
/// per-target data. Ids are unique; expected labels need not be.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Target>", into = "Vec<Target>")]
pub struct TargetSet {
    targets: Vec<Target>,
    index: FxHashMap<TargetId, usize>,
}

impl TargetSet {
    /// Build a target set, rejecting empty input and duplicate ids.
    pub fn new(targets: Vec<Target>) -> Result<Self> {
        if targets.is_empty() {
            return Err(MatchError::EmptyTargetSet);
        }

        let mut index = FxHashMap::default();
        for (i, target) in targets.iter().enumerate() {
            if index.insert(target.id.clone(), i).is_some() {
                return Err(MatchError::DuplicateTarget(target.id.clone()));
            }
        }

        Ok(Self { targets, index })
    }

    /// Load a target set from a JSON array of targets.
    pub fn from_json(json: &str) -> Result<Self> {
        let targets: Vec<Target> = serde_json::from_str(json)?;
        Self::new(targets)
    }

    /// Number of targets. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Target> {
        self.index.get(id).map(|&i| &self.targets[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a target, failing with `InvalidTarget` if it is unknown.
    pub fn require(&self, id: &str) -> Result<&Target> {
        self.get(id)
            .ok_or_else(|| MatchError::InvalidTarget(TargetId::new(id)))
    }

    /// Position of a target in fixture order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &TargetId> {
        self.targets.iter().map(|t| &t.id)
    }

    /// Every expected label, in fixture order. This is the full label set
    /// a fresh pool is drawn from.
    #[must_use]
    pub fn expected_labels(&self) -> Vec<String> {
        self.targets
            .iter()
            .map(|t| t.expected_label.clone())
            .collect()
    }
}

impl TryFrom<Vec<Target>> for TargetSet {
    type Error = MatchError;

    fn try_from(targets: Vec<Target>) -> Result<Self> {
        Self::new(targets)
    }
}

impl From<TargetSet> for Vec<Target> {
    fn from(set: TargetSet) -> Self {
        set.targets
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
