//! Python bindings for the match engine
//!
//! The backend initializes the catalog once at startup; every search then
//! runs against the cached engine without re-deserializing the catalog.
//! Criteria arrive as a dict (or any object with the matching attributes)
//! using the wizard's camelCase field names.

use crate::criteria::Criteria;
use crate::engine::{MatchEngine, MatchReport};
use crate::error::MatchError;
use crate::tier::TierPolicy;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::prelude::*;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods};
use std::sync::Arc;

/// Global cached engine
static CACHED_ENGINE: OnceCell<Arc<RwLock<MatchEngine>>> = OnceCell::new();

/// Helper to get an optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    }
}

fn extract_string(obj: &Bound<'_, PyAny>, name: &str) -> Option<String> {
    get_attr_opt(obj, name).and_then(|v| v.extract().ok())
}

/// Accept numbers or numeric strings, matching the form state the wizard
/// submits
fn extract_number(obj: &Bound<'_, PyAny>, name: &str) -> Option<f64> {
    let value = get_attr_opt(obj, name)?;
    if let Ok(n) = value.extract::<f64>() {
        return Some(n);
    }
    value.extract::<String>().ok()?.trim().parse().ok()
}

fn deserialize_criteria(obj: &Bound<'_, PyAny>) -> PyResult<Criteria> {
    let mut criteria = Criteria {
        name: extract_string(obj, "name"),
        college_type: extract_string(obj, "collegeType"),
        country: extract_string(obj, "country"),
        state: extract_string(obj, "state"),
        degree_level: extract_string(obj, "degreeLevel"),
        stream: extract_string(obj, "stream"),
        specialization: extract_string(obj, "specialization"),
        board: extract_string(obj, "board"),
        major: extract_string(obj, "major"),
        university_type: extract_string(obj, "universityType"),
        duration: extract_string(obj, "duration"),
        budget: extract_number(obj, "budget"),
        student_percentage: extract_number(obj, "studentPercentage"),
        exam_scores: Default::default(),
    };

    if let Some(exams) = get_attr_opt(obj, "examScores") {
        if let Ok(dict) = exams.downcast::<PyDict>() {
            for (key, value) in dict.iter() {
                let exam: String = key.extract()?;
                let score: f64 = if let Ok(n) = value.extract::<f64>() {
                    n
                } else {
                    let raw: String = value.extract()?;
                    raw.trim().parse().map_err(|_| {
                        MatchError::InvalidCriteria(format!(
                            "invalid score for {}: {}",
                            exam, raw
                        ))
                    })?
                };
                criteria.exam_scores.insert(exam, score);
            }
        }
    }

    Ok(criteria)
}

fn parse_policy(policy: &str, percentage: Option<f64>) -> Result<TierPolicy, MatchError> {
    match policy {
        "chances" => Ok(TierPolicy::AdmissionChances),
        "buffer" => percentage
            .map(|percentage| TierPolicy::StudentBuffer { percentage })
            .ok_or_else(|| {
                MatchError::InvalidPolicy(
                    "buffer policy requires a student percentage".to_string(),
                )
            }),
        other => Err(MatchError::InvalidPolicy(other.to_string())),
    }
}

fn cached_engine() -> PyResult<Arc<RwLock<MatchEngine>>> {
    CACHED_ENGINE
        .get()
        .cloned()
        .ok_or_else(|| PyErr::from(MatchError::CatalogNotInitialized))
}

/// Initialize the college catalog (call once at startup)
///
/// Caches the parsed catalog in Rust memory so searches never re-deserialize
/// it. Calling again replaces the cached catalog.
///
/// # Arguments
/// * `json` - JSON array of college records as returned by the listing
///   endpoints
#[pyfunction]
fn init_catalog(json: &str) -> PyResult<()> {
    let engine = MatchEngine::from_json(json).map_err(PyErr::from)?;

    if let Some(existing) = CACHED_ENGINE.get() {
        let mut guard = existing.write();
        *guard = engine;
    } else {
        let _ = CACHED_ENGINE.set(Arc::new(RwLock::new(engine)));
    }

    Ok(())
}

/// Check if the catalog is initialized
#[pyfunction]
fn is_catalog_initialized() -> bool {
    CACHED_ENGINE.get().is_some()
}

/// Run a search against the cached catalog
///
/// # Arguments
/// * `criteria` - Criteria dict with the wizard's camelCase field names
/// * `policy` - "chances" (Hope/Approach/Secured) or "buffer"
///   (Elite/Target/Guaranteed)
/// * `percentage` - The student's percentage, required by the buffer policy
///
/// # Raises
/// RuntimeError if `init_catalog` was not called first
#[pyfunction]
#[pyo3(signature = (criteria, policy="chances", percentage=None))]
fn match_colleges(
    criteria: &Bound<'_, PyAny>,
    policy: &str,
    percentage: Option<f64>,
) -> PyResult<MatchSession> {
    let engine_arc = cached_engine()?;
    let criteria = deserialize_criteria(criteria)?;
    let policy = parse_policy(policy, percentage)?;

    let engine = engine_arc.read();
    Ok(MatchSession::new(engine.run(&criteria, policy)))
}

/// Run a search asynchronously
///
/// The match runs in a background thread via Tokio's spawn_blocking so the
/// Python event loop stays responsive on large catalogs.
///
/// # Raises
/// RuntimeError if `init_catalog` was not called first
#[pyfunction]
#[pyo3(signature = (criteria, policy="chances", percentage=None))]
fn match_colleges_async<'py>(
    py: Python<'py>,
    criteria: &Bound<'_, PyAny>,
    policy: &str,
    percentage: Option<f64>,
) -> PyResult<Bound<'py, PyAny>> {
    let engine_arc = cached_engine()?;
    let criteria = deserialize_criteria(criteria)?;
    let policy = parse_policy(policy, percentage)?;

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let session = tokio::task::spawn_blocking(move || {
            let engine = engine_arc.read();
            MatchSession::new(engine.run(&criteria, policy))
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Match task panicked: {}",
                e
            ))
        })?;

        Ok(session)
    })
}

/// Search outcome held in Rust memory
///
/// Python reads counts and labels through cheap getters and pulls the full
/// tiered records as JSON only when it needs them.
#[pyclass]
pub struct MatchSession {
    report: MatchReport,
}

impl MatchSession {
    fn new(report: MatchReport) -> Self {
        Self { report }
    }
}

#[pymethods]
impl MatchSession {
    /// Catalog size
    #[getter]
    fn total(&self) -> usize {
        self.report.total
    }

    /// Number of records matching all criteria
    #[getter]
    fn matched(&self) -> usize {
        self.report.matched
    }

    /// (low, mid, high) bucket sizes
    #[getter]
    fn counts(&self) -> (usize, usize, usize) {
        self.report.counts()
    }

    /// Policy-specific tier labels, least to most likely admission
    #[getter]
    fn labels(&self) -> Vec<String> {
        self.report
            .buckets
            .labels()
            .iter()
            .map(|label| label.to_string())
            .collect()
    }

    /// True when nothing matched; the UI shows its "adjust filters" message
    fn is_empty(&self) -> bool {
        self.report.is_empty()
    }

    /// Full report (buckets included) as JSON
    fn to_json(&self) -> PyResult<String> {
        self.report.to_json().map_err(PyErr::from)
    }
}

/// Python module definition
#[pymodule]
fn college_match_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(match_colleges, m)?)?;
    m.add_function(wrap_pyfunction!(match_colleges_async, m)?)?;
    m.add_class::<MatchSession>()?;
    Ok(())
}
