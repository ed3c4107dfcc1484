//! Named sequences of construction steps.
//!
//! A [`Pipeline`] is an ordered list of fallible steps folded together with
//! [`Outcome::and_then`]. Running it stops at the first failure and reports
//! which steps completed and which one failed.

use std::fmt;

use super::outcome::Outcome;

type StepFn<'a, V> = Box<dyn FnOnce(V) -> Outcome<V> + 'a>;

struct Step<'a, V> {
    name: String,
    run: StepFn<'a, V>,
}

/// An ordered sequence of named construction steps.
///
/// # Examples
///
/// ```
/// use assetpath::pipeline::{Outcome, Pipeline};
///
/// let report = Pipeline::new("Make VRM Prefab")
///     .step("meta", |mut parts: Vec<String>| {
///         parts.push("Meta.asset".to_string());
///         Outcome::ok(parts)
///     })
///     .step("blend shapes", |_| Outcome::err("no blend shape clips"))
///     .step("first person", |parts| Outcome::ok(parts))
///     .run(Vec::new());
///
/// assert_eq!(report.outcome, Outcome::err("no blend shape clips"));
/// assert_eq!(report.completed, vec!["meta".to_string()]);
/// assert_eq!(report.failed_step.as_deref(), Some("blend shapes"));
/// ```
pub struct Pipeline<'a, V> {
    description: String,
    steps: Vec<Step<'a, V>>,
}

impl<'a, V> Pipeline<'a, V> {
    /// Creates an empty pipeline with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn step<F>(mut self, name: impl Into<String>, run: F) -> Self
    where
        F: FnOnce(V) -> Outcome<V> + 'a,
    {
        self.steps.push(Step {
            name: name.into(),
            run: Box::new(run),
        });
        self
    }

    /// The pipeline description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Names of the steps in execution order.
    #[must_use]
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Thread `initial` through every step, stopping at the first failure.
    pub fn run(self, initial: V) -> PipelineReport<V> {
        log::debug!(
            "running pipeline '{}' with {} step(s)",
            self.description,
            self.steps.len()
        );

        let mut completed = Vec::new();
        let mut failed_step = None;
        let mut outcome = Outcome::ok(initial);

        for step in self.steps {
            let name = step.name;
            let run = step.run;
            outcome = outcome.and_then(|value| {
                log::debug!("step '{name}' started");
                let result = run(value);
                match &result {
                    Outcome::Ok(_) => completed.push(name),
                    Outcome::Err(message) => {
                        log::debug!("step '{name}' failed: {message}");
                        failed_step = Some(name);
                    }
                }
                result
            });
            if outcome.is_err() {
                break;
            }
        }

        PipelineReport {
            description: self.description,
            outcome,
            completed,
            failed_step,
        }
    }
}

impl<V> fmt::Debug for Pipeline<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("description", &self.description)
            .field("steps", &self.step_names())
            .finish()
    }
}

/// What happened when a pipeline ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport<V> {
    /// Description of the pipeline that ran.
    pub description: String,

    /// Final outcome: the last step's value, or the first failure.
    pub outcome: Outcome<V>,

    /// Steps that succeeded, in order.
    pub completed: Vec<String>,

    /// The step that failed, if any.
    pub failed_step: Option<String>,
}

impl<V> PipelineReport<V> {
    /// Check whether every step succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_pipeline_returns_initial() {
        let pipeline: Pipeline<'_, i32> = Pipeline::new("noop");
        assert!(pipeline.is_empty());
        let report = pipeline.run(42);
        assert_eq!(report.outcome, Outcome::ok(42));
        assert!(report.completed.is_empty());
        assert!(report.failed_step.is_none());
        assert!(report.succeeded());
    }

    #[test]
    fn test_all_steps_succeed() {
        let report = Pipeline::new("count")
            .step("one", |v: u32| Outcome::ok(v + 1))
            .step("two", |v| Outcome::ok(v + 2))
            .run(0);
        assert_eq!(report.outcome, Outcome::ok(3));
        assert_eq!(report.completed, vec!["one", "two"]);
        assert_eq!(report.description, "count");
    }

    #[test]
    fn test_stops_at_first_failure() {
        let third_calls = Cell::new(0);
        let report = Pipeline::new("build")
            .step("f1", |v: i32| Outcome::ok(v))
            .step("f2", |_| Outcome::err("boom"))
            .step("f3", |v| {
                third_calls.set(third_calls.get() + 1);
                Outcome::ok(v)
            })
            .run(0);

        assert_eq!(report.outcome, Outcome::err("boom"));
        assert_eq!(report.completed, vec!["f1"]);
        assert_eq!(report.failed_step.as_deref(), Some("f2"));
        assert_eq!(third_calls.get(), 0);
        assert!(!report.succeeded());
    }

    #[test]
    fn test_matches_manual_and_then_chain() {
        let f = |v: i32| if v < 0 { Outcome::err("negative") } else { Outcome::ok(v - 5) };
        let g = |v: i32| Outcome::ok(v * 3);

        for start in [-1, 0, 3, 10] {
            let manual = Outcome::ok(start).and_then(f).and_then(f).and_then(g);
            let report = Pipeline::new("compare")
                .step("f", f)
                .step("f again", f)
                .step("g", g)
                .run(start);
            assert_eq!(report.outcome, manual);
        }
    }

    #[test]
    fn test_step_names_and_debug() {
        let pipeline = Pipeline::new("Make VRM Prefab")
            .step("meta", |v: ()| Outcome::ok(v))
            .step("secondary", |v| Outcome::ok(v));
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.step_names(), vec!["meta", "secondary"]);
        assert_eq!(pipeline.description(), "Make VRM Prefab");
        assert!(format!("{pipeline:?}").contains("secondary"));
    }
}
