use std::fmt;

use crate::input::{InputError, ProblemInput};

/// A canned problem that can be loaded into a method page's form.
///
/// The vector and matrix fields hold the exact text written into the form:
/// comma separated values, with matrix rows separated by newlines.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleProblem {
    pub name: String,
    pub description: String,
    /// Objective coefficients
    pub c: String,
    /// Constraint matrix
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: String,
    /// Right-hand side
    pub b: String,
    pub minimize: bool,
    /// Zero-based rows treated as equalities
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub eq_constraints: Option<String>,
    /// Zero-based rows treated as `>=`
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ge_constraints: Option<String>,
    /// Big-M penalty coefficient
    #[cfg_attr(
        feature = "serde",
        serde(rename = "M", default, skip_serializing_if = "Option::is_none")
    )]
    pub penalty: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "expected_solution", default, skip_serializing_if = "Option::is_none")
    )]
    pub expected: Option<ExpectedOutcome>,
}

/// What solving the example is known to produce
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedOutcome {
    Optimal(ExpectedSolution),
    Infeasible,
    Unbounded,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedSolution {
    /// Optimal objective value
    #[cfg_attr(feature = "serde", serde(rename = "Z"))]
    pub objective: SolutionValue,
    /// Decision variable values, `x1` first
    pub variables: Vec<SolutionValue>,
}

/// A value shown in the solution badge, either numeric or an exact fraction like `8/3`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionValue {
    Number(f64),
    Text(String),
}

impl ExampleProblem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        c: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            c: c.into(),
            a: a.into(),
            b: b.into(),
            minimize: false,
            eq_constraints: None,
            ge_constraints: None,
            penalty: None,
            expected: None,
        }
    }

    pub fn minimizing(mut self) -> Self {
        self.minimize = true;
        self
    }

    pub fn with_eq(mut self, rows: impl Into<String>) -> Self {
        self.eq_constraints = Some(rows.into());
        self
    }

    pub fn with_ge(mut self, rows: impl Into<String>) -> Self {
        self.ge_constraints = Some(rows.into());
        self
    }

    pub fn with_penalty(mut self, m: f64) -> Self {
        self.penalty = Some(m);
        self
    }

    pub fn with_optimum(mut self, objective: SolutionValue, variables: Vec<SolutionValue>) -> Self {
        self.expected = Some(ExpectedOutcome::Optimal(ExpectedSolution { objective, variables }));
        self
    }

    pub fn infeasible(mut self) -> Self {
        self.expected = Some(ExpectedOutcome::Infeasible);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.expected = Some(ExpectedOutcome::Unbounded);
        self
    }

    /// The optimal solution, if one is recorded
    pub fn expected_solution(&self) -> Option<&ExpectedSolution> {
        match &self.expected {
            Some(ExpectedOutcome::Optimal(s)) => Some(s),
            _ => None,
        }
    }

    /// Parse the example's form text into numeric form
    pub fn to_input(&self) -> Result<ProblemInput, InputError> {
        ProblemInput::parse(
            &self.c,
            &self.a,
            &self.b,
            self.eq_constraints.as_deref().unwrap_or(""),
            self.ge_constraints.as_deref().unwrap_or(""),
            self.minimize,
        )
    }
}

impl ExpectedSolution {
    /// Variable values paired with their 1-indexed `x{i}` labels
    pub fn labeled_variables(&self) -> impl Iterator<Item = (String, &SolutionValue)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("x{}", i + 1), v))
    }
}

impl fmt::Display for SolutionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionValue::Number(n) => write!(f, "{}", n),
            SolutionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for SolutionValue {
    fn from(n: f64) -> Self {
        SolutionValue::Number(n)
    }
}

impl From<&str> for SolutionValue {
    fn from(s: &str) -> Self {
        SolutionValue::Text(s.to_string())
    }
}
