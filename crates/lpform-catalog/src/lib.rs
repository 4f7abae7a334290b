mod builtin;
mod catalog;
mod example;
mod input;
mod method;

pub use catalog::Catalog;
pub use example::{ExampleProblem, ExpectedOutcome, ExpectedSolution, SolutionValue};
pub use input::{ConstraintSense, InputError, ProblemInput};
pub use method::{Method, UnknownMethod};
