use crate::catalog::Catalog;
use crate::example::{ExampleProblem, SolutionValue};
use crate::method::Method;

fn num(n: f64) -> SolutionValue {
    SolutionValue::Number(n)
}

fn frac(s: &str) -> SolutionValue {
    SolutionValue::Text(s.to_string())
}

pub(crate) fn catalog() -> Catalog {
    Catalog::new()
        .with_examples(Method::Simplex, simplex())
        .with_examples(Method::BigM, big_m())
        .with_examples(Method::TwoPhase, two_phase())
}

fn simplex() -> Vec<ExampleProblem> {
    vec![
        ExampleProblem::new(
            "Example 1 - Production mix",
            "Maximize: 3x₁ + 5x₂",
            "3,5",
            "2,3\n4,1",
            "8,7",
        )
        .with_optimum(num(13.33), vec![num(1.0), frac("8/3")]),
        ExampleProblem::new(
            "Example 2 - Workshop capacity",
            "Maximize: 5x₁ + 7x₂",
            "5,7",
            "2,3\n1,1\n1,0",
            "12,5,3",
        )
        .with_optimum(num(29.0), vec![num(3.0), num(2.0)]),
        ExampleProblem::new(
            "Example 3 - Transport",
            "Maximize: 3x₁ + 4x₂ + 6x₃",
            "3,4,6",
            "1,1,1\n2,1,0\n0,1,2",
            "10,8,7",
        )
        .with_optimum(num(33.0), vec![num(4.0), num(0.0), frac("7/2")]),
        ExampleProblem::new(
            "Example 4 - Investment",
            "Maximize: 0.2x₁ + 0.3x₂ + 0.1x₃",
            "0.2,0.3,0.1",
            "1,1,1\n0.5,0.2,0.3\n0.1,0.4,0.2",
            "1000,400,300",
        )
        .with_optimum(num(266.67), vec![frac("1000/3"), frac("2000/3"), num(0.0)]),
    ]
}

fn big_m() -> Vec<ExampleProblem> {
    vec![
        ExampleProblem::new(
            "Example 1 - Big-M",
            "Maximize: 2x₁ + 3x₂ with one equality",
            "2,3",
            "1,1\n2,1\n1,2",
            "4,6,6",
        )
        .with_eq("0")
        .with_optimum(num(10.0), vec![num(2.0), num(2.0)]),
        ExampleProblem::new(
            "Example 2 - Mixed system",
            "Maximize: 3x₁ + 2x₂ + x₃ with two equalities",
            "3,2,1",
            "1,1,1\n2,1,0\n1,0,1",
            "6,8,4",
        )
        .with_eq("1,2")
        .with_optimum(num(14.0), vec![num(3.0), num(2.0), num(1.0)]),
        ExampleProblem::new(
            "Example 3 - Minimization",
            "Minimize: 4x₁ + 5x₂ with one equality",
            "4,5",
            "2,1\n1,3\n1,1",
            "10,12,6",
        )
        .minimizing()
        .with_eq("2")
        .with_optimum(num(26.0), vec![num(4.0), num(2.0)]),
        ExampleProblem::new(
            "Example 4 - Minimum requirements",
            "Minimize: 2x₁ + 3x₂ with two ≥ constraints",
            "2,3",
            "1,1\n1,3\n1,0",
            "4,6,3",
        )
        .minimizing()
        .with_ge("0,1")
        .with_penalty(10000.0)
        .with_optimum(num(9.0), vec![num(3.0), num(1.0)]),
        ExampleProblem::new(
            "Example 5 - Infeasible",
            "Maximize: 3x₁ + 2x₂ with x₁ + x₂ ≥ 8 and x₁ + x₂ ≤ 4",
            "3,2",
            "1,1\n1,1",
            "8,4",
        )
        .with_ge("0")
        .infeasible(),
    ]
}

fn two_phase() -> Vec<ExampleProblem> {
    vec![
        ExampleProblem::new(
            "Example 1 - Two-Phase",
            "Maximize: 3x₁ + 2x₂ with two equalities",
            "3,2",
            "1,1\n1,-1\n2,1",
            "4,1,7",
        )
        .with_eq("0,1")
        .with_optimum(num(10.5), vec![frac("5/2"), frac("3/2")]),
        ExampleProblem::new(
            "Example 2 - Complex system",
            "Maximize: 2x₁ + 3x₂ + x₃ with two equalities",
            "2,3,1",
            "1,1,1\n2,1,-1\n1,2,1",
            "6,4,8",
        )
        .with_eq("1,2")
        .with_optimum(num(12.0), vec![num(2.0), num(2.0), num(2.0)]),
        ExampleProblem::new(
            "Example 3 - Mixed production",
            "Minimize: 5x₁ + 4x₂ + 3x₃ with one equality",
            "5,4,3",
            "1,0,1\n0,1,1\n1,1,0",
            "5,4,6",
        )
        .minimizing()
        .with_eq("0")
        .with_optimum(num(17.0), vec![num(1.0), num(0.0), num(4.0)]),
        ExampleProblem::new(
            "Example 4 - Unbounded",
            "Maximize: 2x₁ + x₂ with x₁ + x₂ ≥ 3 and x₁ ≤ 1",
            "2,1",
            "1,1\n1,0",
            "3,1",
        )
        .with_ge("0")
        .unbounded(),
    ]
}
