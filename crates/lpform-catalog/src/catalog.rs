use std::collections::BTreeMap;

use crate::example::ExampleProblem;
use crate::method::Method;

/// Read-only table of example problems, keyed by method then ordinal index
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    examples: BTreeMap<Method, Vec<ExampleProblem>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The examples shipped with the method pages
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    pub fn with_examples(mut self, method: Method, examples: Vec<ExampleProblem>) -> Self {
        self.examples.insert(method, examples);
        self
    }

    pub fn get(&self, method: Method, index: usize) -> Option<&ExampleProblem> {
        self.examples.get(&method).and_then(|list| list.get(index))
    }

    /// All examples for a method, empty when the method has none
    pub fn examples(&self, method: Method) -> &[ExampleProblem] {
        self.examples.get(&method).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn methods(&self) -> impl Iterator<Item = Method> + '_ {
        self.examples.keys().copied()
    }

    /// Every `(method, index, example)` triple in method order
    pub fn iter(&self) -> impl Iterator<Item = (Method, usize, &ExampleProblem)> {
        self.examples
            .iter()
            .flat_map(|(method, list)| list.iter().enumerate().map(move |(i, ex)| (*method, i, ex)))
    }

    pub fn len(&self) -> usize {
        self.examples.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "serde")]
impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::{ExpectedOutcome, SolutionValue};

    #[test]
    fn test_lookup_misses_are_none() {
        let catalog = Catalog::new().with_examples(
            Method::Simplex,
            vec![ExampleProblem::new("only", "", "1", "1", "1")],
        );
        assert!(catalog.get(Method::Simplex, 0).is_some());
        assert!(catalog.get(Method::Simplex, 1).is_none());
        assert!(catalog.get(Method::BigM, 0).is_none());
        assert!(catalog.examples(Method::TwoPhase).is_empty());
    }

    #[test]
    fn test_builtin_simplex_first_example() {
        let catalog = Catalog::builtin();
        let example = catalog.get(Method::Simplex, 0).unwrap();
        assert_eq!(example.c, "3,5");
        assert_eq!(example.a, "2,3\n4,1");
        assert_eq!(example.b, "8,7");
        assert!(!example.minimize);

        let solution = example.expected_solution().unwrap();
        assert_eq!(solution.objective, SolutionValue::Number(13.33));
        assert_eq!(
            solution.variables,
            vec![SolutionValue::Number(1.0), SolutionValue::Text("8/3".to_string())]
        );
    }

    #[test]
    fn test_builtin_big_m_infeasible_example() {
        let catalog = Catalog::builtin();
        let example = catalog.get(Method::BigM, 4).unwrap();
        assert_eq!(example.ge_constraints.as_deref(), Some("0"));
        assert_eq!(example.expected, Some(ExpectedOutcome::Infeasible));
    }

    #[test]
    fn test_builtin_examples_parse() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.examples(Method::Simplex).len(), 4);
        assert_eq!(catalog.examples(Method::BigM).len(), 5);
        assert_eq!(catalog.examples(Method::TwoPhase).len(), 4);

        for (method, index, example) in catalog.iter() {
            let input = example
                .to_input()
                .unwrap_or_else(|e| panic!("{method}[{index}] does not parse: {e}"));
            if let Some(solution) = example.expected_solution() {
                assert_eq!(
                    solution.variables.len(),
                    input.num_variables(),
                    "{method}[{index}] expected solution arity"
                );
            }
        }
    }

    #[test]
    fn test_simplex_examples_have_no_index_lists() {
        for example in Catalog::builtin().examples(Method::Simplex) {
            assert!(example.eq_constraints.is_none());
            assert!(example.ge_constraints.is_none());
            assert!(example.penalty.is_none());
        }
    }

    #[test]
    fn test_iter_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<(Method, usize)> = catalog.iter().map(|(m, i, _)| (m, i)).take(5).collect();
        assert_eq!(
            keys,
            vec![
                (Method::Simplex, 0),
                (Method::Simplex, 1),
                (Method::Simplex, 2),
                (Method::Simplex, 3),
                (Method::BigM, 0)
            ]
        );
        assert_eq!(catalog.len(), 13);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip_keeps_method_keys() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"granm\""));
        assert!(json.contains("\"dosfases\""));
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back.len(), catalog.len());
        assert_eq!(back.get(Method::BigM, 4), catalog.get(Method::BigM, 4));
    }
}
