use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),
    #[error("Invalid number in '{field}': {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Matrix A has {rows} rows but vector b has {rhs} elements")]
    RowCountMismatch { rows: usize, rhs: usize },
    #[error("Row {row} of matrix A has {found} columns, expected {expected} to match vector c")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid row index in '{field}': {value}")]
    InvalidIndex { field: &'static str, value: String },
    #[error("Row index {index} in '{field}' is out of range for {rows} constraints")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        rows: usize,
    },
    #[error("Row {0} is listed as both an equality and a >= constraint")]
    ConflictingSense(usize),
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

/// Numeric view of the problem form
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInput {
    pub objective: Vec<f64>,
    pub matrix: Vec<Vec<f64>>,
    pub rhs: Vec<f64>,
    /// One entry per matrix row
    pub senses: Vec<ConstraintSense>,
    pub minimize: bool,
}

impl ProblemInput {
    /// Parse the raw form text.
    ///
    /// `eq` and `ge` are comma separated zero-based row indices; rows listed in
    /// neither are `<=` constraints.
    pub fn parse(
        c: &str,
        a: &str,
        b: &str,
        eq: &str,
        ge: &str,
        minimize: bool,
    ) -> Result<Self, InputError> {
        let objective = parse_vector("c", c)?;
        let rhs = parse_vector("b", b)?;
        if a.trim().is_empty() {
            return Err(InputError::MissingField("A"));
        }
        let matrix = a
            .lines()
            .filter(|row| !row.trim().is_empty())
            .map(|row| parse_numbers("A", row))
            .collect::<Result<Vec<_>, _>>()?;

        if matrix.len() != rhs.len() {
            return Err(InputError::RowCountMismatch {
                rows: matrix.len(),
                rhs: rhs.len(),
            });
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != objective.len() {
                return Err(InputError::ColumnCountMismatch {
                    row: i,
                    expected: objective.len(),
                    found: row.len(),
                });
            }
        }

        let rows = matrix.len();
        let mut senses = vec![ConstraintSense::Le; rows];
        for index in parse_indices("eq_constraints", eq, rows)? {
            senses[index] = ConstraintSense::Eq;
        }
        for index in parse_indices("ge_constraints", ge, rows)? {
            if senses[index] == ConstraintSense::Eq {
                return Err(InputError::ConflictingSense(index));
            }
            senses[index] = ConstraintSense::Ge;
        }

        Ok(Self {
            objective,
            matrix,
            rhs,
            senses,
            minimize,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rhs.len()
    }
}

fn parse_vector(field: &'static str, text: &str) -> Result<Vec<f64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::MissingField(field));
    }
    parse_numbers(field, text)
}

fn parse_numbers(field: &'static str, text: &str) -> Result<Vec<f64>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>().map_err(|_| InputError::InvalidNumber {
                field,
                value: s.to_string(),
            })
        })
        .collect()
}

fn parse_indices(field: &'static str, text: &str, rows: usize) -> Result<Vec<usize>, InputError> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let index = s.parse::<usize>().map_err(|_| InputError::InvalidIndex {
                field,
                value: s.to_string(),
            })?;
            if index >= rows {
                return Err(InputError::IndexOutOfRange { field, index, rows });
            }
            Ok(index)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_problem() {
        let input = ProblemInput::parse("3,5", "2,3\n4,1", "8,7", "", "", false).unwrap();
        assert_eq!(input.objective, vec![3.0, 5.0]);
        assert_eq!(input.matrix, vec![vec![2.0, 3.0], vec![4.0, 1.0]]);
        assert_eq!(input.rhs, vec![8.0, 7.0]);
        assert_eq!(input.senses, vec![ConstraintSense::Le, ConstraintSense::Le]);
        assert!(!input.minimize);
    }

    #[test]
    fn test_blank_items_and_rows_are_skipped() {
        let input =
            ProblemInput::parse(" 1, 2, ", "1,1\n\n  \n2, 0\n", "4,5,", "", "", true).unwrap();
        assert_eq!(input.num_variables(), 2);
        assert_eq!(input.num_constraints(), 2);
        assert!(input.minimize);
    }

    #[test]
    fn test_windows_line_endings() {
        let input = ProblemInput::parse("1,2", "1,1\r\n2,0", "4,5", "", "", false).unwrap();
        assert_eq!(input.matrix[1], vec![2.0, 0.0]);
    }

    #[test]
    fn test_senses_from_index_lists() {
        let input = ProblemInput::parse("1,1", "1,0\n0,1\n1,1", "1,2,3", "2", "0", false).unwrap();
        assert_eq!(
            input.senses,
            vec![ConstraintSense::Ge, ConstraintSense::Le, ConstraintSense::Eq]
        );
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ProblemInput::parse("", "1", "1", "", "", false),
            Err(InputError::MissingField("c"))
        );
        assert_eq!(
            ProblemInput::parse("1", "  ", "1", "", "", false),
            Err(InputError::MissingField("A"))
        );
        assert_eq!(
            ProblemInput::parse("1", "1", "\n", "", "", false),
            Err(InputError::MissingField("b"))
        );
    }

    #[test]
    fn test_invalid_number() {
        let err = ProblemInput::parse("1,x", "1,1", "1", "", "", false).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: "c",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_dimension_mismatches() {
        assert_eq!(
            ProblemInput::parse("1,1", "1,1\n1,1", "1", "", "", false),
            Err(InputError::RowCountMismatch { rows: 2, rhs: 1 })
        );
        assert_eq!(
            ProblemInput::parse("1,1", "1,1\n1", "1,2", "", "", false),
            Err(InputError::ColumnCountMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_index_errors() {
        assert_eq!(
            ProblemInput::parse("1", "1\n1", "1,2", "2", "", false),
            Err(InputError::IndexOutOfRange {
                field: "eq_constraints",
                index: 2,
                rows: 2
            })
        );
        assert_eq!(
            ProblemInput::parse("1", "1\n1", "1,2", "", "-1", false),
            Err(InputError::InvalidIndex {
                field: "ge_constraints",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            ProblemInput::parse("1", "1\n1", "1,2", "1", "0,1", false),
            Err(InputError::ConflictingSense(1))
        );
    }
}
