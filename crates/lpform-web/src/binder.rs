//! Writes catalog examples into the form and reads the form back out.

use std::cell::RefCell;
use std::rc::Rc;

use lpform_catalog::{Catalog, ExampleProblem, ExpectedSolution, Method, ProblemInput};

use crate::config::UiConfig;
use crate::error::UiError;
use crate::form::{self, FieldValue, FormAccess, field};
use crate::notify::{Notifier, Severity};

/// Rendered contents of the expected-solution badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionView {
    pub objective: String,
    /// `(label, value)` pairs, labels `x1`, `x2`, ...
    pub variables: Vec<(String, String)>,
}

impl SolutionView {
    pub fn from_solution(solution: &ExpectedSolution) -> Self {
        Self {
            objective: solution.objective.to_string(),
            variables: solution
                .labeled_variables()
                .map(|(label, value)| (label, value.to_string()))
                .collect(),
        }
    }
}

/// The page area showing an example's expected solution
pub trait SolutionDisplay {
    fn show(&self, view: &SolutionView);
    fn hide(&self);
}

/// In-memory solution display; `None` means hidden
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    shown: RefCell<Option<SolutionView>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<SolutionView> {
        self.shown.borrow().clone()
    }
}

impl SolutionDisplay for MemoryDisplay {
    fn show(&self, view: &SolutionView) {
        *self.shown.borrow_mut() = Some(view.clone());
    }

    fn hide(&self) {
        *self.shown.borrow_mut() = None;
    }
}

pub struct FormBinder {
    catalog: Rc<Catalog>,
    form: Rc<dyn FormAccess>,
    notifier: Rc<Notifier>,
    display: Option<Rc<dyn SolutionDisplay>>,
    penalty_default: String,
}

impl FormBinder {
    pub fn new(
        catalog: Rc<Catalog>,
        form: Rc<dyn FormAccess>,
        notifier: Rc<Notifier>,
        config: &UiConfig,
    ) -> Self {
        Self {
            catalog,
            form,
            notifier,
            display: None,
            penalty_default: config.penalty_default.clone(),
        }
    }

    pub fn with_display(mut self, display: Option<Rc<dyn SolutionDisplay>>) -> Self {
        self.display = display;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fill the form with a catalog example.
    ///
    /// A missing example leaves the form untouched and shows nothing.
    pub fn load_example(&self, method: Method, index: usize) -> Result<(), UiError> {
        let Some(example) = self.catalog.get(method, index) else {
            log::error!("example not found: {method}[{index}]");
            return Err(UiError::ExampleNotFound { method, index });
        };

        let form = self.form.as_ref();
        form.set_value(field::C, FieldValue::text(example.c.as_str()));
        form.set_value(field::A, FieldValue::text(example.a.as_str()));
        form.set_value(field::B, FieldValue::text(example.b.as_str()));
        form.set_value(field::MINIMIZE, FieldValue::Checked(example.minimize));
        form.set_value(
            field::EQ_CONSTRAINTS,
            FieldValue::text(example.eq_constraints.as_deref().unwrap_or("")),
        );
        form.set_value(
            field::GE_CONSTRAINTS,
            FieldValue::text(example.ge_constraints.as_deref().unwrap_or("")),
        );
        if method.uses_penalty() {
            let penalty = example
                .penalty
                .map(|m| m.to_string())
                .unwrap_or_else(|| self.penalty_default.clone());
            form.set_value(field::PENALTY, FieldValue::Text(penalty));
        }

        self.render_expected_solution(example);
        log::info!("loaded example {method}[{index}]");
        self.notifier
            .notify(&format!("Example loaded: {}", example.name), Severity::Success);
        Ok(())
    }

    /// Blank every control, restore the penalty default and tell the user
    pub fn clear_form(&self) {
        form::reset(self.form.as_ref(), &self.penalty_default);
        if let Some(display) = &self.display {
            display.hide();
        }
        self.notifier.notify("Form cleared", Severity::Info);
    }

    pub fn render_expected_solution(&self, example: &ExampleProblem) {
        let Some(display) = &self.display else {
            return;
        };
        match example.expected_solution() {
            Some(solution) => display.show(&SolutionView::from_solution(solution)),
            None => display.hide(),
        }
    }

    /// Parse the problem currently entered in the form
    pub fn read_problem(&self) -> Result<ProblemInput, UiError> {
        let form = self.form.as_ref();
        let minimize = form
            .value(field::MINIMIZE)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let input = ProblemInput::parse(
            &form::text_value(form, field::C),
            &form::text_value(form, field::A),
            &form::text_value(form, field::B),
            &form::text_value(form, field::EQ_CONSTRAINTS),
            &form::text_value(form, field::GE_CONSTRAINTS),
            minimize,
        )?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;
    use crate::notify::MemoryBanners;
    use crate::timer::ManualScheduler;
    use lpform_catalog::{ConstraintSense, InputError};
    use std::time::Duration;

    struct Fixture {
        binder: FormBinder,
        form: Rc<MemoryForm>,
        banners: Rc<MemoryBanners>,
        display: Rc<MemoryDisplay>,
    }

    fn fixture(method: Method) -> Fixture {
        let form = Rc::new(MemoryForm::for_method(method));
        let banners = Rc::new(MemoryBanners::new());
        let display = Rc::new(MemoryDisplay::new());
        let notifier = Rc::new(Notifier::new(
            banners.clone(),
            Rc::new(ManualScheduler::new()),
            Duration::from_secs(3),
        ));
        let binder = FormBinder::new(
            Rc::new(Catalog::builtin()),
            form.clone(),
            notifier,
            &UiConfig::default(),
        )
        .with_display(Some(display.clone()));
        Fixture {
            binder,
            form,
            banners,
            display,
        }
    }

    #[test]
    fn test_load_simplex_first_example() {
        let fx = fixture(Method::Simplex);
        fx.binder.load_example(Method::Simplex, 0).unwrap();

        assert_eq!(fx.form.text(field::C).as_deref(), Some("3,5"));
        assert_eq!(fx.form.text(field::A).as_deref(), Some("2,3\n4,1"));
        assert_eq!(fx.form.text(field::B).as_deref(), Some("8,7"));
        assert_eq!(fx.form.checked(field::MINIMIZE), Some(false));

        let view = fx.display.shown().unwrap();
        assert_eq!(view.objective, "13.33");
        assert_eq!(
            view.variables,
            vec![
                ("x1".to_string(), "1".to_string()),
                ("x2".to_string(), "8/3".to_string())
            ]
        );
        assert_eq!(
            fx.banners.history(),
            vec![(
                "Example loaded: Example 1 - Production mix".to_string(),
                Severity::Success
            )]
        );
    }

    #[test]
    fn test_load_infeasible_example_hides_solution() {
        let fx = fixture(Method::BigM);
        fx.binder.load_example(Method::BigM, 0).unwrap();
        assert!(fx.display.shown().is_some());

        fx.binder.load_example(Method::BigM, 4).unwrap();
        assert_eq!(fx.form.text(field::C).as_deref(), Some("3,2"));
        assert_eq!(fx.form.text(field::GE_CONSTRAINTS).as_deref(), Some("0"));
        assert!(fx.display.shown().is_none());
    }

    #[test]
    fn test_every_example_fills_core_fields() {
        for method in Method::ALL {
            let fx = fixture(method);
            for (index, example) in fx.binder.catalog().examples(method).iter().enumerate() {
                fx.binder.load_example(method, index).unwrap();
                assert_eq!(fx.form.text(field::C).as_deref(), Some(example.c.as_str()));
                assert_eq!(fx.form.text(field::A).as_deref(), Some(example.a.as_str()));
                assert_eq!(fx.form.text(field::B).as_deref(), Some(example.b.as_str()));
                assert_eq!(fx.form.checked(field::MINIMIZE), Some(example.minimize));
                if example.expected_solution().is_none() {
                    assert!(fx.display.shown().is_none(), "{method}[{index}]");
                }
            }
        }
    }

    #[test]
    fn test_missing_index_lists_are_cleared() {
        let fx = fixture(Method::BigM);
        fx.binder.load_example(Method::BigM, 3).unwrap();
        assert_eq!(fx.form.text(field::GE_CONSTRAINTS).as_deref(), Some("0,1"));

        fx.binder.load_example(Method::BigM, 0).unwrap();
        assert_eq!(fx.form.text(field::EQ_CONSTRAINTS).as_deref(), Some("0"));
        assert_eq!(fx.form.text(field::GE_CONSTRAINTS).as_deref(), Some(""));
    }

    #[test]
    fn test_penalty_defaults_on_big_m() {
        let fx = fixture(Method::BigM);
        fx.binder.load_example(Method::BigM, 3).unwrap();
        assert_eq!(fx.form.text(field::PENALTY).as_deref(), Some("10000"));

        fx.binder.load_example(Method::BigM, 1).unwrap();
        assert_eq!(fx.form.text(field::PENALTY).as_deref(), Some("1000"));
    }

    #[test]
    fn test_missing_example_changes_nothing() {
        let fx = fixture(Method::Simplex);
        fx.form.set_value(field::C, FieldValue::text("9,9"));

        let err = fx.binder.load_example(Method::Simplex, 42).unwrap_err();
        assert!(matches!(
            err,
            UiError::ExampleNotFound {
                method: Method::Simplex,
                index: 42
            }
        ));
        assert_eq!(fx.form.text(field::C).as_deref(), Some("9,9"));
        assert!(fx.banners.history().is_empty());
        assert!(fx.display.shown().is_none());
    }

    #[test]
    fn test_clear_form() {
        let fx = fixture(Method::BigM);
        fx.binder.load_example(Method::BigM, 2).unwrap();
        fx.form.set_value(field::TRACK_ITERATIONS, FieldValue::Checked(true));

        fx.binder.clear_form();

        assert_eq!(fx.form.text(field::C).as_deref(), Some(""));
        assert_eq!(fx.form.text(field::EQ_CONSTRAINTS).as_deref(), Some(""));
        assert_eq!(fx.form.checked(field::MINIMIZE), Some(false));
        assert_eq!(fx.form.checked(field::TRACK_ITERATIONS), Some(false));
        assert_eq!(fx.form.text(field::PENALTY).as_deref(), Some("1000"));
        assert!(fx.display.shown().is_none());
        assert_eq!(
            fx.banners.history().last(),
            Some(&("Form cleared".to_string(), Severity::Info))
        );
    }

    #[test]
    fn test_without_display_area() {
        let fx = fixture(Method::Simplex);
        let binder = FormBinder::new(
            Rc::new(Catalog::builtin()),
            fx.form.clone(),
            Rc::new(Notifier::new(
                fx.banners.clone(),
                Rc::new(ManualScheduler::new()),
                Duration::from_secs(3),
            )),
            &UiConfig::default(),
        );
        binder.load_example(Method::Simplex, 1).unwrap();
        assert_eq!(fx.form.text(field::C).as_deref(), Some("5,7"));
    }

    #[test]
    fn test_read_problem_from_form() {
        let fx = fixture(Method::TwoPhase);
        fx.binder.load_example(Method::TwoPhase, 2).unwrap();
        let input = fx.binder.read_problem().unwrap();
        assert_eq!(input.objective, vec![5.0, 4.0, 3.0]);
        assert!(input.minimize);
        assert_eq!(input.senses[0], ConstraintSense::Eq);

        fx.binder.clear_form();
        assert!(matches!(
            fx.binder.read_problem(),
            Err(UiError::Input(InputError::MissingField("c")))
        ));
    }
}
