//! Page start-up: method detection, quick-example panel, restore and autosave wiring.

use std::rc::{Rc, Weak};
use std::time::Duration;

use lpform_catalog::{Catalog, Method};

use crate::binder::{FormBinder, SolutionDisplay};
use crate::config::UiConfig;
use crate::error::UiError;
use crate::form::FormAccess;
use crate::notify::{BannerHost, Notifier, Severity};
use crate::persist::{AutoSave, FormPersistence, RestoreReport};
use crate::storage::Storage;
use crate::timer::Scheduler;

/// Edit event raised by a named control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Typing in a text control
    Input(String),
    /// Checkbox toggle or select change
    Change(String),
}

/// Click on one of the quick-example panel's buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Load(usize),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleButton {
    pub index: usize,
    pub label: String,
    /// Tooltip
    pub title: String,
}

/// Contents of the injected quick-example panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickExamples {
    pub method: Method,
    pub heading: String,
    pub buttons: Vec<ExampleButton>,
    pub clear_label: String,
}

impl QuickExamples {
    pub fn for_method(catalog: &Catalog, method: Method) -> Self {
        Self {
            method,
            heading: "Quick examples:".to_string(),
            buttons: catalog
                .examples(method)
                .iter()
                .enumerate()
                .map(|(index, example)| ExampleButton {
                    index,
                    label: example.name.clone(),
                    title: example.description.clone(),
                })
                .collect(),
            clear_label: "Clear".to_string(),
        }
    }
}

/// The download control, which shows a busy state while a file is generated
pub trait BusyControl {
    fn set_busy(&self, busy: bool);

    /// Register the handler run when the control is activated
    fn on_activate(&self, handler: Rc<dyn Fn()>) -> Result<(), UiError>;
}

/// Page-level capabilities the controller needs
pub trait PageHost {
    /// Path of the current URL
    fn path(&self) -> String;

    /// Whether a quick-example panel is already on the page
    fn has_quick_examples(&self) -> bool;

    /// Insert the panel and mark it so later checks see it
    fn insert_quick_examples(
        &self,
        panel: &QuickExamples,
        on_action: Rc<dyn Fn(PanelAction)>,
    ) -> Result<(), UiError>;

    fn watch_fields(&self, on_event: Rc<dyn Fn(FieldEvent)>) -> Result<(), UiError>;

    fn download_control(&self) -> Option<Rc<dyn BusyControl>>;
}

/// Everything the page tooling is built from
pub struct Services {
    pub catalog: Rc<Catalog>,
    pub form: Rc<dyn FormAccess>,
    pub storage: Rc<dyn Storage>,
    pub scheduler: Rc<dyn Scheduler>,
    pub banners: Rc<dyn BannerHost>,
    pub display: Option<Rc<dyn SolutionDisplay>>,
    pub config: UiConfig,
}

pub struct PageController {
    method: Option<Method>,
    binder: Rc<FormBinder>,
    persistence: Rc<FormPersistence>,
    notifier: Rc<Notifier>,
    autosave: Option<Rc<AutoSave>>,
    restore: RestoreReport,
}

impl PageController {
    /// Set up the page once its document is ready
    pub fn init(host: &dyn PageHost, services: Services) -> Self {
        let Services {
            catalog,
            form,
            storage,
            scheduler,
            banners,
            display,
            config,
        } = services;

        let notifier = Rc::new(Notifier::new(
            banners,
            Rc::clone(&scheduler),
            config.notification_lifetime(),
        ));
        let binder = Rc::new(
            FormBinder::new(catalog, Rc::clone(&form), Rc::clone(&notifier), &config)
                .with_display(display),
        );
        let persistence = Rc::new(FormPersistence::new(form, storage, &config));

        let method = Method::detect(&host.path());
        let mut controller = Self {
            method,
            binder,
            persistence,
            notifier,
            autosave: None,
            restore: RestoreReport::default(),
        };

        if let Some(method) = method {
            log::info!("initializing {method} page");
            let autosave = Rc::new(AutoSave::new(
                method,
                Rc::clone(&controller.persistence),
                Rc::clone(&scheduler),
                config.debounce(),
            ));
            controller.autosave = Some(Rc::clone(&autosave));

            controller.inject_panel(host, method, &autosave);
            controller.restore = controller.persistence.load_form_data(method);
            watch_fields(host, &autosave);
        } else {
            log::debug!("no method page at {}", host.path());
        }

        if let Some(control) = host.download_control() {
            arm_busy_toggle(control, scheduler, &config);
        }

        if controller.restore.has_content {
            controller
                .notifier
                .notify("Previous form data was restored", Severity::Info);
        }
        controller
    }

    fn inject_panel(&self, host: &dyn PageHost, method: Method, autosave: &Rc<AutoSave>) {
        if host.has_quick_examples() {
            log::debug!("quick examples already present");
            return;
        }
        let panel = QuickExamples::for_method(self.binder.catalog(), method);
        let binder = Rc::clone(&self.binder);
        let autosave = Rc::clone(autosave);
        let on_action = Rc::new(move |action: PanelAction| match action {
            PanelAction::Load(index) => {
                if binder.load_example(method, index).is_ok() {
                    autosave.save_now();
                }
            }
            PanelAction::Clear => {
                binder.clear_form();
                autosave.save_now();
            }
        });
        if let Err(e) = host.insert_quick_examples(&panel, on_action) {
            log::warn!("quick examples not added: {e}");
        }
    }

    pub fn method(&self) -> Option<Method> {
        self.method
    }

    pub fn binder(&self) -> &FormBinder {
        &self.binder
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn autosave(&self) -> Option<&AutoSave> {
        self.autosave.as_deref()
    }

    /// What the start-up restore found
    pub fn restore_report(&self) -> RestoreReport {
        self.restore
    }

    /// Forget the saved form for the active method and blank the form
    pub fn clear_saved_data(&self) -> Result<(), UiError> {
        let Some(method) = self.method else {
            return Ok(());
        };
        if let Some(autosave) = &self.autosave {
            autosave.cancel();
        }
        self.persistence.clear_form_data(method)?;
        self.notifier.notify("Saved form data removed", Severity::Info);
        Ok(())
    }
}

fn watch_fields(host: &dyn PageHost, autosave: &Rc<AutoSave>) {
    let autosave = Rc::clone(autosave);
    let on_event = Rc::new(move |event: FieldEvent| match event {
        FieldEvent::Input(_) => autosave.on_input(),
        FieldEvent::Change(_) => autosave.on_change(),
    });
    if let Err(e) = host.watch_fields(on_event) {
        log::warn!("autosave not wired: {e}");
    }
}

/// Put the control into its busy state on activation and revert it after
/// the configured timeout, in case no response ever arrives.
///
/// The busy state is applied on the next tick so the activation's own default
/// action (a download link or form submission) is not blocked by it.
fn arm_busy_toggle(
    control: Rc<dyn BusyControl>,
    scheduler: Rc<dyn Scheduler>,
    config: &UiConfig,
) {
    let timeout = config.busy_timeout();
    let target = Rc::clone(&control);
    let handler = Rc::new(move || {
        let busy = Rc::clone(&target);
        let shown = scheduler.schedule(Duration::ZERO, Box::new(move || busy.set_busy(true)));
        let busy_task = match shown {
            Ok(id) => id,
            Err(e) => {
                log::warn!("busy state not shown: {e}");
                return;
            }
        };
        let revert: Weak<dyn BusyControl> = Rc::downgrade(&target);
        let reverted = scheduler.schedule(
            timeout,
            Box::new(move || {
                if let Some(control) = revert.upgrade() {
                    control.set_busy(false);
                }
            }),
        );
        if let Err(e) = reverted {
            log::warn!("busy state will not revert: {e}");
            scheduler.cancel(busy_task);
        }
    });
    if let Err(e) = control.on_activate(handler) {
        log::warn!("download control not wired: {e}");
    }
}
