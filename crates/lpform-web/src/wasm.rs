//! WASM bindings for the LP method pages
//!
//! Binds the form, storage, timer and banner traits to the browser DOM and
//! exposes the page actions to JavaScript.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use lpform_catalog::{Catalog, Method};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Window,
};

use crate::binder::{SolutionDisplay, SolutionView};
use crate::config::UiConfig;
use crate::controller::{
    BusyControl, FieldEvent, PageController, PageHost, PanelAction, QuickExamples, Services,
};
use crate::error::UiError;
use crate::form::{FieldKind, FieldValue, FormAccess};
use crate::notify::{BannerHost, BannerId, Severity};
use crate::storage::{MemoryStorage, Storage};
use crate::timer::{Scheduler, Task, TimerId};

/// Attribute the quick-example panel carries once injected
const PANEL_MARKER: &str = "data-quick-examples";
const DOWNLOAD_SELECTOR: &str = "#download-btn, [data-role=\"download\"]";
const SOLUTION_CONTAINER_ID: &str = "expected-solution";
const SOLUTION_VALUES_ID: &str = "expected-solution-values";
const BANNER_STYLE: &str = "top: 20px; right: 20px; z-index: 1050; min-width: 300px;";
const BUSY_HTML: &str =
    "<span class=\"spinner-border spinner-border-sm me-1\" role=\"status\"></span>Generating...";

thread_local! {
    static CATALOG: Rc<Catalog> = Rc::new(Catalog::builtin());
    static PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

// ===== Logging =====

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }
}

// ===== DOM helpers =====

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn dom_error(e: JsValue) -> UiError {
    UiError::Dom(js_error(e))
}

fn to_js(e: UiError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or_else(|| UiError::Dom("no window".to_string()))
}

fn document() -> Result<Document, UiError> {
    window()?
        .document()
        .ok_or_else(|| UiError::Dom("no document".to_string()))
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, UiError> {
    let el = document.create_element(tag).map_err(dom_error)?;
    el.set_class_name(class);
    Ok(el)
}

/// Attach a listener; it stays registered only while the returned closure lives
fn attach(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Closure<dyn FnMut(Event)>, UiError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    Ok(closure)
}

/// Attach a listener that lives as long as the page
fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UiError> {
    attach(target, event, handler)?.forget();
    Ok(())
}

// ===== Form =====

enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Control {
    fn classify(el: Element) -> Option<(String, FieldKind, Control)> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let kind = match input.type_().as_str() {
                "checkbox" => FieldKind::Checkbox,
                "button" | "submit" | "reset" | "hidden" | "file" | "image" | "radio" => {
                    return None;
                }
                _ => FieldKind::Text,
            };
            return Some((input.name(), kind, Control::Input(input.clone())));
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some((area.name(), FieldKind::Text, Control::TextArea(area.clone())));
        }
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            return Some((select.name(), FieldKind::Choice, Control::Select(select.clone())));
        }
        None
    }

    fn element(&self) -> &Element {
        match self {
            Control::Input(el) => el,
            Control::TextArea(el) => el,
            Control::Select(el) => el,
        }
    }

    fn read(&self) -> FieldValue {
        match self {
            Control::Input(el) if el.type_() == "checkbox" => FieldValue::Checked(el.checked()),
            Control::Input(el) => FieldValue::Text(el.value()),
            Control::TextArea(el) => FieldValue::Text(el.value()),
            Control::Select(el) => FieldValue::Text(el.value()),
        }
    }

    fn write(&self, value: FieldValue) {
        match (self, value) {
            (Control::Input(el), FieldValue::Checked(b)) => el.set_checked(b),
            (Control::Input(el), FieldValue::Text(s)) => el.set_value(&s),
            (Control::TextArea(el), FieldValue::Text(s)) => el.set_value(&s),
            (Control::Select(el), FieldValue::Text(s)) => el.set_value(&s),
            (_, FieldValue::Checked(_)) => {}
        }
    }
}

/// The page's problem form
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    fn controls(&self) -> Vec<(String, FieldKind, Control)> {
        let elements = self.form.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(Control::classify)
            .filter(|(name, _, _)| !name.is_empty())
            .collect()
    }

    fn control(&self, name: &str) -> Option<(FieldKind, Control)> {
        self.controls()
            .into_iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, kind, control)| (kind, control))
    }
}

impl FormAccess for DomForm {
    fn fields(&self) -> Vec<(String, FieldKind)> {
        self.controls()
            .into_iter()
            .map(|(name, kind, _)| (name, kind))
            .collect()
    }

    fn value(&self, name: &str) -> Option<FieldValue> {
        self.control(name).map(|(_, control)| control.read())
    }

    fn set_value(&self, name: &str, value: FieldValue) -> bool {
        match self.control(name) {
            Some((kind, control)) => {
                control.write(value.coerce(kind));
                true
            }
            None => false,
        }
    }
}

// ===== Storage and timers =====

pub struct LocalStorage(web_sys::Storage);

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, UiError> {
        self.0
            .get_item(key)
            .map_err(|e| UiError::Storage(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0
            .set_item(key, value)
            .map_err(|e| UiError::Storage(js_error(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), UiError> {
        self.0
            .remove_item(key)
            .map_err(|e| UiError::Storage(js_error(e)))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending,
    Running,
    Done,
}

/// Timer callbacks keyed by their `setTimeout` handle
struct TimerTable<C> {
    entries: HashMap<i32, (Rc<Cell<TimerState>>, C)>,
}

impl<C> TimerTable<C> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Hold a new callback, dropping every callback that has finished
    fn insert(&mut self, handle: i32, state: Rc<Cell<TimerState>>, callback: C) {
        self.entries
            .retain(|_, (state, _)| state.get() != TimerState::Done);
        self.entries.insert(handle, (state, callback));
    }

    /// Drop a callback unless it is the one currently running
    fn cancel(&mut self, handle: i32) {
        let idle = self
            .entries
            .get(&handle)
            .is_some_and(|(state, _)| state.get() != TimerState::Running);
        if idle {
            self.entries.remove(&handle);
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// `setTimeout`-backed scheduler.
///
/// Callbacks are owned here until they have run or been cancelled. A
/// finished callback is dropped on a later `schedule`, never from inside its
/// own invocation.
pub struct BrowserScheduler {
    window: Window,
    timers: RefCell<TimerTable<Closure<dyn FnMut()>>>,
}

impl BrowserScheduler {
    fn new(window: Window) -> Self {
        Self {
            window,
            timers: RefCell::new(TimerTable::new()),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<TimerId, UiError> {
        let state = Rc::new(Cell::new(TimerState::Pending));
        let mut task = Some(task);
        let callback = {
            let state = Rc::clone(&state);
            Closure::<dyn FnMut()>::new(move || {
                state.set(TimerState::Running);
                if let Some(task) = task.take() {
                    task();
                }
                state.set(TimerState::Done);
            })
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
                millis,
            )
            .map_err(|e| UiError::Timer(js_error(e)))?;
        self.timers.borrow_mut().insert(handle, state, callback);
        log::trace!("{} timer callbacks held", self.timers.borrow().len());
        Ok(TimerId(handle as u64))
    }

    fn cancel(&self, id: TimerId) {
        let handle = id.0 as i32;
        self.window.clear_timeout_with_handle(handle);
        self.timers.borrow_mut().cancel(handle);
    }
}

// ===== Banners =====

/// Values held under sequential ids until released
struct Slots<T> {
    next_id: u64,
    items: HashMap<u64, T>,
}

impl<T> Slots<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            items: HashMap::new(),
        }
    }

    fn hold(&mut self, item: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(id, item);
        id
    }

    fn release(&mut self, id: u64) -> Option<T> {
        self.items.remove(&id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

struct OpenBanner {
    element: Element,
    close: Element,
    on_close: Closure<dyn FnMut(Event)>,
}

pub struct DomBanners {
    document: Document,
    open: RefCell<Slots<OpenBanner>>,
}

impl DomBanners {
    fn new(document: Document) -> Self {
        Self {
            document,
            open: RefCell::new(Slots::new()),
        }
    }
}

impl BannerHost for DomBanners {
    fn show(&self, message: &str, severity: Severity) -> Result<BannerId, UiError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| UiError::Dom("no body".to_string()))?;

        let banner = create(
            &self.document,
            "div",
            &format!(
                "alert alert-{} alert-dismissible fade show position-fixed",
                severity.alert_class()
            ),
        )?;
        banner
            .set_attribute("role", "alert")
            .and_then(|_| banner.set_attribute("style", BANNER_STYLE))
            .map_err(dom_error)?;

        let text = create(&self.document, "span", "")?;
        text.set_text_content(Some(message));
        banner.append_child(&text).map_err(dom_error)?;

        let close = create(&self.document, "button", "btn-close")?;
        close
            .set_attribute("type", "button")
            .and_then(|_| close.set_attribute("aria-label", "Close"))
            .map_err(dom_error)?;
        banner.append_child(&close).map_err(dom_error)?;

        // The close button only detaches the banner; the expiry timer
        // releases the listener through `dismiss`.
        let on_close = {
            let banner = banner.clone();
            attach(&close, "click", move |_| banner.remove())?
        };

        body.append_child(&banner).map_err(dom_error)?;
        let mut open = self.open.borrow_mut();
        let id = open.hold(OpenBanner {
            element: banner,
            close,
            on_close,
        });
        log::trace!("{} banners held", open.len());
        Ok(BannerId(id))
    }

    fn dismiss(&self, id: BannerId) -> bool {
        let Some(banner) = self.open.borrow_mut().release(id.0) else {
            return false;
        };
        if let Err(e) = banner
            .close
            .remove_event_listener_with_callback("click", banner.on_close.as_ref().unchecked_ref())
        {
            log::debug!("close listener not removed: {}", js_error(e));
        }
        let visible = banner.element.parent_node().is_some();
        banner.element.remove();
        visible
    }
}

// ===== Expected solution =====

pub struct DomSolutionDisplay {
    document: Document,
    container: Element,
    values: Element,
}

impl DomSolutionDisplay {
    /// Both the container and its value area must be present
    fn find(document: &Document) -> Option<Self> {
        let container = document.get_element_by_id(SOLUTION_CONTAINER_ID)?;
        let values = document.get_element_by_id(SOLUTION_VALUES_ID)?;
        Some(Self {
            document: document.clone(),
            container,
            values,
        })
    }

    fn badge(&self, class: &str, text: &str) -> Result<(), UiError> {
        let badge = create(&self.document, "span", class)?;
        badge.set_text_content(Some(text));
        self.values.append_child(&badge).map_err(dom_error)?;
        Ok(())
    }

    fn render(&self, view: &SolutionView) -> Result<(), UiError> {
        self.values.set_inner_html("");
        self.badge("badge bg-success me-1", &format!("Z = {}", view.objective))?;
        for (label, value) in &view.variables {
            self.badge("badge bg-secondary me-1", &format!("{label} = {value}"))?;
        }
        self.container.remove_attribute("hidden").map_err(dom_error)
    }
}

impl SolutionDisplay for DomSolutionDisplay {
    fn show(&self, view: &SolutionView) {
        if let Err(e) = self.render(view) {
            log::warn!("expected solution not shown: {e}");
        }
    }

    fn hide(&self) {
        self.values.set_inner_html("");
        if let Err(e) = self.container.set_attribute("hidden", "") {
            log::warn!("expected solution not hidden: {}", js_error(e));
        }
    }
}

// ===== Download control =====

pub struct DomBusyControl {
    element: Element,
    idle_html: RefCell<Option<String>>,
}

impl DomBusyControl {
    fn new(element: Element) -> Self {
        Self {
            element,
            idle_html: RefCell::new(None),
        }
    }
}

impl BusyControl for DomBusyControl {
    fn set_busy(&self, busy: bool) {
        let result = if busy {
            let mut idle = self.idle_html.borrow_mut();
            if idle.is_none() {
                *idle = Some(self.element.inner_html());
            }
            self.element.set_inner_html(BUSY_HTML);
            self.element.set_attribute("disabled", "")
        } else {
            if let Some(html) = self.idle_html.borrow_mut().take() {
                self.element.set_inner_html(&html);
            }
            self.element.remove_attribute("disabled")
        };
        if let Err(e) = result {
            log::warn!("download control state not updated: {}", js_error(e));
        }
    }

    fn on_activate(&self, handler: Rc<dyn Fn()>) -> Result<(), UiError> {
        listen(&self.element, "click", move |_| handler())
    }
}

// ===== Page =====

pub struct DomPage {
    window: Window,
    document: Document,
    form: HtmlFormElement,
}

impl DomPage {
    fn button(&self, class: &str, label: &str, title: Option<&str>) -> Result<Element, UiError> {
        let button = create(&self.document, "button", class)?;
        button.set_attribute("type", "button").map_err(dom_error)?;
        if let Some(title) = title {
            button.set_attribute("title", title).map_err(dom_error)?;
        }
        button.set_text_content(Some(label));
        Ok(button)
    }
}

impl PageHost for DomPage {
    fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn has_quick_examples(&self) -> bool {
        matches!(
            self.document.query_selector(&format!("[{PANEL_MARKER}]")),
            Ok(Some(_))
        )
    }

    fn insert_quick_examples(
        &self,
        panel: &QuickExamples,
        on_action: Rc<dyn Fn(PanelAction)>,
    ) -> Result<(), UiError> {
        let block = create(&self.document, "div", "mb-3")?;
        block.set_attribute(PANEL_MARKER, panel.method.id()).map_err(dom_error)?;

        let heading = create(&self.document, "label", "form-label fw-bold")?;
        heading.set_text_content(Some(panel.heading.as_str()));
        block.append_child(&heading).map_err(dom_error)?;

        let row = create(&self.document, "div", "d-flex flex-wrap gap-2 mb-3")?;
        for entry in &panel.buttons {
            let button = self.button(
                "btn btn-outline-secondary btn-sm",
                &entry.label,
                Some(entry.title.as_str()),
            )?;
            let on_action = Rc::clone(&on_action);
            let index = entry.index;
            listen(&button, "click", move |_| on_action(PanelAction::Load(index)))?;
            row.append_child(&button).map_err(dom_error)?;
        }
        block.append_child(&row).map_err(dom_error)?;

        let clear = self.button("btn btn-outline-danger btn-sm", &panel.clear_label, None)?;
        listen(&clear, "click", move |_| on_action(PanelAction::Clear))?;
        block.append_child(&clear).map_err(dom_error)?;

        match self.form.query_selector(".mb-3").map_err(dom_error)? {
            Some(first) => {
                let parent = first
                    .parent_node()
                    .ok_or_else(|| UiError::Dom("form group has no parent".to_string()))?;
                parent.insert_before(&block, Some(&*first)).map_err(dom_error)?;
            }
            None => {
                self.form
                    .insert_before(&block, self.form.first_child().as_ref())
                    .map_err(dom_error)?;
            }
        }
        Ok(())
    }

    fn watch_fields(&self, on_event: Rc<dyn Fn(FieldEvent)>) -> Result<(), UiError> {
        let form = DomForm {
            form: self.form.clone(),
        };
        for (name, kind, control) in form.controls() {
            let on_event = Rc::clone(&on_event);
            match kind {
                FieldKind::Text => listen(control.element(), "input", move |_| {
                    on_event(FieldEvent::Input(name.clone()))
                })?,
                FieldKind::Checkbox | FieldKind::Choice => {
                    listen(control.element(), "change", move |_| {
                        on_event(FieldEvent::Change(name.clone()))
                    })?
                }
            }
        }
        Ok(())
    }

    fn download_control(&self) -> Option<Rc<dyn BusyControl>> {
        let element = self.document.query_selector(DOWNLOAD_SELECTOR).ok()??;
        Some(Rc::new(DomBusyControl::new(element)))
    }
}

fn start(config: UiConfig) -> Result<(), UiError> {
    let started = PAGE.with(|page| install_once(page, || build_page(config)))?;
    if !started {
        log::debug!("page already initialized");
    }
    Ok(())
}

/// Fill `slot` unless it is already set. Returns whether `build` ran.
fn install_once<T>(
    slot: &RefCell<Option<T>>,
    build: impl FnOnce() -> Result<Option<T>, UiError>,
) -> Result<bool, UiError> {
    if slot.borrow().is_some() {
        return Ok(false);
    }
    let built = build()?;
    if let Some(value) = built {
        *slot.borrow_mut() = Some(value);
    }
    Ok(true)
}

fn build_page(config: UiConfig) -> Result<Option<PageController>, UiError> {
    let window = window()?;
    let document = document()?;
    let Some(form) = document
        .query_selector("form")
        .map_err(dom_error)?
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no form on this page");
        return Ok(None);
    };

    let storage: Rc<dyn Storage> = match window.local_storage() {
        Ok(Some(storage)) => Rc::new(LocalStorage(storage)),
        Ok(None) | Err(_) => {
            log::warn!("localStorage unavailable, form data will not survive a reload");
            Rc::new(MemoryStorage::new())
        }
    };
    let display =
        DomSolutionDisplay::find(&document).map(|d| Rc::new(d) as Rc<dyn SolutionDisplay>);

    let services = Services {
        catalog: CATALOG.with(Rc::clone),
        form: Rc::new(DomForm { form: form.clone() }),
        storage,
        scheduler: Rc::new(BrowserScheduler::new(window.clone())),
        banners: Rc::new(DomBanners::new(document.clone())),
        display,
        config,
    };
    let host = DomPage {
        window,
        document,
        form,
    };

    Ok(Some(PageController::init(&host, services)))
}

fn with_page<T>(f: impl FnOnce(&PageController) -> Result<T, UiError>) -> Result<T, JsValue> {
    PAGE.with_borrow(|page| match page {
        Some(controller) => f(controller).map_err(to_js),
        None => Err(JsValue::from_str("page not initialized; call init_page first")),
    })
}

// ===== Exports =====

/// Set up the current page. Runs immediately if the document is already
/// parsed, otherwise on `DOMContentLoaded`.
///
/// `config` is an optional object with any of `debounce_ms`,
/// `notification_ms`, `busy_timeout_ms` and `penalty_default`.
#[wasm_bindgen]
pub fn init_page(config: JsValue) -> Result<(), JsValue> {
    init_logging();
    let config: UiConfig = if config.is_undefined() || config.is_null() {
        UiConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let document = document().map_err(to_js)?;
    if document.ready_state() == "loading" {
        let deferred = Closure::once_into_js(move |_: Event| {
            if let Err(e) = start(config) {
                log::error!("page setup failed: {e}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
        Ok(())
    } else {
        start(config).map_err(to_js)
    }
}

/// Load a catalog example into the form
#[wasm_bindgen]
pub fn load_example(method: &str, index: usize) -> Result<(), JsValue> {
    with_page(|page| {
        let method: Method = method.parse()?;
        page.binder().load_example(method, index)?;
        if let Some(autosave) = page.autosave() {
            autosave.save_now();
        }
        Ok(())
    })
}

/// Blank the form
#[wasm_bindgen]
pub fn clear_form() -> Result<(), JsValue> {
    with_page(|page| {
        page.binder().clear_form();
        if let Some(autosave) = page.autosave() {
            autosave.save_now();
        }
        Ok(())
    })
}

/// Forget the saved form for this page and blank the form
#[wasm_bindgen]
pub fn clear_saved_data() -> Result<(), JsValue> {
    with_page(|page| page.clear_saved_data())
}

/// Show a banner; `severity` is success, info, warning or error
#[wasm_bindgen]
pub fn notify(message: &str, severity: Option<String>) -> Result<(), JsValue> {
    let severity = match severity.as_deref() {
        Some(s) => s.parse::<Severity>().map_err(|e| JsValue::from_str(&e))?,
        None => Severity::Info,
    };
    with_page(|page| {
        page.notifier().notify(message, severity);
        Ok(())
    })
}

/// Return one catalog example as an object, or `undefined`
#[wasm_bindgen]
pub fn get_example(method: &str, index: usize) -> Result<JsValue, JsValue> {
    let method: Method = method.parse().map_err(|e| to_js(UiError::UnknownMethod(e)))?;
    CATALOG.with(|catalog| match catalog.get(method, index) {
        Some(example) => {
            serde_wasm_bindgen::to_value(example).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => Ok(JsValue::UNDEFINED),
    })
}

/// Return every example for a method as an array
#[wasm_bindgen]
pub fn list_examples(method: &str) -> Result<JsValue, JsValue> {
    let method: Method = method.parse().map_err(|e| to_js(UiError::UnknownMethod(e)))?;
    CATALOG.with(|catalog| {
        serde_wasm_bindgen::to_value(catalog.examples(method))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

#[derive(serde::Serialize)]
struct FormCheck {
    valid: bool,
    error: Option<String>,
    variables: usize,
    constraints: usize,
}

/// Check the problem entered in the form before it is submitted
#[wasm_bindgen]
pub fn validate_form() -> Result<JsValue, JsValue> {
    let check = with_page(|page| {
        Ok(match page.binder().read_problem() {
            Ok(input) => FormCheck {
                valid: true,
                error: None,
                variables: input.num_variables(),
                constraints: input.num_constraints(),
            },
            Err(e) => FormCheck {
                valid: false,
                error: Some(e.to_string()),
                variables: 0,
                constraints: 0,
            },
        })
    })?;
    serde_wasm_bindgen::to_value(&check).map_err(|e| JsValue::from_str(&e.to_string()))
}
