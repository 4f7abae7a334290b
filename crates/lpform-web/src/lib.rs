pub mod binder;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod notify;
pub mod persist;
pub mod storage;
pub mod timer;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use binder::{FormBinder, MemoryDisplay, SolutionDisplay, SolutionView};
pub use config::UiConfig;
pub use controller::{
    BusyControl, ExampleButton, FieldEvent, PageController, PageHost, PanelAction, QuickExamples,
    Services,
};
pub use error::UiError;
pub use form::{FieldKind, FieldValue, FormAccess, FormState, MemoryForm};
pub use notify::{BannerHost, BannerId, MemoryBanners, Notifier, Severity};
pub use persist::{AutoSave, FormPersistence, RestoreReport, storage_key};
pub use storage::{MemoryStorage, Storage};
pub use timer::{Debouncer, ManualScheduler, Scheduler, TimerId};
