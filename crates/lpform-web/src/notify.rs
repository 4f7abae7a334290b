use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use crate::error::UiError;
use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Bootstrap alert modifier (`alert-<class>`)
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Severity::Success),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" | "danger" => Ok(Severity::Error),
            other => Err(format!("Unknown severity: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

/// Where banners are drawn
pub trait BannerHost {
    fn show(&self, message: &str, severity: Severity) -> Result<BannerId, UiError>;

    /// Remove a banner. Returns `false` if it was already gone.
    fn dismiss(&self, id: BannerId) -> bool;
}

/// Shows transient banners that remove themselves after a fixed lifetime
pub struct Notifier {
    host: Rc<dyn BannerHost>,
    scheduler: Rc<dyn Scheduler>,
    lifetime: Duration,
}

impl Notifier {
    pub fn new(host: Rc<dyn BannerHost>, scheduler: Rc<dyn Scheduler>, lifetime: Duration) -> Self {
        Self {
            host,
            scheduler,
            lifetime,
        }
    }

    pub fn notify(&self, message: &str, severity: Severity) -> Option<BannerId> {
        let id = match self.host.show(message, severity) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("notification not shown: {e}");
                return None;
            }
        };

        let host = Rc::clone(&self.host);
        let expire = Box::new(move || {
            if !host.dismiss(id) {
                log::debug!("banner {} already dismissed", id.0);
            }
        });
        if let Err(e) = self.scheduler.schedule(self.lifetime, expire) {
            log::warn!("banner {} will not expire: {e}", id.0);
        }
        Some(id)
    }
}

/// In-memory banner host that records every banner shown
#[derive(Debug, Default)]
pub struct MemoryBanners {
    next_id: Cell<u64>,
    visible: RefCell<Vec<(BannerId, String, Severity)>>,
    history: RefCell<Vec<(String, Severity)>>,
}

impl MemoryBanners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages currently on screen
    pub fn visible(&self) -> Vec<(String, Severity)> {
        self.visible
            .borrow()
            .iter()
            .map(|(_, m, s)| (m.clone(), *s))
            .collect()
    }

    /// Every message ever shown, in order
    pub fn history(&self) -> Vec<(String, Severity)> {
        self.history.borrow().clone()
    }
}

impl BannerHost for MemoryBanners {
    fn show(&self, message: &str, severity: Severity) -> Result<BannerId, UiError> {
        let id = BannerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.visible.borrow_mut().push((id, message.to_string(), severity));
        self.history.borrow_mut().push((message.to_string(), severity));
        Ok(id)
    }

    fn dismiss(&self, id: BannerId) -> bool {
        let mut visible = self.visible.borrow_mut();
        let before = visible.len();
        visible.retain(|(b, _, _)| *b != id);
        visible.len() != before
    }
}
