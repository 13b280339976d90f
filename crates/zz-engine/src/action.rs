//! Declarative actions handed back to the embedding host.

/// Severity attached to [`Action::Log`] entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// One instruction for the host to execute against its view, in order.
///
/// Value-typed wire contract between engine and host: the engine owns no
/// view and makes no guarantee about when the host runs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Evaluate a JavaScript payload in the page.
    InjectScript { payload: String },
    /// Deliver a Content-Security-Policy to the page (meta tag or
    /// equivalent; `zz_script::csp_meta_script` builds the JS form).
    InjectCspMeta { csp: String },
    /// Flip a boolean view setting, e.g. `allowFileAccess=false`.
    SetViewFlag { name: &'static str, value: bool },
    /// Surface a diagnostic however the host sees fit.
    Log { level: LogLevel, message: String },
}

impl Action {
    pub fn is_log(&self) -> bool {
        matches!(self, Self::Log { .. })
    }
}
