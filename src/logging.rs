use log::Level::Trace;
use log::{log_enabled, trace};

use crate::{LABEL, LOG_TARGET};
use std::fmt::Debug;

/// Trace output for anything that can show where in the input it is.
pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;

    fn snippet(&self) -> String;

    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = self.snippet(),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_outcome<Args: Debug>(&self, msg: &str, args: Args, kind: &str) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {kind}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = self.snippet(),
                operation = format!("{msg}({args:?})"),
            );
        }
    }
}

/// Logs a combinator outcome when the input type can't be shown.
#[inline]
pub(crate) fn log_combinator<Args: Debug>(msg: &str, args: Args, kind: &str) {
    if log_enabled!(target: LOG_TARGET, Trace) {
        trace!(
            target: LOG_TARGET,
            "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {kind}",
            iw = 35_usize,
            lw = 15_usize,
            label = LABEL.with(|f| f.get()),
            inp = "",
            operation = format!("{msg}({args:?})"),
        );
    }
}

/// Swaps the thread's current label, returning the previous one.
pub(crate) fn swap_label(label: &'static str) -> &'static str {
    LABEL.with(|f| f.replace(label))
}

/// Holds a label for its lifetime. The outer label comes back on drop, unwinding included.
pub(crate) struct LabelGuard {
    outer: &'static str,
}

impl LabelGuard {
    pub(crate) fn enter(label: &'static str) -> Self {
        Self {
            outer: swap_label(label),
        }
    }
}

impl Drop for LabelGuard {
    fn drop(&mut self) {
        swap_label(self.outer);
    }
}
