//! # Toast Notifier
//!
//! Ephemeral queue of user-facing messages with timed expiry.
//!
//! ## Toast Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Toast Lifecycle                                    │
//! │                                                                         │
//! │  show("Added to cart", Success)                                         │
//! │        │                                                                │
//! │        ├── push {id, message, kind} (insertion order preserved)         │
//! │        └── spawn timer ──── 3 s ────► dismiss(id)                       │
//! │                                          │                              │
//! │  User clicks ✕ ──► dismiss(id) ◄─────────┘                              │
//! │                                                                         │
//! │  Whichever happens first removes the toast; the late one is a no-op.   │
//! │  Identical messages queue independently - no deduplication.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Runtime Requirement
//! `show` spawns the expiry timer with `tokio::spawn`, so it must be
//! called from within a tokio runtime.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// How long a toast stays visible unless manually dismissed.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_secs(3);

// =============================================================================
// Toast Types
// =============================================================================

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Green check - something worked.
    Success,
    /// Red alert - something failed.
    Error,
    /// Neutral notice.
    Info,
}

/// One message in the toast stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Generated id used for dismissal.
    pub id: String,
    /// Message shown to the user.
    pub message: String,
    /// Visual flavor.
    pub kind: ToastKind,
}

// =============================================================================
// Toast Notifier
// =============================================================================

/// The toast queue.
///
/// Cloning shares the queue (the expiry timers hold a clone), so one
/// notifier constructed at startup serves the whole process.
#[derive(Debug, Clone, Default)]
pub struct ToastNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a toast and arms its 3-second expiry timer.
    ///
    /// Returns the generated id so callers can dismiss early.
    ///
    /// ## Behavior
    /// - Toasts coexist in insertion order
    /// - No deduplication: identical messages queue independently
    /// - The timer fires regardless of user interaction; if the toast was
    ///   already dismissed manually the timer finds nothing to remove
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> String {
        let toast = Toast {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
        };
        let id = toast.id.clone();
        debug!(toast_id = %id, kind = ?kind, "toast shown");

        {
            let mut toasts = self.toasts.lock().expect("toast mutex poisoned");
            toasts.push(toast);
        }

        let notifier = self.clone();
        let timer_id = id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_DISMISS_AFTER).await;
            notifier.dismiss(&timer_id);
        });

        id
    }

    /// Removes a toast by id.
    ///
    /// Returns `true` when a toast was removed; `false` when the id was
    /// already gone (expired or dismissed twice) - never an error.
    pub fn dismiss(&self, id: &str) -> bool {
        let mut toasts = self.toasts.lock().expect("toast mutex poisoned");
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        before != toasts.len()
    }

    /// Returns the visible toasts in insertion order.
    pub fn active(&self) -> Vec<Toast> {
        let toasts = self.toasts.lock().expect("toast mutex poisoned");
        toasts.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
