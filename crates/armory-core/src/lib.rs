//! Domain layer between `armory-api` and UI consumers (the CLI).
//!
//! - **[`Facade`]** -- the single point of contact with the backend. Terminal
//!   operations (load, load-all, add, delete, classify, generate) return an
//!   [`Outcome`] *and* publish exactly one [`Notification`] to every
//!   subscriber. Query operations ([`Facade::exists`], [`Facade::update`])
//!   return plain booleans so callers can branch immediately.
//!
//! - **Domain model** ([`model`]) -- [`WeaponRecord`], [`WeaponDraft`],
//!   [`WeaponId`], and the textual [`WeaponForm`] a shell fills in.
//!
//! - **[`ViewState`]** -- explicit UI state with a pure
//!   [`reduce`](ViewState::reduce) transition driven by notifications.

pub mod config;
pub mod convert;
pub mod error;
pub mod facade;
pub mod model;
pub mod notification;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{FacadeConfig, TlsVerification};
pub use error::{CoreError, Failure, FailureKind, Operation, Outcome};
pub use facade::Facade;
pub use model::{WeaponDraft, WeaponForm, WeaponId, WeaponRecord};
pub use notification::Notification;
pub use view::ViewState;
