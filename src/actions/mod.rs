//! # Marketplace Actions
//!
//! Generic execution of SOAR marketplace script actions. Each tool is described
//! by an [`ActionDescriptor`]; the [`ActionInvoker`] resolves its target and
//! integration instance and dispatches a single manual-action request.

pub mod descriptor;
pub mod invoker;
pub mod models;
pub mod result;

pub use descriptor::{ActionCall, ActionDescriptor, ParamKind, ParamSpec};
pub use invoker::{ActionInvoker, TargetSelection};
pub use models::{ActionRequest, EmailContent, TargetEntity};
pub use result::ActionResult;
