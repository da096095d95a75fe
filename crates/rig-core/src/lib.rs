//! Compatibility engine core: the selection state manager, the power and
//! cost aggregator, candidate filtering and the session facade hosts drive.

pub mod aggregate;
pub mod candidates;
pub mod error;
pub mod handoff;
pub mod selection;
pub mod session;

pub use aggregate::{Totals, aggregate, aggregate_with};
pub use candidates::{filter_all, filter_candidates};
pub use error::{HandoffError, SessionError};
pub use handoff::{CartHandoff, PartRecord};
pub use selection::{SelectionAction, apply, reduce, set_slot};
pub use session::{BuildSnapshot, Configurator};
