pub mod attributes;
pub mod catalog;
pub mod category;
pub mod compatibility;
pub mod error;
pub mod options;
pub mod part;
pub mod selection;

pub use attributes::{FormFactor, MemoryType, OsFamily, OsSeries, RadiatorSize, Socket};
pub use catalog::Catalog;
pub use category::{Category, Slot};
pub use compatibility::{Candidate, CandidateList, CandidateTag, RuleKind, Severity, Violation};
pub use error::{ModelError, Result};
pub use options::{EngineOptions, PowerProfile, ReasonPolicy};
pub use part::{
    CabinetSpec, CoolerSpec, CpuSpec, DEFAULT_CPU_WATTAGE, GpuSpec, MotherboardSpec, OsSpec, Part,
    PartSpec, PsuSpec, RamSpec,
};
pub use selection::SelectionState;
