//! Cabinet ↔ GPU length clearance check.

use rig_model::{Category, Part, RuleKind, Violation};

pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    match (candidate.category(), selected.category()) {
        (Category::Gpu, Category::Cabinet) => {
            let (gpu, cabinet) = (candidate.as_gpu()?, selected.as_cabinet()?);
            if cabinet.fits_gpu_length(gpu.length_mm) {
                return None;
            }
            Some(Violation::new(
                RuleKind::GpuClearance,
                Some(Category::Cabinet),
                format!(
                    "Too long ({}mm > {}mm)",
                    gpu.length_mm, cabinet.max_gpu_length_mm
                ),
            ))
        }
        (Category::Cabinet, Category::Gpu) => {
            let (cabinet, gpu) = (candidate.as_cabinet()?, selected.as_gpu()?);
            if cabinet.fits_gpu_length(gpu.length_mm) {
                return None;
            }
            Some(Violation::new(
                RuleKind::GpuClearance,
                Some(Category::Gpu),
                format!("Too small for GPU ({}mm)", gpu.length_mm),
            ))
        }
        _ => None,
    }
}
