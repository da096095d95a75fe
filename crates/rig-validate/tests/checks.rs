//! Tests for the compatibility predicate set.

use std::collections::BTreeSet;
use std::sync::Arc;

use rig_model::{
    CabinetSpec, Category, CoolerSpec, CpuSpec, FormFactor, GpuSpec, MemoryType, MotherboardSpec,
    Part, PartSpec, PsuSpec, RadiatorSize, RamSpec, RuleKind, SelectionState, Slot, Socket,
};
use rig_validate::{PairRule, ReviewIssueKind, active_constraints, evaluate, hard_conflicts, review_build};

fn part(id: &str, spec: PartSpec) -> Part {
    Part {
        id: id.to_string(),
        name: id.to_string(),
        brand: "Test".to_string(),
        price: 1_000,
        in_stock: true,
        spec,
    }
}

fn cpu(id: &str, socket: &str, wattage: u32) -> Part {
    part(
        id,
        PartSpec::Cpu(CpuSpec {
            socket: Socket::new(socket),
            wattage,
            supports_integrated_graphics: false,
        }),
    )
}

fn board(id: &str, socket: &str, memory: MemoryType, form_factor: FormFactor) -> Part {
    part(
        id,
        PartSpec::Motherboard(MotherboardSpec {
            socket: Socket::new(socket),
            memory_type: memory,
            form_factor,
        }),
    )
}

fn ram(id: &str, memory: MemoryType) -> Part {
    part(
        id,
        PartSpec::Ram(RamSpec {
            memory_type: memory,
            capacity: Some(32),
        }),
    )
}

fn gpu(id: &str, wattage: u32, length_mm: u32) -> Part {
    part(
        id,
        PartSpec::Gpu(GpuSpec {
            wattage,
            vram: Some(12),
            length_mm,
        }),
    )
}

fn cooler(id: &str, size: RadiatorSize, tdp: Option<u32>) -> Part {
    part(
        id,
        PartSpec::Cooler(CoolerSpec {
            radiator_size: size,
            tdp_rating: tdp,
        }),
    )
}

fn psu(id: &str, wattage: u32) -> Part {
    part(id, PartSpec::Psu(PsuSpec { wattage }))
}

fn cabinet(id: &str, forms: &[FormFactor], radiators: &[RadiatorSize], max_gpu: u32) -> Part {
    part(
        id,
        PartSpec::Cabinet(CabinetSpec {
            supported_form_factors: forms.iter().copied().collect::<BTreeSet<_>>(),
            supported_radiator_sizes: radiators.iter().copied().collect::<BTreeSet<_>>(),
            max_gpu_length_mm: max_gpu,
        }),
    )
}

fn with(state: &mut SelectionState, slot: Slot, part: Part) {
    state.place(slot, Some(Arc::new(part)));
}

#[test]
fn socket_rule_runs_both_directions() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cpu, cpu("c", "AM5", 120));
    let found = evaluate(&board("b", "AM4", MemoryType::Ddr4, FormFactor::Atx), &state, 0);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule, RuleKind::Socket);
    assert_eq!(found[0].message, "Requires socket AM5");

    let mut state = SelectionState::new();
    with(&mut state, Slot::Motherboard, board("b", "LGA1700", MemoryType::Ddr5, FormFactor::Atx));
    let found = evaluate(&cpu("c", "AM5", 120), &state, 0);
    assert_eq!(found[0].message, "Requires socket LGA1700");
    assert_eq!(found[0].against, Some(Category::Motherboard));
}

#[test]
fn memory_rule_runs_both_directions() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Motherboard, board("b", "AM5", MemoryType::Ddr5, FormFactor::Atx));
    let found = evaluate(&ram("r", MemoryType::Ddr4), &state, 0);
    assert_eq!(found[0].message, "Requires memory type DDR5");
    assert!(evaluate(&ram("r5", MemoryType::Ddr5), &state, 0).is_empty());

    let mut state = SelectionState::new();
    with(&mut state, Slot::Ram, ram("r", MemoryType::Ddr4));
    let found = evaluate(&board("b", "AM5", MemoryType::Ddr5, FormFactor::Atx), &state, 0);
    assert_eq!(found[0].message, "Requires memory type DDR4");
}

#[test]
fn cabinet_rules_run_both_directions() {
    let small = cabinet("k", &[FormFactor::Atx], &[RadiatorSize::Mm240], 300);
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cabinet, small.clone());

    let found = evaluate(&board("b", "AM5", MemoryType::Ddr5, FormFactor::MicroAtx), &state, 0);
    assert_eq!(found[0].message, "Cabinet fits only: ATX");

    let found = evaluate(&cooler("aio", RadiatorSize::Mm360, None), &state, 0);
    assert_eq!(found[0].message, "Cabinet supports: 240mm");
    assert!(evaluate(&cooler("air", RadiatorSize::AirCooler, None), &state, 0).is_empty());

    let found = evaluate(&gpu("g", 300, 320), &state, 0);
    assert_eq!(found[0].message, "Too long (320mm > 300mm)");
    assert!(evaluate(&gpu("g2", 200, 300), &state, 0).is_empty());

    let mut state = SelectionState::new();
    with(&mut state, Slot::Motherboard, board("b", "AM5", MemoryType::Ddr5, FormFactor::Eatx));
    with(&mut state, Slot::Cooler, cooler("aio", RadiatorSize::Mm360, None));
    with(&mut state, Slot::Gpu, gpu("g", 300, 320));
    let found = evaluate(&small, &state, 0);
    let messages: Vec<&str> = found.iter().map(|v| v.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Too small for E-ATX Mobo",
            "Doesn't support 360mm radiator",
            "Too small for GPU (320mm)",
        ]
    );
}

#[test]
fn cabinet_without_radiator_mounts_accepts_air_only() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cabinet, cabinet("itx", &[FormFactor::MiniItx], &[], 250));
    let found = evaluate(&cooler("aio", RadiatorSize::Mm240, None), &state, 0);
    assert_eq!(found[0].message, "Cabinet supports: air coolers only");
}

#[test]
fn empty_counterpart_applies_no_constraint() {
    let state = SelectionState::new();
    assert!(evaluate(&board("b", "AM4", MemoryType::Ddr4, FormFactor::Atx), &state, 0).is_empty());
    assert!(evaluate(&gpu("g", 450, 400), &state, 0).is_empty());
    assert!(active_constraints(&state, Category::Motherboard).is_empty());
}

#[test]
fn cooling_rule_is_advisory() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cpu, cpu("c", "AM5", 170));
    let found = evaluate(&cooler("weak", RadiatorSize::AirCooler, Some(95)), &state, 0);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule, RuleKind::Cooling);
    assert!(!found[0].is_hard());
    assert_eq!(found[0].message, "Too Weak (95W rating < 170W CPU)");

    assert!(evaluate(&cooler("unrated", RadiatorSize::AirCooler, None), &state, 0).is_empty());

    let mut state = SelectionState::new();
    with(&mut state, Slot::Cooler, cooler("weak", RadiatorSize::AirCooler, Some(95)));
    let found = evaluate(&cpu("c", "AM5", 170), &state, 0);
    assert_eq!(found[0].message, "Cooler too weak (95W rating < 170W CPU)");
}

#[test]
fn hard_findings_come_before_advisories() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cpu, cpu("c", "AM5", 170));
    with(&mut state, Slot::Cabinet, cabinet("k", &[FormFactor::Atx], &[], 300));
    let found = evaluate(&cooler("aio", RadiatorSize::Mm360, Some(100)), &state, 0);
    let rules: Vec<RuleKind> = found.iter().map(|v| v.rule).collect();
    assert_eq!(rules, vec![RuleKind::Radiator, RuleKind::Cooling]);
}

#[test]
fn power_rule_compares_estimate() {
    let state = SelectionState::new();
    let found = evaluate(&psu("p", 450), &state, 525);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rule, RuleKind::Power);
    assert_eq!(found[0].message, "Insufficient wattage (450W < 525W estimated)");
    assert!(evaluate(&psu("p", 550), &state, 525).is_empty());
    assert!(evaluate(&psu("p", 525), &state, 525).is_empty());
}

#[test]
fn hard_conflicts_report_neighbours_only() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Motherboard, board("b", "AM5", MemoryType::Ddr5, FormFactor::Atx));
    with(&mut state, Slot::Cooler, cooler("weak", RadiatorSize::AirCooler, Some(65)));
    with(&mut state, Slot::Cabinet, cabinet("k", &[FormFactor::Atx], &[], 300));

    let conflicts = hard_conflicts(&cpu("c", "LGA1700", 125), &state);
    let slots: Vec<Slot> = conflicts.iter().map(|(slot, _)| *slot).collect();
    assert_eq!(slots, vec![Slot::Motherboard]);
    assert_eq!(conflicts[0].1.message, "Requires socket LGA1700");
}

#[test]
fn pair_rule_counterparts() {
    assert_eq!(
        PairRule::CabinetGpu.counterpart(Category::Gpu),
        Some(Category::Cabinet)
    );
    assert_eq!(PairRule::CabinetGpu.counterpart(Category::Cpu), None);
    assert!(PairRule::CpuMotherboard.is_hard());
    assert!(!PairRule::CpuCooler.is_hard());
}

#[test]
fn review_lists_gaps_and_advisories() {
    let mut state = SelectionState::new();
    with(&mut state, Slot::Cpu, cpu("c", "AM5", 170));
    with(&mut state, Slot::Cooler, cooler("weak", RadiatorSize::AirCooler, Some(95)));
    let mut board_part = board("b", "AM4", MemoryType::Ddr5, FormFactor::Atx);
    board_part.in_stock = false;
    with(&mut state, Slot::Motherboard, board_part);
    with(&mut state, Slot::Psu, psu("p", 300));

    let review = review_build(&state, 400);
    let rendered: Vec<String> = review
        .issues
        .iter()
        .map(|issue| format!("{:?}: {}", issue.kind, issue.message))
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    Conflict: Motherboard b: Requires socket AM5
    CoolingShortfall: Cooler weak: Too Weak (95W rating < 170W CPU)
    PowerShortfall: PSU p: Insufficient wattage (300W < 400W estimated)
    NoDisplayOutput: No display output: CPU has no integrated graphics and no GPU is selected
    OutOfStock: Motherboard b is out of stock
    MissingComponent: No RAM selected
    MissingComponent: No Storage selected
    MissingComponent: No Cabinet selected
    ");
    assert!(review.has_conflicts());
    assert!(!review.is_complete());
    assert_eq!(review.count(ReviewIssueKind::MissingComponent), 3);
}

#[test]
fn review_of_clean_build() {
    let mut state = SelectionState::new();
    let mut igpu = cpu("c", "AM5", 65);
    if let PartSpec::Cpu(spec) = &mut igpu.spec {
        spec.supports_integrated_graphics = true;
    }
    with(&mut state, Slot::Cpu, igpu);
    with(&mut state, Slot::Motherboard, board("b", "AM5", MemoryType::Ddr5, FormFactor::MicroAtx));
    with(&mut state, Slot::Ram, ram("r", MemoryType::Ddr5));
    with(&mut state, Slot::Storage, part("s", PartSpec::Storage));
    with(&mut state, Slot::Psu, psu("p", 550));
    with(
        &mut state,
        Slot::Cabinet,
        cabinet("k", &[FormFactor::MicroAtx], &[RadiatorSize::Mm240], 300),
    );

    let review = review_build(&state, 250);
    assert!(review.is_clean(), "unexpected issues: {:?}", review.issues);
    assert!(review.is_complete());
}
