//! Tests for rig-model types.

use std::collections::BTreeSet;
use std::sync::Arc;

use rig_model::{
    CabinetSpec, Catalog, Category, CpuSpec, EngineOptions, FormFactor, Part, PartSpec,
    PowerProfile, RadiatorSize, ReasonPolicy, SelectionState, Slot, Socket,
};

fn cpu(id: &str, socket: &str, wattage: u32) -> Part {
    Part {
        id: id.to_string(),
        name: format!("{id} processor"),
        brand: "AMD".to_string(),
        price: 25_000,
        in_stock: true,
        spec: PartSpec::Cpu(CpuSpec {
            socket: Socket::new(socket),
            wattage,
            supports_integrated_graphics: false,
        }),
    }
}

fn cabinet(id: &str) -> Part {
    Part {
        id: id.to_string(),
        name: id.to_string(),
        brand: "Lian Li".to_string(),
        price: 9_000,
        in_stock: false,
        spec: PartSpec::Cabinet(CabinetSpec {
            supported_form_factors: BTreeSet::from([FormFactor::Atx, FormFactor::MicroAtx]),
            supported_radiator_sizes: BTreeSet::from([RadiatorSize::Mm240]),
            max_gpu_length_mm: 330,
        }),
    }
}

#[test]
fn part_category_follows_spec_variant() {
    assert_eq!(cpu("c", "AM5", 120).category(), Category::Cpu);
    assert_eq!(cabinet("k").category(), Category::Cabinet);
    assert!(cabinet("k").as_cpu().is_none());
}

#[test]
fn cabinet_fit_helpers() {
    let part = cabinet("k");
    let spec = part.as_cabinet().expect("cabinet spec");
    assert!(spec.fits_form_factor(FormFactor::MicroAtx));
    assert!(!spec.fits_form_factor(FormFactor::Eatx));
    assert!(spec.fits_radiator(RadiatorSize::AirCooler));
    assert!(spec.fits_radiator(RadiatorSize::Mm240));
    assert!(!spec.fits_radiator(RadiatorSize::Mm360));
    assert!(spec.fits_gpu_length(330));
    assert!(!spec.fits_gpu_length(331));
}

#[test]
fn catalog_groups_by_category_in_load_order() {
    let catalog = Catalog::new(vec![cpu("c1", "AM5", 120), cabinet("k1"), cpu("c2", "AM4", 65)])
        .expect("catalog");
    let ids: Vec<&str> = catalog
        .by_category(Category::Cpu)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert!(catalog.by_category(Category::Gpu).is_empty());
    assert_eq!(catalog.len(), 3);
    assert!(catalog.get("k1").is_some());
    assert!(catalog.get("missing").is_none());
}

#[test]
fn selection_state_place_and_snapshot() {
    let mut state = SelectionState::new();
    assert!(state.is_empty());

    let part = Arc::new(cpu("c1", "AM5", 120));
    assert!(state.place(Slot::Cpu, Some(Arc::clone(&part))).is_none());
    let snapshot = state.clone();

    state.place(Slot::Cpu, None);
    assert!(!state.is_filled(Slot::Cpu));
    assert_eq!(snapshot.get(Slot::Cpu).map(|p| p.id.as_str()), Some("c1"));
}

#[test]
#[should_panic(expected = "cannot be placed in slot")]
fn selection_state_rejects_wrong_category() {
    let mut state = SelectionState::new();
    state.place(Slot::Motherboard, Some(Arc::new(cpu("c1", "AM5", 120))));
}

#[test]
fn selection_state_serializes_as_slot_bag() {
    let mut state = SelectionState::new();
    state.place(Slot::Cpu, Some(Arc::new(cpu("c1", "AM5", 120))));
    let json = serde_json::to_value(&state).expect("serialize state");

    assert_eq!(json["cpu"]["id"], "c1");
    assert_eq!(json["cpu"]["category"], "cpu");
    assert_eq!(json["cpu"]["socket"], "AM5");
    assert_eq!(json["cpu"]["supportsIntegratedGraphics"], false);
    assert!(json["motherboard"].is_null());
    assert!(json["osSecondary"].is_null());
}

#[test]
fn engine_options_from_partial_toml() {
    let options: EngineOptions = toml::from_str(
        r#"
        reasons = "concatenate"

        [power]
        safety_buffer = 150
        "#,
    )
    .expect("parse options");

    assert_eq!(options.reasons, ReasonPolicy::Concatenate);
    assert_eq!(options.power.safety_buffer, 150);
    assert_eq!(options.power.motherboard_overhead, 50);
    assert_eq!(options.power.psu_step, 50);
    assert_eq!(EngineOptions::default().power, PowerProfile::default());
}
