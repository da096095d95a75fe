//! Integration tests for the rigcheck commands.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use rig_cli::cli::{BuildArgs, CandidatesArgs, CatalogArgs, Cli, Command, parse_pick};
use rig_cli::commands::{run_build, run_candidates, run_catalog, run_handoff};
use rig_cli::summary::{cascade_lines, format_price, rejection_table};
use rig_model::{Category, Slot};

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/catalog.csv")
}

fn build_args(picks: &[&str]) -> BuildArgs {
    BuildArgs {
        catalog: fixture_catalog(),
        picks: picks.iter().map(|p| parse_pick(p).unwrap()).collect(),
        strict: false,
        reasons: None,
    }
}

#[test]
fn catalog_command_reports_rejections() {
    let load = run_catalog(&CatalogArgs {
        catalog: fixture_catalog(),
    })
    .unwrap();
    assert_eq!(load.accepted_count(), 32);

    let mut table = rejection_table(&load).expect("fixture has rejected rows");
    table.force_no_tty();
    let rendered = table.to_string();
    assert!(rendered.contains("mb-broken"));
    assert!(rendered.contains("toaster-1"));
}

#[test]
fn candidates_command_decorates_category() {
    let args = CandidatesArgs {
        build: build_args(&["cpu=cpu-12400f"]),
        category: Category::Motherboard,
        selectable_only: false,
    };
    let list = run_candidates(&args, None).unwrap();
    assert_eq!(list.len(), 5);
    assert_eq!(list.selectable().count(), 1);

    let args = CandidatesArgs {
        selectable_only: true,
        ..args
    };
    let list = run_candidates(&args, None).unwrap();
    let ids: Vec<&str> = list.candidates.iter().map(|c| c.part.id.as_str()).collect();
    assert_eq!(ids, vec!["mb-b760m"]);
}

#[test]
fn build_command_reports_cascades_and_failures() {
    let args = build_args(&[
        "cpu=cpu-7600",
        "motherboard=mb-b650",
        "cpu=cpu-5600",
        "psu=psu-450",
    ]);
    let report = run_build(&args, None).unwrap();

    assert_eq!(report.cascades.len(), 1);
    assert_eq!(report.cascades[0].cleared, vec![Slot::Motherboard]);
    assert_eq!(
        cascade_lines(&report.cascades),
        vec!["cpu=cpu-5600 cleared: motherboard"]
    );
    assert!(!report.snapshot.selections.is_filled(Slot::Motherboard));
    // 65W CPU + buffer fits a 450W unit.
    assert!(report.snapshot.totals.is_power_sufficient);
    assert!(!report.has_failures());

    let args = build_args(&[
        "cpu=cpu-7800x3d",
        "gpu=gpu-7900xtx",
        "motherboard=mb-x670e",
        "psu=psu-450",
    ]);
    let report = run_build(&args, None).unwrap();
    assert_eq!(report.snapshot.totals.estimated_wattage, 120 + 355 + 50 + 100);
    assert!(report.has_failures());
}

#[test]
fn strict_build_rejects_blocked_pick() {
    let mut args = build_args(&["cpu=cpu-7600", "motherboard=mb-b550"]);
    args.strict = true;
    let error = run_build(&args, None).unwrap_err();
    assert_eq!(
        format!("{error:#}"),
        "pick motherboard=mb-b550: part mb-b550 is blocked: Requires socket AM5"
    );
}

#[test]
fn config_file_changes_reason_policy() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rigcheck.toml");
    fs::write(&config, "reasons = \"concatenate\"\n").unwrap();

    let args = CandidatesArgs {
        build: build_args(&["cpu=cpu-7600", "cabinet=case-itx"]),
        category: Category::Motherboard,
        selectable_only: false,
    };
    let list = run_candidates(&args, Some(&config)).unwrap();
    assert_eq!(
        list.get("mb-b550").and_then(|c| c.reason.as_deref()),
        Some("Requires socket AM5; Cabinet fits only: Mini-ITX")
    );
}

#[test]
fn handoff_command_emits_json() {
    let args = build_args(&["cpu=cpu-7600", "storage=ssd-990", "os=os-ubuntu"]);
    let handoff = run_handoff(&args, None).unwrap();
    let json: serde_json::Value = serde_json::from_str(&handoff.to_json().unwrap()).unwrap();

    insta::assert_json_snapshot!(json, @r#"
    {
      "spec": {
        "cpu": {
          "attributes": {
            "socket": "AM5",
            "supportsIntegratedGraphics": true,
            "wattage": 65
          },
          "brand": "AMD",
          "category": "cpu",
          "id": "cpu-7600",
          "inStock": true,
          "name": "Ryzen 5 7600",
          "price": 1999900
        },
        "osPrimary": {
          "attributes": {
            "family": "Linux"
          },
          "brand": "Canonical",
          "category": "os",
          "id": "os-ubuntu",
          "inStock": true,
          "name": "Ubuntu 24.04 LTS",
          "price": 0
        },
        "storage": {
          "attributes": {},
          "brand": "Samsung",
          "category": "storage",
          "id": "ssd-990",
          "inStock": true,
          "name": "990 Pro 1TB",
          "price": 899900
        }
      },
      "totalPrice": 2899800
    }
    "#);
    assert_eq!(format_price(handoff.total_price), "28998.00");
}

#[test]
fn unknown_part_is_an_error() {
    let args = build_args(&["gpu=gpu-9090"]);
    let error = run_handoff(&args, None).unwrap_err();
    assert_eq!(format!("{error:#}"), "pick gpu=gpu-9090: unknown part id: gpu-9090");
}

#[test]
fn cli_parses_candidates_command() {
    let cli = Cli::try_parse_from([
        "rigcheck",
        "--config",
        "engine.toml",
        "candidates",
        "catalog.json",
        "--category",
        "case",
        "--pick",
        "gpu=gpu-4070",
        "--reasons",
        "all",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("engine.toml")));
    let Command::Candidates(args) = cli.command else {
        panic!("expected candidates");
    };
    assert_eq!(args.category, Category::Cabinet);
    assert_eq!(args.build.picks.len(), 1);
}
