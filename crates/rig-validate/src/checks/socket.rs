//! CPU ↔ motherboard socket check.

use rig_model::{Category, Part, RuleKind, Violation};

/// Socket must match in both directions.
pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    let (required, against) = match (candidate.category(), selected.category()) {
        (Category::Motherboard, Category::Cpu) => {
            let (board, cpu) = (candidate.as_motherboard()?, selected.as_cpu()?);
            if board.socket == cpu.socket {
                return None;
            }
            (&cpu.socket, Category::Cpu)
        }
        (Category::Cpu, Category::Motherboard) => {
            let (cpu, board) = (candidate.as_cpu()?, selected.as_motherboard()?);
            if cpu.socket == board.socket {
                return None;
            }
            (&board.socket, Category::Motherboard)
        }
        _ => return None,
    };

    Some(Violation::new(
        RuleKind::Socket,
        Some(against),
        format!("Requires socket {required}"),
    ))
}
