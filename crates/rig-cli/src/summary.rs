use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rig_core::Totals;
use rig_ingest::CatalogLoad;
use rig_model::{Candidate, CandidateList, CandidateTag, SelectionState, Slot};
use rig_validate::{BuildReview, ReviewIssueKind};

use crate::commands::{BuildReport, CascadeClear};

pub fn print_catalog(load: &CatalogLoad) {
    println!("{}", catalog_table(load));
    if let Some(table) = rejection_table(load) {
        println!();
        println!("Rejected rows:");
        println!("{table}");
    }
}

pub fn print_candidates(list: &CandidateList) {
    println!("{}", list.category.label());
    println!("{}", candidate_table(list));
    println!(
        "{} listed, {} blocked, {} with warnings",
        list.len(),
        list.blocked_count(),
        list.warning_count()
    );
}

pub fn print_build(report: &BuildReport) {
    println!("{}", selection_table(&report.snapshot.selections));
    for line in cascade_lines(&report.cascades) {
        println!("{line}");
    }
    println!();
    println!("{}", totals_table(&report.snapshot.totals));
    if let Some(table) = review_table(&report.snapshot.review) {
        println!();
        println!("Review:");
        println!("{table}");
    }
}

pub fn catalog_table(load: &CatalogLoad) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Parts")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in load.catalog.category_counts() {
        table.add_row(vec![Cell::new(category.label()), count_cell(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(load.accepted_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn rejection_table(load: &CatalogLoad) -> Option<Table> {
    if !load.has_rejections() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Id"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for rejected in &load.rejected {
        table.add_row(vec![
            Cell::new(rejected.line),
            rejected.id.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&rejected.error).fg(Color::Red),
        ]);
    }
    Some(table)
}

pub fn candidate_table(list: &CandidateList) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Brand"),
        header_cell("Price"),
        header_cell("Stock"),
        header_cell("Status"),
        header_cell("Reason"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for candidate in &list.candidates {
        let part = &candidate.part;
        table.add_row(vec![
            Cell::new(&part.id),
            Cell::new(&part.name),
            Cell::new(&part.brand),
            Cell::new(format_price(part.price)),
            stock_cell(part.in_stock),
            status_cell(candidate),
            candidate
                .reason
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    table
}

pub fn selection_table(selections: &SelectionState) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Slot"),
        header_cell("Part"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for slot in Slot::ALL {
        let row = match selections.get(slot) {
            Some(part) => vec![
                slot_cell(slot),
                Cell::new(format!("{} ({})", part.name, part.id)),
                Cell::new(format_price(part.price)),
            ],
            None => vec![slot_cell(slot), dim_cell("-"), dim_cell("-")],
        };
        table.add_row(row);
    }
    table
}

pub fn totals_table(totals: &Totals) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Total price").add_attribute(Attribute::Bold),
        Cell::new(format_price(totals.total_price)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Estimated draw"),
        Cell::new(format!("{}W", totals.estimated_wattage)),
    ]);
    let psu = match totals.psu_wattage {
        Some(watts) if totals.is_power_sufficient => Cell::new(format!("{watts}W")).fg(Color::Green),
        Some(watts) => Cell::new(format!("{watts}W (insufficient)"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => dim_cell("not selected"),
    };
    table.add_row(vec![Cell::new("PSU"), psu]);
    if let Some(headroom) = totals.power_headroom() {
        table.add_row(vec![Cell::new("Headroom"), Cell::new(format!("{headroom}W"))]);
    }
    table.add_row(vec![
        Cell::new("Recommended PSU"),
        Cell::new(format!("{}W", totals.recommended_psu_wattage)),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn review_table(review: &BuildReview) -> Option<Table> {
    if review.is_clean() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Issue"), header_cell("Detail")]);
    apply_table_style(&mut table);
    for issue in &review.issues {
        table.add_row(vec![issue_cell(issue.kind), Cell::new(&issue.message)]);
    }
    Some(table)
}

pub fn cascade_lines(cascades: &[CascadeClear]) -> Vec<String> {
    cascades
        .iter()
        .map(|cascade| {
            let cleared: Vec<&str> = cascade.cleared.iter().map(|slot| slot.key()).collect();
            format!(
                "{}={} cleared: {}",
                cascade.pick.slot.key(),
                cascade.pick.id,
                cleared.join(", ")
            )
        })
        .collect()
}

/// Render a price in the smallest currency unit as major.minor.
pub fn format_price(price: u64) -> String {
    format!("{}.{:02}", price / 100, price % 100)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(candidate: &Candidate) -> Cell {
    match candidate.tag {
        None => Cell::new("OK").fg(Color::Green),
        Some(tag @ CandidateTag::Incompatible) => Cell::new(tag.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(tag) => Cell::new(tag.label()).fg(Color::Yellow),
    }
}

fn issue_cell(kind: ReviewIssueKind) -> Cell {
    match kind {
        ReviewIssueKind::Conflict => Cell::new("CONFLICT")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        ReviewIssueKind::PowerShortfall => Cell::new("POWER").fg(Color::Red),
        ReviewIssueKind::CoolingShortfall => Cell::new("COOLING").fg(Color::Yellow),
        ReviewIssueKind::NoDisplayOutput => Cell::new("DISPLAY").fg(Color::Yellow),
        ReviewIssueKind::OutOfStock => Cell::new("STOCK").fg(Color::Yellow),
        ReviewIssueKind::MissingComponent => Cell::new("MISSING").fg(Color::DarkGrey),
    }
}

fn stock_cell(in_stock: bool) -> Cell {
    if in_stock {
        Cell::new("✓").fg(Color::Green)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

fn slot_cell(slot: Slot) -> Cell {
    Cell::new(slot.key()).fg(Color::Blue)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
