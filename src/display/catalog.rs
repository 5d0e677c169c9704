//! Catalog listings
//!
//! Table and list views of the step catalog and materials checklist.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Catalog, MATERIALS};

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Icon")]
    icon: &'static str,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "Tips")]
    tips: usize,
}

/// Format the catalog as a table
pub fn format_step_table(catalog: &Catalog) -> String {
    let rows: Vec<StepRow> = catalog
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| StepRow {
            number: i + 1,
            icon: step.icon,
            title: step.short_title(),
            tips: step.tips.len(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the materials checklist, one item per line
pub fn format_materials() -> String {
    let mut output = String::from("Materials Needed:\n");
    for material in MATERIALS.iter() {
        output.push_str(&format!("  [ ] {}\n", material));
    }
    output
}
