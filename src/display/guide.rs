//! Plain-text rendering of a single guide page
//!
//! Produces the same sections as the TUI: progress tracker, step detail,
//! materials checklist and the two navigation controls.

use crate::models::{GUIDE_TITLE, MATERIALS};
use crate::navigation::Navigator;

/// Label of the backward navigation control
pub const PREVIOUS_LABEL: &str = "Previous Step";

/// Label of the forward navigation control
pub const NEXT_LABEL: &str = "Next Step";

/// Format the full guide page for the navigator's current step
pub fn format_guide(nav: &Navigator) -> String {
    let mut output = String::new();

    output.push_str(GUIDE_TITLE);
    output.push('\n');
    output.push_str(&"=".repeat(GUIDE_TITLE.chars().count()));
    output.push_str("\n\n");

    output.push_str(&format_tracker(nav));
    output.push('\n');
    output.push_str(&format_detail(nav));
    output.push('\n');
    output.push_str(&format_materials_section());
    output.push('\n');
    output.push_str(&format_controls(nav));
    output.push('\n');

    output
}

/// One line per step; `[x]` for completed or current, `[ ]` for upcoming
pub fn format_tracker(nav: &Navigator) -> String {
    let mut output = String::from("Progress:\n");
    for (i, step) in nav.catalog().steps().iter().enumerate() {
        let mark = if nav.is_reached(i) { "[x]" } else { "[ ]" };
        let pointer = if i == nav.current_index() { " <" } else { "" };
        output.push_str(&format!("  {} {} {}{}\n", mark, step.icon, step.title, pointer));
    }
    output
}

/// Title, content and tips of the current step
pub fn format_detail(nav: &Navigator) -> String {
    let step = nav.current_step();
    let mut output = String::new();

    output.push_str(step.title);
    output.push('\n');
    output.push_str(&"-".repeat(step.title.chars().count()));
    output.push('\n');
    output.push_str(step.content);
    output.push_str("\n\nPro Tips:\n");
    for tip in step.tips {
        output.push_str(&format!("  - {}\n", tip));
    }

    output
}

fn format_materials_section() -> String {
    let mut output = String::from("Materials Needed:\n");
    for material in MATERIALS.iter() {
        output.push_str(&format!("  {}\n", material));
    }
    output
}

/// The two navigation controls, with disabled ones marked
pub fn format_controls(nav: &Navigator) -> String {
    let previous = control_label(PREVIOUS_LABEL, nav.can_go_previous());
    let next = control_label(NEXT_LABEL, nav.can_go_next());
    format!(
        "< {}    {} >    (step {} of {})\n",
        previous,
        next,
        nav.current_index() + 1,
        nav.len()
    )
}

fn control_label(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("{} (disabled)", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let nav = Navigator::default();
        let page = format_guide(&nav);

        assert!(page.starts_with(GUIDE_TITLE));
        assert!(page.contains("1. Set Up"));
        assert!(page.contains("  - Find a quiet place to focus"));
        assert!(page.contains("Previous Step (disabled)"));
        assert!(!page.contains("Next Step (disabled)"));
        assert!(page.contains("(step 1 of 5)"));
    }

    #[test]
    fn test_tracker_marks_reached_steps() {
        let mut nav = Navigator::default();
        nav.go_to_step(1).unwrap();
        let tracker = format_tracker(&nav);
        let lines: Vec<&str> = tracker.lines().skip(1).collect();

        assert!(lines[0].starts_with("  [x]"));
        assert!(lines[1].starts_with("  [x]"));
        assert!(lines[1].ends_with(" <"));
        assert!(lines[2].starts_with("  [ ]"));
    }

    #[test]
    fn test_last_page_disables_next() {
        let mut nav = Navigator::default();
        nav.go_to_last();
        let controls = format_controls(&nav);

        assert!(controls.contains("Next Step (disabled)"));
        assert!(!controls.contains("Previous Step (disabled)"));
    }

    #[test]
    fn test_materials_identical_on_every_step() {
        let mut nav = Navigator::default();
        let extract = |page: String| {
            let start = page.find("Materials Needed:").unwrap();
            let end = page.find("< ").unwrap();
            page[start..end].to_string()
        };

        let first = extract(format_guide(&nav));
        while nav.go_to_next() {
            assert_eq!(extract(format_guide(&nav)), first);
        }
    }
}
