//! Display strings derived from menu state.

use shared::MealType;

pub const SEARCH_PLACEHOLDER: &str = "Search dish for your party...";
pub const EMPTY_LIST_TEXT: &str = "No dishes found.";

/// Count shown next to a tab label, blank when nothing is selected on that tab
pub fn tab_count_suffix(count: usize) -> String {
    if count > 0 {
        format!(" ({})", count)
    } else {
        String::new()
    }
}

/// Heading above the dish list, e.g. "Main Course Selected (2)"
pub fn section_title(tab: MealType, count: usize) -> String {
    format!("{} Selected ({})", tab.label(), count)
}

pub fn footer_text(total: usize) -> String {
    format!("Total Dish Selected {}", total)
}

pub fn add_remove_label(selected: bool) -> &'static str {
    if selected {
        "Remove"
    } else {
        "Add +"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_count_suffix() {
        assert_eq!(tab_count_suffix(0), "");
        assert_eq!(tab_count_suffix(3), " (3)");
    }

    #[test]
    fn test_section_title() {
        assert_eq!(section_title(MealType::MainCourse, 0), "Main Course Selected (0)");
        assert_eq!(section_title(MealType::Starter, 1), "Starter Selected (1)");
    }

    #[test]
    fn test_footer_and_button_labels() {
        assert_eq!(footer_text(2), "Total Dish Selected 2");
        assert_eq!(add_remove_label(true), "Remove");
        assert_eq!(add_remove_label(false), "Add +");
    }
}
