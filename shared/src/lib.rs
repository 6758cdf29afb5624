use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Catalog-wide unique dish identifier
pub type DishId = u32;

/// Meal-type tab a dish belongs to.
///
/// Variant order is the tab order shown on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealType {
    #[serde(rename = "STARTER")]
    Starter,
    #[serde(rename = "MAIN COURSE")]
    MainCourse,
    #[serde(rename = "DESSERT")]
    Dessert,
    #[serde(rename = "SIDES")]
    Sides,
}

impl MealType {
    /// All meal types in tab order
    pub const ALL: [MealType; 4] = [
        MealType::Starter,
        MealType::MainCourse,
        MealType::Dessert,
        MealType::Sides,
    ];

    /// Catalog key, e.g. "MAIN COURSE"
    pub fn key(&self) -> &'static str {
        match self {
            MealType::Starter => "STARTER",
            MealType::MainCourse => "MAIN COURSE",
            MealType::Dessert => "DESSERT",
            MealType::Sides => "SIDES",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Starter => "Starter",
            MealType::MainCourse => "Main Course",
            MealType::Dessert => "Dessert",
            MealType::Sides => "Sides",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Dietary type of a dish, mutually exclusive per dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryType {
    #[serde(rename = "VEG")]
    Veg,
    #[serde(rename = "NON-VEG")]
    NonVeg,
}

impl DietaryType {
    pub fn is_veg(&self) -> bool {
        matches!(self, DietaryType::Veg)
    }
}

impl fmt::Display for DietaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietaryType::Veg => f.write_str("VEG"),
            DietaryType::NonVeg => f.write_str("NON-VEG"),
        }
    }
}

/// Cuisine category metadata attached to a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCategory {
    pub id: u32,
    pub name: String,
    /// Category image URI
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recommended_for_meal_suggestion: Option<bool>,
}

fn default_true() -> bool {
    true
}

/// A dish offered in the party catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    /// Display name, also the key for ingredient lookup
    pub name: String,
    pub category_id: u32,
    pub meal_type: MealType,
    #[serde(rename = "type")]
    pub dietary_type: DietaryType,
    pub description: String,
    /// Dish image URI
    pub image: String,
    pub category: DishCategory,
    /// Free-text tag such as "CURRY" or "GRILL"
    pub dish_type: String,
    #[serde(default = "default_true")]
    pub for_chefit: bool,
    #[serde(default = "default_true")]
    pub for_party: bool,
    #[serde(default)]
    pub name_hi: String,
    #[serde(default)]
    pub name_bn: String,
}

impl Dish {
    pub fn is_veg(&self) -> bool {
        self.dietary_type.is_veg()
    }
}

/// A single ingredient line; the unit is embedded in the quantity text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// Selected-dish counts per meal type. All four buckets are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTypeCounts {
    counts: BTreeMap<MealType, usize>,
}

impl Default for MealTypeCounts {
    fn default() -> Self {
        Self {
            counts: MealType::ALL.iter().map(|meal_type| (*meal_type, 0)).collect(),
        }
    }
}

impl MealTypeCounts {
    pub fn get(&self, meal_type: MealType) -> usize {
        self.counts.get(&meal_type).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, meal_type: MealType) {
        *self.counts.entry(meal_type).or_insert(0) += 1;
    }

    /// Sum over all buckets
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Buckets in tab order
    pub fn iter(&self) -> impl Iterator<Item = (MealType, usize)> + '_ {
        self.counts.iter().map(|(meal_type, count)| (*meal_type, *count))
    }
}

/// Filter inputs for the menu list.
///
/// Treated as an immutable value: each user action produces a new filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFilter {
    pub tab: MealType,
    pub include_veg: bool,
    pub include_non_veg: bool,
    pub search_text: String,
}

impl Default for MenuFilter {
    fn default() -> Self {
        Self {
            tab: MealType::MainCourse,
            include_veg: true,
            include_non_veg: true,
            search_text: String::new(),
        }
    }
}

impl MenuFilter {
    pub fn with_tab(&self, tab: MealType) -> Self {
        Self { tab, ..self.clone() }
    }

    pub fn with_veg_toggled(&self) -> Self {
        Self {
            include_veg: !self.include_veg,
            ..self.clone()
        }
    }

    pub fn with_non_veg_toggled(&self) -> Self {
        Self {
            include_non_veg: !self.include_non_veg,
            ..self.clone()
        }
    }

    pub fn with_search(&self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self.clone()
        }
    }
}

/// Which of the two screens is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavigationState {
    #[default]
    MenuList,
    IngredientDetail(Dish),
}

impl NavigationState {
    pub fn is_menu_list(&self) -> bool {
        matches!(self, NavigationState::MenuList)
    }

    /// Dish shown on the ingredient screen, if that screen is active
    pub fn detail_dish(&self) -> Option<&Dish> {
        match self {
            NavigationState::MenuList => None,
            NavigationState::IngredientDetail(dish) => Some(dish),
        }
    }
}

/// User actions emitted by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    SelectTab(MealType),
    ToggleVeg,
    ToggleNonVeg,
    SetSearch(String),
    ToggleSelect(DishId),
    OpenIngredient(Dish),
    CloseIngredient,
}

/// Result of a selection toggle, delivered to selection listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub dish_id: DishId,
    /// Membership after the change
    pub selected: bool,
    /// Selection size after the change
    pub total: usize,
}

/// Snapshot of the selection handed over when the user presses Continue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedSelection {
    pub id: Uuid,
    /// Creation time (RFC 3339)
    pub created_at: String,
    /// Selected dishes in catalog order
    pub dishes: Vec<Dish>,
    pub counts: MealTypeCounts,
    pub total: usize,
    /// Selected ids with no matching catalog entry
    pub unresolved_ids: Vec<DishId>,
}
