//! # Static Catalog
//!
//! In-memory catalog used when no catalog file is configured. It carries the
//! party menu's sample data: thirty veg main-course curries plus one starter,
//! one dessert and one side, with ingredient breakdowns for the headline dishes.

use log::debug;
use shared::{DietaryType, Dish, DishCategory, Ingredient, MealType};

use super::catalog_error::CatalogError;
use super::traits::{CatalogProvider, IngredientTable};

const NORTH_INDIAN_IMAGE: &str =
    "https://storage.googleapis.com/chefkartimages/customer_app_assets/star_chef/north_indian.png";
const SAMPLE_IMAGE: &str =
    "https://images.pexels.com/photos/461382/pexels-photo-461382.jpeg?auto=compress&w=400";

/// Number of generated "Kadhai Paneer" main-course entries
const MAIN_COURSE_COUNT: u32 = 30;

/// Catalog backed by compiled-in sample data
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }

    fn main_course(index: u32) -> Dish {
        Dish {
            id: index,
            name: format!("Kadhai Paneer {}", index),
            category_id: 1,
            meal_type: MealType::MainCourse,
            dietary_type: DietaryType::Veg,
            description: "Paneer cubes in spicy onion gravy with onions and capsicum cubes.".to_string(),
            image: NORTH_INDIAN_IMAGE.to_string(),
            category: DishCategory {
                id: 1,
                name: "North Indian".to_string(),
                image: NORTH_INDIAN_IMAGE.to_string(),
                is_recommended_for_meal_suggestion: Some(true),
            },
            dish_type: "CURRY".to_string(),
            for_chefit: true,
            for_party: true,
            name_hi: String::new(),
            name_bn: String::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn sample_dish(
        id: u32,
        name: &str,
        category_id: u32,
        category_name: &str,
        meal_type: MealType,
        dietary_type: DietaryType,
        description: &str,
        dish_type: &str,
    ) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            category_id,
            meal_type,
            dietary_type,
            description: description.to_string(),
            image: SAMPLE_IMAGE.to_string(),
            category: DishCategory {
                id: category_id,
                name: category_name.to_string(),
                image: SAMPLE_IMAGE.to_string(),
                is_recommended_for_meal_suggestion: None,
            },
            dish_type: dish_type.to_string(),
            for_chefit: true,
            for_party: true,
            name_hi: String::new(),
            name_bn: String::new(),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn load_dishes(&self) -> Result<Vec<Dish>, CatalogError> {
        let mut dishes: Vec<Dish> = (1..=MAIN_COURSE_COUNT).map(Self::main_course).collect();

        dishes.push(Self::sample_dish(
            101,
            "Tandoori Chicken",
            2,
            "Indian Starter",
            MealType::Starter,
            DietaryType::NonVeg,
            "Juicy chicken marinated in spices, grilled to perfection.",
            "GRILL",
        ));
        dishes.push(Self::sample_dish(
            201,
            "Kesar Phirni",
            3,
            "Desserts",
            MealType::Dessert,
            DietaryType::Veg,
            "Traditional Indian milk pudding with saffron & pistachio.",
            "DESSERT",
        ));
        dishes.push(Self::sample_dish(
            301,
            "Phulka Roti",
            4,
            "Sides",
            MealType::Sides,
            DietaryType::Veg,
            "Soft Indian bread made from wheat flour.",
            "BREAD",
        ));

        debug!("Static catalog produced {} dishes", dishes.len());
        Ok(dishes)
    }

    fn load_ingredients(&self) -> Result<IngredientTable, CatalogError> {
        let mut table = IngredientTable::new();
        table.insert(
            "Kadhai Paneer 1".to_string(),
            vec![
                Ingredient::new("Paneer", "200g"),
                Ingredient::new("Onion", "1"),
                Ingredient::new("Capsicum", "1/2"),
                Ingredient::new("Spices", "to taste"),
            ],
        );
        table.insert(
            "Tandoori Chicken".to_string(),
            vec![
                Ingredient::new("Chicken", "250g"),
                Ingredient::new("Yogurt", "2 tbsp"),
                Ingredient::new("Spices", "to taste"),
            ],
        );
        table.insert(
            "Kesar Phirni".to_string(),
            vec![
                Ingredient::new("Milk", "500ml"),
                Ingredient::new("Rice", "50g"),
                Ingredient::new("Saffron", "a few strands"),
                Ingredient::new("Sugar", "to taste"),
            ],
        );
        table.insert(
            "Phulka Roti".to_string(),
            vec![
                Ingredient::new("Wheat Flour", "100g"),
                Ingredient::new("Water", "as needed"),
                Ingredient::new("Salt", "to taste"),
            ],
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}
