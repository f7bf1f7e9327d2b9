// ABOUTME: Diet plan models for proportional macro adjustment
// ABOUTME: DietPlan, Meal, FoodLine, MacroTotals, MacroDimension, and AdjustmentSpec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use serde::{Deserialize, Serialize};

/// One of the four energy/macro dimensions carried at every plan level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroDimension {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrate (g)
    Carbs,
    /// Fat (g)
    Fats,
}

impl MacroDimension {
    /// All dimensions in plan column order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fats];
}

/// Nullable calorie and macro values for a plan, meal, or food line
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: Option<f64>,
    /// Protein (g)
    pub protein: Option<f64>,
    /// Carbohydrate (g)
    pub carbs: Option<f64>,
    /// Fat (g)
    pub fats: Option<f64>,
}

impl MacroTotals {
    /// Value for one dimension
    #[must_use]
    pub const fn get(&self, dimension: MacroDimension) -> Option<f64> {
        match dimension {
            MacroDimension::Calories => self.calories,
            MacroDimension::Protein => self.protein,
            MacroDimension::Carbs => self.carbs,
            MacroDimension::Fats => self.fats,
        }
    }

    /// Replace the value for one dimension
    pub fn set(&mut self, dimension: MacroDimension, value: Option<f64>) {
        match dimension {
            MacroDimension::Calories => self.calories = value,
            MacroDimension::Protein => self.protein = value,
            MacroDimension::Carbs => self.carbs = value,
            MacroDimension::Fats => self.fats = value,
        }
    }
}

/// One food in a meal, with its contribution at the current quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLine {
    /// Display name, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Serving quantity; the unit is owned by the caller
    pub quantity: f64,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrate (g)
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fats: Option<f64>,
}

impl FoodLine {
    /// Macro values of this line
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }

    /// Overwrite the macro values of this line
    pub fn set_macros(&mut self, macros: MacroTotals) {
        self.calories = macros.calories;
        self.protein = macros.protein;
        self.carbs = macros.carbs;
        self.fats = macros.fats;
    }
}

/// A meal with its stated totals and its food lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name, passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrate (g)
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fats: Option<f64>,
    /// Food lines in display order
    #[serde(default)]
    pub foods: Vec<FoodLine>,
}

impl Meal {
    /// Stated totals of this meal
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
        }
    }

    /// Overwrite the stated totals of this meal
    pub fn set_macros(&mut self, macros: MacroTotals) {
        self.calories = macros.calories;
        self.protein = macros.protein;
        self.carbs = macros.carbs;
        self.fats = macros.fats;
    }
}

/// A patient's diet plan: stated daily totals plus ordered meals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Stated daily energy (kcal)
    #[serde(default)]
    pub total_calories: Option<f64>,
    /// Stated daily protein (g)
    #[serde(default)]
    pub total_protein: Option<f64>,
    /// Stated daily carbohydrate (g)
    #[serde(default)]
    pub total_carbs: Option<f64>,
    /// Stated daily fat (g)
    #[serde(default)]
    pub total_fats: Option<f64>,
    /// Meals in display order
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// Output of a plan adjustment; same shape as the input plan
pub type AdjustedPlan = DietPlan;

impl DietPlan {
    /// Stated daily totals
    #[must_use]
    pub const fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.total_calories,
            protein: self.total_protein,
            carbs: self.total_carbs,
            fats: self.total_fats,
        }
    }

    /// Overwrite the stated daily totals
    pub fn set_totals(&mut self, totals: MacroTotals) {
        self.total_calories = totals.calories;
        self.total_protein = totals.protein;
        self.total_carbs = totals.carbs;
        self.total_fats = totals.fats;
    }

    /// Per-dimension sum of the meals' stated totals.
    ///
    /// Missing meal values count as zero; a dimension is `None` when no
    /// meal carries a value for it at all.
    #[must_use]
    pub fn meal_totals(&self) -> MacroTotals {
        let mut sums = MacroTotals::default();
        for dimension in MacroDimension::ALL {
            let sum = self
                .meals
                .iter()
                .filter_map(|meal| meal.macros().get(dimension))
                .fold(None, |acc: Option<f64>, value| Some(acc.unwrap_or(0.0) + value));
            sums.set(dimension, sum);
        }
        sums
    }
}

/// A nutritionist's request to rescale a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentSpec {
    /// Signed percentage change (`20` = +20%, `-10` = -10%)
    pub percentage: f64,
    /// Scale calorie values
    #[serde(default)]
    pub adjust_calories: bool,
    /// Scale protein values
    #[serde(default)]
    pub adjust_protein: bool,
    /// Scale carbohydrate values
    #[serde(default)]
    pub adjust_carbs: bool,
    /// Scale fat values
    #[serde(default)]
    pub adjust_fats: bool,
    /// Re-derive stated plan totals from the adjusted meals
    #[serde(default)]
    pub maintain_ratios: bool,
}

impl AdjustmentSpec {
    /// Scale every dimension by `percentage`, reconciling totals with the meals
    #[must_use]
    pub const fn all_macros(percentage: f64) -> Self {
        Self {
            percentage,
            adjust_calories: true,
            adjust_protein: true,
            adjust_carbs: true,
            adjust_fats: true,
            maintain_ratios: true,
        }
    }

    /// Whether values of `dimension` are scaled
    #[must_use]
    pub const fn adjusts(&self, dimension: MacroDimension) -> bool {
        match dimension {
            MacroDimension::Calories => self.adjust_calories,
            MacroDimension::Protein => self.adjust_protein,
            MacroDimension::Carbs => self.adjust_carbs,
            MacroDimension::Fats => self.adjust_fats,
        }
    }
}
