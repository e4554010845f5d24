//! `Tool` and the checkout entry point.

use tr_core::{ensure, Result};
use tr_time::Date;

use crate::agreement::RentalAgreement;
use crate::brand::Brand;
use crate::category::ToolCategory;

/// A rentable tool.
///
/// Many tools may share one category; the category carries all pricing
/// policy, the tool itself only identity and branding. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    code: String,
    category: ToolCategory,
    brand: Brand,
}

impl Tool {
    /// Create a tool with the given code, category, and brand.
    pub fn new(code: impl Into<String>, category: ToolCategory, brand: Brand) -> Self {
        Self {
            code: code.into(),
            category,
            brand,
        }
    }

    /// Short identifier (e.g. `"JAKR"`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Pricing category.
    pub fn category(&self) -> ToolCategory {
        self.category
    }

    /// Brand.
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Check the tool out, producing a rental agreement.
    ///
    /// `rental_days` must be at least 1 and `discount_percent` within
    /// `[0, 100]`. The agreement carries its own copy of the tool; the
    /// tool itself is never mutated.
    pub fn checkout(
        &self,
        checkout_date: Date,
        rental_days: i32,
        discount_percent: i32,
    ) -> Result<RentalAgreement> {
        ensure!(rental_days >= 1, "Rental day count must be greater than 0");
        ensure!(
            (0..=100).contains(&discount_percent),
            "Discount percent must be between 0 and 100"
        );
        Ok(RentalAgreement::new(
            self.clone(),
            checkout_date,
            rental_days,
            discount_percent,
        ))
    }
}
