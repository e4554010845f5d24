//! # toolrental
//!
//! A tool rental pricing library.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `tr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! toolrental = "0.1"
//! ```
//!
//! ```rust
//! use toolrental::pricing::{Brand, Tool, ToolCategory};
//! use toolrental::time::Date;
//!
//! let tool = Tool::new("JAKR", ToolCategory::Jackhammer, Brand::Ridgid);
//! let checkout_date = Date::from_ymd(2020, 7, 2).unwrap();
//! let agreement = tool.checkout(checkout_date, 4, 50).unwrap();
//!
//! assert_eq!(agreement.charge_days(), 1);
//! assert_eq!(agreement.final_charge().to_string(), "1.50");
//! print!("{agreement}");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, errors, and exact-decimal money utilities.
pub use tr_core as core;

/// Date, weekday, and holiday calendar types.
pub use tr_time as time;

/// Tool catalog, checkout validation, and charge calculation.
pub use tr_pricing as pricing;
