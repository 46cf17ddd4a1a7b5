//! Supply-chain planning utilities.
//!
//! Provides two independent numerical components:
//!
//! - **Assignment**: weighted facility-to-demand-point assignment. Builds a
//!   binary integer program (one 0/1 variable per facility × demand-point
//!   pair, exactly-one constraint per demand point) and delegates it to an
//!   off-the-shelf mixed-integer solver.
//! - **Forecast**: one-step-ahead demand forecasting via simple exponential
//!   smoothing.
//!
//! # Architecture
//!
//! The two modules share no state and no types; each call consumes its own
//! freshly supplied input and returns before anything else can observe it.
//! Both are synchronous and single-threaded. The assignment module talks to
//! its backend through the [`assignment::AssignmentSolver`] trait, so any
//! mixed-integer solver that can declare binary variables, linear equality
//! constraints, and a linear objective is interchangeable.

pub mod assignment;
pub mod forecast;
