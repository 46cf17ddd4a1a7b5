//! Facility assignment optimization.
//!
//! Assigns exactly one serving facility to each demand point, minimizing a
//! weighted sum of cost and distance. The problem is formulated as a binary
//! integer program — one 0/1 variable per facility × demand-point pair and
//! an exactly-one equality constraint per demand point — and handed to an
//! off-the-shelf mixed-integer solver. Facilities have unlimited capacity,
//! so the model is always feasible.
//!
//! # Key Components
//!
//! - **Model**: [`AssignmentModel`] — identifiers plus cost/distance tables
//! - **Weights**: [`ObjectiveWeights`] — linear blend of the two tables
//! - **Solver**: [`AssignmentSolver`] trait with the [`MilpSolver`] backend
//! - **Solution**: [`AssignmentSolution`] — one selected pair per demand point
//!
//! # Examples
//!
//! Two facilities serving three demand points, weighted 60% cost / 40%
//! distance:
//!
//! ```
//! use u_supply::assignment::{
//!     AssignmentModel, AssignmentSolver, MilpSolver, ObjectiveWeights,
//! };
//!
//! let mut model = AssignmentModel::new("regional-rollout");
//! model.add_facility("F1");
//! model.add_facility("F2");
//! for d in ["D1", "D2", "D3"] {
//!     model.add_demand_point(d);
//! }
//! for (f, d, cost, distance) in [
//!     ("F1", "D1", 10.0, 5.0),
//!     ("F1", "D2", 20.0, 10.0),
//!     ("F1", "D3", 15.0, 6.0),
//!     ("F2", "D1", 12.0, 6.0),
//!     ("F2", "D2", 18.0, 7.0),
//!     ("F2", "D3", 25.0, 9.0),
//! ] {
//!     model.set_cost(f, d, cost);
//!     model.set_distance(f, d, distance);
//! }
//!
//! let weights = ObjectiveWeights::new(0.6, 0.4);
//! let solution = MilpSolver::new().solve(&model, &weights)?;
//!
//! assert_eq!(solution.facility_for("D1"), Some("F1"));
//! assert_eq!(solution.facility_for("D2"), Some("F2"));
//! assert_eq!(solution.facility_for("D3"), Some("F1"));
//! # Ok::<(), u_supply::assignment::AssignmentError>(())
//! ```
//!
//! Tie-breaking between assignments with equal objective value is left to
//! the solver backend.

mod model;
mod solver;
mod types;

pub use model::AssignmentModel;
pub use solver::{AssignmentSolution, AssignmentSolver, MilpSolver};
pub use types::{Assignment, AssignmentError, ObjectiveWeights};
