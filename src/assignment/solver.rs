//! Assignment solving via mixed-integer programming.

use std::time::Instant;

use log::debug;
use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use super::model::AssignmentModel;
use super::types::{Assignment, AssignmentError, ObjectiveWeights};

/// Solution to an assignment model.
///
/// Contains exactly one selected pair per demand point, in demand-point
/// insertion order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentSolution {
    /// Selected facility / demand-point pairs.
    pub assignments: Vec<Assignment>,
    /// Objective value of the returned assignment.
    pub objective_value: f64,
    /// Solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl AssignmentSolution {
    /// Returns the facility assigned to the given demand point, if any.
    pub fn facility_for(&self, demand_point: &str) -> Option<&str> {
        self.assignments
            .iter()
            .find(|a| a.demand_point == demand_point)
            .map(|a| a.facility.as_str())
    }
}

/// Trait for assignment solver implementations.
///
/// The model layer only needs a backend that can declare binary variables,
/// express a linear objective and linear equality constraints, run a silent
/// solve, and read back resolved variable values. Any mixed-integer solver
/// with that surface can implement this trait.
pub trait AssignmentSolver {
    /// Solves the model under the given objective weights.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed model or weights, before
    /// the backend is invoked; returns a solver error if the backend reports
    /// infeasibility, unboundedness, or an internal failure.
    fn solve(
        &self,
        model: &AssignmentModel,
        weights: &ObjectiveWeights,
    ) -> Result<AssignmentSolution, AssignmentError>;
}

/// Exact solver backed by the `microlp` branch-and-bound MILP library.
///
/// Builds one binary variable per facility × demand-point pair with
/// objective coefficient `cost_weight * cost + distance_weight * distance`,
/// adds an exactly-one equality constraint per demand point, and minimizes.
///
/// Feasibility is structural here (any facility can serve any demand point,
/// capacities are unlimited), so an infeasible or unbounded report from the
/// backend is surfaced as an error rather than an empty solution. When two
/// facilities tie on the combined score, whichever the backend picks is
/// returned.
pub struct MilpSolver;

impl MilpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MilpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentSolver for MilpSolver {
    fn solve(
        &self,
        model: &AssignmentModel,
        weights: &ObjectiveWeights,
    ) -> Result<AssignmentSolution, AssignmentError> {
        model.validate()?;
        weights.validate()?;

        let started = Instant::now();
        let mut problem = Problem::new(OptimizationDirection::Minimize);

        // vars[fi][di] = 1 iff facility fi serves demand point di
        let mut vars: Vec<Vec<Variable>> = Vec::with_capacity(model.facility_count());
        for f in &model.facilities {
            let mut row = Vec::with_capacity(model.demand_point_count());
            for d in &model.demand_points {
                let cost = model
                    .cost(f, d)
                    .ok_or_else(|| AssignmentError::MissingCost {
                        facility: f.clone(),
                        demand_point: d.clone(),
                    })?;
                let distance =
                    model
                        .distance(f, d)
                        .ok_or_else(|| AssignmentError::MissingDistance {
                            facility: f.clone(),
                            demand_point: d.clone(),
                        })?;
                let coefficient = weights.cost * cost + weights.distance * distance;
                row.push(problem.add_binary_var(coefficient));
            }
            vars.push(row);
        }

        // Each demand point is served by exactly one facility.
        for di in 0..model.demand_point_count() {
            let terms: Vec<(Variable, f64)> = vars.iter().map(|row| (row[di], 1.0)).collect();
            problem.add_constraint(&terms, ComparisonOp::Eq, 1.0);
        }

        debug!(
            "solving '{}': {} facilities x {} demand points ({} binary vars)",
            model.name,
            model.facility_count(),
            model.demand_point_count(),
            model.facility_count() * model.demand_point_count()
        );

        let solution = problem.solve().map_err(|e| match e {
            microlp::Error::Infeasible => AssignmentError::Infeasible,
            microlp::Error::Unbounded => AssignmentError::Unbounded,
            microlp::Error::InternalError(msg) => AssignmentError::Solver(msg),
        })?;

        let mut assignments = Vec::with_capacity(model.demand_point_count());
        for (di, d) in model.demand_points.iter().enumerate() {
            let selected: Vec<&String> = model
                .facilities
                .iter()
                .enumerate()
                .filter(|(fi, _)| solution[vars[*fi][di]] > 0.5)
                .map(|(_, f)| f)
                .collect();

            match selected.as_slice() {
                [facility] => assignments.push(Assignment::new((*facility).clone(), d.clone())),
                _ => {
                    return Err(AssignmentError::IncompleteSolution {
                        demand_point: d.clone(),
                        selected: selected.len(),
                    })
                }
            }
        }

        let objective_value = solution.objective();
        let solve_time_ms = started.elapsed().as_millis() as i64;
        debug!(
            "solved '{}': objective {}, {} ms",
            model.name, objective_value, solve_time_ms
        );

        Ok(AssignmentSolution {
            assignments,
            objective_value,
            solve_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Two facilities, three demand points, unique minima per demand point.
    fn worked_example() -> AssignmentModel {
        let mut model = AssignmentModel::new("worked-example");
        model.add_facility("F1");
        model.add_facility("F2");
        for d in ["D1", "D2", "D3"] {
            model.add_demand_point(d);
        }
        for (f, d, cost, distance) in [
            ("F1", "D1", 10.0, 5.0),
            ("F1", "D2", 20.0, 10.0),
            ("F1", "D3", 15.0, 6.0),
            ("F2", "D1", 12.0, 6.0),
            ("F2", "D2", 18.0, 7.0),
            ("F2", "D3", 25.0, 9.0),
        ] {
            model.set_cost(f, d, cost);
            model.set_distance(f, d, distance);
        }
        model
    }

    #[test]
    fn test_worked_example() {
        init();
        let model = worked_example();
        let weights = ObjectiveWeights::new(0.6, 0.4);

        let solution = MilpSolver::new().solve(&model, &weights).unwrap();

        // Combined scores: D1: 8.0 vs 9.6, D2: 16.0 vs 13.6, D3: 11.4 vs 18.6
        assert_eq!(solution.facility_for("D1"), Some("F1"));
        assert_eq!(solution.facility_for("D2"), Some("F2"));
        assert_eq!(solution.facility_for("D3"), Some("F1"));
        assert!((solution.objective_value - 33.0).abs() < 1e-9);
        assert!(solution.solve_time_ms >= 0);
    }

    #[test]
    fn test_pure_cost_weights() {
        init();
        let model = worked_example();
        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::cost_only())
            .unwrap();

        // Nearest-by-cost per demand point: 10 < 12, 18 < 20, 15 < 25
        assert_eq!(solution.facility_for("D1"), Some("F1"));
        assert_eq!(solution.facility_for("D2"), Some("F2"));
        assert_eq!(solution.facility_for("D3"), Some("F1"));
        assert!((solution.objective_value - 43.0).abs() < 1e-9);
    }

    #[test]
    fn test_pure_distance_weights() {
        init();
        let model = worked_example();
        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::distance_only())
            .unwrap();

        // Nearest-by-distance per demand point: 5 < 6, 7 < 10, 6 < 9
        assert_eq!(solution.facility_for("D1"), Some("F1"));
        assert_eq!(solution.facility_for("D2"), Some("F2"));
        assert_eq!(solution.facility_for("D3"), Some("F1"));
        assert!((solution.objective_value - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_assignment_per_demand_point() {
        init();
        let model = worked_example();
        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::default())
            .unwrap();

        assert_eq!(solution.assignments.len(), model.demand_point_count());
        let served: HashSet<&str> = solution
            .assignments
            .iter()
            .map(|a| a.demand_point.as_str())
            .collect();
        assert_eq!(served.len(), model.demand_point_count());
    }

    #[test]
    fn test_single_facility_serves_all() {
        init();
        let mut model = AssignmentModel::new("single");
        model.add_facility("F1");
        for (d, cost) in [("D1", 3.0), ("D2", 7.0), ("D3", 11.0)] {
            model.add_demand_point(d);
            model.set_cost("F1", d, cost);
            model.set_distance("F1", d, 1.0);
        }

        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::default())
            .unwrap();

        assert_eq!(solution.assignments.len(), 3);
        assert!(solution.assignments.iter().all(|a| a.facility == "F1"));
        // 0.5 * (3 + 7 + 11) + 0.5 * 3
        assert!((solution.objective_value - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_tied_facilities_still_yield_one_assignment() {
        init();
        // Identical facilities: either choice attains the minimum.
        let mut model = AssignmentModel::new("tied");
        model.add_facility("F1");
        model.add_facility("F2");
        model.add_demand_point("D1");
        for f in ["F1", "F2"] {
            model.set_cost(f, "D1", 4.0);
            model.set_distance(f, "D1", 2.0);
        }

        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::default())
            .unwrap();

        assert_eq!(solution.assignments.len(), 1);
        assert!((solution.objective_value - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weights_still_assign_every_demand_point() {
        init();
        let model = worked_example();
        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::new(0.0, 0.0))
            .unwrap();

        assert_eq!(solution.assignments.len(), 3);
        assert!((solution.objective_value - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_validation_error_before_solve() {
        init();
        let mut model = worked_example();
        model.add_demand_point("D4"); // no table entries for D4

        let result = MilpSolver::new().solve(&model, &ObjectiveWeights::default());
        assert_eq!(
            result.unwrap_err(),
            AssignmentError::MissingCost {
                facility: "F1".into(),
                demand_point: "D4".into(),
            }
        );
    }

    #[test]
    fn test_invalid_weights_rejected() {
        init();
        let model = worked_example();
        let result = MilpSolver::new().solve(&model, &ObjectiveWeights::new(0.5, -1.0));
        assert_eq!(
            result.unwrap_err(),
            AssignmentError::InvalidWeight {
                name: "distance",
                value: -1.0,
            }
        );
    }

    #[test]
    fn test_facility_for_unknown_demand_point() {
        init();
        let model = worked_example();
        let solution = MilpSolver::new()
            .solve(&model, &ObjectiveWeights::default())
            .unwrap();
        assert_eq!(solution.facility_for("D99"), None);
    }

    // With unlimited capacity the demand points are independent, so the
    // optimum is the sum of per-demand-point minima of the combined score.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn prop_solution_attains_per_demand_minimum(
            n_facilities in 1usize..4,
            n_demand_points in 1usize..4,
            costs in prop::collection::vec(0.0f64..100.0, 16),
            distances in prop::collection::vec(0.0f64..100.0, 16),
            w_cost in 0.0f64..1.0,
            w_distance in 0.0f64..1.0,
        ) {
            let mut model = AssignmentModel::new("random");
            for fi in 0..n_facilities {
                model.add_facility(format!("F{fi}"));
            }
            for di in 0..n_demand_points {
                model.add_demand_point(format!("D{di}"));
            }
            for fi in 0..n_facilities {
                for di in 0..n_demand_points {
                    model.set_cost(format!("F{fi}"), format!("D{di}"), costs[fi * 4 + di]);
                    model.set_distance(format!("F{fi}"), format!("D{di}"), distances[fi * 4 + di]);
                }
            }
            let weights = ObjectiveWeights::new(w_cost, w_distance);
            let score = |fi: usize, di: usize| {
                w_cost * costs[fi * 4 + di] + w_distance * distances[fi * 4 + di]
            };

            let solution = MilpSolver::new().solve(&model, &weights).unwrap();
            prop_assert_eq!(solution.assignments.len(), n_demand_points);

            let mut best_total = 0.0;
            for di in 0..n_demand_points {
                let best = (0..n_facilities)
                    .map(|fi| score(fi, di))
                    .fold(f64::INFINITY, f64::min);
                best_total += best;

                let facility = solution.facility_for(&format!("D{di}")).unwrap();
                let fi: usize = facility[1..].parse().unwrap();
                prop_assert!(
                    score(fi, di) <= best + 1e-6,
                    "demand point D{} assigned score {} but minimum is {}",
                    di, score(fi, di), best
                );
            }
            prop_assert!((solution.objective_value - best_total).abs() <= 1e-6);
        }
    }
}
