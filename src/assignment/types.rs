//! Assignment data types: selected pairs, objective weights, errors.

/// Errors produced while validating or solving an assignment model.
///
/// Validation variants are reported eagerly, before the solver backend is
/// ever invoked. Solver variants ([`Infeasible`](Self::Infeasible),
/// [`Unbounded`](Self::Unbounded), [`Solver`](Self::Solver),
/// [`IncompleteSolution`](Self::IncompleteSolution)) surface backend
/// failures distinctly so they are never mistaken for an empty result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssignmentError {
    #[error("facility list is empty")]
    NoFacilities,

    #[error("demand point list is empty")]
    NoDemandPoints,

    #[error("duplicate facility id: {0}")]
    DuplicateFacility(String),

    #[error("duplicate demand point id: {0}")]
    DuplicateDemandPoint(String),

    #[error("no cost entry for ({facility}, {demand_point})")]
    MissingCost {
        facility: String,
        demand_point: String,
    },

    #[error("no distance entry for ({facility}, {demand_point})")]
    MissingDistance {
        facility: String,
        demand_point: String,
    },

    #[error("{table} entry for ({facility}, {demand_point}) must be finite and non-negative, got {value}")]
    InvalidEntry {
        table: &'static str,
        facility: String,
        demand_point: String,
        value: f64,
    },

    #[error("{name} weight must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("assignment model is infeasible")]
    Infeasible,

    #[error("assignment objective is unbounded")]
    Unbounded,

    #[error("solver error: {0}")]
    Solver(String),

    #[error("solver selected {selected} facilities for demand point {demand_point}, expected exactly one")]
    IncompleteSolution {
        demand_point: String,
        selected: usize,
    },
}

/// A selected facility / demand-point pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Facility chosen to serve the demand point.
    pub facility: String,
    /// Demand point being served.
    pub demand_point: String,
}

impl Assignment {
    /// Creates an assignment pair.
    pub fn new(facility: impl Into<String>, demand_point: impl Into<String>) -> Self {
        Self {
            facility: facility.into(),
            demand_point: demand_point.into(),
        }
    }
}

/// Weights blending the cost and distance tables into one linear objective.
///
/// The solver minimizes `cost * cost[f][d] + distance * distance[f][d]`
/// summed over the selected pairs.
///
/// # Defaults
///
/// ```
/// use u_supply::assignment::ObjectiveWeights;
///
/// let weights = ObjectiveWeights::default();
/// assert_eq!(weights.cost, 0.5);
/// assert_eq!(weights.distance, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveWeights {
    /// Weight applied to every cost entry.
    pub cost: f64,
    /// Weight applied to every distance entry.
    pub distance: f64,
}

impl Default for ObjectiveWeights {
    /// An even 0.5 / 0.5 blend of cost and distance.
    fn default() -> Self {
        Self {
            cost: 0.5,
            distance: 0.5,
        }
    }
}

impl ObjectiveWeights {
    /// Creates weights from explicit cost and distance coefficients.
    pub fn new(cost: f64, distance: f64) -> Self {
        Self { cost, distance }
    }

    /// Pure cost minimization: distance entries are ignored.
    pub fn cost_only() -> Self {
        Self {
            cost: 1.0,
            distance: 0.0,
        }
    }

    /// Pure distance minimization: cost entries are ignored.
    pub fn distance_only() -> Self {
        Self {
            cost: 0.0,
            distance: 1.0,
        }
    }

    /// Sets the cost weight.
    pub fn with_cost(mut self, weight: f64) -> Self {
        self.cost = weight;
        self
    }

    /// Sets the distance weight.
    pub fn with_distance(mut self, weight: f64) -> Self {
        self.distance = weight;
        self
    }

    /// Validates the weights.
    ///
    /// Both must be finite and non-negative.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(AssignmentError::InvalidWeight {
                name: "cost",
                value: self.cost,
            });
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(AssignmentError::InvalidWeight {
                name: "distance",
                value: self.distance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_new() {
        let a = Assignment::new("F1", "D1");
        assert_eq!(a.facility, "F1");
        assert_eq!(a.demand_point, "D1");
    }

    #[test]
    fn test_default_weights() {
        let weights = ObjectiveWeights::default();
        assert_eq!(weights.cost, 0.5);
        assert_eq!(weights.distance, 0.5);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let weights = ObjectiveWeights::default().with_cost(0.6).with_distance(0.4);
        assert_eq!(weights.cost, 0.6);
        assert_eq!(weights.distance, 0.4);
    }

    #[test]
    fn test_presets() {
        let cost = ObjectiveWeights::cost_only();
        assert_eq!(cost.cost, 1.0);
        assert_eq!(cost.distance, 0.0);

        let distance = ObjectiveWeights::distance_only();
        assert_eq!(distance.cost, 0.0);
        assert_eq!(distance.distance, 1.0);
    }

    #[test]
    fn test_validate_negative_weight() {
        let weights = ObjectiveWeights::new(-0.1, 0.5);
        assert_eq!(
            weights.validate(),
            Err(AssignmentError::InvalidWeight {
                name: "cost",
                value: -0.1,
            })
        );
    }

    #[test]
    fn test_validate_non_finite_weight() {
        assert!(ObjectiveWeights::new(0.5, f64::NAN).validate().is_err());
        assert!(ObjectiveWeights::new(f64::INFINITY, 0.5).validate().is_err());
    }

    #[test]
    fn test_zero_weights_are_valid() {
        // Degenerate but well-formed: every assignment scores zero.
        assert!(ObjectiveWeights::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_error_messages_name_the_argument() {
        let err = AssignmentError::MissingCost {
            facility: "F1".into(),
            demand_point: "D9".into(),
        };
        assert!(err.to_string().contains("F1"));
        assert!(err.to_string().contains("D9"));
    }
}
