//! Assignment model definition.

use std::collections::{HashMap, HashSet};

use super::types::AssignmentError;

/// A facility-assignment problem.
///
/// Holds the facility and demand-point identifiers plus the cost and
/// distance tables. Identifier lists keep their insertion order, and the
/// solution reports assignments in demand-point insertion order.
///
/// Both tables must define an entry for every facility × demand-point pair;
/// [`validate`](Self::validate) enforces this before any solving happens.
///
/// # Examples
///
/// ```
/// use u_supply::assignment::AssignmentModel;
///
/// let mut model = AssignmentModel::new("example");
/// model.add_facility("F1");
/// model.add_demand_point("D1");
/// model.set_cost("F1", "D1", 10.0);
/// model.set_distance("F1", "D1", 5.0);
/// assert!(model.validate().is_ok());
/// assert_eq!(model.cost("F1", "D1"), Some(10.0));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentModel {
    /// Model name.
    pub name: String,
    /// Facility identifiers, in insertion order.
    pub facilities: Vec<String>,
    /// Demand-point identifiers, in insertion order.
    pub demand_points: Vec<String>,
    /// Cost table, facility -> demand point -> cost.
    costs: HashMap<String, HashMap<String, f64>>,
    /// Distance table, same shape as the cost table.
    distances: HashMap<String, HashMap<String, f64>>,
}

impl AssignmentModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facilities: Vec::new(),
            demand_points: Vec::new(),
            costs: HashMap::new(),
            distances: HashMap::new(),
        }
    }

    /// Adds a facility identifier.
    pub fn add_facility(&mut self, id: impl Into<String>) {
        self.facilities.push(id.into());
    }

    /// Adds a demand-point identifier.
    pub fn add_demand_point(&mut self, id: impl Into<String>) {
        self.demand_points.push(id.into());
    }

    /// Sets the cost of serving `demand_point` from `facility`.
    pub fn set_cost(
        &mut self,
        facility: impl Into<String>,
        demand_point: impl Into<String>,
        value: f64,
    ) {
        self.costs
            .entry(facility.into())
            .or_default()
            .insert(demand_point.into(), value);
    }

    /// Sets the distance between `facility` and `demand_point`.
    pub fn set_distance(
        &mut self,
        facility: impl Into<String>,
        demand_point: impl Into<String>,
        value: f64,
    ) {
        self.distances
            .entry(facility.into())
            .or_default()
            .insert(demand_point.into(), value);
    }

    /// Returns the cost entry for a pair, if defined.
    pub fn cost(&self, facility: &str, demand_point: &str) -> Option<f64> {
        self.costs
            .get(facility)
            .and_then(|row| row.get(demand_point))
            .copied()
    }

    /// Returns the distance entry for a pair, if defined.
    pub fn distance(&self, facility: &str, demand_point: &str) -> Option<f64> {
        self.distances
            .get(facility)
            .and_then(|row| row.get(demand_point))
            .copied()
    }

    /// Returns the number of facilities.
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    /// Returns the number of demand points.
    pub fn demand_point_count(&self) -> usize {
        self.demand_points.len()
    }

    /// Validates the model for solving.
    ///
    /// Checks that both identifier lists are non-empty and duplicate-free,
    /// and that both tables define a finite, non-negative entry for every
    /// facility × demand-point pair. Errors name the offending identifier.
    pub fn validate(&self) -> Result<(), AssignmentError> {
        if self.facilities.is_empty() {
            return Err(AssignmentError::NoFacilities);
        }
        if self.demand_points.is_empty() {
            return Err(AssignmentError::NoDemandPoints);
        }

        let mut seen = HashSet::new();
        for f in &self.facilities {
            if !seen.insert(f.as_str()) {
                return Err(AssignmentError::DuplicateFacility(f.clone()));
            }
        }
        let mut seen = HashSet::new();
        for d in &self.demand_points {
            if !seen.insert(d.as_str()) {
                return Err(AssignmentError::DuplicateDemandPoint(d.clone()));
            }
        }

        for f in &self.facilities {
            for d in &self.demand_points {
                let cost = self
                    .cost(f, d)
                    .ok_or_else(|| AssignmentError::MissingCost {
                        facility: f.clone(),
                        demand_point: d.clone(),
                    })?;
                check_entry("cost", f, d, cost)?;

                let distance =
                    self.distance(f, d)
                        .ok_or_else(|| AssignmentError::MissingDistance {
                            facility: f.clone(),
                            demand_point: d.clone(),
                        })?;
                check_entry("distance", f, d, distance)?;
            }
        }
        Ok(())
    }
}

fn check_entry(
    table: &'static str,
    facility: &str,
    demand_point: &str,
    value: f64,
) -> Result<(), AssignmentError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AssignmentError::InvalidEntry {
            table,
            facility: facility.to_string(),
            demand_point: demand_point.to_string(),
            value,
        });
    }
    Ok(())
}
