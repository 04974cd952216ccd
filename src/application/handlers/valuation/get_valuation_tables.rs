//! GetValuationTablesHandler - Query handler exposing the active lookup tables.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::valuation::{RiskLevel, ValuationAssumptions, ValuationEngine};

/// Multiple bounds for one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorMultiples {
    pub sector: String,
    pub min: f64,
    pub max: f64,
}

/// Discount rate for one risk tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskDiscountRate {
    pub risk_level: RiskLevel,
    pub discount_rate: f64,
}

/// Read model of the tables and assumptions the engine values against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationTablesView {
    pub sectors: Vec<SectorMultiples>,
    pub risk_levels: Vec<RiskDiscountRate>,
    pub assumptions: ValuationAssumptions,
}

/// Handler for the lookup-table query.
pub struct GetValuationTablesHandler {
    engine: Arc<ValuationEngine>,
}

impl GetValuationTablesHandler {
    pub fn new(engine: Arc<ValuationEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self) -> ValuationTablesView {
        let tables = self.engine.tables();

        ValuationTablesView {
            sectors: tables
                .sectors()
                .map(|(sector, range)| SectorMultiples {
                    sector: sector.to_string(),
                    min: range.min,
                    max: range.max,
                })
                .collect(),
            risk_levels: tables
                .discount_rates()
                .map(|(risk_level, discount_rate)| RiskDiscountRate {
                    risk_level,
                    discount_rate,
                })
                .collect(),
            assumptions: *self.engine.assumptions(),
        }
    }
}
