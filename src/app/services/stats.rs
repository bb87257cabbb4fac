//! Aggregates behind the statistics tab.

use std::collections::BTreeMap;

use crate::app::domain::{Contract, ProcurementType};

/// Number of suppliers shown in the ranking chart
pub const TOP_SUPPLIERS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// (year, contract count), ascending year
    pub count_by_year: Vec<(i32, usize)>,
    /// (year, total expected cost), ascending year
    pub cost_by_year: Vec<(i32, f64)>,
    pub count_by_type: Vec<(ProcurementType, usize)>,
    /// (supplier, total expected cost), highest first
    pub top_suppliers: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsView {
    NoData,
    Charts(Statistics),
}

impl StatisticsView {
    pub fn from_contracts(contracts: &[Contract]) -> Self {
        if contracts.is_empty() {
            return StatisticsView::NoData;
        }
        StatisticsView::Charts(Statistics {
            count_by_year: count_by_year(contracts),
            cost_by_year: cost_by_year(contracts),
            count_by_type: count_by_type(contracts),
            top_suppliers: top_suppliers(contracts, TOP_SUPPLIERS),
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn count_by_year(contracts: &[Contract]) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for contract in contracts {
        *counts.entry(contract.year).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Per-year cost totals, each rounded to two decimals.
pub fn cost_by_year(contracts: &[Contract]) -> Vec<(i32, f64)> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for contract in contracts {
        *totals.entry(contract.year).or_default() += contract.expected_cost;
    }
    totals
        .into_iter()
        .map(|(year, total)| (year, round2(total)))
        .collect()
}

/// Contract count per procurement type. Types without contracts are left out.
pub fn count_by_type(contracts: &[Contract]) -> Vec<(ProcurementType, usize)> {
    ProcurementType::ALL
        .iter()
        .map(|kind| {
            let count = contracts
                .iter()
                .filter(|c| c.procurement_type == *kind)
                .count();
            (*kind, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// The `limit` suppliers with the largest summed cost. Ties keep the order
/// in which suppliers first appear.
pub fn top_suppliers(contracts: &[Contract], limit: usize) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for contract in contracts {
        match totals
            .iter_mut()
            .find(|(name, _)| *name == contract.contracting_party)
        {
            Some((_, total)) => *total += contract.expected_cost,
            None => totals.push((contract.contracting_party.clone(), contract.expected_cost)),
        }
    }

    let mut ranked: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, total)| (name, round2(total)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(year: i32, cost: f64, party: &str, kind: ProcurementType) -> Contract {
        Contract {
            year,
            expected_cost: cost,
            contracting_party: party.to_string(),
            procurement_type: kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input_is_no_data() {
        assert_eq!(StatisticsView::from_contracts(&[]), StatisticsView::NoData);
    }

    #[test]
    fn test_cost_by_year() {
        let contracts = vec![
            contract(2023, 100.0, "A", ProcurementType::Direct),
            contract(2023, 50.0, "B", ProcurementType::Direct),
            contract(2024, 75.0, "A", ProcurementType::Direct),
        ];
        assert_eq!(cost_by_year(&contracts), vec![(2023, 150.0), (2024, 75.0)]);
        assert_eq!(count_by_year(&contracts), vec![(2023, 2), (2024, 1)]);
    }

    #[test]
    fn test_cost_totals_are_rounded() {
        let contracts = vec![
            contract(2024, 0.1, "A", ProcurementType::Direct),
            contract(2024, 0.2, "A", ProcurementType::Direct),
        ];
        assert_eq!(cost_by_year(&contracts), vec![(2024, 0.3)]);
        assert_eq!(top_suppliers(&contracts, 10), vec![("A".to_string(), 0.3)]);
    }

    #[test]
    fn test_years_sorted_ascending() {
        let contracts = vec![
            contract(2025, 1.0, "A", ProcurementType::Direct),
            contract(2021, 1.0, "A", ProcurementType::Direct),
            contract(2023, 1.0, "A", ProcurementType::Direct),
        ];
        let years: Vec<i32> = count_by_year(&contracts).into_iter().map(|(y, _)| y).collect();
        assert_eq!(years, vec![2021, 2023, 2025]);
    }

    #[test]
    fn test_count_by_type_omits_missing_types() {
        let contracts = vec![
            contract(2024, 1.0, "A", ProcurementType::Procedure),
            contract(2024, 1.0, "A", ProcurementType::Procedure),
        ];
        assert_eq!(count_by_type(&contracts), vec![(ProcurementType::Procedure, 2)]);

        let mixed = vec![
            contract(2024, 1.0, "A", ProcurementType::Procedure),
            contract(2024, 1.0, "A", ProcurementType::Direct),
        ];
        assert_eq!(
            count_by_type(&mixed),
            vec![(ProcurementType::Direct, 1), (ProcurementType::Procedure, 1)]
        );
    }

    #[test]
    fn test_top_suppliers_sorted_and_limited() {
        // 15 suppliers with distinct totals S<i> = (i + 1) * 100, listed out of
        // order; S14 is split over two contracts to check summing.
        let mut contracts: Vec<Contract> = (0..15)
            .map(|n| (n * 7) % 15)
            .filter(|i| *i != 14)
            .map(|i| contract(2024, ((i + 1) * 100) as f64, &format!("S{}", i), ProcurementType::Direct))
            .collect();
        contracts.push(contract(2023, 1000.0, "S14", ProcurementType::Direct));
        contracts.push(contract(2025, 500.0, "S14", ProcurementType::Procedure));

        let top = top_suppliers(&contracts, TOP_SUPPLIERS);
        assert_eq!(top.len(), 10);
        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["S14", "S13", "S12", "S11", "S10", "S9", "S8", "S7", "S6", "S5"]);
        assert_eq!(top[0], ("S14".to_string(), 1500.0));
        assert_eq!(top[9], ("S5".to_string(), 600.0));
        // The 11th-largest total is the first one left out
        assert!(!names.contains(&"S4"));
    }
}
