use serde::{Deserialize, Serialize};

/// Фасет: фильтр с дискретным списком значений (мультивыбор)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    PaidStatus,
    PoType,
    SalesPersonName,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::PaidStatus, Facet::PoType, Facet::SalesPersonName];

    /// Name of the query parameter expected by the API
    pub fn param_name(&self) -> &'static str {
        match self {
            Facet::PaidStatus => "paidStatus",
            Facet::PoType => "poType",
            Facet::SalesPersonName => "salesPersonName",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::PaidStatus => "Status",
            Facet::PoType => "PO Type",
            Facet::SalesPersonName => "Sales Person",
        }
    }
}

/// Result of a facet mutation: which other facets were cleared by cross-filter rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChange {
    pub cleared: Vec<Facet>,
}

impl FilterChange {
    pub fn cleared_any(&self) -> bool {
        !self.cleared.is_empty()
    }
}

/// Current facet selections of one filter context
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(rename = "paidStatus", default)]
    pub paid_status: Vec<String>,
    #[serde(rename = "poType", default)]
    pub po_type: Vec<String>,
    #[serde(rename = "salesPersonName", default)]
    pub sales_person_name: Vec<String>,
}

impl FilterState {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::PaidStatus => &self.paid_status,
            Facet::PoType => &self.po_type,
            Facet::SalesPersonName => &self.sales_person_name,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::PaidStatus => &mut self.paid_status,
            Facet::PoType => &mut self.po_type,
            Facet::SalesPersonName => &mut self.sales_person_name,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }

    /// Replace the whole list of a facet.
    ///
    /// Single entry point for every facet mutation: duplicates are dropped
    /// (first occurrence wins) and the cross-filter rule is applied here.
    /// A status filter belongs to exactly one sales person: `paidStatus` is
    /// cleared when a second person is added, and when the only selected
    /// person is removed.
    pub fn set_facet(&mut self, facet: Facet, values: Vec<String>) -> FilterChange {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for v in values {
            if !unique.contains(&v) {
                unique.push(v);
            }
        }
        let previous = self.values(facet).len();
        *self.values_mut(facet) = unique;

        let mut change = FilterChange::default();
        let persons = self.sales_person_name.len();
        let leaves_single_person = persons > 1 || (previous == 1 && persons == 0);
        if facet == Facet::SalesPersonName && leaves_single_person && !self.paid_status.is_empty() {
            self.paid_status.clear();
            change.cleared.push(Facet::PaidStatus);
        }
        change
    }

    /// Toggle membership of one value
    pub fn toggle(&mut self, facet: Facet, value: &str) -> FilterChange {
        let mut next = self.values(facet).to_vec();
        if let Some(pos) = next.iter().position(|v| v == value) {
            next.remove(pos);
        } else {
            next.push(value.to_string());
        }
        self.set_facet(facet, next)
    }

    pub fn clear(&mut self, facet: Facet) {
        self.values_mut(facet).clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of facets with at least one non-blank value
    pub fn active_count(&self) -> usize {
        Facet::ALL
            .iter()
            .filter(|f| self.values(**f).iter().any(|v| !v.trim().is_empty()))
            .count()
    }

    /// Status facet is only meaningful for a single sales person
    pub fn status_filter_allowed(&self) -> bool {
        self.sales_person_name.len() == 1
    }

    /// Request parameters, one pair per value; blank values and empty
    /// facets are dropped (absent means "no filter").
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for facet in Facet::ALL {
            for v in self.values(facet) {
                let v = v.trim();
                if !v.is_empty() {
                    params.push((facet.param_name(), v.to_string()));
                }
            }
        }
        params
    }

    /// Order-independent representation used by the query key
    pub fn canonical(&self) -> Vec<(Facet, Vec<String>)> {
        Facet::ALL
            .iter()
            .filter_map(|facet| {
                let mut values: Vec<String> = self
                    .values(*facet)
                    .iter()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect();
                if values.is_empty() {
                    return None;
                }
                values.sort();
                values.dedup();
                Some((*facet, values))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_second_sales_person_clears_paid_status() {
        let mut state = FilterState {
            paid_status: names(&["PAID"]),
            po_type: vec![],
            sales_person_name: names(&["Alice"]),
        };

        let change = state.set_facet(Facet::SalesPersonName, names(&["Alice", "Bob"]));

        assert_eq!(state.sales_person_name, names(&["Alice", "Bob"]));
        assert!(state.paid_status.is_empty());
        assert_eq!(change.cleared, vec![Facet::PaidStatus]);
    }

    #[test]
    fn test_toggle_second_sales_person_clears_paid_status() {
        let mut state = FilterState::default();
        state.toggle(Facet::SalesPersonName, "Alice");
        state.toggle(Facet::PaidStatus, "PAID");
        assert_eq!(state.paid_status, names(&["PAID"]));

        let change = state.toggle(Facet::SalesPersonName, "Bob");
        assert!(change.cleared_any());
        assert!(state.paid_status.is_empty());
    }

    #[test]
    fn test_single_sales_person_keeps_paid_status() {
        let mut state = FilterState {
            paid_status: names(&["UNPAID"]),
            ..Default::default()
        };
        let change = state.set_facet(Facet::SalesPersonName, names(&["Alice"]));
        assert!(!change.cleared_any());
        assert_eq!(state.paid_status, names(&["UNPAID"]));
        assert!(state.status_filter_allowed());
    }

    #[test]
    fn test_removing_only_sales_person_clears_paid_status() {
        let mut state = FilterState::default();
        state.toggle(Facet::SalesPersonName, "Alice");
        state.toggle(Facet::PaidStatus, "PAID");

        let change = state.toggle(Facet::SalesPersonName, "Alice");

        assert_eq!(change.cleared, vec![Facet::PaidStatus]);
        assert!(!state.status_filter_allowed());
        assert!(state.paid_status.is_empty());
        assert!(state.to_params().is_empty());
    }

    #[test]
    fn test_status_without_sales_person_survives_other_facets() {
        let mut state = FilterState::default();
        state.toggle(Facet::PaidStatus, "UNPAID");
        let change = state.toggle(Facet::PoType, "LOCAL");
        assert!(!change.cleared_any());
        assert_eq!(state.paid_status, names(&["UNPAID"]));
    }

    #[test]
    fn test_set_facet_deduplicates() {
        let mut state = FilterState::default();
        state.set_facet(Facet::PoType, names(&["LOCAL", "EXPORT", "LOCAL"]));
        assert_eq!(state.po_type, names(&["LOCAL", "EXPORT"]));
    }

    #[test]
    fn test_toggle_removes_existing_value() {
        let mut state = FilterState::default();
        state.toggle(Facet::PoType, "LOCAL");
        state.toggle(Facet::PoType, "LOCAL");
        assert!(state.po_type.is_empty());
    }

    #[test]
    fn test_empty_values_are_not_params() {
        let state = FilterState {
            paid_status: vec![],
            po_type: names(&["", "  "]),
            sales_person_name: names(&["Alice"]),
        };
        let params = state.to_params();
        assert_eq!(params, vec![("salesPersonName", "Alice".to_string())]);
        assert!(!params.iter().any(|(k, _)| *k == "paidStatus" || *k == "poType"));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_reset_clears_every_facet() {
        let mut state = FilterState {
            paid_status: names(&["PAID"]),
            po_type: names(&["LOCAL"]),
            sales_person_name: names(&["Alice"]),
        };
        state.reset();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_canonical_ignores_insertion_order() {
        let a = FilterState {
            sales_person_name: names(&["Alice", "Bob"]),
            ..Default::default()
        };
        let b = FilterState {
            sales_person_name: names(&["Bob", "Alice"]),
            ..Default::default()
        };
        assert_eq!(a.canonical(), b.canonical());
    }
}
