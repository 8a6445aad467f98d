use serde::{Deserialize, Serialize};

/// Поиск по одному полю списка
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchState {
    #[serde(rename = "searchBy", default)]
    pub search_by: String,
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPatch {
    pub search_by: Option<String>,
    pub search_term: Option<String>,
}

impl SearchPatch {
    /// Both field and term
    pub fn new(search_by: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            search_by: Some(search_by.into()),
            search_term: Some(search_term.into()),
        }
    }

    pub fn term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Default::default()
        }
    }

    pub fn field(search_by: impl Into<String>) -> Self {
        Self {
            search_by: Some(search_by.into()),
            ..Default::default()
        }
    }
}

impl SearchState {
    pub fn new(search_by: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            search_by: search_by.into(),
            search_term: search_term.into(),
        }
    }

    pub fn apply(&mut self, patch: SearchPatch) {
        if let Some(by) = patch.search_by {
            self.search_by = by;
        }
        if let Some(term) = patch.search_term {
            self.search_term = term;
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// A search field without a term is not a filter, so both are dropped together
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let term = self.search_term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let mut params = Vec::with_capacity(2);
        let by = self.search_by.trim();
        if !by.is_empty() {
            params.push(("searchBy", by.to_string()));
        }
        params.push(("searchTerm", term.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_term_is_dropped() {
        let state = SearchState::new("customerName", "   ");
        assert!(state.to_params().is_empty());
        assert!(!state.is_active());
    }

    #[test]
    fn test_params_are_trimmed() {
        let state = SearchState::new("customerName", " Acme ");
        assert_eq!(
            state.to_params(),
            vec![
                ("searchBy", "customerName".to_string()),
                ("searchTerm", "Acme".to_string())
            ]
        );
    }

    #[test]
    fn test_patch_keeps_untouched_fields() {
        let mut state = SearchState::new("invoiceNo", "INV-1");
        state.apply(SearchPatch {
            search_term: Some("INV-2".into()),
            ..Default::default()
        });
        assert_eq!(state.search_by, "invoiceNo");
        assert_eq!(state.search_term, "INV-2");
    }

    #[test]
    fn test_full_patch_sets_field_and_term() {
        let mut state = SearchState::default();
        state.apply(SearchPatch::new("customerName", "acme"));
        assert_eq!(state, SearchState::new("customerName", "acme"));
    }
}
