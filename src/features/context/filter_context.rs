use crate::core::config::FilterConfig;
use crate::features::categories::dtos::{CategoriesQuery, StatusFilter};

/// Group/unit scope chosen in the header.
///
/// An empty selection means "everything the user may see", i.e. all
/// available ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterContext {
    pub available_group_ids: Vec<i64>,
    pub available_unit_ids: Vec<i64>,
    pub selected_group_ids: Vec<i64>,
    pub selected_unit_ids: Vec<i64>,
}

impl FilterContext {
    pub fn new(available_group_ids: Vec<i64>, available_unit_ids: Vec<i64>) -> Self {
        Self {
            available_group_ids,
            available_unit_ids,
            ..Self::default()
        }
    }

    /// Context whose only scope is the configured selection
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            available_group_ids: config.group_ids.clone(),
            available_unit_ids: config.unit_ids.clone(),
            selected_group_ids: Vec::new(),
            selected_unit_ids: Vec::new(),
        }
    }

    pub fn select(&mut self, group_ids: Vec<i64>, unit_ids: Vec<i64>) {
        self.selected_group_ids = group_ids;
        self.selected_unit_ids = unit_ids;
    }

    pub fn effective_group_ids(&self) -> &[i64] {
        if self.selected_group_ids.is_empty() {
            &self.available_group_ids
        } else {
            &self.selected_group_ids
        }
    }

    pub fn effective_unit_ids(&self) -> &[i64] {
        if self.selected_unit_ids.is_empty() {
            &self.available_unit_ids
        } else {
            &self.selected_unit_ids
        }
    }

    /// Nothing is fetched until the user's groups or units are known
    pub fn is_ready(&self) -> bool {
        !self.available_group_ids.is_empty() || !self.available_unit_ids.is_empty()
    }

    /// Admin tree query: every status, scoped to the effective ids
    pub fn admin_query(&self) -> CategoriesQuery {
        CategoriesQuery {
            status: Some(StatusFilter::All),
            group_ids: self.effective_group_ids().to_vec(),
            unit_ids: self.effective_unit_ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_means_all_available() {
        let mut ctx = FilterContext::new(vec![1, 2], vec![10]);
        assert_eq!(ctx.effective_group_ids(), &[1, 2]);

        ctx.select(vec![2], vec![]);
        assert_eq!(ctx.effective_group_ids(), &[2]);
        assert_eq!(ctx.effective_unit_ids(), &[10]);

        let query = ctx.admin_query();
        assert_eq!(query.status, Some(StatusFilter::All));
        assert_eq!(query.group_ids, vec![2]);
    }

    #[test]
    fn test_not_ready_without_scope() {
        assert!(!FilterContext::default().is_ready());
        assert!(FilterContext::new(vec![], vec![3]).is_ready());
    }
}
