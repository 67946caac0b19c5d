//! Filter session.
//!
//! Holds the one piece of interactive state (the selected category) and the
//! report derived from it. Any change recomputes the whole report.

use dash_catalog::Product;

use crate::facets::{category_menu, FacetValue};
use crate::report::{compute_report, Report};

/// A dashboard view over a read-only catalog.
#[derive(Debug, Clone)]
pub struct DashboardSession<'a> {
    products: &'a [Product],
    menu: Vec<FacetValue>,
    selected: Option<String>,
    report: Report,
    recomputes: usize,
}

impl<'a> DashboardSession<'a> {
    /// Start an unfiltered session.
    pub fn new(products: &'a [Product]) -> Self {
        Self {
            products,
            menu: category_menu(products),
            selected: None,
            report: compute_report(products, None),
            recomputes: 1,
        }
    }

    /// Select a category and recompute.
    pub fn select(&mut self, category: impl Into<String>) -> &Report {
        let category = category.into();
        self.selected = Some(category).filter(|c| !c.is_empty());
        self.recompute()
    }

    /// Clear the filter. Does nothing if no filter is active.
    pub fn clear(&mut self) -> &Report {
        if self.selected.take().is_some() {
            self.recompute();
        }
        &self.report
    }

    /// Select a category, or clear it if it is already selected.
    pub fn toggle(&mut self, category: &str) -> &Report {
        if self.selected.as_deref() == Some(category) {
            self.clear()
        } else {
            self.select(category)
        }
    }

    /// The report for the current filter.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// The active category, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Category counts over the whole catalog.
    pub fn menu(&self) -> &[FacetValue] {
        &self.menu
    }

    /// The catalog the session views.
    pub fn products(&self) -> &'a [Product] {
        self.products
    }

    /// Number of reports computed so far, including the initial one.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }

    fn recompute(&mut self) -> &Report {
        self.report = compute_report(self.products, self.selected.as_deref());
        self.recomputes += 1;
        tracing::debug!(
            selected = self.selected.as_deref().unwrap_or("all"),
            recomputes = self.recomputes,
            "filter changed"
        );
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_catalog::Catalog;

    #[test]
    fn test_new_session_is_unfiltered() {
        let catalog = Catalog::builtin();
        let session = DashboardSession::new(catalog);
        assert_eq!(session.selected(), None);
        assert_eq!(session.report().kpis.total, catalog.len());
        assert_eq!(session.recomputes(), 1);
        let menu_total: usize = session.menu().iter().map(|v| v.count).sum();
        assert_eq!(menu_total, catalog.len());
    }

    #[test]
    fn test_select_and_clear() {
        let catalog = Catalog::builtin();
        let mut session = DashboardSession::new(catalog);

        let total = session.select("Subwoofers").kpis.total;
        assert_eq!(session.selected(), Some("Subwoofers"));
        assert_eq!(
            total,
            catalog.iter().filter(|p| p.category == "Subwoofers").count()
        );

        session.clear();
        assert_eq!(session.selected(), None);
        assert_eq!(session.report(), &compute_report(catalog, None));
        assert_eq!(session.recomputes(), 3);
    }

    #[test]
    fn test_clear_when_unfiltered_skips_recompute() {
        let mut session = DashboardSession::new(Catalog::builtin());
        session.clear();
        assert_eq!(session.recomputes(), 1);
    }

    #[test]
    fn test_toggle() {
        let mut session = DashboardSession::new(Catalog::builtin());
        session.toggle("Soundbars");
        assert_eq!(session.selected(), Some("Soundbars"));
        session.toggle("Subwoofers");
        assert_eq!(session.selected(), Some("Subwoofers"));
        session.toggle("Subwoofers");
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_menu_stays_unfiltered() {
        let mut session = DashboardSession::new(Catalog::builtin());
        let before = session.menu().to_vec();
        session.select("Soundbars");
        assert_eq!(session.menu(), before.as_slice());
    }

    #[test]
    fn test_select_empty_clears() {
        let mut session = DashboardSession::new(Catalog::builtin());
        session.select("Soundbars");
        session.select("");
        assert_eq!(session.selected(), None);
        assert_eq!(session.report().filter, None);
    }
}
