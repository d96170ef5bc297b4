pub mod export;
pub mod meta;
pub mod options;
pub mod summary;

use serde::Deserialize;

use seoul_sales_sdk::FilterSelection;

/// Common dashboard filter parameters, shared by the summary and export
/// routes. List values are comma-separated. An absent `periods` selects
/// every period; an explicitly empty one selects nothing.
#[derive(Deserialize)]
pub struct FilterParams {
    pub periods: Option<String>,
    pub district_types: Option<String>,
    pub industries: Option<String>,
    /// Row count of the top-industries table (summary route only).
    pub top: Option<usize>,
}

impl FilterParams {
    pub fn into_selection(self) -> FilterSelection {
        let mut selection = match self.periods {
            None => FilterSelection::all_periods(),
            Some(raw) => FilterSelection::new().with_periods(split_list(&raw)),
        };
        if let Some(raw) = self.district_types {
            selection = selection.with_district_types(split_list(&raw));
        }
        if let Some(raw) = self.industries {
            selection = selection.with_industries(split_list(&raw));
        }
        selection
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
