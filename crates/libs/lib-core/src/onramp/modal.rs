//! Modal presentation seam.
//!
//! The currency search dialog is owned by whatever renders the page. The
//! selector only asks for it through [`ModalController`], so it never touches
//! global modal state and tests can script what the user picks.

use serde::Serialize;
use shared::dto::currency::Currency;

use super::currency_select::CurrencySelectMode;

/// Everything the currency search dialog needs to open.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrencySearchRequest {
    pub mode: CurrencySelectMode,
    pub selected: Option<Currency>,
    pub other_selected: Option<Currency>,
    pub show_common_bases: bool,
    /// Which list of common bases to pin above the search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_bases_type: Option<String>,
    /// Currencies the dialog lists.
    pub tokens: Vec<Currency>,
}

/// Presents modals on behalf of view models.
pub trait ModalController {
    /// Show the currency search dialog and return the currency the user
    /// picked, or `None` when the dialog was dismissed.
    fn present_currency_search(&self, request: CurrencySearchRequest) -> Option<Currency>;
}
