//! # On-Ramp Currency Select
//!
//! View model for the two currency pickers of the buy-crypto form. The input
//! picker pairs an amount field with a fiat currency; the output picker shows
//! the network of the chosen token instead of an amount field.
//!
//! ```rust
//! use lib_core::onramp::{CurrencySelect, CurrencySelectMode, SelectButton};
//! use shared::Currency;
//!
//! let select = CurrencySelect::new(CurrencySelectMode::Output)
//!     .selected(Some(Currency::crypto("USDC", "USD Coin", shared::ChainId::BASE)));
//!
//! let view = select.view();
//! assert!(matches!(view.button, SelectButton::Asset { .. }));
//! ```

use serde::{Deserialize, Serialize};
use shared::dto::currency::Currency;
use shared::utils::truncate_symbol;

use super::constants::{fiat_currencies, network_display, onramp_currencies};
use super::modal::{CurrencySearchRequest, ModalController};

/// Label shown when a currency has no usable symbol.
pub const SELECT_A_CURRENCY: &str = "Select a currency";

/// Which side of the on-ramp a picker belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencySelectMode {
    #[serde(rename = "onramp-input")]
    Input,
    #[serde(rename = "onramp-output")]
    Output,
}

impl CurrencySelectMode {
    /// DOM id of the picker.
    pub fn id(&self) -> &'static str {
        match self {
            CurrencySelectMode::Input => "onramp-input",
            CurrencySelectMode::Output => "onramp-output",
        }
    }

    /// Currencies offered by the search dialog for this side.
    pub fn tokens_to_show(&self) -> Vec<Currency> {
        match self {
            CurrencySelectMode::Input => fiat_currencies(),
            CurrencySelectMode::Output => onramp_currencies(),
        }
    }
}

/// Logo component to draw next to the symbol.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    Fiat,
    Crypto,
}

/// Left half of the picker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeftSlot {
    AmountInput {
        value: String,
        /// No currency selected yet.
        disabled: bool,
        loading: bool,
        error: bool,
    },
    NetworkLabel {
        network: String,
    },
}

/// The button that opens the currency search dialog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectButton {
    /// Placeholder while no currency is selected.
    Skeleton,
    Asset {
        logo: LogoKind,
        /// `None` while the currency is loading.
        label: Option<String>,
        show_dropdown: bool,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrencySelectView {
    pub id: &'static str,
    /// Container draws its danger border.
    pub error: bool,
    pub left: LeftSlot,
    pub button: SelectButton,
}

type InputHandler<'a> = Box<dyn Fn(String) + 'a>;
type SelectHandler<'a> = Box<dyn Fn(Currency) + 'a>;
type BlurHandler<'a> = Box<dyn Fn() + 'a>;

/// State of one currency picker.
pub struct CurrencySelect<'a> {
    pub mode: CurrencySelectMode,
    pub selected: Option<Currency>,
    pub other_selected: Option<Currency>,
    pub show_common_bases: bool,
    pub common_bases_type: Option<String>,
    pub currency_loading: bool,
    pub value: String,
    pub error: bool,
    on_user_input: Option<InputHandler<'a>>,
    on_currency_select: Option<SelectHandler<'a>>,
    on_input_blur: Option<BlurHandler<'a>>,
}

impl<'a> CurrencySelect<'a> {
    pub fn new(mode: CurrencySelectMode) -> Self {
        Self {
            mode,
            selected: None,
            other_selected: None,
            show_common_bases: false,
            common_bases_type: None,
            currency_loading: false,
            value: String::new(),
            error: false,
            on_user_input: None,
            on_currency_select: None,
            on_input_blur: None,
        }
    }

    pub fn selected(mut self, currency: Option<Currency>) -> Self {
        self.selected = currency;
        self
    }

    pub fn other_selected(mut self, currency: Option<Currency>) -> Self {
        self.other_selected = currency;
        self
    }

    pub fn show_common_bases(mut self, show: bool) -> Self {
        self.show_common_bases = show;
        self
    }

    pub fn common_bases_type(mut self, kind: impl Into<String>) -> Self {
        self.common_bases_type = Some(kind.into());
        self
    }

    pub fn loading(mut self, currency_loading: bool) -> Self {
        self.currency_loading = currency_loading;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Register the amount handler. Only the input picker shows an amount field.
    pub fn on_user_input(mut self, handler: impl Fn(String) + 'a) -> Self {
        self.on_user_input = Some(Box::new(handler));
        self
    }

    /// Register the handler that receives the currency picked in the search dialog.
    pub fn on_currency_select(mut self, handler: impl Fn(Currency) + 'a) -> Self {
        self.on_currency_select = Some(Box::new(handler));
        self
    }

    /// Register the handler called when the amount field loses focus.
    pub fn on_input_blur(mut self, handler: impl Fn() + 'a) -> Self {
        self.on_input_blur = Some(Box::new(handler));
        self
    }

    /// Describe what the renderer must draw.
    pub fn view(&self) -> CurrencySelectView {
        let left = if self.shows_amount_input() {
            LeftSlot::AmountInput {
                value: self.value.clone(),
                disabled: self.selected.is_none(),
                loading: self.selected.is_none(),
                error: self.error,
            }
        } else {
            let chain_id = self.selected.as_ref().and_then(|c| c.chain_id);
            LeftSlot::NetworkLabel {
                network: network_display(chain_id).to_string(),
            }
        };

        let button = match &self.selected {
            None => SelectButton::Skeleton,
            Some(currency) => SelectButton::Asset {
                logo: self.logo_kind(),
                label: (!self.currency_loading).then(|| button_label(currency)),
                show_dropdown: true,
            },
        };

        CurrencySelectView {
            id: self.mode.id(),
            error: self.error,
            left,
            button,
        }
    }

    /// Open the currency search dialog for this picker.
    ///
    /// The currency picked in the dialog goes to the selection handler.
    /// Returns `true` when a currency was picked and delivered.
    pub fn open_currency_search(&self, modal: &dyn ModalController) -> bool {
        tracing::debug!(mode = self.mode.id(), "Opening currency search");

        let picked = modal.present_currency_search(CurrencySearchRequest {
            mode: self.mode,
            selected: self.selected.clone(),
            other_selected: self.other_selected.clone(),
            show_common_bases: self.show_common_bases,
            common_bases_type: self.common_bases_type.clone(),
            tokens: self.mode.tokens_to_show(),
        });

        match picked {
            Some(currency) => self.select_currency(currency),
            None => {
                tracing::debug!(mode = self.mode.id(), "Currency search dismissed");
                false
            }
        }
    }

    /// Hand a chosen currency to the selection handler.
    ///
    /// Returns `false` when no handler is registered.
    pub fn select_currency(&self, currency: Currency) -> bool {
        let Some(handler) = &self.on_currency_select else {
            return false;
        };

        tracing::debug!(mode = self.mode.id(), symbol = ?currency.symbol(), "Currency selected");
        handler(currency);
        true
    }

    /// Notify the blur handler that the amount field lost focus.
    ///
    /// Does nothing unless the amount field is shown.
    pub fn handle_input_blur(&self) {
        if let Some(handler) = self.on_input_blur.as_ref().filter(|_| self.shows_amount_input()) {
            handler();
        }
    }

    /// Forward what the user typed to the amount handler.
    ///
    /// Returns `true` when the value was accepted and forwarded. Rejected
    /// input is dropped, leaving the field as it was.
    pub fn handle_user_input(&self, raw: &str) -> bool {
        let Some(handler) = self.on_user_input.as_ref().filter(|_| self.shows_amount_input()) else {
            return false;
        };

        match lib_utils::sanitize_numeric_input(raw) {
            Some(value) => {
                handler(value);
                true
            }
            None => {
                tracing::debug!(input = raw, "Rejected non-numeric amount");
                false
            }
        }
    }

    fn shows_amount_input(&self) -> bool {
        self.mode == CurrencySelectMode::Input && self.on_user_input.is_some()
    }

    fn logo_kind(&self) -> LogoKind {
        match self.mode {
            CurrencySelectMode::Input => LogoKind::Fiat,
            CurrencySelectMode::Output => LogoKind::Crypto,
        }
    }
}

fn button_label(currency: &Currency) -> String {
    currency
        .symbol()
        .map(truncate_symbol)
        .unwrap_or_else(|| SELECT_A_CURRENCY.to_string())
}
