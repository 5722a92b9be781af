//! Local UI chrome state for the product tab strip.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of product state so switching
//! tabs can never touch reviews, details, or variants.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Panels available under the product card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductTab {
    #[default]
    Reviews,
    MakeReview,
    Shipping,
    Details,
}

impl ProductTab {
    /// Tabs in strip order.
    pub const ALL: [Self; 4] = [Self::Reviews, Self::MakeReview, Self::Shipping, Self::Details];

    pub fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeReview => "Make a Review",
            Self::Shipping => "Shipping",
            Self::Details => "Details",
        }
    }
}

/// Tab strip state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabsState {
    pub active_tab: ProductTab,
}

impl TabsState {
    pub fn select_tab(&mut self, tab: ProductTab) {
        self.active_tab = tab;
    }

    /// Whether the panel for `tab` is the one on screen.
    pub fn is_visible(&self, tab: ProductTab) -> bool {
        self.active_tab == tab
    }
}
