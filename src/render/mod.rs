pub mod animator;
pub mod layout;

/// Which card screen is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Receipt + split cards under the transaction history chrome
    Payments,
    /// Like/nope profile deck
    Profiles,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Payments
    }
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Payments => "Transactions History",
            Screen::Profiles => "Discover",
        }
    }

    pub fn config(self) -> crate::config::SwipeConfig {
        match self {
            Screen::Payments => crate::config::SwipeConfig::payments(),
            Screen::Profiles => crate::config::SwipeConfig::profiles(),
        }
    }

    pub fn cards(self) -> Vec<crate::card::Card> {
        match self {
            Screen::Payments => crate::card::payment_cards(),
            Screen::Profiles => crate::card::profile_cards(),
        }
    }
}
