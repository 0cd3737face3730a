//! Cards and the ordered stack they are dealt from.

/// Stable identifier of a card within its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// What a card shows. The gesture engine never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub enum CardPayload {
    /// Completed payment receipt
    Receipt {
        title: String,
        timestamp: String,
        merchant: String,
        handle: String,
        amount: String,
        category: String,
    },
    /// "Split with friends" prompt
    Split { title: String },
    /// Generic profile card for like/nope decks
    Profile { name: String, subtitle: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub payload: CardPayload,
}

impl Card {
    pub fn new(id: u32, payload: CardPayload) -> Self {
        Self {
            id: CardId(id),
            payload,
        }
    }
}

/// Ordered cards plus a cursor to the one currently on top.
///
/// Cards before the cursor are gone; [`remaining`](Self::remaining) is the
/// removal-style view of the same state.
#[derive(Debug, Clone, Default)]
pub struct CardStack {
    cards: Vec<Card>,
    current: usize,
}

impl CardStack {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, current: 0 }
    }

    /// Card receiving gestures, if any are left.
    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn remaining(&self) -> &[Card] {
        self.cards.get(self.current..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.current >= self.cards.len()
    }

    /// True when the top card is the only one left.
    pub fn is_last(&self) -> bool {
        self.remaining().len() == 1
    }

    /// Move past the current card, returning the id that left.
    /// No-op on an exhausted stack.
    pub fn advance(&mut self) -> Option<CardId> {
        let id = self.current()?.id;
        self.current += 1;
        Some(id)
    }
}

/// Receipt + split cards for the transaction history screen.
pub fn payment_cards() -> Vec<Card> {
    vec![
        Card::new(
            0,
            CardPayload::Receipt {
                title: "Payment Successful".into(),
                timestamp: "21 Sept 2025, 09.33 AM".into(),
                merchant: "Make My Trip".into(),
                handle: "makemytrip@okicici".into(),
                amount: "\u{20B9} 7,990".into(),
                category: "Travel & Holidays".into(),
            },
        ),
        Card::new(
            1,
            CardPayload::Split {
                title: "Split with Friends".into(),
            },
        ),
    ]
}

/// Profile deck for the like/nope screen.
pub fn profile_cards() -> Vec<Card> {
    [
        ("Asha", "Hiking, film photography"),
        ("Rohan", "Street food and chess"),
        ("Mei", "Climbing on weekends"),
        ("Tomas", "Bakes sourdough, badly"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, subtitle))| {
        Card::new(
            i as u32,
            CardPayload::Profile {
                name: name.into(),
                subtitle: subtitle.into(),
            },
        )
    })
    .collect()
}
