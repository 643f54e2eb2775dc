//! # Store Session
//!
//! The store controller's state machine, as a pure function.
//!
//! ## State Diagram
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                         ┌──────────┐  CloseStore   ┌──────────┐         │
//! │             ┌──────────►│ Opening  │──────────────►│  Closed  │         │
//! │             │           └────┬─────┘               └──────────┘         │
//! │   LeaveUserMode   EnterAsUser│  │EnterAsManager                         │
//! │             │           ┌────▼──┐ └──────────────►┌──────────┐          │
//! │             └───────────┤Decid- │                 │ Managing │◄─┐ Add   │
//! │                         │ ing   │◄─────────┐      └────┬─────┘──┘ Delete│
//! │     StartShopping ┌─────┴───┬───┴──┐       │           │    List        │
//! │                   ▼         ▼      ▼       │   LeaveManagerMode         │
//! │            ┌─────────┐ ┌────────┐ ┌────────┴─┐         │                │
//! │  Purchase ─┤Shopping │ │CartRev-│►│ Checkout │         ▼                │
//! │            └─────────┘ │ iew    │ └──────────┘      Opening             │
//! │                        └────────┘                                       │
//! │  StopShopping / FinishReview{false} / Confirm / Decline ──► Deciding    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Division of Labour
//! [`transition`] never reads input or prints. The console decides which
//! [`Event`] the operator meant, feeds it in, and renders whatever
//! [`Notice`]s come back. An event that makes no sense in the current state
//! leaves everything unchanged and yields [`Notice::Ignored`].

use crate::cart::ShoppingCart;
use crate::catalog::Catalog;
use crate::commodity::Commodity;
use crate::error::CoreError;
use crate::receipt::Receipt;

// =============================================================================
// States and Events
// =============================================================================

/// Who is at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    Manager,
}

/// Where the controller loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StoreState {
    /// Asking who is at the console.
    #[default]
    Opening,
    /// User main menu.
    Deciding,
    /// Picking commodities into the cart.
    Shopping,
    /// Looking at the cart, possibly removing lines.
    CartReview,
    /// Confirming the purchase.
    Checkout,
    /// Manager menu.
    Managing,
    /// Terminal.
    Closed,
}

impl StoreState {
    /// True once the store has closed.
    pub const fn is_terminal(self) -> bool {
        matches!(self, StoreState::Closed)
    }
}

/// Something the operator asked for.
///
/// Indices are 0-based flattened positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    EnterAsUser,
    EnterAsManager,
    CloseStore,

    StartShopping,
    ReviewCart,
    BeginCheckout,
    LeaveUserMode,

    Purchase(usize),
    StopShopping,

    RemoveCartLine(usize),
    FinishReview { checkout: bool },

    ConfirmCheckout,
    DeclineCheckout,

    AddCommodity(Commodity),
    DeleteCommodity(usize),
    ListCommodities,
    LeaveManagerMode,
}

/// Something the console should tell the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CommodityAdded { name: String },
    /// A commodity with this name already exists; nothing was added.
    DuplicateCommodity { name: String },
    /// `pruned` cart lines pointed at the removed commodity.
    CommodityRemoved { name: String, pruned: usize },
    AddedToCart { name: String, quantity: u32 },
    CartLineRemoved { name: String },
    CartEmpty,
    NothingToCheckout,
    CheckedOut(Receipt),
    /// The console should print the full catalog.
    ShowCatalog,
    /// The request named something that does not exist or is not allowed.
    Rejected(CoreError),
    /// The event has no meaning in `state`.
    Ignored { state: StoreState },
}

/// Everything the state machine works on.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub catalog: Catalog,
    pub cart: ShoppingCart,
    pub role: Role,
}

impl Session {
    /// Starts a session over a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            cart: ShoppingCart::new(),
            role: Role::User,
        }
    }
}

/// Result of feeding one event to [`transition`].
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: StoreState,
    pub session: Session,
    pub notices: Vec<Notice>,
}

// =============================================================================
// Transition Function
// =============================================================================

/// Applies `event` in `state`.
pub fn transition(state: StoreState, event: Event, mut session: Session) -> Transition {
    let mut notices = Vec::new();

    let next = match (state, event) {
        // Opening
        (StoreState::Opening, Event::EnterAsUser) => {
            session.role = Role::User;
            StoreState::Deciding
        }
        (StoreState::Opening, Event::EnterAsManager) => {
            session.role = Role::Manager;
            StoreState::Managing
        }
        (StoreState::Opening, Event::CloseStore) => StoreState::Closed,

        // Deciding
        (StoreState::Deciding, Event::StartShopping) => {
            session.cart.reset(session.catalog.capacities());
            StoreState::Shopping
        }
        (StoreState::Deciding, Event::ReviewCart) => {
            if session.cart.is_empty() {
                notices.push(Notice::CartEmpty);
                StoreState::Deciding
            } else {
                StoreState::CartReview
            }
        }
        (StoreState::Deciding, Event::BeginCheckout) => {
            if session.cart.is_empty() {
                notices.push(Notice::NothingToCheckout);
                StoreState::Deciding
            } else {
                StoreState::Checkout
            }
        }
        (StoreState::Deciding, Event::LeaveUserMode) => StoreState::Opening,

        // Shopping
        (StoreState::Shopping, Event::Purchase(index)) => {
            notices.push(purchase(&mut session, index));
            StoreState::Shopping
        }
        (StoreState::Shopping, Event::StopShopping) => StoreState::Deciding,

        // CartReview
        (StoreState::CartReview, Event::RemoveCartLine(index)) => {
            match session.cart.remove_line(index) {
                Ok(line) => {
                    let name = session
                        .catalog
                        .lookup(line.commodity)
                        .map(|c| c.name().to_string())
                        .unwrap_or_default();
                    notices.push(Notice::CartLineRemoved { name });
                }
                Err(err) => notices.push(Notice::Rejected(err)),
            }
            if session.cart.is_empty() {
                notices.push(Notice::CartEmpty);
                StoreState::Deciding
            } else {
                StoreState::CartReview
            }
        }
        (StoreState::CartReview, Event::FinishReview { checkout }) => {
            if checkout {
                StoreState::Checkout
            } else {
                StoreState::Deciding
            }
        }

        // Checkout
        (StoreState::Checkout, Event::ConfirmCheckout) => {
            match Receipt::from_cart(&session.cart, &session.catalog) {
                Ok(receipt) => notices.push(Notice::CheckedOut(receipt)),
                Err(CoreError::EmptyCart) => notices.push(Notice::NothingToCheckout),
                Err(err) => notices.push(Notice::Rejected(err)),
            }
            StoreState::Deciding
        }
        (StoreState::Checkout, Event::DeclineCheckout) => StoreState::Deciding,

        // Managing
        (StoreState::Managing, Event::AddCommodity(commodity)) => {
            let name = commodity.name().to_string();
            if session.catalog.exists(&commodity) {
                notices.push(Notice::DuplicateCommodity { name });
            } else {
                session.catalog.add(commodity);
                notices.push(Notice::CommodityAdded { name });
            }
            StoreState::Managing
        }
        (StoreState::Managing, Event::DeleteCommodity(index)) => {
            match session.catalog.remove(index) {
                Ok(removed) => {
                    let pruned = session.cart.prune_missing(&session.catalog);
                    notices.push(Notice::CommodityRemoved {
                        name: removed.name().to_string(),
                        pruned,
                    });
                }
                Err(err) => notices.push(Notice::Rejected(err)),
            }
            StoreState::Managing
        }
        (StoreState::Managing, Event::ListCommodities) => {
            notices.push(Notice::ShowCatalog);
            StoreState::Managing
        }
        (StoreState::Managing, Event::LeaveManagerMode) => StoreState::Opening,

        (state, _) => {
            notices.push(Notice::Ignored { state });
            state
        }
    };

    Transition {
        state: next,
        session,
        notices,
    }
}

fn purchase(session: &mut Session, index: usize) -> Notice {
    let Some(id) = session.catalog.id_at(index) else {
        return Notice::Rejected(CoreError::IndexOutOfRange {
            index,
            len: session.catalog.len(),
        });
    };

    match session.cart.add_or_increment(&session.catalog, id) {
        Ok(quantity) => Notice::AddedToCart {
            name: session
                .catalog
                .lookup(id)
                .map(|c| c.name().to_string())
                .unwrap_or_default(),
            quantity,
        },
        Err(err) => Notice::Rejected(err),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commodity::{AudioSpec, LaptopSpec};
    use crate::money::Money;

    fn audio(name: &str, price: i64) -> Commodity {
        Commodity::audio(name, Money::from_units(price), "", AudioSpec::default())
    }

    fn laptop(name: &str, price: i64) -> Commodity {
        Commodity::laptop(name, Money::from_units(price), "", LaptopSpec::default())
    }

    /// Feeds events in order, returning the final state, session and every
    /// notice produced along the way.
    fn run(events: Vec<Event>, session: Session) -> (StoreState, Session, Vec<Notice>) {
        let mut state = StoreState::Opening;
        let mut session = session;
        let mut all = Vec::new();
        for event in events {
            let t = transition(state, event, session);
            state = t.state;
            session = t.session;
            all.extend(t.notices);
        }
        (state, session, all)
    }

    #[test]
    fn test_opening_routes_by_role() {
        let t = transition(StoreState::Opening, Event::EnterAsUser, Session::default());
        assert_eq!(t.state, StoreState::Deciding);
        assert_eq!(t.session.role, Role::User);

        let t = transition(StoreState::Opening, Event::EnterAsManager, t.session);
        assert_eq!(t.state, StoreState::Managing);
        assert_eq!(t.session.role, Role::Manager);

        let t = transition(StoreState::Opening, Event::CloseStore, t.session);
        assert!(t.state.is_terminal());
    }

    #[test]
    fn test_manager_adds_and_user_buys_twice() {
        let (state, session, notices) = run(
            vec![
                Event::EnterAsManager,
                Event::AddCommodity(audio("X", 100)),
                Event::LeaveManagerMode,
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::Purchase(0),
                Event::StopShopping,
                Event::ReviewCart,
            ],
            Session::default(),
        );

        assert_eq!(state, StoreState::CartReview);
        assert_eq!(session.cart.len(), 1);
        assert!(notices.contains(&Notice::AddedToCart {
            name: "X".to_string(),
            quantity: 2
        }));

        let t = transition(state, Event::FinishReview { checkout: true }, session);
        assert_eq!(t.state, StoreState::Checkout);
        let t = transition(t.state, Event::ConfirmCheckout, t.session);
        assert_eq!(t.state, StoreState::Deciding);
        match &t.notices[..] {
            [Notice::CheckedOut(receipt)] => assert_eq!(receipt.total, Money::from_units(200)),
            other => panic!("unexpected notices: {:?}", other),
        }
        // Checkout leaves the cart alone.
        assert_eq!(t.session.cart.len(), 1);
    }

    #[test]
    fn test_duplicate_add_is_warned_and_skipped() {
        let session = Session::new(Catalog::from_commodities([audio("X", 100)]));
        let (_, session, notices) = run(
            vec![Event::EnterAsManager, Event::AddCommodity(audio("X", 5))],
            session,
        );
        assert_eq!(session.catalog.len(), 1);
        assert_eq!(
            notices,
            vec![Notice::DuplicateCommodity {
                name: "X".to_string()
            }]
        );
    }

    #[test]
    fn test_start_shopping_resets_cart() {
        let session = Session::new(Catalog::from_commodities([audio("X", 100)]));
        let (state, session, _) = run(
            vec![
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::StopShopping,
                Event::StartShopping,
            ],
            session,
        );
        assert_eq!(state, StoreState::Shopping);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_purchase_out_of_range_is_rejected() {
        let (state, session, notices) = run(
            vec![Event::EnterAsUser, Event::StartShopping, Event::Purchase(0)],
            Session::default(),
        );
        assert_eq!(state, StoreState::Shopping);
        assert!(session.cart.is_empty());
        assert_eq!(
            notices,
            vec![Notice::Rejected(CoreError::IndexOutOfRange { index: 0, len: 0 })]
        );
    }

    #[test]
    fn test_empty_cart_blocks_review_and_checkout() {
        let (state, _, notices) = run(
            vec![Event::EnterAsUser, Event::ReviewCart, Event::BeginCheckout],
            Session::default(),
        );
        assert_eq!(state, StoreState::Deciding);
        assert_eq!(notices, vec![Notice::CartEmpty, Notice::NothingToCheckout]);
    }

    #[test]
    fn test_removing_last_line_returns_to_deciding() {
        let session = Session::new(Catalog::from_commodities([audio("A", 1), laptop("L", 2)]));
        let (state, session, notices) = run(
            vec![
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::Purchase(1),
                Event::StopShopping,
                Event::ReviewCart,
                Event::RemoveCartLine(1),
            ],
            session,
        );
        assert_eq!(state, StoreState::CartReview);
        assert_eq!(session.cart.len(), 1);
        assert!(notices.contains(&Notice::CartLineRemoved {
            name: "L".to_string()
        }));

        let t = transition(state, Event::RemoveCartLine(0), session);
        assert_eq!(t.state, StoreState::Deciding);
        assert_eq!(t.notices.last(), Some(&Notice::CartEmpty));
    }

    #[test]
    fn test_decline_checkout_keeps_cart() {
        let session = Session::new(Catalog::from_commodities([audio("A", 1)]));
        let (state, session, notices) = run(
            vec![
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::StopShopping,
                Event::BeginCheckout,
                Event::DeclineCheckout,
            ],
            session,
        );
        assert_eq!(state, StoreState::Deciding);
        assert_eq!(session.cart.len(), 1);
        assert!(!notices.iter().any(|n| matches!(n, Notice::CheckedOut(_))));
    }

    #[test]
    fn test_finish_review_without_checkout_keeps_cart() {
        let session = Session::new(Catalog::from_commodities([audio("A", 1), laptop("L", 9)]));
        let (state, session, notices) = run(
            vec![
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::Purchase(1),
                Event::Purchase(1),
                Event::StopShopping,
                Event::ReviewCart,
            ],
            session,
        );
        assert_eq!(state, StoreState::CartReview);

        let t = transition(state, Event::FinishReview { checkout: false }, session);
        assert_eq!(t.state, StoreState::Deciding);
        assert!(t.notices.is_empty());
        assert_eq!(t.session.cart.len(), 2);
        assert_eq!(t.session.cart.total_quantity(), 3);
        assert_eq!(t.session.cart.total(&t.session.catalog), Money::from_units(19));
        assert!(!notices.iter().any(|n| matches!(n, Notice::Rejected(_))));
    }

    #[test]
    fn test_delete_prunes_cart_lines() {
        let session = Session::new(Catalog::from_commodities([
            audio("A", 1),
            audio("B", 2),
            audio("C", 3),
        ]));
        let (_, session, _) = run(
            vec![
                Event::EnterAsUser,
                Event::StartShopping,
                Event::Purchase(0),
                Event::StopShopping,
                Event::LeaveUserMode,
            ],
            session,
        );

        let (state, session, notices) = run(
            vec![Event::EnterAsManager, Event::DeleteCommodity(0)],
            session,
        );
        assert_eq!(state, StoreState::Managing);
        assert_eq!(session.catalog.len(), 2);
        assert_eq!(session.catalog.get(0).map(Commodity::name), Some("B"));
        assert!(session.cart.is_empty());
        assert_eq!(
            notices,
            vec![Notice::CommodityRemoved {
                name: "A".to_string(),
                pruned: 1
            }]
        );
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let session = Session::new(Catalog::from_commodities([audio("A", 1)]));
        let (_, session, notices) = run(
            vec![Event::EnterAsManager, Event::DeleteCommodity(3)],
            session,
        );
        assert_eq!(session.catalog.len(), 1);
        assert_eq!(
            notices,
            vec![Notice::Rejected(CoreError::IndexOutOfRange { index: 3, len: 1 })]
        );
    }

    #[test]
    fn test_list_and_leave_manager_mode() {
        let (state, _, notices) = run(
            vec![
                Event::EnterAsManager,
                Event::ListCommodities,
                Event::LeaveManagerMode,
            ],
            Session::default(),
        );
        assert_eq!(state, StoreState::Opening);
        assert_eq!(notices, vec![Notice::ShowCatalog]);
    }

    #[test]
    fn test_unexpected_events_are_ignored() {
        let t = transition(StoreState::Opening, Event::Purchase(0), Session::default());
        assert_eq!(t.state, StoreState::Opening);
        assert_eq!(
            t.notices,
            vec![Notice::Ignored {
                state: StoreState::Opening
            }]
        );

        let t = transition(StoreState::Closed, Event::EnterAsUser, t.session);
        assert_eq!(t.state, StoreState::Closed);
        assert_eq!(
            t.notices,
            vec![Notice::Ignored {
                state: StoreState::Closed
            }]
        );
    }
}
