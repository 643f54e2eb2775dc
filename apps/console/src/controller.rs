//! # Store Controller
//!
//! The interactive loop: render the current state's menu, read a choice,
//! turn it into a session [`Event`], print the resulting notices.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  run()                                                                  │
//! │   │                                                                     │
//! │   ├── store.load_catalog() ──► Session                                  │
//! │   │                                                                     │
//! │   ├── while state != Closed                                             │
//! │   │     step():  menu ──► Prompter ──► Event ──► transition()           │
//! │   │                                              │                      │
//! │   │                                      notices ▼                      │
//! │   │                                   render / journal receipt          │
//! │   │                                                                     │
//! │   │     stdin EOF ──► leave the loop as if the store had closed         │
//! │   │     other console error ──► save first, then return it          │
//! │   │                                                                     │
//! │   └── store.persist_catalog() ──► "save success"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::mem;

use emporium_core::{transition, Event, Notice, Receipt, Session, StoreState};
use emporium_store::CatalogStore;
use tracing::{debug, error, info, warn};

use crate::capture::{capture_commodity, choose_variant};
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;

/// Drives one store session from open to close.
pub struct StoreController<R, W> {
    prompter: Prompter<R, W>,
    store: CatalogStore,
    store_name: String,
    state: StoreState,
    session: Session,
}

impl<R: BufRead, W: Write> StoreController<R, W> {
    pub fn new(store: CatalogStore, store_name: impl Into<String>, input: R, output: W) -> Self {
        StoreController {
            prompter: Prompter::new(input, output),
            store,
            store_name: store_name.into(),
            state: StoreState::Opening,
            session: Session::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> StoreState {
        self.state
    }

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gives the output sink back.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Loads the catalog, runs until the store closes, then saves.
    ///
    /// The catalog is saved on every exit path. A console failure is
    /// returned only after the save has been attempted.
    pub fn run(&mut self) -> AppResult<()> {
        self.session = Session::new(self.store.load_catalog());
        self.state = StoreState::Opening;

        let served = self.serve();
        if let Err(err) = &served {
            error!(error = %err, state = ?self.state, "Console failed, closing the store");
            self.state = StoreState::Closed;
        }

        let saved = self.save();
        served.and(saved)
    }

    fn serve(&mut self) -> AppResult<()> {
        self.prompter
            .say(format!("Welcome to {}!", self.store_name))?;

        while !self.state.is_terminal() {
            match self.step() {
                Ok(()) => {}
                Err(AppError::InputClosed) => {
                    info!(state = ?self.state, "Console input closed, closing the store");
                    self.state = StoreState::Closed;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn save(&mut self) -> AppResult<()> {
        match self.store.persist_catalog(&self.session.catalog) {
            Ok(summary) => {
                debug!(written = ?summary.written, "Catalog saved");
                self.prompter.say("save success")
            }
            Err(err) => {
                error!(error = %err, "Failed to save the catalog");
                self.prompter
                    .say(format!("[ERROR] Could not save the catalog: {}", err))
            }
        }
    }

    // =========================================================================
    // One menu per state
    // =========================================================================

    fn step(&mut self) -> AppResult<()> {
        match self.state {
            StoreState::Opening => self.ask_mode(),
            StoreState::Deciding => self.decide_service(),
            StoreState::Shopping => self.choose_commodity(),
            StoreState::CartReview => self.review_cart(),
            StoreState::Checkout => self.check_out(),
            StoreState::Managing => self.manage(),
            StoreState::Closed => Ok(()),
        }
    }

    fn ask_mode(&mut self) -> AppResult<()> {
        self.prompter.say("Are you a general user or a manager?")?;
        self.prompter.say("1. general user, 2. manager")?;
        self.prompter.say("Or type 0 to close the store")?;

        let event = match self.prompter.menu_choice(2, true)? {
            1 => Event::EnterAsUser,
            2 => Event::EnterAsManager,
            _ => Event::CloseStore,
        };
        self.apply(event)
    }

    fn decide_service(&mut self) -> AppResult<()> {
        self.prompter.say("Below are our service:")?;
        self.prompter.say("1. Buy the commodity you want")?;
        self.prompter.say("2. Check your shopping cart")?;
        self.prompter.say("3. Check out")?;
        self.prompter.say("Or type 0 to exit user mode")?;
        self.prompter.say("You may choose what you need:")?;

        let event = match self.prompter.menu_choice(3, true)? {
            1 => Event::StartShopping,
            2 => Event::ReviewCart,
            3 => Event::BeginCheckout,
            _ => Event::LeaveUserMode,
        };
        self.apply(event)
    }

    fn choose_commodity(&mut self) -> AppResult<()> {
        self.show_catalog()?;
        self.prompter.say("Or input 0 to exit shopping")?;

        let event = match self.prompter.menu_choice(self.session.catalog.len(), true)? {
            0 => Event::StopShopping,
            choice => Event::Purchase(choice - 1),
        };
        self.apply(event)
    }

    fn review_cart(&mut self) -> AppResult<()> {
        self.show_cart()?;
        self.prompter
            .say("Do you want to delete the entry from the cart?")?;
        self.prompter.say("1. yes, 2. no")?;

        if self.prompter.menu_choice(2, false)? == 1 {
            self.prompter
                .say("Which one do you want to delete(type the commodity index)?")?;
            self.prompter.say("Or type 0 to regret")?;
            let index = self.prompter.menu_choice(self.session.cart.len(), true)?;
            if index != 0 {
                // Stays in CartReview unless that was the last line.
                return self.apply(Event::RemoveCartLine(index - 1));
            }
        }

        self.prompter.say("Do you want to checkout?")?;
        self.prompter.say("1. yes, 2. No, I want to buy more")?;
        let checkout = self.prompter.menu_choice(2, false)? == 1;
        self.apply(Event::FinishReview { checkout })
    }

    fn check_out(&mut self) -> AppResult<()> {
        self.show_cart()?;
        self.prompter.say("Are you sure you want to buy all of them?")?;
        self.prompter.say("1. Yes, sure, 2. No, I want to buy more")?;

        let event = match self.prompter.menu_choice(2, false)? {
            1 => Event::ConfirmCheckout,
            _ => Event::DeclineCheckout,
        };
        self.apply(event)
    }

    fn manage(&mut self) -> AppResult<()> {
        self.prompter
            .say("Here are some manager services you can use:")?;
        self.prompter.say("1. Add new commodity")?;
        self.prompter
            .say("2. Delete commodity from the commodity list")?;
        self.prompter.say("3. Show all existing commodity")?;
        self.prompter.say("Or type 0 to exit manager mode")?;
        self.prompter.say("Which action do you need?")?;

        match self.prompter.menu_choice(3, true)? {
            1 => {
                let Some(variant) = choose_variant(&mut self.prompter)? else {
                    return Ok(());
                };
                let commodity = capture_commodity(&mut self.prompter, variant)?;
                self.apply(Event::AddCommodity(commodity))
            }
            2 => self.delete_commodity(),
            3 => self.apply(Event::ListCommodities),
            _ => self.apply(Event::LeaveManagerMode),
        }
    }

    fn delete_commodity(&mut self) -> AppResult<()> {
        let catalog = &self.session.catalog;
        if catalog.is_empty() {
            return self.prompter.say("No commodity inside the store");
        }

        self.prompter
            .say("There are existing commodity in our store:")?;
        self.prompter.write_raw(&catalog.render_names())?;
        self.prompter.say("Or type 0 to regret")?;
        self.prompter.say("Which one do you want to delete?")?;

        match self.prompter.menu_choice(self.session.catalog.len(), true)? {
            0 => Ok(()),
            choice => self.apply(Event::DeleteCommodity(choice - 1)),
        }
    }

    // =========================================================================
    // Events and notices
    // =========================================================================

    fn apply(&mut self, event: Event) -> AppResult<()> {
        debug!(state = ?self.state, ?event, "Applying event");

        let session = mem::take(&mut self.session);
        let outcome = transition(self.state, event, session);
        self.state = outcome.state;
        self.session = outcome.session;

        for notice in outcome.notices {
            self.render_notice(notice)?;
        }
        Ok(())
    }

    fn render_notice(&mut self, notice: Notice) -> AppResult<()> {
        match notice {
            Notice::CommodityAdded { name } => {
                info!(%name, "Commodity added");
                self.prompter
                    .say(format!("{} has been added to the store", name))
            }
            Notice::DuplicateCommodity { name } => self.prompter.say(format!(
                "[WARNING] {} is exist in the store. If you want to edit it, please delete it first",
                name
            )),
            Notice::CommodityRemoved { name, pruned } => {
                info!(%name, pruned, "Commodity removed");
                self.prompter
                    .say(format!("{} has been removed from the store", name))?;
                if pruned > 0 {
                    self.prompter.say(format!(
                        "{} shopping cart line(s) for it were dropped",
                        pruned
                    ))?;
                }
                Ok(())
            }
            Notice::AddedToCart { name, quantity } => self
                .prompter
                .say(format!("{} is in your cart (× {})", name, quantity)),
            Notice::CartLineRemoved { name } => self
                .prompter
                .say(format!("{} has been removed from your cart", name)),
            Notice::CartEmpty => self.prompter.say("Your shopping cart is empty"),
            Notice::NothingToCheckout => self
                .prompter
                .say("Your shopping cart is empty, nothing can checkout"),
            Notice::CheckedOut(receipt) => self.finish_checkout(&receipt),
            Notice::ShowCatalog => self.show_catalog(),
            Notice::Rejected(err) => {
                warn!(error = %err, "Request rejected");
                self.prompter.say(format!("[ERROR] {}", err))
            }
            Notice::Ignored { state } => {
                debug!(?state, "Event ignored");
                Ok(())
            }
        }
    }

    fn finish_checkout(&mut self, receipt: &Receipt) -> AppResult<()> {
        info!(receipt = %receipt.id, total = %receipt.total, "Checkout confirmed");
        self.prompter.write_raw(&receipt.render(&self.store_name))?;
        self.prompter.say("")?;

        if let Err(err) = self.store.record_receipt(receipt) {
            warn!(error = %err, receipt = %receipt.id, "Receipt not journaled");
            self.prompter
                .say(format!("[WARNING] The receipt could not be recorded: {}", err))?;
        }
        Ok(())
    }

    // =========================================================================
    // Listings
    // =========================================================================

    fn show_catalog(&mut self) -> AppResult<()> {
        let catalog = &self.session.catalog;
        if catalog.is_empty() {
            return self.prompter.say("No commodity inside the store");
        }
        self.prompter.say("Here are all commodity in our store:")?;
        self.prompter.write_raw(&catalog.render_details())?;
        self.prompter.say("")
    }

    fn show_cart(&mut self) -> AppResult<()> {
        self.prompter.say("Here is the current cart content:")?;
        let text = self.session.cart.render(&self.session.catalog);
        self.prompter.write_raw(&text)
    }
}

// =============================================================================
// Scripted Session Tests
// =============================================================================
