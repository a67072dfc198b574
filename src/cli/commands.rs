use std::io::BufRead;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::{style, Emoji, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{debug, error, info, warn};

use crate::{
    cli::args::{ShellCommand, ShellLine},
    models::{Adjustment, Cart, Catalog, ItemId},
    services::{
        CartEvent, CartService, CheckoutError, CheckoutService, LoggingCheckout, NotificationSink,
    },
    utils::{
        formatting::{format_cart_table, format_catalog_table, format_order_summary, format_totals},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static BERRY: Emoji<'_, '_> = Emoji("🫐 ", "");

/// Prints add-to-cart confirmations to the terminal.
struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, event: &CartEvent) {
        println!("{} {}", CHECKMARK, style(event).green());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One shopper's session: the loaded catalog plus the cart it owns.
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    cart_service: CartService,
    checkout_service: CheckoutService,
    currency: String,
}

impl Session {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self::with_services(
            catalog,
            config,
            CartService::new(Arc::new(ConsoleNotifier)),
            CheckoutService::new(Arc::new(LoggingCheckout)),
        )
    }

    pub fn with_services(
        catalog: Catalog,
        config: &Config,
        cart_service: CartService,
        checkout_service: CheckoutService,
    ) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            cart_service,
            checkout_service,
            currency: config.currency_symbol.clone(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!("{} {}", BERRY, style("Berry Shop").bold().magenta());
        println!("Type {} for the list of commands", style("help").cyan());
        self.show_catalog();

        if Term::stdout().is_term() {
            self.run_interactive()
        } else {
            self.run_script()
        }
    }

    fn run_interactive(&mut self) -> Result<()> {
        let theme = ColorfulTheme::default();

        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt(self.prompt())
                .allow_empty(true)
                .interact_text()
                .context("Failed to read command")?;

            if self.handle_line(&line) == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn run_script(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read command")?;
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        let totals = self.cart.totals();
        if totals.total_item_count == 0 {
            "cart".to_string()
        } else {
            format!("cart ({})", totals.total_item_count)
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }

        match ShellLine::parse_line(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                debug!("Could not parse '{}': {}", line, e);
                println!("{}", e);
                Flow::Continue
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::Catalog => self.show_catalog(),
            ShellCommand::Add { id } => self.handle_add(id),
            ShellCommand::Inc { id } => self.handle_adjust(id, 1),
            ShellCommand::Dec { id } => self.handle_adjust(id, -1),
            ShellCommand::Remove { id } => self.handle_remove(id),
            ShellCommand::Cart => self.show_cart(),
            ShellCommand::Checkout => self.handle_checkout(),
            ShellCommand::Clear => {
                self.cart_service.clear(&mut self.cart);
                println!("{} Cart emptied", CHECKMARK);
            }
            ShellCommand::Quit => {
                info!("Session ended with {} cart lines", self.cart.len());
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn show_catalog(&self) {
        if self.catalog.is_empty() {
            println!("{} {}", WARNING, style("The catalog is empty").yellow());
            return;
        }
        println!("{}", format_catalog_table(self.catalog.list_items(), &self.currency));
    }

    fn show_cart(&self) {
        if self.cart.is_empty() {
            println!("{} {}", INFO, style("Your cart is empty").dim());
            return;
        }
        println!("{}", format_cart_table(&self.cart, &self.currency));
        println!("{}", format_totals(&self.cart.totals(), &self.currency));
    }

    fn handle_add(&mut self, id: ItemId) {
        let Some(item) = self.catalog.find(id) else {
            println!("{} No catalog item with ID {}", WARNING, style(id).yellow());
            warn!("Add requested for unknown item {}", id);
            return;
        };

        if let Err(e) = self.cart_service.add_item(&mut self.cart, item) {
            println!("{} Could not add item: {}", CROSS, style(&e).red());
            error!("Failed to add item {}: {}", id, e);
        }
    }

    fn handle_adjust(&mut self, id: ItemId, delta: i64) {
        match self.cart_service.adjust_quantity(&mut self.cart, id, delta) {
            Ok(Adjustment::Updated(quantity)) => {
                println!("Quantity for item {} is now {}", id, style(quantity).cyan());
            }
            Ok(Adjustment::Removed) => {
                println!("{} Item {} removed from cart", INFO, id);
            }
            Ok(Adjustment::Missing) => {
                println!("{} Item {} is not in the cart", WARNING, style(id).yellow());
            }
            Err(e) => {
                println!("{} Could not change quantity: {}", CROSS, style(&e).red());
                error!("Failed to adjust item {}: {}", id, e);
            }
        }
    }

    fn handle_remove(&mut self, id: ItemId) {
        if self.cart_service.remove_item(&mut self.cart, id) {
            println!("{} Item {} removed from cart", CHECKMARK, id);
        } else {
            println!("{} Item {} is not in the cart", WARNING, style(id).yellow());
        }
    }

    fn handle_checkout(&mut self) {
        match self.checkout_service.place_order(&mut self.cart) {
            Ok(order) => {
                println!("{} Order placed!", CHECKMARK);
                print!("{}", format_order_summary(&order, &self.currency));
            }
            Err(CheckoutError::EmptyCart) => {
                println!("{} {}", WARNING, style("Add something to the cart first").yellow());
            }
            Err(e) => {
                println!("{} Checkout failed: {}", CROSS, style(&e).red());
                error!("Checkout failed: {}", e);
            }
        }
    }
}
