//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod list;

use std::str::FromStr;

use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use menu_commerce::{ItemId, Session};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against item names.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category: All, Main, Side, Beverage or Dessert.
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Hide items that are currently unavailable.
    #[arg(short, long)]
    pub available_only: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Cart actions applied in order: add:<id>, set:<id>=<qty>, remove:<id>.
    #[arg(required = true)]
    pub actions: Vec<CartAction>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Cart actions applied before checkout: add:<id>, set:<id>=<qty>, remove:<id>.
    #[arg(required = true)]
    pub actions: Vec<CartAction>,

    /// Full name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Delivery address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Special instructions.
    #[arg(long)]
    pub notes: Option<String>,

    /// Payment method: credit-card, digital-wallet or cash.
    #[arg(short, long, default_value = "credit-card")]
    pub payment: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the path of the config file in use.
    Path,
    /// Write a default menu.toml in the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write menu.json instead of menu.toml.
        #[arg(long = "as-json")]
        as_json: bool,
    },
    /// Validate the config file.
    Validate,
}

/// One user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(ItemId),
    Set(ItemId, i64),
    Remove(ItemId),
}

impl FromStr for CartAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, rest) = s
            .split_once(':')
            .with_context(|| format!("Expected <verb>:<id>, got {:?}", s))?;
        let rest = rest.trim();
        if rest.is_empty() {
            bail!("Missing item id in {:?}", s);
        }

        match verb.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(CartAction::Add(ItemId::new(rest))),
            "remove" | "rm" => Ok(CartAction::Remove(ItemId::new(rest))),
            "set" => {
                let (id, qty) = rest
                    .split_once('=')
                    .with_context(|| format!("Expected set:<id>=<qty>, got {:?}", s))?;
                let qty: i64 = qty
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid quantity in {:?}", s))?;
                Ok(CartAction::Set(ItemId::new(id.trim()), qty))
            }
            other => bail!("Unknown cart action {:?} (use add, set or remove)", other),
        }
    }
}

impl CartAction {
    /// Apply to the session. Adding an unknown or unavailable item fails;
    /// set and remove on absent items are no-ops.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        match self {
            CartAction::Add(id) => {
                session
                    .add_to_cart(id)
                    .with_context(|| format!("Cannot add {}", id))?;
            }
            CartAction::Set(id, qty) => {
                session.update_quantity(id, *qty);
            }
            CartAction::Remove(id) => {
                session.remove_from_cart(id);
            }
        }
        Ok(())
    }
}

/// Apply actions in order.
pub fn apply_actions(session: &mut Session, actions: &[CartAction]) -> Result<()> {
    for action in actions {
        tracing::debug!(?action, "applying cart action");
        action.apply(session)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_commerce::catalog::Catalog;

    #[test]
    fn test_parse_actions() {
        assert_eq!(
            "add:i-1".parse::<CartAction>().unwrap(),
            CartAction::Add(ItemId::new("i-1"))
        );
        assert_eq!(
            "set:i-1=3".parse::<CartAction>().unwrap(),
            CartAction::Set(ItemId::new("i-1"), 3)
        );
        assert_eq!(
            "set:i-1=-1".parse::<CartAction>().unwrap(),
            CartAction::Set(ItemId::new("i-1"), -1)
        );
        assert_eq!(
            "remove:i-3".parse::<CartAction>().unwrap(),
            CartAction::Remove(ItemId::new("i-3"))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("i-1".parse::<CartAction>().is_err());
        assert!("add:".parse::<CartAction>().is_err());
        assert!("set:i-1".parse::<CartAction>().is_err());
        assert!("set:i-1=many".parse::<CartAction>().is_err());
        assert!("buy:i-1".parse::<CartAction>().is_err());
    }

    #[test]
    fn test_apply_actions_in_order() {
        let mut session = Session::new(Catalog::sample());
        let actions: Vec<CartAction> = ["add:i-1", "add:i-3", "set:i-1=2", "remove:i-3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        apply_actions(&mut session, &actions).unwrap();
        assert_eq!(session.item_count(), 2);
        assert_eq!(session.totals().grand_total.amount(), 187_000);
    }

    #[test]
    fn test_adding_unavailable_item_fails() {
        let mut session = Session::new(Catalog::sample());
        let actions = vec![CartAction::Add(ItemId::new("i-4"))];
        assert!(apply_actions(&mut session, &actions).is_err());
    }
}
