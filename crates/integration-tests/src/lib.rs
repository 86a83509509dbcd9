//! Integration tests for Marchand.
//!
//! The scenario tests under `tests/` drive whole sessions through
//! [`marchand_storefront::views::ViewController`] with the test doubles
//! defined here standing in for the external collaborators: a scripted
//! confirmation prompt, a recording notifier, and an in-memory seed source.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marchand-integration-tests
//! ```

use std::collections::VecDeque;
use std::path::PathBuf;

use rust_decimal::Decimal;

use marchand_core::{Category, CategoryId, Product, ProductId};
use marchand_storefront::catalog::SeedCatalog;
use marchand_storefront::views::{ConfirmPrompt, Notifier};

/// Confirmation prompt that answers from a script, falling back to a
/// default answer once the script runs out. Records every question asked.
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    default: bool,
    /// The confirmation messages, in the order they were asked.
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Prompt answering `answers` in order, declining after that.
    #[must_use]
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            default: false,
            asked: Vec::new(),
        }
    }

    /// Prompt that confirms everything.
    #[must_use]
    pub fn always_yes() -> Self {
        Self {
            answers: VecDeque::new(),
            default: true,
            asked: Vec::new(),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.answers.pop_front().unwrap_or(self.default)
    }
}

/// Notifier that records every `(title, message)` pair.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: Vec<(String, String)>,
}

impl RecordingNotifier {
    /// The message of the most recent notification.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.notes.last().map(|(_, message)| message.as_str())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        self.notes.push((title.to_string(), message.to_string()));
    }
}

/// The seed catalog used across scenario tests: two categories, three
/// products, catalog order [Cap, Beanie, Scarf].
#[must_use]
pub fn seed_catalog() -> SeedCatalog {
    SeedCatalog {
        categories: vec![
            Category {
                id: CategoryId::new(1),
                name: "Hats".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                name: "Scarves".to_string(),
            },
        ],
        products: vec![
            product(1, "Cap", "10.00", 1),
            product(2, "Beanie", "14.50", 1),
            product(3, "Scarf", "19.50", 2),
        ],
    }
}

/// Build a product fixture.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal.
#[must_use]
pub fn product(id: i32, name: &str, price: &str, category_id: i32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: price.parse::<Decimal>().expect("valid price literal"),
        image_url: format!("/img/{}.png", name.to_lowercase()),
        category_id: CategoryId::new(category_id),
    }
}

/// A unique path under the system temp directory for a file-backed store.
#[must_use]
pub fn temp_store_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("marchand-{label}-{}.json", uuid::Uuid::new_v4()))
}
