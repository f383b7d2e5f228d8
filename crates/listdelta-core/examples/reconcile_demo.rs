//! Reconciliation Demo
//!
//! This example walks the full cycle a list surface runs on every data
//! mutation: capture a before snapshot, mutate, capture an after
//! snapshot, diff the two, and apply the resulting edit script.
//!
//! Key concepts illustrated:
//! 1. Identity and attributes-signature contracts on host types
//! 2. Snapshot capture from a data source
//! 3. The canonical delete/insert/move/reload script order
//! 4. Replaying a script with the reference apply function
#![allow(clippy::unwrap_used, clippy::expect_used)]

use listdelta_core::logging_facility::{init, Profile};
use listdelta_core::{
    apply_edit_script, diff, render_summary, IdentityHash, ItemIdentity, SectionIdentity,
    Snapshot, SnapshotSource,
};
use sha2::{Digest, Sha256};

fn stable_hash(text: &str) -> IdentityHash {
    let digest = Sha256::digest(text.as_bytes());
    u64::from_be_bytes(digest[..8].try_into().unwrap())
}

#[derive(Clone)]
struct Aisle {
    name: &'static str,
}

impl SectionIdentity for Aisle {
    fn identity(&self) -> IdentityHash {
        stable_hash(self.name)
    }
}

#[derive(Clone)]
struct Product {
    name: &'static str,
    quantity: u32,
}

impl ItemIdentity for Product {
    fn identity(&self) -> IdentityHash {
        stable_hash(self.name)
    }

    fn attributes_signature(&self) -> Option<IdentityHash> {
        Some(u64::from(self.quantity))
    }
}

struct GroceryList {
    aisles: Vec<(Aisle, Vec<Product>)>,
}

impl SnapshotSource for GroceryList {
    type Section = Aisle;
    type Item = Product;

    fn sections(&self) -> Vec<Aisle> {
        self.aisles.iter().map(|(aisle, _)| aisle.clone()).collect()
    }

    fn items(&self, section: &Aisle) -> Vec<Product> {
        self.aisles
            .iter()
            .find(|(aisle, _)| aisle.name == section.name)
            .map(|(_, products)| products.clone())
            .unwrap_or_default()
    }
}

fn product(name: &'static str, quantity: u32) -> Product {
    Product { name, quantity }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== ListDelta Reconciliation Demo ===\n");

    let mut list = GroceryList {
        aisles: vec![
            (
                Aisle { name: "Frozen" },
                vec![product("Klondike bar", 1), product("Pizza", 1)],
            ),
            (
                Aisle { name: "Dairy" },
                vec![product("Milk", 2), product("Yogurt", 6)],
            ),
        ],
    };

    println!("## Before\n");
    println!("Frozen: Klondike bar x1, Pizza x1");
    println!("Dairy:  Milk x2, Yogurt x6\n");

    let before = Snapshot::capture(&list);

    // The external mutation: the shopper ups the Klondike bars to two,
    // drops the yogurt, adds bread in a new aisle, and the aisles are
    // resorted so Dairy leads.
    list.aisles = vec![
        (Aisle { name: "Dairy" }, vec![product("Milk", 2)]),
        (
            Aisle { name: "Frozen" },
            vec![product("Klondike bar", 2), product("Pizza", 1)],
        ),
        (Aisle { name: "Bakery" }, vec![product("Bread", 1)]),
    ];

    println!("## After\n");
    println!("Dairy:  Milk x2");
    println!("Frozen: Klondike bar x2, Pizza x1");
    println!("Bakery: Bread x1\n");

    let after = Snapshot::capture(&list);

    let script = diff(&before, &after)?;
    println!("## Operations ({} total)\n", script.len());
    for op in script.iter() {
        println!("  {:?}", op);
    }
    println!();

    print!("{}", render_summary(&script));

    // Replaying the script against the before snapshot reproduces the
    // after structure exactly.
    let rebuilt = apply_edit_script(&before, &after, &script)?;
    assert!(rebuilt.structure_eq(&after));
    assert!(rebuilt.semantic_eq(&after));
    println!("\n✓ Replayed script reproduces the after snapshot");

    Ok(())
}
