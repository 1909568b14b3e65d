/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Shared helpers for the EnumDict example programs.

use enumdict_dictionary::{Dict, DictEntry};

/// Order status dictionary as a generator would emit it.
#[must_use]
pub fn order_status() -> Dict {
    Dict::new(
        "order_status",
        vec![
            DictEntry::new(0, "Pending").with_attr_type("warning"),
            DictEntry::new(1, "Paid").with_attr_type("success"),
            DictEntry::new(2, "Shipped").with_attr_type("primary"),
            DictEntry::new(3, "Cancelled").with_attr_type("danger"),
        ],
    )
}

/// Raw order status values as they arrive from a database or request.
pub const INCOMING: [&str; 5] = ["0", "1", "2", "3", "9"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_covers_incoming() {
        let dict = order_status();
        let known = INCOMING.iter().filter(|v| dict.contains(**v)).count();
        assert_eq!(known, 4);
    }
}
