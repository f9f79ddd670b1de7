//! Heavy-item classification.

use super::types::Item;

/// Items split by the heavy-item threshold, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Items isolated one per batch.
    pub heavy: Vec<Item>,
    /// Items subject to bin packing.
    pub regular: Vec<Item>,
}

/// Splits `items` into heavy and regular items.
///
/// An item is heavy when `heavy_threshold > 0` and its weight is at least the
/// threshold. A threshold of 0 disables isolation: every item is regular.
pub fn classify(items: Vec<Item>, heavy_threshold: u64) -> Classification {
    if heavy_threshold == 0 {
        return Classification {
            heavy: Vec::new(),
            regular: items,
        };
    }

    let (heavy, regular): (Vec<Item>, Vec<Item>) = items
        .into_iter()
        .partition(|item| item.weight >= heavy_threshold);

    Classification { heavy, regular }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_threshold_splits_and_keeps_order() {
        let items = vec![
            Item::new("a", 5),
            Item::new("b", 40),
            Item::new("c", 12),
            Item::new("d", 25),
            Item::new("e", 24),
        ];
        let split = classify(items, 25);

        assert_eq!(ids(&split.heavy), vec!["b", "d"]);
        assert_eq!(ids(&split.regular), vec!["a", "c", "e"]);
    }

    #[test]
    fn test_zero_threshold_disables() {
        let items = vec![Item::new("a", 0), Item::new("b", 1000)];
        let split = classify(items, 0);

        assert!(split.heavy.is_empty());
        assert_eq!(ids(&split.regular), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classify(Vec::new(), 10), Classification::default());
    }
}
