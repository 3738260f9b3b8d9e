//! Shopping list projections.

use crate::model::shopping::ShoppingItem;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListProgress {
    pub checked: usize,
    pub total: usize,
}

impl ListProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

pub fn list_progress<'a>(items: impl IntoIterator<Item = &'a ShoppingItem>) -> ListProgress {
    items
        .into_iter()
        .fold(ListProgress::default(), |mut progress, item| {
            progress.total += 1;
            if item.checked {
                progress.checked += 1;
            }
            progress
        })
}

/// Unchecked items first, each part in creation order.
pub fn ordered_items<'a>(items: impl IntoIterator<Item = &'a ShoppingItem>) -> Vec<&'a ShoppingItem> {
    let mut ordered = items.into_iter().collect::<Vec<_>>();
    ordered.sort_by_key(|item| (item.checked, item.created_at, item.id));
    ordered
}

#[cfg(test)]
mod tests {
    use super::{list_progress, ordered_items};
    use crate::model::new_id;
    use crate::model::shopping::{NewItem, ShoppingItem};

    #[test]
    fn progress_and_order_put_open_items_first() {
        let list_id = new_id();
        let mut items = ["bread", "milk", "eggs"]
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let input = NewItem {
                    name: name.to_string(),
                    ..NewItem::default()
                };
                let mut item = ShoppingItem::from_new(list_id, input);
                item.created_at = index as i64;
                item
            })
            .collect::<Vec<_>>();
        items[0].checked = true;

        let progress = list_progress(&items);
        assert_eq!((progress.checked, progress.total), (1, 3));
        assert!(!progress.is_complete());

        let names = ordered_items(&items)
            .into_iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["milk", "eggs", "bread"]);

        assert!(!list_progress(std::iter::empty()).is_complete());
    }
}
