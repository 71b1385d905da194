//! Ordering rules for the draggable card list.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub text: String,
}

impl Card {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Cards in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardList(Vec<Card>);

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl CardList {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the card at `drag_index` out and reinsert it at `hover_index`.
    /// Returns `false` and leaves the list alone if either index is out of range.
    pub fn move_card(&mut self, drag_index: usize, hover_index: usize) -> bool {
        if drag_index >= self.0.len() || hover_index >= self.0.len() {
            return false;
        }
        if drag_index == hover_index {
            return true;
        }
        let card = self.0.remove(drag_index);
        self.0.insert(hover_index, card);
        true
    }
}

/// Decide whether hovering a dragged card over another should swap them.
///
/// `pointer_y` is measured from the top of the hovered card and `height` is
/// that card's height. Dragging down only moves once the pointer is past the
/// hovered card's middle; dragging up only once it is above it.
pub fn should_move(drag_index: usize, hover_index: usize, pointer_y: f64, height: f64) -> bool {
    if drag_index == hover_index {
        return false;
    }
    let middle = height / 2.0;
    if drag_index < hover_index && pointer_y < middle {
        return false;
    }
    if drag_index > hover_index && pointer_y > middle {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &CardList) -> Vec<&str> {
        list.cards().iter().map(|c| c.text.as_str()).collect()
    }

    fn sample() -> CardList {
        CardList::from(vec![
            Card::new(1, "a"),
            Card::new(2, "b"),
            Card::new(3, "c"),
            Card::new(4, "d"),
        ])
    }

    #[test]
    fn test_move_card_down() {
        let mut list = sample();
        assert!(list.move_card(0, 2));
        assert_eq!(texts(&list), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_card_up() {
        let mut list = sample();
        assert!(list.move_card(3, 1));
        assert_eq!(texts(&list), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_card_out_of_range() {
        let mut list = sample();
        assert!(!list.move_card(4, 0));
        assert!(!list.move_card(0, 9));
        assert_eq!(list, sample());
    }

    #[test]
    fn test_should_move_waits_for_midpoint() {
        // Dragging down over a 40px card: only below 20px.
        assert!(!should_move(0, 1, 10.0, 40.0));
        assert!(should_move(0, 1, 25.0, 40.0));
        // Dragging up: only above 20px.
        assert!(!should_move(2, 1, 30.0, 40.0));
        assert!(should_move(2, 1, 5.0, 40.0));
        // Hovering itself never moves.
        assert!(!should_move(1, 1, 0.0, 40.0));
    }

    #[test]
    fn test_list_deserializes_from_array() {
        let list: CardList =
            serde_json::from_str(r#"[{"id":1,"text":"Write a cool JS library"}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.cards()[0].id, 1);
    }
}
