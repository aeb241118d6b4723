//! Tests for item mutations.

use super::*;
use crate::config::ListConfig;
use crate::integration::drain;
use crate::test_harness::{loaded_list, numbered, TestItem};
use crate::view_state::LineRange;

fn run(list: &mut VirtualList<TestItem>, command: Option<Command>) {
    drain(list, command);
}

fn first_visible(list: &VirtualList<TestItem>) -> String {
    list.visible_lines()
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

fn backward() -> ListConfig {
    ListConfig::default().with_direction(Direction::Backward)
}

mod append {
    use super::*;

    #[test]
    fn forward_append_extends_buffer() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);

        let command = list.append_item(TestItem::new("3", "item 3"));
        run(&mut list, command);

        assert_eq!(list.rendered().text(), "item 0\nitem 1\nitem 2\nitem 3");
        assert_eq!(list.selected_id(), Some("0"));
        assert!(list.store.index_is_consistent());
    }

    #[test]
    fn backward_at_bottom_follows_new_item() {
        let mut list = loaded_list(numbered(5), backward(), 10, 3);
        assert_eq!(list.selected_id(), Some("4"));

        let command = list.append_item(TestItem::new("5", "item 5"));
        run(&mut list, command);

        assert_eq!(list.selected_id(), Some("5"));
        assert_eq!(list.offset(), 0);
        assert_eq!(list.visible_range(), Some(LineRange::new(3, 5)));
    }

    #[test]
    fn backward_scrolled_up_keeps_content_still() {
        let mut list = loaded_list(numbered(10), backward(), 10, 3);
        let command = list.move_up(4);
        run(&mut list, command);
        assert_eq!(list.visible_range(), Some(LineRange::new(3, 5)));

        let command = list.append_item(TestItem::new("10", "item 10"));
        run(&mut list, command);

        assert_eq!(list.offset(), 5);
        assert_eq!(list.visible_range(), Some(LineRange::new(3, 5)));
        assert_eq!(first_visible(&list), "item 3");
    }

    #[test]
    fn duplicate_id_is_ignored() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);
        assert!(list.append_item(TestItem::new("1", "again")).is_none());
        assert_eq!(list.len(), 3);
        assert_eq!(list.rendered().text(), "item 0\nitem 1\nitem 2");
    }

    #[test]
    fn append_then_delete_restores_buffer() {
        let config = ListConfig::default().with_gap(1);
        let mut list = loaded_list(numbered(4), config, 10, 3);
        let before = list.rendered().clone();

        let command = list.append_item(TestItem::tall("x", 3));
        run(&mut list, command);
        assert_ne!(list.rendered(), &before);

        let command = list.delete_item("x");
        run(&mut list, command);
        assert_eq!(list.rendered(), &before);
    }

    #[test]
    fn appended_item_is_sized() {
        let mut list = loaded_list(numbered(1), ListConfig::default(), 12, 4);
        let command = list.append_item(TestItem::new("n", "new"));
        run(&mut list, command);
        assert_eq!(list.item("n").map(TestItem::size), Some((12, 4)));
    }
}

mod prepend {
    use super::*;

    #[test]
    fn forward_at_top_selects_new_item() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);

        let command = list.prepend_item(TestItem::new("new", "new"));
        run(&mut list, command);

        assert_eq!(list.items()[0].id(), "new");
        assert_eq!(list.selected_id(), Some("new"));
        assert_eq!(list.offset(), 0);
        assert!(list.store.index_is_consistent());
    }

    #[test]
    fn forward_scrolled_down_keeps_content_still() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(4);
        run(&mut list, command);
        assert_eq!(first_visible(&list), "item 4");

        let command = list.prepend_item(TestItem::new("new", "new"));
        run(&mut list, command);

        assert_eq!(list.offset(), 5);
        assert_eq!(first_visible(&list), "item 4");
    }

    #[test]
    fn backward_prepend_leaves_bottom_anchor() {
        let mut list = loaded_list(numbered(5), backward(), 10, 3);
        let command = list.prepend_item(TestItem::new("new", "new"));
        run(&mut list, command);

        assert_eq!(list.offset(), 0);
        assert_eq!(list.selected_id(), Some("4"));
        assert_eq!(list.rendered().line_text(0), Some("new"));
    }
}

mod update {
    use super::*;

    #[test]
    fn same_height_update_replaces_lines() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);
        let command = list.update_item("1", TestItem::new("1", "changed"));
        run(&mut list, command);
        assert_eq!(list.rendered().text(), "item 0\nchanged\nitem 2");
    }

    #[test]
    fn growth_above_viewport_is_absorbed() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(5);
        run(&mut list, command);
        assert_eq!(first_visible(&list), "item 5");

        let command = list.update_item("2", TestItem::new("2", "a\nb\nc"));
        run(&mut list, command);

        assert_eq!(list.offset(), 7);
        assert_eq!(first_visible(&list), "item 5");
    }

    #[test]
    fn growth_below_viewport_changes_nothing_visible() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(5);
        run(&mut list, command);

        let command = list.update_item("9", TestItem::new("9", "a\nb\nc"));
        run(&mut list, command);

        assert_eq!(list.offset(), 5);
        assert_eq!(list.total_height(), 12);
    }

    #[test]
    fn backward_growth_below_anchor_is_absorbed() {
        let mut list = loaded_list(numbered(10), backward(), 10, 3);
        let command = list.move_up(3);
        run(&mut list, command);
        assert_eq!(list.visible_range(), Some(LineRange::new(4, 6)));

        let command = list.update_item("8", TestItem::new("8", "a\nb\nc"));
        run(&mut list, command);

        assert_eq!(list.offset(), 5);
        assert_eq!(list.visible_range(), Some(LineRange::new(4, 6)));
        assert_eq!(first_visible(&list), "item 4");
    }

    #[test]
    fn replacement_may_rename_item() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);
        let command = list.update_item("0", TestItem::new("zero", "renamed"));
        run(&mut list, command);

        assert_eq!(list.selected_id(), Some("zero"));
        assert!(list.item("0").is_none());
        assert_eq!(list.rendered().line_text(0), Some("renamed"));
        assert!(list.store.index_is_consistent());
    }

    #[test]
    fn renamed_growth_above_viewport_is_absorbed() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(5);
        run(&mut list, command);
        assert_eq!(first_visible(&list), "item 5");

        let command = list.update_item("1", TestItem::new("x", "a\nb\nc"));
        run(&mut list, command);

        assert_eq!(list.offset(), 7);
        assert_eq!(first_visible(&list), "item 5");
        assert!(list.renderer.rendered("1").is_none());
    }

    #[test]
    fn unknown_or_colliding_ids_are_ignored() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);
        assert!(list.update_item("nope", TestItem::new("nope", "x")).is_none());
        assert!(list.update_item("0", TestItem::new("1", "x")).is_none());
        assert_eq!(list.rendered().text(), "item 0\nitem 1\nitem 2");
    }
}

mod delete {
    use super::*;

    #[test]
    fn deleting_selected_selects_previous() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);
        let command = list.set_selected("2");
        run(&mut list, command);

        let command = list.delete_item("2");
        run(&mut list, command);

        assert_eq!(list.selected_id(), Some("1"));
        assert_eq!(list.rendered().text(), "item 0\nitem 1");
    }

    #[test]
    fn deleting_first_selected_clears_selection() {
        let mut list = loaded_list(numbered(3), ListConfig::default(), 10, 5);

        let command = list.delete_item("0");
        run(&mut list, command);

        assert_eq!(list.selected_id(), None);
        assert_eq!(list.rendered().text(), "item 1\nitem 2");
    }

    #[test]
    fn offset_is_clamped_after_delete() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(7);
        run(&mut list, command);

        let command = list.delete_item("9");
        run(&mut list, command);

        assert_eq!(list.offset(), 6);
    }

    #[test]
    fn deleting_last_item_empties_view() {
        let mut list = loaded_list(numbered(1), ListConfig::default(), 10, 3);
        let command = list.delete_item("0");
        run(&mut list, command);

        assert!(list.is_empty());
        assert_eq!(list.visible_range(), None);
        assert_eq!(list.offset(), 0);
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut list = loaded_list(numbered(2), ListConfig::default(), 10, 3);
        assert!(list.delete_item("nope").is_none());
        assert_eq!(list.len(), 2);
    }
}

mod replace_all {
    use super::*;

    #[test]
    fn set_items_resets_everything() {
        let mut list = loaded_list(numbered(10), ListConfig::default(), 10, 3);
        let command = list.move_down(5);
        run(&mut list, command);

        let items = vec![TestItem::new("a", "alpha"), TestItem::new("b", "beta")];
        let command = list.set_items(items);
        run(&mut list, command);

        assert_eq!(list.offset(), 0);
        assert_eq!(list.selected_id(), Some("a"));
        assert_eq!(list.rendered().text(), "alpha\nbeta");
        assert!(list.items().iter().all(|item| item.size() == (10, 3)));
    }
}
