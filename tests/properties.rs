//! Property-based tests for list invariants.
//!
//! Tests validate:
//! 1. The offset stays within `[0, max(0, total - viewport)]` after every mutator
//! 2. Appending then deleting an item restores the rendered buffer exactly
//! 3. The rendered buffer does not depend on how it was built
//! 4. Item navigation onto a tall item keeps the viewport inside it
//! 5. Reversed selection rectangles select the same text

mod common;

use common::{loaded, settle, Note};
use proptest::prelude::*;
use vlist::config::ListConfig;
use vlist::model::{Command, Item};
use vlist::selection::SelectionRect;
use vlist::view_state::{Direction, LineRange};
use vlist::VirtualList;

// ===== Strategies =====

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

fn arb_heights() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..5, 1..25)
}

fn notes(heights: &[usize]) -> Vec<Note> {
    heights
        .iter()
        .enumerate()
        .map(|(i, height)| Note::tall(format!("n{i}"), *height))
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Append(usize),
    Prepend(usize),
    Delete(usize),
    Update(usize, usize),
    MoveDown(usize),
    MoveUp(usize),
    Below,
    Above,
    Top,
    Bottom,
    Resize(u16),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..5).prop_map(Op::Append),
        (1usize..5).prop_map(Op::Prepend),
        any::<usize>().prop_map(Op::Delete),
        (any::<usize>(), 1usize..6).prop_map(|(i, h)| Op::Update(i, h)),
        (0usize..12).prop_map(Op::MoveDown),
        (0usize..12).prop_map(Op::MoveUp),
        Just(Op::Below),
        Just(Op::Above),
        Just(Op::Top),
        Just(Op::Bottom),
        (1u16..12).prop_map(Op::Resize),
    ]
}

fn assert_offset_in_bounds(list: &VirtualList<Note>) -> Result<(), TestCaseError> {
    let height = usize::from(list.size().1);
    let max = list.total_height().saturating_sub(height);
    prop_assert!(
        list.offset() <= max,
        "offset {} exceeds max {} (total {}, viewport {})",
        list.offset(),
        max,
        list.total_height(),
        height
    );
    Ok(())
}

fn apply(list: &mut VirtualList<Note>, op: &Op, next_id: &mut usize) -> Option<Command> {
    let mut fresh = |height: usize| {
        *next_id += 1;
        Note::tall(format!("x{next_id}"), height)
    };
    let pick = |list: &VirtualList<Note>, i: usize| {
        (!list.is_empty()).then(|| list.items()[i % list.len()].id().to_owned())
    };
    match op {
        Op::Append(h) => list.append_item(fresh(*h)),
        Op::Prepend(h) => list.prepend_item(fresh(*h)),
        Op::Delete(i) => pick(list, *i).and_then(|id| list.delete_item(&id)),
        Op::Update(i, h) => {
            pick(list, *i).and_then(|id| list.update_item(&id, Note::tall(id.clone(), *h)))
        }
        Op::MoveDown(n) => list.move_down(*n),
        Op::MoveUp(n) => list.move_up(*n),
        Op::Below => list.select_item_below(),
        Op::Above => list.select_item_above(),
        Op::Top => list.go_to_top(),
        Op::Bottom => list.go_to_bottom(),
        Op::Resize(h) => list.set_size(list.size().0, *h),
    }
}

// ===== Property 1: Offset bounds =====

proptest! {
    #[test]
    fn offset_stays_in_bounds(
        heights in arb_heights(),
        direction in arb_direction(),
        gap in 0usize..3,
        viewport in 1u16..10,
        ops in prop::collection::vec(arb_op(), 1..30),
    ) {
        let config = ListConfig::default().with_direction(direction).with_gap(gap);
        let mut list = loaded(notes(&heights), config, 20, viewport);
        assert_offset_in_bounds(&list)?;

        let mut next_id = 0;
        for op in &ops {
            let command = apply(&mut list, op, &mut next_id);
            assert_offset_in_bounds(&list)?;
            settle(&mut list, command);
            assert_offset_in_bounds(&list)?;
        }
    }
}

// ===== Property 2: Append + delete restores the buffer =====

proptest! {
    #[test]
    fn append_then_delete_restores_buffer(
        heights in arb_heights(),
        direction in arb_direction(),
        gap in 0usize..3,
        viewport in 1u16..10,
        added in 1usize..6,
    ) {
        let config = ListConfig::default().with_direction(direction).with_gap(gap);
        let mut list = loaded(notes(&heights), config, 20, viewport);
        let before = list.rendered().clone();

        let command = list.append_item(Note::tall("added", added));
        settle(&mut list, command);
        let command = list.delete_item("added");
        settle(&mut list, command);

        prop_assert_eq!(list.rendered(), &before);
    }
}

// ===== Property 3: Build-path independence =====

proptest! {
    #[test]
    fn buffer_is_independent_of_build_path(
        heights in arb_heights(),
        gap in 0usize..3,
        viewport in 1u16..10,
        start in 0usize..60,
        span in 0usize..20,
    ) {
        let config = ListConfig::default().with_gap(gap);
        let whole = loaded(notes(&heights), config.clone(), 20, viewport);

        let mut appended = loaded(Vec::new(), config.clone(), 20, viewport);
        for note in notes(&heights) {
            let command = appended.append_item(note);
            settle(&mut appended, command);
        }

        let mut prepended = loaded(Vec::new(), config, 20, viewport);
        for note in notes(&heights).into_iter().rev() {
            let command = prepended.prepend_item(note);
            settle(&mut prepended, command);
        }

        let expected = whole.rendered();
        prop_assert_eq!(appended.rendered().text(), expected.text());
        prop_assert_eq!(prepended.rendered().text(), expected.text());

        let end = start + span;
        let joined = expected
            .styled(LineRange::new(0, usize::MAX))
            .iter()
            .skip(start)
            .take(end + 1 - start)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(expected.get_lines(start, end), joined.as_str());
        prop_assert_eq!(appended.rendered().get_lines(start, end), joined.as_str());
        prop_assert_eq!(prepended.rendered().get_lines(start, end), joined.as_str());
    }
}

// ===== Property 4: Tall item containment =====

proptest! {
    #[test]
    fn navigating_onto_tall_item_fills_viewport(
        before in 0usize..4,
        after in 0usize..4,
        extra in 1usize..6,
        viewport in 1u16..8,
        direction in arb_direction(),
    ) {
        let tall = usize::from(viewport) + extra;
        let mut items: Vec<Note> = (0..before).map(|i| Note::new(format!("b{i}"), "before")).collect();
        items.push(Note::tall("t", tall));
        items.extend((0..after).map(|i| Note::new(format!("a{i}"), "after")));
        let config = ListConfig::default().with_direction(direction);
        let mut list = loaded(items, config, 20, viewport);

        for _ in 0..before + after + 1 {
            if list.selected_id() == Some("t") {
                break;
            }
            let command = match direction {
                Direction::Forward => list.select_item_below(),
                Direction::Backward => list.select_item_above(),
            };
            settle(&mut list, command);
        }

        prop_assert_eq!(list.selected_id(), Some("t"));
        let span = list.item_span("t").expect("laid out");
        let view = list.visible_range().expect("visible");
        prop_assert!(span.contains_range(view), "{:?} not inside {:?}", view, span);
    }
}

// ===== Property 5: Rectangle orientation =====

proptest! {
    #[test]
    fn reversed_rectangle_selects_the_same(
        lines in prop::collection::vec("[a-z ]{0,12}", 1..6),
        start_col in 0i32..14,
        start_line in 0i32..6,
        end_col in 0i32..14,
        end_line in 0i32..6,
    ) {
        let items = vec![Note::new("text", lines.join("\n"))];
        let mut list = loaded(items, ListConfig::default().with_focus(false), 14, 6);

        list.set_selection(SelectionRect::new(start_col, start_line, end_col, end_line));
        let text = list.selected_text();
        let view = list.view();

        list.set_selection(SelectionRect::new(end_col, end_line, start_col, start_line));
        prop_assert_eq!(list.selected_text(), text);
        prop_assert_eq!(list.view(), view);
    }
}
