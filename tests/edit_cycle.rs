//! Edit cycle tests - insert, delete and replace in masked coordinates

mod common;

use common::{engine_with_raw, PHONE};
use maskedit::mask::{EditPhase, MaskEngine, MaskedEdit, TextChange};

// ========================================================================
// Insertion
// ========================================================================

#[test]
fn test_type_one_into_phone_mask() {
    let mut engine = MaskEngine::with_default_placeholder(PHONE);
    let edit = engine.apply(&TextChange::insert(1, "1"));

    assert_eq!(engine.raw_text(), "1");
    assert_eq!(edit.text, "(1  )    -    ");
    assert_eq!(edit.cursor, 2);
}

#[test]
fn test_paste_formatted_number() {
    let mut engine = MaskEngine::with_default_placeholder(PHONE);
    engine.apply(&TextChange::insert(1, "(555) 123-4567"));

    assert_eq!(engine.raw_text(), "5551234567");
    assert_eq!(engine.masked_text(), "(555) 123-4567");
}

#[test]
fn test_insert_in_middle_shifts_following() {
    let mut engine = engine_with_raw(PHONE, "12345");
    let edit = engine.apply(&TextChange::insert(2, "9"));

    assert_eq!(engine.raw_text(), "192345");
    assert_eq!(edit.text, "(192) 345-    ");
    assert_eq!(edit.cursor, 3);
}

#[test]
fn test_insert_on_literal_lands_in_next_slot() {
    let mut engine = engine_with_raw(PHONE, "123");
    // Typing at the closing paren goes to the first slot after it
    let edit = engine.apply(&TextChange::insert(4, "4"));

    assert_eq!(engine.raw_text(), "1234");
    assert_eq!(edit.text, "(123) 4  -    ");
    assert_eq!(edit.cursor, 6);
}

// ========================================================================
// Deletion
// ========================================================================

#[test]
fn test_delete_separator_removes_previous_slot() {
    let mut engine = engine_with_raw("##-##", "1234");
    let edit = engine.apply(&TextChange::delete(2, 1));

    assert_eq!(engine.raw_text(), "134");
    assert_eq!(edit.text, "13-4 ");
    assert_eq!(edit.cursor, 1);
}

#[test]
fn test_delete_literal_run() {
    let mut engine = engine_with_raw(PHONE, "1234567890");
    // ") " between the area code and the exchange
    let edit = engine.apply(&TextChange::delete(4, 2));

    assert_eq!(engine.raw_text(), "124567890");
    assert_eq!(edit.cursor, 3);
}

#[test]
fn test_delete_slot() {
    let mut engine = engine_with_raw(PHONE, "1234567890");
    let edit = engine.apply(&TextChange::delete(7, 1));

    assert_eq!(engine.raw_text(), "123467890");
    assert_eq!(edit.text, "(123) 467-890 ");
    assert_eq!(edit.cursor, 7);
}

#[test]
fn test_delete_empty_slots_is_noop() {
    let mut engine = engine_with_raw(PHONE, "12");
    engine.apply(&TextChange::delete(10, 3));
    assert_eq!(engine.raw_text(), "12");
}

// ========================================================================
// Replacement
// ========================================================================

#[test]
fn test_replace_across_groups() {
    let mut engine = engine_with_raw(PHONE, "1234567890");
    // Select "3) 45" and type "x"
    let edit = engine.apply(&TextChange::replace(3, 5, "x"));

    assert_eq!(engine.raw_text(), "12x67890");
    assert_eq!(edit.text, "(12x) 678-90  ");
    assert_eq!(edit.cursor, 6);
}

#[test]
fn test_replace_with_formatted_text() {
    let mut engine = engine_with_raw("##/##/####", "01012000");
    engine.apply(&TextChange::replace(0, 10, "31/12/1999"));
    assert_eq!(engine.raw_text(), "31121999");
    assert_eq!(engine.masked_text(), "31/12/1999");
}

// ========================================================================
// Boundaries and phases
// ========================================================================

#[test]
fn test_edit_beyond_mask_is_ignored() {
    let mut engine = engine_with_raw("##-##", "1234");
    let edit = engine.apply(&TextChange::insert(5, "5"));

    assert_eq!(engine.raw_text(), "1234");
    assert_eq!(edit.text, "12-34");
    assert_eq!(edit.cursor, 5);
}

#[test]
fn test_delete_beyond_mask_moves_cursor_to_last_slot() {
    let mut engine = engine_with_raw("(##)", "12");
    assert_eq!(engine.cursor(), 4);

    let edit = engine.apply(&TextChange::delete(6, 2));
    assert_eq!(engine.raw_text(), "12");
    assert_eq!(edit.text, "(12)");
    assert_eq!(edit.cursor, 2);
    assert!(engine.phase().is_idle());
}

#[test]
fn test_phases_driven_by_hand() {
    let mut engine = MaskEngine::with_default_placeholder(PHONE);
    let mut host = MaskedEdit::default();

    assert!(engine.before_text_changed(1, 0));
    assert_eq!(engine.phase(), EditPhase::Before);
    assert!(engine.on_text_changed("(7   )    -    ", 1, 1));
    assert_eq!(engine.phase(), EditPhase::OnChanged);
    assert!(engine.after_text_changed(&mut host));
    assert_eq!(engine.phase(), EditPhase::Idle);

    assert_eq!(host.text, "(7  )    -    ");
    assert_eq!(host.cursor, 2);
}

#[test]
fn test_out_of_order_notifications_change_nothing() {
    let mut engine = engine_with_raw("##-##", "12");
    let mut host = MaskedEdit::default();

    assert!(!engine.on_text_changed("129-  ", 2, 1));
    assert!(!engine.after_text_changed(&mut host));
    assert_eq!(engine.raw_text(), "12");
    assert_eq!(host, MaskedEdit::default());
}
