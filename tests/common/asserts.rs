#![allow(dead_code)]

use app_context_switch::Dispatch;

pub fn assert_handled_by(dispatch: Dispatch, expected: usize) {
    match dispatch {
        Dispatch::Handled { index } => assert_eq!(index, expected, "handled by wrong client"),
        other => panic!("expected handled dispatch, got {:?}", other),
    }
}

pub fn assert_unhandled(dispatch: Dispatch) {
    assert!(
        matches!(dispatch, Dispatch::Unhandled),
        "expected unhandled dispatch, got {:?}",
        dispatch
    );
}
