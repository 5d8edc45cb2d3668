use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let first = toasts.push_error("uno");
    let second = toasts.push_success("dos");
    assert!(second > first);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert_eq!(toasts.items[1].kind, ToastKind::Success);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut toasts = ToastState::default();
    let first = toasts.push_error("uno");
    toasts.push_success("dos");
    toasts.dismiss(first);
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].message, "dos");
}

#[test]
fn dismissing_twice_is_harmless() {
    let mut toasts = ToastState::default();
    let id = toasts.push_error("uno");
    toasts.dismiss(id);
    toasts.dismiss(id);
    assert!(toasts.items.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut toasts = ToastState::default();
    let first = toasts.push_error("uno");
    toasts.dismiss(first);
    assert_ne!(toasts.push_error("dos"), first);
}
