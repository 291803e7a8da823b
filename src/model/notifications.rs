//! Compilation-wide notification-handler table.
//!
//! Targets may declare handler methods with these names; the generated
//! dispatch method routes the matching notification code to each one.

/// Recognized handler method names and the notification codes they
/// respond to.
pub const NOTIFICATION_HANDLERS: &[(&str, i64)] = &[
    ("OnPredelete", 1),
    ("OnEnterTree", 10),
    ("OnExitTree", 11),
    ("OnReady", 13),
    ("OnPaused", 14),
    ("OnUnpaused", 15),
    ("OnPhysicsProcess", 16),
    ("OnProcess", 17),
    ("OnParented", 18),
    ("OnUnparented", 19),
];

/// The catch-all handler invoked after the generated switch.
pub const CATCH_ALL_HANDLER: &str = "OnNotification";

/// Look up the notification code for a recognized handler name.
pub fn notification_code(handler: &str) -> Option<i64> {
    NOTIFICATION_HANDLERS
        .iter()
        .find(|(name, _)| *name == handler)
        .map(|(_, code)| *code)
}

/// Whether a method name is a recognized notification handler.
pub fn is_notification_handler(name: &str) -> bool {
    notification_code(name).is_some()
}
