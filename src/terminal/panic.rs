//! Panic hook that gives the terminal back before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call this after `color_eyre::install()` so its report formatting is kept.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panic");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_can_be_installed() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
