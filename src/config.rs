use log::Level;

/// Number the order buttons and the floating WhatsApp button message.
pub const WHATSAPP_NUMBER: &str = "9779746686607";

/// Number behind the floating call button.
pub const CALL_NUMBER: &str = "9779746686607";

/// Scroll offset (px) at which the header turns sticky.
pub const STICKY_THRESHOLD: f64 = 50.0;

/// Sections count as current this many px before their top reaches the viewport.
pub const SPY_LEAD: f64 = 100.0;

/// Height of the fixed header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 70.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
