//! Terminal output helpers.
//!
//! Status lines go to stderr so that command output on stdout (JSON, env
//! listings) can be piped without filtering.
//!
//! ```no_run
//! use keel_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration resolved");
//! ui::warning("VITE_PORT is not a valid TCP port");
//! ```

pub(crate) mod format;
mod messages;

pub use format::{format_bool, print_summary};
pub use messages::{info, success, warning};

/// Whether colored output should be used on stderr.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise stderr
/// must be attended by a user.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Color decision shared by status lines and log output.
///
/// `no_color` (the `--no-color` flag) always wins.
pub fn color_enabled(no_color: bool) -> bool {
    !no_color && should_use_color()
}

/// Apply the color decision globally for `owo-colors` output.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(color_enabled(no_color));
}
