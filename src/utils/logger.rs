use std::env;

pub const DEBUG_ENV: &str = "POWERLINE_SHELL_DEBUG";

// stdout carries the prompt, so diagnostics only ever go to stderr.
pub fn debug(message: &str) {
    if env::var_os(DEBUG_ENV).is_some() {
        eprintln!("[DEBUG] {}", message);
    }
}

pub fn debug_with_context(context: &str, message: &str) {
    if env::var_os(DEBUG_ENV).is_some() {
        eprintln!("[DEBUG] {}: {}", context, message);
    }
}
