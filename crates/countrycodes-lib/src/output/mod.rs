use crossterm::style::{Color, Stylize};

/// Print a success message in green to stdout.
pub fn success(msg: &str) {
    println!("{}", msg.with(Color::Green));
}

/// Print an error message in red to stderr.
pub fn error(msg: &str) {
    eprintln!("{}", msg.with(Color::Red));
}

/// Print a warning message in yellow to stderr.
pub fn warning(msg: &str) {
    eprintln!("{}", msg.with(Color::Yellow));
}

/// Print an info message in cyan to stderr.
pub fn info(msg: &str) {
    eprintln!("{}", msg.with(Color::Cyan));
}

/// Format one `code  name` listing row with the code left-padded to a fixed column.
pub fn format_row(code: &str, name: &str) -> String {
    format!("{:<5}{}", code, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_panic() {
        success("Loaded");
        error("Something went wrong");
        warning("Careful now");
        info("FYI");
    }

    #[test]
    fn test_format_row_pads_code() {
        assert_eq!(format_row("CAN", "Canada"), "CAN  Canada");
        assert_eq!(format_row("X", "Y"), "X    Y");
    }
}
