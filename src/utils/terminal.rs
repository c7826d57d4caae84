//! Terminal output sanitization
//!
//! Catalog text can come from a user-supplied CSV file, so anything printed to the terminal
//! goes through [`sanitize_for_terminal`] first. Escape sequences in a prompt could otherwise
//! clear the screen, move the cursor or restyle the terminal.

/// Removes ANSI CSI and OSC escape sequences and control characters other than tab and
/// newline. A carriage return before a newline is dropped; a lone one becomes a space.
///
/// # Examples
///
/// ```
/// use prompt_catalog::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mRed\x1b[0m"), "Red");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end with an ASCII letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch == '\x1b' && chars.peek() == Some(&']') {
            chars.next();
            // OSC sequences end with BEL or ST (`ESC \`)
            while let Some(next) = chars.next() {
                if next == '\x07' {
                    break;
                }
                if next == '\x1b' && chars.peek() == Some(&'\\') {
                    chars.next();
                    break;
                }
            }
            continue;
        }

        if ch == '\r' {
            if chars.peek() != Some(&'\n') {
                result.push(' ');
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Single-line form for list rows: newlines and tabs collapse to spaces
pub fn single_line(text: &str) -> String {
    sanitize_for_terminal(text)
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\t') { ' ' } else { ch })
        .collect()
}
