//! POSIX shell quoting for arguments embedded in remote command lines.

/// Quote `arg` for a POSIX shell.
///
/// Plain words made of safe characters are returned unchanged so logged
/// commands stay readable. Everything else is wrapped in single quotes, with
/// embedded single quotes written as `'\''`.
pub fn quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Quote every argument and join them with spaces.
pub fn join<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| quote(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '=' | '+' | ',' | '@')
}
