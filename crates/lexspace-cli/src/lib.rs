// lexspace-cli: shared utilities for CLI tools.

use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Remove `--long=VALUE`, `--long VALUE`, or `-s VALUE` from `args` and
/// return the value, if the flag is present.
pub fn take_flag_value(args: &mut Vec<String>, long: &str, short: &str) -> Option<String> {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::with_capacity(args.len());
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    *args = remaining;
    value
}

/// Parse a non-negative integer flag value, exiting on malformed input.
pub fn parse_count(name: &str, value: &str) -> u32 {
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("{name} expects a non-negative integer, got {value:?}")))
}

/// Take a required numeric flag, exiting if it is missing or malformed.
pub fn require_count(args: &mut Vec<String>, long: &str, short: &str) -> u32 {
    match take_flag_value(args, long, short) {
        Some(value) => parse_count(long, &value),
        None => fatal(&format!("missing required flag {long}")),
    }
}

/// Take an optional numeric flag, exiting only on malformed input.
pub fn optional_count(args: &mut Vec<String>, long: &str, short: &str) -> Option<u32> {
    take_flag_value(args, long, short).map(|value| parse_count(long, &value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn takes_equals_form() {
        let mut a = args(&["--syllables=3", "rest"]);
        assert_eq!(
            take_flag_value(&mut a, "--syllables", "-s").as_deref(),
            Some("3")
        );
        assert_eq!(a, args(&["rest"]));
    }

    #[test]
    fn takes_separated_long_and_short_forms() {
        let mut a = args(&["--syllables", "3"]);
        assert_eq!(
            take_flag_value(&mut a, "--syllables", "-s").as_deref(),
            Some("3")
        );
        assert!(a.is_empty());

        let mut a = args(&["word", "-s", "4"]);
        assert_eq!(
            take_flag_value(&mut a, "--syllables", "-s").as_deref(),
            Some("4")
        );
        assert_eq!(a, args(&["word"]));
    }

    #[test]
    fn absent_flag_leaves_args_untouched() {
        let mut a = args(&["word", "-c", "2"]);
        assert_eq!(take_flag_value(&mut a, "--syllables", "-s"), None);
        assert_eq!(a, args(&["word", "-c", "2"]));
    }

    #[test]
    fn parse_count_accepts_zero() {
        assert_eq!(parse_count("--tolerance", "0"), 0);
    }
}
