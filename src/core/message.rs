//! Runtime message interpolation
//!
//! Used for templates that are only known at run time. Call sites with a
//! literal template go through the macros, which use `format!` instead.
//!
//! Placeholders: `{}` takes the next argument, `{N}` takes argument `N`,
//! `{{` and `}}` are literal braces. A template with no arguments is
//! returned verbatim, braces included.

use std::fmt::{self, Write as _};

/// Substitute `args` into `template`.
///
/// # Examples
///
/// ```
/// use leveled_logger::core::message::interpolate;
///
/// assert_eq!(interpolate("hello {}", &[&"world"]), "hello world");
/// assert_eq!(interpolate("{1}-{0}", &[&1, &2]), "2-1");
/// assert_eq!(interpolate("100% {done}", &[]), "100% {done}");
/// ```
pub fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            rest = "";
            break;
        };
        let spec = &tail[1..close];
        let index = if spec.is_empty() {
            let idx = next;
            next += 1;
            Some(idx)
        } else {
            spec.trim().parse::<usize>().ok()
        };

        match index.and_then(|idx| args.get(idx)) {
            Some(arg) => {
                let _ = write!(out, "{}", arg);
            }
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_args_is_verbatim() {
        assert_eq!(interpolate("{} {{ }} {0}", &[]), "{} {{ }} {0}");
        assert_eq!(interpolate("50% off", &[]), "50% off");
    }

    #[test]
    fn test_sequential_placeholders() {
        assert_eq!(interpolate("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
    }

    #[test]
    fn test_indexed_placeholders() {
        assert_eq!(interpolate("{0}{0}{1}", &[&"a", &"b"]), "aab");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(interpolate("{{{}}}", &[&"x"]), "{x}");
    }

    #[test]
    fn test_missing_argument_kept_as_written() {
        assert_eq!(interpolate("{} and {}", &[&"one"]), "one and {}");
        assert_eq!(interpolate("{7}", &[&"one"]), "{7}");
        assert_eq!(interpolate("{name}", &[&"one"]), "{name}");
    }

    #[test]
    fn test_unterminated_placeholder() {
        assert_eq!(interpolate("open {", &[&1]), "open {");
    }

    #[test]
    fn test_surplus_arguments_ignored() {
        assert_eq!(interpolate("only {}", &[&1, &2]), "only 1");
    }
}
