use std::fmt::{Display, Write};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("placeholder {{{index}}} has no argument, {provided} provided")]
    MissingArgument { index: usize, provided: usize },
    #[error("placeholder index {0} is too large")]
    InvalidIndex(String),
}

/// Replaces each `{i}` in `template` with the `Display` form of `args[i]`.
///
/// `{{` and `}}` produce literal braces. Braces that do not enclose a
/// decimal index (`{}`, `{name}`, an unclosed `{3`) are copied as-is.
/// Unused arguments are ignored.
pub fn format_message(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let digits = tail[1..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len() - 1);
        let closed = tail[1 + digits..].starts_with('}');
        if digits == 0 || !closed {
            out.push('{');
            rest = &tail[1..];
            continue;
        }

        let raw_index = &tail[1..1 + digits];
        let index: usize = raw_index
            .parse()
            .map_err(|_| FormatError::InvalidIndex(raw_index.to_string()))?;
        let arg = args.get(index).ok_or(FormatError::MissingArgument {
            index,
            provided: args.len(),
        })?;
        // writing into a String cannot fail
        let _ = write!(out, "{arg}");
        rest = &tail[digits + 2..];
    }

    out.push_str(rest);
    Ok(out)
}
