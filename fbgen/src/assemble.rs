use crate::config::Config;
use crate::fragments::{Category, Fragments};

/// Merge the collected preamble and the generated body into one program.
///
/// Preamble order is fixed: constant defines, headers, the system headers,
/// then definitions and variable declarations. Two blank lines separate the
/// preamble from the indented body.
pub fn finish(fragments: &Fragments, body: &str, config: &Config) -> String {
    let defines = fragments.drain(Category::ConstantDefine).join("\n");

    let mut headers = fragments.drain(Category::Header);
    headers.extend(config.system_headers.iter().map(String::as_str));
    let headers = headers.join("\n");

    let definitions = fragments
        .drain_any(&[Category::Definition, Category::VariableDecl])
        .join("\n");

    let preamble = [defines, headers, definitions]
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    let preamble = collapse_blank_lines(&preamble);
    let preamble = preamble.trim_end_matches('\n');

    let body = indent(body, &config.indent);
    match (preamble.is_empty(), body.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("{}\n", body),
        (false, true) => format!("{}\n", preamble),
        (false, false) => format!("{}\n\n\n{}\n", preamble, body),
    }
}

/// Prefix every line of `body` with `unit`. Whitespace-only lines left at the
/// end collapse into a single newline. A blank body indents to nothing.
pub fn indent(body: &str, unit: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    let indented = body
        .split('\n')
        .map(|line| format!("{}{}", unit, line))
        .collect::<Vec<_>>()
        .join("\n");
    let trimmed = indented.trim_end();
    if indented[trimmed.len()..].contains('\n') {
        format!("{}\n", trimmed)
    } else {
        indented
    }
}

/// Squash every run of two or more newlines into exactly one blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > 2 {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(c);
    }
    out
}

/// Prefix each line of `text`. A trailing newline gets no prefix after it.
pub fn prefix_lines(text: &str, prefix: &str) -> String {
    let (head, tail) = match text.strip_suffix('\n') {
        Some(head) => (head, "\n"),
        None => (text, ""),
    };
    format!(
        "{}{}{}",
        prefix,
        head.replace('\n', &format!("\n{}", prefix)),
        tail
    )
}

/// Terminate an expression that stands alone as a statement.
pub fn scrub_naked_value(line: &str) -> String {
    format!("{};\n", line)
}

/// Render `text` as a C string literal.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Final cleanup of a whole program: drop leading blank lines, end with a
/// single newline and strip trailing spaces from every line.
pub fn tidy(code: &str) -> String {
    let mut code = code;
    let lead = code.len() - code.trim_start().len();
    if let Some(idx) = code[..lead].rfind('\n') {
        if idx > 0 {
            code = &code[idx + 1..];
        }
    }

    let trimmed = code.trim_end();
    let code = if code[trimmed.len()..].contains('\n') {
        format!("{}\n", trimmed)
    } else {
        code.to_string()
    };

    let mut lines: Vec<&str> = code.split('\n').collect();
    let last = lines.pop().unwrap_or_default();
    let mut out: String = lines
        .iter()
        .map(|line| format!("{}\n", line.trim_end_matches(|c| c == ' ' || c == '\t')))
        .collect();
    out.push_str(last);
    out
}

#[test]
fn test() {
    assert_eq!(indent("a;\nb;\n", "  "), "  a;\n  b;\n");
    assert_eq!(indent("a;\n\n\n", "  "), "  a;\n");
    assert_eq!(indent("a;", "  "), "  a;");
    assert_eq!(prefix_lines("a\nb\n", "// "), "// a\n// b\n");
    assert_eq!(quote("say \"hi\"\n"), "\"say \\\"hi\\\"\\n\"");
    assert_eq!(tidy("  \n\nint x; \n  y;  \n\n"), "int x;\n  y;\n");
}
