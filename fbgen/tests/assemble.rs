use fbgen::assemble::{collapse_blank_lines, finish, prefix_lines, scrub_naked_value};
use fbgen::{Category, Config, Fragments};

const SYSTEM: &str = "#include <avr/interrupt.h>\n#include <avr/io.h>\n#include <util/delay.h>";

#[test]
fn empty_pass_has_only_system_headers() {
    let out = finish(&Fragments::new(), "", &Config::default());
    println!("{}", out);
    assert_eq!(out, format!("{}\n", SYSTEM));
    assert!(!out.contains("\n\n"));
}

#[test]
fn header_rewrite_keeps_last_text() {
    let mut frags = Fragments::new();
    frags.put(Category::Header, "wire", "#include <wire.h>");
    frags.put(Category::Header, "wire", "#include <Wire.h>");
    let out = finish(&frags, "", &Config::default());
    assert_eq!(out.matches("#include <Wire.h>").count(), 1);
    assert!(!out.contains("wire.h"));
    assert!(out.starts_with("#include <Wire.h>\n#include <avr/interrupt.h>"));
}

#[test]
fn preamble_order() {
    let mut frags = Fragments::new();
    frags.put(Category::Definition, "%f", "void f() {\n}");
    frags.put(Category::Header, "wire", "#include <Wire.h>");
    frags.put(Category::ConstantDefine, "defineFCPU", "#define F_CPU 8000000UL");
    frags.put(Category::VariableDecl, "variables", "int x;");
    let out = finish(&frags, "x = 1;\n", &Config::default());
    println!("{}", out);
    assert_eq!(
        out,
        format!(
            "#define F_CPU 8000000UL\n\n#include <Wire.h>\n{}\n\nvoid f() {{\n}}\nint x;\n\n\n  x = 1;\n\n",
            SYSTEM
        )
    );
}

#[test]
fn blank_lines_in_fragments_collapse() {
    let mut frags = Fragments::new();
    frags.put(Category::VariableDecl, "variables", "int x;\n\n\n\n");
    frags.put(Category::Definition, "%g", "\n\nvoid g() {}\n\n");
    let out = finish(&frags, "g();", &Config::default());
    println!("{}", out);
    assert!(!out.contains("\n\n\n\n"));
    assert!(out.contains("int x;\n\nvoid g() {}\n\n\n  g();\n"));
}

#[test]
fn custom_indent_and_headers() {
    let config = Config {
        indent: "\t".to_string(),
        system_headers: vec!["#include <firebird.h>".to_string()],
        ..Config::default()
    };
    let out = finish(&Fragments::new(), "a();\nb();\n", &config);
    assert_eq!(out, "#include <firebird.h>\n\n\n\ta();\n\tb();\n\n");
}

#[test]
fn collapse_is_idempotent() {
    let samples = [
        "",
        "\n",
        "a\n\nb",
        "a\n\n\n\nb\n\n\n",
        "\n\n\n\n",
        "a\n \n\n\nb",
    ];
    for sample in samples {
        let once = collapse_blank_lines(sample);
        assert_eq!(collapse_blank_lines(&once), once);
        assert!(!once.contains("\n\n\n"));
    }
    assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(collapse_blank_lines("a\n \n\n\nb"), "a\n \n\nb");
}

#[test]
fn naked_value() {
    assert_eq!(scrub_naked_value("1 + 2"), "1 + 2;\n");
}

#[test]
fn prefix_lines_skips_final_newline() {
    assert_eq!(prefix_lines("a", "// "), "// a");
    assert_eq!(prefix_lines("a\n\n", "  "), "  a\n  \n");
    assert_eq!(prefix_lines("", "  "), "  ");
}
