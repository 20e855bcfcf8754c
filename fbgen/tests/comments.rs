use fbgen::{Block, Emit, Generator, Workspace};

fn wrap(block: &Block, code: &str, inline: bool) -> String {
    let gen = Generator::default();
    let ws = Workspace::default();
    let mut pass = gen.init(&ws);
    pass.wrap_with_comments(block, Emit::Code(code.to_string()), inline)
}

fn chain(block: &Block) -> String {
    let gen = Generator::default();
    let ws = Workspace::default();
    let mut pass = gen.init(&ws);
    let code = pass.block_to_code(Some(block));
    println!("{}", code);
    code
}

#[test]
fn own_comment() {
    let block = Block::new("delay_ms").with_comment("hello");
    assert_eq!(wrap(&block, "foo();\n", false), "// hello\nfoo();\n");
}

#[test]
fn multiline_comment() {
    let block = Block::new("delay_ms").with_comment("first\nsecond");
    assert_eq!(wrap(&block, "foo();\n", false), "// first\n// second\nfoo();\n");
}

#[test]
fn inline_block_has_no_comment() {
    let block = Block::new("math_number").with_comment("hello");
    assert_eq!(wrap(&block, "1", true), "1");
}

#[test]
fn empty_comment_is_ignored() {
    let block = Block::new("delay_ms").with_comment("");
    assert_eq!(wrap(&block, "foo();\n", false), "foo();\n");
}

#[test]
fn handled_emits_nothing() {
    let gen = Generator::default();
    let ws = Workspace::default();
    let mut pass = gen.init(&ws);
    let block = Block::new("delay_ms")
        .with_comment("hello")
        .with_next(Block::new("delay_ms"));
    assert_eq!(pass.wrap_with_comments(&block, Emit::Handled, false), "");
    // Empty code is not the same as handled: the chain goes on
    assert_eq!(
        pass.wrap_with_comments(&block, Emit::Code(String::new()), false),
        "// hello\n_delay_ms(0);\n"
    );
}

#[test]
fn value_children_comments() {
    let block = Block::new("variables_set")
        .with_comment("set")
        .with_var("VAR", "x")
        .with_value(
            "VALUE",
            Block::new("math_arithmetic")
                .with_comment("sum")
                .with_value(
                    "A",
                    Block::new("math_number")
                        .with_comment("one")
                        .with_field("NUM", "1"),
                ),
        );
    assert_eq!(chain(&block), "// set\n// sum\n// one\nx = 1 + 0;\n");
}

#[test]
fn statement_children_keep_their_comments() {
    let block = Block::new("controls_repeat")
        .with_field("TIMES", "3")
        .with_statement(
            "DO",
            Block::new("variables_set")
                .with_comment("inner")
                .with_var("VAR", "x"),
        );
    assert_eq!(
        chain(&block),
        "for (int count = 0; count < 3; count++) {\n  // inner\n  x = 0;\n}\n"
    );
}

#[test]
fn next_statements_follow() {
    let block = Block::new("delay_ms")
        .with_comment("first")
        .with_next(Block::new("delay_ms").with_comment("second"));
    assert_eq!(
        chain(&block),
        "// first\n_delay_ms(0);\n// second\n_delay_ms(0);\n"
    );
}

#[test]
fn disabled_blocks_are_skipped() {
    let block = Block::new("procedures_callnoreturn")
        .with_field("NAME", "a")
        .with_next(
            Block::new("procedures_callnoreturn")
                .with_field("NAME", "b")
                .disable()
                .with_next(Block::new("procedures_callnoreturn").with_field("NAME", "c")),
        );
    assert_eq!(chain(&block), "a();\nc();\n");
}

#[test]
fn naked_value_gets_terminated() {
    let block = Block::new("math_number")
        .with_comment("lonely")
        .with_field("NUM", "5");
    assert_eq!(chain(&block), "// lonely\n5;\n");
}
