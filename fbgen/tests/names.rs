use fbgen::names::{sanitize, NameKind, Names, PLACEHOLDER};

fn assert_names(raws: &[&str], expects: &[&str]) {
    let mut names = Names::new("if,int,HIGH");
    let safes: Vec<String> = raws
        .iter()
        .map(|raw| names.safe_name(raw, NameKind::Variable))
        .collect();
    for (raw, safe) in raws.iter().zip(&safes) {
        println!("{:>12} -> {}", format!("{:?}", raw), safe);
    }
    assert_eq!(safes, expects);
}

macro_rules! case {
    ($name:ident, [$($raw:expr),*], [$($safe:expr),*]) => {
        #[test]
        fn $name() {
            assert_names(&[$($raw),*], &[$($safe),*]);
        }
    };
}

case!(plain, ["led", "count"], ["led", "count"]);
case!(spaces, ["blink rate"], ["blink_rate"]);
case!(punctuation, ["a-b", "a.b"], ["a_b", "a_b2"]);
case!(leading_digit, ["1st"], ["my_1st"]);
case!(reserved, ["if", "HIGH", "int"], ["if2", "HIGH2", "int2"]);
case!(empty, ["", ""], [PLACEHOLDER, PLACEHOLDER]);
case!(memoized, ["x", "y", "x"], ["x", "y", "x"]);
case!(case_sensitive, ["x", "X"], ["x", "X"]);
case!(suffix_chain, ["a b", "a_b", "a-b"], ["a_b", "a_b2", "a_b3"]);
case!(suffix_taken_by_raw, ["a_b2", "a b", "a-b"], ["a_b2", "a_b", "a_b3"]);
case!(non_ascii, ["é", "ü"], ["uc3a9", "uc3bc"]);
case!(c_keywords, ["struct", "enum"], ["struct2", "enum2"]);

#[test]
fn distinct_raw_names_get_distinct_safe_names() {
    let mut names = Names::default();
    let raws = ["x", "X", "x ", "x_", "x-", "", " ", "_", "delay", "delay2"];
    let safes: Vec<String> = raws
        .iter()
        .map(|raw| names.safe_name(raw, NameKind::Variable))
        .collect();
    for (i, a) in safes.iter().enumerate() {
        for b in &safes[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(!names.is_reserved(a), "{} is reserved", a);
    }
}

#[test]
fn reserved_words_never_returned() {
    let reserved = ["pinMode", "digitalWrite", "while", "HIGH", "unsigned"];
    let mut names = Names::default();
    for word in reserved {
        let safe = names.safe_name(word, NameKind::Variable);
        assert_ne!(safe, word);
        assert!(!names.is_reserved(&safe));
    }
}

#[test]
fn c_keywords_survive_configure() {
    let mut names = Names::new("");
    for word in ["typedef", "union", "extern", "short", "auto", "_Bool"] {
        let safe = names.safe_name(word, NameKind::Variable);
        assert_eq!(safe, format!("{}2", word));
        assert!(names.is_reserved(word));
    }
}

#[test]
fn placeholder_can_be_reserved() {
    let mut names = Names::new(PLACEHOLDER);
    assert_eq!(names.safe_name("", NameKind::Variable), format!("{}2", PLACEHOLDER));
}

#[test]
fn kinds_share_one_namespace() {
    let mut names = Names::default();
    assert_eq!(names.safe_name("foo", NameKind::Variable), "foo");
    assert_eq!(names.safe_name("foo", NameKind::Procedure), "foo2");
    assert_eq!(names.safe_name("foo", NameKind::Variable), "foo");
    assert_eq!(names.raw_name("foo2"), Some((NameKind::Procedure, "foo")));
}

#[test]
fn reset_forgets_bindings() {
    let mut names = Names::default();
    assert_eq!(names.safe_name("a b", NameKind::Variable), "a_b");
    assert_eq!(names.safe_name("a_b", NameKind::Variable), "a_b2");
    names.reset();
    assert!(names.is_empty());
    assert_eq!(names.safe_name("a_b", NameKind::Variable), "a_b");
    // Reserved words survive a reset
    assert_eq!(names.safe_name("delay", NameKind::Variable), "delay2");
}

#[test]
fn distinct_names_are_fresh() {
    let mut names = Names::default();
    assert_eq!(names.distinct_name("count", NameKind::Variable), "count");
    assert_eq!(names.distinct_name("count", NameKind::Variable), "count2");
    assert_eq!(names.safe_name("count", NameKind::Variable), "count3");
    assert_eq!(names.safe_name("count", NameKind::Variable), "count3");
    assert_eq!(names.raw_name("count"), None);
    assert_eq!(names.len(), 3);
}

#[test]
fn bindings_are_sorted() {
    let mut names = Names::default();
    names.safe_name("zeta", NameKind::Variable);
    names.safe_name("alpha", NameKind::Procedure);
    let safes: Vec<String> = names.bindings().into_iter().map(|b| b.safe).collect();
    assert_eq!(safes, vec!["alpha", "zeta"]);
}

#[test]
fn sanitize_keeps_legal_names() {
    assert_eq!(sanitize("snake_case_9"), "snake_case_9");
    assert_eq!(sanitize("9"), "my_9");
}
