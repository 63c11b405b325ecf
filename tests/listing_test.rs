//! Tests for chain rendering

use rstest::rstest;

use hoplist::util::testing;
use hoplist::{print_list, print_node, render_list, write_list, ChainArena, Delimiters};

#[test]
fn given_reference_chain_when_writing_then_single_line_with_trailing_separator() {
    // Arrange
    testing::init_test_setup();
    let mut arena = ChainArena::new();
    let head = arena.chain([10, 20, 30, 40]);
    let mut out = Vec::new();

    // Act
    write_list(&mut out, &arena, head, &Delimiters::default()).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "<10,20,30,40,>\n");
}

#[test]
fn given_empty_chain_when_writing_then_prefix_then_suffix() {
    let arena: ChainArena<i32> = ChainArena::new();
    let mut out = Vec::new();

    write_list(&mut out, &arena, None, &Delimiters::default()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "<>\n");
}

#[test]
fn given_mid_chain_head_when_rendering_then_starts_from_that_node() {
    let mut arena = ChainArena::new();
    let head = arena.chain(["a", "b", "c"]);
    let second = arena.get(head, 1).unwrap();

    let line = render_list(&arena, second, &Delimiters::default()).unwrap();

    assert_eq!(line, "<b,c,>");
}

#[rstest]
#[case("[", "; ", "]", "[1; 2; ]")]
#[case("", " -> ", "nil", "1 -> 2 -> nil")]
#[case("(", "", ")", "(12)")]
fn given_custom_delimiters_when_rendering_then_uses_them(
    #[case] prefix: &str,
    #[case] separator: &str,
    #[case] suffix: &str,
    #[case] expected: &str,
) {
    let mut arena = ChainArena::new();
    let head = arena.chain([1, 2]);
    let delimiters = Delimiters {
        prefix: prefix.into(),
        separator: separator.into(),
        suffix: suffix.into(),
    };

    assert_eq!(render_list(&arena, head, &delimiters).unwrap(), expected);
}

#[test]
fn given_chain_when_printing_to_stdout_then_succeeds() {
    let mut arena = ChainArena::new();
    let head = arena.chain([10, 20]);
    assert!(print_list(&arena, head).is_ok());
    assert!(print_list(&arena, None).is_ok());
    assert!(print_node(&arena, head.unwrap()).is_ok());
}
