//! Integration tests for the streaming record scanner.

use anyhow::Result;
use arbor::newick::NewickScanner;
use arbor::parser::ParseErrorKind;

const REFERENCE: &str = "(((A:0.2,B:0.3):0.3,(D:0.5,E:0.3):0.2):0.3,F:0.7);";

// --- TESTS SCANNING STRINGS ---------------------------------------------------

#[test]
fn test_scan_two_records_from_string() {
    let mut scanner = NewickScanner::for_str("(A,B);\n(C,(D,E));\n");

    assert!(scanner.advance().unwrap());
    assert_eq!(scanner.text(), "(A,B);");
    assert_eq!(scanner.tree().unwrap(), 1);

    assert!(scanner.advance().unwrap());
    assert_eq!(scanner.text(), "(C,(D,E));");
    assert_eq!(scanner.tree().unwrap(), 4);

    assert!(!scanner.advance().unwrap());
    assert_eq!(scanner.forest().num_nodes(), 8);
}

#[test]
fn test_leading_bytes_before_group_are_discarded() {
    let mut scanner = NewickScanner::for_str("tree1 = (A,B);");

    assert!(scanner.advance().unwrap());
    assert_eq!(scanner.text(), "(A,B);");

    let root = scanner.tree().unwrap();
    let a = scanner.forest()[root].child().unwrap();
    assert_eq!(scanner.forest()[a].label(), "A");
}

#[test]
fn test_record_without_group_ends_scan() {
    let mut scanner = NewickScanner::for_str("(A,B); not a tree; (C,D);");

    let mut roots = Vec::new();
    while let Some(root) = scanner.next_tree().unwrap() {
        roots.push(root);
    }
    assert_eq!(roots.len(), 1);
}

#[test]
fn test_tree_before_advance_is_end_of_trees() {
    let mut scanner = NewickScanner::for_str("(A,B);");

    let error = scanner.tree().unwrap_err();
    assert_eq!(*error.kind(), ParseErrorKind::EndOfTrees);
}

#[test]
fn test_empty_and_fragment_inputs() {
    assert!(!NewickScanner::for_str("").advance().unwrap());
    assert!(!NewickScanner::for_str("   \n  ").advance().unwrap());
    // a trailing fragment without `;` is not a record
    assert!(!NewickScanner::for_str("(A,B").advance().unwrap());
}

#[test]
fn test_text_keeps_the_raw_record() {
    let mut scanner = NewickScanner::for_str("seed ('a b' [note] ,d);");

    assert!(scanner.advance().unwrap());
    assert_eq!(scanner.text(), "('a b' [note] ,d);");
}

#[test]
fn test_record_spanning_several_lines() {
    let mut scanner = NewickScanner::for_str("((A,\n  B),\n  C);");

    let root = scanner.next_tree().unwrap().unwrap();
    assert_eq!(scanner.forest().to_newick(root), "((A,B),C);");
}

#[test]
fn test_forest_mut_allows_editing_scanned_trees() {
    let mut scanner = NewickScanner::for_str("(A,B)ab;");

    let root = scanner.next_tree().unwrap().unwrap();
    scanner.forest_mut().node_mut(root).set_label("renamed");
    assert_eq!(scanner.forest().to_newick(root), "(A,B)renamed;");
}

#[test]
fn test_into_forest_keeps_parsed_trees() {
    let mut scanner = NewickScanner::for_str("(A,B);(C,D);");
    while scanner.next_tree().unwrap().is_some() {}

    let forest = scanner.into_forest();
    assert_eq!(forest.num_nodes(), 6);
    assert!(forest.is_consistent());
}

// --- TESTS SCANNING FILES -----------------------------------------------------

#[test]
fn test_scan_reference_file() -> Result<()> {
    let mut scanner = NewickScanner::for_file("tests/fixtures/newick_t2_n5.nwk")?;

    let first = scanner.next_tree()?.expect("first tree");
    let second = scanner.next_tree()?.expect("second tree");
    assert_eq!(scanner.next_tree()?, None);

    assert_eq!(first, 1);
    assert_eq!(second, 10);

    let forest = scanner.forest();
    assert_eq!(forest.num_nodes(), 18);
    assert_eq!(forest.to_newick(first), REFERENCE);
    assert_eq!(forest.to_newick(second), REFERENCE);
    assert!(forest.is_consistent());
    Ok(())
}
