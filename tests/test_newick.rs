//! Integration tests for Newick parsing and serialization.

use arbor::model::Forest;
use arbor::newick::{parse_record, parse_str};
use arbor::parser::ParseErrorKind;

const REFERENCE: &str = "(((A:0.2,B:0.3):0.3,(D:0.5,E:0.3):0.2):0.3,F:0.7);";

// --- TESTS WELL-FORMED INPUT ------------------------------------------------

#[test]
fn test_parse_basic_tree() {
    let (forest, root) = parse_str("((A:1.0,B:2.0):3.0,C:4.0);").unwrap();

    assert_eq!(forest.num_nodes(), 5);
    assert!(forest[root].is_root());
    assert!(!forest[root].has_length());

    let inner = forest[root].child().unwrap();
    assert_eq!(forest[inner].length(), Some(3.0));

    let a = forest[inner].child().unwrap();
    let b = forest[a].sib().unwrap();
    let c = forest[inner].sib().unwrap();
    assert_eq!(forest[a].label(), "A");
    assert_eq!(forest[a].length(), Some(1.0));
    assert_eq!(forest[b].label(), "B");
    assert_eq!(forest[c].label(), "C");
    assert!(forest[a].is_leaf());
    assert!(forest[c].sib().is_none());
    assert!(forest.is_consistent());
}

#[test]
fn test_round_trip_of_reference_tree() {
    let (forest, root) = parse_str(REFERENCE).unwrap();
    assert_eq!(forest.to_newick(root), REFERENCE);
}

#[test]
fn test_quoted_labels() {
    let (forest, root) =
        parse_str("(('Taxon one':1.5,'Second''s taxon':2.5):3.0,'3rd Taxon':4.0);").unwrap();

    let labels: Vec<String> = forest
        .iter_clade(root)
        .map(|id| forest[id].label().to_string())
        .filter(|label| !label.is_empty())
        .collect();
    assert_eq!(labels, ["Taxon one", "Second's taxon", "3rd Taxon"]);
}

#[test]
fn test_scientific_notation_lengths() {
    let (forest, root) = parse_str("((A:1e-5,B:2.5E+3):1.0,C:3.14e2);").unwrap();

    let inner = forest[root].child().unwrap();
    let a = forest[inner].child().unwrap();
    let b = forest[a].sib().unwrap();
    let c = forest[inner].sib().unwrap();
    assert_eq!(forest[a].length(), Some(1e-5));
    assert_eq!(forest[b].length(), Some(2.5e3));
    assert_eq!(forest[c].length(), Some(314.0));

    assert_eq!(forest.to_newick(root), "((A:1e-5,B:2.5e3):1,C:314);");
}

#[test]
fn test_comments_are_ignored() {
    let commented =
        parse_str("[a tree of corvids]((A[shag]:0.33,B[pied]:0.33)[inner]:1.87,C:2.2);").unwrap();
    let plain = parse_str("((A:0.33,B:0.33):1.87,C:2.2);").unwrap();

    assert_eq!(commented.0.to_newick(commented.1), plain.0.to_newick(plain.1));
}

#[test]
fn test_underscores_mean_spaces_in_unquoted_labels() {
    let (forest, root) = parse_str("(New_Zealand,Australia);").unwrap();

    let nz = forest[root].child().unwrap();
    assert_eq!(forest[nz].label(), "New Zealand");
    assert_eq!(forest.to_newick(root), "(New_Zealand,Australia);");
}

#[test]
fn test_label_fragments_concatenate() {
    let (forest, root) = parse_str("(fo'ob'ar,B);").unwrap();

    let leaf = forest[root].child().unwrap();
    assert_eq!(forest[leaf].label(), "foobar");
}

#[test]
fn test_structural_chars_in_label_round_trip_quoted() {
    let (forest, root) = parse_str("('a,b':1,C);").unwrap();

    let leaf = forest[root].child().unwrap();
    assert_eq!(forest[leaf].label(), "a,b");
    assert_eq!(forest.to_newick(root), "('a,b':1,C);");
}

#[test]
fn test_doubled_quote_escape() {
    let (forest, root) = parse_str("('Baillon''s crake',B);").unwrap();

    let leaf = forest[root].child().unwrap();
    assert_eq!(forest[leaf].label(), "Baillon's crake");
}

#[test]
fn test_whitespace_between_tokens() {
    let (forest, root) = parse_str("( A:0.5 ,\n  B );").unwrap();
    assert_eq!(forest.to_newick(root), "(A:0.5,B);");
}

#[test]
fn test_root_length_is_parsed_but_not_written() {
    let (forest, root) = parse_str("((A:1,B:2):3,C:4):0.9;").unwrap();

    assert_eq!(forest[root].length(), Some(0.9));
    assert_eq!(forest.to_newick(root), "((A:1,B:2):3,C:4);");
}

#[test]
fn test_to_newick_of_attached_node_keeps_tree_delimiters() {
    let (forest, root) = parse_str("((A,B)ab,C);").unwrap();
    let ab = forest[root].child().unwrap();

    // an attached node is rendered as positioned inside its tree: the
    // closing parenthesis comes from the chain's last sibling, and only
    // a root gets the trailing semicolon
    assert_eq!(forest.to_newick(ab), "(A,B)ab,C)");
}

#[test]
fn test_missing_semicolon_is_tolerated() {
    let (forest, root) = parse_str("((A:1.0,B:2.0):3.0,C:4.0)").unwrap();
    assert_eq!(forest.to_newick(root), "((A:1,B:2):3,C:4);");
}

// --- TESTS MALFORMED INPUT --------------------------------------------------

#[test]
fn test_record_without_group_is_no_tree() {
    let mut forest = Forest::new();
    assert_eq!(parse_record(&mut forest, "no tree here;").unwrap(), None);
    assert_eq!(forest.num_nodes(), 0);

    let error = parse_str("no tree here;").unwrap_err();
    assert_eq!(*error.kind(), ParseErrorKind::EndOfTrees);
}

#[test]
fn test_unbalanced_close_is_an_error() {
    let error = parse_str("((A,B)));").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::UnbalancedStructure(_)));

    let error = parse_str(")A;").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::UnbalancedStructure(_)));
}

#[test]
fn test_comma_outside_group_is_an_error() {
    let error = parse_str("(A),B;").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::UnbalancedStructure(_)));

    let error = parse_str(",A;").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::UnbalancedStructure(_)));
}

#[test]
fn test_malformed_branch_length_is_an_error() {
    let error = parse_str("(A:abc,B);").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::Format(_)));

    let error = parse_str("(A:,B);").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::Format(_)));
}

#[test]
fn test_unterminated_quote_is_an_error() {
    let error = parse_str("('Abc,B);").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::Format(_)));
}

#[test]
fn test_unterminated_comment_is_an_error() {
    let error = parse_str("(A[oops,B);").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::Format(_)));
}

#[test]
fn test_trailing_length_without_terminator_is_an_error() {
    let error = parse_str("((A:1.0,B:2.0):3.0,C:4.0):0.5").unwrap_err();
    assert!(matches!(error.kind(), ParseErrorKind::Format(_)));
}

#[test]
fn test_error_reports_position_and_context() {
    let error = parse_str("(A:abc,B);").unwrap_err();
    assert!(error.position() > 0);
    assert_eq!(error.context(), ",B);");
    assert!(error.to_string().contains("at position"));
}

// --- TESTS FILE PARSING -----------------------------------------------------

#[test]
fn test_parse_newick_file_collects_all_trees() {
    let (forest, roots) = arbor::parse_newick_file("tests/fixtures/newick_t2_n5.nwk").unwrap();

    assert_eq!(roots.len(), 2);
    assert_eq!(forest.num_nodes(), 18);
    for root in roots {
        assert_eq!(forest.to_newick(root), REFERENCE);
    }
    assert!(forest.is_consistent());
}
