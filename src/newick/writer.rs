//! Serialization of trees back to Newick text.

use crate::model::{Forest, NodeId};

/// Size guess per node when pre-allocating output strings.
const CHARS_PER_NODE: usize = 16;

/// Returns the Newick text of the tree as seen from `v`.
///
/// Children print in declaration order. Labels containing `(`, `)` or `,`
/// are single-quoted with interior quotes doubled; in all other labels
/// spaces turn back into underscores. Branch lengths print with three
/// significant digits and no trailing zeros, switching to scientific
/// notation for very large or very small values. `v` itself prints
/// without a branch length, and anonymous leaves print as nothing between
/// the delimiters.
///
/// Serializing from a node that still has a parent renders the clade
/// below `v`, but sibling and parent delimiters of the surrounding tree
/// leak into the text. To render a clade on its own, detach it first or
/// serialize a [copy](Forest::copy_clade).
///
/// # Example
/// ```
/// use arbor::parse_newick_str;
///
/// let (forest, root) = parse_newick_str("((A:0.1,B:0.2)ab:2.0,C:0.4);").unwrap();
/// assert_eq!(forest.to_newick(root), "((A:0.1,B:0.2)ab:2,C:0.4);");
/// ```
pub fn to_newick(forest: &Forest, v: NodeId) -> String {
    let mut newick = String::with_capacity(forest.num_nodes() * CHARS_PER_NODE);
    write_node(forest, Some(v), &mut newick);
    newick
}

/// Recursive writer. The trailing `)` of every group is emitted by the
/// group's last child (a node with a parent but no next sibling), which
/// is why the sibling recursion sits between label and delimiter.
fn write_node(forest: &Forest, v: Option<NodeId>, newick: &mut String) {
    let Some(id) = v else { return };
    let node = &forest[id];

    if let Some(parent) = node.parent() {
        if forest[parent].child() != Some(id) {
            newick.push(',');
        }
    }
    if node.child().is_some() {
        newick.push('(');
    }
    write_node(forest, node.child(), newick);

    push_label(node.label(), newick);
    if let Some(length) = node.length() {
        if node.parent().is_some() {
            newick.push(':');
            newick.push_str(&format_branch_length(length));
        }
    }

    write_node(forest, node.sib(), newick);

    if node.parent().is_some() && node.sib().is_none() {
        newick.push(')');
    }
    if node.parent().is_none() {
        newick.push(';');
    }
}

/// Labels containing structural characters are single-quoted with
/// interior quotes doubled; otherwise spaces turn back into underscores.
fn push_label(label: &str, newick: &mut String) {
    if label.contains(['(', ')', ',']) {
        newick.push('\'');
        for ch in label.chars() {
            if ch == '\'' {
                newick.push_str("''");
            } else {
                newick.push(ch);
            }
        }
        newick.push('\'');
    } else {
        for ch in label.chars() {
            newick.push(if ch == ' ' { '_' } else { ch });
        }
    }
}

/// Formats a branch length with three significant digits and trailing
/// zeros trimmed, e.g. `0.2`, `47`, `1.23e6`.
pub(crate) fn format_branch_length(length: f64) -> String {
    if length == 0.0 || !length.is_finite() {
        return length.to_string();
    }

    // The notation is chosen from the value as rounded to three
    // significant digits: rounding can carry into the next magnitude
    // (999.9 becomes 1e3, 9.9995e-5 becomes 0.0001).
    let rounded = format!("{:.2e}", length);
    let Some(at) = rounded.find('e') else {
        return rounded;
    };
    let Ok(exponent) = rounded[at + 1..].parse::<i32>() else {
        return rounded;
    };

    if !(-4..3).contains(&exponent) {
        let mantissa = rounded[..at].trim_end_matches('0').trim_end_matches('.');
        return format!("{mantissa}e{exponent}");
    }

    let decimals = (2 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, length);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

// =#========================================================================#=
// TESTS - WRITER
// =#========================================================================#=
