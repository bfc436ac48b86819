//! Evaluator: walks the AST and folds it into a [`ResolvedSet`].

use tracing::trace;

use crate::ast::{Node, Operator, SetNode};
use crate::error::Result;
use crate::intervals::IntervalSet;
use crate::properties::PropertyResolver;
use crate::resolved::ResolvedSet;

/// Evaluate a pattern AST to its canonical resolved set.
pub fn evaluate(node: &Node, resolver: &PropertyResolver) -> Result<ResolvedSet> {
    match node {
        Node::Literal(cp) => Ok(ResolvedSet::from_intervals(IntervalSet::single(*cp))),
        Node::Range(lo, hi) => Ok(ResolvedSet::from_intervals(IntervalSet::range(*lo, *hi))),
        Node::StringLiteral(codepoints) => Ok(ResolvedSet::from_codepoints(codepoints.clone())),
        Node::PropertyRef(prop) => resolver
            .resolve(prop.name.as_deref(), &prop.value, prop.negated, prop.offset)
            .map(ResolvedSet::from_intervals),
        Node::Set(set) => {
            let (resolved, negated) = eval_set(set, resolver)?;
            Ok(if negated {
                resolved.complement_codepoints()
            } else {
                resolved
            })
        }
        // Operators are structural markers inside a set's child list; a bare
        // operator node has no value of its own.
        Node::Op(_) => Ok(ResolvedSet::empty()),
    }
}

/// Evaluate the root of a pattern but leave its top-level negation
/// unapplied, reporting it alongside the un-negated set.
///
/// Emitters that need to know what a negated set excludes (the enumerated
/// pattern list) use this instead of [`evaluate`].
pub(crate) fn evaluate_root(node: &Node, resolver: &PropertyResolver) -> Result<(ResolvedSet, bool)> {
    match node {
        Node::Set(set) => eval_set(set, resolver),
        Node::PropertyRef(prop) => {
            let intervals = resolver.resolve(prop.name.as_deref(), &prop.value, false, prop.offset)?;
            Ok((ResolvedSet::from_intervals(intervals), prop.negated))
        }
        other => Ok((evaluate(other, resolver)?, false)),
    }
}

/// Left fold over the alternating operand/operator child list.
fn eval_set(set: &SetNode, resolver: &PropertyResolver) -> Result<(ResolvedSet, bool)> {
    let mut children = set.children.iter();
    let mut acc = match children.next() {
        None => ResolvedSet::empty(),
        Some(first) => evaluate(first, resolver)?,
    };
    while let Some(op_node) = children.next() {
        // The parser emits operand/operator/operand; skip anything that a
        // hand-built tree puts out of place rather than guessing.
        let Node::Op(op) = op_node else {
            continue;
        };
        let Some(operand) = children.next() else {
            break;
        };
        let rhs = evaluate(operand, resolver)?;
        trace!(?op, "folding set operand");
        acc = match op {
            Operator::Union => acc.union(&rhs),
            Operator::Intersect => acc.intersect(&rhs),
            Operator::Difference => acc.difference(&rhs),
        };
    }
    Ok((acc, set.negated))
}
