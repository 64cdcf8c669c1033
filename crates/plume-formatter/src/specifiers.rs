//! Specifier classification and ordering for import declarations

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use plume_core::ast::{AstNode, Specifier, SpecifierKind, SyntaxNode};
use plume_core::doc::{Document, sequence, text, token};
use std::cmp::Ordering;
use tracing::warn;

/// An import's specifiers partitioned by variant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedSpecifiers<'a> {
    pub default: Option<Specifier<'a>>,
    pub namespace: Option<Specifier<'a>>,
    /// Default or namespace specifiers beyond the first of each, in source order
    pub surplus: Vec<Specifier<'a>>,
    pub named: Vec<Specifier<'a>>,
}

impl<'a> ClassifiedSpecifiers<'a> {
    /// Specifiers printed before the named block, in print order
    pub fn leading(&self) -> impl Iterator<Item = &Specifier<'a>> {
        self.default
            .iter()
            .chain(self.namespace.iter())
            .chain(self.surplus.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.leading().next().is_none() && self.named.is_empty()
    }

    /// Copies of the specifier nodes in print order
    pub fn to_nodes(&self) -> Vec<SyntaxNode> {
        self.leading()
            .chain(self.named.iter())
            .map(|spec| spec.syntax().clone())
            .collect()
    }
}

/// Partition specifier nodes into default, namespace and named groups
///
/// Nodes that are not import specifiers are skipped.
pub fn classify(nodes: &[SyntaxNode]) -> ClassifiedSpecifiers<'_> {
    let mut classified = ClassifiedSpecifiers::default();

    for spec in nodes.iter().filter_map(Specifier::cast) {
        let slot = match spec.kind {
            SpecifierKind::Named => {
                classified.named.push(spec);
                continue;
            }
            SpecifierKind::Default => &mut classified.default,
            SpecifierKind::Namespace => &mut classified.namespace,
        };

        if slot.is_none() {
            *slot = Some(spec);
        } else {
            classified.surplus.push(spec);
        }
    }

    classified
}

/// Sort named specifiers by imported (else local) name
///
/// Names are compared in Unicode root collation order at primary strength,
/// so case and accents are ignored and punctuation sorts before digits and
/// letters. Names that compare equal keep their relative order.
pub fn sort_named(mut named: Vec<Specifier<'_>>) -> Vec<Specifier<'_>> {
    match primary_collator() {
        Some(collator) => named.sort_by(|a, b| collator.compare(a.sort_key(), b.sort_key())),
        None => named.sort_by(|a, b| compare_lowercase(a.sort_key(), b.sort_key())),
    }
    named
}

fn primary_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Primary);
    Collator::try_new(Default::default(), options)
        .inspect_err(|e| warn!("Root collation unavailable, sorting by lowercase: {e}"))
        .ok()
}

fn compare_lowercase(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Document for a single specifier
///
/// Named specifiers whose imported name differs from the local binding keep
/// the alias: `imported as local`.
pub fn specifier_document(spec: &Specifier<'_>) -> Document {
    match spec.kind {
        SpecifierKind::Default => text(spec.local),
        SpecifierKind::Namespace => sequence(vec![token("* as "), text(spec.local)]),
        SpecifierKind::Named => match spec.imported {
            Some(imported) if spec.is_aliased() => {
                sequence(vec![text(imported), token(" as "), text(spec.local)])
            }
            _ => text(spec.local),
        },
    }
}
