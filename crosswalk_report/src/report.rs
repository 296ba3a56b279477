// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pass traversal: grouping, aggregation, and document assembly.

use crosswalk_markdown::{DocBuilder, Document};
use crosswalk_model::{ApiSurface, SymbolKind, TypeSymbol};

use crate::query::ParityQuery;

/// Row tallies accumulated while the report is built.
///
/// Incremented monotonically during traversal and read once at the end for
/// the summary paragraphs; never reset mid-run. Each field equals the number
/// of rows emitted for that category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportCounters {
    /// Wholly-missing types ("Missing classes" rows).
    pub missing_classes: usize,
    /// Types that contributed a member table.
    pub classes_with_missing_members: usize,
    /// Missing property rows.
    pub missing_properties: usize,
    /// Missing method rows.
    pub missing_methods: usize,
    /// Missing event rows.
    pub missing_events: usize,
}

/// Marker paragraph emitted ahead of the report section so a generated file
/// is recognizable as such and nobody edits it by hand.
pub const GENERATION_TAG: &str =
    "<!-- This report is generated by the crosswalk parity tooling. Do not edit it manually. -->";

fn has_missing_member(ty: &TypeSymbol, query: &ParityQuery) -> bool {
    ty.members()
        .iter()
        .any(|member| query.is_missing(member.implemented()))
}

/// Build the parity report document for `surface` under `query`.
///
/// A [`GENERATION_TAG`] marker paragraph comes first. The report itself
/// lives in one top-level `"<target> parity"` section:
/// two introductory paragraphs, the "Missing classes" and "Missing members"
/// sections, then two summary paragraphs derived from the final counters.
///
/// Determinism: namespace and type order follow the model; member rows
/// always render properties, then methods, then events, regardless of model
/// order. The same surface and query always produce an identical document.
pub fn build_report(surface: &ApiSurface, query: &ParityQuery) -> (Document, ReportCounters) {
    let mut counters = ReportCounters::default();
    let mut doc = DocBuilder::new();
    doc.paragraph(GENERATION_TAG);
    {
        let mut report = doc.section(format!("{} parity", query.target_label()));
        report.paragraph(format!(
            "This document details the implementation gap between {} and {}. \
             Missing classes are listed first; following that, missing members \
             per-class are listed.",
            query.target_label(),
            query.reference(),
        ));
        report.paragraph(format!(
            "Specifically, classes and members are included if they are marked \
             as implemented for {}, but not for {}.",
            query.reference(),
            query.target_label(),
        ));
        report.blank();

        // Pass 1: wholly-missing types, one table per namespace.
        {
            let mut classes = report.section("Missing classes");
            for group in surface.groups() {
                let any_missing = group
                    .types()
                    .iter()
                    .any(|ty| query.is_missing(ty.implemented()));
                if !any_missing {
                    continue;
                }
                {
                    let mut table = classes.table(group.namespace());
                    for ty in group.types() {
                        if query.is_missing(ty.implemented()) {
                            counters.missing_classes += 1;
                            table.row(ty.display_name());
                        }
                    }
                }
                classes.blank();
            }
        }

        // Pass 2: missing members of otherwise-present types. A namespace
        // section opens only if at least one of its types contributes a
        // table; a wholly-missing type's members are never listed.
        {
            let mut members = report.section("Missing members");
            for group in surface.groups() {
                let contributing: Vec<&TypeSymbol> = group
                    .types()
                    .iter()
                    .filter(|ty| !query.is_missing(ty.implemented()))
                    .filter(|ty| has_missing_member(ty, query))
                    .collect();
                if contributing.is_empty() {
                    continue;
                }
                let mut namespace = members.section(group.namespace());
                for ty in contributing {
                    counters.classes_with_missing_members += 1;
                    let mut table = namespace.table(ty.short_name());
                    for (kind, tally) in [
                        (SymbolKind::Property, &mut counters.missing_properties),
                        (SymbolKind::Method, &mut counters.missing_methods),
                        (SymbolKind::Event, &mut counters.missing_events),
                    ] {
                        for member in ty.members_of_kind(kind) {
                            if query.is_missing(member.implemented()) {
                                *tally += 1;
                                table.row(member.display_name());
                            }
                        }
                    }
                }
            }
        }

        report.paragraph(format!(
            "Stats: {} missing classes.",
            counters.missing_classes
        ));
        report.paragraph(format!(
            "{} classes missing {} properties, {} methods, and {} events.",
            counters.classes_with_missing_members,
            counters.missing_properties,
            counters.missing_methods,
            counters.missing_events,
        ));
    }

    tracing::debug!(
        missing_classes = counters.missing_classes,
        classes_with_missing_members = counters.classes_with_missing_members,
        missing_properties = counters.missing_properties,
        missing_methods = counters.missing_methods,
        missing_events = counters.missing_events,
        "parity report assembled"
    );

    (doc.finish(), counters)
}
