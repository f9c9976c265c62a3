//! Dependency rule table
//!
//! Each rule reads: when `precondition` is done, `requirement` must be done too.
//! Declaration order is the order violations are reported in.

use serde::Serialize;

use crate::registry::{
    CONSENT, DEMOGRAPHICS, ICD_CODES, INSURANCE_CARD, MRI_SCAN, PT_EVIDENCE, SCHEDULING_FACILITY,
    SCHEDULING_ORTHO, SURGERY_DATE,
};
use crate::state::CompletionSnapshot;

/// What must be done once a rule's precondition is done
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum Requirement {
    /// A single item
    Item(&'static str),
    /// At least one of several items
    AnyOf(&'static [&'static str]),
}

impl Requirement {
    /// Whether the snapshot satisfies this requirement
    pub fn is_met(&self, snapshot: &CompletionSnapshot) -> bool {
        match self {
            Requirement::Item(id) => snapshot.is_done(id),
            Requirement::AnyOf(ids) => ids.iter().any(|id| snapshot.is_done(id)),
        }
    }

    /// Item ids this requirement mentions
    pub fn ids(&self) -> &[&'static str] {
        match self {
            Requirement::Item(id) => std::slice::from_ref(id),
            Requirement::AnyOf(ids) => ids,
        }
    }
}

/// A directional consistency check between items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DependencyRule {
    /// Stable rule name
    pub name: &'static str,
    /// Item whose completion activates the rule
    pub precondition: &'static str,
    /// What must also be done
    pub requirement: Requirement,
    /// Message reported when the rule fires
    pub message: &'static str,
}

impl DependencyRule {
    /// A rule fires when its precondition is done and its requirement is not met
    pub fn fires(&self, snapshot: &CompletionSnapshot) -> bool {
        snapshot.is_done(self.precondition) && !self.requirement.is_met(snapshot)
    }
}

/// The complete rule set, in reporting order
pub const DEPENDENCY_RULES: &[DependencyRule] = &[
    DependencyRule {
        name: "surgery-needs-ortho-scheduling",
        precondition: SURGERY_DATE,
        requirement: Requirement::Item(SCHEDULING_ORTHO),
        message: "Surgery date is scheduled but scheduling form from ortho clinic is missing",
    },
    DependencyRule {
        name: "surgery-needs-facility-scheduling",
        precondition: SURGERY_DATE,
        requirement: Requirement::Item(SCHEDULING_FACILITY),
        message: "Surgery date is scheduled but scheduling form to facility is missing",
    },
    DependencyRule {
        name: "consent-needs-demographics",
        precondition: CONSENT,
        requirement: Requirement::Item(DEMOGRAPHICS),
        message: "Consent form is complete but patient demographic information is missing",
    },
    DependencyRule {
        name: "icd-codes-need-medical-evidence",
        precondition: ICD_CODES,
        requirement: Requirement::AnyOf(&[MRI_SCAN, PT_EVIDENCE]),
        message: "ICD 10 codes are provided but supporting medical evidence (MRI scan or PT evidence) is missing",
    },
    DependencyRule {
        name: "surgery-needs-consent",
        precondition: SURGERY_DATE,
        requirement: Requirement::Item(CONSENT),
        message: "Surgery date is scheduled but patient consent form is not yet obtained",
    },
    DependencyRule {
        name: "surgery-needs-insurance",
        precondition: SURGERY_DATE,
        requirement: Requirement::Item(INSURANCE_CARD),
        message: "Surgery date is scheduled but insurance verification is incomplete",
    },
];
