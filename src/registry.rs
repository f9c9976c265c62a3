//! Item registry
//!
//! The fixed catalog of prerequisites tracked for a prior authorization.
//! Dependency rules reference these ids directly.

use crate::errors::{PriorAuthError, Result};
use crate::schemas::{Category, Item};

pub const SCHEDULING_ORTHO: &str = "scheduling-ortho";
pub const SCHEDULING_FACILITY: &str = "scheduling-facility";
pub const CONSENT: &str = "consent";
pub const PRE_ADMISSION: &str = "pre-admission";
pub const SURGERY_DATE: &str = "surgery-date";
pub const INSURANCE_CARD: &str = "insurance-card";
pub const DEMOGRAPHICS: &str = "demographics";
pub const MRI_SCAN: &str = "mri-scan";
pub const PT_EVIDENCE: &str = "pt-evidence";
pub const ICD_CODES: &str = "icd-codes";

/// The canonical ordering of tracked items.
///
/// This is the source of truth for item ids; it never grows or shrinks at runtime.
pub const ITEMS: &[Item] = &[
    Item::new(SCHEDULING_ORTHO, "Scheduling form from ortho clinic", Category::Forms, false),
    Item::new(SCHEDULING_FACILITY, "Scheduling form to the facility", Category::Forms, false),
    Item::new(CONSENT, "Consent form", Category::Forms, false),
    Item::new(
        PRE_ADMISSION,
        "Redundant form for ordering pre admissions testing",
        Category::Forms,
        false,
    ),
    Item::new(SURGERY_DATE, "Schedule surgery date", Category::Scheduling, false),
    Item::new(INSURANCE_CARD, "Insurance card front back", Category::Documents, false),
    Item::new(DEMOGRAPHICS, "Demographic information of patient", Category::Documents, false),
    Item::new(MRI_SCAN, "MRI scan", Category::Medical, true),
    Item::new(PT_EVIDENCE, "Evidence of PT", Category::Medical, true),
    Item::new(ICD_CODES, "ICD 10 codes", Category::Medical, false),
];

/// Number of tracked items
pub const ITEM_COUNT: usize = ITEMS.len();

const _: () = assert!(ITEM_COUNT > 0, "item registry must not be empty");

/// Get the 0-based position of an item in the registry.
pub fn item_index(id: &str) -> Option<usize> {
    ITEMS.iter().position(|item| item.id == id)
}

/// Look up an item by id.
pub fn find_item(id: &str) -> Option<&'static Item> {
    ITEMS.iter().find(|item| item.id == id)
}

/// Look up an item by id, failing with `UnknownItem` if it is not registered.
pub fn require_item(id: &str) -> Result<&'static Item> {
    find_item(id).ok_or_else(|| PriorAuthError::UnknownItem(id.to_string()))
}

/// Items of one category, in registry order.
pub fn items_in_category(category: Category) -> impl Iterator<Item = &'static Item> {
    ITEMS.iter().filter(move |item| item.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_has_ten_items() {
        assert_eq!(ITEM_COUNT, 10);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), ITEMS.len());
    }

    #[test]
    fn test_only_medical_evidence_is_requestable() {
        let requestable: Vec<&str> = ITEMS
            .iter()
            .filter(|item| item.requestable)
            .map(|item| item.id)
            .collect();
        assert_eq!(requestable, vec![MRI_SCAN, PT_EVIDENCE]);
    }

    #[test]
    fn test_find_item() {
        let item = find_item(SURGERY_DATE).unwrap();
        assert_eq!(item.label, "Schedule surgery date");
        assert_eq!(item.category, Category::Scheduling);

        assert!(find_item("unknown-id").is_none());
    }

    #[test]
    fn test_require_item_unknown() {
        let err = require_item("unknown-id").unwrap_err();
        assert!(matches!(err, PriorAuthError::UnknownItem(ref id) if id == "unknown-id"));
    }

    #[test]
    fn test_item_index_follows_declaration_order() {
        assert_eq!(item_index(SCHEDULING_ORTHO), Some(0));
        assert_eq!(item_index(ICD_CODES), Some(ITEM_COUNT - 1));
        assert_eq!(item_index("nope"), None);
    }

    #[test]
    fn test_items_in_category() {
        let forms: Vec<&str> = items_in_category(Category::Forms).map(|i| i.id).collect();
        assert_eq!(forms, vec![SCHEDULING_ORTHO, SCHEDULING_FACILITY, CONSENT, PRE_ADMISSION]);

        let medical: Vec<&str> = items_in_category(Category::Medical).map(|i| i.id).collect();
        assert_eq!(medical, vec![MRI_SCAN, PT_EVIDENCE, ICD_CODES]);
    }
}
