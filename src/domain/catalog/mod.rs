//! Catalog module - Immutable questionnaire and report content.
//!
//! The catalog bundles everything the engine reads but never computes:
//! the question bank, axis labels, value-type and size-type narratives,
//! per-axis alignment questions, provider category labels and their rule
//! justifications, next steps and disclaimer text.
//!
//! A catalog is always passed in by reference. Nothing in the crate holds a
//! global copy, so several catalog versions (or test fixtures) can coexist.

mod errors;
mod model;

pub use errors::CatalogError;
pub use model::{
    AxisDefinition, BudgetQuestion, BudgetQuestionKind, ChoiceOption, FollowUpQuestion,
    HouseholdQuestion, LikertOption, NumericOption, ProviderCategoryProfile, SizeTypeProfile,
    ValueQuestion, ValueTypeProfile,
};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::diagnosis::{ProviderCategory, RuleKey, SizeType, ValueType};
use crate::domain::foundation::Axis;

/// Content shipped with the crate.
const BUILTIN_CATALOG_YAML: &str = include_str!("default_catalog.yaml");

/// The complete content bundle for one questionnaire version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisCatalog {
    pub version: String,
    pub app_name: String,
    pub axes: Vec<AxisDefinition>,
    #[serde(default)]
    pub likert_options: Vec<LikertOption>,
    pub value_questions: Vec<ValueQuestion>,
    #[serde(default)]
    pub household_questions: Vec<HouseholdQuestion>,
    #[serde(default)]
    pub budget_questions: Vec<BudgetQuestion>,
    pub value_types: Vec<ValueTypeProfile>,
    pub size_types: Vec<SizeTypeProfile>,
    #[serde(default)]
    pub alignment_questions: BTreeMap<Axis, Vec<String>>,
    pub provider_categories: Vec<ProviderCategoryProfile>,
    #[serde(default)]
    pub common_next_steps: Vec<String>,
    #[serde(default)]
    pub disclaimer: Vec<String>,
}

impl DiagnosisCatalog {
    /// Parses and validates the catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG_YAML)
    }

    /// Parses a catalog from YAML and validates it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: DiagnosisCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every lookup the engine performs can succeed.
    ///
    /// # Errors
    /// - Any axis, value type, size type or provider category without content
    /// - An axis declared in the wrong group
    /// - Empty or duplicate question ids
    pub fn validate(&self) -> Result<(), CatalogError> {
        for axis in Axis::all() {
            let definition = self
                .axes
                .iter()
                .find(|a| a.id == *axis)
                .ok_or(CatalogError::MissingAxis(*axis))?;
            if definition.group != axis.group() {
                return Err(CatalogError::AxisGroupMismatch(*axis));
            }
        }

        let mut seen = HashSet::new();
        for question in &self.value_questions {
            if question.id.trim().is_empty() {
                return Err(CatalogError::EmptyQuestionId);
            }
            if !seen.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        for value_type in ValueType::all() {
            self.value_type(*value_type)?;
        }
        for size_type in SizeType::all() {
            self.size_type(*size_type)?;
        }
        for category in ProviderCategory::all() {
            self.provider_category(*category)?;
        }

        Ok(())
    }

    /// Returns the narrative content for a value type.
    pub fn value_type(&self, id: ValueType) -> Result<&ValueTypeProfile, CatalogError> {
        self.value_types
            .iter()
            .find(|v| v.id == id)
            .ok_or(CatalogError::MissingValueType(id))
    }

    /// Returns the narrative content for a size type.
    pub fn size_type(&self, id: SizeType) -> Result<&SizeTypeProfile, CatalogError> {
        self.size_types
            .iter()
            .find(|s| s.id == id)
            .ok_or(CatalogError::MissingSizeType(id))
    }

    /// Returns label and justifications for a provider category.
    pub fn provider_category(
        &self,
        id: ProviderCategory,
    ) -> Result<&ProviderCategoryProfile, CatalogError> {
        self.provider_categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::MissingProviderCategory(id))
    }

    /// Returns the justification a rule contributes to a category, if any.
    pub fn justification(&self, category: ProviderCategory, rule: RuleKey) -> Option<&str> {
        self.provider_categories
            .iter()
            .find(|c| c.id == category)
            .and_then(|c| c.justifications.get(&rule))
            .map(String::as_str)
    }

    /// Returns the alignment questions for an axis (empty if none).
    pub fn alignment_questions(&self, axis: Axis) -> &[String] {
        self.alignment_questions
            .get(&axis)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the value questions of one axis in catalog order.
    pub fn questions_for(&self, axis: Axis) -> impl Iterator<Item = &ValueQuestion> {
        self.value_questions.iter().filter(move |q| q.axis == axis)
    }

    /// Looks up a value question by id.
    pub fn question(&self, id: &str) -> Option<&ValueQuestion> {
        self.value_questions.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = DiagnosisCatalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.axes.len(), 7);
        assert_eq!(catalog.value_types.len(), 10);
        assert_eq!(catalog.size_types.len(), 3);
        assert_eq!(catalog.provider_categories.len(), 8);
    }

    #[test]
    fn builtin_catalog_covers_every_axis_with_questions() {
        let catalog = DiagnosisCatalog::builtin().unwrap();
        for axis in Axis::all() {
            assert!(
                catalog.questions_for(*axis).count() >= 3,
                "axis {} has too few questions",
                axis
            );
            assert!(!catalog.alignment_questions(*axis).is_empty());
        }
    }

    #[test]
    fn builtin_catalog_has_reverse_questions() {
        let catalog = DiagnosisCatalog::builtin().unwrap();
        let design_reverse: Vec<_> = catalog
            .questions_for(Axis::Design)
            .filter(|q| q.reverse)
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(design_reverse, vec!["V12"]);
    }

    #[test]
    fn builtin_catalog_has_report_texts() {
        let catalog = DiagnosisCatalog::builtin().unwrap();
        assert!(!catalog.common_next_steps.is_empty());
        assert!(!catalog.disclaimer.is_empty());
        for profile in &catalog.value_types {
            assert!(!profile.layout_patterns.is_empty(), "{:?}", profile.id);
            assert!(!profile.budget_rules.is_empty(), "{:?}", profile.id);
            assert!(!profile.pitfalls.is_empty(), "{:?}", profile.id);
        }
    }

    #[test]
    fn justification_lookup_by_category_and_rule() {
        let catalog = DiagnosisCatalog::builtin().unwrap();
        assert!(catalog
            .justification(ProviderCategory::Package, RuleKey::CostHigh)
            .is_some());
        assert!(catalog
            .justification(ProviderCategory::PerformanceSpecialist, RuleKey::AssureLow)
            .is_none());
    }

    #[test]
    fn validate_rejects_missing_value_type() {
        let mut catalog = DiagnosisCatalog::builtin().unwrap();
        catalog.value_types.retain(|v| v.id != ValueType::Balanced);
        match catalog.validate() {
            Err(CatalogError::MissingValueType(ValueType::Balanced)) => {}
            other => panic!("Expected MissingValueType, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_duplicate_question_ids() {
        let mut catalog = DiagnosisCatalog::builtin().unwrap();
        let first = catalog.value_questions[0].clone();
        catalog.value_questions.push(first);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateQuestion(_))
        ));
    }

    #[test]
    fn validate_rejects_axis_in_wrong_group() {
        let mut catalog = DiagnosisCatalog::builtin().unwrap();
        catalog.axes[0].group = crate::domain::foundation::AxisGroup::Support;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::AxisGroupMismatch(Axis::Cost))
        ));
    }

    #[test]
    fn from_yaml_str_reports_parse_errors() {
        let result = DiagnosisCatalog::from_yaml_str("version: [unclosed");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn alignment_questions_empty_when_absent() {
        let mut catalog = DiagnosisCatalog::builtin().unwrap();
        catalog.alignment_questions.remove(&Axis::Flex);
        assert!(catalog.alignment_questions(Axis::Flex).is_empty());
    }
}
