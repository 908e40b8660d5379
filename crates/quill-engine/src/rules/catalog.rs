//! RuleCatalog: immutable rule set with id lookup and filtered views.

use std::path::Path;

use quill_core::{CatalogError, Category, FxHashMap, FxHashSet, RuleType, Severity};

use super::builtin::builtin_rules;
use super::pack::RulePack;
use super::types::Rule;
use crate::matcher::CompiledPattern;

/// The rules an engine evaluates. Never mutated after construction; session
/// toggles live in the engine configuration.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    index: FxHashMap<String, usize>,
}

impl RuleCatalog {
    /// The built-in English rules.
    pub fn builtin() -> Self {
        Self::from_trusted(builtin_rules())
    }

    /// A catalog of `rules`, validated.
    pub fn new(rules: Vec<Rule>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        for (i, rule) in rules.iter().enumerate() {
            validate(rule)?;
            if index.insert(rule.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateRule { id: rule.id.clone() });
            }
        }
        Ok(Self { rules, index })
    }

    fn from_trusted(rules: Vec<Rule>) -> Self {
        let index = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { rules, index }
    }

    /// A new catalog with `pack` appended. Either every rule of the pack is
    /// added or none is.
    pub fn with_pack(&self, pack: RulePack) -> Result<Self, CatalogError> {
        let mut ids: FxHashSet<&str> = FxHashSet::default();
        for rule in &pack.rules {
            validate(rule)?;
            if self.index.contains_key(&rule.id) || !ids.insert(&rule.id) {
                return Err(CatalogError::DuplicateRule { id: rule.id.clone() });
            }
        }

        let mut extended = self.clone();
        for rule in pack.rules {
            extended.index.insert(rule.id.clone(), extended.rules.len());
            extended.rules.push(rule);
        }
        tracing::debug!(rules = extended.rules.len(), "rule pack added to catalog");
        Ok(extended)
    }

    pub fn with_pack_str(&self, toml_str: &str) -> Result<Self, CatalogError> {
        self.with_pack(RulePack::from_toml(toml_str)?)
    }

    pub fn with_pack_file(&self, path: &Path) -> Result<Self, CatalogError> {
        self.with_pack(RulePack::load(path)?)
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose definition has them enabled.
    pub fn active_rules(&self) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.enabled).collect()
    }

    pub fn rules_by_category(&self, category: Category) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.category == category).collect()
    }

    pub fn rules_by_type(&self, rule_type: RuleType) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.rule_type == rule_type).collect()
    }

    pub fn rules_by_tag(&self, tag: &str) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|r| r.tags.iter().any(|t| t == tag))
            .collect()
    }

    pub fn rules_by_severity(&self, severity: Severity) -> Vec<&Rule> {
        self.rules.iter().filter(|r| r.severity == severity).collect()
    }

    /// Rules with priority at least `min`, highest first; ties by id.
    pub fn rules_by_priority(&self, min: u8) -> Vec<&Rule> {
        let mut rules: Vec<&Rule> = self.rules.iter().filter(|r| r.priority >= min).collect();
        rules.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        rules
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(rule: &Rule) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRule {
        id: rule.id.clone(),
        reason,
    };
    if rule.id.trim().is_empty() {
        return Err(invalid("rule id is empty".to_string()));
    }
    if rule.priority > 100 {
        return Err(invalid(format!("priority {} is above 100", rule.priority)));
    }
    if let Some(f) = rule
        .quality_factors
        .iter()
        .find(|f| !f.weight.is_finite() || !(0.0..=1.0).contains(&f.weight))
    {
        return Err(invalid(format!(
            "weight {} of factor '{}' is outside 0.0..=1.0",
            f.weight,
            f.kind.name()
        )));
    }
    CompiledPattern::compile(rule).map_err(|e| invalid(e.to_string()))?;
    Ok(())
}
