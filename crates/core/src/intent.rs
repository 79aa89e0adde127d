use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::catalog;
use crate::error::RuleSetError;
use crate::models::{ClassificationResult, IntentRuleDef, DEFAULT_INTENT, MATCH_CONFIDENCE};

/// An intent with its patterns compiled for case-insensitive matching.
#[derive(Debug, Clone)]
pub struct IntentRule {
    name: String,
    patterns: Vec<Regex>,
    responses: Vec<String>,
}

impl IntentRule {
    fn compile(def: IntentRuleDef) -> Result<Self, RuleSetError> {
        if def.responses.is_empty() {
            return Err(RuleSetError::EmptyResponses(def.name));
        }

        let mut patterns = Vec::with_capacity(def.patterns.len());
        for pattern in &def.patterns {
            let compiled = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|err| RuleSetError::InvalidPattern {
                    intent: def.name.clone(),
                    pattern: pattern.clone(),
                    message: err.to_string(),
                })?;
            patterns.push(compiled);
        }

        Ok(Self {
            name: def.name,
            patterns,
            responses: def.responses,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn matches(&self, query: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(query))
    }
}

/// Ordered, validated intent table. Declaration order decides ties.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<IntentRule>,
    default_index: usize,
}

impl RuleSet {
    pub fn from_defs(defs: Vec<IntentRuleDef>) -> Result<Self, RuleSetError> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(defs.len());
        let mut default_index = None;

        for def in defs {
            if !seen.insert(def.name.clone()) {
                return Err(RuleSetError::DuplicateIntent(def.name));
            }
            if def.name == DEFAULT_INTENT {
                if !def.patterns.is_empty() {
                    return Err(RuleSetError::DefaultHasPatterns);
                }
                default_index = Some(rules.len());
            }
            rules.push(IntentRule::compile(def)?);
        }

        let default_index = default_index.ok_or(RuleSetError::MissingDefault)?;
        Ok(Self {
            rules,
            default_index,
        })
    }

    /// The eco Yatra chat catalog.
    pub fn eco_yatra() -> Result<Self, RuleSetError> {
        Self::from_defs(catalog::eco_yatra_rules())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let defs: Vec<IntentRuleDef> =
            serde_json::from_str(raw).context("intent file must be a JSON array of rules")?;
        Ok(Self::from_defs(defs)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("failed reading intent file at {}", path.as_ref().display())
        })?;
        Self::from_json_str(&raw)
    }

    /// Returns the first declared rule with any matching pattern, or `default`.
    ///
    /// Every rule is scanned; a candidate only replaces the current best when its
    /// confidence is strictly higher, so with a constant match confidence the
    /// earliest declaration wins.
    pub fn classify(&self, query: &str) -> ClassificationResult {
        let mut best = ClassificationResult::fallback();

        for (idx, rule) in self.rules.iter().enumerate() {
            if idx == self.default_index || !rule.matches(query) {
                continue;
            }
            if MATCH_CONFIDENCE > best.confidence {
                best = ClassificationResult {
                    intent: rule.name.clone(),
                    confidence: MATCH_CONFIDENCE,
                };
            }
        }

        best
    }

    pub fn get(&self, name: &str) -> Option<&IntentRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn default_rule(&self) -> &IntentRule {
        &self.rules[self.default_index]
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
