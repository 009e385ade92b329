//! Task categorization by ordered pattern matching
//!
//! A [`TaskCategories`] table is built once, before the run starts, and is
//! never mutated afterwards. Lookup walks categories in declaration order and,
//! within each category, patterns in declaration order; the first pattern
//! whose text appears in the task name (ignoring case) decides the category.

mod defaults;
mod pattern;

pub use pattern::PatternSpec;

use crate::errors::{Error, Result};
use indexmap::IndexMap;
use pattern::CompiledPattern;

/// A named category and the patterns that select it
#[derive(Debug, Clone)]
pub struct CategoryRule {
    category: String,
    patterns: Vec<CompiledPattern>,
}

impl CategoryRule {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn patterns(&self) -> impl Iterator<Item = &PatternSpec> + '_ {
        self.patterns.iter().map(|p| &p.spec)
    }

    fn matches(&self, lowered_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(lowered_name))
    }
}

/// Ordered, immutable mapping of category name to rule
#[derive(Debug, Clone)]
pub struct TaskCategories {
    rules: IndexMap<String, CategoryRule>,
}

impl TaskCategories {
    /// Start building a custom table
    pub fn builder() -> TaskCategoriesBuilder {
        TaskCategoriesBuilder::default()
    }

    /// A table with no categories; every task is uncategorized
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Find the category of a task, if any pattern matches
    pub fn categorize(&self, task_name: &str) -> Option<&str> {
        let lowered = task_name.to_lowercase();
        self.rules
            .values()
            .find(|rule| rule.matches(&lowered))
            .map(CategoryRule::category)
    }

    /// Rules in priority order
    pub fn rules(&self) -> impl Iterator<Item = &CategoryRule> + '_ {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn compile(declared: Vec<(String, Vec<PatternSpec>)>) -> Self {
        let rules = declared
            .into_iter()
            .map(|(category, patterns)| {
                let rule = CategoryRule {
                    category: category.clone(),
                    patterns: patterns.into_iter().map(CompiledPattern::new).collect(),
                };
                (category, rule)
            })
            .collect();
        Self { rules }
    }
}

impl Default for TaskCategories {
    fn default() -> Self {
        Self::compile(
            defaults::DEFAULT_CATEGORIES
                .iter()
                .map(|(category, authored)| {
                    let patterns = authored
                        .iter()
                        .map(|p| PatternSpec::from_authored(p))
                        .collect();
                    ((*category).to_string(), patterns)
                })
                .collect(),
        )
    }
}

/// Builder for [`TaskCategories`]; declaration order is priority order
#[derive(Debug, Default)]
pub struct TaskCategoriesBuilder {
    declared: Vec<(String, Vec<PatternSpec>)>,
}

impl TaskCategoriesBuilder {
    /// Declare a category with explicit patterns
    pub fn category(
        mut self,
        name: impl Into<String>,
        patterns: impl IntoIterator<Item = PatternSpec>,
    ) -> Self {
        self.declared
            .push((name.into(), patterns.into_iter().collect()));
        self
    }

    /// Declare a category from authored pattern strings
    pub fn authored<'a>(
        self,
        name: impl Into<String>,
        patterns: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let specs: Vec<_> = patterns.into_iter().map(PatternSpec::from_authored).collect();
        self.category(name, specs)
    }

    /// Validate and freeze the table
    pub fn build(self) -> Result<TaskCategories> {
        let mut seen = std::collections::HashSet::new();
        for (category, patterns) in &self.declared {
            if category.is_empty() {
                return Err(Error::configuration("category name must not be empty"));
            }
            if !seen.insert(category.as_str()) {
                return Err(Error::configuration(format!(
                    "category '{category}' declared more than once"
                )));
            }
            if patterns.iter().any(|p| p.text().is_empty()) {
                return Err(Error::configuration(format!(
                    "category '{category}' has a pattern with empty text"
                )));
            }
        }
        Ok(TaskCategories::compile(self.declared))
    }
}
