use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{QuestionId, SchemaKey};
use crate::model::question::Question;
use crate::model::schema::SchemaCatalog;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question {id} references unknown schema {key}")]
    UnknownSchema { id: QuestionId, key: SchemaKey },

    #[error("question {0} has an empty title")]
    EmptyTitle(QuestionId),

    #[error("question {0} has an empty solution")]
    EmptySolution(QuestionId),
}

/// Ordered, immutable drill content: the questions plus the schemas they use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
    schemas: SchemaCatalog,
}

impl QuestionBank {
    /// Build a bank from questions in drill order.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the bank is empty, ids repeat, a schema key is
    /// unresolvable, or a question lacks a title or solution.
    pub fn new(questions: Vec<Question>, schemas: SchemaCatalog) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(BankError::DuplicateId(question.id));
            }
            if question.title.trim().is_empty() {
                return Err(BankError::EmptyTitle(question.id));
            }
            if question.solution.trim().is_empty() {
                return Err(BankError::EmptySolution(question.id));
            }
            if !schemas.contains(&question.schema_key) {
                return Err(BankError::UnknownSchema {
                    id: question.id,
                    key: question.schema_key.clone(),
                });
            }
        }

        Ok(Self { questions, schemas })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn schemas(&self) -> &SchemaCatalog {
        &self.schemas
    }

    /// Rich-text schema description for a question. Always present for
    /// questions that belong to this bank.
    #[must_use]
    pub fn schema_html(&self, question: &Question) -> &str {
        self.schemas.html(&question.schema_key).unwrap_or_default()
    }

    #[must_use]
    pub fn schema_tables(&self, question: &Question) -> &[String] {
        self.schemas.tables(&question.schema_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::Difficulty;

    fn question(id: u32, schema: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            difficulty: Difficulty::WarmUp,
            title: format!("Q{id}"),
            description: "desc".into(),
            schema_key: SchemaKey::new(schema),
            solution: "SELECT 1;".into(),
            logic: String::new(),
        }
    }

    fn catalog() -> SchemaCatalog {
        SchemaCatalog::new().with_schema(SchemaKey::new("main"), "<div>t</div>", ["t"])
    }

    #[test]
    fn rejects_empty_bank() {
        assert_eq!(QuestionBank::new(vec![], catalog()), Err(BankError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuestionBank::new(vec![question(1, "main"), question(1, "main")], catalog())
            .unwrap_err();
        assert_eq!(err, BankError::DuplicateId(QuestionId::new(1)));
    }

    #[test]
    fn rejects_unknown_schema() {
        let err = QuestionBank::new(vec![question(1, "missing")], catalog()).unwrap_err();
        assert!(matches!(err, BankError::UnknownSchema { .. }));
    }

    #[test]
    fn rejects_blank_solution() {
        let mut q = question(7, "main");
        q.solution = "  ".into();
        let err = QuestionBank::new(vec![q], catalog()).unwrap_err();
        assert_eq!(err, BankError::EmptySolution(QuestionId::new(7)));
    }

    #[test]
    fn keeps_drill_order() {
        let bank =
            QuestionBank::new(vec![question(3, "main"), question(1, "main")], catalog()).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.get(0).unwrap().id, QuestionId::new(3));
        assert_eq!(bank.schema_html(bank.get(1).unwrap()), "<div>t</div>");
        assert!(bank.get(2).is_none());
    }
}
