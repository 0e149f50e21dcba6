//! # Editing Pipeline
//!
//! Coordinates the edit loop for a host that keeps its value in a
//! [`Document`]: Mutate → Walk.
//!
//! The Pipeline manages:
//! - Applying mutations through the session
//! - Marking the document dirty when something changed
//! - Re-walking the tree so the renderer always gets fresh rows

use crate::{Document, EditSession, Mutation, MutationOutcome, NodeDescriptor};

/// Owns a document and the session editing it
pub struct Pipeline {
    document: Document,
    session: EditSession,
}

/// Outcome of one mutation plus the rows to render next
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub outcome: MutationOutcome,
    pub nodes: Vec<NodeDescriptor>,
}

impl Pipeline {
    /// Create pipeline and expand to the session's initial depth
    pub fn new(document: Document, mut session: EditSession) -> Self {
        session.initialize(document.value());
        Self { document, session }
    }

    /// Apply mutation and walk the updated tree
    pub fn apply_mutation(&mut self, mutation: &Mutation) -> PipelineResult {
        let outcome = self.session.apply(self.document.value_mut(), mutation);
        if outcome.is_applied() {
            self.document.mark_dirty();
        }

        PipelineResult {
            outcome,
            nodes: self.session.walk(self.document.value()),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Current rows without mutating
    pub fn nodes(&self) -> Vec<NodeDescriptor> {
        self.session.walk(self.document.value())
    }

    pub fn into_parts(self) -> (Document, EditSession) {
        (self.document, self.session)
    }
}
