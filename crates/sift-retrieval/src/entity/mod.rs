//! Entity extraction → canonical matching → `EntityFilter`.

pub mod grouping;
pub mod matcher;

pub use matcher::EntityMatcher;

use tracing::{debug, warn};

use sift_core::errors::SiftResult;
use sift_core::models::{Deadline, EntityFilter};
use sift_core::traits::IExtractor;

/// Builds the entity filter for a question.
///
/// Extraction failures degrade to no filter. Entity store failures
/// propagate.
pub struct EntityFilterBuilder<'a> {
    extractor: &'a dyn IExtractor,
    matcher: EntityMatcher<'a>,
    entity_types: Vec<String>,
}

impl<'a> EntityFilterBuilder<'a> {
    pub fn new(extractor: &'a dyn IExtractor, matcher: EntityMatcher<'a>, entity_types: Vec<String>) -> Self {
        Self {
            extractor,
            matcher,
            entity_types,
        }
    }

    pub fn build(&self, question: &str, deadline: &Deadline) -> SiftResult<Option<EntityFilter>> {
        if question.trim().is_empty() {
            return Ok(None);
        }

        deadline.check("entity.extract")?;
        let extracted = match self.extractor.extract_entities(question) {
            Ok(entities) => entities,
            Err(e) if e.is_extraction_failure() => {
                warn!(error = %e, "entity extraction failed, searching unfiltered");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let grouped = grouping::group_by_type(&extracted, &self.entity_types);
        if grouped.is_empty() {
            debug!(extracted = extracted.len(), "no entities of configured types");
            return Ok(None);
        }

        deadline.check("entity.match")?;
        let matched = self.matcher.match_entities(&grouped)?;
        let filter = matched.and_then(EntityFilter::from_matches);
        debug!(filtered = filter.is_some(), "entity filter built");
        Ok(filter)
    }
}
