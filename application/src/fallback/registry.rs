//! Strategy chain construction

use super::{
    AlternativeLogicHandler, CachedResultsHandler, FallbackDataHandler, FallbackHandler,
    PartialResultsHandler, StaticResponseHandler,
};
use crate::ports::alternative_scorer::AlternativeScorer;
use crate::ports::reference_store::ReferenceLookup;
use crate::ports::result_cache::ResultCache;
use degrade_domain::{DegradationPolicy, FallbackStrategy};
use std::sync::Arc;

/// Build the handler chain for `policy`, in its effective order.
pub fn build_chain(
    policy: &DegradationPolicy,
    cache: Arc<dyn ResultCache>,
    reference: Arc<dyn ReferenceLookup>,
    scorer: Arc<dyn AlternativeScorer>,
) -> Vec<Box<dyn FallbackHandler>> {
    policy
        .effective_order()
        .into_iter()
        .map(|strategy| -> Box<dyn FallbackHandler> {
            match strategy {
                FallbackStrategy::CachedResults => {
                    Box::new(CachedResultsHandler::new(Arc::clone(&cache)))
                }
                FallbackStrategy::FallbackData => {
                    Box::new(FallbackDataHandler::new(Arc::clone(&reference)))
                }
                FallbackStrategy::PartialResults => Box::new(PartialResultsHandler::new(
                    policy.partial_result_threshold,
                    policy.minimal_result_threshold,
                )),
                FallbackStrategy::AlternativeLogic => Box::new(AlternativeLogicHandler::new(
                    Arc::clone(&scorer),
                    policy.minimal_result_threshold,
                )),
                FallbackStrategy::StaticResponse => {
                    Box::new(StaticResponseHandler::new(policy.minimal_result_threshold))
                }
            }
        })
        .collect()
}
