//! RetrievalEngine: orchestrates the adaptive retrieval pipeline.
//!
//! Phases, each strictly bounded and run at most once per request:
//! fan-out search → broaden → refine → rank-and-cap → follow-up recovery.
//! A failed collaborator call never aborts a phase; it is logged and counts
//! as zero hits.

use std::collections::HashSet;

use meeple_core::config::RetrievalConfig;
use meeple_core::models::{ConversationTurn, MessageSources, QueryType, SearchHit};
use meeple_core::traits::IVectorSearch;
use tracing::{debug, info};

use crate::expansion::{self, subjects};
use crate::followup;
use crate::intent;
use crate::search::{keyterms, safe_search, sort_by_similarity, HitAccumulator, SearchCache};
use crate::sources;

/// A single rules question plus its conversational context.
#[derive(Debug, Clone, Default)]
pub struct RetrievalRequest {
    pub query: String,
    /// Oldest first, truncated by the caller.
    pub history: Vec<ConversationTurn>,
    /// Suppresses follow-up reformulation and recovery for this request.
    pub skip_follow_up_handling: bool,
}

impl RetrievalRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            history: Vec::new(),
            skip_follow_up_handling: false,
        }
    }

    pub fn with_history(mut self, history: Vec<ConversationTurn>) -> Self {
        self.history = history;
        self
    }
}

/// The retrieval orchestrator. All state is per-request; the engine itself
/// holds only the collaborator, the optional injected cache, and config.
pub struct RetrievalEngine<'a> {
    client: &'a dyn IVectorSearch,
    cache: Option<SearchCache>,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(client: &'a dyn IVectorSearch, config: RetrievalConfig) -> Self {
        Self {
            client,
            cache: None,
            config,
        }
    }

    /// Inject a search-result cache. The cache is owned by the caller's
    /// construction scope, never global.
    pub fn with_cache(mut self, cache: SearchCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Run the full pipeline and format the result for citation display.
    ///
    /// Infallible by design: if every search call fails, the result is an
    /// empty, valid `MessageSources`, not an error.
    pub fn retrieve(&self, request: &RetrievalRequest) -> MessageSources {
        let hits = self.retrieve_hits(request);
        let sources = sources::format(&hits);
        info!(count = sources.len(), "retrieval complete");
        MessageSources::new(sources)
    }

    /// Run the search phases, returning ranked raw hits.
    pub fn retrieve_hits(&self, request: &RetrievalRequest) -> Vec<SearchHit> {
        let types = intent::classify(&request.query);
        debug!(?types, query = %request.query, "classified query");

        let queries = self.build_queries(request, &types);

        // Phase 1: fan-out. Dedup by id, first occurrence wins.
        let mut acc = HitAccumulator::new();
        for query in &queries {
            acc.extend(self.search(query));
        }
        info!(
            candidates = acc.len(),
            queries = queries.len(),
            "fan-out complete"
        );

        // Phase 2: broaden.
        if self.should_broaden(&types, acc.len()) {
            self.broaden(&request.query, &types, &mut acc);
        }

        // Phase 3: refine.
        if acc.len() < self.config.refine_min
            || acc.all_below(self.config.refine_similarity_floor)
        {
            self.refine(&request.query, &types, &mut acc);
        }

        // Phase 4: rank and cap.
        let cap = self.result_cap(&request.query, &types);
        let mut ranked = acc.into_ranked();
        ranked.truncate(cap);

        // Phase 5: follow-up recovery, at most once per request.
        if !request.skip_follow_up_handling
            && request.history.len() >= 2
            && self.is_poor(&ranked)
            && followup::detect(&request.query)
        {
            self.recover(request, &mut ranked);
        }

        ranked
    }

    /// Expanded query list, with the follow-up reformulation (when resolved
    /// and not suppressed) prepended so it leads the fan-out.
    fn build_queries(&self, request: &RetrievalRequest, types: &[QueryType]) -> Vec<String> {
        let mut queries = expansion::expand(&request.query, types);

        if !request.skip_follow_up_handling {
            let resolution = followup::resolve(&request.query, &request.history);
            if let Some(reformulated) = resolution.reformulated_query {
                debug!(
                    confidence = resolution.confidence,
                    reformulated = %reformulated,
                    "resolved follow-up"
                );
                queries.insert(0, reformulated);
            }
        }

        queries
    }

    fn search(&self, query: &str) -> Vec<SearchHit> {
        safe_search(self.client, self.cache.as_ref(), query)
    }

    fn should_broaden(&self, types: &[QueryType], count: usize) -> bool {
        let analytical = types.iter().any(|t| t.is_analytical());
        (analytical && count < self.config.broaden_analytical_min)
            || count < self.config.broaden_floor
    }

    /// Append hits from wider query phrasings; never replaces what the
    /// fan-out already found.
    fn broaden(&self, query: &str, types: &[QueryType], acc: &mut HitAccumulator) {
        let lower = query.to_lowercase();
        let mut extra: Vec<String> = Vec::new();

        if types.contains(&QueryType::Enumeration) {
            if let Some(subject) = subjects::enumeration_subject(&lower) {
                extra.push(format!("{subject} types list all"));
            }
        }

        if types.iter().any(|t| t.is_analytical()) {
            for term in keyterms::key_terms(&lower, 3) {
                extra.push(format!("{term} rules mechanics interactions"));
            }
        }

        for query in &extra {
            acc.extend(self.search(query));
        }
        debug!(
            queries = extra.len(),
            candidates = acc.len(),
            "broaden complete"
        );
    }

    /// One rule-based reformulation plus, for enumerations, a focused
    /// subject search whose hits get pre-sort priority.
    fn refine(&self, query: &str, types: &[QueryType], acc: &mut HitAccumulator) {
        if let Some(rewritten) = rewrite_query(query, types) {
            debug!(rewritten = %rewritten, "refine reformulation");
            acc.extend(self.search(&rewritten));
        }

        if types.contains(&QueryType::Enumeration) {
            if let Some(subject) = subjects::enumeration_subject(&query.to_lowercase()) {
                let focused = self.search(&format!("{subject} list all types complete"));
                acc.prepend(focused);
            }
        }
        debug!(candidates = acc.len(), "refine complete");
    }

    fn result_cap(&self, query: &str, types: &[QueryType]) -> usize {
        if types.contains(&QueryType::Enumeration) {
            let lower = query.to_lowercase();
            if lower.contains("card") || lower.contains("type") {
                self.config.cap_card_enumeration
            } else {
                self.config.cap_enumeration
            }
        } else {
            self.config.cap_default
        }
    }

    fn is_poor(&self, ranked: &[SearchHit]) -> bool {
        ranked.len() < self.config.recovery_min
            || ranked
                .iter()
                .all(|h| h.similarity.value() < self.config.recovery_similarity_floor)
    }

    /// Bounded last-resort pass for poorly-served follow-ups: one search per
    /// top-ranked history entity, keeping only strong, newly-seen hits.
    fn recover(&self, request: &RetrievalRequest, ranked: &mut Vec<SearchHit>) {
        let entities = followup::ranked_entities(&request.history, &request.query);
        if entities.is_empty() {
            debug!("recovery skipped: no entities in history");
            return;
        }

        let seen: HashSet<String> = ranked.iter().map(|h| h.id.clone()).collect();
        let mut fresh: Vec<SearchHit> = Vec::new();

        for entity in entities.iter().take(self.config.recovery_entities) {
            for hit in self.search(&format!("{} {}", request.query, entity.text)) {
                if seen.contains(&hit.id)
                    || hit.similarity.value() <= self.config.recovery_hit_floor
                    || fresh.iter().any(|f| f.id == hit.id)
                {
                    continue;
                }
                fresh.push(hit);
            }
        }

        sort_by_similarity(&mut fresh);
        fresh.truncate(self.config.recovery_keep);
        let recovered = fresh.len();

        ranked.extend(fresh);
        sort_by_similarity(ranked);
        debug!(recovered, total = ranked.len(), "recovery complete");
    }
}

/// One-shot lexical rewrite for enumeration/interaction phrasings that bury
/// the subject mid-question.
fn rewrite_query(query: &str, types: &[QueryType]) -> Option<String> {
    let lower = query.to_lowercase();

    if types.contains(&QueryType::Enumeration) {
        if let Some(subject) = subjects::enumeration_subject(&lower) {
            return Some(format!("all {subject} in the game"));
        }
    }

    if types.contains(&QueryType::Interaction) {
        let terms = keyterms::key_terms(&lower, 2);
        if !terms.is_empty() {
            return Some(format!("{} interaction rules", terms.join(" ")));
        }
    }

    None
}
