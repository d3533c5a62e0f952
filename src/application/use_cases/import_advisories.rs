use crate::application::dto::{ImportRequest, ImportResponse, PublishFailure, RepositoryTally};
use crate::application::inventory_builder::InventoryBuilder;
use crate::application::run_context::RunContext;
use crate::errata::domain::Advisory;
use crate::errata::services::{Allocator, PayloadBuilder, ADVISORY_ID_PREFIX};
use crate::ports::outbound::{AdvisoryStore, ErratumPublisher, ProgressReporter, RepositoryCatalog};
use crate::shared::Result;
use std::collections::HashMap;

/// ImportAdvisoriesUseCase - Matches stored advisories against repositories
/// and publishes each allocated one
///
/// A publishing failure is recorded against the advisory and the run moves
/// on; the caller decides the exit status from
/// [`ImportResponse::has_failures`]. Store and catalog failures abort the run.
///
/// # Type Parameters
/// * `S` - AdvisoryStore implementation
/// * `C` - RepositoryCatalog implementation
/// * `P` - ErratumPublisher implementation
/// * `PR` - ProgressReporter implementation
pub struct ImportAdvisoriesUseCase<S, C, P, PR> {
    store: S,
    catalog: C,
    publisher: P,
    progress_reporter: PR,
}

impl<S, C, P, PR> ImportAdvisoriesUseCase<S, C, P, PR>
where
    S: AdvisoryStore,
    C: RepositoryCatalog,
    P: ErratumPublisher,
    PR: ProgressReporter,
{
    pub fn new(store: S, catalog: C, publisher: P, progress_reporter: PR) -> Self {
        Self {
            store,
            catalog,
            publisher,
            progress_reporter,
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Checks every requested label against the catalog listing without
    /// touching the store, so callers can fail before another pass mutates it.
    pub fn verify_repositories(&self, request: &ImportRequest) -> Result<()> {
        InventoryBuilder::new(&self.catalog, &self.progress_reporter)
            .verify_labels(&request.repositories)?;
        Ok(())
    }

    pub fn execute(&self, request: ImportRequest) -> Result<ImportResponse> {
        let inventories =
            InventoryBuilder::new(&self.catalog, &self.progress_reporter).build(&request.repositories)?;
        let advisories = self.load_advisories()?;
        let context = RunContext::new(advisories, inventories);

        self.progress_reporter.report(&format!(
            "🔍 Matching {} advisories against {} repositories",
            context.advisories.len(),
            context.repository_count()
        ));
        let response = self.allocate_and_publish(&context);

        if response.has_failures() {
            self.progress_reporter.report_error(&format!(
                "⚠️  {} of {} allocated advisories failed to publish",
                response.failures.len(),
                response.allocated
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "✅ Allocated {} of {} advisories",
                response.allocated, response.advisories_considered
            ));
        }
        Ok(response)
    }

    /// Reads every stored advisory, in id order
    fn load_advisories(&self) -> Result<Vec<Advisory>> {
        let ids = self.store.scan(ADVISORY_ID_PREFIX)?;
        let mut advisories = Vec::with_capacity(ids.len());
        for id in &ids {
            match self.store.get(id)? {
                Some(advisory) => advisories.push(advisory),
                None => tracing::warn!(advisory = %id, "advisory vanished from store, skipping"),
            }
        }
        tracing::info!(count = advisories.len(), "advisories loaded from store");
        Ok(advisories)
    }

    fn allocate_and_publish(&self, context: &RunContext) -> ImportResponse {
        let mut tallies: Vec<RepositoryTally> = context
            .inventories
            .values()
            .flatten()
            .map(|inventory| RepositoryTally {
                label: inventory.label().to_string(),
                os_release: inventory.os_release(),
                count: 0,
            })
            .collect();
        let tally_index: HashMap<String, usize> = tallies
            .iter()
            .enumerate()
            .map(|(index, tally)| (tally.label.clone(), index))
            .collect();

        let mut response = ImportResponse {
            advisories_considered: context.advisories.len(),
            ..ImportResponse::default()
        };
        let total = context.advisories.len();

        for (index, advisory) in context.advisories.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(advisory.id()));

            let Some(allocation) = Allocator::allocate(advisory, &context.inventories) else {
                continue;
            };
            response.allocated += 1;
            if let Some(&slot) = tally_index.get(allocation.repository_label()) {
                tallies[slot].count += 1;
            }

            let payload = PayloadBuilder::build(advisory, &allocation);
            if let Err(e) = self.publisher.publish(&payload) {
                self.progress_reporter.report_error(&format!("❌ {}", e));
                response.failures.push(PublishFailure {
                    advisory_id: payload.advisory_id,
                    repository_label: payload.repository_label,
                    reason: e.to_string(),
                });
            }
        }

        response.tallies = tallies;
        response
    }
}
