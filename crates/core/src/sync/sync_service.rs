//! Sync orchestrator: drives one run end to end.
//!
//! One invocation resolves the owner's active account, initializes the
//! provider, fetches one bounded page of candidates and processes them
//! sequentially through dedup, classification and category resolution.
//! Item failures are recorded and never abort the run; only run-level
//! provider errors finalize the audit log as Failed.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use super::sync_errors::SyncError;
use super::sync_model::{NewSyncLog, SyncItemError, SyncOutcome, SyncStatus};
use super::sync_traits::{SyncLogRepositoryTrait, SyncServiceTrait};
use crate::accounts::{AccountRepositoryTrait, LinkedAccount};
use crate::categories::CategoryServiceTrait;
use crate::categorization::{ClassificationService, MerchantExtractor};
use crate::constants::{DEFAULT_PAGE_LIMIT, SYNC_TYPE_TRANSACTIONS, UNKNOWN_MERCHANT};
use crate::errors::{Result, ValidationError};
use crate::providers::{ProviderAdapter, RawProviderTransaction};
use crate::transactions::{NewTransaction, TransactionRepositoryTrait, TransactionUpdate};

/// Service orchestrating provider syncs into the local ledger.
pub struct SyncService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    sync_log_repository: Arc<dyn SyncLogRepositoryTrait>,
    category_service: Arc<dyn CategoryServiceTrait>,
    provider: Arc<dyn ProviderAdapter>,
    classifier: ClassificationService,
    merchant_extractor: MerchantExtractor,
    provider_source: String,
    page_limit: usize,
}

impl SyncService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        sync_log_repository: Arc<dyn SyncLogRepositoryTrait>,
        category_service: Arc<dyn CategoryServiceTrait>,
        provider: Arc<dyn ProviderAdapter>,
        classifier: ClassificationService,
        provider_source: impl Into<String>,
    ) -> Self {
        Self {
            account_repository,
            transaction_repository,
            sync_log_repository,
            category_service,
            provider,
            classifier,
            merchant_extractor: MerchantExtractor::new(),
            provider_source: provider_source.into(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Processes one raw candidate: validate, dedup, classify, resolve the
    /// category and persist. Returns whether a new canonical row was
    /// created.
    async fn process_candidate(
        &self,
        owner_id: &str,
        raw: &RawProviderTransaction,
        sync_log_id: &str,
        account: &LinkedAccount,
    ) -> Result<bool> {
        if raw.external_id.trim().is_empty() {
            return Err(ValidationError::new(
                "externalId",
                "external id must not be empty",
                raw.external_id.clone(),
            )
            .into());
        }

        let amount: f64 = raw.amount.parse().map_err(|_| {
            ValidationError::new("amount", "amount is not a number", raw.amount.clone())
        })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::new(
                "amount",
                "amount must be a finite non-negative number",
                raw.amount.clone(),
            )
            .into());
        }

        let description = if raw.payer_message.trim().is_empty() {
            raw.payee_note.clone()
        } else {
            raw.payer_message.clone()
        };
        let free_text = format!("{} {}", raw.payer_message, raw.payee_note);

        let merchant = self
            .merchant_extractor
            .extract(&raw.payer_message, &raw.payee_note);
        let merchant_hint = (merchant != UNKNOWN_MERCHANT).then(|| merchant.clone());

        let existing = self
            .transaction_repository
            .find_by_external_id(owner_id, &raw.external_id)?;

        // Re-classification on updates keeps categorization current with
        // the catalog.
        let classification = self.classifier.classify(
            &free_text,
            amount,
            &raw.payer_info,
            merchant_hint.as_deref(),
        );
        let category = self
            .category_service
            .ensure_category(owner_id, &classification.category_id, classification.direction)
            .await?;

        match existing {
            None => {
                self.transaction_repository
                    .insert(NewTransaction {
                        owner_id: owner_id.to_string(),
                        amount,
                        direction: classification.direction,
                        category_id: category.id,
                        transaction_date: Utc::now().naive_utc(),
                        description,
                        merchant_name: merchant_hint,
                        external_id: raw.external_id.clone(),
                        provider_ref: Some(account.provider_ref.clone()),
                        provider_status: Some(raw.status.clone()),
                        provider_payer_info: Some(raw.payer_info.clone()),
                        financial_transaction_id: raw.financial_transaction_id.clone(),
                        auto_categorized: true,
                        confidence: classification.confidence,
                        sync_log_id: Some(sync_log_id.to_string()),
                    })
                    .await?;
                Ok(true)
            }
            Some(_) => {
                self.transaction_repository
                    .update(
                        owner_id,
                        &raw.external_id,
                        TransactionUpdate {
                            provider_status: Some(raw.status.clone()),
                            financial_transaction_id: raw.financial_transaction_id.clone(),
                            category_id: category.id,
                            direction: classification.direction,
                            confidence: classification.confidence,
                            merchant_name: merchant_hint,
                        },
                    )
                    .await?;
                Ok(false)
            }
        }
    }

    /// Finalizes the audit entry, logging and swallowing any failure:
    /// auditing must never turn a completed run into a failed one.
    async fn finalize_log(
        &self,
        log_id: &str,
        status: SyncStatus,
        count: i32,
        error_message: Option<String>,
    ) {
        if let Err(err) = self
            .sync_log_repository
            .finalize(log_id, status, count, error_message)
            .await
        {
            warn!("Failed to finalize sync log {}: {}", log_id, err);
        }
    }
}

#[async_trait]
impl SyncServiceTrait for SyncService {
    async fn sync_transactions(&self, owner_id: &str) -> Result<SyncOutcome> {
        let accounts = self
            .account_repository
            .list_active(owner_id, &self.provider_source)?;
        // Newest active link is the sync target.
        let account = accounts.first().ok_or(SyncError::NoActiveAccount)?;

        // A session failure aborts before any audit entry exists.
        self.provider
            .initialize_session()
            .await
            .map_err(|e| SyncError::ProviderUnavailable(e.to_string()))?;

        let log = self
            .sync_log_repository
            .create(NewSyncLog {
                owner_id: owner_id.to_string(),
                account_id: account.id.clone(),
                sync_type: SYNC_TYPE_TRANSACTIONS.to_string(),
            })
            .await?;
        info!(
            "Sync run {} started for account {}",
            log.id, account.id
        );

        let candidates = match self
            .provider
            .fetch_candidates(&account.provider_ref, self.page_limit)
            .await
        {
            Ok(candidates) => candidates,
            Err(err) => {
                self.finalize_log(&log.id, SyncStatus::Failed, 0, Some(err.to_string()))
                    .await;
                return Err(SyncError::ProviderUnavailable(err.to_string()).into());
            }
        };

        let mut outcome = SyncOutcome::default();
        for raw in &candidates {
            match self.process_candidate(owner_id, raw, &log.id, account).await {
                Ok(true) => outcome.new += 1,
                Ok(false) => outcome.updated += 1,
                Err(err) => {
                    debug!(
                        "Skipping candidate {}: {}",
                        raw.external_id, err
                    );
                    outcome.errors.push(SyncItemError {
                        external_id: raw.external_id.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
        outcome.total = outcome.new + outcome.updated;

        // Item errors do not fail the run.
        self.finalize_log(&log.id, SyncStatus::Success, outcome.total as i32, None)
            .await;
        info!(
            "Sync run {} finished: {} new, {} updated, {} errors",
            log.id,
            outcome.new,
            outcome.updated,
            outcome.errors.len()
        );

        Ok(outcome)
    }
}
