//! Orchestrator tests over in-memory repositories and a scripted provider.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::accounts::{AccountKind, AccountRepositoryTrait, LinkedAccount, NewLinkedAccount};
use crate::categories::{
    Category, CategoryRepositoryTrait, CategoryService, NewCategory,
};
use crate::categorization::{CategoryCatalog, ClassificationService};
use crate::errors::{DatabaseError, Result};
use crate::providers::{ProviderAdapter, ProviderError, RawProviderTransaction};
use crate::sync::{
    NewSyncLog, SyncLogEntry, SyncLogRepositoryTrait, SyncService, SyncServiceTrait, SyncStatus,
};
use crate::transactions::{
    CanonicalTransaction, NewTransaction, TransactionRepositoryTrait, TransactionUpdate,
};

const PROVIDER_SOURCE: &str = "mtn_momo";
const OWNER: &str = "owner-1";

// ---------------------------------------------------------------------------
// In-memory doubles
// ---------------------------------------------------------------------------

struct MemoryAccounts {
    accounts: Mutex<Vec<LinkedAccount>>,
}

impl MemoryAccounts {
    fn with_active_account() -> Self {
        let repo = Self {
            accounts: Mutex::new(Vec::new()),
        };
        repo.accounts.lock().unwrap().push(LinkedAccount {
            id: "acc-1".to_string(),
            owner_id: OWNER.to_string(),
            provider_ref: "+233241234567".to_string(),
            display_name: "Personal MoMo".to_string(),
            account_kind: AccountKind::MobileMoney,
            provider_source: PROVIDER_SOURCE.to_string(),
            is_active: true,
            created_at: Utc::now().naive_utc(),
        });
        repo
    }

    fn empty() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AccountRepositoryTrait for MemoryAccounts {
    async fn insert(&self, new_account: NewLinkedAccount) -> Result<LinkedAccount> {
        let account = LinkedAccount {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_account.owner_id,
            provider_ref: new_account.provider_ref,
            display_name: new_account.display_name,
            account_kind: new_account.account_kind,
            provider_source: new_account.provider_source,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        };
        self.accounts.lock().unwrap().push(account.clone());
        Ok(account)
    }

    fn find_active(
        &self,
        owner_id: &str,
        provider_ref: &str,
        provider_source: &str,
    ) -> Result<Option<LinkedAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| {
                a.is_active
                    && a.owner_id == owner_id
                    && a.provider_ref == provider_ref
                    && a.provider_source == provider_source
            })
            .cloned())
    }

    fn list(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.owner_id == owner_id && a.provider_source == provider_source)
            .cloned()
            .collect())
    }

    fn list_active(&self, owner_id: &str, provider_source: &str) -> Result<Vec<LinkedAccount>> {
        Ok(self
            .list(owner_id, provider_source)?
            .into_iter()
            .filter(|a| a.is_active)
            .collect())
    }

    async fn deactivate(&self, owner_id: &str, account_id: &str) -> Result<usize> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts
            .iter_mut()
            .find(|a| a.is_active && a.owner_id == owner_id && a.id == account_id)
        {
            Some(account) => {
                account.is_active = false;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Default)]
struct MemoryTransactions {
    rows: Mutex<HashMap<(String, String), CanonicalTransaction>>,
}

#[async_trait]
impl TransactionRepositoryTrait for MemoryTransactions {
    fn find_by_external_id(
        &self,
        owner_id: &str,
        external_id: &str,
    ) -> Result<Option<CanonicalTransaction>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&(owner_id.to_string(), external_id.to_string()))
            .cloned())
    }

    async fn insert(&self, new_transaction: NewTransaction) -> Result<CanonicalTransaction> {
        let key = (
            new_transaction.owner_id.clone(),
            new_transaction.external_id.clone(),
        );
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&key) {
            return Err(DatabaseError::UniqueViolation(format!(
                "transaction {} already exists",
                new_transaction.external_id
            ))
            .into());
        }
        let now = Utc::now().naive_utc();
        let row = CanonicalTransaction {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_transaction.owner_id,
            amount: new_transaction.amount,
            direction: new_transaction.direction,
            category_id: new_transaction.category_id,
            transaction_date: new_transaction.transaction_date,
            description: new_transaction.description,
            merchant_name: new_transaction.merchant_name,
            external_id: new_transaction.external_id,
            provider_ref: new_transaction.provider_ref,
            provider_status: new_transaction.provider_status,
            provider_payer_info: new_transaction.provider_payer_info,
            financial_transaction_id: new_transaction.financial_transaction_id,
            auto_categorized: new_transaction.auto_categorized,
            confidence: new_transaction.confidence,
            sync_log_id: new_transaction.sync_log_id,
            created_at: now,
            updated_at: now,
        };
        rows.insert(key, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        owner_id: &str,
        external_id: &str,
        update: TransactionUpdate,
    ) -> Result<CanonicalTransaction> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&(owner_id.to_string(), external_id.to_string()))
            .ok_or_else(|| DatabaseError::NotFound(external_id.to_string()))?;
        row.provider_status = update.provider_status;
        row.financial_transaction_id = update.financial_transaction_id;
        row.category_id = update.category_id;
        row.direction = update.direction;
        row.confidence = update.confidence;
        row.merchant_name = update.merchant_name;
        row.updated_at = Utc::now().naive_utc();
        Ok(row.clone())
    }

    fn count_for_owner(&self, owner_id: &str) -> Result<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .keys()
            .filter(|(owner, _)| owner == owner_id)
            .count() as i64)
    }
}

#[derive(Default)]
struct MemoryCategories {
    categories: Mutex<Vec<Category>>,
}

#[async_trait]
impl CategoryRepositoryTrait for MemoryCategories {
    fn find_matching(&self, owner_id: &str, name: &str) -> Result<Option<Category>> {
        let needle = name.to_lowercase();
        let categories = self.categories.lock().unwrap();
        Ok(categories
            .iter()
            .filter(|c| c.owner_id.is_none() || c.owner_id.as_deref() == Some(owner_id))
            .find(|c| {
                let existing = c.name.to_lowercase();
                existing.contains(&needle) || needle.contains(&existing)
            })
            .cloned())
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        let category = Category {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_category.owner_id,
            name: new_category.name,
            icon: new_category.icon,
            created_at: Utc::now().naive_utc(),
        };
        self.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }
}

struct MemorySyncLogs {
    entries: Mutex<HashMap<String, SyncLogEntry>>,
    fail_finalize: bool,
}

impl MemorySyncLogs {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_finalize: false,
        }
    }

    fn failing_finalize() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_finalize: true,
        }
    }

    fn single_entry(&self) -> SyncLogEntry {
        let entries = self.entries.lock().unwrap();
        assert_eq!(entries.len(), 1, "expected exactly one sync log entry");
        entries.values().next().unwrap().clone()
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl SyncLogRepositoryTrait for MemorySyncLogs {
    async fn create(&self, new_log: NewSyncLog) -> Result<SyncLogEntry> {
        let entry = SyncLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: new_log.owner_id,
            account_id: new_log.account_id,
            sync_type: new_log.sync_type,
            status: SyncStatus::InProgress,
            transactions_synced: 0,
            error_message: None,
            started_at: Utc::now().naive_utc(),
            completed_at: None,
        };
        self.entries
            .lock()
            .unwrap()
            .insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn finalize(
        &self,
        log_id: &str,
        status: SyncStatus,
        transactions_synced: i32,
        error_message: Option<String>,
    ) -> Result<()> {
        if self.fail_finalize {
            return Err(DatabaseError::QueryFailed("disk full".to_string()).into());
        }
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .get_mut(log_id)
            .ok_or_else(|| DatabaseError::NotFound(log_id.to_string()))?;
        if entry.status != SyncStatus::InProgress {
            return Err(DatabaseError::QueryFailed("log already finalized".to_string()).into());
        }
        entry.status = status;
        entry.transactions_synced = transactions_synced;
        entry.error_message = error_message;
        entry.completed_at = Some(Utc::now().naive_utc());
        Ok(())
    }

    fn get(&self, log_id: &str) -> Result<Option<SyncLogEntry>> {
        Ok(self.entries.lock().unwrap().get(log_id).cloned())
    }
}

struct ScriptedProvider {
    init_error: Option<String>,
    fetch_error: Option<String>,
    page: Mutex<Vec<RawProviderTransaction>>,
}

impl ScriptedProvider {
    fn with_page(page: Vec<RawProviderTransaction>) -> Self {
        Self {
            init_error: None,
            fetch_error: None,
            page: Mutex::new(page),
        }
    }

    fn failing_init(message: &str) -> Self {
        Self {
            init_error: Some(message.to_string()),
            fetch_error: None,
            page: Mutex::new(Vec::new()),
        }
    }

    fn failing_fetch(message: &str) -> Self {
        Self {
            init_error: None,
            fetch_error: Some(message.to_string()),
            page: Mutex::new(Vec::new()),
        }
    }

    fn set_page(&self, page: Vec<RawProviderTransaction>) {
        *self.page.lock().unwrap() = page;
    }
}

#[async_trait]
impl ProviderAdapter for ScriptedProvider {
    async fn initialize_session(&self) -> std::result::Result<(), ProviderError> {
        match &self.init_error {
            Some(message) => Err(ProviderError::SessionInit(message.clone())),
            None => Ok(()),
        }
    }

    async fn fetch_candidates(
        &self,
        _provider_ref: &str,
        limit: usize,
    ) -> std::result::Result<Vec<RawProviderTransaction>, ProviderError> {
        if let Some(message) = &self.fetch_error {
            return Err(ProviderError::FetchFailed(message.clone()));
        }
        let page = self.page.lock().unwrap();
        Ok(page.iter().take(limit).cloned().collect())
    }
}

fn raw(external_id: &str, amount: &str, message: &str) -> RawProviderTransaction {
    RawProviderTransaction {
        external_id: external_id.to_string(),
        amount: amount.to_string(),
        currency: "GHS".to_string(),
        status: "SUCCESSFUL".to_string(),
        payer_info: "+233241234567".to_string(),
        payer_message: message.to_string(),
        payee_note: String::new(),
        financial_transaction_id: Some(format!("ft-{}", external_id)),
    }
}

struct Harness {
    service: SyncService,
    transactions: Arc<MemoryTransactions>,
    categories: Arc<MemoryCategories>,
    sync_logs: Arc<MemorySyncLogs>,
    provider: Arc<ScriptedProvider>,
}

fn harness(accounts: MemoryAccounts, provider: ScriptedProvider) -> Harness {
    harness_with_logs(accounts, provider, MemorySyncLogs::new())
}

fn harness_with_logs(
    accounts: MemoryAccounts,
    provider: ScriptedProvider,
    sync_logs: MemorySyncLogs,
) -> Harness {
    let transactions = Arc::new(MemoryTransactions::default());
    let categories = Arc::new(MemoryCategories::default());
    let sync_logs = Arc::new(sync_logs);
    let provider = Arc::new(provider);

    let service = SyncService::new(
        Arc::new(accounts),
        transactions.clone(),
        sync_logs.clone(),
        Arc::new(CategoryService::new(categories.clone())),
        provider.clone(),
        ClassificationService::new(Arc::new(CategoryCatalog::default_catalog())),
        PROVIDER_SOURCE,
    );

    Harness {
        service,
        transactions,
        categories,
        sync_logs,
        provider,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_with_one_invalid_candidate_still_succeeds() {
    let page = vec![
        raw("ext-1", "25.50", "Lunch at KFC Accra Mall"),
        raw("ext-2", "2000.00", "Monthly salary deposit"),
        raw("ext-3", "10.00", "MTN airtime topup"),
        raw("ext-4", "not-a-number", "corrupt record"),
        raw("ext-5", "60.00", "DSTV subscription renewal"),
    ];
    let h = harness(MemoryAccounts::with_active_account(), ScriptedProvider::with_page(page));

    let outcome = h.service.sync_transactions(OWNER).await.unwrap();

    assert_eq!(outcome.total, 4);
    assert_eq!(outcome.new, 4);
    assert_eq!(outcome.updated, 0);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].external_id, "ext-4");

    let log = h.sync_logs.single_entry();
    assert_eq!(log.status, SyncStatus::Success);
    assert_eq!(log.transactions_synced, 4);
    assert!(log.completed_at.is_some());
}

#[tokio::test]
async fn resync_is_idempotent() {
    let page = vec![
        raw("ext-1", "25.50", "Lunch at KFC Accra Mall"),
        raw("ext-2", "2000.00", "Monthly salary deposit"),
    ];
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(page),
    );

    let first = h.service.sync_transactions(OWNER).await.unwrap();
    assert_eq!(first.new, 2);
    let count_after_first = h.transactions.count_for_owner(OWNER).unwrap();

    let second = h.service.sync_transactions(OWNER).await.unwrap();
    assert_eq!(second.new, 0);
    assert_eq!(second.updated, 2);
    assert_eq!(h.transactions.count_for_owner(OWNER).unwrap(), count_after_first);
}

#[tokio::test]
async fn no_active_account_fails_before_any_audit_entry() {
    let h = harness(
        MemoryAccounts::empty(),
        ScriptedProvider::with_page(vec![raw("ext-1", "5.00", "anything")]),
    );

    let err = h.service.sync_transactions(OWNER).await.unwrap_err();
    assert_eq!(err.code(), "NO_ACTIVE_ACCOUNT");
    assert_eq!(h.sync_logs.len(), 0);
}

#[tokio::test]
async fn provider_init_failure_aborts_before_audit_entry() {
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::failing_init("gateway timeout"),
    );

    let err = h.service.sync_transactions(OWNER).await.unwrap_err();
    assert_eq!(err.code(), "PROVIDER_UNAVAILABLE");
    assert_eq!(h.sync_logs.len(), 0);
    assert_eq!(h.transactions.count_for_owner(OWNER).unwrap(), 0);
}

#[tokio::test]
async fn fetch_failure_finalizes_log_as_failed() {
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::failing_fetch("connection reset"),
    );

    let err = h.service.sync_transactions(OWNER).await.unwrap_err();
    assert_eq!(err.code(), "PROVIDER_UNAVAILABLE");

    let log = h.sync_logs.single_entry();
    assert_eq!(log.status, SyncStatus::Failed);
    assert_eq!(log.transactions_synced, 0);
    assert!(log.error_message.unwrap().contains("connection reset"));
}

#[tokio::test]
async fn empty_external_id_is_recorded_as_item_error() {
    let page = vec![raw("", "5.00", "whatever"), raw("ext-2", "5.00", "MTN airtime topup")];
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(page),
    );

    let outcome = h.service.sync_transactions(OWNER).await.unwrap();
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].message.contains("external id"));
    assert_eq!(h.transactions.count_for_owner(OWNER).unwrap(), 1);
}

#[tokio::test]
async fn resync_refreshes_mutable_fields_in_place() {
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(vec![raw("ext-1", "25.50", "Lunch at KFC Accra Mall")]),
    );
    h.service.sync_transactions(OWNER).await.unwrap();
    let original = h
        .transactions
        .find_by_external_id(OWNER, "ext-1")
        .unwrap()
        .unwrap();

    // Provider now reports the item as pending.
    let mut updated_raw = raw("ext-1", "25.50", "Lunch at KFC Accra Mall");
    updated_raw.status = "PENDING".to_string();
    h.provider.set_page(vec![updated_raw]);

    let outcome = h.service.sync_transactions(OWNER).await.unwrap();
    assert_eq!(outcome.updated, 1);

    let refreshed = h
        .transactions
        .find_by_external_id(OWNER, "ext-1")
        .unwrap()
        .unwrap();
    assert_eq!(refreshed.id, original.id);
    assert_eq!(refreshed.provider_status.as_deref(), Some("PENDING"));
    assert_eq!(refreshed.category_id, original.category_id);
}

#[tokio::test]
async fn repeated_runs_never_duplicate_categories() {
    let page = vec![
        raw("ext-1", "25.50", "Lunch at KFC Accra Mall"),
        raw("ext-2", "30.00", "Dinner at Papaye"),
    ];
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(page),
    );

    h.service.sync_transactions(OWNER).await.unwrap();
    h.service.sync_transactions(OWNER).await.unwrap();

    // Both candidates classify as food; one category serves them all.
    assert_eq!(h.categories.categories.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn audit_write_failure_is_swallowed() {
    let h = harness_with_logs(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(vec![raw("ext-1", "25.50", "Lunch at KFC Accra Mall")]),
        MemorySyncLogs::failing_finalize(),
    );

    let outcome = h.service.sync_transactions(OWNER).await.unwrap();
    assert_eq!(outcome.total, 1);
}

#[tokio::test]
async fn classified_transaction_carries_confidence_and_merchant() {
    let h = harness(
        MemoryAccounts::with_active_account(),
        ScriptedProvider::with_page(vec![raw("ext-1", "25.50", "Lunch at KFC Accra Mall")]),
    );
    h.service.sync_transactions(OWNER).await.unwrap();

    let row = h
        .transactions
        .find_by_external_id(OWNER, "ext-1")
        .unwrap()
        .unwrap();
    assert!(row.auto_categorized);
    assert!((40..=95).contains(&row.confidence));
    assert!(row.merchant_name.unwrap().contains("KFC"));
    assert!(row.sync_log_id.is_some());
}
