mod common;

use chrono::Utc;

use sikasync_core::accounts::{AccountKind, AccountRepositoryTrait, NewLinkedAccount};
use sikasync_core::categories::{CategoryRepositoryTrait, NewCategory};
use sikasync_core::categorization::Direction;
use sikasync_core::sync::{NewSyncLog, SyncLogRepositoryTrait, SyncStatus};
use sikasync_core::transactions::{NewTransaction, TransactionRepositoryTrait, TransactionUpdate};
use sikasync_storage_sqlite::accounts::AccountRepository;
use sikasync_storage_sqlite::categories::CategoryRepository;
use sikasync_storage_sqlite::sync_logs::SyncLogRepository;
use sikasync_storage_sqlite::transactions::TransactionRepository;

const OWNER: &str = "owner-1";
const SOURCE: &str = "mtn_momo";

fn new_account(reference: &str) -> NewLinkedAccount {
    NewLinkedAccount {
        owner_id: OWNER.to_string(),
        provider_ref: reference.to_string(),
        display_name: "Personal MoMo".to_string(),
        account_kind: AccountKind::MobileMoney,
        provider_source: SOURCE.to_string(),
    }
}

fn new_transaction(external_id: &str, category_id: &str) -> NewTransaction {
    NewTransaction {
        owner_id: OWNER.to_string(),
        amount: 25.5,
        direction: Direction::Expense,
        category_id: category_id.to_string(),
        transaction_date: Utc::now().naive_utc(),
        description: "Lunch at KFC Accra Mall".to_string(),
        merchant_name: Some("KFC".to_string()),
        external_id: external_id.to_string(),
        provider_ref: Some("+233241234567".to_string()),
        provider_status: Some("SUCCESSFUL".to_string()),
        provider_payer_info: Some("+233241234567".to_string()),
        financial_transaction_id: Some(format!("ft-{}", external_id)),
        auto_categorized: true,
        confidence: 90,
        sync_log_id: None,
    }
}

#[tokio::test]
async fn duplicate_active_link_hits_the_unique_index() {
    let (_dir, pool) = common::setup_db();
    let repo = AccountRepository::new(pool);

    repo.insert(new_account("+233241234567")).await.unwrap();
    let err = repo.insert(new_account("+233241234567")).await.unwrap_err();
    assert_eq!(err.code(), "ACCOUNT_ALREADY_LINKED");
}

#[tokio::test]
async fn relinking_after_deactivation_is_allowed() {
    let (_dir, pool) = common::setup_db();
    let repo = AccountRepository::new(pool);

    let first = repo.insert(new_account("+233241234567")).await.unwrap();
    let affected = repo.deactivate(OWNER, &first.id).await.unwrap();
    assert_eq!(affected, 1);

    let second = repo.insert(new_account("+233241234567")).await.unwrap();
    assert_ne!(first.id, second.id);

    let active = repo.list_active(OWNER, SOURCE).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);

    let all = repo.list(OWNER, SOURCE).unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn deactivating_twice_affects_no_rows() {
    let (_dir, pool) = common::setup_db();
    let repo = AccountRepository::new(pool);

    let account = repo.insert(new_account("+233241234567")).await.unwrap();
    assert_eq!(repo.deactivate(OWNER, &account.id).await.unwrap(), 1);
    assert_eq!(repo.deactivate(OWNER, &account.id).await.unwrap(), 0);
}

#[tokio::test]
async fn category_name_conflict_resolves_to_the_existing_row() {
    let (_dir, pool) = common::setup_db();
    let repo = CategoryRepository::new(pool);

    let first = repo
        .create(NewCategory {
            owner_id: Some(OWNER.to_string()),
            name: "Night Market".to_string(),
            icon: "tag".to_string(),
        })
        .await
        .unwrap();

    // Same normalized name, different casing.
    let second = repo
        .create(NewCategory {
            owner_id: Some(OWNER.to_string()),
            name: "night market".to_string(),
            icon: "tag".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Night Market");
}

#[tokio::test]
async fn seeded_system_categories_are_visible_to_every_owner() {
    let (_dir, pool) = common::setup_db();
    let repo = CategoryRepository::new(pool);

    let hit = repo.find_matching(OWNER, "Salary").unwrap().unwrap();
    assert_eq!(hit.owner_id, None);
    assert_eq!(hit.icon, "banknote");
}

#[tokio::test]
async fn owner_scoped_category_wins_over_a_system_one() {
    let (_dir, pool) = common::setup_db();
    let repo = CategoryRepository::new(pool);

    let owned = repo
        .create(NewCategory {
            owner_id: Some(OWNER.to_string()),
            name: "My Salary".to_string(),
            icon: "banknote".to_string(),
        })
        .await
        .unwrap();

    let hit = repo.find_matching(OWNER, "Salary").unwrap().unwrap();
    assert_eq!(hit.id, owned.id);
}

#[tokio::test]
async fn transaction_insert_converges_on_the_external_id() {
    let (_dir, pool) = common::setup_db();
    let repo = TransactionRepository::new(pool);

    let first = repo
        .insert(new_transaction("ext-1", "sys_other_expense"))
        .await
        .unwrap();

    // A second insert for the same external id lands on the same row.
    let mut duplicate = new_transaction("ext-1", "sys_other_expense");
    duplicate.provider_status = Some("PENDING".to_string());
    let second = repo.insert(duplicate).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.provider_status.as_deref(), Some("PENDING"));
    assert_eq!(repo.count_for_owner(OWNER).unwrap(), 1);
}

#[tokio::test]
async fn transaction_update_refreshes_only_mutable_fields() {
    let (_dir, pool) = common::setup_db();
    let repo = TransactionRepository::new(pool);

    let inserted = repo
        .insert(new_transaction("ext-1", "sys_other_expense"))
        .await
        .unwrap();

    let updated = repo
        .update(
            OWNER,
            "ext-1",
            TransactionUpdate {
                provider_status: Some("PENDING".to_string()),
                financial_transaction_id: None,
                category_id: "sys_fees_charges".to_string(),
                direction: Direction::Expense,
                confidence: 45,
                merchant_name: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.provider_status.as_deref(), Some("PENDING"));
    assert_eq!(updated.category_id, "sys_fees_charges");
    assert_eq!(updated.confidence, 45);
    // None clears the column.
    assert_eq!(updated.merchant_name, None);
    // Immutable fields survive untouched.
    assert_eq!(updated.description, inserted.description);
    assert_eq!(updated.external_id, inserted.external_id);
}

#[tokio::test]
async fn find_by_external_id_is_scoped_to_the_owner() {
    let (_dir, pool) = common::setup_db();
    let repo = TransactionRepository::new(pool);

    repo.insert(new_transaction("ext-1", "sys_other_expense"))
        .await
        .unwrap();

    assert!(repo.find_by_external_id(OWNER, "ext-1").unwrap().is_some());
    assert!(repo.find_by_external_id("owner-2", "ext-1").unwrap().is_none());
}

#[tokio::test]
async fn sync_log_finalize_is_one_shot() {
    let (_dir, pool) = common::setup_db();
    let accounts = AccountRepository::new(pool.clone());
    let logs = SyncLogRepository::new(pool);

    let account = accounts.insert(new_account("+233241234567")).await.unwrap();
    let log = logs
        .create(NewSyncLog {
            owner_id: OWNER.to_string(),
            account_id: account.id,
            sync_type: "TRANSACTIONS".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(log.status, SyncStatus::InProgress);

    logs.finalize(&log.id, SyncStatus::Success, 4, None)
        .await
        .unwrap();

    let finalized = logs.get(&log.id).unwrap().unwrap();
    assert_eq!(finalized.status, SyncStatus::Success);
    assert_eq!(finalized.transactions_synced, 4);
    assert!(finalized.completed_at.is_some());

    // A second terminal write is rejected.
    let err = logs
        .finalize(&log.id, SyncStatus::Failed, 0, Some("late".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "DATABASE_ERROR");

    let unchanged = logs.get(&log.id).unwrap().unwrap();
    assert_eq!(unchanged.status, SyncStatus::Success);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let (_dir, pool) = common::setup_db();
    sikasync_storage_sqlite::db::run_migrations(&pool).unwrap();
}
