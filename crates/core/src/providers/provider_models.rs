use serde::{Deserialize, Serialize};

/// One raw transaction as reported by the provider.
///
/// Transient: produced by the adapter and consumed within a single
/// orchestrator iteration, never persisted as-is. Amounts arrive as numeric
/// strings, exactly as the provider wire format carries them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderTransaction {
    /// Provider-assigned identifier, unique per provider. The dedup key.
    pub external_id: String,
    pub amount: String,
    pub currency: String,
    pub status: String,
    pub payer_info: String,
    /// Free text entered by the payer.
    pub payer_message: String,
    /// Free text attached for the payee.
    pub payee_note: String,
    pub financial_transaction_id: Option<String>,
}
