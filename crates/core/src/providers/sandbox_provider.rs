use async_trait::async_trait;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::provider_models::RawProviderTransaction;
use super::provider_traits::{ProviderAdapter, ProviderError};
use crate::constants::DEFAULT_CURRENCY;

/// Placeholder candidate source standing in for a real provider API.
///
/// Returns one bounded page of plausible mobile-money transactions.
/// External ids are stable per (reference, slot) so repeated runs against
/// the sandbox exercise the insert-or-update path instead of growing the
/// ledger.
pub struct SandboxProvider {
    page_size: usize,
}

const SANDBOX_PAGE_SIZE: usize = 10;

// (payer message, payee note, amount range)
const TEMPLATES: &[(&str, &str, (f64, f64))] = &[
    ("Lunch at KFC Accra Mall", "Food", (15.0, 80.0)),
    ("Payment to Uber for ride", "", (8.0, 45.0)),
    ("MTN airtime topup", "Airtime", (1.0, 20.0)),
    ("ECG prepaid electricity", "Utilities", (30.0, 250.0)),
    ("Monthly salary deposit", "Salary", (1200.0, 4500.0)),
    ("Transfer from Kwame", "", (20.0, 400.0)),
    ("Shoprite groceries", "Groceries", (40.0, 350.0)),
    ("Payment to Melcom Accra", "Shopping", (25.0, 600.0)),
    ("DSTV subscription renewal", "TV", (40.0, 180.0)),
    ("Momo cashout fee", "", (0.5, 3.0)),
];

impl SandboxProvider {
    pub fn new() -> Self {
        Self {
            page_size: SANDBOX_PAGE_SIZE,
        }
    }
}

impl Default for SandboxProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for SandboxProvider {
    async fn initialize_session(&self) -> Result<(), ProviderError> {
        // The sandbox has no remote session to establish.
        Ok(())
    }

    async fn fetch_candidates(
        &self,
        provider_ref: &str,
        limit: usize,
    ) -> Result<Vec<RawProviderTransaction>, ProviderError> {
        let mut rng = rand::thread_rng();
        let count = self.page_size.min(limit);
        debug!("Sandbox provider generating {} candidates", count);

        let candidates = (0..count)
            .map(|slot| {
                let (message, note, (low, high)) = TEMPLATES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(TEMPLATES[0]);
                let amount: f64 = rng.gen_range(low..=high);

                RawProviderTransaction {
                    external_id: format!("sandbox-{}-{}", provider_ref, slot),
                    amount: format!("{:.2}", amount),
                    currency: DEFAULT_CURRENCY.to_string(),
                    status: "SUCCESSFUL".to_string(),
                    payer_info: provider_ref.to_string(),
                    payer_message: message.to_string(),
                    payee_note: note.to_string(),
                    financial_transaction_id: Some(format!("ft-{}", rng.gen::<u32>())),
                }
            })
            .collect();

        Ok(candidates)
    }
}
