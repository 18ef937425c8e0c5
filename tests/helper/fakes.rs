use axum::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use seekho_backend_rust::models::{otp::OtpRecord, user::AccountRef};
use seekho_backend_rust::otp::{ConsumeOutcome, OtpStore};
use seekho_backend_rust::services::notifier::OtpNotifier;
use seekho_backend_rust::services::provisioner::{
    AccountProvisioner, ProvisionError, ProvisioningPayload,
};

/// In-memory replacement for the mongo backed store. The mutex around the
/// map gives the same per-email atomicity the database contract requires.
#[derive(Default)]
pub struct MemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl MemoryOtpStore {
    pub fn record(&self, email: &str) -> Option<OtpRecord> {
        self.records.lock().unwrap().get(email).cloned()
    }

    pub fn insert(&self, record: OtpRecord) {
        self.records
            .lock()
            .unwrap()
            .insert(record.email.clone(), record);
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, record: &OtpRecord) -> anyhow::Result<()> {
        self.insert(record.clone());
        Ok(())
    }

    async fn consume_if_valid(
        &self,
        email: &str,
        otp: &str,
        now: u64,
    ) -> anyhow::Result<ConsumeOutcome> {
        let mut records = self.records.lock().unwrap();
        let matched = records
            .get(email)
            .map(|record| record.otp == otp)
            .unwrap_or(false);
        let removed = if matched { records.remove(email) } else { None };
        Ok(ConsumeOutcome::classify(removed, now))
    }

    async fn delete(&self, email: &str) -> anyhow::Result<()> {
        self.records.lock().unwrap().remove(email);
        Ok(())
    }
}

/// Captures outbound otp emails instead of sending them, with a switch to
/// simulate delivery failures.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn last_otp(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _, _)| to == email)
            .map(|(_, otp, _)| otp.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl OtpNotifier for RecordingNotifier {
    async fn send(&self, email: &str, otp: &str, display_name: &str) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("email gateway down"));
        }
        self.sent.lock().unwrap().push((
            email.to_owned(),
            otp.to_owned(),
            display_name.to_owned(),
        ));
        Ok(())
    }
}

/// Identity store double keeping accounts in memory, duplicate emails are
/// rejected distinguishably like the real admin API.
#[derive(Default)]
pub struct FakeProvisioner {
    accounts: Mutex<HashMap<String, AccountRef>>,
}

impl FakeProvisioner {
    pub fn account(&self, email: &str) -> Option<AccountRef> {
        self.accounts.lock().unwrap().get(email).cloned()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountProvisioner for FakeProvisioner {
    async fn create_account(
        &self,
        email: &str,
        payload: &ProvisioningPayload,
    ) -> Result<AccountRef, ProvisionError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(ProvisionError::DuplicateEmail(email.to_owned()));
        }
        let account = AccountRef {
            id: format!("user-{}", accounts.len() + 1),
            email: email.to_owned(),
            full_name: payload.full_name.clone(),
            role: payload.role,
        };
        accounts.insert(email.to_owned(), account.clone());
        Ok(account)
    }
}
