//! Account service that only pretends to create accounts

use super::traits::{AccountReceipt, AccountService, RegistrationRequest};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use uuid::Uuid;

/// Waits for a fixed delay, then always succeeds
#[derive(Debug, Clone)]
pub struct SimulatedAccountService {
    delay: Duration,
}

impl SimulatedAccountService {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedAccountService {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl AccountService for SimulatedAccountService {
    async fn register(&self, request: RegistrationRequest) -> Result<AccountReceipt> {
        tracing::debug!(
            username = %request.username,
            delay_ms = self.delay.as_millis() as u64,
            "Simulating account creation"
        );
        tokio::time::sleep(self.delay).await;

        Ok(AccountReceipt {
            account_id: Uuid::new_v4(),
            username: request.username,
            email: request.email,
            created_at: Utc::now(),
        })
    }
}
