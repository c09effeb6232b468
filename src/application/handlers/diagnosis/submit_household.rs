//! SubmitHouseholdHandler - Command handler for the household profile step.

use std::sync::Arc;
use tracing::debug;

use crate::domain::diagnosis::{FloorAreaRange, HouseholdProfile, HouseholdSizeEstimator, SizeType};
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionStore;

/// Command to store the household profile.
#[derive(Debug, Clone)]
pub struct SubmitHouseholdCommand {
    pub session_id: SessionId,
    pub profile: HouseholdProfile,
}

/// Preview of the floor area implied by the submitted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitHouseholdResult {
    pub tsubo: FloorAreaRange,
    pub size_type: SizeType,
}

/// Handler for household submissions.
pub struct SubmitHouseholdHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitHouseholdHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitHouseholdCommand,
    ) -> Result<SubmitHouseholdResult, DomainError> {
        let mut session = self.store.load(&cmd.session_id).await?;

        let tsubo = HouseholdSizeEstimator::estimate(&cmd.profile);
        let size_type = HouseholdSizeEstimator::classify(tsubo.mid);

        session.set_household(cmd.profile)?;
        self.store.save(&session).await?;

        debug!(
            session_id = %cmd.session_id,
            tsubo_low = tsubo.low,
            tsubo_high = tsubo.high,
            size_type = %size_type,
            "Household recorded"
        );
        Ok(SubmitHouseholdResult { tsubo, size_type })
    }
}
