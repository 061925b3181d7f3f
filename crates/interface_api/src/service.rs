//! Dashboard response assembly
//!
//! The store cannot join, so every response is stitched together from
//! independent single-table lookups. Secondary rows that are missing are
//! replaced by placeholders instead of failing the request.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use core_kernel::{decode_row, ApplicationId, ClaimId, Filter, PortError, Random, RowStore, Table};
use domain_application::{Application, Vehicle};
use domain_claims::{Claim, Insurance};
use domain_risk::{assess_driver, assess_vehicle, mock_status};

use crate::dto::applications::{ApplicationDetailResponse, ApplicationSummaryResponse};
use crate::dto::claims::{ClaimDetailResponse, ClaimSummaryResponse, UNKNOWN};

/// Errors that can occur while assembling a response
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The primary row of the request does not exist
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Store error: {0}")]
    Store(#[from] PortError),
}

/// Assembles dashboard views from row store lookups
///
/// Cheap to clone; the store and random source are shared.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn RowStore>,
    random: Arc<dyn Random>,
}

impl DashboardService {
    /// Creates a service over `store`, drawing synthetic fields from `random`
    pub fn new(store: Arc<dyn RowStore>, random: Arc<dyn Random>) -> Self {
        Self { store, random }
    }

    /// The row store behind every lookup
    pub fn store(&self) -> &dyn RowStore {
        self.store.as_ref()
    }

    /// Fetches the first row matching `filter` and decodes it
    async fn lookup<T: DeserializeOwned>(
        &self,
        table: Table,
        filter: Filter,
    ) -> Result<Option<T>, PortError> {
        self.store
            .fetch_single(table, &filter)
            .await?
            .map(|row| decode_row(table, row))
            .transpose()
    }

    async fn insurance_of(&self, claim: &Claim) -> Result<Option<Insurance>, PortError> {
        match claim.insurance_id {
            Some(id) => self.lookup(Table::Insurances, Filter::eq("insurance_id", id)).await,
            None => Ok(None),
        }
    }

    async fn application_of(&self, claim: &Claim) -> Result<Option<Application>, PortError> {
        match claim.application_id {
            Some(id) => self.lookup(Table::Applications, Filter::eq("application_id", id)).await,
            None => Ok(None),
        }
    }

    /// Claim detail with its insurance and claimant
    ///
    /// # Errors
    ///
    /// `NotFound` if the claim does not exist; `Store` if any lookup fails.
    /// A missing insurance or application is not an error: the dependent
    /// fields read `"Unknown"`.
    pub async fn claim_detail(&self, id: ClaimId) -> Result<ClaimDetailResponse, AssemblyError> {
        let claim: Claim = self
            .lookup(Table::Claims, Filter::eq("id", id))
            .await?
            .ok_or(AssemblyError::NotFound("Claim not found"))?;

        let insurance = self.insurance_of(&claim).await?;
        let application = self.application_of(&claim).await?;

        if insurance.is_none() || application.is_none() {
            debug!(
                claim_id = %id,
                insurance_found = insurance.is_some(),
                application_found = application.is_some(),
                "Claim has unresolved references"
            );
        }

        let (insurance_type, insurance_end_date) = match insurance {
            Some(insurance) => (
                insurance.insurance_type.unwrap_or_else(|| UNKNOWN.to_string()),
                insurance.date_end.unwrap_or_else(|| UNKNOWN.to_string()),
            ),
            None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
        };

        Ok(ClaimDetailResponse {
            id: claim.id,
            insurance_id: claim.insurance_id,
            accident_description: claim.accident_description().to_string(),
            claim_type: claim.claim_type,
            insurance_type,
            insurance_end_date,
            claimant_name: application
                .map(|a| a.full_name())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        })
    }

    /// Every application with a placeholder review status
    ///
    /// Name and category come from a second lookup of the same table by id.
    /// An application whose second lookup finds nothing is left out.
    ///
    /// # Errors
    ///
    /// `Store` if any lookup fails.
    pub async fn list_applications(&self) -> Result<Vec<ApplicationSummaryResponse>, AssemblyError> {
        let rows = self.store.fetch_all(Table::Applications).await?;
        let mut summaries = Vec::with_capacity(rows.len());

        for row in rows {
            let listed: Application = decode_row(Table::Applications, row)?;
            let filter = Filter::eq("application_id", listed.application_id);

            let Some(customer) = self.lookup::<Application>(Table::Applications, filter).await? else {
                warn!(application_id = %listed.application_id, "Application vanished between lookups");
                continue;
            };

            summaries.push(ApplicationSummaryResponse {
                id: listed.application_id,
                name: customer.full_name(),
                category: customer.request_type,
                insurance_type: listed.insurance_type,
                status: mock_status(self.random.as_ref()),
            });
        }

        info!(count = summaries.len(), "Listed applications");
        Ok(summaries)
    }

    /// Application with vehicle and driver risk assessments
    ///
    /// # Errors
    ///
    /// `NotFound` if the application or its vehicle does not exist; `Store`
    /// if any lookup fails.
    pub async fn application_detail(
        &self,
        id: ApplicationId,
    ) -> Result<ApplicationDetailResponse, AssemblyError> {
        self.application_detail_in_year(id, Utc::now().year()).await
    }

    /// Same as [`Self::application_detail`], with vehicle ages computed
    /// against `current_year`
    pub async fn application_detail_in_year(
        &self,
        id: ApplicationId,
        current_year: i32,
    ) -> Result<ApplicationDetailResponse, AssemblyError> {
        let application: Application = self
            .lookup(Table::Applications, Filter::eq("application_id", id))
            .await?
            .ok_or(AssemblyError::NotFound("Application not found"))?;

        let vehicle: Vehicle = self
            .lookup(Table::Vehicles, Filter::eq("application_id", application.application_id))
            .await?
            .ok_or(AssemblyError::NotFound("Vehicle not found"))?;

        let random = self.random.as_ref();
        Ok(ApplicationDetailResponse {
            id: application.application_id,
            vehicle_risk_assessment: assess_vehicle(&vehicle, current_year, random),
            driver_risk_assessment: assess_driver(&application, random),
        })
    }

    /// Every claim whose application and insurance both resolve
    ///
    /// Claims that cannot be resolved, including those whose lookups fail,
    /// are logged and left out.
    ///
    /// # Errors
    ///
    /// `Store` only if the claims table itself cannot be read.
    pub async fn list_claims(&self) -> Result<Vec<ClaimSummaryResponse>, AssemblyError> {
        let rows = self.store.fetch_all(Table::Claims).await?;
        let total = rows.len();
        let mut summaries = Vec::with_capacity(total);

        for row in rows {
            let claim: Claim = match decode_row(Table::Claims, row) {
                Ok(claim) => claim,
                Err(e) => {
                    warn!(error = %e, "Skipping malformed claim row");
                    continue;
                }
            };

            match self.claim_summary(&claim).await {
                Ok(Some(summary)) => summaries.push(summary),
                Ok(None) => {
                    debug!(claim_id = %claim.id, "Skipping claim with unresolved references");
                }
                Err(e) => {
                    warn!(claim_id = %claim.id, error = %e, "Skipping claim after failed lookup");
                }
            }
        }

        info!(count = summaries.len(), skipped = total - summaries.len(), "Listed claims");
        Ok(summaries)
    }

    async fn claim_summary(&self, claim: &Claim) -> Result<Option<ClaimSummaryResponse>, PortError> {
        let application = self.application_of(claim).await?;
        let insurance = self.insurance_of(claim).await?;

        let (Some(application), Some(insurance)) = (application, insurance) else {
            return Ok(None);
        };

        Ok(Some(ClaimSummaryResponse {
            claim_id: claim.id,
            applicant_name: application.full_name(),
            claim_type: claim.claim_type.clone(),
            insurance_type: insurance
                .insurance_type
                .unwrap_or_else(|| UNKNOWN.to_string()),
            approval_status: claim.approval_status.clone(),
        }))
    }
}
