use crate::error::ApiError;
use crate::models::CompanyProfile;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Lookup of company details by id
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Find a company by id
    async fn find(&self, company_id: &str) -> Result<Option<CompanyProfile>, ApiError>;

    /// Store or replace a company
    async fn upsert(&self, company_id: String, profile: CompanyProfile) -> Result<(), ApiError>;
}

/// In-memory company storage, seeded from configuration
pub struct InMemoryDirectory {
    companies: Arc<RwLock<HashMap<String, CompanyProfile>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::from_map(HashMap::new())
    }

    pub fn from_map(companies: HashMap<String, CompanyProfile>) -> Self {
        Self {
            companies: Arc::new(RwLock::new(companies)),
        }
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyDirectory for InMemoryDirectory {
    async fn find(&self, company_id: &str) -> Result<Option<CompanyProfile>, ApiError> {
        let companies = self.companies.read().await;
        Ok(companies.get(company_id.trim()).cloned())
    }

    async fn upsert(&self, company_id: String, profile: CompanyProfile) -> Result<(), ApiError> {
        let mut companies = self.companies.write().await;
        companies.insert(company_id, profile);
        Ok(())
    }
}
