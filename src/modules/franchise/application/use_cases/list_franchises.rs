use std::sync::Arc;

use crate::modules::franchise::domain::entities::Franchise;
use crate::modules::franchise::domain::repositories::FranchiseRepository;
use crate::shared::application::pagination::CursorPage;
use crate::shared::errors::AppResult;

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

pub struct ListFranchisesUseCase {
    repository: Arc<dyn FranchiseRepository>,
}

impl ListFranchisesUseCase {
    pub fn new(repository: Arc<dyn FranchiseRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        page_size: Option<u32>,
        cursor: Option<String>,
    ) -> AppResult<CursorPage<Franchise>> {
        let effective_size = match page_size {
            Some(size) if size >= 1 => size.min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        log::info!("Listing franchises, page size: {}", effective_size);
        self.repository.find_all(effective_size as usize, cursor).await
    }
}
