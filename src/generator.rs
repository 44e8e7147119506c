//! The entry point for generating an itinerary from a short description of a trip. Generation is
//! not available in this build; the only implementation refuses every request.

use crate::model::{TripData, TripGenerationParams};
use crate::Result;
use anyhow::bail;
use async_trait::async_trait;
use tracing::debug;

pub const GENERATION_DISABLED: &str = "此版本為靜態瀏覽模式，不支援 AI 生成功能。";

/// Produces a complete trip from generation parameters.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(&self, params: &TripGenerationParams) -> Result<TripData>;
}

/// A generator that always fails immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticGenerator;

#[async_trait]
impl ItineraryGenerator for StaticGenerator {
    async fn generate(&self, params: &TripGenerationParams) -> Result<TripData> {
        debug!("Refusing to generate a trip to '{}'", params.destination);
        bail!(GENERATION_DISABLED)
    }
}
