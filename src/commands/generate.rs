use crate::commands::Out;
use crate::generator::ItineraryGenerator;
use crate::model::{TripData, TripGenerationParams};
use crate::Result;

/// Asks `generator` for a new trip. Generator errors are returned without added context.
pub async fn generate(
    generator: &dyn ItineraryGenerator,
    params: &TripGenerationParams,
) -> Result<Out<TripData>> {
    let trip = generator.generate(params).await?;
    Ok(Out::new(
        format!("Generated '{}' with {} days", trip.title, trip.days.len()),
        trip,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{StaticGenerator, GENERATION_DISABLED};

    #[tokio::test]
    async fn test_generate_is_disabled() {
        let err = generate(&StaticGenerator, &TripGenerationParams::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), GENERATION_DISABLED);
    }
}
