//! The design generation service contract

use gendesign_core::{DesignOption, DesignParameters, GenerationError};

/// Produces candidate designs for a set of parameters.
///
/// Implement [`DesignGenerator`] (the `Send` variant) so the call can run on
/// a spawned tokio task; [`LocalDesignGenerator`] is then provided by a
/// blanket impl.
#[trait_variant::make(DesignGenerator: Send)]
pub trait LocalDesignGenerator {
    /// One request, one attempt. No retries, no partial results.
    async fn generate(
        &self,
        params: &DesignParameters,
    ) -> Result<Vec<DesignOption>, GenerationError>;
}
