//! Schema diffing for the factory/product count invariant
//!
//! A factory's constructor must declare exactly one parameter fewer than
//! the product's constructor: the product's leading parameter is the
//! factory handle itself, which the factory consumes internally and never
//! exposes to its callers.

use crate::schema::ConstructorSchema;

/// Errors from schema diffing
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Factory and product parameter counts disagree
    #[error(
        "{factory_owner} and {product_owner} constructors have an inconsistent \
         number of parameters ({factory_params} vs {product_params}); did you \
         add a parameter to one and not the other?"
    )]
    ParityMismatch {
        /// Type owning the factory constructor
        factory_owner: String,
        /// Type owning the product constructor
        product_owner: String,
        /// Declared factory parameter count
        factory_params: usize,
        /// Declared product parameter count
        product_params: usize,
    },
}

/// Check that `product.len() - 1 == factory.len()`
///
/// Guards against silent drift when a field is added to the product but
/// the factory is not updated, or vice versa.
///
/// # Errors
/// [`SchemaError::ParityMismatch`] with exact counts on disagreement.
pub fn check_count_parity(
    factory: &ConstructorSchema,
    product: &ConstructorSchema,
) -> Result<(), SchemaError> {
    // An empty product schema can never satisfy the invariant.
    if product.len().checked_sub(1) == Some(factory.len()) {
        return Ok(());
    }
    Err(SchemaError::ParityMismatch {
        factory_owner: factory.owner().to_string(),
        product_owner: product.owner().to_string(),
        factory_params: factory.len(),
        product_params: product.len(),
    })
}
