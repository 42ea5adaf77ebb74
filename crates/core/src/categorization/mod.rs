// Module declarations
pub(crate) mod catalog;
pub(crate) mod classifier;
pub(crate) mod merchant;

// Re-export the public interface
pub use catalog::{
    AmountRange, CategoryCatalog, CategoryDefinition, Direction, FallbackRule, FallbackRules,
    ScoringWeights,
};
pub use classifier::{Classification, ClassificationService};
pub use merchant::MerchantExtractor;
