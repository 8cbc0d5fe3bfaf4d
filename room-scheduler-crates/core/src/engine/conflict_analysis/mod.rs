//! Contains the strategies which restore the search to a consistent state after it reached a
//! dead-end (an unassigned job without rooms left).
mod conflict_resolver;
pub(crate) mod resolvers;

pub(crate) use conflict_resolver::Backjump;
pub(crate) use conflict_resolver::ConflictResolver;
pub use conflict_resolver::ConflictResolverType;
