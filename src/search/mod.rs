pub mod lifecycle;

#[cfg(test)]
mod lifecycle_test;

pub use lifecycle::{
    LifecycleState, SearchLifecycle, SearchQuery, SearchRequest, SearchResponse, ValidationError,
};
