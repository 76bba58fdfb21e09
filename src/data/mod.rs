/// Data layer: core types, loading, and sampling.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Series>, equal-length numeric columns
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  reductions per column / column pair
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sample;
