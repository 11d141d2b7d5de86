//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │       Application        │
//!        │  OrderEvaluator, Keeper  │
//!        └────────────┬─────────────┘
//!                     │ port::outbound
//!                     ▼
//!        ┌──────────────────────────┐
//!        │   LimitSwapper adapter   │
//!        └──────────────────────────┘
//! ```

pub mod outbound;
