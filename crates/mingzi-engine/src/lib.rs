//! # mingzi-engine: candidate generation, scoring and diverse paging
//!
//! Turns a surname, an elemental profile and a handful of preferences into
//! ranked pages of Chinese given-name candidates, each with a score
//! breakdown and a six-part explanation.
//!
//! # Architecture
//!
//! ```text
//! GenerationRequest
//!     │
//!     ▼
//! generator.rs: build pools, run literary + combinatorial passes
//!     │            ├── validator.rs: admissibility, gender, homophones
//!     │            └── scorer.rs:    elemental / stroke / cultural / meaning
//!     │                    ├── numerology.rs: auspicious totals, three talents
//!     │                    └── explain.rs:    six narrative sections
//!     ▼
//! ranker.rs:    dedupe → stable sort → diversity fold → slice
//!     │
//!     ▼
//! Page
//! ```
//!
//! Everything is synchronous and allocation-local: a [`NamingEngine`] borrows
//! an immutable [`Dictionary`](mingzi_dict::Dictionary) and holds no state
//! between calls, so identical requests always yield identical pages.

pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod generator;
pub mod numerology;
pub mod profile;
pub mod ranker;
pub mod request;
pub mod scorer;
pub mod validator;

pub use candidate::{
    Explanation, NameCandidate, ScoreBreakdown, SourceRef, StrokeCounts, StrokeFigures, Tier,
};
pub use config::{Bonuses, ConfigError, EngineConfig};
pub use engine::{AssessRequest, NamingEngine, split_given_name};
pub use error::{HomophoneRejection, Rejection, ValidationRejection};
pub use generator::{Generator, Pools};
pub use profile::{DayMaster, ElementalProfile, Strength};
pub use ranker::{DiversityAccumulator, RankPolicy, rank_and_page};
pub use request::{GenerationRequest, NameLength, Page, SourcePreference};
pub use scorer::Scorer;
pub use validator::Validator;
