// src/views/mod.rs
//! View state machines. Each owns its own loading/error/step state and
//! talks to the backend through `RecruitingApi`; nothing is shared between views.

pub mod candidate;
pub mod screening;
pub mod search;

pub use candidate::{CandidatePhase, CandidateView};
pub use screening::{ScreeningPhase, ScreeningSession, StepAction, StepMarker};
pub use search::{SearchPhase, SearchView};
