//! Regime Routing
//!
//! Classifies a signal as normal or crisis by peak amplitude and bundles the
//! route with the energy and harmonic features.

mod pipeline;
mod router;

pub use pipeline::{PipelineOutput, RegimePipeline};
pub use router::{route, RouteLabel, Router, DEFAULT_THRESHOLD};
