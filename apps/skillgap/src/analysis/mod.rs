//! End-to-end skill-gap analysis over one resume and one job description.

pub mod handlers;
pub mod pipeline;
