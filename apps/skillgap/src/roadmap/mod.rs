//! Learning roadmaps for missing skills: ranking, stream scheduling,
//! subtopic generation and optional resource enrichment.

pub mod builder;
pub mod distributor;
pub mod handlers;
pub mod ranking;
pub mod resources;
pub mod subtopics;
