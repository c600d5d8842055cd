// Resume analysis engine
// Pipeline: feature extraction → category scoring → decision selection,
// alongside skill matching, keyword ranking and recommendation lookup.

pub mod classifier;
pub mod engine;
pub mod features;
pub mod handlers;
pub mod keywords;
pub mod lexicon;
pub mod recommendations;
pub mod scoring;
pub mod selector;
pub mod skills;
