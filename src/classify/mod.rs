// file: src/classify/mod.rs
// description: usefulness classifier boundary exports
// reference: internal module structure

pub mod logistic;

pub use logistic::{LogisticModel, UsefulnessClassifier};
