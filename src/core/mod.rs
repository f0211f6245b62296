//! Core模块 - 包含所有毕业要求检查逻辑

pub mod models;
pub mod catalog;
pub mod aggregator;
pub mod evaluator;
pub mod checker;
pub mod planner;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod sim_integration_tests;
