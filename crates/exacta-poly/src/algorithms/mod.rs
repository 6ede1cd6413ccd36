//! Polynomial algorithms.
//!
//! This module contains:
//! - Polynomial long division
//! - Euclidean GCD, monic normalization and rational content
//! - Yun's squarefree decomposition

pub mod gcd;
pub mod squarefree;
