//! Student Academic Performance Predictor
//!
//! A machine learning-based tool for predicting a student's CGPA from
//! study-habit attributes.

pub mod commands;
pub mod report;
