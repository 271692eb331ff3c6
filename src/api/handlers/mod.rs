//! Handler 模块

pub mod analysis_handler;
pub mod diary_handler;
pub mod label_handler;
