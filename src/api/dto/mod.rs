//! DTO 模块
//!
//! 定义各接口的请求和响应数据结构。

pub mod analysis_dto;
pub mod diary_dto;
pub mod label_dto;
