//! 路由模块

pub mod analysis_routes;
pub mod diary_routes;
pub mod label_routes;
